//! Landing page: search, category tiles, featured and latest adverts.

use api::catalog;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::icons::FaMagnifyingGlass;
use ui::{use_auth, AdCard, Icon};

use super::CategoryIcon;
use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut search = use_signal(String::new);

    let categories = catalog::main_categories();
    let featured = catalog::featured_ads();
    let latest = catalog::latest_ads();

    let on_search = move |evt: FormEvent| {
        evt.prevent_default();
        let query = search().trim().to_string();
        nav.push(Route::Categories {
            q: query,
            category: String::new(),
        });
    };

    rsx! {
        section { class: "hero",
            h1 { "Atrodi visu, ko meklē" }
            p { "Tūkstošiem sludinājumu visā Latvijā" }
            form { class: "hero__search", onsubmit: on_search,
                Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                input {
                    r#type: "search",
                    placeholder: "Meklēt sludinājumus...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
                Button { r#type: "submit", "Meklēt" }
            }
        }

        section { class: "section",
            h2 { "Kategorijas" }
            div { class: "category-grid",
                for category in categories {
                    Link {
                        key: "{category.id}",
                        class: "category-tile",
                        to: Route::Categories {
                            q: String::new(),
                            category: category.slug.clone(),
                        },
                        CategoryIcon { slug: category.slug.clone() }
                        h3 { "{category.name}" }
                        if let Some(count) = category.count {
                            p { "{count} sludinājumi" }
                        }
                    }
                }
            }
        }

        section { class: "section",
            div { class: "section__header",
                h2 { "Izceltie sludinājumi" }
                Link {
                    to: Route::Categories {
                        q: String::new(),
                        category: String::new(),
                    },
                    "Skatīt visus"
                }
            }
            div { class: "ad-grid",
                for ad in featured {
                    AdCard { key: "{ad.id}", ad, featured: true }
                }
            }
        }

        section { class: "section",
            h2 { "Jaunākie sludinājumi" }
            div { class: "ad-grid",
                for ad in latest {
                    AdCard { key: "{ad.id}", ad }
                }
            }
        }

        section { class: "cta",
            h2 { "Vai tev ir kaut kas, ko pārdot?" }
            p { "Pievieno sludinājumu dažu minūšu laikā." }
            if auth.is_authenticated() {
                Link { to: Route::CreateAd {}, class: "btn btn--primary", "Pievienot sludinājumu" }
            } else {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        nav.push(Route::Register {});
                    },
                    "Reģistrēties bez maksas"
                }
            }
        }
    }
}
