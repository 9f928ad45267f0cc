//! Browse page: category tree on the left, matching active adverts on the right.

use api::listings::{AdQuery, SortBy, SortOrder};
use api::{catalog, AdStatus};
use dioxus::prelude::*;
use ui::AdCard;

use super::CategoryIcon;
use crate::Route;

#[component]
pub fn Categories(q: String, category: String) -> Element {
    let nav = use_navigator();
    let mut search = use_signal(|| q.clone());
    let mut sort_by = use_signal(SortBy::default);

    let title = catalog::find_category_by_slug(&category)
        .map(|c| c.name)
        .unwrap_or_else(|| "Visi sludinājumi".to_string());
    let query = AdQuery {
        search: q.clone(),
        status: Some(AdStatus::Active),
        sort_by: sort_by(),
        order: SortOrder::Desc,
    };
    let ads: Vec<_> = query
        .apply(&catalog::all_ads())
        .into_iter()
        .filter(|ad| category.is_empty() || catalog::in_category(ad, &category))
        .collect();

    let filter_slug = category.clone();
    let on_search = move |evt: FormEvent| {
        evt.prevent_default();
        nav.replace(Route::Categories {
            q: search().trim().to_string(),
            category: filter_slug.clone(),
        });
    };

    rsx! {
        div { class: "browse",
            aside { class: "browse__tree",
                h2 { "Kategorijas" }
                Link {
                    class: if category.is_empty() { "tree__item tree__item--active" } else { "tree__item" },
                    to: Route::Categories { q: q.clone(), category: String::new() },
                    "Visas kategorijas"
                }
                for main in catalog::main_categories() {
                    div { key: "{main.id}", class: "tree__group",
                        Link {
                            class: if main.slug == category { "tree__item tree__item--active" } else { "tree__item" },
                            to: Route::Categories { q: q.clone(), category: main.slug.clone() },
                            CategoryIcon { slug: main.slug.clone(), size: 16 }
                            span { " {main.name}" }
                            if let Some(count) = main.count {
                                span { class: "tree__count", "{count}" }
                            }
                        }
                        for sub in catalog::subcategories(main.id) {
                            Link {
                                key: "{sub.id}",
                                class: if sub.slug == category { "tree__sub tree__item--active" } else { "tree__sub" },
                                to: Route::Categories { q: q.clone(), category: sub.slug.clone() },
                                "{sub.name}"
                            }
                        }
                    }
                }
            }

            section { class: "browse__results",
                h1 { "{title}" }
                form { class: "toolbar", onsubmit: on_search,
                    input {
                        r#type: "search",
                        placeholder: "Meklēt sludinājumus...",
                        value: "{search}",
                        oninput: move |evt| search.set(evt.value()),
                    }
                    select {
                        value: sort_by().as_str(),
                        onchange: move |evt| {
                            if let Some(s) = SortBy::parse(&evt.value()) {
                                sort_by.set(s);
                            }
                        },
                        for choice in SortBy::ALL {
                            option { value: choice.as_str(), "{choice.label()}" }
                        }
                    }
                }
                if ads.is_empty() {
                    p { class: "empty", "Nav atrasts neviens sludinājums" }
                } else {
                    p { class: "muted", "Atrasti {ads.len()} sludinājumi" }
                    div { class: "ad-grid",
                        for ad in ads {
                            AdCard { key: "{ad.id}", ad }
                        }
                    }
                }
            }
        }
    }
}
