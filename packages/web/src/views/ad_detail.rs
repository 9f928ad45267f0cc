use api::listings::{format_date, format_price};
use api::{catalog, AdStatus};
use dioxus::prelude::*;
use ui::icons::{FaCalendar, FaEye, FaLocationDot, FaStar};
use ui::{today, use_auth, Icon, StatusBadge};

use crate::{use_my_adverts, Route};

#[component]
pub fn AdDetail(id: u64) -> Element {
    let auth = use_auth();
    let my_ads = use_my_adverts();

    // Adverts created in this session only exist in the user's list
    let own = my_ads.read().iter().find(|ad| ad.id == id).cloned();
    let Some(ad) = own.clone().or_else(|| catalog::find_advert(id)) else {
        return rsx! {
            div { class: "empty",
                h1 { "Sludinājums nav atrasts" }
                p { "Iespējams, tas ir dzēsts vai tā derīguma termiņš ir beidzies." }
                Link { to: Route::Home {}, "Atgriezties sākumlapā" }
            }
        };
    };

    let is_owner = auth.is_authenticated() && own.is_some();
    let price = format_price(ad.price, ad.currency);
    let featured = ad.is_featured_on(today());

    rsx! {
        article { class: "ad-detail",
            nav { class: "breadcrumbs",
                Link { to: Route::Home {}, "Sākums" }
                " / "
                span { "{ad.category}" }
            }

            div { class: "ad-detail__gallery",
                for (index, src) in ad.images.iter().enumerate() {
                    img { key: "{index}", src: "{src}", alt: "{ad.title}" }
                }
                if ad.images.is_empty() {
                    div { class: "ad-detail__no-image", "Nav attēlu" }
                }
            }

            div { class: "ad-detail__info",
                h1 { "{ad.title}" }
                if featured {
                    span { class: "ad-card__featured",
                        Icon { icon: FaStar, width: 12, height: 12 }
                        " Izcelts"
                    }
                }
                div { class: "ad-detail__price",
                    "{price}"
                    if ad.is_negotiable {
                        span { class: "ad-card__negotiable", " Cena runājama" }
                    }
                }
                if is_owner || ad.status != AdStatus::Active {
                    StatusBadge { status: ad.status }
                }
                ul { class: "ad-detail__facts",
                    li {
                        Icon { icon: FaLocationDot, width: 12, height: 12 }
                        " {ad.location}"
                    }
                    li {
                        Icon { icon: FaEye, width: 12, height: 12 }
                        " {ad.views_count} skatījumi"
                    }
                    li {
                        Icon { icon: FaCalendar, width: 12, height: 12 }
                        " Publicēts {format_date(ad.created_at)}, derīgs līdz {format_date(ad.expires_at)}"
                    }
                }
                h2 { "Apraksts" }
                p { class: "ad-detail__description", "{ad.description}" }

                if is_owner {
                    Link { to: Route::MyAds {}, class: "btn btn--secondary", "Pārvaldīt manus sludinājumus" }
                } else if !auth.is_authenticated() {
                    p { class: "muted",
                        Link { to: Route::Login {}, "Piesakieties" }
                        ", lai sazinātos ar pārdevēju"
                    }
                }
            }
        }
    }
}
