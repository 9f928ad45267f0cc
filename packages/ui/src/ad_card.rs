use api::listings::format_price;
use api::{AdStatus, Advert};
use dioxus::prelude::*;

use crate::icons::{FaEye, FaImage, FaLocationDot, FaStar};
use crate::Icon;

#[component]
pub fn StatusBadge(status: AdStatus) -> Element {
    rsx! {
        span { class: "badge badge--{status.as_str()}", "{status.label()}" }
    }
}

/// Advert summary linking to its detail page.
#[component]
pub fn AdCard(
    ad: Advert,
    #[props(default)] show_status: bool,
    #[props(default)] featured: bool,
) -> Element {
    let price = format_price(ad.price, ad.currency);
    let href = format!("/ads/{}", ad.id);

    rsx! {
        Link { to: href, class: "ad-card",
            div { class: "ad-card__media",
                if let Some(src) = ad.thumbnail() {
                    img { src: "{src}", alt: "{ad.title}", loading: "lazy" }
                } else {
                    div { class: "ad-card__no-image",
                        Icon { icon: FaImage, width: 32, height: 32 }
                    }
                }
                if featured {
                    span { class: "ad-card__featured",
                        Icon { icon: FaStar, width: 12, height: 12 }
                        " Izcelts"
                    }
                }
            }
            div { class: "ad-card__body",
                span { class: "ad-card__category", "{ad.category}" }
                h3 { class: "ad-card__title", "{ad.title}" }
                div { class: "ad-card__price",
                    "{price}"
                    if ad.is_negotiable {
                        span { class: "ad-card__negotiable", " Cena runājama" }
                    }
                }
                div { class: "ad-card__meta",
                    span {
                        Icon { icon: FaLocationDot, width: 12, height: 12 }
                        " {ad.location}"
                    }
                    span {
                        Icon { icon: FaEye, width: 12, height: 12 }
                        " {ad.views_count}"
                    }
                }
                if show_status {
                    StatusBadge { status: ad.status }
                }
            }
        }
    }
}
