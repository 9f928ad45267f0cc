//! "My ads": statistics, filters and bulk management of the user's adverts.

use api::listings::{
    expiry_label, format_date, format_price, remove_ads, AdQuery, AdStats, SortBy, SortOrder,
};
use api::AdStatus;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::icons::{FaArrowDown, FaArrowUp, FaEye, FaLocationDot, FaPlus, FaTrash};
use ui::{today, Icon, StatusBadge};

use crate::{use_my_adverts, Route};

#[component]
pub fn MyAds() -> Element {
    let mut ads = use_my_adverts();
    let mut query = use_signal(AdQuery::default);
    let mut selected = use_signal(Vec::<u64>::new);
    let mut confirm_delete = use_signal(|| Option::<u64>::None);

    let day = today();
    let all = ads();
    let stats = AdStats::collect(&all, day);
    let visible = query.read().apply(&all);
    let current = query();

    let mut delete = move |ids: Vec<u64>| {
        let removed = ads.with_mut(|list| remove_ads(list, &ids));
        tracing::info!("removed {} adverts", removed);
        selected.with_mut(|s| s.retain(|id| !ids.contains(id)));
    };

    rsx! {
        div { class: "my-ads",
            div { class: "page-header",
                div {
                    h1 { "Mani sludinājumi" }
                    p { class: "muted", "Pārvaldiet savus sludinājumus un skatiet statistiku" }
                }
                Link { to: Route::CreateAd {}, class: "btn btn--primary",
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    " Pievienot sludinājumu"
                }
            }

            div { class: "stats",
                Stat { label: "Aktīvi", value: stats.active.to_string() }
                Stat { label: "Gaidīšanā", value: stats.pending.to_string() }
                Stat { label: "Kopējie skatījumi", value: stats.total_views.to_string() }
                Stat { label: "Izcelti", value: stats.featured.to_string() }
                Stat { label: "Drīz beigsies", value: stats.expiring_soon.to_string() }
            }

            div { class: "toolbar",
                input {
                    r#type: "search",
                    placeholder: "Meklēt sludinājumus...",
                    value: "{current.search}",
                    oninput: move |evt| query.with_mut(|q| q.search = evt.value()),
                }
                select {
                    value: current.status.map(|s| s.as_str()).unwrap_or("all"),
                    onchange: move |evt| query.with_mut(|q| q.status = AdStatus::parse(&evt.value())),
                    option { value: "all", "Visi statusi" }
                    for status in AdStatus::ALL {
                        option { value: status.as_str(), "{status.label()}" }
                    }
                }
                select {
                    value: current.sort_by.as_str(),
                    onchange: move |evt| {
                        if let Some(sort_by) = SortBy::parse(&evt.value()) {
                            query.with_mut(|q| q.sort_by = sort_by);
                        }
                    },
                    for choice in SortBy::ALL {
                        option { value: choice.as_str(), "{choice.label()}" }
                    }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| query.with_mut(|q| q.order = q.order.toggled()),
                    if current.order == SortOrder::Asc {
                        Icon { icon: FaArrowUp, width: 12, height: 12 }
                    } else {
                        Icon { icon: FaArrowDown, width: 12, height: 12 }
                    }
                }
            }

            if !selected().is_empty() {
                div { class: "bulk-bar",
                    span { "Izvēlēti {selected().len()} sludinājumi" }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| delete(selected()),
                        Icon { icon: FaTrash, width: 12, height: 12 }
                        " Dzēst izvēlētos"
                    }
                }
            }

            if visible.is_empty() {
                div { class: "empty",
                    p { "Nav atrasts neviens sludinājums" }
                    if all.is_empty() {
                        Link { to: Route::CreateAd {}, "Izveidojiet savu pirmo sludinājumu" }
                    }
                }
            } else {
                ul { class: "ad-list",
                    for (id, ad) in visible.into_iter().map(|ad| (ad.id, ad)) {
                        li { key: "{id}", class: "ad-row",
                            input {
                                r#type: "checkbox",
                                checked: selected().contains(&id),
                                onchange: move |evt| {
                                    selected.with_mut(|s| {
                                        if evt.checked() {
                                            if !s.contains(&id) {
                                                s.push(id);
                                            }
                                        } else {
                                            s.retain(|x| *x != id);
                                        }
                                    });
                                },
                            }
                            if let Some(src) = ad.thumbnail() {
                                img { class: "ad-row__thumb", src: "{src}", alt: "{ad.title}" }
                            } else {
                                div { class: "ad-row__thumb ad-row__thumb--empty" }
                            }
                            div { class: "ad-row__body",
                                Link { to: Route::AdDetail { id }, class: "ad-row__title", "{ad.title}" }
                                div { class: "ad-row__meta",
                                    StatusBadge { status: ad.status }
                                    span { class: "ad-row__price", "{format_price(ad.price, ad.currency)}" }
                                    span {
                                        Icon { icon: FaLocationDot, width: 12, height: 12 }
                                        " {ad.location}"
                                    }
                                    span {
                                        Icon { icon: FaEye, width: 12, height: 12 }
                                        " {ad.views_count} skatījumi"
                                    }
                                }
                                div { class: "ad-row__meta muted",
                                    span { "Izveidots: {format_date(ad.created_at)}" }
                                    span { "{expiry_label(ad.expires_at, day)}" }
                                }
                            }
                            if confirm_delete() == Some(id) {
                                div { class: "ad-row__confirm",
                                    span { "Dzēst šo sludinājumu?" }
                                    Button {
                                        variant: ButtonVariant::Danger,
                                        onclick: move |_| {
                                            delete(vec![id]);
                                            confirm_delete.set(None);
                                        },
                                        "Dzēst"
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: move |_| confirm_delete.set(None),
                                        "Atcelt"
                                    }
                                }
                            } else {
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    onclick: move |_| confirm_delete.set(Some(id)),
                                    Icon { icon: FaTrash, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Stat(label: String, value: String) -> Element {
    rsx! {
        div { class: "stat",
            dt { "{label}" }
            dd { "{value}" }
        }
    }
}
