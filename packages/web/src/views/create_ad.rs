//! "Create ad" form. New adverts join the user's list as pending.

use api::validation::{validate_advert, MAX_DESCRIPTION_LEN, MAX_IMAGES, MAX_TITLE_LEN};
use api::{catalog, AdvertForm, Currency, FieldErrors};
use chrono::NaiveDate;
use dioxus::prelude::*;
use ui::components::{
    Alert, AlertKind, Button, ButtonVariant, Checkbox, FieldError, TextArea, TextField,
};
use ui::icons::FaXmark;
use ui::{today, use_auth, Icon};

use crate::{use_my_adverts, Route};

#[component]
pub fn CreateAd() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut my_ads = use_my_adverts();
    let mut form = use_signal(|| AdvertForm::for_user(auth.user().as_ref()));
    let mut errors = use_signal(FieldErrors::new);
    let mut image_url = use_signal(String::new);

    let err = errors();
    let error_for = |field: &str| err.first(field).map(str::to_string);
    let current = form();
    let title_len = current.title.chars().count();

    let mut add_image = move || {
        let url = image_url().trim().to_string();
        if url.is_empty() {
            return;
        }
        if form.peek().images.len() >= MAX_IMAGES {
            errors.with_mut(|e| {
                e.clear("images");
                e.add("images", format!("Maksimums {MAX_IMAGES} attēli"));
            });
            return;
        }
        form.with_mut(|f| f.images.push(url));
        image_url.set(String::new());
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let data = form();
        let found = validate_advert(&data);
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        let category = data
            .category_id
            .and_then(catalog::find_category)
            .map(|c| c.name)
            .unwrap_or_default();
        let id = my_ads.peek().iter().map(|ad| ad.id).max().unwrap_or(0) + 1;
        let advert = data.into_advert(id, &category, today());
        tracing::info!("created advert {} in {}", id, category);
        my_ads.with_mut(|ads| ads.push(advert));
        nav.push(Route::MyAds {});
    };

    rsx! {
        div { class: "create-ad",
            h1 { "Pievienot sludinājumu" }
            p { class: "muted", "Aizpildiet informāciju par savu sludinājumu. Pēc iesniegšanas tas tiks pārbaudīts." }

            if !err.is_empty() {
                Alert { kind: AlertKind::Error, message: "Lūdzu, izlabojiet kļūdas formā" }
            }

            form { onsubmit: on_submit, novalidate: true,
                fieldset {
                    legend { "Pamatinformācija" }
                    TextField {
                        name: "title",
                        label: "Nosaukums",
                        required: true,
                        placeholder: "Piemēram: Toyota Corolla 2020, laba stāvoklī",
                        value: current.title.clone(),
                        error: error_for("title"),
                        oninput: move |value| form.with_mut(|f| f.title = value),
                    }
                    p { class: "field__hint", "{title_len}/{MAX_TITLE_LEN}" }

                    div { class: "field",
                        label { class: "field__label", r#for: "category_id",
                            "Kategorija"
                            span { class: "field__required", " *" }
                        }
                        select {
                            id: "category_id",
                            name: "category_id",
                            class: "field__input",
                            value: current.category_id.map(|id| id.to_string()).unwrap_or_default(),
                            onchange: move |evt| form.with_mut(|f| f.category_id = evt.value().parse().ok()),
                            option { value: "", "Izvēlieties kategoriju" }
                            for main in catalog::main_categories() {
                                optgroup { key: "{main.id}", label: "{main.name}",
                                    option { value: "{main.id}", "{main.name}" }
                                    for sub in catalog::subcategories(main.id) {
                                        option { key: "{sub.id}", value: "{sub.id}", "{sub.name}" }
                                    }
                                }
                            }
                        }
                        FieldError { message: error_for("category_id") }
                    }

                    TextArea {
                        name: "description",
                        label: "Apraksts",
                        required: true,
                        rows: 6,
                        max_len: MAX_DESCRIPTION_LEN,
                        placeholder: "Aprakstiet savu preci vai pakalpojumu...",
                        value: current.description.clone(),
                        error: error_for("description"),
                        oninput: move |value| form.with_mut(|f| f.description = value),
                    }
                }

                fieldset {
                    legend { "Cena un atrašanās vieta" }
                    div { class: "field-row",
                        TextField {
                            name: "price",
                            label: "Cena",
                            kind: "text",
                            placeholder: "0",
                            value: current.price.clone(),
                            error: error_for("price"),
                            oninput: move |value| form.with_mut(|f| f.price = value),
                        }
                        div { class: "field",
                            label { class: "field__label", r#for: "currency", "Valūta" }
                            select {
                                id: "currency",
                                class: "field__input",
                                value: current.currency.code(),
                                onchange: move |evt| {
                                    if let Some(currency) = Currency::parse(&evt.value()) {
                                        form.with_mut(|f| f.currency = currency);
                                    }
                                },
                                for currency in Currency::ALL {
                                    option { value: currency.code(), "{currency.code()} ({currency.symbol()})" }
                                }
                            }
                        }
                    }
                    Checkbox {
                        name: "is_negotiable",
                        checked: current.is_negotiable,
                        onchange: move |checked| form.with_mut(|f| f.is_negotiable = checked),
                        "Cena ir runājama"
                    }
                    TextField {
                        name: "location",
                        label: "Atrašanās vieta",
                        required: true,
                        placeholder: "Piemēram: Rīga, Centrs",
                        value: current.location.clone(),
                        error: error_for("location"),
                        oninput: move |value| form.with_mut(|f| f.location = value),
                    }
                }

                fieldset {
                    legend { "Kontaktinformācija" }
                    TextField {
                        name: "contact_phone",
                        label: "Tālrunis",
                        kind: "tel",
                        value: current.contact_phone.clone(),
                        error: error_for("contact_phone"),
                        oninput: move |value| form.with_mut(|f| f.contact_phone = value),
                    }
                    TextField {
                        name: "contact_email",
                        label: "E-pasts",
                        kind: "email",
                        value: current.contact_email.clone(),
                        error: error_for("contact_email"),
                        oninput: move |value| form.with_mut(|f| f.contact_email = value),
                    }
                    TextField {
                        name: "expires_at",
                        label: "Derīgs līdz",
                        kind: "date",
                        value: current.expires_at.map(|d| d.to_string()).unwrap_or_default(),
                        oninput: move |value: String| {
                            form.with_mut(|f| f.expires_at = NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok());
                        },
                    }
                    p { class: "field__hint", "Ja nav norādīts, sludinājums būs aktīvs 30 dienas" }
                }

                fieldset {
                    legend { "Attēli" }
                    p { class: "field__hint", "Pievienojiet līdz {MAX_IMAGES} attēlu saitēm" }
                    div { class: "field-row",
                        input {
                            class: "field__input",
                            r#type: "url",
                            placeholder: "https://...",
                            value: "{image_url}",
                            oninput: move |evt| image_url.set(evt.value()),
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: current.images.len() >= MAX_IMAGES,
                            onclick: move |_| add_image(),
                            "Pievienot"
                        }
                    }
                    FieldError { message: error_for("images") }
                    div { class: "image-previews",
                        for (index, src) in current.images.iter().cloned().enumerate() {
                            div { key: "{index}", class: "image-preview",
                                img { src: "{src}", alt: "{src}" }
                                button {
                                    r#type: "button",
                                    class: "image-preview__remove",
                                    onclick: move |_| {
                                        form.with_mut(|f| {
                                            f.images.remove(index);
                                        });
                                        errors.with_mut(|e| e.clear("images"));
                                    },
                                    Icon { icon: FaXmark, width: 10, height: 10 }
                                }
                            }
                        }
                    }
                }

                div { class: "form-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            nav.go_back();
                        },
                        "Atcelt"
                    }
                    Button { r#type: "submit", "Publicēt sludinājumu" }
                }
            }
        }
    }
}
