//! Labelled inputs that show their field error underneath.

use dioxus::prelude::*;

#[component]
pub fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "field__error", "{message}" }
        },
        None => rsx! {},
    }
}

#[component]
pub fn TextField(
    name: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] placeholder: String,
    #[props(default)] autocomplete: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    #[props(default)] error: Option<String>,
    oninput: EventHandler<String>,
    onblur: Option<EventHandler<()>>,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        div { class: "field",
            label { class: "field__label", r#for: "{name}",
                "{label}"
                if required {
                    span { class: "field__required", " *" }
                }
            }
            input {
                id: "{name}",
                name: "{name}",
                class: if invalid { "field__input field__input--invalid" } else { "field__input" },
                r#type: "{kind}",
                value: "{value}",
                placeholder: "{placeholder}",
                autocomplete: "{autocomplete}",
                disabled,
                aria_invalid: invalid,
                oninput: move |evt| oninput.call(evt.value()),
                onblur: move |_| {
                    if let Some(handler) = onblur {
                        handler.call(());
                    }
                },
            }
            FieldError { message: error }
        }
    }
}

/// Multi-line input. With `max_len` set it shows a `used/max` counter.
#[component]
pub fn TextArea(
    name: String,
    label: String,
    value: String,
    #[props(default = 5)] rows: u32,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    #[props(default)] max_len: Option<usize>,
    #[props(default)] error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    let invalid = error.is_some();
    let used = value.chars().count();

    rsx! {
        div { class: "field",
            label { class: "field__label", r#for: "{name}",
                "{label}"
                if required {
                    span { class: "field__required", " *" }
                }
            }
            textarea {
                id: "{name}",
                name: "{name}",
                class: if invalid { "field__input field__input--invalid" } else { "field__input" },
                rows: "{rows}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
            if let Some(max) = max_len {
                p { class: "field__hint", "{used}/{max} simboli" }
            }
            FieldError { message: error }
        }
    }
}

#[component]
pub fn Checkbox(
    name: String,
    checked: bool,
    #[props(default)] error: Option<String>,
    onchange: EventHandler<bool>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "field field--checkbox",
            label { class: "field__check",
                input {
                    id: "{name}",
                    name: "{name}",
                    r#type: "checkbox",
                    checked,
                    onchange: move |evt| onchange.call(evt.checked()),
                }
                span { {children} }
            }
            FieldError { message: error }
        }
    }
}
