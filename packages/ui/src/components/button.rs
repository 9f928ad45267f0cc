use dioxus::prelude::*;

use super::Spinner;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn--primary",
            ButtonVariant::Secondary => "btn--secondary",
            ButtonVariant::Danger => "btn--danger",
            ButtonVariant::Ghost => "btn--ghost",
        }
    }
}

/// Button with variants. While `loading` it is disabled and shows a spinner.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] class: String,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let kind = r#type.clone();

    rsx! {
        button {
            class: "btn {variant.class()} {class}",
            r#type: kind,
            disabled: disabled || loading,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            if loading {
                Spinner {}
            }
            {children}
        }
    }
}
