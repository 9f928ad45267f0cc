use dioxus::prelude::*;

use crate::icons::FaSpinner;
use crate::Icon;

#[component]
pub fn Spinner(#[props(default)] label: Option<String>) -> Element {
    rsx! {
        span {
            class: "spinner",
            role: "status",
            Icon { icon: FaSpinner, width: 16, height: 16, class: "spinner__icon" }
            if let Some(label) = label {
                span { class: "spinner__label", "{label}" }
            }
        }
    }
}
