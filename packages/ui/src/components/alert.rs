use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleInfo, FaTriangleExclamation, FaXmark};
use crate::Icon;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    #[default]
    Error,
    Info,
}

impl AlertKind {
    fn modifier(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert--success",
            AlertKind::Error => "alert--error",
            AlertKind::Info => "alert--info",
        }
    }
}

/// A banner message. Dismissible when `ondismiss` is set.
#[component]
pub fn Alert(
    #[props(default)] kind: AlertKind,
    message: String,
    ondismiss: Option<EventHandler<()>>,
) -> Element {
    let icon = match kind {
        AlertKind::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
        AlertKind::Error => rsx! { Icon { icon: FaTriangleExclamation, width: 16, height: 16 } },
        AlertKind::Info => rsx! { Icon { icon: FaCircleInfo, width: 16, height: 16 } },
    };

    rsx! {
        div {
            class: "alert {kind.modifier()}",
            role: "alert",
            {icon}
            span { class: "alert__message", "{message}" }
            if let Some(handler) = ondismiss {
                button {
                    class: "alert__close",
                    r#type: "button",
                    aria_label: "Aizvērt",
                    onclick: move |_| handler.call(()),
                    Icon { icon: FaXmark, width: 12, height: 12 }
                }
            }
        }
    }
}
