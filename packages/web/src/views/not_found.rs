use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("no route for /{}", path);

    rsx! {
        div { class: "empty",
            h1 { "404" }
            p { "Lapa /{path} netika atrasta" }
            Link { to: Route::Home {}, class: "btn btn--primary", "Uz sākumlapu" }
        }
    }
}
