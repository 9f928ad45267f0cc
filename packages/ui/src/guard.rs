//! Route guards. They only read [`Auth`](crate::Auth); the router owns the
//! actual navigation.

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::Spinner;

/// Render `children` for signed-in users. Anyone else is sent to
/// `redirect_to`, remembering `from` so login can return there.
#[component]
pub fn ProtectedRoute(
    #[props(default = "/login".to_string())] redirect_to: String,
    #[props(default)] from: Option<String>,
    children: Element,
) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth.state();

    use_effect(use_reactive!(|(redirect_to, from)| {
        let state = auth.state();
        if !state.loading && !state.is_authenticated() {
            tracing::debug!("unauthenticated, redirecting to {}", redirect_to);
            auth.set_return_to(from);
            nav.replace(redirect_to);
        }
    }));

    if state.loading {
        return rsx! {
            div { class: "page-loading",
                Spinner { label: "Ielādē..." }
            }
        };
    }

    if state.is_authenticated() {
        rsx! { {children} }
    } else {
        rsx! {}
    }
}

/// Render `children` only for anonymous users (login, register). Signed-in
/// users go to the remembered page, or `/`.
#[component]
pub fn GuestOnly(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth.state();

    use_effect(move || {
        if auth.is_authenticated() {
            let target = auth.take_return_to();
            nav.replace(target);
        }
    });

    if state.is_authenticated() {
        rsx! {}
    } else {
        rsx! { {children} }
    }
}
