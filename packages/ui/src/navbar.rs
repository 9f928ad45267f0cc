use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::icons::{FaPlus, FaStore, FaUser};
use crate::Icon;

/// Top navigation. Links depend on whether somebody is signed in.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let state = auth.state();
    let mut menu_open = use_signal(|| false);

    rsx! {
        nav { class: "navbar",
            div { class: "navbar__brand",
                Link { to: "/", class: "navbar__logo",
                    Icon { icon: FaStore, width: 20, height: 20 }
                    span { "Tirgus" }
                }
                Link { to: "/", class: "navbar__link", "Sākums" }
                Link { to: "/categories", class: "navbar__link", "Kategorijas" }
            }

            div { class: "navbar__actions",
                if state.loading {
                    span { class: "navbar__placeholder" }
                } else if let Some(user) = state.user {
                    Link { to: "/create-ad", class: "btn btn--primary",
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        span { "Pievienot sludinājumu" }
                    }
                    div { class: "navbar__user",
                        button {
                            class: "navbar__user-toggle",
                            r#type: "button",
                            onclick: move |_| menu_open.toggle(),
                            Icon { icon: FaUser, width: 14, height: 14 }
                            span { "{user.display_name()}" }
                        }
                        if menu_open() {
                            div {
                                class: "navbar__menu",
                                onclick: move |_| menu_open.set(false),
                                Link { to: "/profile", class: "navbar__menu-item", "Mans profils" }
                                Link { to: "/my-ads", class: "navbar__menu-item", "Mani sludinājumi" }
                                LogoutButton { class: "navbar__menu-item navbar__menu-item--danger" }
                            }
                        }
                    }
                } else {
                    Link { to: "/login", class: "navbar__link", "Pieteikties" }
                    Link { to: "/register", class: "btn btn--primary", "Reģistrēties" }
                }
            }
        }
    }
}
