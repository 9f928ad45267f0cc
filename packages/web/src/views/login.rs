//! Login page view with email/password form.

use api::validation::validate_login;
use api::{FieldErrors, LoginData};
use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Button, Checkbox, TextField};
use ui::{use_auth, GuestOnly};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    rsx! {
        GuestOnly {
            LoginForm {}
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let auth = use_auth();
    let mut form = use_signal(LoginData::default);
    let mut client_errors = use_signal(FieldErrors::new);

    // Errors of a previous page must not show up here
    use_hook(move || auth.clear_errors());

    let state = auth.state();
    let mut errors = client_errors();
    errors.merge(&state.validation_errors);

    let mut touch = move |field: &'static str| {
        let fresh = validate_login(&form.peek());
        client_errors.with_mut(|e| e.revalidate(field, &fresh));
    };

    let mut edit = move |field: &'static str| {
        client_errors.with_mut(|e| e.clear(field));
        if state_has_errors(auth.state()) {
            auth.clear_errors();
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let data = form();
        let found = validate_login(&data);
        if !found.is_empty() {
            client_errors.set(found);
            return;
        }
        client_errors.set(FieldErrors::new());
        spawn(async move {
            if let Err(e) = auth.login(data).await {
                tracing::debug!("login rejected: {}", e);
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "Pieteikties" }
                p { class: "muted",
                    "Vai arī "
                    Link { to: Route::Register {}, "izveidojiet jaunu kontu" }
                }

                if let Some(message) = state.error.clone() {
                    Alert {
                        kind: AlertKind::Error,
                        message,
                        ondismiss: move |_| auth.clear_errors(),
                    }
                }

                form { onsubmit: on_submit, novalidate: true,
                    TextField {
                        name: "email",
                        label: "E-pasta adrese",
                        kind: "email",
                        autocomplete: "email",
                        required: true,
                        value: form.read().email.clone(),
                        error: errors.first("email").map(str::to_string),
                        oninput: move |value| {
                            form.with_mut(|f| f.email = value);
                            edit("email");
                        },
                        onblur: move |_| touch("email"),
                    }
                    TextField {
                        name: "password",
                        label: "Parole",
                        kind: "password",
                        autocomplete: "current-password",
                        required: true,
                        value: form.read().password.clone(),
                        error: errors.first("password").map(str::to_string),
                        oninput: move |value| {
                            form.with_mut(|f| f.password = value);
                            edit("password");
                        },
                        onblur: move |_| touch("password"),
                    }
                    Checkbox {
                        name: "remember",
                        checked: form.read().remember,
                        onchange: move |checked| form.with_mut(|f| f.remember = checked),
                        "Atcerēties mani"
                    }
                    Button {
                        r#type: "submit",
                        class: "btn--block",
                        loading: state.loading,
                        if state.loading { "Piesakās..." } else { "Pieteikties" }
                    }
                }
            }
        }
    }
}

fn state_has_errors(state: ui::AuthState) -> bool {
    state.error.is_some() || !state.validation_errors.is_empty()
}
