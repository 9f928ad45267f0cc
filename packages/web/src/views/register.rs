//! Registration page view with the full account form.

use api::validation::validate_register;
use api::{FieldErrors, RegisterData};
use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Button, Checkbox, TextField};
use ui::{use_auth, GuestOnly};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    rsx! {
        GuestOnly {
            RegisterForm {}
        }
    }
}

#[component]
fn RegisterForm() -> Element {
    let auth = use_auth();
    let mut form = use_signal(RegisterData::default);
    let mut phone = use_signal(String::new);
    let mut client_errors = use_signal(FieldErrors::new);

    use_hook(move || auth.clear_errors());

    let state = auth.state();
    let mut errors = client_errors();
    errors.merge(&state.validation_errors);
    let error_for = |field: &str| errors.first(field).map(str::to_string);

    let snapshot = move || RegisterData {
        phone: Some(phone.peek().clone()),
        ..form.peek().clone()
    };

    let mut touch = move |field: &'static str| {
        let fresh = validate_register(&snapshot());
        client_errors.with_mut(|e| e.revalidate(field, &fresh));
    };

    let mut edit = move |field: &'static str| {
        client_errors.with_mut(|e| e.clear(field));
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let data = snapshot();
        let found = validate_register(&data);
        if !found.is_empty() {
            client_errors.set(found);
            return;
        }
        client_errors.set(FieldErrors::new());
        spawn(async move {
            if let Err(e) = auth.register(data).await {
                tracing::debug!("registration rejected: {}", e);
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "Reģistrēties" }
                p { class: "muted",
                    "Jau ir konts? "
                    Link { to: Route::Login {}, "Pieteikties" }
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
                        name: "name",
                        label: "Vārds, uzvārds",
                        autocomplete: "name",
                        required: true,
                        value: form.read().name.clone(),
                        error: error_for("name"),
                        oninput: move |value| {
                            form.with_mut(|f| f.name = value);
                            edit("name");
                        },
                        onblur: move |_| touch("name"),
                    }
                    TextField {
                        name: "email",
                        label: "E-pasta adrese",
                        kind: "email",
                        autocomplete: "email",
                        required: true,
                        value: form.read().email.clone(),
                        error: error_for("email"),
                        oninput: move |value| {
                            form.with_mut(|f| f.email = value);
                            edit("email");
                        },
                        onblur: move |_| touch("email"),
                    }
                    TextField {
                        name: "phone",
                        label: "Tālrunis",
                        kind: "tel",
                        autocomplete: "tel",
                        placeholder: "+371 20000000",
                        value: phone(),
                        error: error_for("phone"),
                        oninput: move |value| {
                            phone.set(value);
                            edit("phone");
                        },
                        onblur: move |_| touch("phone"),
                    }
                    TextField {
                        name: "password",
                        label: "Parole",
                        kind: "password",
                        autocomplete: "new-password",
                        required: true,
                        value: form.read().password.clone(),
                        error: error_for("password"),
                        oninput: move |value| {
                            form.with_mut(|f| f.password = value);
                            edit("password");
                        },
                        onblur: move |_| touch("password"),
                    }
                    TextField {
                        name: "password_confirmation",
                        label: "Apstiprināt paroli",
                        kind: "password",
                        autocomplete: "new-password",
                        required: true,
                        value: form.read().password_confirmation.clone(),
                        error: error_for("password_confirmation"),
                        oninput: move |value| {
                            form.with_mut(|f| f.password_confirmation = value);
                            edit("password_confirmation");
                        },
                        onblur: move |_| touch("password_confirmation"),
                    }
                    Checkbox {
                        name: "terms_accepted",
                        checked: form.read().terms_accepted,
                        error: error_for("terms_accepted"),
                        onchange: move |checked| {
                            form.with_mut(|f| f.terms_accepted = checked);
                            edit("terms_accepted");
                        },
                        "Piekrītu lietošanas noteikumiem un privātuma politikai"
                    }
                    Button {
                        r#type: "submit",
                        class: "btn--block",
                        loading: state.loading,
                        if state.loading { "Reģistrējas..." } else { "Izveidot kontu" }
                    }
                }
            }
        }
    }
}
