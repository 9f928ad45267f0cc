//! Profile page: account details and password change.
//!
//! The backend has no profile endpoints yet, so both forms are validated and
//! then applied locally only.

use api::validation::{validate_password_change, validate_profile};
use api::{FieldErrors, PasswordChange, ProfileForm, User};
use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Button, ButtonVariant, TextField};
use ui::icons::{FaCircleCheck, FaCircleXmark};
use ui::{use_auth, Icon};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Details,
    Password,
}

#[derive(Debug, Clone, PartialEq)]
struct Notice {
    kind: AlertKind,
    text: String,
}

impl Notice {
    fn success(text: &str) -> Self {
        Self {
            kind: AlertKind::Success,
            text: text.to_string(),
        }
    }

    fn error(text: String) -> Self {
        Self {
            kind: AlertKind::Error,
            text,
        }
    }
}

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let mut tab = use_signal(|| Tab::Details);
    let mut notice = use_signal(|| Option::<Notice>::None);

    let Some(user) = auth.user() else {
        return rsx! {};
    };

    let avatar = initials(&user);

    let on_reload = move |_| async move {
        notice.set(None);
        match auth.reload().await {
            Ok(_) => notice.set(Some(Notice::success("Dati atjaunoti"))),
            Err(e) => notice.set(Some(Notice::error(e.user_message()))),
        }
    };

    rsx! {
        div { class: "profile",
            div { class: "profile__header",
                div { class: "profile__avatar", "{avatar}" }
                div {
                    h1 { "{user.display_name()}" }
                    p { class: "muted", "{user.email}" }
                    if let Some(role) = user.role_label() {
                        span { class: "badge badge--draft", "{role}" }
                    }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: on_reload,
                    "Atjaunot datus"
                }
            }

            if let Some(n) = notice() {
                Alert {
                    kind: n.kind,
                    message: n.text,
                    ondismiss: move |_| notice.set(None),
                }
            }

            div { class: "tabs",
                button {
                    class: if tab() == Tab::Details { "tabs__tab tabs__tab--active" } else { "tabs__tab" },
                    r#type: "button",
                    onclick: move |_| tab.set(Tab::Details),
                    "Profila informācija"
                }
                button {
                    class: if tab() == Tab::Password { "tabs__tab tabs__tab--active" } else { "tabs__tab" },
                    r#type: "button",
                    onclick: move |_| tab.set(Tab::Password),
                    "Mainīt paroli"
                }
            }

            if tab() == Tab::Details {
                DetailsTab { user: user.clone(), notice }
            } else {
                PasswordTab { notice }
            }
        }
    }
}

fn initials(user: &User) -> String {
    user.display_name()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
fn DetailsTab(user: User, notice: Signal<Option<Notice>>) -> Element {
    let mut saved = use_signal(|| ProfileForm::from_user(&user));
    let mut form = use_signal(|| saved());
    let mut editing = use_signal(|| false);
    let mut errors = use_signal(FieldErrors::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let data = form();
        let found = validate_profile(&data);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        tracing::info!("profile updated locally");
        saved.set(data);
        editing.set(false);
        notice.set(Some(Notice::success("Profils veiksmīgi atjaunināts!")));
    };

    let on_cancel = move |_| {
        form.set(saved());
        errors.set(FieldErrors::new());
        editing.set(false);
    };

    let err = errors();
    let current = saved();

    if !editing() {
        return rsx! {
            dl { class: "details",
                dt { "Vārds" }
                dd { "{current.name}" }
                dt { "E-pasts" }
                dd {
                    "{current.email} "
                    Verified { yes: user.is_email_verified() }
                }
                dt { "Tālrunis" }
                dd {
                    if current.phone.is_empty() {
                        span { class: "muted", "Nav norādīts" }
                    } else {
                        "{current.phone} "
                        Verified { yes: user.is_phone_verified() }
                    }
                }
            }
            Button { onclick: move |_| editing.set(true), "Rediģēt" }
        };
    }

    rsx! {
        form { onsubmit: on_submit, novalidate: true,
            TextField {
                name: "name",
                label: "Vārds",
                required: true,
                value: form.read().name.clone(),
                error: err.first("name").map(str::to_string),
                oninput: move |value| form.with_mut(|f| f.name = value),
            }
            TextField {
                name: "email",
                label: "E-pasta adrese",
                kind: "email",
                required: true,
                value: form.read().email.clone(),
                error: err.first("email").map(str::to_string),
                oninput: move |value| form.with_mut(|f| f.email = value),
            }
            TextField {
                name: "phone",
                label: "Tālrunis",
                kind: "tel",
                value: form.read().phone.clone(),
                error: err.first("phone").map(str::to_string),
                oninput: move |value| form.with_mut(|f| f.phone = value),
            }
            div { class: "form-actions",
                Button { variant: ButtonVariant::Ghost, onclick: on_cancel, "Atcelt" }
                Button { r#type: "submit", "Saglabāt" }
            }
        }
    }
}

#[component]
fn Verified(yes: bool) -> Element {
    if yes {
        rsx! {
            span { class: "verified verified--yes", title: "Apstiprināts",
                Icon { icon: FaCircleCheck, width: 12, height: 12 }
            }
        }
    } else {
        rsx! {
            span { class: "verified verified--no", title: "Nav apstiprināts",
                Icon { icon: FaCircleXmark, width: 12, height: 12 }
            }
        }
    }
}

#[component]
fn PasswordTab(notice: Signal<Option<Notice>>) -> Element {
    let mut form = use_signal(PasswordChange::default);
    let mut errors = use_signal(FieldErrors::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let found = validate_password_change(&form.peek());
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        form.set(PasswordChange::default());
        notice.set(Some(Notice::success("Parole veiksmīgi nomainīta!")));
    };

    let err = errors();

    rsx! {
        form { onsubmit: on_submit, novalidate: true,
            TextField {
                name: "current_password",
                label: "Pašreizējā parole",
                kind: "password",
                autocomplete: "current-password",
                required: true,
                value: form.read().current_password.clone(),
                error: err.first("current_password").map(str::to_string),
                oninput: move |value| form.with_mut(|f| f.current_password = value),
            }
            TextField {
                name: "password",
                label: "Jaunā parole",
                kind: "password",
                autocomplete: "new-password",
                required: true,
                value: form.read().password.clone(),
                error: err.first("password").map(str::to_string),
                oninput: move |value| form.with_mut(|f| f.password = value),
            }
            TextField {
                name: "password_confirmation",
                label: "Apstiprināt jauno paroli",
                kind: "password",
                autocomplete: "new-password",
                required: true,
                value: form.read().password_confirmation.clone(),
                error: err.first("password_confirmation").map(str::to_string),
                oninput: move |value| form.with_mut(|f| f.password_confirmation = value),
            }
            Button { r#type: "submit", "Mainīt paroli" }
        }
    }
}
