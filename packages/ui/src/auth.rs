//! Authentication context and hooks for the UI.
//!
//! [`SessionProvider`] puts an [`Auth`] handle in context. It wraps the
//! [`Session`], and its [`AuthState`] signal re-renders components when the
//! user logs in or out. Pages call [`use_auth`] and never touch the token.

use api::{ApiClient, ApiConfig, ApiError, FieldErrors, LoginData, RegisterData, Session, User};
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    /// Message of the last failed auth call.
    pub error: Option<String>,
    /// Field errors of the last failed auth call (422).
    pub validation_errors: FieldErrors,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// State after a failed call: the user (if any) survives, errors are set.
    pub fn failed(user: Option<User>, err: &ApiError) -> Self {
        Self {
            user,
            loading: false,
            error: Some(err.user_message()),
            validation_errors: err.field_errors(),
        }
    }
}

/// Handle to the session and its reactive state. Cheap to copy into closures.
#[derive(Clone, Copy, PartialEq)]
pub struct Auth {
    state: Signal<AuthState>,
    session: Signal<Session>,
    return_to: Signal<Option<String>>,
}

impl Auth {
    /// Current state; subscribes the calling component.
    pub fn state(&self) -> AuthState {
        self.state.cloned()
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn session(&self) -> Session {
        self.session.peek().clone()
    }

    /// Remember where a guarded page sent the user from.
    pub fn set_return_to(self, path: Option<String>) {
        let mut return_to = self.return_to;
        return_to.set(path);
    }

    /// Where to go after a successful login; `/` when nothing was remembered.
    pub fn take_return_to(self) -> String {
        let mut return_to = self.return_to;
        return_to.take().unwrap_or_else(|| "/".to_string())
    }

    fn begin(self) {
        let mut state = self.state;
        state.with_mut(|s| {
            s.loading = true;
            s.error = None;
            s.validation_errors = FieldErrors::new();
        });
    }

    fn finish(self, session: &Session, result: Result<User, ApiError>) -> Result<User, ApiError> {
        let mut state = self.state;
        match &result {
            Ok(user) => state.set(AuthState {
                user: Some(user.clone()),
                ..Default::default()
            }),
            Err(e) => state.set(AuthState::failed(session.user(), e)),
        }
        result
    }

    /// Copy the session's user into the reactive state.
    fn sync(self, session: &Session) {
        let mut state = self.state;
        let user = session.user();
        state.with_mut(|s| {
            s.user = user;
            s.loading = session.is_loading();
        });
    }

    pub async fn restore(self) {
        let session = self.session();
        session.restore().await;
        self.sync(&session);
    }

    pub async fn login(self, data: LoginData) -> Result<User, ApiError> {
        self.begin();
        let session = self.session();
        let result = session.login(&data).await;
        self.finish(&session, result)
    }

    pub async fn register(self, data: RegisterData) -> Result<User, ApiError> {
        self.begin();
        let session = self.session();
        let result = session.register(&data).await;
        self.finish(&session, result)
    }

    /// Fetch the user again. A 401 logs the user out.
    pub async fn reload(self) -> Result<User, ApiError> {
        let session = self.session();
        let result = session.reload().await;
        self.sync(&session);
        result
    }

    pub async fn logout(self) {
        let session = self.session();
        session.logout().await;
        let mut state = self.state;
        state.set(AuthState::default());
    }

    /// Report the outcome of any other backend call made with the session's
    /// client, so a 401 ends the session everywhere.
    pub fn observe(self, err: &ApiError) {
        let session = self.session();
        session.observe(err);
        self.sync(&session);
    }

    pub fn clear_errors(self) {
        let mut state = self.state;
        state.with_mut(|s| {
            s.error = None;
            s.validation_errors = FieldErrors::new();
        });
    }
}

/// Get the authentication handle.
pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

/// Build the session from the environment and the platform token store.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_hook(|| {
        ApiClient::new(ApiConfig::from_env(), store::default_token_store()).map(Session::new)
    });

    match session {
        Ok(session) => rsx! {
            SessionProvider { session, {children} }
        },
        Err(e) => {
            tracing::error!("failed to build API client: {}", e);
            rsx! {
                Alert { kind: AlertKind::Error, message: e.user_message() }
            }
        }
    }
}

/// Provide an existing session to the tree and restore it on mount.
#[component]
pub fn SessionProvider(session: Session, children: Element) -> Element {
    let state = use_signal(|| AuthState {
        loading: session.is_loading(),
        ..Default::default()
    });
    let session = use_signal(|| session);
    let return_to = use_signal(|| None);

    let auth = use_context_provider(|| Auth {
        state,
        session,
        return_to,
    });

    // Validate the stored token on mount
    let _ = use_resource(move || async move {
        auth.restore().await;
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Iziet".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "/".to_string())] redirect_to: String,
) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut busy = use_signal(|| false);

    let onclick = move |_| {
        let target = redirect_to.clone();
        async move {
            busy.set(true);
            auth.logout().await;
            busy.set(false);
            nav.replace(target);
        }
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: busy(),
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::sync::Arc;

    use dioxus::dioxus_core::VirtualDom;
    use store::MemoryTokenStore;

    use super::*;

    thread_local! {
        static SEEN: Cell<Option<(bool, bool)>> = const { Cell::new(None) };
    }

    #[component]
    fn Root(session: Session) -> Element {
        rsx! {
            SessionProvider { session, ContextCheck {} }
        }
    }

    #[component]
    fn ContextCheck() -> Element {
        let has_auth = try_consume_context::<Auth>().is_some();
        let has_session = try_consume_context::<Session>().is_some();
        SEEN.with(|seen| seen.set(Some((has_auth, has_session))));
        rsx! {}
    }

    #[test]
    fn test_provider_exposes_only_auth_handle() {
        let config = ApiConfig::new("http://127.0.0.1:9/api/v1");
        let client = ApiClient::new(config, Arc::new(MemoryTokenStore::new())).unwrap();
        let mut dom = VirtualDom::new_with_props(
            Root,
            RootProps {
                session: Session::new(client),
            },
        );
        dom.rebuild_in_place();

        assert_eq!(SEEN.with(Cell::get), Some((true, false)));
    }

    #[test]
    fn test_failed_state_keeps_user_and_errors() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Šis e-pasts jau ir reģistrēts");
        let err = ApiError::Validation {
            message: None,
            errors,
        };

        let state = AuthState::failed(None, &err);
        assert!(!state.is_authenticated());
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Pārbaudiet ievadītos datus"));
        assert_eq!(
            state.validation_errors.first("email"),
            Some("Šis e-pasts jau ir reģistrēts")
        );
    }

    #[test]
    fn test_failed_state_without_field_errors() {
        let state = AuthState::failed(None, &ApiError::TooManyRequests);
        assert!(state.validation_errors.is_empty());
        assert_eq!(
            state.error.as_deref(),
            Some("Pārāk daudz pieprasījumu. Lūdzu, mēģiniet vēlāk")
        );
    }
}
