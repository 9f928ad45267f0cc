//! # Authentication session
//!
//! [`Session`] owns the client-side authentication lifecycle: restoring a
//! persisted token on start-up, login, registration, logout and token refresh.
//! It is cheap to clone; every clone shares the same state.
//!
//! ## States
//!
//! | State | Meaning |
//! |-------|---------|
//! | `Restoring` | a stored token is being checked against `GET /me` |
//! | `Anonymous` | no valid token |
//! | `Authenticated(User)` | a token is stored and the backend accepted it |
//!
//! `Authenticated` is only entered after the token has been written to the
//! store, and [`Session::state`] falls back to `Anonymous` whenever the store
//! has been emptied underneath it (for example by a 401 on another call).

use std::sync::{Arc, RwLock};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginData, RegisterData, User};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Restoring,
    Anonymous,
    Authenticated(User),
}

#[derive(Debug, Clone)]
pub struct Session {
    client: ApiClient,
    state: Arc<RwLock<SessionState>>,
}

/// Two handles are equal when they share the same state.
impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl Session {
    /// Create a session. It starts in `Restoring` when a token is stored,
    /// `Anonymous` otherwise; call [`Session::restore`] to settle it.
    pub fn new(client: ApiClient) -> Self {
        let initial = if client.tokens().has_token() {
            SessionState::Restoring
        } else {
            SessionState::Anonymous
        };
        Self {
            client,
            state: Arc::new(RwLock::new(initial)),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn state(&self) -> SessionState {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        if matches!(*state, SessionState::Authenticated(_)) && !self.client.tokens().has_token() {
            tracing::debug!("token store emptied, session is anonymous");
            *state = SessionState::Anonymous;
        }
        state.clone()
    }

    pub fn user(&self) -> Option<User> {
        match self.state() {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state(), SessionState::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state(), SessionState::Restoring)
    }

    fn set_state(&self, next: SessionState) {
        *self.state.write().unwrap_or_else(|e| e.into_inner()) = next;
    }

    /// Validate the stored token against the backend.
    pub async fn restore(&self) -> SessionState {
        if !self.client.tokens().has_token() {
            self.set_state(SessionState::Anonymous);
            return SessionState::Anonymous;
        }

        self.set_state(SessionState::Restoring);
        match self.client.me().await {
            Ok(user) => {
                tracing::info!("session restored for user {}", user.id);
                self.set_state(SessionState::Authenticated(user));
            }
            Err(e) => {
                tracing::warn!("stored token rejected: {}", e);
                self.discard_token();
                self.set_state(SessionState::Anonymous);
            }
        }
        self.state()
    }

    pub async fn login(&self, data: &LoginData) -> Result<User, ApiError> {
        let response = self.client.login(data).await;
        self.establish(response).await
    }

    pub async fn register(&self, data: &RegisterData) -> Result<User, ApiError> {
        let response = self.client.register(&data.normalized()).await;
        self.establish(response).await
    }

    /// Fetch the current user again, e.g. after the profile changed.
    pub async fn reload(&self) -> Result<User, ApiError> {
        let user = self.client.me().await.inspect_err(|e| self.observe(e))?;
        if self.client.tokens().has_token() {
            self.set_state(SessionState::Authenticated(user.clone()));
        }
        Ok(user)
    }

    /// Re-issue the token. The old token is replaced by the new one.
    pub async fn refresh(&self) -> Result<User, ApiError> {
        let response = self.client.refresh().await;
        self.establish(response).await
    }

    /// Log out on the backend if possible. Local state is always cleared.
    pub async fn logout(&self) {
        if self.client.tokens().has_token() {
            if let Err(e) = self.client.logout().await {
                tracing::warn!("logout request failed, clearing session anyway: {}", e);
            }
        }
        self.discard_token();
        self.set_state(SessionState::Anonymous);
        tracing::info!("logged out");
    }

    /// Apply the outcome of any call made through [`Session::client`].
    /// An `Unauthorized` error ends the session.
    pub fn observe(&self, err: &ApiError) {
        if err.is_unauthorized() {
            self.discard_token();
            self.set_state(SessionState::Anonymous);
        }
    }

    async fn establish(
        &self,
        response: Result<AuthResponse, ApiError>,
    ) -> Result<User, ApiError> {
        let response = response.inspect_err(|e| self.observe(e))?;
        let (user, token) = response.into_parts();
        let Some(token) = token else {
            tracing::error!("auth response for user {} carried no token", user.id);
            return Err(ApiError::MissingToken);
        };

        self.client.tokens().save(&token)?;
        tracing::info!("authenticated as user {}", user.id);
        self.set_state(SessionState::Authenticated(user.clone()));
        Ok(user)
    }

    fn discard_token(&self) {
        if let Err(e) = self.client.tokens().clear() {
            tracing::error!("failed to clear stored token: {}", e);
        }
    }
}
