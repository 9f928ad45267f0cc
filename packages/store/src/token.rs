use std::sync::Arc;

use crate::StoreError;

/// Storage key the session token lives under.
pub const TOKEN_KEY: &str = "auth_token";

/// Persistence for the opaque session token.
///
/// Reads never fail: a store that cannot be read behaves as if no token was
/// saved, which sends the user back to the login page instead of crashing.
pub trait TokenStore: Send + Sync {
    /// The stored token, if any.
    fn load(&self) -> Option<String>;

    /// Replace the stored token.
    fn save(&self, token: &str) -> Result<(), StoreError>;

    /// Forget the stored token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), StoreError>;

    fn has_token(&self) -> bool {
        self.load().is_some()
    }
}

/// Token store handle shared between the HTTP client and the session.
pub type SharedTokenStore = Arc<dyn TokenStore>;
