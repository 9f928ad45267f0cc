//! # Browser `localStorage` token store
//!
//! [`LocalStorageTokenStore`] is the [`TokenStore`] used on the **web platform**.
//! The token is written under [`TOKEN_KEY`] so it survives page reloads, and is
//! removed on logout or when the backend answers 401.
//!
//! The struct holds only the key name and looks up `window.localStorage` on
//! every call, which keeps it `Send + Sync` (browser handles are not).
//! Storage can be unavailable (private browsing, disabled cookies); reads then
//! return `None` and writes return [`StoreError::Unavailable`].

use web_sys::Storage;

use crate::{StoreError, TokenStore, TOKEN_KEY};

#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl Default for LocalStorageTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageTokenStore {
    pub fn new() -> Self {
        Self::with_key(TOKEN_KEY)
    }

    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage() -> Result<Storage, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        let storage = Self::storage().ok()?;
        storage
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(&self.key, token)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn clear(&self) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}
