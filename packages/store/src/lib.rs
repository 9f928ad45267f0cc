//! Token persistence for the Tirgus client.
//!
//! The session token issued by the backend is kept behind the [`TokenStore`]
//! trait so the HTTP client and session never touch a global. Pick the backend
//! per platform:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`MemoryTokenStore`] | tests, headless use |
//! | [`FileTokenStore`] | native (desktop, CLI tools) |
//! | `LocalStorageTokenStore` | browser (`wasm32` + `web` feature) |

mod error;
pub use error::StoreError;

mod token;
pub use token::{SharedTokenStore, TokenStore, TOKEN_KEY};

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::{FileTokenStore, SessionFile};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageTokenStore;

/// Create the platform-appropriate token store.
///
/// - **Web** (WASM + `web` feature): browser `localStorage`
/// - **Native**: `<data_dir>/tirgus/session.toml`
/// - anything else: in-memory, lost on reload
pub fn default_token_store() -> SharedTokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        std::sync::Arc::new(LocalStorageTokenStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let store: SharedTokenStore = match FileTokenStore::in_data_dir() {
            Some(store) => std::sync::Arc::new(store),
            None => {
                tracing::warn!("no platform data directory, keeping the session token in memory");
                std::sync::Arc::new(MemoryTokenStore::new())
            }
        };
        store
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        std::sync::Arc::new(MemoryTokenStore::new())
    }
}
