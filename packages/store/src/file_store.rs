//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] keeps the session token in a small TOML file so a native
//! client stays signed in across restarts.
//!
//! ```toml
//! # <data_dir>/tirgus/session.toml
//! auth_token = "1|Xk3..."
//! ```
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/tirgus/session.toml` |
//! | Linux | `~/.local/share/tirgus/session.toml` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\tirgus\session.toml` |

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{StoreError, TokenStore};

const FILE_NAME: &str = "session.toml";

/// On-disk layout of the session file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl SessionFile {
    pub fn from_toml(s: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml(&self) -> Result<String, StoreError> {
        Ok(toml::to_string(self)?)
    }
}

/// Filesystem-backed TokenStore for native platforms.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store the session file inside `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(FILE_NAME),
        }
    }

    /// `<data_dir>/tirgus/session.toml`, or `None` when the platform has no data dir.
    pub fn in_data_dir() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join("tirgus")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<SessionFile, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => SessionFile::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SessionFile::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, file: &SessionFile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, file.to_toml()?)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        match self.read() {
            Ok(file) => file.auth_token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!("ignoring unreadable session file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        self.write(&SessionFile {
            auth_token: Some(token.to_string()),
        })
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
