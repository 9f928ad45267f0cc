use thiserror::Error;

/// Failure to persist or remove a session token.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("token file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("token file could not be written: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("token file is malformed: {0}")]
    Deserialize(#[from] toml::de::Error),
    #[error("token storage unavailable: {0}")]
    Unavailable(String),
}
