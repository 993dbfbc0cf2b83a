//! Error taxonomy shared by the client, session and store.
//! Display is the human-readable message only; that is what ends up in error slots.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Local input failed a precondition; nothing was sent.
    #[error("{0}")]
    Validation(String),

    /// Login rejected by the backend.
    #[error("{0}")]
    Auth(String),

    /// Any other non-success, transport failure or malformed response.
    #[error("{0}")]
    Fetch(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

impl From<rusqlite::Error> for ClientError {
    fn from(e: rusqlite::Error) -> Self {
        ClientError::Storage(e.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(e: std::io::Error) -> Self {
        ClientError::Storage(e.to_string())
    }
}
