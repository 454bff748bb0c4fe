//! Store Errors

use thiserror::Error;

/// Errors raised while persisting, restoring or seeding the store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Network failure, non-success status or undecodable remote body
    #[error("Remote fetch failed: {message}")]
    Remote { message: String },

    /// The persisted snapshot exists but is not a valid user list
    #[error("Malformed snapshot under key '{key}': {source}")]
    MalformedSnapshot {
        key: String,
        source: serde_json::Error,
    },

    #[error("Failed to serialize users: {source}")]
    Serialize { source: serde_json::Error },

    /// Every id above the largest stored one is taken
    #[error("No free user id above the largest stored id")]
    IdsExhausted,

    /// Backend refused a read or write (quota, storage disabled)
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl StoreError {
    pub fn remote(message: impl Into<String>) -> Self {
        StoreError::Remote {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        StoreError::Storage {
            message: message.into(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
