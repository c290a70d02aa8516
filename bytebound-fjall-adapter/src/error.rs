use bytebound::errors::{ErrorKind, StoreError};
use thiserror::Error;

/// Errors raised by the fjall key-value store.
#[derive(Error, Debug)]
pub enum FjallStoreError {
    /// The store was opened without a database path
    #[error("Database path is not configured")]
    MissingPath,
    /// A stored value is not valid UTF-8
    #[error("Invalid UTF-8 in stored value for key '{key}': {source}")]
    InvalidUtf8 {
        key: String,
        source: std::string::FromUtf8Error,
    },
    /// Any failure reported by fjall itself
    #[error("Fjall Error: {0}")]
    Backend(#[from] fjall::Error),
}

/// Result type for fjall store operations.
pub type FjallStoreResult<T> = Result<T, FjallStoreError>;

impl From<FjallStoreError> for StoreError {
    fn from(err: FjallStoreError) -> Self {
        let error_kind = match &err {
            FjallStoreError::MissingPath => ErrorKind::ValidationError,
            FjallStoreError::InvalidUtf8 { .. } => ErrorKind::EncodingError,
            FjallStoreError::Backend(_) => {
                let message = err.to_string();
                if message.contains("permission") {
                    ErrorKind::PermissionDenied
                } else {
                    ErrorKind::BackendError
                }
            }
        };
        StoreError::new(&err.to_string(), error_kind)
    }
}
