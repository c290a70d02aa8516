use bytebound::errors::StoreError;
use thiserror::Error;

/// Errors raised by the blog services.
#[derive(Error, Debug)]
pub enum BlogError {
    /// No entity with the given identity exists
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    /// The caller does not own the entity it tried to change
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// The underlying database refused the operation
    #[error("Store Error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for blog service operations.
pub type BlogResult<T> = Result<T, BlogError>;

impl BlogError {
    pub(crate) fn not_found(entity: &'static str, id: &str) -> Self {
        BlogError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
