use thiserror::Error;

use crate::domain::DomainError;

/// Storage-level errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Item store unavailable: {0}")]
    Unavailable(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
