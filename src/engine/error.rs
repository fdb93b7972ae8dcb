use std::fmt;

use thiserror::Error;

use crate::domain::ItemId;
use crate::storage::StorageError;

/// Why a single item's unit of work failed
#[derive(Error, Debug)]
pub enum ItemError {
    #[error("fetch failed: {0}")]
    Fetch(#[source] StorageError),

    #[error("save failed: {0}")]
    Save(#[source] StorageError),

    #[error("worker task aborted: {0}")]
    Aborted(String),
}

/// A failed item together with its identifier
#[derive(Error, Debug)]
#[error("item {id}: {error}")]
pub struct ItemFailure {
    pub id: ItemId,
    #[source]
    pub error: ItemError,
}

impl ItemFailure {
    pub fn new(id: ItemId, error: ItemError) -> Self {
        Self { id, error }
    }
}

/// Engine-level errors for batch processing runs
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Listing items failed: {0}")]
    StoreUnavailable(#[source] StorageError),

    #[error("Item processing failed: {}", FailureList(.0))]
    ItemProcessingFailed(Vec<ItemFailure>),

    #[error("Processing run aborted: {0}")]
    RunAborted(String),
}

impl EngineError {
    /// Per-item failures carried by this error (empty for run-level errors)
    pub fn failures(&self) -> &[ItemFailure] {
        match self {
            Self::ItemProcessingFailed(failures) => failures,
            _ => &[],
        }
    }
}

struct FailureList<'a>(&'a [ItemFailure]);

impl fmt::Display for FailureList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} item(s) failed", self.0.len())?;
        for (i, failure) in self.0.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}", sep, failure)?;
        }
        Ok(())
    }
}
