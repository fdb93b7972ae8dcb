//! Prelude module for convenient imports
//!
//! Import everything you need with: `use itemproc::prelude::*;`

// Domain types
pub use crate::domain::{DomainError, Item, ItemId, ItemStatus, SkipReason};

// Storage types
pub use crate::storage::{ConcurrentItemStore, ItemStore, StorageError};

// Engine types
pub use crate::engine::{
    BatchProcessor, CompletionHandle, DEFAULT_CONCURRENCY, EngineError, ItemError, ItemFailure,
    ItemOutcome, RunReport, WorkerPool,
};

// IO types
pub use crate::io::{CsvItemStream, IoError, LoadSummary, RawItemRecord, load_items, write_items};

// App types
pub use crate::app::{AppError, CliApp, CliArgs};
