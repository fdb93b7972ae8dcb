pub mod error;
pub mod handle;
pub mod outcome;
pub mod pool;
pub mod processor;

// Re-export commonly used types
pub use error::{EngineError, ItemError, ItemFailure};
pub use handle::CompletionHandle;
pub use outcome::{ItemOutcome, RunReport};
pub use pool::{DEFAULT_CONCURRENCY, WorkerPool};
pub use processor::BatchProcessor;
