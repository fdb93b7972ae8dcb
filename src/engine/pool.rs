use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use super::error::ItemError;

/// Default number of concurrently running item tasks
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Fixed-size pool of worker slots shared by every run submitted to it
///
/// Cloning is cheap and yields a handle to the same slots, so runs from
/// cloned processors compete for one global bound.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    limit: usize,
}

impl WorkerPool {
    /// Create a pool with `limit` slots (at least one)
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            permits: Arc::new(Semaphore::new(limit)),
            limit,
        }
    }

    /// Configured concurrency bound
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Slots not currently held by a task
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Wait for a free slot; the slot is released when the permit drops
    pub async fn acquire(&self) -> Result<OwnedSemaphorePermit, ItemError> {
        Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|_| ItemError::Aborted("worker pool closed".to_string()))
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new(DEFAULT_CONCURRENCY)
    }
}
