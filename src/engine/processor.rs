use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::OwnedSemaphorePermit;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::error::{EngineError, ItemError, ItemFailure};
use super::handle::CompletionHandle;
use super::outcome::{ItemOutcome, RunReport};
use super::pool::WorkerPool;
use crate::domain::{Item, ItemId, apply_processed};
use crate::storage::ItemStore;

/// Batch processor transitioning every eligible item to `PROCESSED`
///
/// Each run lists the store's identifiers, submits one task per distinct
/// identifier to the worker pool, and joins every task before resolving. Run state
/// lives entirely inside the run; the only thing runs share is the pool.
pub struct BatchProcessor<S>
where
    S: ItemStore + 'static,
{
    store: Arc<S>,
    pool: WorkerPool,
    run_ids: Arc<AtomicU64>,
}

impl<S> BatchProcessor<S>
where
    S: ItemStore + 'static,
{
    /// Create a processor over `store` with a pool of `DEFAULT_CONCURRENCY` slots
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            pool: WorkerPool::default(),
            run_ids: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Use a dedicated pool with `limit` slots
    pub fn with_concurrency(mut self, limit: usize) -> Self {
        self.pool = WorkerPool::new(limit);
        self
    }

    /// Use an existing pool, sharing its bound with other processors
    pub fn with_pool(mut self, pool: WorkerPool) -> Self {
        self.pool = pool;
        self
    }

    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    /// Get reference to the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Start a run in the background and return its completion handle
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Example
    /// ```rust,ignore
    /// let processor = BatchProcessor::new(store).with_concurrency(10);
    /// let processed = tokio::time::timeout(Duration::from_secs(5), processor.process_all())
    ///     .await??;
    /// ```
    pub fn process_all(&self) -> CompletionHandle {
        let processor = self.clone();
        CompletionHandle::new(tokio::spawn(async move { processor.run().await }))
    }

    /// Run in place and return the items this run transitioned
    pub async fn run(&self) -> Result<Vec<Item>, EngineError> {
        self.run_report().await?.into_result()
    }

    /// Run in place and return every per-item outcome
    ///
    /// Only a failed identifier listing is an error here; per-item failures
    /// are part of the report.
    pub async fn run_report(&self) -> Result<RunReport, EngineError> {
        let run_id = self.run_ids.fetch_add(1, Ordering::Relaxed);

        let mut ids = self.store.list_all_ids().await.map_err(|e| {
            warn!(run_id, error = %e, "Listing item ids failed, no items dispatched");
            EngineError::StoreUnavailable(e)
        })?;

        // One task per identifier, even if the store lists it twice
        ids.sort_unstable();
        ids.dedup();

        info!(
            run_id,
            items = ids.len(),
            concurrency = self.pool.limit(),
            "Starting processing run"
        );

        // A slot is taken before spawning, so live tasks never exceed the pool
        let mut report = RunReport::new();
        let mut tasks: Vec<(ItemId, JoinHandle<ItemOutcome>)> = Vec::with_capacity(ids.len());
        for id in ids {
            match self.pool.acquire().await {
                Ok(permit) => tasks.push((id, self.spawn_item(permit, run_id, id))),
                Err(e) => report.record(ItemOutcome::Failed(ItemFailure::new(id, e))),
            }
        }

        // Join every task before deciding the run's outcome
        for (id, task) in tasks {
            let outcome = task.await.unwrap_or_else(|e| {
                warn!(run_id, item_id = id, error = %e, "Item task aborted");
                ItemOutcome::Failed(ItemFailure::new(id, ItemError::Aborted(e.to_string())))
            });
            report.record(outcome);
        }

        info!(
            run_id,
            processed = report.processed_count(),
            skipped = report.skipped().len(),
            failed = report.failures().len(),
            "Processing run finished"
        );

        Ok(report)
    }

    fn spawn_item(
        &self,
        permit: OwnedSemaphorePermit,
        run_id: u64,
        id: ItemId,
    ) -> JoinHandle<ItemOutcome> {
        let store = Arc::clone(&self.store);

        tokio::spawn(async move {
            let _permit = permit;
            process_item(&*store, run_id, id).await
        })
    }
}

impl<S> Clone for BatchProcessor<S>
where
    S: ItemStore + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            pool: self.pool.clone(),
            run_ids: Arc::clone(&self.run_ids),
        }
    }
}

/// Fetch, decide, mutate and persist a single item
async fn process_item<S>(store: &S, run_id: u64, id: ItemId) -> ItemOutcome
where
    S: ItemStore + ?Sized,
{
    let fetched = match store.get(id).await {
        Ok(fetched) => fetched,
        Err(e) => {
            warn!(run_id, item_id = id, error = %e, "Fetching item failed");
            return ItemOutcome::Failed(ItemFailure::new(id, ItemError::Fetch(e)));
        }
    };

    let item = match apply_processed(fetched) {
        Ok(item) => item,
        Err(reason) => {
            debug!(run_id, item_id = id, %reason, "Skipping item");
            return ItemOutcome::Skipped { id, reason };
        }
    };

    match store.save(item).await {
        Ok(saved) => {
            debug!(run_id, item_id = id, "Item processed");
            ItemOutcome::Processed(saved)
        }
        Err(e) => {
            warn!(run_id, item_id = id, error = %e, "Saving item failed");
            ItemOutcome::Failed(ItemFailure::new(id, ItemError::Save(e)))
        }
    }
}
