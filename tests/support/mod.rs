#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashSet;
use itemproc::prelude::*;

/// Item store double that counts calls, injects faults and tracks the peak
/// number of store calls in flight at once
pub struct InstrumentedStore {
    inner: ConcurrentItemStore,
    latency: Duration,
    gets: AtomicUsize,
    saves: AtomicUsize,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    fail_listing: AtomicBool,
    failing_gets: DashSet<ItemId>,
    failing_saves: DashSet<ItemId>,
    panicking_gets: DashSet<ItemId>,
    phantom_ids: DashSet<ItemId>,
    repeated_ids: DashSet<ItemId>,
}

struct InFlight<'a>(&'a InstrumentedStore);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

impl InstrumentedStore {
    pub fn new() -> Self {
        Self {
            inner: ConcurrentItemStore::new(),
            latency: Duration::ZERO,
            gets: AtomicUsize::new(0),
            saves: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            fail_listing: AtomicBool::new(false),
            failing_gets: DashSet::new(),
            failing_saves: DashSet::new(),
            panicking_gets: DashSet::new(),
            phantom_ids: DashSet::new(),
            repeated_ids: DashSet::new(),
        }
    }

    /// Delay every get/save by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Seed items with ids 1..=n, bypassing the counters
    pub async fn seed(&self, statuses: &[ItemStatus]) {
        for (i, status) in statuses.iter().enumerate() {
            let id = i as ItemId + 1;
            let item = Item::new(
                format!("Item{}", id),
                "desc",
                status.clone(),
                format!("test{}@mail.com", id),
            )
            .with_id(id);
            self.inner.save(item).await.expect("seed item");
        }
    }

    pub fn fail_listing(&self) {
        self.fail_listing.store(true, Ordering::SeqCst);
    }

    pub fn fail_get(&self, id: ItemId) {
        self.failing_gets.insert(id);
    }

    pub fn fail_save(&self, id: ItemId) {
        self.failing_saves.insert(id);
    }

    pub fn panic_on_get(&self, id: ItemId) {
        self.panicking_gets.insert(id);
    }

    /// Listed by `list_all_ids` but never stored
    pub fn add_phantom_id(&self, id: ItemId) {
        self.phantom_ids.insert(id);
    }

    /// Listed a second time by `list_all_ids`
    pub fn list_twice(&self, id: ItemId) {
        self.repeated_ids.insert(id);
    }

    pub fn clear_faults(&self) {
        self.fail_listing.store(false, Ordering::SeqCst);
        self.failing_gets.clear();
        self.failing_saves.clear();
        self.panicking_gets.clear();
    }

    pub fn get_calls(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn save_calls(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    /// Current stored state of an item, bypassing the counters
    pub async fn snapshot(&self, id: ItemId) -> Option<Item> {
        self.inner.get(id).await.expect("in-memory get")
    }

    fn enter(&self) -> InFlight<'_> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        InFlight(self)
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl ItemStore for InstrumentedStore {
    async fn list_all_ids(&self) -> Result<Vec<ItemId>, StorageError> {
        if self.fail_listing.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("listing failed".to_string()));
        }

        let mut ids = self.inner.list_all_ids().await?;
        ids.extend(self.phantom_ids.iter().map(|id| *id));
        ids.extend(self.repeated_ids.iter().map(|id| *id));
        Ok(ids)
    }

    async fn get(&self, id: ItemId) -> Result<Option<Item>, StorageError> {
        let _guard = self.enter();
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.delay().await;

        if self.panicking_gets.contains(&id) {
            panic!("store driver crashed on item {}", id);
        }
        if self.failing_gets.contains(&id) {
            return Err(StorageError::Unavailable("DB error".to_string()));
        }
        self.inner.get(id).await
    }

    async fn save(&self, item: Item) -> Result<Item, StorageError> {
        let _guard = self.enter();
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.delay().await;

        if let Some(id) = item.id()
            && self.failing_saves.contains(&id)
        {
            return Err(StorageError::Unavailable("write rejected".to_string()));
        }
        self.inner.save(item).await
    }

    async fn find_all(&self) -> Result<Vec<Item>, StorageError> {
        self.inner.find_all().await
    }

    async fn delete(&self, id: ItemId) -> Result<(), StorageError> {
        self.inner.delete(id).await
    }
}

pub fn sorted_ids(items: &[Item]) -> Vec<ItemId> {
    let mut ids: Vec<_> = items.iter().filter_map(Item::id).collect();
    ids.sort_unstable();
    ids
}
