use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use super::error::StorageError;
use super::traits::ItemStore;
use crate::domain::{Item, ItemId, validate_item};

/// Concurrent in-memory item store using DashMap
pub struct ConcurrentItemStore {
    items: DashMap<ItemId, Item>,
    next_id: AtomicU64,
}

impl ConcurrentItemStore {
    /// Create a new empty store; identifiers start at 1
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn allocate_id(&self) -> ItemId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    // Keep generated ids clear of explicitly supplied ones
    fn reserve_id(&self, id: ItemId) {
        self.next_id.fetch_max(id.saturating_add(1), Ordering::Relaxed);
    }
}

impl Default for ConcurrentItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for ConcurrentItemStore {
    async fn list_all_ids(&self) -> Result<Vec<ItemId>, StorageError> {
        // DashMap iteration order is unspecified; sort for stable listings
        let mut ids: Vec<ItemId> = self.items.iter().map(|entry| *entry.key()).collect();
        ids.sort_unstable();
        Ok(ids)
    }

    async fn get(&self, id: ItemId) -> Result<Option<Item>, StorageError> {
        Ok(self.items.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, mut item: Item) -> Result<Item, StorageError> {
        validate_item(&item)?;

        let id = match item.id() {
            Some(id) => {
                self.reserve_id(id);
                id
            }
            None => {
                let id = self.allocate_id();
                item.assign_id(id);
                id
            }
        };

        debug!(item_id = id, status = %item.status(), "Saving item");
        self.items.insert(id, item.clone());
        Ok(item)
    }

    async fn find_all(&self) -> Result<Vec<Item>, StorageError> {
        let mut items: Vec<Item> = self
            .items
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_unstable_by_key(|item| item.id());
        Ok(items)
    }

    async fn delete(&self, id: ItemId) -> Result<(), StorageError> {
        if self.items.remove(&id).is_some() {
            debug!(item_id = id, "Deleted item");
        }
        Ok(())
    }
}
