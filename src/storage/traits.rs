use std::sync::Arc;

use async_trait::async_trait;

use super::error::StorageError;
use crate::domain::{Item, ItemId};

/// Keyed item storage with pluggable backends
///
/// Individual calls are safe to issue concurrently; there is no transactional
/// guarantee across calls.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Identifiers of every stored item
    async fn list_all_ids(&self) -> Result<Vec<ItemId>, StorageError>;

    /// Fetch one item (returns a copy)
    async fn get(&self, id: ItemId) -> Result<Option<Item>, StorageError>;

    /// Insert or replace an item, assigning an identifier when it has none
    async fn save(&self, item: Item) -> Result<Item, StorageError>;

    /// Every stored item
    async fn find_all(&self) -> Result<Vec<Item>, StorageError>;

    /// Remove an item; removing a missing item is not an error
    async fn delete(&self, id: ItemId) -> Result<(), StorageError>;
}

// Allows a store to be shared between processors and callers
#[async_trait]
impl<S: ItemStore + ?Sized> ItemStore for Arc<S> {
    async fn list_all_ids(&self) -> Result<Vec<ItemId>, StorageError> {
        (**self).list_all_ids().await
    }

    async fn get(&self, id: ItemId) -> Result<Option<Item>, StorageError> {
        (**self).get(id).await
    }

    async fn save(&self, item: Item) -> Result<Item, StorageError> {
        (**self).save(item).await
    }

    async fn find_all(&self) -> Result<Vec<Item>, StorageError> {
        (**self).find_all().await
    }

    async fn delete(&self, id: ItemId) -> Result<(), StorageError> {
        (**self).delete(id).await
    }
}
