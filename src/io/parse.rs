use serde::Deserialize;

use super::error::IoError;
use crate::domain::{Item, ItemId, validate_item};

/// Raw CSV record as read from input
///
/// Missing text columns deserialize as blank and are rejected by validation.
#[derive(Debug, Deserialize)]
pub struct RawItemRecord {
    pub id: Option<ItemId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub email: String,
}

impl RawItemRecord {
    /// Parse this raw record into a validated Item
    pub fn parse(self) -> Result<Item, IoError> {
        let mut item = Item::new(self.name, self.description, self.status, self.email);
        if let Some(id) = self.id {
            item = item.with_id(id);
        }

        validate_item(&item)?;
        Ok(item)
    }
}
