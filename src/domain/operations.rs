use std::fmt;

use super::item::{Item, ItemStatus};

/// Why an item was left untouched by a processing run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// No item exists for the identifier
    NotFound,
    /// The item is already in the terminal status
    AlreadyProcessed,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("item not found"),
            Self::AlreadyProcessed => f.write_str("item already processed"),
        }
    }
}

/// Decide whether a fetched item transitions, and apply the transition
///
/// Returns the item with status `PROCESSED`, ready to be persisted. Absent or
/// already processed items are skipped without modification.
pub fn apply_processed(fetched: Option<Item>) -> Result<Item, SkipReason> {
    let mut item = fetched.ok_or(SkipReason::NotFound)?;

    if item.is_processed() {
        return Err(SkipReason::AlreadyProcessed);
    }

    item.set_status(ItemStatus::Processed);
    Ok(item)
}
