use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Store-assigned item identifier
pub type ItemId = u64;

const NEW: &str = "NEW";
const PROCESSED: &str = "PROCESSED";

/// Lifecycle status of an item
///
/// Only `New` and `Processed` carry meaning for batch processing; any other
/// status text is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemStatus {
    New,
    Processed,
    Other(String),
}

impl ItemStatus {
    /// Textual form as stored and exchanged
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => NEW,
            Self::Processed => PROCESSED,
            Self::Other(s) => s,
        }
    }

    /// Terminal status for batch processing
    pub fn is_processed(&self) -> bool {
        matches!(self, Self::Processed)
    }
}

impl From<String> for ItemStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            NEW => Self::New,
            PROCESSED => Self::Processed,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for ItemStatus {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<ItemStatus> for String {
    fn from(status: ItemStatus) -> Self {
        match status {
            ItemStatus::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl FromStr for ItemStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Work item record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: Option<ItemId>,
    name: String,
    description: String,
    status: ItemStatus,
    email: String,
}

impl Item {
    /// Create an item without an identifier (assigned by the store on save)
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<ItemStatus>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            status: status.into(),
            email: email.into(),
        }
    }

    /// Same item with an explicit identifier
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<ItemId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> &ItemStatus {
        &self.status
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_processed(&self) -> bool {
        self.status.is_processed()
    }

    // Internal mutation methods for use by operations and storage
    pub(crate) fn set_status(&mut self, status: ItemStatus) {
        self.status = status;
    }

    pub(crate) fn assign_id(&mut self, id: ItemId) {
        self.id = Some(id);
    }
}
