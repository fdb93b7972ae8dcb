pub mod error;
pub mod item;
pub mod operations;
pub mod validation;

// Re-export commonly used types
pub use error::DomainError;
pub use item::{Item, ItemId, ItemStatus};
pub use operations::{SkipReason, apply_processed};
pub use validation::{is_valid_email, validate_item};
