use once_cell::sync::Lazy;
use regex::Regex;
use tracing::error;

use super::error::DomainError;
use super::item::Item;

/// Check the mandatory fields and email format of an item
pub fn validate_item(item: &Item) -> Result<(), DomainError> {
    require("Name", item.name())?;
    require("Description", item.description())?;
    require("Status", item.status().as_str())?;
    require("Email", item.email())?;

    if !is_valid_email(item.email()) {
        return Err(DomainError::InvalidEmail(item.email().to_string()));
    }

    Ok(())
}

fn require(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::BlankField(field));
    }
    Ok(())
}

/// Email pattern: local@domain.tld with an alphabetic top-level label
///
/// `None` only if the pattern fails to compile, in which case no email is
/// accepted.
pub static EMAIL_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .inspect_err(|e| error!("Failed to compile email regex: {}", e))
        .ok()
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}
