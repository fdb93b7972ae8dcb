use thiserror::Error;

/// Domain-level errors representing item validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0} is mandatory")]
    BlankField(&'static str),

    #[error("Email format is wrong: {0}")]
    InvalidEmail(String),
}
