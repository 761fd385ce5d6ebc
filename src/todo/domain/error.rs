//! Error types for todo domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The date string matches no recognised pattern or names an
    /// impossible calendar date.
    #[error("unrecognised date format: '{0}'")]
    InvalidDateFormat(String),

    /// The status text is empty.
    #[error("status must not be empty")]
    InvalidStatus,
}
