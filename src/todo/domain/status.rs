//! Todo status values and capitalisation normalisation.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Todo status.
///
/// The two query-significant status families are modelled explicitly:
/// [`Status::Finished`] drives the finished view and excludes a todo from
/// the due-on view, while [`Status::NotStarted`] and [`Status::InProgress`]
/// are the only statuses eligible for the overdue view. Any other text is
/// preserved verbatim in [`Status::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    /// Work has not begun. Canonical form `"Not started"`.
    NotStarted,
    /// Work is underway. Canonical form `"In progress"`.
    InProgress,
    /// Work is complete. Canonical form `"Finished"`.
    Finished,
    /// Any other free-text status, stored as given.
    Custom(String),
}

impl Status {
    /// Normalises free text by uppercasing its first character, leaving
    /// the remainder unchanged.
    ///
    /// Applied on the `create` and `update` paths. `change_status`
    /// deliberately bypasses this and uses [`Status::verbatim`].
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidStatus`] when the text is empty.
    pub fn normalized(raw: &str) -> Result<Self, TodoDomainError> {
        let mut chars = raw.chars();
        let Some(head) = chars.next() else {
            return Err(TodoDomainError::InvalidStatus);
        };
        let capitalized: String = head.to_uppercase().chain(chars).collect();
        Ok(Self::from_text(capitalized))
    }

    /// Wraps free text without altering it.
    #[must_use]
    pub fn verbatim(raw: impl Into<String>) -> Self {
        Self::from_text(raw.into())
    }

    /// Maps text onto the known variants by exact match on the canonical
    /// forms; anything else becomes [`Status::Custom`].
    fn from_text(text: String) -> Self {
        match text.as_str() {
            "Not started" => Self::NotStarted,
            "In progress" => Self::InProgress,
            "Finished" => Self::Finished,
            _ => Self::Custom(text),
        }
    }

    /// Returns the stored textual form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In progress",
            Self::Finished => "Finished",
            Self::Custom(text) => text,
        }
    }

    /// Whether this status marks the todo as complete.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Whether this status is eligible for the overdue view.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::NotStarted | Self::InProgress)
    }
}

impl From<String> for Status {
    fn from(text: String) -> Self {
        Self::from_text(text)
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Custom(text) => text,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
