//! Todo aggregate root and partial-update payload.

use super::{DueDate, Status, TodoDomainError, TodoId};
use serde::{Deserialize, Serialize};

/// Todo aggregate root.
///
/// The identifier is immutable after creation; the due date and status are
/// always held in their normalised forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    description: String,
    due: DueDate,
    status: Status,
}

/// Partial-update payload for an existing todo.
///
/// Fields left unset preserve the current record's values. Date and status
/// text supplied here is normalised when the update is merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTodo {
    description: Option<String>,
    due: Option<String>,
    status: Option<String>,
}

impl UpdateTodo {
    /// Creates an empty update that preserves every field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement due date, as raw text to be normalised.
    #[must_use]
    pub fn with_due(mut self, due: impl Into<String>) -> Self {
        self.due = Some(due.into());
        self
    }

    /// Sets a replacement status, as raw text to be normalised.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

impl Todo {
    /// Assembles a todo from already-normalised parts.
    #[must_use]
    pub fn from_parts(
        id: TodoId,
        description: impl Into<String>,
        due: DueDate,
        status: Status,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            due,
            status,
        }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the work-item description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the canonical due date.
    #[must_use]
    pub const fn due(&self) -> DueDate {
        self.due
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    /// Produces a copy with the update's supplied fields merged on,
    /// normalising any supplied date or status text.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidDateFormat`] or
    /// [`TodoDomainError::InvalidStatus`] when a supplied field fails
    /// normalisation. The current record is untouched on error.
    pub fn merged(&self, update: UpdateTodo) -> Result<Self, TodoDomainError> {
        let description = update
            .description
            .unwrap_or_else(|| self.description.clone());
        let due = update
            .due
            .map(|raw| DueDate::parse(&raw))
            .transpose()?
            .unwrap_or(self.due);
        let status = update
            .status
            .map(|raw| Status::normalized(&raw))
            .transpose()?
            .unwrap_or_else(|| self.status.clone());

        Ok(Self {
            id: self.id,
            description,
            due,
            status,
        })
    }

    /// Overwrites the status without normalisation.
    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}
