//! Store port for durable todo persistence and predicate queries.

use crate::todo::domain::{DueDate, Todo, TodoId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo store operations.
pub type TodoStoreResult<T> = Result<T, TodoStoreError>;

/// Durable todo persistence contract.
///
/// Row-level writes mirror the registry's in-memory mutations; the
/// `*_ids` methods evaluate query predicates against stored data and
/// return matching identifier sets for the registry to resolve into full
/// records. Stored due dates are canonical `YYYY-MM-DD` text, so date
/// predicates compare textually.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Inserts a new row for the todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the write fails; the
    /// caller must treat the whole operation as aborted.
    async fn insert(&self, todo: &Todo) -> TodoStoreResult<()>;

    /// Rewrites the row for the todo's identifier with its current
    /// field values.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the write fails.
    async fn update(&self, todo: &Todo) -> TodoStoreResult<()>;

    /// Deletes the row with the given identifier. Deleting an absent row
    /// is not an error; existence checks belong to the registry.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the write fails.
    async fn delete(&self, id: TodoId) -> TodoStoreResult<()>;

    /// Deletes every row.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the write fails.
    async fn delete_all(&self) -> TodoStoreResult<()>;

    /// Returns every stored todo in identifier order. Used to rebuild the
    /// in-memory registry from a store that survived a restart.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the read fails or a
    /// row cannot be decoded.
    async fn all(&self) -> TodoStoreResult<Vec<Todo>>;

    /// Returns every stored identifier in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the read fails.
    async fn ids(&self) -> TodoStoreResult<Vec<TodoId>>;

    /// Identifiers of todos due strictly before `today` whose status is
    /// `"Not started"` or `"In progress"`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the read fails.
    async fn overdue_ids(&self, today: DueDate) -> TodoStoreResult<Vec<TodoId>>;

    /// Identifiers of todos whose status is exactly `"Finished"`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the read fails.
    async fn finished_ids(&self) -> TodoStoreResult<Vec<TodoId>>;

    /// Identifiers of todos due on `date` whose status is not
    /// `"Finished"`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the read fails.
    async fn due_on_ids(&self, date: DueDate) -> TodoStoreResult<Vec<TodoId>>;
}

/// Errors returned by todo store implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
