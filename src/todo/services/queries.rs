//! Derived views combining store predicates with registry lookups.

use super::registry::{TodoRegistry, TodoServiceResult};
use crate::todo::{
    domain::{DueDate, Todo},
    ports::TodoStore,
};
use mockable::Clock;
use std::sync::Arc;

/// Query engine for the overdue, finished, and due-on views.
///
/// Each view asks the store for the matching identifier set and resolves
/// the identifiers to full records through the registry. Both steps run
/// under the registry's read lock as one unit, so a view never observes a
/// half-applied mutation. "Today" comes from the injected clock so
/// time-relative views are deterministic under test.
#[derive(Clone)]
pub struct TodoQueries<S, C>
where
    S: TodoStore,
    C: Clock + Send + Sync,
{
    registry: Arc<TodoRegistry<S>>,
    clock: Arc<C>,
}

impl<S, C> TodoQueries<S, C>
where
    S: TodoStore,
    C: Clock + Send + Sync,
{
    /// Creates a query engine over the given registry.
    #[must_use]
    pub const fn new(registry: Arc<TodoRegistry<S>>, clock: Arc<C>) -> Self {
        Self { registry, clock }
    }

    /// Todos due strictly before today whose status is `"Not started"`
    /// or `"In progress"`.
    ///
    /// A store-read failure yields an empty result rather than an error;
    /// this leniency covers store reads only.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Inconsistent`] when the store returns
    /// an identifier the registry cannot resolve.
    ///
    /// [`TodoServiceError::Inconsistent`]: super::TodoServiceError::Inconsistent
    pub async fn overdue(&self) -> TodoServiceResult<Vec<Todo>> {
        let today = DueDate::from_date(self.clock.utc().date_naive());
        self.registry
            .resolve_view(move |store| async move {
                store.overdue_ids(today).await.unwrap_or_default()
            })
            .await
    }

    /// Todos whose status is exactly `"Finished"`.
    ///
    /// A store-read failure yields an empty result rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Inconsistent`] when the store returns
    /// an identifier the registry cannot resolve.
    ///
    /// [`TodoServiceError::Inconsistent`]: super::TodoServiceError::Inconsistent
    pub async fn finished(&self) -> TodoServiceResult<Vec<Todo>> {
        self.registry
            .resolve_view(|store| async move { store.finished_ids().await.unwrap_or_default() })
            .await
    }

    /// Todos due on the given date whose status is not `"Finished"`.
    ///
    /// The date argument is normalised like any other date entering the
    /// system. A store-read failure yields an empty result rather than an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Domain`] when the date is unparseable,
    /// or [`TodoServiceError::Inconsistent`] when the store returns an
    /// identifier the registry cannot resolve.
    ///
    /// [`TodoServiceError::Domain`]: super::TodoServiceError::Domain
    /// [`TodoServiceError::Inconsistent`]: super::TodoServiceError::Inconsistent
    pub async fn due_on(&self, date_raw: &str) -> TodoServiceResult<Vec<Todo>> {
        let date = DueDate::parse(date_raw)?;
        self.registry
            .resolve_view(move |store| async move {
                store.due_on_ids(date).await.unwrap_or_default()
            })
            .await
    }
}
