//! Procedural facade consumed by the transport layer.

use super::{
    queries::TodoQueries,
    registry::{TodoRegistry, TodoServiceResult},
};
use crate::todo::{
    domain::{Todo, TodoId, UpdateTodo},
    ports::TodoStore,
};
use mockable::Clock;
use std::sync::Arc;

/// Thin procedural boundary over the registry and query engine.
///
/// Every method delegates directly; the facade performs no business logic
/// of its own. The transport collaborator maps [`TodoServiceError`]
/// variants onto its own response representation.
///
/// [`TodoServiceError`]: super::TodoServiceError
#[derive(Clone)]
pub struct TodoService<S, C>
where
    S: TodoStore,
    C: Clock + Send + Sync,
{
    registry: Arc<TodoRegistry<S>>,
    queries: TodoQueries<S, C>,
}

impl<S, C> TodoService<S, C>
where
    S: TodoStore,
    C: Clock + Send + Sync,
{
    /// Creates a service with an empty registry over the given store.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_registry(Arc::new(TodoRegistry::new(store)), clock)
    }

    /// Creates a service whose registry is rebuilt from stored rows.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Store`] when the store read fails.
    ///
    /// [`TodoServiceError::Store`]: super::TodoServiceError::Store
    pub async fn restore(store: Arc<S>, clock: Arc<C>) -> TodoServiceResult<Self> {
        let registry = Arc::new(TodoRegistry::restore(store).await?);
        Ok(Self::with_registry(registry, clock))
    }

    fn with_registry(registry: Arc<TodoRegistry<S>>, clock: Arc<C>) -> Self {
        let queries = TodoQueries::new(Arc::clone(&registry), clock);
        Self { registry, queries }
    }

    /// Lists all todos in creation order.
    pub async fn list_tasks(&self) -> Vec<Todo> {
        self.registry.list().await
    }

    /// Creates a todo from raw description, due date, and status text.
    ///
    /// # Errors
    ///
    /// Propagates registry errors; see [`TodoRegistry::create`].
    pub async fn create_task(
        &self,
        description: impl Into<String> + Send,
        due_raw: &str,
        status_raw: &str,
    ) -> TodoServiceResult<Todo> {
        self.registry.create(description, due_raw, status_raw).await
    }

    /// Fetches one todo by identifier.
    ///
    /// # Errors
    ///
    /// Propagates registry errors; see [`TodoRegistry::get`].
    pub async fn get_task(&self, id: TodoId) -> TodoServiceResult<Todo> {
        self.registry.get(id).await
    }

    /// Replaces a todo's supplied fields by identifier.
    ///
    /// # Errors
    ///
    /// Propagates registry errors; see [`TodoRegistry::update`].
    pub async fn update_task(&self, id: TodoId, update: UpdateTodo) -> TodoServiceResult<Todo> {
        self.registry.update(id, update).await
    }

    /// Deletes one todo by identifier.
    ///
    /// # Errors
    ///
    /// Propagates registry errors; see [`TodoRegistry::delete`].
    pub async fn delete_task(&self, id: TodoId) -> TodoServiceResult<()> {
        self.registry.delete(id).await
    }

    /// Sets a todo's status verbatim by identifier.
    ///
    /// # Errors
    ///
    /// Propagates registry errors; see [`TodoRegistry::change_status`].
    pub async fn set_status(
        &self,
        id: TodoId,
        status_raw: impl Into<String> + Send,
    ) -> TodoServiceResult<Todo> {
        self.registry.change_status(id, status_raw).await
    }

    /// Lists overdue todos.
    ///
    /// # Errors
    ///
    /// Propagates query errors; see [`TodoQueries::overdue`].
    pub async fn list_overdue(&self) -> TodoServiceResult<Vec<Todo>> {
        self.queries.overdue().await
    }

    /// Lists finished todos.
    ///
    /// # Errors
    ///
    /// Propagates query errors; see [`TodoQueries::finished`].
    pub async fn list_finished(&self) -> TodoServiceResult<Vec<Todo>> {
        self.queries.finished().await
    }

    /// Lists todos due on the given date.
    ///
    /// # Errors
    ///
    /// Propagates query errors; see [`TodoQueries::due_on`].
    pub async fn list_due_on(&self, date_raw: &str) -> TodoServiceResult<Vec<Todo>> {
        self.queries.due_on(date_raw).await
    }

    /// Removes every todo from the store and registry.
    ///
    /// # Errors
    ///
    /// Propagates registry errors; see [`TodoRegistry::clear`].
    pub async fn clear_tasks(&self) -> TodoServiceResult<()> {
        self.registry.clear().await
    }
}
