//! In-memory authoritative registry, kept consistent with the store.

use crate::todo::{
    domain::{DueDate, Status, Todo, TodoDomainError, TodoId, UpdateTodo},
    ports::{TodoStore, TodoStoreError},
};
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Service-level errors for todo operations.
#[derive(Debug, Clone, Error)]
pub enum TodoServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),

    /// The referenced todo does not exist. The absence is definitive; the
    /// caller must not retry.
    #[error("todo {0} does not exist")]
    NotFound(TodoId),

    /// The underlying store operation failed. Mutations abort wholesale
    /// and leave registry state unchanged.
    #[error(transparent)]
    Store(#[from] TodoStoreError),

    /// The store returned an identifier the registry cannot resolve.
    /// Registry and store are guaranteed to agree, so this indicates a
    /// defect and is never recovered from.
    #[error("registry and store disagree on todo {0}")]
    Inconsistent(TodoId),
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

#[derive(Debug)]
struct RegistryState {
    last_id: TodoId,
    todos: BTreeMap<TodoId, Todo>,
}

impl Default for RegistryState {
    fn default() -> Self {
        Self {
            last_id: TodoId::from_raw(0),
            todos: BTreeMap::new(),
        }
    }
}

/// In-memory authoritative todo collection for the process lifetime.
///
/// The registry owns the monotonic identifier counter and mediates every
/// read and write. Mutations take the writer half of a single `RwLock`
/// and hold it across the store write, so no observer can see the store
/// and the in-memory collection disagree. The counter only advances after
/// the store accepts the insert, and is never rewound, so identifiers are
/// not reused even after deletion.
#[derive(Debug)]
pub struct TodoRegistry<S: TodoStore> {
    store: Arc<S>,
    state: RwLock<RegistryState>,
}

impl<S: TodoStore> TodoRegistry<S> {
    /// Creates an empty registry over the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Rebuilds a registry from rows that survived a previous process,
    /// resuming the identifier counter past the highest stored id.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Store`] when the store read fails.
    pub async fn restore(store: Arc<S>) -> TodoServiceResult<Self> {
        let mut state = RegistryState::default();
        for todo in store.all().await? {
            state.last_id = state.last_id.max(todo.id());
            state.todos.insert(todo.id(), todo);
        }
        Ok(Self {
            store,
            state: RwLock::new(state),
        })
    }

    /// Returns the store this registry writes through.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Normalises the inputs, assigns the next identifier, and records the
    /// todo in the store and the in-memory collection.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Domain`] on unparseable date or empty
    /// status, or [`TodoServiceError::Store`] when the insert fails, in
    /// which case neither the counter nor the collection has changed.
    pub async fn create(
        &self,
        description: impl Into<String> + Send,
        due_raw: &str,
        status_raw: &str,
    ) -> TodoServiceResult<Todo> {
        let due = DueDate::parse(due_raw)?;
        let status = Status::normalized(status_raw)?;

        let mut state = self.state.write().await;
        let id = state.last_id.next();
        let todo = Todo::from_parts(id, description, due, status);
        self.store.insert(&todo).await?;
        state.last_id = id;
        state.todos.insert(id, todo.clone());
        Ok(todo)
    }

    /// Returns the todo with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no such todo exists.
    pub async fn get(&self, id: TodoId) -> TodoServiceResult<Todo> {
        let state = self.state.read().await;
        state
            .todos
            .get(&id)
            .cloned()
            .ok_or(TodoServiceError::NotFound(id))
    }

    /// Merges the supplied fields onto the existing record, normalising
    /// any supplied date or status; absent fields keep their prior values.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no such todo exists,
    /// [`TodoServiceError::Domain`] when a supplied field fails
    /// normalisation, or [`TodoServiceError::Store`] when persisting the
    /// merged record fails; state is unchanged on every error path.
    pub async fn update(&self, id: TodoId, update: UpdateTodo) -> TodoServiceResult<Todo> {
        let mut state = self.state.write().await;
        let merged = state
            .todos
            .get(&id)
            .ok_or(TodoServiceError::NotFound(id))?
            .merged(update)?;
        self.store.update(&merged).await?;
        state.todos.insert(id, merged.clone());
        Ok(merged)
    }

    /// Overwrites only the status field, bypassing capitalisation.
    ///
    /// Unlike `create` and `update`, the text is stored exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no such todo exists, or
    /// [`TodoServiceError::Store`] when persisting fails.
    pub async fn change_status(
        &self,
        id: TodoId,
        status_raw: impl Into<String> + Send,
    ) -> TodoServiceResult<Todo> {
        let mut state = self.state.write().await;
        let mut todo = state
            .todos
            .get(&id)
            .cloned()
            .ok_or(TodoServiceError::NotFound(id))?;
        todo.set_status(Status::verbatim(status_raw));
        self.store.update(&todo).await?;
        state.todos.insert(id, todo.clone());
        Ok(todo)
    }

    /// Removes the todo from the store and the in-memory collection.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no such todo exists, or
    /// [`TodoServiceError::Store`] when the store delete fails, in which
    /// case the in-memory record is retained.
    pub async fn delete(&self, id: TodoId) -> TodoServiceResult<()> {
        let mut state = self.state.write().await;
        if !state.todos.contains_key(&id) {
            return Err(TodoServiceError::NotFound(id));
        }
        self.store.delete(id).await?;
        state.todos.remove(&id);
        Ok(())
    }

    /// Returns all todos in creation (identifier) order.
    pub async fn list(&self) -> Vec<Todo> {
        let state = self.state.read().await;
        state.todos.values().cloned().collect()
    }

    /// Runs an identifier-set fetch against the store and resolves the
    /// result from the in-memory collection as one step under the read
    /// lock, so a view can never interleave with an in-flight mutation.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Inconsistent`] when the fetch yields
    /// an identifier the collection cannot resolve; with mutations locked
    /// out for the duration, that indicates real registry/store
    /// divergence rather than a racing write.
    pub async fn resolve_view<F, Fut>(&self, fetch_ids: F) -> TodoServiceResult<Vec<Todo>>
    where
        F: FnOnce(Arc<S>) -> Fut + Send,
        Fut: Future<Output = Vec<TodoId>> + Send,
    {
        let state = self.state.read().await;
        let ids = fetch_ids(Arc::clone(&self.store)).await;
        ids.into_iter()
            .map(|id| {
                state
                    .todos
                    .get(&id)
                    .cloned()
                    .ok_or(TodoServiceError::Inconsistent(id))
            })
            .collect()
    }

    /// Wipes the store and the in-memory collection. The identifier
    /// counter keeps its position so cleared identifiers are not reused.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Store`] when the store wipe fails, in
    /// which case the in-memory collection is retained.
    pub async fn clear(&self) -> TodoServiceResult<()> {
        let mut state = self.state.write().await;
        self.store.delete_all().await?;
        state.todos.clear();
        Ok(())
    }
}
