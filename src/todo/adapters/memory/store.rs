//! In-memory store for todo lifecycle tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::todo::{
    domain::{DueDate, Todo, TodoId},
    ports::{TodoStore, TodoStoreError, TodoStoreResult},
};

/// Thread-safe in-memory todo store.
///
/// Rows live in a `BTreeMap` keyed by identifier, so ordered reads come
/// out in identifier (creation) order for free.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoStore {
    rows: Arc<RwLock<BTreeMap<TodoId, Todo>>>,
}

impl InMemoryTodoStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TodoStoreResult<RwLockReadGuard<'_, BTreeMap<TodoId, Todo>>> {
        self.rows
            .read()
            .map_err(|err| TodoStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> TodoStoreResult<RwLockWriteGuard<'_, BTreeMap<TodoId, Todo>>> {
        self.rows
            .write()
            .map_err(|err| TodoStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn matching_ids(&self, predicate: impl Fn(&Todo) -> bool) -> TodoStoreResult<Vec<TodoId>> {
        let rows = self.read()?;
        Ok(rows
            .values()
            .filter(|todo| predicate(todo))
            .map(Todo::id)
            .collect())
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn insert(&self, todo: &Todo) -> TodoStoreResult<()> {
        let mut rows = self.write()?;
        rows.insert(todo.id(), todo.clone());
        Ok(())
    }

    async fn update(&self, todo: &Todo) -> TodoStoreResult<()> {
        let mut rows = self.write()?;
        rows.insert(todo.id(), todo.clone());
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> TodoStoreResult<()> {
        let mut rows = self.write()?;
        rows.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> TodoStoreResult<()> {
        let mut rows = self.write()?;
        rows.clear();
        Ok(())
    }

    async fn all(&self) -> TodoStoreResult<Vec<Todo>> {
        let rows = self.read()?;
        Ok(rows.values().cloned().collect())
    }

    async fn ids(&self) -> TodoStoreResult<Vec<TodoId>> {
        let rows = self.read()?;
        Ok(rows.keys().copied().collect())
    }

    async fn overdue_ids(&self, today: DueDate) -> TodoStoreResult<Vec<TodoId>> {
        self.matching_ids(|todo| todo.due() < today && todo.status().is_open())
    }

    async fn finished_ids(&self) -> TodoStoreResult<Vec<TodoId>> {
        self.matching_ids(|todo| todo.status().is_finished())
    }

    async fn due_on_ids(&self, date: DueDate) -> TodoStoreResult<Vec<TodoId>> {
        self.matching_ids(|todo| todo.due() == date && !todo.status().is_finished())
    }
}
