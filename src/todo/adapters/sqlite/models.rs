//! Diesel row models for todo persistence.

use super::schema::tasks;
use crate::todo::domain::Todo;
use diesel::prelude::*;

/// Query result row for todo records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Registry-assigned todo identifier.
    pub id: i64,
    /// Work-item description.
    pub name: String,
    /// Canonical `YYYY-MM-DD` due date.
    pub dueby: String,
    /// Normalised status text.
    pub status: String,
}

/// Insert model for todo records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Registry-assigned todo identifier.
    pub id: i64,
    /// Work-item description.
    pub name: String,
    /// Canonical `YYYY-MM-DD` due date.
    pub dueby: String,
    /// Normalised status text.
    pub status: String,
}

impl From<&Todo> for NewTaskRow {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id().value(),
            name: todo.description().to_owned(),
            dueby: todo.due().to_string(),
            status: todo.status().as_str().to_owned(),
        }
    }
}
