//! `SQLite` adapter for durable todo persistence.

mod models;
mod schema;
mod store;

pub use store::{SqlitePool, SqliteTodoStore};
