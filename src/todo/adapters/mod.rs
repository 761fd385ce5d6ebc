//! Persistence adapters for the todo module.
//!
//! This module provides concrete implementations of the [`TodoStore`]
//! port, following hexagonal architecture principles. Adapters handle all
//! infrastructure concerns while the domain remains pure.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryTodoStore`]: Thread-safe in-memory storage for
//!   unit testing
//! - [`sqlite::SqliteTodoStore`]: Durable `SQLite` persistence using
//!   Diesel ORM
//!
//! [`TodoStore`]: crate::todo::ports::TodoStore

pub mod memory;
pub mod sqlite;
