//! Taskdesk: task lifecycle and query core.
//!
//! This crate provides the core of a task-tracking service: creating,
//! reading, updating, and deleting todo records, keeping an in-memory
//! registry consistent with durable storage, and computing time-relative
//! views (overdue, finished, due-on-date).
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! Transport concerns (HTTP routing, payload marshalling, API docs) are
//! owned by external collaborators that call the [`todo::services`] facade.

pub mod todo;
