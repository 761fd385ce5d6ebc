//! In-memory adapter implementation for testing.
//!
//! Provides a simple, thread-safe store suitable for unit testing without
//! database dependencies.

mod store;

pub use store::InMemoryTodoStore;
