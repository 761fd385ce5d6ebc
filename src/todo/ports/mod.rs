//! Port contracts for todo persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by todo services.

pub mod store;

pub use store::{TodoStore, TodoStoreError, TodoStoreResult};
