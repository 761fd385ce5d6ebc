//! Todo lifecycle management for Taskdesk.
//!
//! This module implements the task lifecycle and query engine: date and
//! status normalisation on every write path, monotonic identifier
//! assignment, registry/store consistency under a single writer lock, and
//! the derived overdue/finished/due-on views. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
