//! Unit tests for the todo module.
//!
//! Tests are organised by concern, covering happy paths, error cases, and
//! edge cases for all public APIs.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]


mod service_tests;
