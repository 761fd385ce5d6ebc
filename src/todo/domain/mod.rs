//! Domain model for the todo lifecycle.
//!
//! The todo domain models identifier assignment, due-date and status
//! normalisation, and partial-update merging while keeping all
//! infrastructure concerns outside of the domain boundary.

mod date;
mod error;
mod ids;
mod status;
mod todo;

pub use date::DueDate;
pub use error::TodoDomainError;
pub use ids::TodoId;
pub use status::Status;
pub use todo::{Todo, UpdateTodo};
