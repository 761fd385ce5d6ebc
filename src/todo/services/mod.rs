//! Application services for the todo lifecycle and query engine.

mod facade;
mod queries;
mod registry;

pub use facade::TodoService;
pub use queries::TodoQueries;
pub use registry::{TodoRegistry, TodoServiceError, TodoServiceResult};
