//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod filter;
pub mod task;

pub use filter::FilterParameters;
pub use task::{NewTask, Task, TaskId, TaskStatus};
