//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod tasks;

pub use tasks::{create_task, delete_task, get_task, list_tasks, update_task};
