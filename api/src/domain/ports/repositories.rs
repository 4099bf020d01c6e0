//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SQL via SeaORM).

use async_trait::async_trait;

use crate::domain::entities::{FilterParameters, NewTask, Task, TaskId};
use crate::error::StorageError;

/// Repository for Task entities
///
/// Soft-deleted tasks are invisible to every method except `delete`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persist a fully-formed task and return it as stored
    async fn create(&self, task: &Task) -> Result<Task, StorageError>;

    /// Get a task by ID
    async fn get(&self, id: &TaskId) -> Result<Task, StorageError>;

    /// List tasks matching every supplied filter
    async fn list(&self, filters: &FilterParameters) -> Result<Vec<Task>, StorageError>;

    /// Replace name, description and status, stamping the update time
    async fn update(&self, id: &TaskId, task: &NewTask) -> Result<Task, StorageError>;

    /// Soft-delete a task. Succeeds whether or not the task exists.
    async fn delete(&self, id: &TaskId) -> Result<(), StorageError>;
}
