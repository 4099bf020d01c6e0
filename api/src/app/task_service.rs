//! Task service
//!
//! Orchestrates task operations: assigns identity and creation time on create,
//! passes everything else through to the repository, and re-classifies storage
//! errors into `DomainError` so handlers never see storage internals.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{FilterParameters, NewTask, Task, TaskId};
use crate::domain::ports::TaskRepository;
use crate::error::DomainError;

/// Service for managing tasks
pub struct TaskService<TR>
where
    TR: TaskRepository,
{
    tasks: Arc<TR>,
}

impl<TR> TaskService<TR>
where
    TR: TaskRepository,
{
    pub fn new(tasks: Arc<TR>) -> Self {
        Self { tasks }
    }

    /// Create a task with a freshly generated ID
    pub async fn create(&self, new_task: NewTask) -> Result<Task, DomainError> {
        let task = Task {
            id: TaskId::new(),
            name: new_task.name,
            description: new_task.description,
            status: new_task.status,
            created_at: Utc::now(),
            updated_at: None,
        };

        let created = self.tasks.create(&task).await?;
        tracing::info!(task_id = %created.id, "Task created");

        Ok(created)
    }

    pub async fn get(&self, id: &TaskId) -> Result<Task, DomainError> {
        Ok(self.tasks.get(id).await?)
    }

    pub async fn list(&self, filters: &FilterParameters) -> Result<Vec<Task>, DomainError> {
        let tasks = self.tasks.list(filters).await?;
        tracing::debug!(
            filtered = !filters.is_empty(),
            count = tasks.len(),
            "Listed tasks"
        );

        Ok(tasks)
    }

    /// Replace a task's content; the repository stamps the update time
    pub async fn update(&self, id: &TaskId, task: NewTask) -> Result<Task, DomainError> {
        let updated = self.tasks.update(id, &task).await?;
        tracing::info!(task_id = %id, "Task updated");

        Ok(updated)
    }

    /// Soft-delete a task
    pub async fn delete(&self, id: &TaskId) -> Result<(), DomainError> {
        self.tasks.delete(id).await?;
        tracing::info!(task_id = %id, "Task deleted");

        Ok(())
    }
}
