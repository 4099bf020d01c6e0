//! Mock implementations of port traits
//!
//! In-memory implementations that follow the same rules as the SQL adapter:
//! soft-deleted tasks stay stored but are invisible to reads and updates.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{FilterParameters, NewTask, Task, TaskId};
use crate::domain::ports::TaskRepository;
use crate::error::StorageError;

// ============================================================================
// In-Memory Task Repository
// ============================================================================

struct StoredTask {
    task: Task,
    is_deleted: bool,
}

#[derive(Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskId, StoredTask>>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a task for testing
    pub fn with_task(self, task: Task) -> Self {
        self.tasks.write().unwrap().insert(
            task.id,
            StoredTask {
                task,
                is_deleted: false,
            },
        );
        self
    }

    /// Whether the task is physically stored, deleted or not
    pub fn contains(&self, id: &TaskId) -> bool {
        self.tasks.read().unwrap().contains_key(id)
    }

    pub fn is_deleted(&self, id: &TaskId) -> bool {
        self.tasks
            .read()
            .unwrap()
            .get(id)
            .map(|stored| stored.is_deleted)
            .unwrap_or(false)
    }
}

fn satisfies(task: &Task, filters: &FilterParameters) -> bool {
    let name = task.name.to_lowercase();

    filters
        .name
        .as_ref()
        .map_or(true, |needle| name.contains(&needle.to_lowercase()))
        && filters
            .created_at_from
            .map_or(true, |from| task.created_at >= from)
        && filters
            .created_at_to
            .map_or(true, |to| task.created_at <= to)
        && filters
            .updated_at_from
            .map_or(true, |from| task.updated_at.is_some_and(|u| u >= from))
        && filters
            .updated_at_to
            .map_or(true, |to| task.updated_at.is_some_and(|u| u <= to))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: &Task) -> Result<Task, StorageError> {
        let mut tasks = self.tasks.write().unwrap();
        if tasks.contains_key(&task.id) {
            return Err(StorageError::AlreadyExists);
        }
        tasks.insert(
            task.id,
            StoredTask {
                task: task.clone(),
                is_deleted: false,
            },
        );
        Ok(task.clone())
    }

    async fn get(&self, id: &TaskId) -> Result<Task, StorageError> {
        let tasks = self.tasks.read().unwrap();
        match tasks.get(id) {
            Some(stored) if !stored.is_deleted => Ok(stored.task.clone()),
            _ => Err(StorageError::NotFound),
        }
    }

    async fn list(&self, filters: &FilterParameters) -> Result<Vec<Task>, StorageError> {
        let tasks = self.tasks.read().unwrap();
        let mut found: Vec<Task> = tasks
            .values()
            .filter(|stored| !stored.is_deleted && satisfies(&stored.task, filters))
            .map(|stored| stored.task.clone())
            .collect();
        found.sort_by_key(|t| t.created_at);
        Ok(found)
    }

    async fn update(&self, id: &TaskId, task: &NewTask) -> Result<Task, StorageError> {
        let mut tasks = self.tasks.write().unwrap();
        match tasks.get_mut(id) {
            Some(stored) if !stored.is_deleted => {
                stored.task.name = task.name.clone();
                stored.task.description = task.description.clone();
                stored.task.status = task.status;
                stored.task.updated_at = Some(Utc::now());
                Ok(stored.task.clone())
            }
            _ => Err(StorageError::NotFound),
        }
    }

    async fn delete(&self, id: &TaskId) -> Result<(), StorageError> {
        if let Some(stored) = self.tasks.write().unwrap().get_mut(id) {
            stored.is_deleted = true;
        }
        Ok(())
    }
}
