//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, Utc};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::adapters::ensure_schema;
use crate::domain::entities::{NewTask, Task, TaskId, TaskStatus};

/// Create a test task draft with default values
pub fn test_new_task() -> NewTask {
    NewTask {
        name: "buy milk".to_string(),
        description: String::new(),
        status: TaskStatus::Opened,
    }
}

/// Create a persisted-looking test task
pub fn test_task() -> Task {
    Task {
        id: TaskId::new(),
        name: "buy milk".to_string(),
        description: String::new(),
        status: TaskStatus::Opened,
        created_at: at(1_700_000_000),
        updated_at: None,
    }
}

/// Create a test task with a specific name and creation time
pub fn test_task_named(name: &str, created_at: i64) -> Task {
    Task {
        id: TaskId::new(),
        name: name.to_string(),
        description: format!("{} description", name),
        status: TaskStatus::Opened,
        created_at: at(created_at),
        updated_at: None,
    }
}

/// Whole-second UTC timestamp
pub fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).expect("valid timestamp")
}

/// Fresh in-memory SQLite database with the schema applied
pub async fn memory_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    // Every pooled connection would otherwise get its own empty database.
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("Failed to open in-memory database");
    ensure_schema(&db).await.expect("Failed to create schema");
    db
}
