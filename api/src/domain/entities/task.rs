//! Task domain entity
//!
//! A trackable unit of work. Tasks are owned by the repository once created;
//! services only hold a transient copy for the duration of one operation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Unique identifier for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TaskId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Task status
///
/// `Undefined` is the zero state. It is what an unknown stored code decodes
/// to, and is never accepted from clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Undefined,
    Opened,
    Closed,
}

impl TaskStatus {
    /// Storage code for this status
    pub fn code(self) -> i16 {
        match self {
            TaskStatus::Undefined => 0,
            TaskStatus::Opened => 1,
            TaskStatus::Closed => 2,
        }
    }

    pub fn from_code(code: i16) -> Self {
        match code {
            1 => TaskStatus::Opened,
            2 => TaskStatus::Closed,
            _ => TaskStatus::Undefined,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Undefined => write!(f, "undefined"),
            TaskStatus::Opened => write!(f, "opened"),
            TaskStatus::Closed => write!(f, "closed"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "opened" => Ok(TaskStatus::Opened),
            "closed" => Ok(TaskStatus::Closed),
            _ => Err(format!("Unknown task status: {}", s)),
        }
    }
}

/// A persisted task
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    /// Unset until the first update
    pub updated_at: Option<DateTime<Utc>>,
}

/// Client-supplied task content, used for both create and full replacement
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
}
