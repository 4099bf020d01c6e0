//! SQL adapter for TaskRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Select, Set, SqlErr,
};

use crate::domain::entities::{FilterParameters, NewTask, Task, TaskId, TaskStatus};
use crate::domain::ports::TaskRepository;
use crate::entity::tasks;
use crate::error::StorageError;

/// SeaORM implementation of TaskRepository
pub struct SqlTaskRepository {
    db: DatabaseConnection,
}

impl SqlTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Base query for every read path: soft-deleted rows never leave the store.
fn visible() -> Select<tasks::Entity> {
    tasks::Entity::find().filter(tasks::Column::IsDeleted.eq(false))
}

/// Fold the supplied filters into a single conjunction.
pub(crate) fn filter_condition(filters: &FilterParameters) -> Condition {
    let predicates = [
        filters.name.as_deref().map(name_contains),
        filters
            .created_at_from
            .map(|t| tasks::Column::CreatedAt.gte(ceil_secs(t))),
        filters
            .created_at_to
            .map(|t| tasks::Column::CreatedAt.lte(t.timestamp())),
        filters
            .updated_at_from
            .map(|t| tasks::Column::UpdatedAt.gte(ceil_secs(t))),
        filters
            .updated_at_to
            .map(|t| tasks::Column::UpdatedAt.lte(t.timestamp())),
    ];

    predicates
        .into_iter()
        .flatten()
        .fold(Condition::all(), |cond, predicate| cond.add(predicate))
}

/// Case-insensitive literal substring match on the name column.
/// `%`, `_` and `\` in the needle match only themselves.
fn name_contains(needle: &str) -> SimpleExpr {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    Expr::expr(Func::lower(Expr::col((tasks::Entity, tasks::Column::Name))))
        .like(LikeExpr::new(pattern).escape('\\'))
}

/// Stored times are whole seconds; a lower bound with a fractional part
/// must round up or it admits the second before it.
fn ceil_secs(t: DateTime<Utc>) -> i64 {
    t.timestamp() + i64::from(t.timestamp_subsec_nanos() > 0)
}

/// Classify a database error into the storage vocabulary
fn classify(err: DbErr) -> StorageError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return StorageError::AlreadyExists;
    }
    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => StorageError::NotFound,
        other => StorageError::Internal(other),
    }
}

#[async_trait]
impl TaskRepository for SqlTaskRepository {
    async fn create(&self, task: &Task) -> Result<Task, StorageError> {
        let model = tasks::ActiveModel {
            id: Set(task.id.to_string()),
            name: Set(task.name.clone()),
            description: Set(task.description.clone()),
            status: Set(task.status.code()),
            created_at: Set(task.created_at.timestamp()),
            updated_at: Set(task.updated_at.map(|t| t.timestamp())),
            is_deleted: Set(false),
        };

        let row = model.insert(&self.db).await.map_err(classify)?;

        row.try_into()
    }

    async fn get(&self, id: &TaskId) -> Result<Task, StorageError> {
        let row = visible()
            .filter(tasks::Column::Id.eq(id.to_string()))
            .one(&self.db)
            .await
            .map_err(classify)?
            .ok_or(StorageError::NotFound)?;

        row.try_into()
    }

    async fn list(&self, filters: &FilterParameters) -> Result<Vec<Task>, StorageError> {
        let rows = visible()
            .filter(filter_condition(filters))
            .order_by_asc(tasks::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(classify)?;

        rows.into_iter().map(Task::try_from).collect()
    }

    async fn update(&self, id: &TaskId, task: &NewTask) -> Result<Task, StorageError> {
        // created_at is left untouched
        let changes = tasks::ActiveModel {
            name: Set(task.name.clone()),
            description: Set(task.description.clone()),
            status: Set(task.status.code()),
            updated_at: Set(Some(Utc::now().timestamp())),
            ..Default::default()
        };

        let row = tasks::Entity::update_many()
            .set(changes)
            .filter(tasks::Column::Id.eq(id.to_string()))
            .filter(tasks::Column::IsDeleted.eq(false))
            .exec_with_returning(&self.db)
            .await
            .map_err(classify)?
            .into_iter()
            .next()
            .ok_or(StorageError::NotFound)?;

        row.try_into()
    }

    async fn delete(&self, id: &TaskId) -> Result<(), StorageError> {
        let result = tasks::Entity::update_many()
            .col_expr(tasks::Column::IsDeleted, Expr::value(true))
            .filter(tasks::Column::Id.eq(id.to_string()))
            .exec(&self.db)
            .await
            .map_err(classify)?;

        if result.rows_affected == 0 {
            tracing::debug!("Delete of unknown task {} was a no-op", id);
        }

        Ok(())
    }
}

fn from_epoch(secs: i64) -> Result<DateTime<Utc>, StorageError> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| {
        StorageError::Internal(DbErr::Type(format!("timestamp out of range: {}", secs)))
    })
}

/// Convert SeaORM model to domain entity
impl TryFrom<tasks::Model> for Task {
    type Error = StorageError;

    fn try_from(model: tasks::Model) -> Result<Self, Self::Error> {
        let id = model.id.parse::<TaskId>().map_err(|e| {
            StorageError::Internal(DbErr::Type(format!("invalid task id {}: {}", model.id, e)))
        })?;

        Ok(Task {
            id,
            name: model.name,
            description: model.description,
            status: TaskStatus::from_code(model.status),
            created_at: from_epoch(model.created_at)?,
            updated_at: model.updated_at.map(from_epoch).transpose()?,
        })
    }
}
