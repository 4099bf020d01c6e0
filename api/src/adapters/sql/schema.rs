//! Schema bootstrap
//!
//! Creates missing tables from the SeaORM entity definitions, so a fresh
//! database file is usable without a separate migration step.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::entity::tasks;

pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(tasks::Entity);
    table.if_not_exists();

    db.execute(backend.build(&table)).await?;
    tracing::debug!("Schema ready ({:?})", backend);

    Ok(())
}
