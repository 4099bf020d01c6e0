//! SQL adapters
//!
//! Implementations of repository traits using SeaORM. The backend (SQLite or
//! PostgreSQL) is chosen by the connection URL.

pub mod schema;
pub mod task_repo;


pub use schema::ensure_schema;
pub use task_repo::SqlTaskRepository;
