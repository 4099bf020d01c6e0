//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! `InMemoryTaskRepository` mirrors the SQL adapter's semantics for service
//! tests. Failure paths use the mockall-generated `MockTaskRepository` from
//! the ports module instead. Router tests run against the real adapter on an
//! in-memory SQLite database (`memory_db`).

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
