//! SeaORM entities
//!
//! Storage-side row models. These are separate from the domain models in
//! `domain::entities`; adapters translate between the two.

pub mod tasks;
