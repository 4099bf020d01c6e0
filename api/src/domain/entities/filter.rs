//! Task list filters

use chrono::{DateTime, Utc};

/// Optional predicates narrowing a task listing.
///
/// Every field is independent; an absent field leaves that dimension
/// unconstrained. Bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterParameters {
    /// Substring of the task name
    pub name: Option<String>,
    pub created_at_from: Option<DateTime<Utc>>,
    pub created_at_to: Option<DateTime<Utc>>,
    pub updated_at_from: Option<DateTime<Utc>>,
    pub updated_at_to: Option<DateTime<Utc>>,
}

impl FilterParameters {
    /// True when no predicate is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
