//! Lookups over the catalog stores' named value tables.
//!
//! Submission statuses, upload statuses, and upload types all share the
//! same shape: a closed table of `{id, name}` rows fetched in full from
//! the catalog store. Nothing here is cached: callers re-fetch the table
//! on every operation and resolve names at call time, so a concurrent
//! rename in the store is observed immediately.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// One row of a named lookup catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupValue {
    pub id: DbId,
    pub name: String,
}

impl LookupValue {
    pub fn new(id: DbId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Find the first catalog entry with the given name (exact match).
pub fn by_name<'a>(catalog: &'a [LookupValue], name: &str) -> Option<&'a LookupValue> {
    catalog.iter().find(|value| value.name == name)
}

/// Find the first catalog entry with the given id.
pub fn by_id(catalog: &[LookupValue], id: DbId) -> Option<&LookupValue> {
    catalog.iter().find(|value| value.id == id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
