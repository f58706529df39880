//! Well-known property keys and their parse helpers.
//!
//! Projects carry a free-form property bag of string keys to loosely typed
//! values; resources carry string-valued extension properties. The
//! orchestrator reads three of them.

use serde_json::Value;

use crate::types::DbId;

/// Project property: whether a user may hold several Active submissions
/// at once. Stored as the string "true"/"false" or a bare boolean.
pub const PROP_ALLOW_MULTIPLE_SUBMISSIONS: &str = "Allow multiple submissions";

/// Project property: the platform user id of the recorded winner.
pub const PROP_WINNER_EXTERNAL_REFERENCE_ID: &str = "Winner External Reference ID";

/// Resource extension property holding the platform user id. The directory
/// has no typed user field on resources; identity is matched against this
/// property as a string.
pub const EXTERNAL_REFERENCE_ID: &str = "External Reference ID";

/// Interpret a property value as a boolean flag.
///
/// Accepts a JSON boolean or the string "true" (any casing). A missing
/// property or any other value reads as `false`, matching how the property
/// bag stores flags as free text.
pub fn flag_property(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => text.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Interpret a property value as an entity id.
///
/// Accepts a JSON integer or a string holding one. Anything else reads as
/// `None` ("not recorded").
pub fn id_property(value: Option<&Value>) -> Option<DbId> {
    match value {
        Some(Value::Number(number)) => number.as_i64(),
        Some(Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
