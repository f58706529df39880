//! Argument validation helpers.
//!
//! Entry points validate their raw inputs before touching any external
//! store; these helpers return the failure message to surface.

use crate::types::DbId;

/// Validate that an identifier is non-negative.
pub fn check_id(value: DbId, name: &str) -> Result<(), String> {
    if value < 0 {
        Err(format!("{name} must not be negative, got {value}"))
    } else {
        Ok(())
    }
}

/// Validate that a string argument is non-empty after trimming.
pub fn check_string(value: &str, name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{name} must not be empty"))
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
