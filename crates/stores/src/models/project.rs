//! Project entity model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use podium_core::properties::{
    self, PROP_ALLOW_MULTIPLE_SUBMISSIONS, PROP_WINNER_EXTERNAL_REFERENCE_ID,
};
use podium_core::types::DbId;

/// A project as reported by the project store.
///
/// Beyond its id a project is a bag of named properties; the keys the
/// orchestrator reads are defined in [`podium_core::properties`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub properties: HashMap<String, Value>,
}

impl Project {
    pub fn new(id: DbId) -> Self {
        Self {
            id,
            properties: HashMap::new(),
        }
    }

    /// Set a property, builder-style. Mostly useful for seeding tests.
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Look up a raw property value.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Whether the project lets one user hold several Active submissions.
    /// Unset or unparsable reads as `false`.
    pub fn allow_multiple_submissions(&self) -> bool {
        properties::flag_property(self.property(PROP_ALLOW_MULTIPLE_SUBMISSIONS))
    }

    /// The platform user id of the recorded winner, if one is recorded
    /// and parses as an id.
    pub fn winner_external_reference_id(&self) -> Option<DbId> {
        properties::id_property(self.property(PROP_WINNER_EXTERNAL_REFERENCE_ID))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn multiple_submissions_flag_defaults_to_false() {
        assert!(!Project::new(1).allow_multiple_submissions());
    }

    #[test]
    fn multiple_submissions_flag_reads_string_property() {
        let project =
            Project::new(1).with_property(PROP_ALLOW_MULTIPLE_SUBMISSIONS, json!("true"));
        assert!(project.allow_multiple_submissions());
    }

    #[test]
    fn winner_absent_when_not_recorded() {
        assert_eq!(Project::new(1).winner_external_reference_id(), None);
    }

    #[test]
    fn winner_reads_numeric_property() {
        let project =
            Project::new(1).with_property(PROP_WINNER_EXTERNAL_REFERENCE_ID, json!(7001));
        assert_eq!(project.winner_external_reference_id(), Some(7001));
    }
}
