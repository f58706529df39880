//! Resource and resource role entity models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use podium_core::properties::EXTERNAL_REFERENCE_ID;
use podium_core::types::DbId;

/// A role definition from the role/resource directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRole {
    pub id: DbId,
    pub name: String,
}

impl ResourceRole {
    pub fn new(id: DbId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A user's role assignment on a project.
///
/// The directory keys a resource by role and project; the platform user it
/// belongs to is recorded only as the "External Reference ID" extension
/// property. A resource also owns the set of submission ids credited to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: DbId,
    pub role_id: DbId,
    pub project_id: DbId,
    pub properties: HashMap<String, String>,
    pub submissions: Vec<DbId>,
}

impl Resource {
    pub fn new(id: DbId, role_id: DbId, project_id: DbId) -> Self {
        Self {
            id,
            role_id,
            project_id,
            properties: HashMap::new(),
            submissions: Vec::new(),
        }
    }

    /// Attach the platform user id extension property, builder-style.
    pub fn with_external_reference(mut self, user_id: DbId) -> Self {
        self.properties
            .insert(EXTERNAL_REFERENCE_ID.to_string(), user_id.to_string());
        self
    }

    /// The platform user id recorded on this resource, as stored (a
    /// string; the directory never types it).
    pub fn external_reference_id(&self) -> Option<&str> {
        self.properties.get(EXTERNAL_REFERENCE_ID).map(String::as_str)
    }

    /// Credit a submission to this resource. Adding an id twice is a
    /// no-op.
    pub fn add_submission(&mut self, submission_id: DbId) {
        if !self.submissions.contains(&submission_id) {
            self.submissions.push(submission_id);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
