//! Phase entity model.

use serde::{Deserialize, Serialize};

use podium_core::types::DbId;

/// Whether work in a phase is currently permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseStatus {
    Scheduled,
    Open,
    Closed,
}

/// One stage of a project's workflow, as reported by the phase tracker.
///
/// `phase_type` is the category name ("Submission", "Review", ...). The
/// tracker decides the order phases are returned in; nothing here re-sorts
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    pub id: DbId,
    pub project_id: DbId,
    pub phase_type: String,
    pub status: PhaseStatus,
}

impl Phase {
    pub fn new(
        id: DbId,
        project_id: DbId,
        phase_type: impl Into<String>,
        status: PhaseStatus,
    ) -> Self {
        Self {
            id,
            project_id,
            phase_type: phase_type.into(),
            status,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == PhaseStatus::Open
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
