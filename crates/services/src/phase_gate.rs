//! Phase gating.

use std::sync::Arc;

use podium_core::types::DbId;
use podium_stores::models::Phase;
use podium_stores::PhaseTracker;

use crate::error::{ServiceError, ServiceResult};

/// Answers "is phase category X open for project P?".
///
/// Read-only; the only state is the tracker handle.
pub struct PhaseGate {
    phases: Arc<dyn PhaseTracker>,
}

impl PhaseGate {
    pub fn new(phases: Arc<dyn PhaseTracker>) -> Self {
        Self { phases }
    }

    /// Resolve the gating phase for the given categories.
    ///
    /// Fetches all phases of the project and takes the FIRST one whose
    /// category matches any of `categories`, in the tracker's order. A
    /// later matching phase never rescues a closed first match. Fails with
    /// [`ServiceError::ProjectNotEligible`] when no phase matches at all
    /// and [`ServiceError::PhaseNotOpen`] when the first match is not
    /// open.
    pub async fn open_phase(
        &self,
        project_id: DbId,
        categories: &[&str],
    ) -> ServiceResult<Phase> {
        let phases = self.phases.get_phases(project_id).await?;
        let Some(phase) = phases
            .into_iter()
            .find(|phase| categories.contains(&phase.phase_type.as_str()))
        else {
            tracing::error!(project_id, ?categories, "no phase of the required category");
            return Err(ServiceError::ProjectNotEligible { project_id });
        };
        if !phase.is_open() {
            tracing::error!(phase_id = phase.id, phase_type = %phase.phase_type, "gating phase is not open");
            return Err(ServiceError::PhaseNotOpen { phase_id: phase.id });
        }
        Ok(phase)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
