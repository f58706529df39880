//! Direct submission status changes.

use std::sync::Arc;

use podium_core::catalog::by_id;
use podium_core::types::DbId;
use podium_core::validation::{check_id, check_string};
use podium_stores::UploadCatalog;

use crate::error::{ServiceError, ServiceResult};

/// Validates and applies a status change to an existing submission.
///
/// This is a direct set, not a guarded state machine: any status may move
/// to any other status. The "only Active moves to Deleted, and only via
/// retirement" rule is a convention upheld by callers.
pub struct StatusTransitionService {
    uploads: Arc<dyn UploadCatalog>,
}

impl StatusTransitionService {
    pub fn new(uploads: Arc<dyn UploadCatalog>) -> Self {
        Self { uploads }
    }

    /// Move submission `submission_id` to status `status_id`, crediting
    /// `operator` with the change.
    ///
    /// The status id is checked against the full submission-status catalog
    /// at call time; nothing is cached between calls.
    pub async fn transition(
        &self,
        submission_id: DbId,
        status_id: DbId,
        operator: &str,
    ) -> ServiceResult<()> {
        check_id(submission_id, "submission_id").map_err(ServiceError::InvalidArgument)?;
        check_id(status_id, "status_id").map_err(ServiceError::InvalidArgument)?;
        check_string(operator, "operator").map_err(ServiceError::InvalidArgument)?;

        let Some(mut submission) = self.uploads.get_submission(submission_id).await? else {
            tracing::error!(submission_id, "submission does not exist");
            return Err(ServiceError::SubmissionNotFound { submission_id });
        };

        let statuses = self.uploads.get_all_submission_statuses().await?;
        let Some(status) = by_id(&statuses, status_id) else {
            tracing::error!(status_id, "submission status does not exist");
            return Err(ServiceError::StatusNotFound { status_id });
        };

        submission.status_id = status.id;
        self.uploads.update_submission(&submission, operator).await?;
        tracing::info!(submission_id, status_id, operator, "submission status updated");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
