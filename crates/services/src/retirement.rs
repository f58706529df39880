//! Retirement of superseded submissions.

use std::sync::Arc;

use podium_core::catalog::{by_name, LookupValue};
use podium_core::statuses::STATUS_DELETED;
use podium_core::types::DbId;
use podium_stores::models::Resource;
use podium_stores::{SubmissionFilter, UploadCatalog};

use crate::error::{ServiceError, ServiceResult};
use crate::status_transition::StatusTransitionService;

/// Marks a user's prior submissions as Deleted when a new upload
/// supersedes them.
pub struct RetirementPolicy {
    uploads: Arc<dyn UploadCatalog>,
    transitions: StatusTransitionService,
}

impl RetirementPolicy {
    pub fn new(uploads: Arc<dyn UploadCatalog>) -> Self {
        let transitions = StatusTransitionService::new(uploads.clone());
        Self {
            uploads,
            transitions,
        }
    }

    /// Retire every submission owned by `resource`, except `retain`.
    ///
    /// `statuses` is the submission-status catalog the caller already
    /// fetched during the same operation; it is reused here rather than
    /// fetched again. `retain` carries the id of a just-created submission
    /// that must stay Active; pass `None` when the triggering upload
    /// created no submission record.
    ///
    /// Submissions are processed in the search's order; each transition is
    /// independent, so a failure partway through leaves the earlier ones
    /// retired and the later ones untouched. The transition is followed by
    /// a direct persist of the mutated record, keeping the record the
    /// caller holds and the one the catalog holds in step.
    pub async fn retire(
        &self,
        user_id: DbId,
        resource: &Resource,
        statuses: &[LookupValue],
        retain: Option<DbId>,
    ) -> ServiceResult<()> {
        let Some(deleted) = by_name(statuses, STATUS_DELETED) else {
            tracing::error!("submission status catalog is missing {STATUS_DELETED:?}");
            return Err(ServiceError::MissingCatalogEntry {
                catalog: "submission status",
                name: STATUS_DELETED,
            });
        };

        let filter = SubmissionFilter::by_resource(resource.id);
        let previous = self.uploads.search_submissions(&filter).await?;

        let operator = user_id.to_string();
        for mut submission in previous {
            if retain == Some(submission.id) {
                continue;
            }
            self.transitions
                .transition(submission.id, deleted.id, &operator)
                .await?;
            submission.status_id = deleted.id;
            self.uploads.update_submission(&submission, &operator).await?;
            tracing::info!(
                submission_id = submission.id,
                user_id,
                "retired superseded submission"
            );
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
