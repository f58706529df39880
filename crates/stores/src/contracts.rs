//! The five collaborator contracts.
//!
//! Each contract is an object-safe async trait so services can hold the
//! collaborators as `Arc<dyn ...>` trait objects. Every write takes an
//! `operator`: the identifier of the actor credited with the change for
//! audit purposes.
//!
//! Implementations own their durability, locking, and timeout policy; the
//! services above make strictly sequential calls and never retry.

use async_trait::async_trait;

use podium_core::catalog::LookupValue;
use podium_core::types::DbId;

use crate::error::StoreError;
use crate::filters::{ResourceFilter, SubmissionFilter};
use crate::models::{NewSubmission, NewUpload, Phase, Project, Resource, ResourceRole, Submission, Upload};

/// The project property store.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Fetch a project by id; `None` if it does not exist.
    async fn get_project(&self, project_id: DbId) -> Result<Option<Project>, StoreError>;
}

/// The phase/schedule tracker.
#[async_trait]
pub trait PhaseTracker: Send + Sync {
    /// All phases of a project, in the tracker's own order.
    async fn get_phases(&self, project_id: DbId) -> Result<Vec<Phase>, StoreError>;
}

/// The role/resource directory.
#[async_trait]
pub trait ResourceDirectory: Send + Sync {
    /// The full role catalog.
    async fn get_all_resource_roles(&self) -> Result<Vec<ResourceRole>, StoreError>;

    /// Resources matching the filter.
    async fn search_resources(&self, filter: &ResourceFilter)
        -> Result<Vec<Resource>, StoreError>;

    /// Persist a modified resource.
    async fn update_resource(&self, resource: &Resource, operator: &str)
        -> Result<(), StoreError>;
}

/// The durable upload/submission catalog.
#[async_trait]
pub trait UploadCatalog: Send + Sync {
    /// The full upload-status catalog.
    async fn get_all_upload_statuses(&self) -> Result<Vec<LookupValue>, StoreError>;

    /// The full upload-type catalog.
    async fn get_all_upload_types(&self) -> Result<Vec<LookupValue>, StoreError>;

    /// The full submission-status catalog.
    async fn get_all_submission_statuses(&self) -> Result<Vec<LookupValue>, StoreError>;

    /// Persist a new upload; the catalog assigns its id.
    async fn create_upload(&self, upload: NewUpload, operator: &str)
        -> Result<Upload, StoreError>;

    /// Persist a new submission; the catalog assigns its id.
    async fn create_submission(
        &self,
        submission: NewSubmission,
        operator: &str,
    ) -> Result<Submission, StoreError>;

    /// Persist a modified submission.
    async fn update_submission(
        &self,
        submission: &Submission,
        operator: &str,
    ) -> Result<(), StoreError>;

    /// Fetch a submission by id; `None` if it does not exist.
    async fn get_submission(&self, submission_id: DbId)
        -> Result<Option<Submission>, StoreError>;

    /// Submissions matching the filter.
    async fn search_submissions(
        &self,
        filter: &SubmissionFilter,
    ) -> Result<Vec<Submission>, StoreError>;
}

/// The screening trigger.
#[async_trait]
pub trait ScreeningTrigger: Send + Sync {
    /// Queue automated screening of a submission.
    async fn initiate_screening(&self, submission_id: DbId, operator: &str)
        -> Result<(), StoreError>;
}
