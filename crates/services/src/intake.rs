//! Submission intake orchestration.
//!
//! Three entry points, one shape: validate, load the project, authorize
//! the acting resource, check the gating phase, persist the upload, then
//! run the category's post-create actions and retirement. The differences
//! between the categories are tabulated as [`CategoryPolicy`] constants.
//!
//! # Partial failure
//!
//! No step is transactional across the stores. A failure after the upload
//! is persisted leaves an orphaned Upload with no submission or resource
//! association; retrying the whole operation is the caller's decision and
//! creates a second Upload. Each store provides its own local durability;
//! there is no compensation logic here.
//!
//! # Concurrency
//!
//! These services hold no shared mutable state and do not coordinate
//! concurrent invocations. Two simultaneous general submissions for the
//! same (project, user) can both pass the gate and both retire "previous"
//! submissions, leaving whichever retirement ran last the authoritative
//! Active entry. Serialization, if any, is the catalog store's concern.

use podium_core::catalog::by_name;
use podium_core::phases::{
    FINAL_FIX_GATING_PHASES, SUBMISSION_GATING_PHASES, TEST_CASE_GATING_PHASES,
};
use podium_core::roles::{SUBMITTER_ROLES, TEST_CASE_REVIEWER_ROLES};
use podium_core::statuses::STATUS_ACTIVE;
use podium_core::types::DbId;
use podium_core::upload_types::{
    UPLOAD_TYPE_FINAL_FIX, UPLOAD_TYPE_REVIEW, UPLOAD_TYPE_SUBMISSION,
};
use podium_core::validation::{check_id, check_string};
use podium_stores::models::{NewSubmission, NewUpload, Project, Upload};

use crate::authorizer::RoleAuthorizer;
use crate::error::{ServiceError, ServiceResult};
use crate::phase_gate::PhaseGate;
use crate::providers::Stores;
use crate::retirement::RetirementPolicy;

/// What distinguishes one submission category from another.
struct CategoryPolicy {
    gating_phases: &'static [&'static str],
    allowed_roles: &'static [&'static str],
    upload_type: &'static str,
}

const GENERAL_SUBMISSION: CategoryPolicy = CategoryPolicy {
    gating_phases: SUBMISSION_GATING_PHASES,
    allowed_roles: SUBMITTER_ROLES,
    upload_type: UPLOAD_TYPE_SUBMISSION,
};

const FINAL_FIX: CategoryPolicy = CategoryPolicy {
    gating_phases: FINAL_FIX_GATING_PHASES,
    allowed_roles: SUBMITTER_ROLES,
    upload_type: UPLOAD_TYPE_FINAL_FIX,
};

const TEST_CASES: CategoryPolicy = CategoryPolicy {
    gating_phases: TEST_CASE_GATING_PHASES,
    allowed_roles: TEST_CASE_REVIEWER_ROLES,
    upload_type: UPLOAD_TYPE_REVIEW,
};

/// The top-level orchestrator for creating submissions.
pub struct SubmissionIntake {
    stores: Stores,
    gate: PhaseGate,
    authorizer: RoleAuthorizer,
    retirement: RetirementPolicy,
}

impl SubmissionIntake {
    pub fn new(stores: Stores) -> Self {
        let gate = PhaseGate::new(stores.phases.clone());
        let authorizer = RoleAuthorizer::new(stores.resources.clone());
        let retirement = RetirementPolicy::new(stores.uploads.clone());
        Self {
            stores,
            gate,
            authorizer,
            retirement,
        }
    }

    /// Create a general submission, returning the new **submission** id.
    ///
    /// Gated on an open Submission or Screening phase and the Submitter
    /// role. Persists the upload and the submission, credits the
    /// submission to the acting resource, kicks off screening, and, when
    /// the project disallows multiple submissions, retires the user's
    /// prior submissions, leaving the new one Active.
    pub async fn create_submission(
        &self,
        project_id: DbId,
        user_id: DbId,
        filename: &str,
    ) -> ServiceResult<DbId> {
        tracing::debug!(project_id, user_id, filename, "creating general submission");
        check_args(project_id, user_id, filename)?;

        let project = self.load_project(project_id).await?;
        let mut resource = self
            .authorizer
            .authorize(project_id, user_id, GENERAL_SUBMISSION.allowed_roles)
            .await?;
        self.gate
            .open_phase(project_id, GENERAL_SUBMISSION.gating_phases)
            .await?;

        let operator = user_id.to_string();
        self.persist_upload(&project, user_id, filename, &GENERAL_SUBMISSION, &operator)
            .await?;

        let statuses = self.stores.uploads.get_all_submission_statuses().await?;
        let Some(active) = by_name(&statuses, STATUS_ACTIVE) else {
            return Err(ServiceError::MissingCatalogEntry {
                catalog: "submission status",
                name: STATUS_ACTIVE,
            });
        };
        let submission = self
            .stores
            .uploads
            .create_submission(
                NewSubmission {
                    status_id: active.id,
                },
                &operator,
            )
            .await?;
        tracing::info!(
            submission_id = submission.id,
            project_id,
            user_id,
            "created submission"
        );

        resource.add_submission(submission.id);
        self.stores
            .resources
            .update_resource(&resource, &operator)
            .await?;
        tracing::info!(
            resource_id = resource.id,
            submission_id = submission.id,
            "credited submission to resource"
        );

        self.stores
            .screening
            .initiate_screening(submission.id, &operator)
            .await?;
        tracing::info!(submission_id = submission.id, "initiated screening");

        if !project.allow_multiple_submissions() {
            self.retirement
                .retire(user_id, &resource, &statuses, Some(submission.id))
                .await?;
            tracing::info!(user_id, "retired previous submissions");
        }

        Ok(submission.id)
    }

    /// Create a final-fix upload, returning the new **upload** id.
    ///
    /// Gated on an open Final Fix phase and the Submitter role, and only
    /// accepted from the user matching the project's recorded winner. A
    /// final fix always supersedes the user's previous submissions.
    pub async fn create_final_fix(
        &self,
        project_id: DbId,
        user_id: DbId,
        filename: &str,
    ) -> ServiceResult<DbId> {
        tracing::debug!(project_id, user_id, filename, "creating final fix");
        check_args(project_id, user_id, filename)?;

        let project = self.load_project(project_id).await?;
        let resource = self
            .authorizer
            .authorize(project_id, user_id, FINAL_FIX.allowed_roles)
            .await?;

        match project.winner_external_reference_id() {
            Some(winner_id) if winner_id == user_id => {}
            _ => {
                tracing::error!(user_id, project_id, "final fix attempted by non-winner");
                return Err(ServiceError::NotWinner { user_id });
            }
        }

        self.gate
            .open_phase(project_id, FINAL_FIX.gating_phases)
            .await?;

        let operator = user_id.to_string();
        let upload = self
            .persist_upload(&project, user_id, filename, &FINAL_FIX, &operator)
            .await?;

        let statuses = self.stores.uploads.get_all_submission_statuses().await?;
        self.retirement
            .retire(user_id, &resource, &statuses, None)
            .await?;
        tracing::info!(user_id, "retired previous submissions");

        Ok(upload.id)
    }

    /// Create a test-case upload, returning the new **upload** id.
    ///
    /// Gated on an open Review phase and any of the reviewer roles. A new
    /// test-case upload always supersedes the reviewer's previous
    /// submissions.
    pub async fn create_test_cases(
        &self,
        project_id: DbId,
        user_id: DbId,
        filename: &str,
    ) -> ServiceResult<DbId> {
        tracing::debug!(project_id, user_id, filename, "creating test cases");
        check_args(project_id, user_id, filename)?;

        let project = self.load_project(project_id).await?;
        let resource = self
            .authorizer
            .authorize(project_id, user_id, TEST_CASES.allowed_roles)
            .await?;
        self.gate
            .open_phase(project_id, TEST_CASES.gating_phases)
            .await?;

        let operator = user_id.to_string();
        let upload = self
            .persist_upload(&project, user_id, filename, &TEST_CASES, &operator)
            .await?;

        let statuses = self.stores.uploads.get_all_submission_statuses().await?;
        self.retirement
            .retire(user_id, &resource, &statuses, None)
            .await?;
        tracing::info!(user_id, "retired previous submissions");

        Ok(upload.id)
    }

    async fn load_project(&self, project_id: DbId) -> ServiceResult<Project> {
        match self.stores.projects.get_project(project_id).await? {
            Some(project) => Ok(project),
            None => {
                tracing::error!(project_id, "project does not exist");
                Err(ServiceError::ProjectNotFound { project_id })
            }
        }
    }

    /// Resolve the Active upload status and the category's upload type by
    /// name, then persist the upload with the filename as its parameter.
    async fn persist_upload(
        &self,
        project: &Project,
        user_id: DbId,
        filename: &str,
        policy: &CategoryPolicy,
        operator: &str,
    ) -> ServiceResult<Upload> {
        let statuses = self.stores.uploads.get_all_upload_statuses().await?;
        let Some(active) = by_name(&statuses, STATUS_ACTIVE) else {
            return Err(ServiceError::MissingCatalogEntry {
                catalog: "upload status",
                name: STATUS_ACTIVE,
            });
        };
        let types = self.stores.uploads.get_all_upload_types().await?;
        let Some(upload_type) = by_name(&types, policy.upload_type) else {
            return Err(ServiceError::MissingCatalogEntry {
                catalog: "upload type",
                name: policy.upload_type,
            });
        };

        let upload = self
            .stores
            .uploads
            .create_upload(
                NewUpload {
                    project_id: project.id,
                    owner: user_id,
                    type_id: upload_type.id,
                    status_id: active.id,
                    parameter: filename.to_string(),
                },
                operator,
            )
            .await?;
        tracing::info!(
            upload_id = upload.id,
            project_id = project.id,
            owner = user_id,
            filename,
            upload_type = policy.upload_type,
            "created upload"
        );
        Ok(upload)
    }
}

fn check_args(project_id: DbId, user_id: DbId, filename: &str) -> ServiceResult<()> {
    check_id(project_id, "project_id").map_err(ServiceError::InvalidArgument)?;
    check_id(user_id, "user_id").map_err(ServiceError::InvalidArgument)?;
    check_string(filename, "filename").map_err(ServiceError::InvalidArgument)?;
    Ok(())
}
