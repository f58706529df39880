//! Shared fixture for intake integration tests.
//!
//! Builds an in-memory backend seeded with the standard catalogs, one
//! project, the four well-known roles, and a Submitter resource for the
//! default user, then wires a [`SubmissionIntake`] over it.

use std::sync::Arc;

use serde_json::json;

use podium_core::catalog::by_name;
use podium_core::properties::{
    PROP_ALLOW_MULTIPLE_SUBMISSIONS, PROP_WINNER_EXTERNAL_REFERENCE_ID,
};
use podium_core::roles::{
    ROLE_ACCURACY_REVIEWER, ROLE_FAILURE_REVIEWER, ROLE_STRESS_REVIEWER, ROLE_SUBMITTER,
};
use podium_core::statuses::{STATUS_ACTIVE, STATUS_DELETED};
use podium_core::types::DbId;
use podium_services::{Stores, SubmissionIntake};
use podium_stores::memory::InMemoryStore;
use podium_stores::models::{NewSubmission, Phase, PhaseStatus, Project, Resource};
use podium_stores::{ResourceDirectory, UploadCatalog};

pub const PROJECT_ID: DbId = 500;
pub const USER_ID: DbId = 7001;

pub struct Harness {
    pub store: Arc<InMemoryStore>,
    pub intake: SubmissionIntake,
    pub submitter_role: DbId,
    pub reviewer_roles: Vec<DbId>,
    pub resource_id: DbId,
}

/// Default harness: project 500 with no properties set (multiple
/// submissions disallowed, no winner recorded), all roles seeded, and a
/// Submitter resource for user 7001. Phases are seeded per test.
pub async fn harness() -> Harness {
    let store = Arc::new(InMemoryStore::with_default_catalogs().await);
    store.seed_project(Project::new(PROJECT_ID)).await;

    let submitter_role = store.seed_role(ROLE_SUBMITTER).await;
    let mut reviewer_roles = Vec::new();
    for role in [
        ROLE_ACCURACY_REVIEWER,
        ROLE_FAILURE_REVIEWER,
        ROLE_STRESS_REVIEWER,
    ] {
        reviewer_roles.push(store.seed_role(role).await);
    }

    let resource_id = store
        .seed_resource(
            Resource::new(0, submitter_role, PROJECT_ID).with_external_reference(USER_ID),
        )
        .await;

    let intake = SubmissionIntake::new(Stores::from_backend(store.clone()));
    Harness {
        store,
        intake,
        submitter_role,
        reviewer_roles,
        resource_id,
    }
}

impl Harness {
    /// Seed a phase for the default project.
    pub async fn seed_phase(&self, phase_type: &str, status: PhaseStatus) -> DbId {
        self.store
            .seed_phase(Phase::new(0, PROJECT_ID, phase_type, status))
            .await
    }

    /// Re-seed the project with the given properties.
    pub async fn set_project(&self, project: Project) {
        self.store.seed_project(project).await;
    }

    /// Record `user_id` as the project's winner.
    pub async fn record_winner(&self, user_id: DbId) {
        self.set_project(
            Project::new(PROJECT_ID)
                .with_property(PROP_WINNER_EXTERNAL_REFERENCE_ID, json!(user_id)),
        )
        .await;
    }

    /// Allow the project to keep multiple Active submissions per user.
    pub async fn allow_multiple_submissions(&self) {
        self.set_project(
            Project::new(PROJECT_ID)
                .with_property(PROP_ALLOW_MULTIPLE_SUBMISSIONS, json!("true")),
        )
        .await;
    }

    /// Seed a resource of the given role for another user; returns its id.
    pub async fn seed_resource_for(&self, role_id: DbId, user_id: DbId) -> DbId {
        self.store
            .seed_resource(Resource::new(0, role_id, PROJECT_ID).with_external_reference(user_id))
            .await
    }

    /// An Active submission already credited to the given resource, as if
    /// created by an earlier intake run.
    pub async fn seed_owned_submission(&self, resource_id: DbId, user_id: DbId) -> DbId {
        let submission = self
            .store
            .create_submission(
                NewSubmission {
                    status_id: self.active_status().await,
                },
                &user_id.to_string(),
            )
            .await
            .unwrap();
        let mut resource = self.store.resource(resource_id).await.unwrap();
        resource.add_submission(submission.id);
        self.store
            .update_resource(&resource, &user_id.to_string())
            .await
            .unwrap();
        submission.id
    }

    pub async fn active_status(&self) -> DbId {
        let statuses = self.store.get_all_submission_statuses().await.unwrap();
        by_name(&statuses, STATUS_ACTIVE).unwrap().id
    }

    pub async fn deleted_status(&self) -> DbId {
        let statuses = self.store.get_all_submission_statuses().await.unwrap();
        by_name(&statuses, STATUS_DELETED).unwrap().id
    }

    /// Assert that nothing was persisted and no screening was requested.
    pub async fn assert_no_writes(&self) {
        assert!(self.store.uploads().await.is_empty(), "no upload expected");
        assert!(
            self.store.submissions().await.is_empty(),
            "no submission expected"
        );
        assert!(
            self.store.initiated_screenings().await.is_empty(),
            "no screening expected"
        );
        assert!(self.store.writes().await.is_empty(), "no writes expected");
    }
}
