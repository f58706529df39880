//! In-memory implementation of all five collaborator contracts.
//!
//! One [`InMemoryStore`] plays every collaborator at once, holding all
//! state behind a single async mutex. Suitable for tests and development
//! wiring; production deployments point the contracts at the real platform
//! services instead.
//!
//! Ids are assigned from one monotonically increasing sequence shared by
//! all entity kinds, so no two seeded or created entities ever collide.
//! Every write is also appended to a journal recording the operator it was
//! credited to, which tests use to assert audit attribution.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use podium_core::catalog::LookupValue;
use podium_core::statuses::{STATUS_ACTIVE, STATUS_DELETED};
use podium_core::types::DbId;
use podium_core::upload_types::{
    UPLOAD_TYPE_FINAL_FIX, UPLOAD_TYPE_REVIEW, UPLOAD_TYPE_SUBMISSION,
};

use crate::contracts::{
    PhaseTracker, ProjectStore, ResourceDirectory, ScreeningTrigger, UploadCatalog,
};
use crate::error::StoreError;
use crate::filters::{ResourceFilter, SubmissionFilter};
use crate::models::{
    NewSubmission, NewUpload, Phase, Project, Resource, ResourceRole, Submission, Upload,
};

/// A screening request recorded by the in-memory trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningRequest {
    pub submission_id: DbId,
    pub operator: String,
}

/// One journal entry per write, for audit assertions in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    pub entity: &'static str,
    pub entity_id: DbId,
    pub operator: String,
}

#[derive(Default)]
struct State {
    projects: HashMap<DbId, Project>,
    phases: HashMap<DbId, Vec<Phase>>,
    roles: Vec<ResourceRole>,
    resources: HashMap<DbId, Resource>,
    uploads: HashMap<DbId, Upload>,
    submissions: HashMap<DbId, Submission>,
    upload_statuses: Vec<LookupValue>,
    upload_types: Vec<LookupValue>,
    submission_statuses: Vec<LookupValue>,
    screenings: Vec<ScreeningRequest>,
    writes: Vec<RecordedWrite>,
    next_id: DbId,
}

impl State {
    fn alloc_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory backend for every collaborator contract.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose three lookup catalogs carry the standard seed rows:
    /// "Active"/"Deleted" statuses and the three upload types.
    pub async fn with_default_catalogs() -> Self {
        let store = Self::new();
        {
            let mut state = store.state.lock().await;
            let active = state.alloc_id();
            let deleted = state.alloc_id();
            state.submission_statuses = vec![
                LookupValue::new(active, STATUS_ACTIVE),
                LookupValue::new(deleted, STATUS_DELETED),
            ];
            let active = state.alloc_id();
            let deleted = state.alloc_id();
            state.upload_statuses = vec![
                LookupValue::new(active, STATUS_ACTIVE),
                LookupValue::new(deleted, STATUS_DELETED),
            ];
            let submission = state.alloc_id();
            let final_fix = state.alloc_id();
            let review = state.alloc_id();
            state.upload_types = vec![
                LookupValue::new(submission, UPLOAD_TYPE_SUBMISSION),
                LookupValue::new(final_fix, UPLOAD_TYPE_FINAL_FIX),
                LookupValue::new(review, UPLOAD_TYPE_REVIEW),
            ];
        }
        store
    }

    // -- seeding -----------------------------------------------------------

    pub async fn seed_project(&self, project: Project) {
        self.state.lock().await.projects.insert(project.id, project);
    }

    /// Seed a phase, appended after the project's existing phases.
    pub async fn seed_phase(&self, phase: Phase) -> DbId {
        let mut state = self.state.lock().await;
        let id = state.alloc_id();
        let mut phase = phase;
        phase.id = id;
        state.phases.entry(phase.project_id).or_default().push(phase);
        id
    }

    pub async fn seed_role(&self, name: &str) -> DbId {
        let mut state = self.state.lock().await;
        let id = state.alloc_id();
        state.roles.push(ResourceRole::new(id, name));
        id
    }

    pub async fn seed_resource(&self, resource: Resource) -> DbId {
        let mut state = self.state.lock().await;
        let id = state.alloc_id();
        let mut resource = resource;
        resource.id = id;
        state.resources.insert(id, resource);
        id
    }

    /// Replace the submission-status catalog (for catalog-corruption tests).
    pub async fn set_submission_statuses(&self, catalog: Vec<LookupValue>) {
        self.state.lock().await.submission_statuses = catalog;
    }

    /// Replace the upload-status catalog.
    pub async fn set_upload_statuses(&self, catalog: Vec<LookupValue>) {
        self.state.lock().await.upload_statuses = catalog;
    }

    /// Replace the upload-type catalog.
    pub async fn set_upload_types(&self, catalog: Vec<LookupValue>) {
        self.state.lock().await.upload_types = catalog;
    }

    // -- inspection --------------------------------------------------------

    pub async fn upload(&self, upload_id: DbId) -> Option<Upload> {
        self.state.lock().await.uploads.get(&upload_id).cloned()
    }

    pub async fn uploads(&self) -> Vec<Upload> {
        let mut uploads: Vec<_> = self.state.lock().await.uploads.values().cloned().collect();
        uploads.sort_by_key(|upload| upload.id);
        uploads
    }

    pub async fn submission(&self, submission_id: DbId) -> Option<Submission> {
        self.state
            .lock()
            .await
            .submissions
            .get(&submission_id)
            .cloned()
    }

    pub async fn submissions(&self) -> Vec<Submission> {
        let mut submissions: Vec<_> = self
            .state
            .lock()
            .await
            .submissions
            .values()
            .cloned()
            .collect();
        submissions.sort_by_key(|submission| submission.id);
        submissions
    }

    pub async fn resource(&self, resource_id: DbId) -> Option<Resource> {
        self.state.lock().await.resources.get(&resource_id).cloned()
    }

    pub async fn initiated_screenings(&self) -> Vec<ScreeningRequest> {
        self.state.lock().await.screenings.clone()
    }

    pub async fn writes(&self) -> Vec<RecordedWrite> {
        self.state.lock().await.writes.clone()
    }
}

#[async_trait]
impl ProjectStore for InMemoryStore {
    async fn get_project(&self, project_id: DbId) -> Result<Option<Project>, StoreError> {
        Ok(self.state.lock().await.projects.get(&project_id).cloned())
    }
}

#[async_trait]
impl PhaseTracker for InMemoryStore {
    async fn get_phases(&self, project_id: DbId) -> Result<Vec<Phase>, StoreError> {
        Ok(self
            .state
            .lock()
            .await
            .phases
            .get(&project_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl ResourceDirectory for InMemoryStore {
    async fn get_all_resource_roles(&self) -> Result<Vec<ResourceRole>, StoreError> {
        Ok(self.state.lock().await.roles.clone())
    }

    async fn search_resources(
        &self,
        filter: &ResourceFilter,
    ) -> Result<Vec<Resource>, StoreError> {
        if filter.role_ids.is_empty() {
            return Err(StoreError::Query(
                "resource filter needs at least one role id".to_string(),
            ));
        }
        let state = self.state.lock().await;
        let mut matches: Vec<_> = state
            .resources
            .values()
            .filter(|resource| {
                resource.project_id == filter.project_id
                    && filter.role_ids.contains(&resource.role_id)
                    && resource.properties.get(&filter.extension_property_name)
                        == Some(&filter.extension_property_value)
            })
            .cloned()
            .collect();
        matches.sort_by_key(|resource| resource.id);
        Ok(matches)
    }

    async fn update_resource(
        &self,
        resource: &Resource,
        operator: &str,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        if !state.resources.contains_key(&resource.id) {
            return Err(StoreError::Backend(format!(
                "no resource with id {}",
                resource.id
            )));
        }
        state.resources.insert(resource.id, resource.clone());
        state.writes.push(RecordedWrite {
            entity: "resource",
            entity_id: resource.id,
            operator: operator.to_string(),
        });
        Ok(())
    }
}

#[async_trait]
impl UploadCatalog for InMemoryStore {
    async fn get_all_upload_statuses(&self) -> Result<Vec<LookupValue>, StoreError> {
        Ok(self.state.lock().await.upload_statuses.clone())
    }

    async fn get_all_upload_types(&self) -> Result<Vec<LookupValue>, StoreError> {
        Ok(self.state.lock().await.upload_types.clone())
    }

    async fn get_all_submission_statuses(&self) -> Result<Vec<LookupValue>, StoreError> {
        Ok(self.state.lock().await.submission_statuses.clone())
    }

    async fn create_upload(
        &self,
        upload: NewUpload,
        operator: &str,
    ) -> Result<Upload, StoreError> {
        let mut state = self.state.lock().await;
        let id = state.alloc_id();
        let upload = Upload {
            id,
            project_id: upload.project_id,
            owner: upload.owner,
            type_id: upload.type_id,
            status_id: upload.status_id,
            parameter: upload.parameter,
            created_at: Utc::now(),
        };
        state.uploads.insert(id, upload.clone());
        state.writes.push(RecordedWrite {
            entity: "upload",
            entity_id: id,
            operator: operator.to_string(),
        });
        Ok(upload)
    }

    async fn create_submission(
        &self,
        submission: NewSubmission,
        operator: &str,
    ) -> Result<Submission, StoreError> {
        let mut state = self.state.lock().await;
        let id = state.alloc_id();
        let now = Utc::now();
        let submission = Submission {
            id,
            status_id: submission.status_id,
            created_at: now,
            updated_at: now,
        };
        state.submissions.insert(id, submission.clone());
        state.writes.push(RecordedWrite {
            entity: "submission",
            entity_id: id,
            operator: operator.to_string(),
        });
        Ok(submission)
    }

    async fn update_submission(
        &self,
        submission: &Submission,
        operator: &str,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        if !state.submissions.contains_key(&submission.id) {
            return Err(StoreError::Backend(format!(
                "no submission with id {}",
                submission.id
            )));
        }
        let mut updated = submission.clone();
        updated.updated_at = Utc::now();
        state.submissions.insert(updated.id, updated);
        state.writes.push(RecordedWrite {
            entity: "submission",
            entity_id: submission.id,
            operator: operator.to_string(),
        });
        Ok(())
    }

    async fn get_submission(
        &self,
        submission_id: DbId,
    ) -> Result<Option<Submission>, StoreError> {
        Ok(self
            .state
            .lock()
            .await
            .submissions
            .get(&submission_id)
            .cloned())
    }

    async fn search_submissions(
        &self,
        filter: &SubmissionFilter,
    ) -> Result<Vec<Submission>, StoreError> {
        let state = self.state.lock().await;
        let Some(resource) = state.resources.get(&filter.resource_id) else {
            return Ok(Vec::new());
        };
        Ok(resource
            .submissions
            .iter()
            .filter_map(|id| state.submissions.get(id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ScreeningTrigger for InMemoryStore {
    async fn initiate_screening(
        &self,
        submission_id: DbId,
        operator: &str,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state.screenings.push(ScreeningRequest {
            submission_id,
            operator: operator.to_string(),
        });
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use podium_core::catalog::by_name;
    use podium_core::properties::EXTERNAL_REFERENCE_ID;

    #[tokio::test]
    async fn default_catalogs_carry_active_and_deleted() {
        let store = InMemoryStore::with_default_catalogs().await;
        let statuses = store.get_all_submission_statuses().await.unwrap();
        assert!(by_name(&statuses, STATUS_ACTIVE).is_some());
        assert!(by_name(&statuses, STATUS_DELETED).is_some());
        let types = store.get_all_upload_types().await.unwrap();
        assert_eq!(types.len(), 3);
    }

    #[tokio::test]
    async fn created_entities_get_distinct_ids() {
        let store = InMemoryStore::with_default_catalogs().await;
        let statuses = store.get_all_submission_statuses().await.unwrap();
        let active = by_name(&statuses, STATUS_ACTIVE).unwrap().id;

        let first = store
            .create_submission(NewSubmission { status_id: active }, "1001")
            .await
            .unwrap();
        let second = store
            .create_submission(NewSubmission { status_id: active }, "1001")
            .await
            .unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn resource_search_applies_every_condition() {
        let store = InMemoryStore::new();
        let role_id = store.seed_role("Submitter").await;
        let other_role = store.seed_role("Reviewer").await;
        let wanted = store
            .seed_resource(Resource::new(0, role_id, 5).with_external_reference(42))
            .await;
        // Same user, wrong role.
        store
            .seed_resource(Resource::new(0, other_role, 5).with_external_reference(42))
            .await;
        // Right role, other project.
        store
            .seed_resource(Resource::new(0, role_id, 6).with_external_reference(42))
            .await;
        // Right role and project, no identity property.
        store.seed_resource(Resource::new(0, role_id, 5)).await;

        let filter = ResourceFilter {
            role_ids: vec![role_id],
            project_id: 5,
            extension_property_name: EXTERNAL_REFERENCE_ID.to_string(),
            extension_property_value: "42".to_string(),
        };
        let matches = store.search_resources(&filter).await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, wanted);
    }

    #[tokio::test]
    async fn resource_search_rejects_empty_role_set() {
        let store = InMemoryStore::new();
        let filter = ResourceFilter {
            role_ids: Vec::new(),
            project_id: 5,
            extension_property_name: EXTERNAL_REFERENCE_ID.to_string(),
            extension_property_value: "42".to_string(),
        };
        assert!(matches!(
            store.search_resources(&filter).await,
            Err(StoreError::Query(_))
        ));
    }

    #[tokio::test]
    async fn submission_search_follows_resource_ownership() {
        let store = InMemoryStore::with_default_catalogs().await;
        let statuses = store.get_all_submission_statuses().await.unwrap();
        let active = by_name(&statuses, STATUS_ACTIVE).unwrap().id;
        let role_id = store.seed_role("Submitter").await;
        let resource_id = store
            .seed_resource(Resource::new(0, role_id, 5).with_external_reference(42))
            .await;

        let owned = store
            .create_submission(NewSubmission { status_id: active }, "42")
            .await
            .unwrap();
        // A submission nobody owns.
        store
            .create_submission(NewSubmission { status_id: active }, "42")
            .await
            .unwrap();

        let mut resource = store.resource(resource_id).await.unwrap();
        resource.add_submission(owned.id);
        store.update_resource(&resource, "42").await.unwrap();

        let found = store
            .search_submissions(&SubmissionFilter::by_resource(resource_id))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, owned.id);
    }

    #[tokio::test]
    async fn updates_to_unknown_entities_fail() {
        let store = InMemoryStore::with_default_catalogs().await;
        let submission = Submission {
            id: 999,
            status_id: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(matches!(
            store.update_submission(&submission, "1001").await,
            Err(StoreError::Backend(_))
        ));
        let resource = Resource::new(999, 1, 1);
        assert!(matches!(
            store.update_resource(&resource, "1001").await,
            Err(StoreError::Backend(_))
        ));
    }

    #[tokio::test]
    async fn writes_record_their_operator() {
        let store = InMemoryStore::with_default_catalogs().await;
        let statuses = store.get_all_submission_statuses().await.unwrap();
        let active = by_name(&statuses, STATUS_ACTIVE).unwrap().id;
        store
            .create_submission(NewSubmission { status_id: active }, "7001")
            .await
            .unwrap();

        let writes = store.writes().await;
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].entity, "submission");
        assert_eq!(writes[0].operator, "7001");
    }
}
