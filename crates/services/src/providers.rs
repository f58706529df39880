//! Collaborator bundle passed to service constructors.

use std::sync::Arc;

use podium_stores::{
    PhaseTracker, ProjectStore, ResourceDirectory, ScreeningTrigger, UploadCatalog,
};

/// The five external collaborators, as shared trait objects.
///
/// Services receive this bundle at construction; there is no global
/// registry or service locator. Cloning is cheap (five `Arc`s).
#[derive(Clone)]
pub struct Stores {
    pub projects: Arc<dyn ProjectStore>,
    pub phases: Arc<dyn PhaseTracker>,
    pub resources: Arc<dyn ResourceDirectory>,
    pub uploads: Arc<dyn UploadCatalog>,
    pub screening: Arc<dyn ScreeningTrigger>,
}

impl Stores {
    /// Wire every collaborator to one backend that implements all five
    /// contracts, such as the in-memory store.
    pub fn from_backend<S>(backend: Arc<S>) -> Self
    where
        S: ProjectStore
            + PhaseTracker
            + ResourceDirectory
            + UploadCatalog
            + ScreeningTrigger
            + 'static,
    {
        Self {
            projects: backend.clone(),
            phases: backend.clone(),
            resources: backend.clone(),
            uploads: backend.clone(),
            screening: backend,
        }
    }
}
