//! Service-level error taxonomy.
//!
//! Domain-rule failures each get their own variant so callers can act on
//! them; underlying store failures collapse into two wrapping variants
//! keyed by what failed. No error is retried internally: every failure
//! surfaces immediately and the caller decides whether to retry the whole
//! operation.

use podium_core::types::DbId;
use podium_stores::StoreError;

/// Convenience alias for service return values.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Everything the submission lifecycle services can fail with.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Malformed input, rejected before any store call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The project does not exist.
    #[error("project {project_id} does not exist")]
    ProjectNotFound { project_id: DbId },

    /// The project has no phase of the required category at all, so the
    /// operation can never apply to it.
    #[error("project {project_id} has no phase of the required category")]
    ProjectNotEligible { project_id: DbId },

    /// The gating phase exists but is not open.
    #[error("phase {phase_id} is not open")]
    PhaseNotOpen { phase_id: DbId },

    /// None of the requested role names exist in the directory.
    #[error("none of the requested roles exist in the directory")]
    NoSuchRole,

    /// Resource resolution needed exactly one match and found `matches`.
    #[error("expected exactly one resource for user {user_id}, found {matches}")]
    AmbiguousOrMissingUser { user_id: DbId, matches: usize },

    /// A final fix was attempted by someone other than the recorded
    /// winner (or the project records no usable winner).
    #[error("user {user_id} is not the project's recorded winner")]
    NotWinner { user_id: DbId },

    /// The submission does not exist.
    #[error("submission {submission_id} does not exist")]
    SubmissionNotFound { submission_id: DbId },

    /// No submission status with this id exists in the catalog.
    #[error("submission status {status_id} does not exist")]
    StatusNotFound { status_id: DbId },

    /// A required named entry is missing from a lookup catalog.
    #[error("{catalog} catalog has no entry named {name:?}")]
    MissingCatalogEntry {
        catalog: &'static str,
        name: &'static str,
    },

    /// An external store failed while persisting or reading.
    #[error("persistence failure")]
    Persistence(#[source] StoreError),

    /// A non-persistence collaborator failure, e.g. a rejected search
    /// filter.
    #[error("orchestration failure")]
    Orchestration(#[source] StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Query(_) => ServiceError::Orchestration(err),
            StoreError::Backend(_) => ServiceError::Persistence(err),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
