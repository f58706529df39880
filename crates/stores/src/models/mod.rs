//! Entity records exchanged with the external stores.
//!
//! Read-only entities (project, phase, resource role) are snapshots owned
//! by their store. Entities the orchestrator creates (upload, submission)
//! come in a `New*` shape without an id; the catalog assigns the id on
//! persist and returns the full record.

pub mod phase;
pub mod project;
pub mod resource;
pub mod submission;
pub mod upload;

pub use phase::{Phase, PhaseStatus};
pub use project::Project;
pub use resource::{Resource, ResourceRole};
pub use submission::{NewSubmission, Submission};
pub use upload::{NewUpload, Upload};
