//! Contracts and records for the orchestrator's external collaborators.
//!
//! The submission lifecycle services write to five independent subsystems:
//! the project store, the phase tracker, the role/resource directory, the
//! upload/submission catalog, and the screening trigger. This crate defines
//! what crosses those boundaries:
//!
//! - [`models`]: the entity records the stores exchange
//! - [`filters`]: typed search filters for the directory and the catalog
//! - [`contracts`]: the five collaborator traits
//! - [`StoreError`]: the failure type every contract method returns
//! - [`memory`]: an in-memory backend implementing all five contracts,
//!   used by tests and development wiring
//!
//! Production backends live with the platform services that own the data;
//! this crate only fixes the contract they implement.

pub mod contracts;
pub mod error;
pub mod filters;
pub mod memory;
pub mod models;

pub use contracts::{
    PhaseTracker, ProjectStore, ResourceDirectory, ScreeningTrigger, UploadCatalog,
};
pub use error::StoreError;
pub use filters::{ResourceFilter, SubmissionFilter};
