//! Submission lifecycle services.
//!
//! The entry point is [`SubmissionIntake`], which turns "user U wants to
//! upload file F for project P" into the full set of writes across the
//! platform's stores: phase gating, role authorization, upload and
//! submission persistence, screening kickoff, and retirement of superseded
//! submissions. [`StatusTransitionService`] is also usable on its own for
//! direct status changes.
//!
//! Every service is stateless: construction takes the collaborator bundle
//! ([`Stores`]) and each call performs a strictly sequential series of
//! store operations. Nothing is transactional across stores; see the
//! module docs on [`intake`] for the partial-failure contract.

pub mod authorizer;
pub mod error;
pub mod intake;
pub mod phase_gate;
pub mod providers;
pub mod retirement;
pub mod status_transition;

pub use authorizer::RoleAuthorizer;
pub use error::{ServiceError, ServiceResult};
pub use intake::SubmissionIntake;
pub use phase_gate::PhaseGate;
pub use providers::Stores;
pub use retirement::RetirementPolicy;
pub use status_transition::StatusTransitionService;
