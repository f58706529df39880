//! Well-known phase category names.
//!
//! These must match the category names the phase tracker reports for a
//! project's workflow stages.

pub const PHASE_SUBMISSION: &str = "Submission";
pub const PHASE_SCREENING: &str = "Screening";
pub const PHASE_FINAL_FIX: &str = "Final Fix";
pub const PHASE_REVIEW: &str = "Review";

/// Phase categories that gate a general submission. Either an open
/// Submission phase or an open Screening phase accepts uploads.
pub const SUBMISSION_GATING_PHASES: &[&str] = &[PHASE_SUBMISSION, PHASE_SCREENING];

/// Phase categories that gate a final-fix upload.
pub const FINAL_FIX_GATING_PHASES: &[&str] = &[PHASE_FINAL_FIX];

/// Phase categories that gate a test-case upload.
pub const TEST_CASE_GATING_PHASES: &[&str] = &[PHASE_REVIEW];
