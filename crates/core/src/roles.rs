//! Well-known resource role names.
//!
//! These must match the role names registered in the role/resource
//! directory.

pub const ROLE_SUBMITTER: &str = "Submitter";
pub const ROLE_ACCURACY_REVIEWER: &str = "Accuracy Reviewer";
pub const ROLE_FAILURE_REVIEWER: &str = "Failure Reviewer";
pub const ROLE_STRESS_REVIEWER: &str = "Stress Reviewer";

/// Roles allowed to upload general submissions and final fixes.
pub const SUBMITTER_ROLES: &[&str] = &[ROLE_SUBMITTER];

/// Roles allowed to upload test cases. Any one of them suffices.
pub const TEST_CASE_REVIEWER_ROLES: &[&str] = &[
    ROLE_ACCURACY_REVIEWER,
    ROLE_FAILURE_REVIEWER,
    ROLE_STRESS_REVIEWER,
];
