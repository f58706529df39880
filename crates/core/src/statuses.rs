//! Well-known status names in the submission and upload status catalogs.
//!
//! Both catalogs are required to contain "Active" and "Deleted"; an
//! operation that cannot resolve them fails rather than guessing.

pub const STATUS_ACTIVE: &str = "Active";
pub const STATUS_DELETED: &str = "Deleted";
