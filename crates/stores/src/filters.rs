//! Typed search filters.
//!
//! Filters are plain data; the stores interpret them. Every field of a
//! filter is an AND condition, with the documented exceptions.

use podium_core::types::DbId;

/// Filter for [`ResourceDirectory::search_resources`].
///
/// Matches resources holding any of `role_ids` (OR), assigned to
/// `project_id`, that carry the named extension property with exactly the
/// given value. User identity has no typed field on resources, so it rides
/// in as an extension-property string comparison.
///
/// [`ResourceDirectory::search_resources`]: crate::contracts::ResourceDirectory::search_resources
#[derive(Debug, Clone)]
pub struct ResourceFilter {
    pub role_ids: Vec<DbId>,
    pub project_id: DbId,
    pub extension_property_name: String,
    pub extension_property_value: String,
}

/// Filter for [`UploadCatalog::search_submissions`].
///
/// [`UploadCatalog::search_submissions`]: crate::contracts::UploadCatalog::search_submissions
#[derive(Debug, Clone)]
pub struct SubmissionFilter {
    pub resource_id: DbId,
}

impl SubmissionFilter {
    /// All submissions owned by the given resource.
    pub fn by_resource(resource_id: DbId) -> Self {
        Self { resource_id }
    }
}
