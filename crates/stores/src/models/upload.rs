//! Upload entity model.

use serde::{Deserialize, Serialize};

use podium_core::types::{DbId, Timestamp};

/// A persisted record of one submitted artifact.
///
/// `type_id` and `status_id` reference the upload-type and upload-status
/// catalogs; `parameter` carries the filename (the binary payload itself
/// never passes through these services).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Upload {
    pub id: DbId,
    pub project_id: DbId,
    pub owner: DbId,
    pub type_id: DbId,
    pub status_id: DbId,
    pub parameter: String,
    pub created_at: Timestamp,
}

/// DTO for creating an upload; the catalog assigns the id and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUpload {
    pub project_id: DbId,
    pub owner: DbId,
    pub type_id: DbId,
    pub status_id: DbId,
    pub parameter: String,
}
