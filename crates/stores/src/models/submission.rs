//! Submission entity model.

use serde::{Deserialize, Serialize};

use podium_core::types::{DbId, Timestamp};

/// A persisted record of a competition entry.
///
/// A general submission is conceptually paired with the Upload created in
/// the same operation, but the pairing is not stored on either record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: DbId,
    pub status_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a submission; the catalog assigns id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubmission {
    pub status_id: DbId,
}
