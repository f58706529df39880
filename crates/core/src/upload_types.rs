//! Well-known upload type names in the upload-type catalog.
//!
//! The type name doubles as the submission category: a general submission
//! produces a "Submission" upload, a final fix a "Final Fix" upload, and
//! test cases a "Review" upload.

pub const UPLOAD_TYPE_SUBMISSION: &str = "Submission";
pub const UPLOAD_TYPE_FINAL_FIX: &str = "Final Fix";
pub const UPLOAD_TYPE_REVIEW: &str = "Review";
