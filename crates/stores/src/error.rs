//! Failure type shared by all collaborator contracts.

/// An error reported by an external store.
///
/// The service layer distinguishes persistence failures from search-query
/// construction failures when wrapping these, so the two are separate
/// variants rather than one opaque message.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store's backend failed: connectivity, persistence, or any other
    /// fault inside the collaborator.
    #[error("store backend error: {0}")]
    Backend(String),

    /// The store rejected the search filter it was given.
    #[error("malformed search filter: {0}")]
    Query(String),
}
