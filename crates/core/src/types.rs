/// All entity identifiers handed out by the external stores are 64-bit.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
