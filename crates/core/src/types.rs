/// Users and notes are keyed by random UUIDs, exposed to clients as `_id`.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh document id.
pub fn new_id() -> DbId {
    uuid::Uuid::new_v4()
}
