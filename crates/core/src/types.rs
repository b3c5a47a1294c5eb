/// All database primary keys are PostgreSQL UUIDs assigned by `gen_random_uuid()`.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (no time component) such as sprint or absence bounds.
pub type Date = chrono::NaiveDate;
