// SQLite store for the local gateway
// Report aggregates are kept as JSON columns and rebuilt from the row layout on read

mod db;
mod error;
mod queries;
mod records;
mod schema;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use records::{IdentityRecord, ObjectRecord, SessionRecord};
pub use schema::SCHEMA_VERSION;
