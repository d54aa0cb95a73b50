pub mod identity;
pub mod like;
pub mod object;
pub mod profile;
pub mod report;
pub mod saved;
pub mod session;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use std::str::FromStr;

/// Fixed-width RFC 3339 so TEXT ordering matches time ordering
pub(crate) fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Parse an id column inside a row mapper
pub(crate) fn parse_id<T>(idx: usize, raw: &str) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
