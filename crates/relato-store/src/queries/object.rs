use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};

use crate::{Error, Result, records::ObjectRecord};

use super::timestamp;

/// Store an object. Without `upsert` an existing name is a conflict.
pub fn put(conn: &Connection, object: &ObjectRecord, upsert: bool, at: DateTime<Utc>) -> Result<()> {
    let sql = if upsert {
        r#"
        INSERT INTO storage_objects (bucket, name, content_type, data, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        ON CONFLICT(bucket, name) DO UPDATE SET
            content_type = ?3,
            data = ?4,
            updated_at = ?5
        "#
    } else {
        r#"
        INSERT OR IGNORE INTO storage_objects (bucket, name, content_type, data, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#
    };

    let changed = conn.execute(
        sql,
        params![
            &object.bucket,
            &object.name,
            &object.content_type,
            &object.data,
            timestamp(at)
        ],
    )?;

    if changed == 0 {
        return Err(Error::Query(format!(
            "object already exists: {}/{}",
            object.bucket, object.name
        )));
    }
    Ok(())
}

pub fn get(conn: &Connection, bucket: &str, name: &str) -> Result<Option<ObjectRecord>> {
    let result = conn
        .query_row(
            r#"
        SELECT bucket, name, content_type, data
        FROM storage_objects
        WHERE bucket = ?1 AND name = ?2
        "#,
            [bucket, name],
            |row| {
                Ok(ObjectRecord {
                    bucket: row.get(0)?,
                    name: row.get(1)?,
                    content_type: row.get(2)?,
                    data: row.get(3)?,
                })
            },
        )
        .optional()?;

    Ok(result)
}
