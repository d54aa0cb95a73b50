use rusqlite::{Connection, OptionalExtension, params};

use crate::{Result, records::SessionRecord};

use super::parse_id;

pub fn insert(conn: &Connection, session: &SessionRecord) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO auth_sessions (token, user_id, created_at, revoked)
        VALUES (?1, ?2, ?3, ?4)
        "#,
        params![
            &session.token,
            session.user_id.to_string(),
            &session.created_at,
            &session.revoked
        ],
    )?;

    Ok(())
}

/// Session by token, only while not revoked
pub fn get_active(conn: &Connection, token: &str) -> Result<Option<SessionRecord>> {
    let result = conn
        .query_row(
            r#"
        SELECT token, user_id, created_at, revoked
        FROM auth_sessions
        WHERE token = ?1 AND revoked = 0
        "#,
            [token],
            |row| {
                Ok(SessionRecord {
                    token: row.get(0)?,
                    user_id: parse_id(1, &row.get::<_, String>(1)?)?,
                    created_at: row.get(2)?,
                    revoked: row.get(3)?,
                })
            },
        )
        .optional()?;

    Ok(result)
}

/// Most recently created session that is still active
pub fn latest_active(conn: &Connection) -> Result<Option<SessionRecord>> {
    let result = conn
        .query_row(
            r#"
        SELECT token, user_id, created_at, revoked
        FROM auth_sessions
        WHERE revoked = 0
        ORDER BY created_at DESC, rowid DESC
        LIMIT 1
        "#,
            [],
            |row| {
                Ok(SessionRecord {
                    token: row.get(0)?,
                    user_id: parse_id(1, &row.get::<_, String>(1)?)?,
                    created_at: row.get(2)?,
                    revoked: row.get(3)?,
                })
            },
        )
        .optional()?;

    Ok(result)
}

/// Returns false when the token was unknown or already revoked
pub fn revoke(conn: &Connection, token: &str) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE auth_sessions SET revoked = 1 WHERE token = ?1 AND revoked = 0",
        [token],
    )?;
    Ok(changed > 0)
}
