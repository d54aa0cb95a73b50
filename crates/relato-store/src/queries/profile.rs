use relato_types::{UserId, UserProfile};
use rusqlite::{Connection, OptionalExtension, params};

use crate::Result;

pub fn upsert(conn: &Connection, profile: &UserProfile) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO users (id, name, avatar_url)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(id) DO UPDATE SET
            name = ?2,
            avatar_url = ?3
        "#,
        params![profile.id.to_string(), &profile.name, &profile.avatar_url],
    )?;

    Ok(())
}

pub fn get(conn: &Connection, id: &UserId) -> Result<Option<UserProfile>> {
    let result = conn
        .query_row(
            "SELECT name, avatar_url FROM users WHERE id = ?1",
            [id.to_string()],
            |row| {
                Ok(UserProfile {
                    id: *id,
                    name: row.get(0)?,
                    avatar_url: row.get(1)?,
                })
            },
        )
        .optional()?;

    Ok(result)
}

/// Returns false when no profile row exists
pub fn set_avatar(conn: &Connection, id: &UserId, avatar_url: &str) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE users SET avatar_url = ?2 WHERE id = ?1",
        params![id.to_string(), avatar_url],
    )?;
    Ok(changed > 0)
}
