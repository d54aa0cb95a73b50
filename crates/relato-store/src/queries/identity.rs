use rusqlite::{Connection, OptionalExtension, params};

use crate::{Result, records::IdentityRecord};

use super::parse_id;

pub fn insert(conn: &Connection, identity: &IdentityRecord) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO auth_identities (user_id, email, password_hash, salt, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        params![
            identity.user_id.to_string(),
            &identity.email,
            &identity.password_hash,
            &identity.salt,
            &identity.created_at
        ],
    )?;

    Ok(())
}

pub fn find_by_email(conn: &Connection, email: &str) -> Result<Option<IdentityRecord>> {
    let result = conn
        .query_row(
            r#"
        SELECT user_id, email, password_hash, salt, created_at
        FROM auth_identities
        WHERE email = ?1
        "#,
            [email],
            |row| {
                Ok(IdentityRecord {
                    user_id: parse_id(0, &row.get::<_, String>(0)?)?,
                    email: row.get(1)?,
                    password_hash: row.get(2)?,
                    salt: row.get(3)?,
                    created_at: row.get(4)?,
                })
            },
        )
        .optional()?;

    Ok(result)
}

pub fn email_for(conn: &Connection, user_id: &str) -> Result<Option<String>> {
    let result = conn
        .query_row(
            "SELECT email FROM auth_identities WHERE user_id = ?1",
            [user_id],
            |row| row.get(0),
        )
        .optional()?;

    Ok(result)
}
