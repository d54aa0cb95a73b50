use rusqlite::Connection;

use crate::Result;

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 3;

// Table names follow the hosted backend so rows keep the same shape:
// `users`, `relatos`, `relatos_guardados`, `relatos_likes`.
// Nested aggregate fields (countries, categories, order, ...) are JSON text.

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version != SCHEMA_VERSION {
        drop_all_tables(conn)?;
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS auth_identities (
            user_id TEXT PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            salt TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            name TEXT,
            avatar_url TEXT
        );

        CREATE TABLE IF NOT EXISTS auth_sessions (
            token TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            created_at TEXT NOT NULL,
            revoked BOOLEAN NOT NULL DEFAULT 0,
            FOREIGN KEY (user_id) REFERENCES auth_identities(user_id)
        );

        CREATE TABLE IF NOT EXISTS relatos (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            title TEXT NOT NULL,
            countries TEXT NOT NULL DEFAULT '[]',
            month TEXT,
            season TEXT,
            emojiseason TEXT,
            child_ages TEXT NOT NULL DEFAULT '[]',
            locations TEXT NOT NULL DEFAULT '[]',
            categories TEXT NOT NULL DEFAULT '{}',
            categories_order TEXT NOT NULL DEFAULT '[]',
            visibility TEXT NOT NULL DEFAULT '{}',
            created_at TEXT NOT NULL,
            view_count INTEGER NOT NULL DEFAULT 0,
            resumo_image TEXT,
            images TEXT
        );

        CREATE TABLE IF NOT EXISTS relatos_guardados (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            relato_id TEXT NOT NULL,
            created_at TEXT NOT NULL,
            UNIQUE (user_id, relato_id)
        );

        CREATE TABLE IF NOT EXISTS relatos_likes (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            relato_id TEXT NOT NULL,
            created_at TEXT NOT NULL,
            UNIQUE (user_id, relato_id)
        );

        CREATE TABLE IF NOT EXISTS storage_objects (
            bucket TEXT NOT NULL,
            name TEXT NOT NULL,
            content_type TEXT NOT NULL,
            data BLOB NOT NULL,
            updated_at TEXT NOT NULL,
            PRIMARY KEY (bucket, name)
        );

        CREATE INDEX IF NOT EXISTS idx_relatos_created ON relatos(created_at DESC);
        CREATE INDEX IF NOT EXISTS idx_relatos_user ON relatos(user_id);
        CREATE INDEX IF NOT EXISTS idx_saved_user ON relatos_guardados(user_id);
        CREATE INDEX IF NOT EXISTS idx_likes_relato ON relatos_likes(relato_id);
        "#,
    )?;

    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

    Ok(())
}

fn drop_all_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS storage_objects;
        DROP TABLE IF EXISTS relatos_likes;
        DROP TABLE IF EXISTS relatos_guardados;
        DROP TABLE IF EXISTS relatos;
        DROP TABLE IF EXISTS auth_sessions;
        DROP TABLE IF EXISTS users;
        DROP TABLE IF EXISTS auth_identities;
        "#,
    )?;
    Ok(())
}
