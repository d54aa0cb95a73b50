use chrono::{DateTime, Utc};
use relato_types::{ReportId, UserId};
use rusqlite::{Connection, params};
use uuid::Uuid;

use crate::Result;

use super::timestamp;

pub fn like(conn: &Connection, user_id: &UserId, report_id: &ReportId, at: DateTime<Utc>) -> Result<bool> {
    let changed = conn.execute(
        r#"
        INSERT OR IGNORE INTO relatos_likes (id, user_id, relato_id, created_at)
        VALUES (?1, ?2, ?3, ?4)
        "#,
        params![
            Uuid::new_v4().to_string(),
            user_id.to_string(),
            report_id.to_string(),
            timestamp(at)
        ],
    )?;
    Ok(changed > 0)
}

pub fn unlike(conn: &Connection, user_id: &UserId, report_id: &ReportId) -> Result<bool> {
    let changed = conn.execute(
        "DELETE FROM relatos_likes WHERE user_id = ?1 AND relato_id = ?2",
        params![user_id.to_string(), report_id.to_string()],
    )?;
    Ok(changed > 0)
}

pub fn is_liked(conn: &Connection, user_id: &UserId, report_id: &ReportId) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM relatos_likes WHERE user_id = ?1 AND relato_id = ?2",
        params![user_id.to_string(), report_id.to_string()],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Count-only fetch of likes on a report
pub fn count(conn: &Connection, report_id: &ReportId) -> Result<u64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM relatos_likes WHERE relato_id = ?1",
        [report_id.to_string()],
        |row| row.get(0),
    )?;
    Ok(count.max(0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    #[test]
    fn test_like_counts_per_report() -> Result<()> {
        let db = Database::open_in_memory()?;
        let report = ReportId::new();
        let (ana, bia) = (UserId::new(), UserId::new());

        assert!(db.like_report(&ana, &report, Utc::now())?);
        assert!(!db.like_report(&ana, &report, Utc::now())?);
        assert!(db.like_report(&bia, &report, Utc::now())?);
        assert_eq!(db.count_likes(&report)?, 2);

        assert!(db.unlike_report(&ana, &report)?);
        assert!(!db.is_liked(&ana, &report)?);
        assert!(db.is_liked(&bia, &report)?);
        assert_eq!(db.count_likes(&report)?, 1);
        Ok(())
    }
}
