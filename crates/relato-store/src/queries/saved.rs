use chrono::{DateTime, Utc};
use relato_types::{ReportId, SavedReport, UserId};
use rusqlite::{Connection, params};
use uuid::Uuid;

use crate::Result;

use super::report::{REPORT_COLUMNS, ReportRow};
use super::{parse_id, parse_timestamp, timestamp};

/// Returns false when the report was already saved
pub fn save(conn: &Connection, user_id: &UserId, report_id: &ReportId, at: DateTime<Utc>) -> Result<bool> {
    let changed = conn.execute(
        r#"
        INSERT OR IGNORE INTO relatos_guardados (id, user_id, relato_id, created_at)
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

pub fn unsave(conn: &Connection, user_id: &UserId, report_id: &ReportId) -> Result<bool> {
    let changed = conn.execute(
        "DELETE FROM relatos_guardados WHERE user_id = ?1 AND relato_id = ?2",
        params![user_id.to_string(), report_id.to_string()],
    )?;
    Ok(changed > 0)
}

pub fn is_saved(conn: &Connection, user_id: &UserId, report_id: &ReportId) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM relatos_guardados WHERE user_id = ?1 AND relato_id = ?2",
        params![user_id.to_string(), report_id.to_string()],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Saved reports of a user with report and author, newest save first
pub fn list_for_user(conn: &Connection, user_id: &UserId) -> Result<Vec<SavedReport>> {
    let sql = format!(
        r#"
        SELECT g.id, g.created_at, {}
        FROM relatos_guardados g
        JOIN relatos r ON r.id = g.relato_id
        LEFT JOIN users u ON u.id = r.user_id
        WHERE g.user_id = ?1
        ORDER BY g.created_at DESC, g.rowid DESC
        "#,
        REPORT_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([user_id.to_string()], |row| {
            let id: Uuid = parse_id(0, &row.get::<_, String>(0)?)?;
            let created_at = parse_timestamp(1, &row.get::<_, String>(1)?)?;
            Ok((id, created_at, ReportRow::read(row, 2)?))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(id, created_at, row)| {
            Ok(SavedReport {
                id,
                created_at,
                relato: row.into_report()?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;
    use chrono::Duration;
    use relato_types::{Report, SectionOrder, SectionSet};
    use std::collections::BTreeMap;

    fn bare_report(owner: UserId, title: &str) -> Report {
        Report {
            id: ReportId::new(),
            title: title.to_string(),
            countries: Vec::new(),
            month: None,
            season: None,
            season_emoji: None,
            child_ages: Vec::new(),
            locations: Vec::new(),
            sections: SectionSet::new(),
            section_order: SectionOrder::default(),
            visibility: BTreeMap::new(),
            user_id: owner,
            created_at: Utc::now(),
            view_count: 0,
            resumo_image: None,
            images: None,
        }
    }

    #[test]
    fn test_save_is_idempotent_and_listed_newest_first() -> Result<()> {
        let db = Database::open_in_memory()?;
        let reader = UserId::new();
        let a = bare_report(UserId::new(), "a");
        let b = bare_report(UserId::new(), "b");
        db.insert_report(&a)?;
        db.insert_report(&b)?;

        let now = Utc::now();
        assert!(db.save_report(&reader, &a.id, now)?);
        assert!(!db.save_report(&reader, &a.id, now)?);
        assert!(db.save_report(&reader, &b.id, now + Duration::seconds(1))?);

        let saved: Vec<String> = db
            .list_saved(&reader)?
            .into_iter()
            .map(|s| s.relato.report.title)
            .collect();
        assert_eq!(saved, vec!["b", "a"]);

        assert!(db.unsave_report(&reader, &a.id)?);
        assert!(!db.is_saved(&reader, &a.id)?);
        Ok(())
    }

    #[test]
    fn test_deleting_report_drops_saves() -> Result<()> {
        let db = Database::open_in_memory()?;
        let owner = UserId::new();
        let reader = UserId::new();
        let report = bare_report(owner, "gone");
        db.insert_report(&report)?;
        db.save_report(&reader, &report.id, Utc::now())?;

        assert!(db.delete_report(&report.id, &owner)?);
        assert!(db.list_saved(&reader)?.is_empty());
        assert!(!db.is_saved(&reader, &report.id)?);
        Ok(())
    }
}
