use relato_types::{Report, ReportId, ReportWithAuthor, UserId};
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde_json::{Value, json};

use crate::Result;

use super::timestamp;

/// Report columns followed by the joined author columns.
/// Callers alias `relatos` as `r` and `users` as `u`.
pub(crate) const REPORT_COLUMNS: &str = r#"
    r.id, r.user_id, r.title, r.countries, r.month, r.season, r.emojiseason,
    r.child_ages, r.locations, r.categories, r.categories_order, r.visibility,
    r.created_at, r.view_count, r.resumo_image, r.images,
    u.name, u.avatar_url
"#;

const COLUMN_COUNT: usize = 18;

/// Position of `r.view_count` in [`REPORT_COLUMNS`], the only integer column
const VIEW_COUNT_COLUMN: usize = 13;

/// Raw column values of one joined report row
pub(crate) struct ReportRow {
    values: [Option<String>; COLUMN_COUNT],
    view_count: i64,
}

impl ReportRow {
    /// Read the report columns starting at `offset`
    pub(crate) fn read(row: &Row<'_>, offset: usize) -> rusqlite::Result<Self> {
        let mut values: [Option<String>; COLUMN_COUNT] = Default::default();
        for (i, slot) in values.iter_mut().enumerate() {
            if i == VIEW_COUNT_COLUMN {
                continue;
            }
            *slot = row.get(offset + i)?;
        }
        Ok(Self {
            values,
            view_count: row.get(offset + VIEW_COUNT_COLUMN)?,
        })
    }

    fn text(&self, i: usize) -> Value {
        self.values[i].clone().map(Value::String).unwrap_or(Value::Null)
    }

    fn json(&self, i: usize, fallback: Value) -> Result<Value> {
        match self.values[i].as_deref() {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(fallback),
        }
    }

    /// Rebuild the aggregate through the persisted row layout
    pub(crate) fn into_report(self) -> Result<ReportWithAuthor> {
        let row = json!({
            "id": self.text(0),
            "user_id": self.text(1),
            "title": self.text(2),
            "countries": self.json(3, json!([]))?,
            "month": self.text(4),
            "season": self.text(5),
            "emojiseason": self.text(6),
            "child_ages": self.json(7, json!([]))?,
            "locations": self.json(8, json!([]))?,
            "categories": self.json(9, json!({}))?,
            "categories_order": self.json(10, json!([]))?,
            "visibility": self.json(11, json!({}))?,
            "created_at": self.text(12),
            "view_count": self.view_count.max(0),
            "resumo_image": self.text(14),
            "images": self.json(15, Value::Null)?,
            "user": {
                "id": self.text(1),
                "name": self.text(16),
                "avatar_url": self.text(17),
            },
        });

        Ok(serde_json::from_value(row)?)
    }
}

pub fn insert(conn: &Connection, report: &Report) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO relatos (id, user_id, title, countries, month, season, emojiseason,
                             child_ages, locations, categories, categories_order, visibility,
                             created_at, view_count, resumo_image, images)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)
        "#,
        params![
            report.id.to_string(),
            report.user_id.to_string(),
            &report.title,
            serde_json::to_string(&report.countries)?,
            report.month.map(|m| m.name()),
            report.season.map(|s| s.name()),
            &report.season_emoji,
            serde_json::to_string(&report.child_ages)?,
            serde_json::to_string(&report.locations)?,
            serde_json::to_string(&report.sections)?,
            serde_json::to_string(&report.section_order)?,
            serde_json::to_string(&report.visibility)?,
            timestamp(report.created_at),
            report.view_count as i64,
            &report.resumo_image,
            report.images.as_ref().map(serde_json::to_string).transpose()?,
        ],
    )?;

    Ok(())
}

/// Overwrite the editable fields of an owned report.
///
/// Returns false when no report with this id belongs to `report.user_id`.
pub fn update(conn: &Connection, report: &Report) -> Result<bool> {
    let changed = conn.execute(
        r#"
        UPDATE relatos SET
            title = ?3,
            countries = ?4,
            month = ?5,
            season = ?6,
            emojiseason = ?7,
            child_ages = ?8,
            locations = ?9,
            categories = ?10,
            categories_order = ?11,
            visibility = ?12,
            resumo_image = ?13,
            images = ?14
        WHERE id = ?1 AND user_id = ?2
        "#,
        params![
            report.id.to_string(),
            report.user_id.to_string(),
            &report.title,
            serde_json::to_string(&report.countries)?,
            report.month.map(|m| m.name()),
            report.season.map(|s| s.name()),
            &report.season_emoji,
            serde_json::to_string(&report.child_ages)?,
            serde_json::to_string(&report.locations)?,
            serde_json::to_string(&report.sections)?,
            serde_json::to_string(&report.section_order)?,
            serde_json::to_string(&report.visibility)?,
            &report.resumo_image,
            report.images.as_ref().map(serde_json::to_string).transpose()?,
        ],
    )?;

    Ok(changed > 0)
}

pub fn get(conn: &Connection, id: &ReportId) -> Result<Option<ReportWithAuthor>> {
    let sql = format!(
        "SELECT {} FROM relatos r LEFT JOIN users u ON u.id = r.user_id WHERE r.id = ?1",
        REPORT_COLUMNS
    );
    let row = conn
        .query_row(&sql, [id.to_string()], |row| ReportRow::read(row, 0))
        .optional()?;

    row.map(ReportRow::into_report).transpose()
}

/// All reports with their authors, newest first
pub fn list_all(conn: &Connection) -> Result<Vec<ReportWithAuthor>> {
    list_where(conn, None)
}

pub fn list_by_user(conn: &Connection, user_id: &UserId) -> Result<Vec<ReportWithAuthor>> {
    list_where(conn, Some(user_id))
}

fn list_where(conn: &Connection, user_id: Option<&UserId>) -> Result<Vec<ReportWithAuthor>> {
    let filter = if user_id.is_some() {
        "WHERE r.user_id = ?1"
    } else {
        ""
    };
    let sql = format!(
        "SELECT {} FROM relatos r LEFT JOIN users u ON u.id = r.user_id {} \
         ORDER BY r.created_at DESC, r.rowid DESC",
        REPORT_COLUMNS, filter
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = match user_id {
        Some(id) => stmt
            .query_map([id.to_string()], |row| ReportRow::read(row, 0))?
            .collect::<std::result::Result<Vec<_>, _>>()?,
        None => stmt
            .query_map([], |row| ReportRow::read(row, 0))?
            .collect::<std::result::Result<Vec<_>, _>>()?,
    };

    rows.into_iter().map(ReportRow::into_report).collect()
}

/// Delete an owned report together with its saves and likes.
pub fn delete(conn: &Connection, id: &ReportId, owner: &UserId) -> Result<bool> {
    let tx = conn.unchecked_transaction()?;
    let id = id.to_string();

    let changed = tx.execute(
        "DELETE FROM relatos WHERE id = ?1 AND user_id = ?2",
        params![&id, owner.to_string()],
    )?;
    if changed > 0 {
        tx.execute("DELETE FROM relatos_guardados WHERE relato_id = ?1", [&id])?;
        tx.execute("DELETE FROM relatos_likes WHERE relato_id = ?1", [&id])?;
    }

    tx.commit()?;
    Ok(changed > 0)
}

/// Bump the view counter; `None` when the report does not exist
pub fn increment_view_count(conn: &Connection, id: &ReportId) -> Result<Option<u64>> {
    let id = id.to_string();
    let changed = conn.execute(
        "UPDATE relatos SET view_count = view_count + 1 WHERE id = ?1",
        [&id],
    )?;
    if changed == 0 {
        return Ok(None);
    }

    let count: i64 = conn.query_row("SELECT view_count FROM relatos WHERE id = ?1", [&id], |row| {
        row.get(0)
    })?;
    Ok(Some(count.max(0) as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;
    use chrono::{Duration, TimeZone, Utc};
    use relato_types::{
        Country, Month, Season, Section, SectionKey, SectionOrder, SectionSet, UserProfile,
    };
    use std::collections::BTreeMap;

    fn report(owner: UserId, title: &str, minutes: i64) -> Report {
        let sections: SectionSet = [(
            SectionKey::from("resumo"),
            Section {
                title: "Resumo do roteiro".to_string(),
                content: "Uma semana".to_string(),
                images: vec!["https://cdn/a.jpg".to_string()],
                visible: true,
                fixed: false,
            },
        )]
        .into_iter()
        .collect();

        Report {
            id: ReportId::new(),
            title: title.to_string(),
            countries: vec![Country::new("CL", "Chile")],
            month: Some(Month::July),
            season: Some(Season::Winter),
            season_emoji: Some("❄️".to_string()),
            child_ages: vec![30],
            locations: vec!["Santiago".to_string()],
            sections,
            section_order: SectionOrder::new(vec![SectionKey::from("resumo")]),
            visibility: BTreeMap::new(),
            user_id: owner,
            created_at: Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap()
                + Duration::minutes(minutes),
            view_count: 0,
            resumo_image: None,
            images: None,
        }
    }

    #[test]
    fn test_insert_and_get_round_trips_aggregate() -> Result<()> {
        let db = Database::open_in_memory()?;
        let owner = UserId::new();
        db.upsert_profile(&UserProfile {
            id: owner,
            name: Some("Ana".to_string()),
            avatar_url: None,
        })?;

        let original = report(owner, "Neve no Chile", 0);
        db.insert_report(&original)?;

        let fetched = db.get_report(&original.id)?.unwrap();
        assert_eq!(fetched.report, original);
        assert_eq!(fetched.user.name.as_deref(), Some("Ana"));
        Ok(())
    }

    #[test]
    fn test_author_without_profile_row() -> Result<()> {
        let db = Database::open_in_memory()?;
        let original = report(UserId::new(), "Sem perfil", 0);
        db.insert_report(&original)?;

        let fetched = db.get_report(&original.id)?.unwrap();
        assert_eq!(fetched.user.id, original.user_id);
        assert_eq!(fetched.user.name, None);
        Ok(())
    }

    #[test]
    fn test_list_is_newest_first() -> Result<()> {
        let db = Database::open_in_memory()?;
        let owner = UserId::new();
        let other = UserId::new();
        db.insert_report(&report(owner, "first", 0))?;
        db.insert_report(&report(other, "second", 5))?;
        db.insert_report(&report(owner, "third", 10))?;

        let titles: Vec<String> = db
            .list_reports()?
            .into_iter()
            .map(|r| r.report.title)
            .collect();
        assert_eq!(titles, vec!["third", "second", "first"]);

        assert_eq!(db.list_reports_by_user(&owner)?.len(), 2);
        Ok(())
    }

    #[test]
    fn test_update_requires_owner() -> Result<()> {
        let db = Database::open_in_memory()?;
        let mut original = report(UserId::new(), "v1", 0);
        db.insert_report(&original)?;

        original.title = "v2".to_string();
        assert!(db.update_report(&original)?);

        let mut stranger = original.clone();
        stranger.user_id = UserId::new();
        stranger.title = "hijack".to_string();
        assert!(!db.update_report(&stranger)?);

        assert_eq!(db.get_report(&original.id)?.unwrap().report.title, "v2");
        Ok(())
    }

    #[test]
    fn test_increment_view_count() -> Result<()> {
        let db = Database::open_in_memory()?;
        let original = report(UserId::new(), "views", 0);
        db.insert_report(&original)?;

        assert_eq!(db.increment_view_count(&original.id)?, Some(1));
        assert_eq!(db.increment_view_count(&original.id)?, Some(2));
        assert_eq!(db.increment_view_count(&ReportId::new())?, None);
        Ok(())
    }

    #[test]
    fn test_view_count_read_alongside_neighbouring_columns() -> Result<()> {
        let db = Database::open_in_memory()?;
        let mut original = report(UserId::new(), "contagem", 0);
        original.view_count = 41;
        original.resumo_image = Some("https://cdn/capa.jpg".to_string());
        db.insert_report(&original)?;
        db.increment_view_count(&original.id)?;

        let fetched = db.get_report(&original.id)?.unwrap().report;
        assert_eq!(fetched.view_count, 42);
        assert_eq!(fetched.resumo_image.as_deref(), Some("https://cdn/capa.jpg"));
        assert_eq!(fetched.created_at, original.created_at);
        Ok(())
    }

    #[test]
    fn test_reads_rows_with_blank_month_and_season() -> Result<()> {
        let db = Database::open_in_memory()?;
        let original = report(UserId::new(), "legacy", 0);
        db.insert_report(&original)?;
        db.conn().execute(
            "UPDATE relatos SET month = '', season = '', emojiseason = '' WHERE id = ?1",
            [original.id.to_string()],
        )?;

        let fetched = db.get_report(&original.id)?.unwrap().report;
        assert_eq!(fetched.month, None);
        assert_eq!(fetched.season, None);
        assert_eq!(fetched.season_emoji, None);
        Ok(())
    }
}
