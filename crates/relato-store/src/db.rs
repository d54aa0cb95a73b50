use chrono::{DateTime, Utc};
use relato_types::{Report, ReportId, ReportWithAuthor, SavedReport, UserId, UserProfile};
use rusqlite::Connection;
use std::path::Path;

use crate::Result;
use crate::queries;
use crate::records::{IdentityRecord, ObjectRecord, SessionRecord};
use crate::schema;

/// Handle to the local gateway database
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(db_path)?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // Auth identities & sessions

    pub fn insert_identity(&self, identity: &IdentityRecord) -> Result<()> {
        queries::identity::insert(&self.conn, identity)
    }

    pub fn find_identity_by_email(&self, email: &str) -> Result<Option<IdentityRecord>> {
        queries::identity::find_by_email(&self.conn, email)
    }

    pub fn email_for(&self, user_id: &UserId) -> Result<Option<String>> {
        queries::identity::email_for(&self.conn, &user_id.to_string())
    }

    pub fn insert_session(&self, session: &SessionRecord) -> Result<()> {
        queries::session::insert(&self.conn, session)
    }

    pub fn get_active_session(&self, token: &str) -> Result<Option<SessionRecord>> {
        queries::session::get_active(&self.conn, token)
    }

    pub fn latest_active_session(&self) -> Result<Option<SessionRecord>> {
        queries::session::latest_active(&self.conn)
    }

    pub fn revoke_session(&self, token: &str) -> Result<bool> {
        queries::session::revoke(&self.conn, token)
    }

    // Profiles

    pub fn upsert_profile(&self, profile: &UserProfile) -> Result<()> {
        queries::profile::upsert(&self.conn, profile)
    }

    pub fn get_profile(&self, id: &UserId) -> Result<Option<UserProfile>> {
        queries::profile::get(&self.conn, id)
    }

    pub fn set_avatar(&self, id: &UserId, avatar_url: &str) -> Result<bool> {
        queries::profile::set_avatar(&self.conn, id, avatar_url)
    }

    // Reports

    pub fn insert_report(&self, report: &Report) -> Result<()> {
        queries::report::insert(&self.conn, report)
    }

    pub fn update_report(&self, report: &Report) -> Result<bool> {
        queries::report::update(&self.conn, report)
    }

    pub fn get_report(&self, id: &ReportId) -> Result<Option<ReportWithAuthor>> {
        queries::report::get(&self.conn, id)
    }

    pub fn list_reports(&self) -> Result<Vec<ReportWithAuthor>> {
        queries::report::list_all(&self.conn)
    }

    pub fn list_reports_by_user(&self, user_id: &UserId) -> Result<Vec<ReportWithAuthor>> {
        queries::report::list_by_user(&self.conn, user_id)
    }

    pub fn delete_report(&self, id: &ReportId, owner: &UserId) -> Result<bool> {
        queries::report::delete(&self.conn, id, owner)
    }

    pub fn increment_view_count(&self, id: &ReportId) -> Result<Option<u64>> {
        queries::report::increment_view_count(&self.conn, id)
    }

    // Saves & likes

    pub fn save_report(&self, user_id: &UserId, report_id: &ReportId, at: DateTime<Utc>) -> Result<bool> {
        queries::saved::save(&self.conn, user_id, report_id, at)
    }

    pub fn unsave_report(&self, user_id: &UserId, report_id: &ReportId) -> Result<bool> {
        queries::saved::unsave(&self.conn, user_id, report_id)
    }

    pub fn is_saved(&self, user_id: &UserId, report_id: &ReportId) -> Result<bool> {
        queries::saved::is_saved(&self.conn, user_id, report_id)
    }

    pub fn list_saved(&self, user_id: &UserId) -> Result<Vec<SavedReport>> {
        queries::saved::list_for_user(&self.conn, user_id)
    }

    pub fn like_report(&self, user_id: &UserId, report_id: &ReportId, at: DateTime<Utc>) -> Result<bool> {
        queries::like::like(&self.conn, user_id, report_id, at)
    }

    pub fn unlike_report(&self, user_id: &UserId, report_id: &ReportId) -> Result<bool> {
        queries::like::unlike(&self.conn, user_id, report_id)
    }

    pub fn is_liked(&self, user_id: &UserId, report_id: &ReportId) -> Result<bool> {
        queries::like::is_liked(&self.conn, user_id, report_id)
    }

    pub fn count_likes(&self, report_id: &ReportId) -> Result<u64> {
        queries::like::count(&self.conn, report_id)
    }

    // Object storage

    pub fn put_object(&self, object: &ObjectRecord, upsert: bool, at: DateTime<Utc>) -> Result<()> {
        queries::object::put(&self.conn, object, upsert, at)
    }

    pub fn get_object(&self, bucket: &str, name: &str) -> Result<Option<ObjectRecord>> {
        queries::object::get(&self.conn, bucket, name)
    }
}
