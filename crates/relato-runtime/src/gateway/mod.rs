//! Remote Data Gateway seam.
//!
//! Services talk to authentication, the relational tables and object storage
//! only through these traits. [`LocalGateway`] implements them over SQLite.

mod local;

pub use local::LocalGateway;

use relato_types::{
    Report, ReportId, ReportWithAuthor, SavedReport, Session, UserId, UserProfile,
};
use tokio::sync::watch;

use crate::Result;

pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

pub trait AuthGateway {
    fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<Session>;

    fn sign_in(&self, email: &str, password: &str) -> Result<Session>;

    /// Fails with `AuthError::SessionMissing` when nobody is signed in
    fn sign_out(&self) -> Result<()>;

    fn current_session(&self) -> Option<Session>;

    /// Session changes (sign in, sign out) as a watch channel
    fn subscribe(&self) -> watch::Receiver<Option<Session>>;
}

pub trait ReportGateway {
    fn fetch_profile(&self, user_id: &UserId) -> Result<Option<UserProfile>>;

    fn update_avatar(&self, user_id: &UserId, avatar_url: &str) -> Result<()>;

    fn insert_report(&self, report: &Report) -> Result<()>;

    /// Last write wins; only the owner may update
    fn update_report(&self, report: &Report) -> Result<()>;

    fn fetch_report(&self, id: &ReportId) -> Result<Option<ReportWithAuthor>>;

    /// Newest first
    fn list_reports(&self) -> Result<Vec<ReportWithAuthor>>;

    fn list_reports_by_user(&self, user_id: &UserId) -> Result<Vec<ReportWithAuthor>>;

    fn delete_report(&self, id: &ReportId, owner: &UserId) -> Result<()>;

    /// `increment_view_count` RPC
    fn increment_view_count(&self, id: &ReportId) -> Result<()>;

    fn set_liked(&self, user_id: &UserId, report_id: &ReportId, liked: bool) -> Result<()>;

    fn is_liked(&self, user_id: &UserId, report_id: &ReportId) -> Result<bool>;

    fn count_likes(&self, report_id: &ReportId) -> Result<u64>;

    fn set_saved(&self, user_id: &UserId, report_id: &ReportId, saved: bool) -> Result<()>;

    fn is_saved(&self, user_id: &UserId, report_id: &ReportId) -> Result<bool>;

    /// Newest save first
    fn list_saved(&self, user_id: &UserId) -> Result<Vec<SavedReport>>;
}

pub trait StorageGateway {
    fn upload(
        &self,
        bucket: &str,
        name: &str,
        bytes: &[u8],
        content_type: &str,
        upsert: bool,
    ) -> Result<()>;

    fn public_url(&self, bucket: &str, name: &str) -> String;
}

/// Everything the services need from the backend
pub trait Gateway: AuthGateway + ReportGateway + StorageGateway + Send + Sync {}

impl<T> Gateway for T where T: AuthGateway + ReportGateway + StorageGateway + Send + Sync {}
