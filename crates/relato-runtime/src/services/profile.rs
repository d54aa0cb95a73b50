use std::sync::Arc;

use chrono::Utc;
use relato_types::{ReportId, ReportWithAuthor, SavedReport, UserId};
use tracing::{info, warn};

use crate::gateway::{Gateway, IMAGE_CONTENT_TYPE};
use crate::Result;

/// Object name for an avatar uploaded at `unix_millis`
pub fn avatar_file_name(user_id: &UserId, unix_millis: i64) -> String {
    format!("avatar_{}_{}.jpg", user_id, unix_millis)
}

pub struct ProfileOps {
    gateway: Arc<dyn Gateway>,
    bucket: String,
}

impl ProfileOps {
    pub fn new(gateway: Arc<dyn Gateway>, bucket: impl Into<String>) -> Self {
        Self {
            gateway,
            bucket: bucket.into(),
        }
    }

    /// The user's own reports, newest first
    pub fn my_reports(&self, user_id: &UserId) -> Result<Vec<ReportWithAuthor>> {
        self.gateway.list_reports_by_user(user_id)
    }

    pub fn saved_reports(&self, user_id: &UserId) -> Result<Vec<SavedReport>> {
        self.gateway.list_saved(user_id)
    }

    pub fn delete_report(&self, user_id: &UserId, id: &ReportId) -> Result<()> {
        self.gateway
            .delete_report(id, user_id)
            .inspect_err(|e| warn!(report = %id, error = %e, "delete failed"))?;
        info!(report = %id, "report deleted");
        Ok(())
    }

    /// Upload a new avatar and point `users.avatar_url` at it; returns the public URL
    pub fn upload_avatar(&self, user_id: &UserId, bytes: &[u8]) -> Result<String> {
        let name = avatar_file_name(user_id, Utc::now().timestamp_millis());
        self.gateway
            .upload(&self.bucket, &name, bytes, IMAGE_CONTENT_TYPE, true)
            .inspect_err(|e| warn!(user = %user_id, error = %e, "avatar upload failed"))?;

        let url = self.gateway.public_url(&self.bucket, &name);
        self.gateway.update_avatar(user_id, &url)?;
        Ok(url)
    }
}
