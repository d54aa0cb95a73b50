use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, SecondsFormat, Utc};
use relato_store::{Database, IdentityRecord, ObjectRecord, SessionRecord};
use relato_types::{
    AuthUser, Report, ReportId, ReportWithAuthor, SavedReport, Session, UserId, UserProfile,
};
use sha2::{Digest, Sha256};
use tokio::sync::watch;
use tracing::{debug, info};
use uuid::Uuid;

use super::{AuthGateway, ReportGateway, StorageGateway};
use crate::config::StorageConfig;
use crate::{AuthError, Error, Result};

const MIN_PASSWORD_LEN: usize = 6;

/// Gateway backed by the local SQLite store.
///
/// The signed-in session survives restarts: on open, the newest unrevoked
/// session row becomes the current session.
pub struct LocalGateway {
    db: Arc<Mutex<Database>>,
    storage: StorageConfig,
    session_tx: watch::Sender<Option<Session>>,
}

impl LocalGateway {
    pub fn new(db: Arc<Mutex<Database>>, storage: StorageConfig) -> Result<Self> {
        let restored = {
            let db = db.lock().unwrap();
            match db.latest_active_session()? {
                Some(record) => Some(session_from_record(&db, record)?),
                None => None,
            }
        };
        if let Some(session) = &restored {
            debug!(user = %session.user.id, "restored session");
        }

        let (session_tx, _) = watch::channel(restored);
        Ok(Self {
            db,
            storage,
            session_tx,
        })
    }

    pub fn open(db_path: &Path, storage: StorageConfig) -> Result<Self> {
        let db = Database::open(db_path)?;
        Self::new(Arc::new(Mutex::new(db)), storage)
    }

    pub fn open_in_memory(storage: StorageConfig) -> Result<Self> {
        let db = Database::open_in_memory()?;
        Self::new(Arc::new(Mutex::new(db)), storage)
    }

    /// Raw stored object, for inspection
    pub fn object(&self, bucket: &str, name: &str) -> Result<Option<ObjectRecord>> {
        let db = self.db.lock().unwrap();
        Ok(db.get_object(bucket, name)?)
    }

    fn start_session(&self, db: &Database, user: AuthUser) -> Result<Session> {
        let now = Utc::now();
        let record = SessionRecord {
            token: Uuid::new_v4().simple().to_string(),
            user_id: user.id,
            created_at: now.to_rfc3339_opts(SecondsFormat::Micros, true),
            revoked: false,
        };
        db.insert_session(&record)?;

        let session = Session {
            token: record.token,
            user,
            created_at: now,
        };
        self.session_tx.send_replace(Some(session.clone()));
        Ok(session)
    }
}

fn session_from_record(db: &Database, record: SessionRecord) -> Result<Session> {
    let email = db
        .email_for(&record.user_id)?
        .ok_or_else(|| Error::NotFound(format!("identity for user {}", record.user_id)))?;
    let created_at = DateTime::parse_from_rfc3339(&record.created_at)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::InvalidInput(format!("session timestamp: {}", e)))?;

    Ok(Session {
        token: record.token,
        user: AuthUser {
            id: record.user_id,
            email,
        },
        created_at,
    })
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

impl AuthGateway for LocalGateway {
    fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<Session> {
        let email = normalize_email(email);
        if !email.contains('@') {
            return Err(Error::InvalidInput(format!("invalid email: {}", email)));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(Error::InvalidInput(format!(
                "password must have at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let db = self.db.lock().unwrap();
        if db.find_identity_by_email(&email)?.is_some() {
            return Err(AuthError::EmailTaken(email).into());
        }

        let salt = Uuid::new_v4().simple().to_string();
        let identity = IdentityRecord {
            user_id: UserId::new(),
            email: email.clone(),
            password_hash: hash_password(&salt, password),
            salt,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        };
        db.insert_identity(&identity)?;

        let name = name.trim();
        db.upsert_profile(&UserProfile {
            id: identity.user_id,
            name: (!name.is_empty()).then(|| name.to_string()),
            avatar_url: None,
        })?;

        info!(user = %identity.user_id, "signed up");
        self.start_session(
            &db,
            AuthUser {
                id: identity.user_id,
                email,
            },
        )
    }

    fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let email = normalize_email(email);
        let db = self.db.lock().unwrap();

        let identity = db
            .find_identity_by_email(&email)?
            .ok_or(AuthError::InvalidCredentials)?;
        if hash_password(&identity.salt, password) != identity.password_hash {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.start_session(
            &db,
            AuthUser {
                id: identity.user_id,
                email: identity.email,
            },
        )
    }

    fn sign_out(&self) -> Result<()> {
        let current = self.session_tx.borrow().clone();
        let Some(session) = current else {
            return Err(AuthError::SessionMissing.into());
        };

        let revoked = {
            let db = self.db.lock().unwrap();
            db.revoke_session(&session.token)
        };
        // The local session ends even when the store write failed
        self.session_tx.send_replace(None);

        if revoked? {
            Ok(())
        } else {
            Err(AuthError::SessionMissing.into())
        }
    }

    fn current_session(&self) -> Option<Session> {
        self.session_tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.session_tx.subscribe()
    }
}

impl ReportGateway for LocalGateway {
    fn fetch_profile(&self, user_id: &UserId) -> Result<Option<UserProfile>> {
        let db = self.db.lock().unwrap();
        Ok(db.get_profile(user_id)?)
    }

    fn update_avatar(&self, user_id: &UserId, avatar_url: &str) -> Result<()> {
        let db = self.db.lock().unwrap();
        if !db.set_avatar(user_id, avatar_url)? {
            db.upsert_profile(&UserProfile {
                id: *user_id,
                name: None,
                avatar_url: Some(avatar_url.to_string()),
            })?;
        }
        Ok(())
    }

    fn insert_report(&self, report: &Report) -> Result<()> {
        debug!(report = %report.id, "insert relatos");
        let db = self.db.lock().unwrap();
        Ok(db.insert_report(report)?)
    }

    fn update_report(&self, report: &Report) -> Result<()> {
        debug!(report = %report.id, "update relatos");
        let db = self.db.lock().unwrap();
        if db.update_report(report)? {
            return Ok(());
        }
        match db.get_report(&report.id)? {
            Some(_) => Err(Error::Forbidden(format!(
                "report {} belongs to another user",
                report.id
            ))),
            None => Err(Error::NotFound(format!("report {}", report.id))),
        }
    }

    fn fetch_report(&self, id: &ReportId) -> Result<Option<ReportWithAuthor>> {
        let db = self.db.lock().unwrap();
        Ok(db.get_report(id)?)
    }

    fn list_reports(&self) -> Result<Vec<ReportWithAuthor>> {
        let db = self.db.lock().unwrap();
        Ok(db.list_reports()?)
    }

    fn list_reports_by_user(&self, user_id: &UserId) -> Result<Vec<ReportWithAuthor>> {
        let db = self.db.lock().unwrap();
        Ok(db.list_reports_by_user(user_id)?)
    }

    fn delete_report(&self, id: &ReportId, owner: &UserId) -> Result<()> {
        debug!(report = %id, "delete relatos");
        let db = self.db.lock().unwrap();
        if db.delete_report(id, owner)? {
            return Ok(());
        }
        match db.get_report(id)? {
            Some(_) => Err(Error::Forbidden(format!("report {} belongs to another user", id))),
            None => Err(Error::NotFound(format!("report {}", id))),
        }
    }

    fn increment_view_count(&self, id: &ReportId) -> Result<()> {
        let db = self.db.lock().unwrap();
        match db.increment_view_count(id)? {
            Some(_) => Ok(()),
            None => Err(Error::NotFound(format!("report {}", id))),
        }
    }

    fn set_liked(&self, user_id: &UserId, report_id: &ReportId, liked: bool) -> Result<()> {
        let db = self.db.lock().unwrap();
        if liked {
            db.like_report(user_id, report_id, Utc::now())?;
        } else {
            db.unlike_report(user_id, report_id)?;
        }
        Ok(())
    }

    fn is_liked(&self, user_id: &UserId, report_id: &ReportId) -> Result<bool> {
        let db = self.db.lock().unwrap();
        Ok(db.is_liked(user_id, report_id)?)
    }

    fn count_likes(&self, report_id: &ReportId) -> Result<u64> {
        let db = self.db.lock().unwrap();
        Ok(db.count_likes(report_id)?)
    }

    fn set_saved(&self, user_id: &UserId, report_id: &ReportId, saved: bool) -> Result<()> {
        let db = self.db.lock().unwrap();
        if saved {
            db.save_report(user_id, report_id, Utc::now())?;
        } else {
            db.unsave_report(user_id, report_id)?;
        }
        Ok(())
    }

    fn is_saved(&self, user_id: &UserId, report_id: &ReportId) -> Result<bool> {
        let db = self.db.lock().unwrap();
        Ok(db.is_saved(user_id, report_id)?)
    }

    fn list_saved(&self, user_id: &UserId) -> Result<Vec<SavedReport>> {
        let db = self.db.lock().unwrap();
        Ok(db.list_saved(user_id)?)
    }
}

impl StorageGateway for LocalGateway {
    fn upload(
        &self,
        bucket: &str,
        name: &str,
        bytes: &[u8],
        content_type: &str,
        upsert: bool,
    ) -> Result<()> {
        if bytes.is_empty() {
            return Err(Error::Storage(format!("empty upload: {}/{}", bucket, name)));
        }
        debug!(bucket, name, size = bytes.len(), "upload object");

        let object = ObjectRecord {
            bucket: bucket.to_string(),
            name: name.to_string(),
            content_type: content_type.to_string(),
            data: bytes.to_vec(),
        };
        let db = self.db.lock().unwrap();
        db.put_object(&object, upsert, Utc::now())
            .map_err(|e| Error::Storage(e.to_string()))
    }

    fn public_url(&self, bucket: &str, name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.storage.base_url.trim_end_matches('/'),
            bucket,
            name
        )
    }
}
