use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// Identity known to the authentication service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: UserId,
    pub email: String,
}

/// Active authentication session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: AuthUser,
    pub created_at: DateTime<Utc>,
}

/// Row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Signed-in user: auth identity hydrated with profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl CurrentUser {
    /// Identity only, used when the profile row cannot be read
    pub fn from_auth(user: &AuthUser) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: None,
            avatar_url: None,
        }
    }

    pub fn hydrated(user: &AuthUser, profile: UserProfile) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: profile.name,
            avatar_url: profile.avatar_url,
        }
    }

    /// Profile name, else the local part of the email
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }
}
