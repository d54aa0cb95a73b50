use relato_types::UserId;

/// Credentials row of `auth_identities`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    pub user_id: UserId,
    /// Lowercased, trimmed
    pub email: String,
    /// Hex SHA-256 of salt + password
    pub password_hash: String,
    pub salt: String,
    /// RFC 3339
    pub created_at: String,
}

/// Row of `auth_sessions`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub token: String,
    pub user_id: UserId,
    pub created_at: String,
    pub revoked: bool,
}

/// Stored object in a bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRecord {
    pub bucket: String,
    pub name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}
