use std::fmt;

/// Result type for relato-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Authentication failures reported by the gateway or the session manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
    EmailTaken(String),
    /// No user is signed in locally
    NotSignedIn,
    /// Gateway has no session to end
    SessionMissing,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::EmailTaken(email) => write!(f, "Email already registered: {}", email),
            AuthError::NotSignedIn => write!(f, "Not signed in"),
            AuthError::SessionMissing => write!(f, "Auth session missing"),
        }
    }
}

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Local store error
    Store(relato_store::Error),

    /// Editing model rejected the operation (includes save validation)
    Engine(relato_engine::Error),

    Auth(AuthError),

    /// Requested row does not exist
    NotFound(String),

    /// Row exists but belongs to another user
    Forbidden(String),

    /// Object storage failure
    Storage(String),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Rejected user input
    InvalidInput(String),
}

impl Error {
    /// True for save rejections raised before any gateway call
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Engine(relato_engine::Error::Validation(_)))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "Store error: {}", err),
            Error::Engine(err) => write!(f, "{}", err),
            Error::Auth(err) => write!(f, "Authentication error: {}", err),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            Error::Storage(msg) => write!(f, "Storage error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Engine(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Auth(_)
            | Error::NotFound(_)
            | Error::Forbidden(_)
            | Error::Storage(_)
            | Error::Config(_)
            | Error::InvalidInput(_) => None,
        }
    }
}

impl From<relato_store::Error> for Error {
    fn from(err: relato_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<relato_engine::Error> for Error {
    fn from(err: relato_engine::Error) -> Self {
        Error::Engine(err)
    }
}

impl From<relato_engine::ValidationError> for Error {
    fn from(err: relato_engine::ValidationError) -> Self {
        Error::Engine(err.into())
    }
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        Error::Auth(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
