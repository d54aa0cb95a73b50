use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    NotFound(String),
    InvalidInput(String),
    /// Report cannot be saved yet; nothing was written
    Validation(String),
    /// Not signed in, bad credentials, or not the owner
    Unauthorized(String),
    Internal(relato_runtime::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::Validation(msg) => write!(f, "{}", msg),
            Error::Unauthorized(msg) => write!(f, "{}", msg),
            Error::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Internal(err) => Some(err),
            _ => None,
        }
    }
}

impl From<relato_runtime::Error> for Error {
    fn from(err: relato_runtime::Error) -> Self {
        use relato_runtime::Error as Runtime;

        if err.is_validation() {
            return Error::Validation(err.to_string());
        }
        match err {
            Runtime::NotFound(msg) => Error::NotFound(msg),
            Runtime::InvalidInput(msg) => Error::InvalidInput(msg),
            Runtime::Engine(engine) => Error::InvalidInput(engine.to_string()),
            Runtime::Forbidden(msg) => Error::Unauthorized(format!("Forbidden: {}", msg)),
            Runtime::Auth(auth) => Error::Unauthorized(auth.to_string()),
            other => Error::Internal(other),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::InvalidInput(format!("draft file: {}", err))
    }
}
