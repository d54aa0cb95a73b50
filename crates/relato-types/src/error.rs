use std::fmt;

/// Result type for relato-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Identifier could not be parsed
    InvalidId(String),

    /// A named value (month, season, ...) was not recognised
    InvalidValue { kind: &'static str, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidId(id) => write!(f, "Invalid id: {}", id),
            Error::InvalidValue { kind, value } => write!(f, "Invalid {}: '{}'", kind, value),
        }
    }
}

impl std::error::Error for Error {}
