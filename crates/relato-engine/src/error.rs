use std::fmt;

use relato_types::SectionKey;

/// Result type for relato-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Minimum number of filled sections a report needs before it can be saved
pub const MIN_COMPLETED_SECTIONS: usize = 3;

/// Errors raised by the editing model.
///
/// `Validation` is user-facing; the remaining variants indicate a caller
/// asked for something the current state cannot satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Report cannot be saved yet
    Validation(ValidationError),

    /// No section with this key exists in the report
    UnknownSection(SectionKey),

    /// Proposed order is not a permutation of the section keys
    InvalidReorder(String),

    /// Index does not address an element of the named list
    IndexOutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },

    /// An image upload for this section has not finished yet
    UploadInFlight(SectionKey),

    /// Upload finished or failed for a section that was not uploading
    UploadNotStarted(SectionKey),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    TooFewSections { completed: usize, required: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TooFewSections {
                completed,
                required,
            } => write!(
                f,
                "Fill more sections: at least {} report sections must be completed ({} so far)",
                required, completed
            ),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(err) => write!(f, "{}", err),
            Error::UnknownSection(key) => write!(f, "Unknown section: {}", key),
            Error::InvalidReorder(msg) => write!(f, "Invalid section order: {}", msg),
            Error::IndexOutOfRange { list, index, len } => write!(
                f,
                "Index {} is out of range for {} (length {})",
                index, list, len
            ),
            Error::UploadInFlight(key) => {
                write!(f, "An image upload for section '{}' is already in progress", key)
            }
            Error::UploadNotStarted(key) => {
                write!(f, "No image upload was started for section '{}'", key)
            }
        }
    }
}

impl std::error::Error for Error {}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}
