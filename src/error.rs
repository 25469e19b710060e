//! Error types for the mockup engine

use thiserror::Error;

/// Result type alias for mockup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while deriving, exporting or generating pages
///
/// Mutating or removing an item whose id is not in its collection is not an
/// error: those operations are silent no-ops on the model.
#[derive(Error, Debug)]
pub enum Error {
    /// The generative service returned a document that does not match the
    /// product model shape
    #[error("Invalid product document: {0}")]
    Validation(String),

    /// Capturing a render surface failed
    #[error("Snapshot of '{surface}' failed: {reason}")]
    Snapshot { surface: String, reason: String },

    /// Caller supplied unusable input (blank product name, no images, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Network error talking to an external collaborator
    #[error("Network error: {0}")]
    Network(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn snapshot(surface: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Error::Snapshot {
            surface: surface.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(err.to_string())
    }
}

#[cfg(feature = "assistant")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}
