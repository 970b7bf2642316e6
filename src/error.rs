//! Error types for unboil library.

use std::io;
use thiserror::Error;

/// Result type alias for unboil operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while filtering a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A serialized document could not be decoded or encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Caller-supplied configuration is unusable.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// No phrase list is known for the requested locale.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// A filter in the chain failed; the remaining filters were not run.
    #[error("Filter '{filter}' failed: {message}")]
    Processing {
        /// Name of the failing filter
        filter: String,
        /// Failure description
        message: String,
    },
}

impl Error {
    /// Create a processing error for the named filter.
    pub fn processing(filter: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Processing {
            filter: filter.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownLocale("xx".to_string());
        assert_eq!(err.to_string(), "Unknown locale: xx");

        let err = Error::processing("TerminatingBlocksFinder", "boom");
        assert_eq!(
            err.to_string(),
            "Filter 'TerminatingBlocksFinder' failed: boom"
        );
    }

    #[test]
    fn test_every_variant_is_reachable() {
        let errors = [
            Error::from(io::Error::new(io::ErrorKind::NotFound, "gone")),
            Error::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err()),
            Error::InvalidOptions("max_passes must be at least 1".to_string()),
            "xx".parse::<crate::Locale>().unwrap_err(),
            Error::processing("TitleMatchClassifier", "boom"),
        ];
        for err in errors {
            // no catch-all arm: a new variant must be added here
            let kind = match err {
                Error::Io(_) => "io",
                Error::Json(_) => "json",
                Error::InvalidOptions(_) => "options",
                Error::UnknownLocale(_) => "locale",
                Error::Processing { .. } => "processing",
            };
            assert!(!kind.is_empty());
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
