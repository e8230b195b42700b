//! Error types for the Bhasha library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`BhashaError`] enum. Two variants form the request-level contract:
//!
//! - [`BhashaError::UnknownLanguage`] - the selector did not resolve to a
//!   supported language; raised before any stage runs.
//! - [`BhashaError::CollaboratorUnavailable`] - an external resource (stopword
//!   corpus, lexicon, morphological analyzer) failed to load or respond.
//!
//! The remaining variants cover ambient failures (I/O, configuration parsing).
//!
//! # Examples
//!
//! ```
//! use bhasha::error::{BhashaError, Result};
//!
//! fn resolve_something() -> Result<()> {
//!     Err(BhashaError::unknown_language("klingon"))
//! }
//!
//! match resolve_something() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Bhasha operations.
#[derive(Error, Debug)]
pub enum BhashaError {
    /// The language selector is not in the registry.
    #[error("Unknown language: '{selector}'")]
    UnknownLanguage { selector: String },

    /// An external collaborator failed to load or respond.
    #[error("Collaborator unavailable ({collaborator}): {message}")]
    CollaboratorUnavailable {
        collaborator: String,
        message: String,
    },

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (file operations, pipes, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with BhashaError.
pub type Result<T> = std::result::Result<T, BhashaError>;

impl BhashaError {
    /// Create a new unknown language error.
    pub fn unknown_language<S: Into<String>>(selector: S) -> Self {
        BhashaError::UnknownLanguage {
            selector: selector.into(),
        }
    }

    /// Create a new collaborator error.
    pub fn collaborator<C: Into<String>, M: Into<String>>(collaborator: C, message: M) -> Self {
        BhashaError::CollaboratorUnavailable {
            collaborator: collaborator.into(),
            message: message.into(),
        }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        BhashaError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        BhashaError::Config(msg.into())
    }

    /// Whether this error was caused by the caller's language selection.
    pub fn is_unknown_language(&self) -> bool {
        matches!(self, BhashaError::UnknownLanguage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = BhashaError::unknown_language("9");
        assert_eq!(error.to_string(), "Unknown language: '9'");
        assert!(error.is_unknown_language());

        let error = BhashaError::collaborator("stopwords:hindi", "file missing");
        assert_eq!(
            error.to_string(),
            "Collaborator unavailable (stopwords:hindi): file missing"
        );
        assert!(!error.is_unknown_language());

        let error = BhashaError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = BhashaError::from(io_error);

        match error {
            BhashaError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
