//! Error types for the PII scanner.
//!
//! The detection engine itself is total over any text input. Errors only
//! come from the collaborators around it: reading files, extracting text
//! from PDFs, and compiling custom-term matchers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for scanner operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Error type for all fallible scanner operations.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Error occurred while reading a file
    #[error("IO error for path '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A custom term could not be turned into a matcher
    #[error("Pattern error for '{pattern}': {reason}")]
    PatternError { pattern: String, reason: String },

    /// Text extraction failed
    #[error("Text extraction failed for '{}': {reason}", path.display())]
    TextExtraction { path: PathBuf, reason: String },

    /// The PDF structure could not be read
    #[error("PDF processing error: {message}")]
    PdfProcessing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The input exists but is not something we can scan
    #[error("Unsupported input '{}': {reason}", path.display())]
    UnsupportedInput { path: PathBuf, reason: String },
}

impl ScanError {
    /// Wraps an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
