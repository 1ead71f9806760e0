//! Error types for content loading.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for content store operations.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors raised while resolving, reading, parsing or validating a content document.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The identifier is absolute or escapes the content root.
    #[error("invalid content path: {path}")]
    InvalidPath { path: String },

    /// No document exists under the identifier.
    #[error("content not found: {path}")]
    NotFound { path: String },

    /// The document exists but could not be read.
    #[error("failed to read content {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file extension does not name a supported data format.
    #[error("unsupported content format: {path:?}")]
    UnsupportedFormat { path: PathBuf },

    /// The stored data is not syntactically valid.
    #[error("malformed content in {path:?}: {message}")]
    Malformed { path: PathBuf, message: String },

    /// The data parsed but does not fit the expected schema.
    #[error("content {path:?} does not match schema `{schema}`: {message}")]
    SchemaMismatch {
        path: PathBuf,
        schema: &'static str,
        message: String,
    },
}

impl ContentError {
    /// True for `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound { .. })
    }

    /// True for `Malformed`.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ContentError::Malformed { .. })
    }

    /// True for `SchemaMismatch`.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, ContentError::SchemaMismatch { .. })
    }
}
