//! Error handling for LAS reading and writing.
//!
//! Only structural failures are fatal: a missing or oversized file, bytes
//! that cannot be decoded, or an unwritable destination. Content-level
//! irregularities are repaired during parsing and reported as
//! [`Diagnostic`](crate::diagnostics::Diagnostic)s instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LasError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path} ({reason})")]
    NotFound { path: PathBuf, reason: String },

    #[error("File size ({size} bytes) exceeds maximum allowed ({limit} bytes): {path}")]
    SizeExceeded { path: PathBuf, size: u64, limit: u64 },

    #[error("Cannot decode text as {encoding}: {reason}")]
    Encoding { encoding: String, reason: String },

    #[error("Cannot write to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl LasError {
    /// Create a not-found error for a path
    pub fn not_found(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::NotFound {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an encoding error
    pub fn encoding(encoding: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Encoding {
            encoding: encoding.into(),
            reason: reason.into(),
        }
    }

    /// Create a write error with the failing destination
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LasError>;
