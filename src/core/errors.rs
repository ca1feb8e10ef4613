//! TSC-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, TsvError>;

/// Top-level error type for tsv_scrub.
#[derive(Debug, Error)]
pub enum TsvError {
    #[error("[TSC-1001] cannot list working directory {path}: {source}")]
    DirectoryList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[TSC-1002] sweep target is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("[TSC-2001] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[TSC-2002] file is not valid UTF-8 text: {path}")]
    Encoding { path: PathBuf },

    #[error("[TSC-3001] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },
}

impl TsvError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DirectoryList { .. } => "TSC-1001",
            Self::NotADirectory { .. } => "TSC-1002",
            Self::Io { .. } => "TSC-2001",
            Self::Encoding { .. } => "TSC-2002",
            Self::Serialization { .. } => "TSC-3001",
        }
    }

    /// Whether retrying might resolve the failure.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::DirectoryList { .. } | Self::Io { .. })
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for TsvError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}
