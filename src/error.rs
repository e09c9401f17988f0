//! Error types for satellite-sanity operations.
//!
//! This module defines [`SanityError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fact precondition errors (`FactMissing`, `FactLineCount`, `FactParse`)
//!   mean the collected data is broken, not that the host fails a check
//! - Hardware findings are never errors; rules return them as values
//! - Use `anyhow::Error` (via `SanityError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for satellite-sanity operations.
#[derive(Debug, Error)]
pub enum SanityError {
    /// A rule needed a fact that the bundle does not contain.
    #[error("Missing fact: {fact}")]
    FactMissing { fact: String },

    /// A fact has a different number of lines than a rule requires.
    #[error("Fact '{fact}' must contain exactly {expected} line(s), found {found}")]
    FactLineCount {
        fact: String,
        expected: usize,
        found: usize,
    },

    /// A fact line could not be parsed into the expected value.
    #[error("Cannot parse fact '{fact}' line {line:?}: {message}")]
    FactParse {
        fact: String,
        line: String,
        message: String,
    },

    /// Snapshot path does not exist.
    #[error("Fact snapshot not found: {path}")]
    SnapshotNotFound { path: PathBuf },

    /// Snapshot exists but could not be read.
    #[error("Failed to read fact snapshot at {path}: {message}")]
    SnapshotRead { path: PathBuf, message: String },

    /// Snapshot file could not be parsed.
    #[error("Failed to parse fact snapshot at {path}: {message}")]
    SnapshotParse { path: PathBuf, message: String },

    /// A rule id was requested that is not registered.
    #[error("Unknown rule: {id}")]
    UnknownRule { id: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SanityError {
    /// Whether this error reports malformed or incomplete input facts.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::FactMissing { .. } | Self::FactLineCount { .. } | Self::FactParse { .. }
        )
    }

    /// Whether this error means a fact snapshot could not be loaded.
    pub fn is_snapshot(&self) -> bool {
        matches!(
            self,
            Self::SnapshotNotFound { .. } | Self::SnapshotRead { .. } | Self::SnapshotParse { .. }
        )
    }
}

/// Result type alias for satellite-sanity operations.
pub type Result<T> = std::result::Result<T, SanityError>;
