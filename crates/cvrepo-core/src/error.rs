//! # Error Types
//!
//! Validation problems inside the repository are *not* errors at this level:
//! they are recorded as [`crate::Issue`]s. The types here cover failures
//! that stop a run outright.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for CV repository tooling.
#[derive(Error, Debug)]
pub enum CvError {
    /// An identifier failed its constructor checks.
    #[error("invalid {kind} identifier '{value}': {reason}")]
    InvalidIdentifier {
        /// Identifier namespace (`collection`, `term`).
        kind: &'static str,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// Error while enumerating the repository tree.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The root does not exist or is not a directory.
    #[error("repository root '{0}' is not a directory")]
    RootNotFound(PathBuf),

    /// A directory listing failed.
    #[error("cannot read directory '{path}': {source}")]
    ReadDir {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
