//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the errors that can
//! occur while listing directories, offering more context than generic I/O or
//! `anyhow` errors.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors used throughout `seqls`.
///
/// Per-path errors (`NotFound`, `PermissionDenied`, `Io`) are reported by the
/// traversal driver and do not abort the overall run.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path does not exist.
    #[error("{path}: No such file or directory")]
    NotFound {
        /// The path that could not be found.
        path: String,
    },

    /// The path exists but could not be opened or read.
    #[error("{path}: Permission denied")]
    PermissionDenied {
        /// The path that could not be read.
        path: String,
    },

    /// Any other I/O error while accessing a path.
    #[error("{path}: {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: io::Error,
    },

    /// Invalid configuration settings.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Two members of one sequence group share a frame number.
    ///
    /// The tokenizer and grouper make this unreachable for real directory
    /// listings; it only surfaces when an entry source yields duplicate names.
    #[error("Ambiguous sequence: {0}")]
    AmbiguousSequence(String),

    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}

/// Errors raised while validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An option was given a value it cannot accept.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue {
        /// The offending option.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// A `Result` alias using the crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Returns `true` for errors local to a single input path or directory
    /// listing. These are reported and the run continues.
    pub fn is_path_local(&self) -> bool {
        matches!(
            self,
            Error::NotFound { .. }
                | Error::PermissionDenied { .. }
                | Error::Io { .. }
                | Error::AmbiguousSequence(_)
        )
    }
}

/// Creates a path-scoped `Error` from an `io::Error`.
///
/// `NotFound` and `PermissionDenied` kinds map to their dedicated variants,
/// everything else becomes [`Error::Io`].
pub fn io_error_with_path<P: AsRef<Path>>(source: io::Error, path: P) -> Error {
    let path = path.as_ref().display().to_string();
    match source.kind() {
        io::ErrorKind::NotFound => Error::NotFound { path },
        io::ErrorKind::PermissionDenied => Error::PermissionDenied { path },
        _ => Error::Io { path, source },
    }
}
