//! `seqls` is a library and command-line tool for listing directories with
//! numbered file sequences collapsed into single entries.
//!
//! A render output such as `shot.0001.exr` .. `shot.0240.exr` is shown as
//! one line, `shot.1-240.exr`, with the combined size of all frames. Gaps in
//! the numbering are kept in the range expression (`shot.1-3,5.exr`).
//!
//! The listing runs as a pipeline:
//! 1.  **Discover**: read a directory's entries through an [`EntrySource`].
//! 2.  **Classify**: group numbered files into sequences ([`sequence`]).
//! 3.  **Sort and format**: order the entries and render text lines
//!     ([`sorting`], [`output`]).
//!
//! # Example: Library Usage
//!
//! ```
//! use seqls::{execute, CancellationToken, ConfigBuilder, LocalFs};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! for frame in ["shot.001.png", "shot.002.png", "shot.003.png", "shot.005.png"] {
//!     fs::write(temp_dir.path().join(frame), "px").unwrap();
//! }
//! fs::write(temp_dir.path().join("readme.txt"), "notes").unwrap();
//! fs::create_dir(temp_dir.path().join("assets")).unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .path(temp_dir.path().to_str().unwrap())
//!     .show_info(false)
//!     .build()
//!     .unwrap();
//!
//! let mut out = Vec::new();
//! let mut diagnostics = Vec::new();
//! let report = execute(&LocalFs, &config, &CancellationToken::new(), &mut out, &mut diagnostics).unwrap();
//!
//! assert!(!report.has_failures());
//! assert_eq!(String::from_utf8(out).unwrap(), "assets\nreadme.txt\nshot.1-3,5.png\n");
//! ```

pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod output;
pub mod prelude;
pub mod sequence;
pub mod signal;
pub mod sorting;

pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder, SortKey};
pub use core_types::{DirEntry, EntryKind, ListingEntry, ListingKind, Sequence};
pub use discovery::{execute, list_directory, EntrySource, LocalFs, RunReport};
pub use sequence::RangeExpression;

use crate::errors::Result;
use std::io;

/// Lists every configured path from the local filesystem to stdout.
///
/// Diagnostics for paths that cannot be read go to stderr. This mirrors the
/// command-line behaviour; use [`execute`] to capture output in memory or to
/// list from another [`EntrySource`].
///
/// # Errors
/// Returns [`errors::Error::Interrupted`] if `token` is cancelled, or an I/O
/// error if stdout cannot be written.
pub fn run(config: &Config, token: &CancellationToken) -> Result<RunReport> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut diagnostics = stderr.lock();
    execute(&LocalFs, config, token, &mut out, &mut diagnostics)
}
