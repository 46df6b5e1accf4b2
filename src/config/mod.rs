//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates all the settings parsed and validated from the CLI,
//! making them available to the rest of the application in a structured and
//! type-safe manner. A `Config` is immutable once built and is passed by
//! reference into every stage, so each directory listing can be computed in
//! isolation.

use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;

/// The primary key used to order entries within one listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    /// Name, byte-wise.
    #[default]
    Name,
    /// Entry kind (File, Seq, Dir).
    Type,
    /// Size in bytes (aggregate for sequences).
    Size,
    /// Owner name.
    Owner,
    /// Permission bits.
    Permissions,
    /// Modification time, oldest first.
    Time,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Name => "name",
            SortKey::Type => "type",
            SortKey::Size => "size",
            SortKey::Owner => "owner",
            SortKey::Permissions => "permissions",
            SortKey::Time => "time",
        };
        f.write_str(name)
    }
}

/// Configuration options related to walking the input paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Whether to descend into sub-directories.
    pub recurse: bool,
    /// Whether to include hidden (dot) entries.
    pub show_hidden: bool,
}

/// Configuration options related to ordering entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    /// The primary sort key. Ties are always broken by name.
    pub key: SortKey,
    /// Invert the ordering. Does not move directories after files.
    pub reverse: bool,
    /// Place directories before files and sequences.
    pub dirs_first: bool,
}

/// Configuration options related to formatting the final output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Show type, size, owner, permissions and time after each name.
    pub show_info: bool,
    /// Show full paths instead of bare names.
    pub show_full_path: bool,
    /// Number of columns for the name grid. Zero disables the grid and
    /// prints one entry per line.
    pub columns: usize,
}

/// Immutable configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Files and directories to list, in the order given.
    pub paths: Vec<PathBuf>,
    /// Configuration for traversal.
    pub traversal: TraversalConfig,
    /// Configuration for sorting.
    pub sort: SortConfig,
    /// Configuration for output.
    pub output: OutputConfig,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            recurse: false,
            show_hidden: false,
        }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Name,
            reverse: false,
            dirs_first: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_info: true,
            show_full_path: false,
            columns: 0,
        }
    }
}

impl Config {
    /// Creates a default `Config` for testing purposes.
    ///
    /// This function is hidden from public documentation and is intended for
    /// use in tests and doc tests only.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            paths: vec![PathBuf::from(".")],
            traversal: TraversalConfig::default(),
            sort: SortConfig::default(),
            output: OutputConfig::default(),
        }
    }
}
