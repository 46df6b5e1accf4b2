// src/config/builder.rs

use super::{Config, OutputConfig, SortConfig, SortKey, TraversalConfig};
use crate::cli::Cli;
use crate::errors::{ConfigError, Result};
use std::path::PathBuf;

/// A builder for creating a `Config` programmatically.
///
/// Unset options fall back to the tool's defaults: current directory, sort by
/// name with directories first, info lines, no column grid.
///
/// # Examples
///
/// ```
/// use seqls::config::{ConfigBuilder, SortKey};
///
/// let config = ConfigBuilder::new()
///     .path("/renders")
///     .sort(SortKey::Time)
///     .reverse_sort(true)
///     .columns(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.sort.key, SortKey::Time);
/// assert!(config.sort.reverse);
/// assert!(config.sort.dirs_first);
/// assert_eq!(config.output.columns, 3);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    paths: Vec<String>,
    show_info: Option<bool>,
    show_full_path: Option<bool>,
    recurse: Option<bool>,
    show_hidden: Option<bool>,
    columns: Option<usize>,
    sort: Option<SortKey>,
    reverse_sort: Option<bool>,
    sort_dirs_first: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            paths: cli.paths,
            show_info: Some(!cli.no_info),
            show_full_path: Some(cli.file_path),
            recurse: Some(cli.recurse),
            show_hidden: Some(cli.hidden),
            columns: Some(cli.columns),
            sort: Some(cli.sort),
            reverse_sort: Some(cli.reverse_sort),
            sort_dirs_first: Some(!cli.no_sort_dirs),
        }
    }

    /// Adds a file or directory to list. May be called repeatedly.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Sets all paths to list, replacing any added so far.
    pub fn paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Show type, size, owner, permissions and time.
    pub fn show_info(mut self, show: bool) -> Self {
        self.show_info = Some(show);
        self
    }

    /// Show full paths instead of bare names.
    pub fn show_full_path(mut self, show: bool) -> Self {
        self.show_full_path = Some(show);
        self
    }

    /// Descend into sub-directories.
    pub fn recurse(mut self, recurse: bool) -> Self {
        self.recurse = Some(recurse);
        self
    }

    /// Include hidden entries.
    pub fn show_hidden(mut self, show: bool) -> Self {
        self.show_hidden = Some(show);
        self
    }

    /// Number of grid columns; zero prints one entry per line.
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Primary sort key.
    pub fn sort(mut self, key: SortKey) -> Self {
        self.sort = Some(key);
        self
    }

    /// Reverse the sort order.
    pub fn reverse_sort(mut self, reverse: bool) -> Self {
        self.reverse_sort = Some(reverse);
        self
    }

    /// Sort directories before files and sequences.
    pub fn sort_dirs_first(mut self, dirs_first: bool) -> Self {
        self.sort_dirs_first = Some(dirs_first);
        self
    }

    /// Validates the options and builds the final `Config`.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if any path is empty.
    pub fn build(self) -> Result<Config> {
        if self.paths.iter().any(|p| p.is_empty()) {
            return Err(ConfigError::InvalidValue {
                option: "PATH".to_string(),
                reason: "paths must not be empty".to_string(),
            }
            .into());
        }
        let paths = if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths.into_iter().map(PathBuf::from).collect()
        };

        let sort_defaults = SortConfig::default();
        let output_defaults = OutputConfig::default();
        let traversal_defaults = TraversalConfig::default();

        Ok(Config {
            paths,
            traversal: TraversalConfig {
                recurse: self.recurse.unwrap_or(traversal_defaults.recurse),
                show_hidden: self.show_hidden.unwrap_or(traversal_defaults.show_hidden),
            },
            sort: SortConfig {
                key: self.sort.unwrap_or(sort_defaults.key),
                reverse: self.reverse_sort.unwrap_or(sort_defaults.reverse),
                dirs_first: self.sort_dirs_first.unwrap_or(sort_defaults.dirs_first),
            },
            output: OutputConfig {
                show_info: self.show_info.unwrap_or(output_defaults.show_info),
                show_full_path: self.show_full_path.unwrap_or(output_defaults.show_full_path),
                columns: self.columns.unwrap_or(output_defaults.columns),
            },
        })
    }
}
