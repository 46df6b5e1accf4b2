//! The filesystem collaborator: where raw `DirEntry` snapshots come from.

use super::entry_processor::entry_from_metadata;
use crate::core_types::DirEntry;
use crate::errors::{io_error_with_path, Error, Result};
use log::{trace, warn};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// A source of directory entries.
///
/// The traversal driver only talks to the filesystem through this trait, so
/// listings can be computed from an in-memory tree in tests.
pub trait EntrySource {
    /// Returns the immediate children of `dir`.
    ///
    /// # Errors
    /// Fails with [`Error::NotFound`] or [`Error::PermissionDenied`] when the
    /// directory cannot be opened.
    fn list_children(&self, dir: &Path) -> Result<Vec<DirEntry>>;

    /// Returns the entry for a single path given on the command line.
    fn stat(&self, path: &Path) -> Result<DirEntry>;
}

/// Reads entries from the local filesystem.
///
/// Symbolic links inside a directory are not followed; they are listed as
/// files. Paths given to [`EntrySource::stat`] are followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl EntrySource for LocalFs {
    fn list_children(&self, dir: &Path) -> Result<Vec<DirEntry>> {
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        let mut entries = Vec::new();
        for item in walker {
            let item = match item {
                Ok(item) => item,
                // Failing to open the directory itself is an error for this path.
                Err(e) if e.depth() == 0 => return Err(walk_error(e, dir)),
                Err(e) => {
                    warn!("Skipping unreadable entry in '{}': {}", dir.display(), e);
                    continue;
                }
            };
            match item.metadata() {
                Ok(metadata) => entries.push(entry_from_metadata(item.path(), &metadata)),
                Err(e) => warn!(
                    "Skipping entry '{}' due to metadata error: {}",
                    item.path().display(),
                    e
                ),
            }
        }
        trace!("Read {} entries from '{}'", entries.len(), dir.display());
        Ok(entries)
    }

    fn stat(&self, path: &Path) -> Result<DirEntry> {
        let metadata = fs::metadata(path).map_err(|e| io_error_with_path(e, path))?;
        Ok(entry_from_metadata(path, &metadata))
    }
}

fn walk_error(e: walkdir::Error, path: &Path) -> Error {
    match e.into_io_error() {
        Some(source) => io_error_with_path(source, path),
        None => io_error_with_path(io::Error::new(io::ErrorKind::Other, "filesystem loop"), path),
    }
}
