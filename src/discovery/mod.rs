//! Walks the input paths and produces one listing per directory.
use crate::cancellation::CancellationToken;
use crate::config::Config;
use crate::core_types::{DirEntry, ListingEntry};
use crate::errors::{io_error_with_path, Error, Result};
use crate::output::header::directory_label;
use crate::output::{render_entries, Listing, ListingWriter};
use crate::sequence::classify_entries;
use crate::sorting::sort_entries;
use log::{debug, warn};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::instrument;

mod entry_processor;
mod source;

pub use source::{EntrySource, LocalFs};

/// Outcome of a run that was not interrupted.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Per-path errors, in the order they occurred.
    pub failures: Vec<Error>,
    /// Number of listings written.
    pub listings_written: usize,
}

impl RunReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Lists one directory: reads its children, drops hidden entries unless
/// configured, collapses sequences and sorts the result.
///
/// # Errors
/// Returns the source's error if the directory cannot be read, or
/// [`Error::AmbiguousSequence`] if the source yields the same path twice.
#[instrument(level = "debug", skip(source, dir, config), fields(dir = %dir.display()))]
pub fn list_directory<S: EntrySource + ?Sized>(
    source: &S,
    dir: &Path,
    config: &Config,
) -> Result<Vec<ListingEntry>> {
    let children = source.list_children(dir)?;
    let visible: Vec<DirEntry> = children
        .into_iter()
        .filter(|e| config.traversal.show_hidden || !e.is_hidden())
        .collect();
    debug!("{} visible entries", visible.len());
    let mut entries = classify_entries(visible)?;
    sort_entries(&mut entries, &config.sort);
    Ok(entries)
}

/// Lists entries that were given directly as file paths.
///
/// Entries are grouped by parent directory, so frames expanded by the shell
/// still collapse into one sequence. A path given more than once is listed
/// once.
pub fn list_files(files: Vec<DirEntry>, config: &Config) -> Result<Vec<ListingEntry>> {
    let mut seen = BTreeSet::new();
    let mut by_parent: BTreeMap<PathBuf, Vec<DirEntry>> = BTreeMap::new();
    for file in files {
        if !seen.insert(file.path.clone()) {
            debug!("Skipping repeated operand '{}'", file.path.display());
            continue;
        }
        let parent = file.path.parent().map(Path::to_path_buf).unwrap_or_default();
        by_parent.entry(parent).or_default().push(file);
    }
    let mut entries = Vec::new();
    for (_, group) in by_parent {
        entries.extend(classify_entries(group)?);
    }
    sort_entries(&mut entries, &config.sort);
    Ok(entries)
}

/// Runs the whole listing: file operands first, then every directory operand,
/// descending depth-first into sub-directories when recursion is on.
///
/// Errors for individual paths or directory listings are written to
/// `diagnostics` as one line each and collected in the report; listing
/// continues with the remaining paths.
///
/// # Errors
/// Returns [`Error::Interrupted`] if `token` is cancelled before a directory
/// is started, or an I/O error if writing to `out` fails.
pub fn execute<S: EntrySource + ?Sized>(
    source: &S,
    config: &Config,
    token: &CancellationToken,
    out: &mut dyn Write,
    diagnostics: &mut dyn Write,
) -> Result<RunReport> {
    let mut report = RunReport::default();
    let mut writer = ListingWriter::new(out);

    let mut files = Vec::new();
    let mut dirs = Vec::new();
    for path in &config.paths {
        match source.stat(path) {
            Ok(entry) if entry.is_dir() => dirs.push(path.clone()),
            Ok(mut entry) => {
                // Keep the operand as typed so full-path display matches it.
                entry.path = path.clone();
                files.push(entry);
            }
            Err(e) => report_failure(&mut report, diagnostics, e),
        }
    }

    let show_labels = config.traversal.recurse || config.paths.len() > 1;

    if !files.is_empty() {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }
        match list_files(files, config) {
            Ok(entries) => {
                let listing = Listing {
                    label: None,
                    lines: render_entries(&entries, &config.output),
                };
                emit(&mut writer, &listing, &mut report)?;
            }
            Err(e) if e.is_path_local() => report_failure(&mut report, diagnostics, e),
            Err(e) => return Err(e),
        }
    }

    for dir in dirs {
        let mut stack = vec![dir];
        while let Some(current) = stack.pop() {
            if token.is_cancelled() {
                return Err(Error::Interrupted);
            }
            let entries = match list_directory(source, &current, config) {
                Ok(entries) => entries,
                Err(e) if e.is_path_local() => {
                    report_failure(&mut report, diagnostics, e);
                    continue;
                }
                Err(e) => return Err(e),
            };
            let listing = Listing {
                label: show_labels.then(|| directory_label(&current)),
                lines: render_entries(&entries, &config.output),
            };
            emit(&mut writer, &listing, &mut report)?;

            if config.traversal.recurse {
                // Reversed so the first sub-directory is popped first.
                stack.extend(
                    entries
                        .iter()
                        .filter(|e| e.is_dir())
                        .rev()
                        .map(|e| e.path.clone()),
                );
            }
        }
    }

    Ok(report)
}

fn emit(writer: &mut ListingWriter<'_>, listing: &Listing, report: &mut RunReport) -> Result<()> {
    writer
        .write_listing(listing)
        .map_err(|e| io_error_with_path(e, "<output>"))?;
    report.listings_written = writer.blocks_written();
    Ok(())
}

fn report_failure(report: &mut RunReport, diagnostics: &mut dyn Write, error: Error) {
    if let Err(e) = writeln!(diagnostics, "{}: {}", crate::constants::PROGRAM_NAME, error) {
        warn!("Could not write diagnostic: {}", e);
    }
    report.failures.push(error);
}
