//! Merges sequences, single files and directories into listing entries.

use super::grouper::{group_entries, SequenceGroup};
use super::range::RangeExpression;
use crate::core_types::{DirEntry, ListingEntry, ListingKind, Sequence};
use crate::errors::Result;
use log::debug;

/// Classifies one directory's raw entries into listing entries.
///
/// Directories pass through untouched, files are grouped into sequences,
/// and everything else becomes a plain file entry. The result is unsorted.
///
/// # Examples
///
/// ```
/// use seqls::core_types::{DirEntry, ListingKind};
/// use seqls::sequence::classify_entries;
///
/// let entries = vec![
///     DirEntry::file("/d/shot.001.png", 100),
///     DirEntry::file("/d/shot.002.png", 200),
///     DirEntry::directory("/d/assets"),
/// ];
/// let listing = classify_entries(entries).unwrap();
/// let seq = listing.iter().find(|e| e.sequence().is_some()).unwrap();
/// assert_eq!(seq.name, "shot.1-2.png");
/// assert_eq!(seq.size, 300);
/// assert!(listing.iter().any(|e| e.kind == ListingKind::Directory));
/// ```
pub fn classify_entries(entries: Vec<DirEntry>) -> Result<Vec<ListingEntry>> {
    let (dirs, files): (Vec<DirEntry>, Vec<DirEntry>) =
        entries.into_iter().partition(DirEntry::is_dir);
    let grouping = group_entries(files)?;
    debug!(
        "Classified {} directories, {} sequences, {} files",
        dirs.len(),
        grouping.sequences.len(),
        grouping.singles.len()
    );

    let mut listing = Vec::with_capacity(dirs.len() + grouping.sequences.len() + grouping.singles.len());
    listing.extend(dirs.into_iter().map(ListingEntry::from));
    listing.extend(grouping.sequences.into_iter().filter_map(sequence_entry));
    listing.extend(grouping.singles.into_iter().map(ListingEntry::from));
    Ok(listing)
}

/// Builds the listing entry for one sequence group.
///
/// Size is the exact sum of member sizes and the modification time is the
/// most recent member's. Owner and permissions come from the lowest frame.
/// Returns `None` for an empty group.
pub fn sequence_entry(group: SequenceGroup) -> Option<ListingEntry> {
    let (_, first) = group.members.first_key_value()?;
    let owner = first.owner.clone();
    let permissions = first.permissions;
    let first_path = first.path.clone();

    let size = group.members.values().map(|m| m.size).sum();
    let modified = group.members.values().map(|m| m.modified).max()?;

    let sequence = Sequence {
        prefix: group.key.prefix,
        suffix: group.key.tail,
        padding: group.key.padding,
        frames: RangeExpression::from_frames(group.members.keys().copied()),
    };
    let name = sequence.display_name();
    Some(ListingEntry {
        path: first_path.with_file_name(&name),
        name,
        kind: ListingKind::Sequence(sequence),
        size,
        owner,
        permissions,
        modified,
    })
}
