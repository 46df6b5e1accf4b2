//! Orders the entries of one listing.

use crate::config::{SortConfig, SortKey};
use crate::core_types::ListingEntry;
use std::cmp::Ordering;

/// Compares two entries under `config`.
///
/// The directories-first partition is applied before the key comparison and
/// is not affected by `reverse`. Within a partition the primary key decides,
/// with a byte-wise name comparison breaking ties; `reverse` inverts that
/// combined result.
pub fn compare_entries(a: &ListingEntry, b: &ListingEntry, config: &SortConfig) -> Ordering {
    let partition = if config.dirs_first {
        b.is_dir().cmp(&a.is_dir())
    } else {
        Ordering::Equal
    };
    partition.then_with(|| {
        let ordering = compare_key(a, b, config.key).then_with(|| a.name.cmp(&b.name));
        if config.reverse {
            ordering.reverse()
        } else {
            ordering
        }
    })
}

fn compare_key(a: &ListingEntry, b: &ListingEntry, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Type => a.kind.rank().cmp(&b.kind.rank()),
        SortKey::Size => a.size.cmp(&b.size),
        SortKey::Owner => a.owner.cmp(&b.owner),
        SortKey::Permissions => a.permissions.cmp(&b.permissions),
        SortKey::Time => a.modified.cmp(&b.modified),
    }
}

/// Sorts a listing in place.
///
/// # Examples
///
/// ```
/// use seqls::config::SortConfig;
/// use seqls::core_types::{DirEntry, ListingEntry};
/// use seqls::sorting::sort_entries;
///
/// let mut entries: Vec<ListingEntry> = vec![
///     DirEntry::file("/d/b", 1).into(),
///     DirEntry::directory("/d/z").into(),
///     DirEntry::file("/d/a", 1).into(),
/// ];
/// sort_entries(&mut entries, &SortConfig::default());
/// let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
/// assert_eq!(names, vec!["z", "a", "b"]);
/// ```
pub fn sort_entries(entries: &mut [ListingEntry], config: &SortConfig) {
    entries.sort_by(|a, b| compare_entries(a, b, config));
}
