//! Groups the files of one directory into sequence candidates.

use super::tokenizer::{tokenize, Token};
use crate::core_types::DirEntry;
use crate::errors::{Error, Result};
use log::{trace, warn};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Members of one group share prefix, tail (suffix and extension) and padding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GroupKey {
    pub prefix: String,
    pub tail: String,
    pub padding: usize,
}

impl GroupKey {
    fn of(token: &Token) -> Self {
        Self {
            prefix: token.prefix.clone(),
            tail: token.tail(),
            padding: token.padding,
        }
    }
}

/// Two or more files that differ only in their frame number.
#[derive(Debug, Clone)]
pub struct SequenceGroup {
    pub key: GroupKey,
    /// Members by frame number, ascending.
    pub members: BTreeMap<u64, DirEntry>,
}

/// Result of grouping one directory's files.
#[derive(Debug, Default)]
pub struct Grouping {
    /// Groups with at least two members.
    pub sequences: Vec<SequenceGroup>,
    /// Files without a frame number, plus the members of one-file groups.
    pub singles: Vec<DirEntry>,
}

/// Partitions files into sequence groups and single files.
///
/// Groups are returned in key order. A group with exactly one member is not
/// a sequence; its file is returned in `singles` under its original name.
///
/// # Errors
///
/// Returns [`Error::AmbiguousSequence`] if the same path appears twice in
/// `files`. Two different paths that map to the same group and frame (names
/// that are not valid UTF-8) are not an error; the later one is returned in
/// `singles`.
///
/// # Examples
///
/// ```
/// use seqls::core_types::DirEntry;
/// use seqls::sequence::group_entries;
///
/// let files = vec![
///     DirEntry::file("/d/a001.png", 1),
///     DirEntry::file("/d/a002.png", 1),
///     DirEntry::file("/d/a01.png", 1),
/// ];
/// let grouping = group_entries(files).unwrap();
/// assert_eq!(grouping.sequences.len(), 1);
/// assert_eq!(grouping.singles[0].name, "a01.png");
/// ```
pub fn group_entries(files: Vec<DirEntry>) -> Result<Grouping> {
    let mut groups: BTreeMap<GroupKey, BTreeMap<u64, DirEntry>> = BTreeMap::new();
    let mut singles = Vec::new();

    for file in files {
        let Some(token) = tokenize(&file.name) else {
            singles.push(file);
            continue;
        };
        let members = groups.entry(GroupKey::of(&token)).or_default();
        match members.entry(token.number) {
            Entry::Vacant(slot) => {
                slot.insert(file);
            }
            // Distinct files whose names only collide after lossy UTF-8
            // conversion are listed on their own.
            Entry::Occupied(existing) if existing.get().path != file.path => {
                warn!(
                    "'{}' collides with '{}' at frame {}; listing it separately",
                    file.path.display(),
                    existing.get().path.display(),
                    token.number
                );
                singles.push(file);
            }
            Entry::Occupied(existing) => {
                return Err(Error::AmbiguousSequence(format!(
                    "'{}' and '{}' both map to frame {}",
                    existing.get().path.display(),
                    file.path.display(),
                    token.number
                )));
            }
        }
    }

    let mut sequences = Vec::new();
    for (key, members) in groups {
        if members.len() == 1 {
            singles.extend(members.into_values());
        } else {
            trace!(
                "Sequence group '{}#{}' (padding {}) has {} members",
                key.prefix,
                key.tail,
                key.padding,
                members.len()
            );
            sequences.push(SequenceGroup { key, members });
        }
    }

    Ok(Grouping { sequences, singles })
}
