//! Defines core data structures used throughout the listing pipeline.
//!
//! `DirEntry` is the raw snapshot fed in by the filesystem collaborator;
//! `ListingEntry` is what the classifier hands to sorting and output.

use crate::sequence::RangeExpression;
use std::path::PathBuf;
use std::time::SystemTime;

/// Kind of a raw directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A raw directory entry, snapshotted when its directory was read.
///
/// # Examples
///
/// ```
/// use seqls::core_types::{DirEntry, EntryKind};
///
/// let entry = DirEntry::file("/renders/shot.0001.exr", 2048);
/// assert_eq!(entry.name, "shot.0001.exr");
/// assert_eq!(entry.kind, EntryKind::File);
/// assert!(!entry.is_hidden());
/// ```
#[derive(Debug, Clone)]
pub struct DirEntry {
    /// Name of the entry (final path component).
    pub name: String,
    /// Full path to the entry.
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Size in bytes.
    pub size: u64,
    /// Owner name, or the numeric id when it cannot be resolved.
    pub owner: String,
    /// Permission bits (e.g., `0o644`).
    pub permissions: u32,
    /// Last modification time.
    pub modified: SystemTime,
}

impl DirEntry {
    /// Creates a regular file entry with placeholder owner, permissions and time.
    pub fn file(path: impl Into<PathBuf>, size: u64) -> Self {
        Self::new(path.into(), EntryKind::File, size)
    }

    /// Creates a directory entry with placeholder owner, permissions and time.
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::new(path.into(), EntryKind::Directory, 0)
    }

    fn new(path: PathBuf, kind: EntryKind, size: u64) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            path,
            kind,
            size,
            owner: String::new(),
            permissions: 0o644,
            modified: SystemTime::UNIX_EPOCH,
        }
    }

    /// Sets the modification time.
    pub fn with_modified(mut self, modified: SystemTime) -> Self {
        self.modified = modified;
        self
    }

    /// Sets the owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Sets the permission bits.
    pub fn with_permissions(mut self, permissions: u32) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Hidden entries follow the Unix dot-file convention.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// A collapsed frame sequence.
///
/// Keeps everything needed to turn the compact display form back into the
/// exact on-disk names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// Text before the frame number.
    pub prefix: String,
    /// Text after the frame number, extension included.
    pub suffix: String,
    /// Literal digit count of every member's frame number.
    pub padding: usize,
    /// The member frame numbers.
    pub frames: RangeExpression,
}

impl Sequence {
    /// The compact display name, e.g. `shot.1-3,5.png`.
    pub fn display_name(&self) -> String {
        format!("{}{}{}", self.prefix, self.frames, self.suffix)
    }

    /// Re-renders every member's file name, in ascending frame order.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqls::core_types::Sequence;
    /// use seqls::sequence::RangeExpression;
    ///
    /// let seq = Sequence {
    ///     prefix: "shot.".to_string(),
    ///     suffix: ".png".to_string(),
    ///     padding: 3,
    ///     frames: RangeExpression::from_frames([1, 2, 5]),
    /// };
    /// assert_eq!(seq.display_name(), "shot.1-2,5.png");
    /// assert_eq!(seq.member_names(), vec!["shot.001.png", "shot.002.png", "shot.005.png"]);
    /// ```
    pub fn member_names(&self) -> Vec<String> {
        self.frames
            .expand()
            .map(|frame| {
                format!(
                    "{}{:0width$}{}",
                    self.prefix,
                    frame,
                    self.suffix,
                    width = self.padding
                )
            })
            .collect()
    }

    /// Number of member files.
    pub fn len(&self) -> u64 {
        self.frames.frame_count()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// The three kinds of listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingKind {
    File,
    Sequence(Sequence),
    Directory,
}

impl ListingKind {
    /// Short label used in info lines.
    pub fn label(&self) -> &'static str {
        match self {
            ListingKind::File => "File",
            ListingKind::Sequence(_) => "Seq",
            ListingKind::Directory => "Dir",
        }
    }

    /// Rank used when sorting by type.
    pub fn rank(&self) -> u8 {
        match self {
            ListingKind::File => 0,
            ListingKind::Sequence(_) => 1,
            ListingKind::Directory => 2,
        }
    }
}

/// One line of a directory listing: a file, a sequence, or a directory.
#[derive(Debug, Clone)]
pub struct ListingEntry {
    /// Display name (for sequences, the compact range form).
    pub name: String,
    /// Path of the entry; for sequences, the parent joined with the display name.
    pub path: PathBuf,
    pub kind: ListingKind,
    /// Own size, or the exact sum of member sizes for sequences.
    pub size: u64,
    /// Owner of the entry (first frame for sequences).
    pub owner: String,
    /// Permission bits (first frame for sequences).
    pub permissions: u32,
    /// Most recent modification time among members.
    pub modified: SystemTime,
}

impl ListingEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == ListingKind::Directory
    }

    pub fn sequence(&self) -> Option<&Sequence> {
        match &self.kind {
            ListingKind::Sequence(seq) => Some(seq),
            _ => None,
        }
    }
}

impl From<DirEntry> for ListingEntry {
    fn from(entry: DirEntry) -> Self {
        let kind = match entry.kind {
            EntryKind::File => ListingKind::File,
            EntryKind::Directory => ListingKind::Directory,
        };
        Self {
            name: entry.name,
            path: entry.path,
            kind,
            size: entry.size,
            owner: entry.owner,
            permissions: entry.permissions,
            modified: entry.modified,
        }
    }
}
