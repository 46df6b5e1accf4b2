//! The sequence resolution engine.
//!
//! Turns a flat list of directory entries into files, directories and frame
//! sequences:
//!
//! 1.  **Tokenize**: find the frame number in each file name.
//! 2.  **Group**: collect files that differ only in their frame number.
//! 3.  **Compact**: render each group's frames as a range expression.
//! 4.  **Classify**: build one `ListingEntry` per file, sequence, or directory.

mod classify;
mod grouper;
mod range;
mod tokenizer;

pub use classify::{classify_entries, sequence_entry};
pub use grouper::{group_entries, GroupKey, Grouping, SequenceGroup};
pub use range::{RangeExpression, RangeParseError};
pub use tokenizer::{tokenize, Token};
