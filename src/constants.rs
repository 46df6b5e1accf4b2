// src/constants.rs

/// Minimum number of spaces between grid columns.
pub const COLUMN_GAP: usize = 2;

/// Program name used as the prefix of diagnostic lines.
pub const PROGRAM_NAME: &str = "seqls";

/// Suffix appended to a directory path to form its listing label.
pub const DIRECTORY_LABEL_SUFFIX: &str = ":";
