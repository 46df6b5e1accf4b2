// src/cli.rs

use crate::config::SortKey;
use clap::Parser;

/// A command line tool for listing directories with file sequences.
///
/// seqls lists files, directories and numbered frame sequences. A sequence
/// such as `fishpond.0001.png` ... `fishpond.0749.png` is shown as one entry,
/// `fishpond.1-749.png`, with its aggregate size.
///
/// Each line shows: name, type (File, Seq, Dir), size, owner, permissions
/// (r, w, x) and modification time.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  \
    List the current directory:\n    seqls\n  \
    List specific directories:\n    seqls ~/movies ~/pictures\n  \
    Sort by time with the most recent first:\n    seqls --sort time --reverse-sort")]
pub struct Cli {
    /// Files, directories or shell-expanded frames to list.
    #[arg(default_value = ".", value_name = "PATH")]
    pub paths: Vec<String>,

    /// Don't show information, only file names.
    #[arg(short = 'I', long, action = clap::ArgAction::SetTrue)]
    pub no_info: bool,

    /// Show file path names.
    #[arg(short = 'p', long, action = clap::ArgAction::SetTrue)]
    pub file_path: bool,

    /// Descend into sub-directories.
    #[arg(short = 'r', long, action = clap::ArgAction::SetTrue)]
    pub recurse: bool,

    /// Show hidden files.
    #[arg(short = 'a', long, action = clap::ArgAction::SetTrue)]
    pub hidden: bool,

    /// Number of columns for formatting output. A value of zero disables formatting.
    #[arg(short = 'c', long, value_name = "COUNT", default_value_t = 0)]
    pub columns: usize,

    // --- Sorting Options ---
    /// Set the sorting.
    #[arg(short = 's', long, value_enum, default_value_t = SortKey::Name)]
    pub sort: SortKey,

    /// Reverse the sorting order.
    #[arg(short = 'R', long, action = clap::ArgAction::SetTrue)]
    pub reverse_sort: bool,

    /// Don't sort directories first.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub no_sort_dirs: bool,
}
