// src/output/header.rs

use crate::constants;
use crate::output::formatter::format_path_for_display;
use std::io::{self, Write};
use std::path::Path;

/// The label printed above a directory's listing, e.g. `renders/shots:`.
pub fn directory_label(path: &Path) -> String {
    format!(
        "{}{}",
        format_path_for_display(path),
        constants::DIRECTORY_LABEL_SUFFIX
    )
}

/// Writes a listing label on its own line.
pub(crate) fn write_label(writer: &mut dyn Write, label: &str) -> io::Result<()> {
    writeln!(writer, "{}", label)
}
