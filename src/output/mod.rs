// src/output/mod.rs

//! Renders sorted listing entries into text lines.

use crate::config::OutputConfig;
use crate::core_types::ListingEntry;
use formatter::{display_name, display_width, info_line};

pub mod columns;
pub mod formatter;
pub mod header;
pub mod writer;

pub use writer::ListingWriter;

/// One self-contained listing: an optional label and its rendered lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    /// Directory label, shown when more than one directory is listed.
    pub label: Option<String>,
    pub lines: Vec<String>,
}

/// Renders entries, already in display order, into lines.
///
/// With `columns > 0` the display names are laid out in a grid. Otherwise
/// each entry gets one line: the full info line, or just the name when info
/// is disabled.
pub fn render_entries(entries: &[ListingEntry], config: &OutputConfig) -> Vec<String> {
    let names: Vec<String> = entries.iter().map(|e| display_name(e, config)).collect();
    if config.columns > 0 {
        return columns::layout_columns(&names, config.columns);
    }
    if !config.show_info {
        return names;
    }
    let name_width = names.iter().map(|n| display_width(n)).max().unwrap_or(0);
    entries
        .iter()
        .map(|entry| info_line(entry, config, name_width))
        .collect()
}
