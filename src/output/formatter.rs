// src/output/formatter.rs

//! Provides helper functions for formatting parts of an entry line.

use crate::config::OutputConfig;
use crate::core_types::ListingEntry;
use byte_unit::{Byte, UnitType};
use chrono::{DateTime, Local};
use std::path::Path;
use std::time::SystemTime;
use unicode_width::UnicodeWidthStr;

/// ctime-style layout, e.g. `Thu Aug 17 16:47:43 2006`.
const TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Formats a path for display.
///
/// Path separators are normalized to `/`, even on Windows.
///
/// # Examples
/// ```
/// use seqls::output::formatter::format_path_for_display;
/// use std::path::Path;
///
/// assert_eq!(format_path_for_display(Path::new("renders/shot.1-3.exr")), "renders/shot.1-3.exr");
/// ```
pub fn format_path_for_display(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// The name an entry is shown under: bare name, or full path when configured.
pub fn display_name(entry: &ListingEntry, config: &OutputConfig) -> String {
    if config.show_full_path {
        format_path_for_display(&entry.path)
    } else {
        entry.name.clone()
    }
}

/// Human-readable decimal size, e.g. `293.17MB`. Sizes under 1000 bytes are exact.
///
/// # Examples
/// ```
/// use seqls::output::formatter::format_size;
///
/// assert_eq!(format_size(512), "512B");
/// assert_eq!(format_size(2_230_000), "2.23MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes < 1000 {
        return format!("{}B", bytes);
    }
    let adjusted = Byte::from_u64(bytes).get_appropriate_unit(UnitType::Decimal);
    format!("{:.2}{}", adjusted.get_value(), adjusted.get_unit())
}

/// Owner permission letters: `r`, `w`, `x`, or `-` when none are set.
///
/// # Examples
/// ```
/// use seqls::output::formatter::format_permissions;
///
/// assert_eq!(format_permissions(0o644), "rw");
/// assert_eq!(format_permissions(0o755), "rwx");
/// assert_eq!(format_permissions(0o044), "-");
/// ```
pub fn format_permissions(mode: u32) -> String {
    let owner = (mode >> 6) & 0o7;
    let letters: String = [(0o4, 'r'), (0o2, 'w'), (0o1, 'x')]
        .iter()
        .filter(|(bit, _)| owner & bit != 0)
        .map(|&(_, letter)| letter)
        .collect();
    if letters.is_empty() {
        "-".to_string()
    } else {
        letters
    }
}

/// Modification time in the local time zone.
pub fn format_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(TIME_FORMAT).to_string()
}

/// Terminal display width of `text`.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Left-aligns `text` in a field of `width` display columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(padding))
}

/// The full metadata line for one entry:
/// `name type size owner permissions time`, with the name padded to `name_width`.
pub fn info_line(entry: &ListingEntry, config: &OutputConfig, name_width: usize) -> String {
    let owner = if entry.owner.is_empty() {
        "-"
    } else {
        entry.owner.as_str()
    };
    format!(
        "{} {:<4} {:>9} {} {:<3} {}",
        pad_to_width(&display_name(entry, config), name_width),
        entry.kind.label(),
        format_size(entry.size),
        owner,
        format_permissions(entry.permissions),
        format_time(entry.modified)
    )
}
