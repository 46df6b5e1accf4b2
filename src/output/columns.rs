//! Lays out names in a fixed number of columns.

use super::formatter::{display_width, pad_to_width};
use crate::constants::COLUMN_GAP;

/// Arranges `cells` into rows of `columns` cells, filled left to right then
/// top to bottom.
///
/// Each column is as wide as its widest cell plus [`COLUMN_GAP`]. Cells are
/// never wrapped or truncated. The last cell of a row is not padded.
/// `columns == 0` is treated as a single column.
///
/// # Examples
///
/// ```
/// use seqls::output::columns::layout_columns;
///
/// let cells = ["assets", "shot.1-3,5.png", "readme.txt"].map(String::from);
/// let rows = layout_columns(&cells, 2);
/// assert_eq!(rows, vec!["assets      shot.1-3,5.png", "readme.txt"]);
/// ```
pub fn layout_columns(cells: &[String], columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut widths = vec![0usize; columns.min(cells.len())];
    for (i, cell) in cells.iter().enumerate() {
        let col = i % columns;
        widths[col] = widths[col].max(display_width(cell));
    }

    cells
        .chunks(columns)
        .map(|row| {
            let mut line = String::new();
            for (col, cell) in row.iter().enumerate() {
                if col + 1 == row.len() {
                    line.push_str(cell);
                } else {
                    line.push_str(&pad_to_width(cell, widths[col] + COLUMN_GAP));
                }
            }
            line
        })
        .collect()
}
