// src/output/writer.rs

//! Writes listing blocks to the output destination.
//!
//! Each block is written in one go and flushed, so a directory's listing is
//! never left half-written when the run is interrupted between directories.

use super::header::write_label;
use super::Listing;
use std::io::{self, Write};

/// Writes listings one after another, separated by a blank line.
pub struct ListingWriter<'a> {
    writer: &'a mut dyn Write,
    blocks_written: usize,
}

impl<'a> ListingWriter<'a> {
    pub fn new(writer: &'a mut dyn Write) -> Self {
        Self {
            writer,
            blocks_written: 0,
        }
    }

    /// Writes one listing. Unlabeled listings without lines produce no output.
    pub fn write_listing(&mut self, listing: &Listing) -> io::Result<()> {
        if listing.label.is_none() && listing.lines.is_empty() {
            return Ok(());
        }
        let mut block = Vec::new();
        if self.blocks_written > 0 {
            writeln!(block)?;
        }
        if let Some(label) = &listing.label {
            write_label(&mut block, label)?;
        }
        for line in &listing.lines {
            writeln!(block, "{}", line)?;
        }
        self.writer.write_all(&block)?;
        self.writer.flush()?;
        self.blocks_written += 1;
        Ok(())
    }

    /// Number of listings written so far.
    pub fn blocks_written(&self) -> usize {
        self.blocks_written
    }
}
