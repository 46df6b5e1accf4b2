//! The `seqls` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use seqls::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let config = ConfigBuilder::new().path(".").show_info(false).build()?;
//! let token = CancellationToken::new();
//! let mut out = Vec::new();
//! let mut diagnostics = Vec::new();
//! let report = execute(&LocalFs, &config, &token, &mut out, &mut diagnostics)?;
//! assert!(!report.has_failures());
//!
//! # Ok(())
//! # }
//! ```

pub use crate::cancellation::CancellationToken;
pub use crate::config::{Config, ConfigBuilder, SortKey};
pub use crate::core_types::{DirEntry, EntryKind, ListingEntry, ListingKind, Sequence};
pub use crate::discovery::{execute, list_directory, EntrySource, LocalFs, RunReport};
pub use crate::errors::{Error, Result};
pub use crate::output::{render_entries, Listing, ListingWriter};
pub use crate::sequence::{classify_entries, group_entries, tokenize, RangeExpression};
pub use crate::sorting::{compare_entries, sort_entries};
pub use crate::run;
