//! Scan result formatting and display
//!
//! - `list` - colored per-file listing with `group.item` addresses
//! - `count` - per-file counts and totals
//! - `json` - JSON output for both modes

mod config;
mod count;
mod json;
mod list;

use std::io;

pub use config::OutputConfig;
pub use count::{CountFormatter, print_count};
pub use json::{JsonListOutput, print_count_json};
pub use list::ListFormatter;

use crate::matcher::FileMatchGroup;
use crate::navigator::CountSummary;

/// Receives groups one at a time as a scan is drained.
pub trait ScanOutput {
    fn output_group(&mut self, group: &FileMatchGroup) -> io::Result<()>;

    /// Called once after the last group.
    fn finish(&mut self, summary: &CountSummary) -> io::Result<()>;
}
