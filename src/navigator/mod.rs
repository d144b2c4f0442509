//! Consumers of a scan: count, list and goto
//!
//! Each mode drains (or partially drains) one `TodoScanner`. Indices are
//! only meaningful within the scan that produced them, so goto always runs
//! against a fresh scan.

mod address;
mod count;
mod goto;

pub use address::{Address, FIRST};
pub use count::{CountSummary, FileCount, count_todos};
pub use goto::{Location, goto, locate};

use crate::error::Result;
use crate::matcher::FileMatchGroup;
use crate::output::ScanOutput;

/// List mode: feed every group to `output`, then let it finish.
pub fn list_todos<I, O>(groups: I, output: &mut O) -> Result<()>
where
    I: IntoIterator<Item = Result<FileMatchGroup>>,
    O: ScanOutput + ?Sized,
{
    let mut summary = CountSummary::default();
    for group in groups {
        let group = group?;
        output.output_group(&group)?;
        summary.record(&group);
    }
    output.finish(&summary)?;
    Ok(())
}
