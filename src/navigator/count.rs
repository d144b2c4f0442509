//! Count mode: reduce a scan to per-file and total item counts

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::matcher::FileMatchGroup;

/// Item count for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCount {
    pub path: PathBuf,
    pub items: usize,
}

/// Totals for a whole scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountSummary {
    pub files: Vec<FileCount>,
    pub total_items: usize,
    /// Number of files with at least one match
    pub total_files: usize,
}

impl CountSummary {
    /// Record one group.
    pub fn record(&mut self, group: &FileMatchGroup) {
        self.files.push(FileCount {
            path: group.path.clone(),
            items: group.len(),
        });
        self.total_items += group.len();
        self.total_files += 1;
    }
}

/// Drain the scan and count its items.
pub fn count_todos<I>(groups: I) -> Result<CountSummary>
where
    I: IntoIterator<Item = Result<FileMatchGroup>>,
{
    let mut summary = CountSummary::default();
    for group in groups {
        summary.record(&group?);
    }
    Ok(summary)
}
