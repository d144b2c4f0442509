//! whatdo - find TODO lines in a directory tree and jump to them in an editor
//!
//! The pipeline is three lazy stages: `FileWalker` yields paths,
//! `TodoScanner` turns them into numbered `FileMatchGroup`s, and the
//! navigator functions consume the groups (count, list or goto).

pub mod editor;
pub mod error;
pub mod file_utils;
pub mod logging;
pub mod matcher;
pub mod navigator;
pub mod output;
pub mod walker;

#[cfg(feature = "test-utils")]
pub mod test_utils;

use std::path::Path;

pub use editor::Editor;
pub use error::{Error, Result};
pub use matcher::{FileMatchGroup, StripSet, TodoItem, TodoPredicate, TodoScanner};
pub use navigator::{
    Address, CountSummary, FileCount, Location, count_todos, goto, list_todos, locate,
};
pub use output::{
    CountFormatter, JsonListOutput, ListFormatter, OutputConfig, ScanOutput, print_count,
    print_count_json,
};
pub use walker::{FileWalker, WalkerConfig};

/// Start a scan of `root`. Nothing is read until the result is iterated.
pub fn scan(
    root: &Path,
    config: &WalkerConfig,
    predicate: TodoPredicate,
) -> Result<TodoScanner<FileWalker>> {
    let files = FileWalker::new(root, config)?;
    Ok(TodoScanner::new(files, predicate))
}
