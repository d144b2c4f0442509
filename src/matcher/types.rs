//! Match result types

use std::path::PathBuf;

use serde::Serialize;

/// A single matched line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    /// Line number in the file (1-indexed)
    #[serde(rename = "line")]
    pub line_number: usize,
    /// The line text, without its line terminator
    pub content: String,
    /// Position among the matches in this file (1-indexed)
    #[serde(rename = "index")]
    pub item_index: usize,
}

/// All matches within one file.
///
/// Only files with at least one match become groups. `group_index` counts
/// groups in emission order within a single scan, starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMatchGroup {
    #[serde(rename = "index")]
    pub group_index: usize,
    /// Path relative to the scan's base directory
    pub path: PathBuf,
    pub items: Vec<TodoItem>,
}

impl FileMatchGroup {
    /// Number of matched lines in the file.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by its 1-based index.
    pub fn item(&self, item_index: usize) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.item_index == item_index)
    }
}
