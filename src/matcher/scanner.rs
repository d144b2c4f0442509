//! TodoScanner - turns a stream of file paths into indexed match groups

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::Result;
use crate::file_utils::{numbered_lines, read_text_file, relative_to};

use super::predicate::TodoPredicate;
use super::types::{FileMatchGroup, TodoItem};

/// Select the matching lines of `content`, numbering matches from 1.
pub fn match_lines(content: &str, predicate: &TodoPredicate) -> Vec<TodoItem> {
    numbered_lines(content)
        .filter(|(_, line)| predicate.is_match(line))
        .enumerate()
        .map(|(idx, (line_number, line))| TodoItem {
            line_number,
            content: line.to_string(),
            item_index: idx + 1,
        })
        .collect()
}

/// Lazy sequence of `FileMatchGroup`s over a sequence of paths.
///
/// Each file is read completely and closed before the next one is pulled.
/// Files with no matches and files that are not valid UTF-8 produce no
/// group. Group indices come from a counter owned by this scanner, so every
/// scan numbers its groups 1, 2, 3, ... independently.
///
/// Read errors are yielded once and end the scan.
pub struct TodoScanner<I> {
    files: I,
    predicate: TodoPredicate,
    base: Option<PathBuf>,
    groups_emitted: usize,
    done: bool,
}

impl<I> TodoScanner<I>
where
    I: Iterator<Item = Result<PathBuf>>,
{
    pub fn new(files: I, predicate: TodoPredicate) -> Self {
        Self {
            files,
            predicate,
            base: None,
            groups_emitted: 0,
            done: false,
        }
    }

    /// Make group paths relative to `base` instead of the current directory.
    pub fn relative_to(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Number of groups emitted so far.
    pub fn groups_emitted(&self) -> usize {
        self.groups_emitted
    }

    fn display_path(&self, path: &Path) -> Result<PathBuf> {
        match &self.base {
            Some(base) => Ok(relative_to(path, base)),
            None => {
                let cwd = std::env::current_dir()?;
                Ok(relative_to(path, &cwd))
            }
        }
    }

    fn scan_file(&mut self, path: &Path) -> Result<Option<FileMatchGroup>> {
        let Some(content) = read_text_file(path)? else {
            debug!(path = %path.display(), "skipping file that is not valid UTF-8");
            return Ok(None);
        };

        let items = match_lines(&content, &self.predicate);
        if items.is_empty() {
            return Ok(None);
        }

        let path = self.display_path(path)?;
        self.groups_emitted += 1;
        trace!(
            index = self.groups_emitted,
            path = %path.display(),
            items = items.len(),
            "emitting group"
        );
        Ok(Some(FileMatchGroup {
            group_index: self.groups_emitted,
            path,
            items,
        }))
    }
}

impl<I> Iterator for TodoScanner<I>
where
    I: Iterator<Item = Result<PathBuf>>,
{
    type Item = Result<FileMatchGroup>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let path = match self.files.next()? {
                Ok(path) => path,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            match self.scan_file(&path) {
                Ok(Some(group)) => return Some(Ok(group)),
                Ok(None) => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
