//! Entry filtering helpers for the walker

use std::ffi::OsStr;

use glob::Pattern;

use crate::error::{Error, Result};

/// Hidden entries are those whose name starts with a dot.
pub fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Compiled `--ignore` patterns, matched against entry names.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    /// Compile glob patterns. An invalid pattern is a configuration error.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|source| Error::InvalidIgnorePattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check if an entry name matches any pattern.
    pub fn matches(&self, name: &OsStr) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let name = name.to_string_lossy();
        self.patterns
            .iter()
            .any(|p| p.as_str() == name || p.matches(&name))
    }
}
