//! Configuration types for the file walker

/// Configuration for directory walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Descend into subdirectories (false = direct children only)
    pub recurse: bool,
    /// Include entries whose name starts with `.`
    pub include_hidden: bool,
    /// Glob patterns matched against entry names; matching files and
    /// directories are skipped
    pub ignore_patterns: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            recurse: true,
            include_hidden: false,
            ignore_patterns: Vec::new(),
        }
    }
}
