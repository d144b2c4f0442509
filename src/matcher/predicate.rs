//! Line predicates deciding which lines count as todo items
//!
//! Two interchangeable strategies, one active per scan:
//!
//! - `Prefix`: strip leading characters, then test for a marker prefix.
//!   The default strips whitespace and punctuation and looks for `TODO`,
//!   so `// TODO: x`, `# TODO x` and `  - TODO x` all match.
//! - `Pattern`: an unanchored regex search over the raw line.

use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// Default marker for the prefix strategy.
pub const DEFAULT_MARKER: &str = "TODO";

/// Which leading characters are stripped before the prefix test.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StripSet {
    /// Every character that is not alphanumeric or `_` (whitespace and punctuation).
    #[default]
    NonWord,
    /// Exactly these characters.
    Chars(String),
}

impl StripSet {
    fn strips(&self, c: char) -> bool {
        match self {
            StripSet::NonWord => !(c.is_alphanumeric() || c == '_'),
            StripSet::Chars(chars) => chars.contains(c),
        }
    }

    /// Remove leading characters in this set.
    pub fn strip<'a>(&self, line: &'a str) -> &'a str {
        line.trim_start_matches(|c| self.strips(c))
    }
}

#[derive(Debug, Clone)]
pub enum TodoPredicate {
    Prefix {
        marker: String,
        strip: StripSet,
        ignore_case: bool,
    },
    Pattern(Regex),
}

impl Default for TodoPredicate {
    fn default() -> Self {
        Self::prefix(DEFAULT_MARKER)
    }
}

impl TodoPredicate {
    /// Prefix strategy with the default strip set.
    pub fn prefix(marker: impl Into<String>) -> Self {
        TodoPredicate::Prefix {
            marker: marker.into(),
            strip: StripSet::default(),
            ignore_case: false,
        }
    }

    /// Compile a pattern strategy. An invalid regex is a configuration error.
    pub fn pattern(pattern: &str, ignore_case: bool) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(ignore_case)
            .build()?;
        Ok(TodoPredicate::Pattern(regex))
    }

    pub fn with_strip(self, strip: StripSet) -> Self {
        match self {
            TodoPredicate::Prefix {
                marker,
                ignore_case,
                ..
            } => TodoPredicate::Prefix {
                marker,
                strip,
                ignore_case,
            },
            pattern => pattern,
        }
    }

    pub fn with_ignore_case(self, ignore_case: bool) -> Self {
        match self {
            TodoPredicate::Prefix { marker, strip, .. } => TodoPredicate::Prefix {
                marker,
                strip,
                ignore_case,
            },
            pattern => pattern,
        }
    }

    /// Test a line. The line is never modified.
    pub fn is_match(&self, line: &str) -> bool {
        match self {
            TodoPredicate::Pattern(regex) => regex.is_match(line),
            TodoPredicate::Prefix {
                marker,
                strip,
                ignore_case,
            } => {
                let rest = strip.strip(line);
                if *ignore_case {
                    starts_with_ignore_case(rest, marker)
                } else {
                    rest.starts_with(marker.as_str())
                }
            }
        }
    }

    /// Short human-readable description, used in log output.
    pub fn describe(&self) -> String {
        match self {
            TodoPredicate::Prefix { marker, .. } => format!("prefix '{}'", marker),
            TodoPredicate::Pattern(regex) => format!("pattern '{}'", regex.as_str()),
        }
    }
}

/// Unicode-aware, char-by-char case-insensitive prefix test.
fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text = text.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|c| text.next() == Some(c))
}
