//! Todo matching over a stream of files
//!
//! `TodoScanner` consumes the walker's paths and yields one
//! `FileMatchGroup` per file that contains at least one matching line.

mod predicate;
mod scanner;
mod types;

pub use predicate::{DEFAULT_MARKER, StripSet, TodoPredicate};
pub use scanner::{TodoScanner, match_lines};
pub use types::{FileMatchGroup, TodoItem};
