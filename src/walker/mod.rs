//! Lazy directory walking
//!
//! `FileWalker` yields regular files under a root one at a time. Each
//! directory is listed exactly once and only when the consumer pulls past
//! the files before it, so a consumer that stops early leaves the rest of
//! the tree untouched.

mod config;
mod files;
mod utils;

pub use config::WalkerConfig;
pub use files::FileWalker;
pub use utils::{IgnoreSet, is_hidden};
