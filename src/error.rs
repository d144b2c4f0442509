//! Error types shared by the scan pipeline and the CLI

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::navigator::Address;

/// Everything that can stop a scan or a navigation request.
///
/// Files that fail to decode as UTF-8 are not represented here: the matcher
/// skips them and they never surface as errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read directory '{}': {}", .path.display(), .source)]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read '{}': {}", .path.display(), .source)]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not match '{address}' to an indexed location")]
    Lookup { address: Address },

    #[error("invalid address '{0}': expected two numbers separated by a non-digit (e.g. 2.3)")]
    InvalidAddress(String),

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("invalid ignore pattern '{pattern}': {source}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("cannot launch editor '{editor}': {source}")]
    EditorLaunch {
        editor: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit code used by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Lookup { .. } => 2,
            _ => 1,
        }
    }

    /// True for errors raised while validating options, before any file is read.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidAddress(_)
                | Error::InvalidPattern(_)
                | Error::InvalidIgnorePattern { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
