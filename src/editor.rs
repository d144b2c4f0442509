//! External editor handoff
//!
//! The editor is called as `<editor> +<line> <path>`, which (n)vim, nano,
//! emacs and micro understand. Other editors are not detected.

use std::ffi::OsString;
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::error::{Error, Result};
use crate::navigator::Location;

/// Environment variable naming the editor.
pub const EDITOR_VAR: &str = "EDITOR";

/// Editor used when `EDITOR` is unset or empty.
pub const DEFAULT_EDITOR: &str = "vim";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    program: OsString,
}

impl Editor {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Editor from `EDITOR`, falling back to `vim`.
    pub fn from_env() -> Self {
        Self::from_var(std::env::var_os(EDITOR_VAR))
    }

    fn from_var(value: Option<OsString>) -> Self {
        match value {
            Some(program) if !program.is_empty() => Self::new(program),
            _ => Self::new(DEFAULT_EDITOR),
        }
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    /// Arguments passed to the editor for a location.
    pub fn args(location: &Location) -> [OsString; 2] {
        [
            OsString::from(format!("+{}", location.line_number)),
            location.path.clone().into_os_string(),
        ]
    }

    /// Run the editor on `location` and wait for it to exit.
    ///
    /// A missing or non-executable editor is an error.
    pub fn open(&self, location: &Location) -> Result<ExitStatus> {
        debug!(
            editor = %self.program.to_string_lossy(),
            line = location.line_number,
            path = %location.path.display(),
            "launching editor"
        );
        Command::new(&self.program)
            .args(Self::args(location))
            .status()
            .map_err(|source| Error::EditorLaunch {
                editor: self.program.to_string_lossy().into_owned(),
                source,
            })
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(DEFAULT_EDITOR)
    }
}
