//! Shared file reading and path utilities for the matcher

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Read a file as UTF-8 text.
///
/// Returns `Ok(None)` if the file is not valid UTF-8 (binary content).
/// Any other failure (missing file, permission denied) is an error.
pub fn read_text_file(path: &Path) -> Result<Option<String>> {
    let bytes = std::fs::read(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8(bytes).ok())
}

/// Iterate over lines with their 1-based line numbers.
/// Line terminators (`\n`, `\r\n`) are not part of the yielded text.
pub fn numbered_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content.lines().enumerate().map(|(idx, line)| (idx + 1, line))
}

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component where possible. Does not touch the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Express `path` relative to `base`.
///
/// Relative inputs are resolved against `base` first. Files outside `base`
/// get leading `..` components, like `os.path.relpath` or `realpath
/// --relative-to`.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let base = normalize(base);
    let path = if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    };

    let mut path_components = path.components().peekable();
    let mut base_components = base.components().peekable();

    while let (Some(a), Some(b)) = (path_components.peek(), base_components.peek()) {
        if a != b {
            break;
        }
        path_components.next();
        base_components.next();
    }

    let mut relative = PathBuf::new();
    for _ in base_components {
        relative.push("..");
    }
    for component in path_components {
        relative.push(component.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        relative
    }
}
