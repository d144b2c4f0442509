//! FileWalker - lazy depth-first iterator over regular files

use std::fs::{self, ReadDir};
use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{Error, Result};

use super::config::WalkerConfig;
use super::utils::{IgnoreSet, is_hidden};

/// One level of the traversal stack.
enum Frame {
    /// A directory whose entries are still being listed. Subdirectories are
    /// collected here and descended only after every file has been yielded.
    Listing {
        dir: PathBuf,
        entries: ReadDir,
        subdirs: Vec<PathBuf>,
    },
    /// Subdirectories of a finished listing, walked one after another.
    Descend(std::vec::IntoIter<PathBuf>),
}

/// Lazy, forward-only sequence of file paths under a root.
///
/// Files in a directory are yielded in the order the filesystem lists them
/// (no sorting). Subdirectories are walked after their parent's files,
/// depth-first. A single-file root yields just that file.
///
/// The first error ends the walk: it is yielded once and every later call
/// to `next` returns `None`.
pub struct FileWalker {
    include_hidden: bool,
    recurse: bool,
    ignore: IgnoreSet,
    root: Option<PathBuf>,
    stack: Vec<Frame>,
}

impl FileWalker {
    pub fn new(root: impl Into<PathBuf>, config: &WalkerConfig) -> Result<Self> {
        Ok(Self {
            include_hidden: config.include_hidden,
            recurse: config.recurse,
            ignore: IgnoreSet::new(&config.ignore_patterns)?,
            root: Some(root.into()),
            stack: Vec::new(),
        })
    }

    fn open_dir(&mut self, dir: PathBuf) -> Result<()> {
        trace!(dir = %dir.display(), "listing directory");
        let entries = fs::read_dir(&dir).map_err(|source| Error::ReadDir {
            path: dir.clone(),
            source,
        })?;
        self.stack.push(Frame::Listing {
            dir,
            entries,
            subdirs: Vec::new(),
        });
        Ok(())
    }

    /// Resolve the root: a file is yielded as-is, a directory is opened.
    fn start(&mut self, root: PathBuf) -> Result<Option<PathBuf>> {
        let metadata = fs::metadata(&root).map_err(|source| Error::ReadFile {
            path: root.clone(),
            source,
        })?;
        if metadata.is_dir() {
            self.open_dir(root)?;
            Ok(None)
        } else {
            Ok(Some(root))
        }
    }

    fn fail(&mut self, err: Error) -> Option<Result<PathBuf>> {
        self.stack.clear();
        Some(Err(err))
    }
}

/// What a directory entry turned out to be.
enum EntryKind {
    File,
    Dir,
    Other,
}

fn classify(entry: &fs::DirEntry) -> Result<EntryKind> {
    let path = entry.path();
    let file_type = entry.file_type().map_err(|source| Error::ReadFile {
        path: path.clone(),
        source,
    })?;
    if file_type.is_dir() {
        return Ok(EntryKind::Dir);
    }
    if file_type.is_file() {
        return Ok(EntryKind::File);
    }
    if file_type.is_symlink() {
        // Follow links to files; never follow links to directories so the
        // walk cannot cycle. Dangling links are not files; any other failure
        // to resolve the target (loops, permissions) is fatal.
        return match fs::metadata(&path) {
            Ok(target) if target.is_file() => Ok(EntryKind::File),
            Ok(_) => Ok(EntryKind::Other),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(EntryKind::Other),
            Err(source) => Err(Error::ReadFile { path, source }),
        };
    }
    Ok(EntryKind::Other)
}

fn entry_error(dir: &Path, source: io::Error) -> Error {
    Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    }
}

impl Iterator for FileWalker {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            match self.start(root) {
                Ok(Some(file)) => return Some(Ok(file)),
                Ok(None) => {}
                Err(e) => return self.fail(e),
            }
        }

        loop {
            let frame = self.stack.last_mut()?;
            match frame {
                Frame::Listing {
                    dir,
                    entries,
                    subdirs,
                } => match entries.next() {
                    Some(Ok(entry)) => {
                        let name = entry.file_name();
                        if !self.include_hidden && is_hidden(&name) {
                            continue;
                        }
                        if self.ignore.matches(&name) {
                            continue;
                        }
                        let kind = match classify(&entry) {
                            Ok(kind) => kind,
                            Err(e) => return self.fail(e),
                        };
                        match kind {
                            EntryKind::File => return Some(Ok(entry.path())),
                            EntryKind::Dir if self.recurse => subdirs.push(entry.path()),
                            EntryKind::Dir | EntryKind::Other => {}
                        }
                    }
                    Some(Err(e)) => {
                        let err = entry_error(dir, e);
                        return self.fail(err);
                    }
                    None => {
                        let subdirs = std::mem::take(subdirs);
                        self.stack.pop();
                        if !subdirs.is_empty() {
                            self.stack.push(Frame::Descend(subdirs.into_iter()));
                        }
                    }
                },
                Frame::Descend(dirs) => match dirs.next() {
                    Some(dir) => {
                        if let Err(e) = self.open_dir(dir) {
                            return self.fail(e);
                        }
                    }
                    None => {
                        self.stack.pop();
                    }
                },
            }
        }
    }
}
