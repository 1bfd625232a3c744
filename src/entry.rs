use std::fmt;
use std::path::{Path, PathBuf};

/// A single item yielded while enumerating a directory.
///
/// `kind` is the raw file type reported by the walker and does not follow
/// symlinks. Use [`Entry::is_file`] / [`Entry::is_dir`] for classification
/// that resolves a link to its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Full path to the entry.
    pub path: PathBuf,

    /// Final path component.
    pub name: String,

    /// What the walker saw at this path.
    pub kind: EntryKind,

    /// Depth below the enumeration root. Direct children = 1.
    pub depth: usize,
}

impl Entry {
    /// True for regular files and for symlinks that point at one.
    pub fn is_file(&self) -> bool {
        match self.kind {
            EntryKind::File => true,
            EntryKind::Symlink => self.path.is_file(),
            _ => false,
        }
    }

    /// True for directories and for symlinks that point at one.
    pub fn is_dir(&self) -> bool {
        match self.kind {
            EntryKind::Dir => true,
            EntryKind::Symlink => self.path.is_dir(),
            _ => false,
        }
    }
}

/// The raw kind of an enumerated entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link (not followed).
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

impl From<std::fs::FileType> for EntryKind {
    fn from(ft: std::fs::FileType) -> Self {
        if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_file() {
            EntryKind::File
        } else if ft.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Other
        }
    }
}

/// Classification of a snapshot's own path, resolved once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
    /// Missing paths, sockets, devices, dangling links.
    Other,
}

impl PathKind {
    /// Single existence + type probe. Follows symlinks.
    pub fn probe(path: &Path) -> (bool, PathKind) {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => (true, PathKind::Directory),
            Ok(meta) if meta.is_file() => (true, PathKind::File),
            Ok(_) => (true, PathKind::Other),
            // A dangling link still exists as an entry.
            Err(_) => (path.symlink_metadata().is_ok(), PathKind::Other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PathKind::File => "file",
            PathKind::Directory => "directory",
            PathKind::Other => "other",
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
