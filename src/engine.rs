use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::entry::{Entry, EntryKind};
use crate::error::{PathKitError, Result};

// ---------------------------------------------------------------------------
// WalkConfig
// ---------------------------------------------------------------------------

/// Traversal parameters shared by every enumeration.
///
/// Built by [`SnapshotBuilder`](crate::SnapshotBuilder) for snapshots; the
/// free utilities use [`WalkConfig::default()`] unless handed one explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalkConfig {
    /// Follow symbolic links while descending. Off by default.
    pub follow_links: bool,

    /// Depth limit for recursive enumeration. `None` = unlimited.
    pub max_depth: Option<usize>,
}

/// How far below the root an enumeration reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Immediate entries only (depth 1).
    Direct,

    /// Every entry at any depth (the `**/*` pattern).
    Recursive,
}

// ---------------------------------------------------------------------------
// enumerate()
// ---------------------------------------------------------------------------

/// Enumerate entries under `root`, excluding the root itself.
///
/// Entries come back in walker order; nothing is sorted here. The first
/// error aborts the enumeration and is returned to the caller.
pub fn enumerate(root: &Path, scope: Scope, config: &WalkConfig) -> Result<Vec<Entry>> {
    // Surface a missing root as NotFound before the walker wraps it.
    std::fs::metadata(root).map_err(|e| PathKitError::io(root, e))?;

    let max_depth = match scope {
        Scope::Direct => Some(1),
        Scope::Recursive => config.max_depth,
    };

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .ignore(false)
        .parents(false)
        .hidden(false)
        .follow_links(config.follow_links)
        .same_file_system(false)
        .max_depth(max_depth);

    let mut entries = Vec::new();
    for res in builder.build() {
        let entry = res.map_err(map_ignore_error)?;

        // Skip the root itself
        if entry.depth() == 0 {
            continue;
        }

        let kind = entry
            .file_type()
            .map(EntryKind::from)
            .unwrap_or(EntryKind::Other);

        entries.push(Entry {
            path: entry.path().to_path_buf(),
            name: entry.file_name().to_string_lossy().into_owned(),
            kind,
            depth: entry.depth(),
        });
    }

    tracing::debug!(
        root = %root.display(),
        ?scope,
        entries = entries.len(),
        "enumerated"
    );

    Ok(entries)
}

// ---------------------------------------------------------------------------
// Map ignore::Error to PathKitError
// ---------------------------------------------------------------------------

fn map_ignore_error(e: ignore::Error) -> PathKitError {
    match e {
        ignore::Error::WithDepth { err, .. } => map_ignore_error(*err),
        ignore::Error::WithPath { path, err } => match *err {
            ignore::Error::Io(io_err) => PathKitError::io(path, io_err),
            ignore::Error::Loop { child, .. } => PathKitError::SymlinkLoop(child),
            other => PathKitError::Walk(format!("{}: {}", path.display(), other)),
        },
        ignore::Error::Loop { child, .. } => PathKitError::SymlinkLoop(child),
        ignore::Error::Io(io_err) => PathKitError::Io {
            path: PathBuf::new(),
            source: io_err,
        },
        other => PathKitError::Walk(other.to_string()),
    }
}
