//! Bulk rename, move, and copy.
//!
//! None of these are transactional. A bulk operation stops at the first
//! failing entry and leaves everything done before it in place.
//!
//! Move and copy never overwrite: an occupied destination is skipped and
//! reported as [`Outcome::Skipped`], not as an error.

use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::engine::{Scope, WalkConfig};
use crate::entry::PathKind;
use crate::error::{PathKitError, Result};
use crate::handle::{validate_path, Target};
use crate::listing::find_with;
use crate::traits::{GlobMatcher, SuffixMatcher};

/// One completed rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renamed {
    pub from: PathBuf,
    pub to:   PathBuf,
}

/// What a move or copy did with one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Moved { from: PathBuf, to: PathBuf },
    Copied { from: PathBuf, to: PathBuf },
    /// The destination was already taken; nothing was touched.
    Skipped { from: PathBuf, to: PathBuf },
}

impl Outcome {
    pub fn destination(&self) -> &Path {
        match self {
            Outcome::Moved { to, .. } | Outcome::Copied { to, .. } | Outcome::Skipped { to, .. } => {
                to.as_path()
            }
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped { .. })
    }
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Move,
    Copy,
}

// ---------------------------------------------------------------------------
// Rename
// ---------------------------------------------------------------------------

/// Rename every descendant of `root` whose name contains `old`, replacing the
/// first occurrence with `new`.
///
/// Matches are collected first and renamed deepest-first, so renaming a
/// directory never invalidates a pending path below it. A name that would
/// collide with an existing entry aborts with [`PathKitError::AlreadyExists`].
pub fn rename_matching<'a>(
    root: impl Into<Target<'a>>,
    old: &str,
    new: &str,
) -> Result<Vec<Renamed>> {
    if new.contains(['/', MAIN_SEPARATOR, '\0']) {
        return Err(PathKitError::InvalidPattern(format!(
            "replacement {new:?} is not a plain name"
        )));
    }
    let matcher = GlobMatcher::containing(old)?;

    let root = root.into().validate()?;
    if PathKind::probe(root).1 == PathKind::File {
        return Err(PathKitError::NotADirectory(root.to_path_buf()));
    }

    let mut matches = find_with(root, Scope::Recursive, matcher, &WalkConfig::default())?;
    matches.sort_by_key(|e| Reverse(e.depth));

    let mut renamed = Vec::with_capacity(matches.len());
    for entry in matches {
        let new_name = entry.name.replacen(old, new, 1);
        if new_name.is_empty() {
            return Err(PathKitError::InvalidHandle(format!(
                "renaming {} would leave an empty name",
                entry.path.display()
            )));
        }

        let to = entry.path.with_file_name(&new_name);
        if to != entry.path && to.symlink_metadata().is_ok() {
            return Err(PathKitError::AlreadyExists(to));
        }

        fs::rename(&entry.path, &to).map_err(|e| PathKitError::io(&entry.path, e))?;
        tracing::debug!(from = %entry.path.display(), to = %to.display(), "renamed");

        renamed.push(Renamed {
            from: entry.path,
            to,
        });
    }

    Ok(renamed)
}

// ---------------------------------------------------------------------------
// Move / copy one file
// ---------------------------------------------------------------------------

/// Move `source_dir/name` to `dest_dir/name` unless the destination exists.
pub fn move_file(
    name: impl AsRef<Path>,
    source_dir: impl AsRef<Path>,
    dest_dir: impl AsRef<Path>,
) -> Result<Outcome> {
    transfer(name.as_ref(), source_dir.as_ref(), dest_dir.as_ref(), Action::Move)
}

/// Copy `source_dir/name` to `dest_dir/name` unless the destination exists.
pub fn copy_file(
    name: impl AsRef<Path>,
    source_dir: impl AsRef<Path>,
    dest_dir: impl AsRef<Path>,
) -> Result<Outcome> {
    transfer(name.as_ref(), source_dir.as_ref(), dest_dir.as_ref(), Action::Copy)
}

fn transfer(name: &Path, source_dir: &Path, dest_dir: &Path, action: Action) -> Result<Outcome> {
    validate_path(name)?;
    validate_path(source_dir)?;
    validate_path(dest_dir)?;

    let from = source_dir.join(name);
    let to = dest_dir.join(name);

    if to.symlink_metadata().is_ok() {
        tracing::debug!(from = %from.display(), to = %to.display(), "destination exists, skipping");
        return Ok(Outcome::Skipped { from, to });
    }

    match action {
        Action::Move => {
            fs::rename(&from, &to).map_err(|e| PathKitError::io(&from, e))?;
            tracing::debug!(from = %from.display(), to = %to.display(), "moved");
            Ok(Outcome::Moved { from, to })
        }
        Action::Copy => {
            fs::copy(&from, &to).map_err(|e| PathKitError::io(&from, e))?;
            tracing::debug!(from = %from.display(), to = %to.display(), "copied");
            Ok(Outcome::Copied { from, to })
        }
    }
}

// ---------------------------------------------------------------------------
// Suffix sweeps
// ---------------------------------------------------------------------------

/// Move every file below `source_dir` with the given suffix into `dest_dir`.
///
/// Each file leaves from its own directory and lands flat in `dest_dir`.
/// `suffix` may be written `"txt"` or `".txt"`.
pub fn move_by_suffix(
    source_dir: impl AsRef<Path>,
    dest_dir: impl AsRef<Path>,
    suffix: &str,
) -> Result<Vec<Outcome>> {
    sweep(source_dir.as_ref(), dest_dir.as_ref(), suffix, Action::Move)
}

/// Copy every file below `source_dir` with the given suffix into `dest_dir`.
pub fn copy_by_suffix(
    source_dir: impl AsRef<Path>,
    dest_dir: impl AsRef<Path>,
    suffix: &str,
) -> Result<Vec<Outcome>> {
    sweep(source_dir.as_ref(), dest_dir.as_ref(), suffix, Action::Copy)
}

fn sweep(source_dir: &Path, dest_dir: &Path, suffix: &str, action: Action) -> Result<Vec<Outcome>> {
    let matcher = SuffixMatcher::new(suffix)?;
    validate_path(dest_dir)?;

    let matches = find_with(source_dir, Scope::Recursive, matcher, &WalkConfig::default())?;

    let mut outcomes = Vec::with_capacity(matches.len());
    for entry in matches {
        let parent = entry.path.parent().unwrap_or(source_dir);
        let name = Path::new(&entry.name);
        outcomes.push(transfer(name, parent, dest_dir, action)?);
    }

    tracing::debug!(
        source = %source_dir.display(),
        dest = %dest_dir.display(),
        suffix,
        files = outcomes.len(),
        skipped = outcomes.iter().filter(|o| o.is_skipped()).count(),
        "suffix sweep finished"
    );

    Ok(outcomes)
}

// ---------------------------------------------------------------------------
// Directories
// ---------------------------------------------------------------------------

/// Create `location/name`, with any missing parents. An existing directory is fine.
pub fn create_subdir(name: impl AsRef<Path>, location: impl AsRef<Path>) -> Result<PathBuf> {
    let name = name.as_ref();
    let location = location.as_ref();
    validate_path(name)?;
    validate_path(location)?;

    let dir = location.join(name);
    fs::create_dir_all(&dir).map_err(|e| PathKitError::io(&dir, e))?;
    tracing::debug!(dir = %dir.display(), "created directory");
    Ok(dir)
}
