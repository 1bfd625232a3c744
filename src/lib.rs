//! # pathkit
//!
//! Path snapshots — metadata, listings, and bulk file chores bundled into one record.
//!
//! A [`PathSnapshot`] captures a path's lexical decomposition (name, stem,
//! suffixes, parents, ...), its existence and kind, and the names of its
//! direct and nested files and directories, all at one instant. The free
//! functions in [`listing`], [`tree`], and [`ops`] do the same work on demand
//! against a raw path or a snapshot.
//!
//! Everything is synchronous and single-threaded. Nothing guards against
//! another process changing the tree mid-walk.
//!
//! # Quick Start
//!
//! ```rust
//! use std::fs;
//!
//! let dir = tempfile::tempdir().unwrap();
//! fs::write(dir.path().join("a.txt"), "a").unwrap();
//! fs::create_dir(dir.path().join("sub")).unwrap();
//! fs::write(dir.path().join("sub").join("c.txt"), "c").unwrap();
//!
//! let snap = pathkit::build_snapshot(dir.path()).unwrap();
//!
//! assert!(snap.is_dir());
//! assert_eq!(snap.local_files(), ["a.txt"]);
//! assert_eq!(snap.counts().total_files, 2);
//! assert_eq!(snap.counts().local_dirs, 1);
//! ```
//!
//! # Working on files
//!
//! A file has no children, so listings taken from a file describe its
//! parent directory instead:
//!
//! ```rust
//! use std::fs;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let file = dir.path().join("a.txt");
//! fs::write(&file, "a").unwrap();
//! fs::write(dir.path().join("b.txt"), "b").unwrap();
//!
//! let mut siblings = pathkit::listing::list_direct_files(&file).unwrap();
//! siblings.sort();
//! assert_eq!(siblings, ["a.txt", "b.txt"]);
//! ```
//!
//! # Custom matchers
//!
//! ```rust
//! use pathkit::engine::Scope;
//! use pathkit::{Entry, listing};
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("Cargo.toml"), "").unwrap();
//!
//! let upper = listing::find(dir.path(), Scope::Recursive, |e: &Entry| {
//!     e.name.starts_with(char::is_uppercase)
//! })
//! .unwrap();
//! assert_eq!(upper.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod engine;
pub mod listing;
pub mod ops;
pub mod tree;

mod builder;
mod entry;
mod error;
mod handle;
mod parts;
mod results;
mod snapshot;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::SnapshotBuilder;
pub use entry::{Entry, EntryKind, PathKind};
pub use error::{PathKitError, Result};
pub use handle::{create_path, Target};
pub use ops::{Outcome, Renamed};
pub use parts::{with_name, with_stem, with_suffix, PathParts};
pub use results::{Counts, Listings};
pub use snapshot::PathSnapshot;
pub use traits::{GlobMatcher, Matcher, Select, SuffixMatcher};

// ── Entry points ──────────────────────────────────────────────────────────────

/// Create a new [`SnapshotBuilder`] to configure and take a snapshot.
///
/// # Example
///
/// ```rust
/// let dir = tempfile::tempdir().unwrap();
///
/// let snap = pathkit::snapshot()
///     .max_depth(1)
///     .build(dir.path())
///     .unwrap();
///
/// assert!(snap.exists());
/// assert!(snap.all_contents().is_empty());
/// ```
pub fn snapshot() -> SnapshotBuilder {
    SnapshotBuilder::default()
}

/// Take a snapshot with the default configuration.
///
/// Shorthand for `pathkit::snapshot().build(target)`.
pub fn build_snapshot<'a>(target: impl Into<Target<'a>>) -> Result<PathSnapshot> {
    snapshot().build(target)
}
