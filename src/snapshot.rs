use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::engine::{enumerate, Scope, WalkConfig};
use crate::entry::PathKind;
use crate::error::{PathKitError, Result};
use crate::parts::{self, PathParts};
use crate::results::{Counts, Listings};

/// Metadata and directory listings of one path, captured at one instant.
///
/// Nothing is re-validated after creation: if the entry changes on disk the
/// snapshot goes stale. Use [`refresh`](PathSnapshot::refresh) to take a new one.
///
/// For a file, the listings describe its parent directory (its siblings),
/// since a file has no children of its own.
#[derive(Debug, Clone)]
pub struct PathSnapshot {
    path:          PathBuf,
    absolute:      PathBuf,
    parts:         PathParts,
    exists:        bool,
    kind:          PathKind,
    is_symlink:    bool,
    listings:      Listings,
    config:        WalkConfig,
    allow_missing: bool,
}

impl PathSnapshot {
    pub(crate) fn take(path: &Path, config: WalkConfig, allow_missing: bool) -> Result<Self> {
        let (exists, kind) = PathKind::probe(path);

        let root = match kind {
            PathKind::File => parts::parent_of(path),
            _ => path.to_path_buf(),
        };

        // A dangling link exists but does not resolve, so test the root itself.
        let listings = if allow_missing && std::fs::metadata(&root).is_err() {
            Listings::default()
        } else {
            let direct = enumerate(&root, Scope::Direct, &config)?;
            let recursive = enumerate(&root, Scope::Recursive, &config)?;
            Listings::from_entries(&direct, &recursive)
        };

        let absolute = std::path::absolute(path).map_err(|e| PathKitError::io(path, e))?;

        let snapshot = Self {
            path: path.to_path_buf(),
            absolute,
            parts: PathParts::of(path),
            exists,
            kind,
            is_symlink: path.is_symlink(),
            listings,
            config,
            allow_missing,
        };

        tracing::debug!(
            path = %snapshot.path.display(),
            kind = %snapshot.kind,
            counts = ?snapshot.counts(),
            "snapshot taken"
        );

        Ok(snapshot)
    }

    /// Take a new snapshot of the same path with the same configuration.
    pub fn refresh(&self) -> Result<PathSnapshot> {
        Self::take(&self.path, self.config.clone(), self.allow_missing)
    }

    // ── Identity ──────────────────────────────────────────────────────────

    /// The path exactly as given.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn absolute(&self) -> &Path {
        &self.absolute
    }

    pub fn is_absolute(&self) -> bool {
        self.path.is_absolute()
    }

    /// Full lexical decomposition.
    pub fn decomposition(&self) -> &PathParts {
        &self.parts
    }

    pub fn name(&self) -> &str {
        &self.parts.name
    }

    pub fn stem(&self) -> &str {
        &self.parts.stem
    }

    pub fn suffix(&self) -> &str {
        &self.parts.suffix
    }

    pub fn suffixes(&self) -> &[String] {
        &self.parts.suffixes
    }

    pub fn parent(&self) -> &Path {
        &self.parts.parent
    }

    pub fn parents(&self) -> &[PathBuf] {
        &self.parts.parents
    }

    pub fn parts(&self) -> &[String] {
        &self.parts.parts
    }

    pub fn drive(&self) -> &str {
        &self.parts.drive
    }

    pub fn root(&self) -> &str {
        &self.parts.root
    }

    pub fn anchor(&self) -> &str {
        &self.parts.anchor
    }

    // ── Classification ────────────────────────────────────────────────────

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn kind(&self) -> PathKind {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        self.kind == PathKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == PathKind::Directory
    }

    pub fn is_symlink(&self) -> bool {
        self.is_symlink
    }

    // ── Listings ──────────────────────────────────────────────────────────

    pub fn listings(&self) -> &Listings {
        &self.listings
    }

    pub fn local_files(&self) -> &[String] {
        &self.listings.local_files
    }

    pub fn local_dirs(&self) -> &[String] {
        &self.listings.local_dirs
    }

    pub fn all_files(&self) -> &[String] {
        &self.listings.all_files
    }

    pub fn all_dirs(&self) -> &[String] {
        &self.listings.all_dirs
    }

    pub fn all_contents(&self) -> &[String] {
        &self.listings.all_contents
    }

    /// Lengths of the four file/directory listings.
    pub fn counts(&self) -> Counts {
        self.listings.counts()
    }

    // ── Rewrites (no I/O) ─────────────────────────────────────────────────

    pub fn with_name(&self, name: &str) -> Result<PathBuf> {
        parts::with_name(&self.path, name)
    }

    pub fn with_stem(&self, stem: &str) -> Result<PathBuf> {
        parts::with_stem(&self.path, stem)
    }

    pub fn with_suffix(&self, suffix: &str) -> Result<PathBuf> {
        parts::with_suffix(&self.path, suffix)
    }

    // ── Display ───────────────────────────────────────────────────────────

    /// Print the information report to stdout.
    pub fn display_info(&self) -> Result<()> {
        self.write_info(&mut std::io::stdout().lock())
    }

    /// Header, then for directories the four sorted listings, then the tree
    /// (omitted when the path resolves to neither a file nor a directory).
    pub fn write_info(&self, out: &mut impl Write) -> Result<()> {
        let io_err = |e| PathKitError::io(&self.path, e);

        write!(out, "{self}").map_err(io_err)?;

        if self.is_dir() {
            let sections: [(&str, &[String]); 4] = [
                ("Local Folders", self.local_dirs()),
                ("Local Files", self.local_files()),
                ("All Files", self.all_files()),
                ("All Folders", self.all_dirs()),
            ];
            for (title, names) in sections {
                writeln!(out, "\n{title}:").map_err(io_err)?;
                let mut sorted = names.to_vec();
                sorted.sort();
                for name in sorted {
                    writeln!(out, "  {name}").map_err(io_err)?;
                }
            }
        }

        if self.is_dir() || self.is_file() {
            writeln!(out, "\nDirectory Tree:").map_err(io_err)?;
            crate::tree::write_tree_with(self, &self.config, out)?;
        }

        Ok(())
    }

    /// Print the directory tree to stdout.
    pub fn display_tree(&self) -> Result<()> {
        self.write_tree(&mut std::io::stdout().lock())
    }

    pub fn write_tree(&self, out: &mut impl Write) -> Result<()> {
        crate::tree::write_tree_with(self, &self.config, out)
    }
}

impl AsRef<Path> for PathSnapshot {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for PathSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = self.counts();
        writeln!(f, "{:<24}{}", "Information:", self.path.display())?;
        writeln!(f, "  {:<22}{}", "Path exists:", self.exists)?;
        writeln!(f, "  {:<22}{}", "Path type:", self.kind)?;
        writeln!(f, "  {:<22}{}", "Name:", self.name())?;
        writeln!(f, "  {:<22}{}", "File type:", self.suffix())?;
        writeln!(f, "  {:<22}{:?}", "Directory parts:", self.parts())?;
        writeln!(f, "  {:<22}{}", "Local files:", counts.local_files)?;
        writeln!(f, "  {:<22}{}", "Local directories:", counts.local_dirs)?;
        writeln!(f, "  {:<22}{}", "Total files:", counts.total_files)?;
        writeln!(f, "  {:<22}{}", "Total directories:", counts.total_dirs)
    }
}
