use crate::engine::WalkConfig;
use crate::error::Result;
use crate::handle::Target;
use crate::snapshot::PathSnapshot;

// ---------------------------------------------------------------------------
// SnapshotBuilder
// ---------------------------------------------------------------------------

/// Configures how a [`PathSnapshot`] is taken.
///
/// Created via [`pathkit::snapshot()`](crate::snapshot). Configure with
/// chained builder methods, then call [`build()`](SnapshotBuilder::build).
///
/// # Example
///
/// ```rust,no_run
/// let snap = pathkit::snapshot()
///     .follow_links(true)
///     .max_depth(3)
///     .build("/var/log")?;
///
/// println!("{} files below {}", snap.counts().total_files, snap.path().display());
/// # Ok::<(), pathkit::PathKitError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    config:        WalkConfig,
    allow_missing: bool,
}

impl SnapshotBuilder {
    // ── Traversal ─────────────────────────────────────────────────────────

    /// Follow symbolic links during recursive listing.
    ///
    /// Off by default. When on, a link pointing back at one of its own
    /// ancestors aborts the build with [`PathKitError::SymlinkLoop`](crate::PathKitError::SymlinkLoop).
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.config.follow_links = yes;
        self
    }

    /// Maximum depth for the recursive listings. `1` makes them equal to the
    /// direct ones. Unlimited by default.
    pub fn max_depth(mut self, d: usize) -> Self {
        self.config.max_depth = Some(d);
        self
    }

    // ── Missing paths ─────────────────────────────────────────────────────

    /// Build a snapshot of a nonexistent path instead of failing.
    ///
    /// Disabled by default, in which case a missing path propagates
    /// [`PathKitError::NotFound`](crate::PathKitError::NotFound). When enabled,
    /// the snapshot reports `exists() == false` and empty listings.
    pub fn allow_missing(mut self, yes: bool) -> Self {
        self.allow_missing = yes;
        self
    }

    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Take the snapshot.
    ///
    /// Blocks for one direct and one recursive enumeration of the listing root.
    ///
    /// # Errors
    ///
    /// [`InvalidHandle`](crate::PathKitError::InvalidHandle) for an empty or
    /// NUL-containing path, before any I/O. Otherwise whatever the enumeration
    /// hits first (not found, permission denied, ...).
    pub fn build<'a>(&self, target: impl Into<Target<'a>>) -> Result<PathSnapshot> {
        let path = target.into().validate()?;
        PathSnapshot::take(path, self.config.clone(), self.allow_missing)
    }
}
