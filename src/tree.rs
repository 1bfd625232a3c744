//! Indented directory tree output.
//!
//! ```text
//! + /tmp/root
//!    + a.txt
//!    + b.txt
//!    + sub
//!       + c.txt
//! ```

use std::io::Write;

use crate::engine::{enumerate, Scope, WalkConfig};
use crate::error::{PathKitError, Result};
use crate::handle::Target;

const INDENT: &str = "   ";

/// Print the tree under `target` to stdout.
///
/// A file prints the tree of its parent directory.
pub fn print_tree<'a>(target: impl Into<Target<'a>>) -> Result<()> {
    write_tree(target, &mut std::io::stdout().lock())
}

pub fn write_tree<'a>(target: impl Into<Target<'a>>, out: &mut impl Write) -> Result<()> {
    write_tree_with(target, &WalkConfig::default(), out)
}

/// Every descendant, sorted by path (component by component), one `+ name`
/// line each, indented three spaces per level below the root.
pub fn write_tree_with<'a>(
    target: impl Into<Target<'a>>,
    config: &WalkConfig,
    out: &mut impl Write,
) -> Result<()> {
    let root = target.into().listing_root()?;
    let mut entries = enumerate(&root, Scope::Recursive, config)?;
    // Component-wise, so `notes/today.md` stays ahead of `notes.md`.
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    let io_err = |e| PathKitError::io(&root, e);

    writeln!(out, "+ {}", root.display()).map_err(io_err)?;
    for entry in &entries {
        writeln!(out, "{}+ {}", INDENT.repeat(entry.depth), entry.name).map_err(io_err)?;
    }
    Ok(())
}
