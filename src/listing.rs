//! Stateless listing, counting, and printing over a path or a snapshot.
//!
//! Every function takes anything convertible into a [`Target`]. A file
//! target is listed through its parent directory. Names come back in walker
//! order, unsorted; an empty directory gives empty lists and zero counts, and
//! a missing path gives [`PathKitError::NotFound`](crate::PathKitError::NotFound).

use std::io::Write;

use crate::engine::{enumerate, Scope, WalkConfig};
use crate::entry::Entry;
use crate::error::{PathKitError, Result};
use crate::handle::Target;
use crate::traits::{Matcher, Select};

// ---------------------------------------------------------------------------
// Generic
// ---------------------------------------------------------------------------

/// Entries under `target` at `scope` that `matcher` keeps.
pub fn find<'a>(
    target: impl Into<Target<'a>>,
    scope: Scope,
    matcher: impl Matcher,
) -> Result<Vec<Entry>> {
    find_with(target, scope, matcher, &WalkConfig::default())
}

pub fn find_with<'a>(
    target: impl Into<Target<'a>>,
    scope: Scope,
    matcher: impl Matcher,
    config: &WalkConfig,
) -> Result<Vec<Entry>> {
    let root = target.into().listing_root()?;
    let mut entries = enumerate(&root, scope, config)?;
    entries.retain(|e| matcher.is_match(e));
    Ok(entries)
}

pub fn names<'a>(target: impl Into<Target<'a>>, scope: Scope, select: Select) -> Result<Vec<String>> {
    Ok(find(target, scope, select)?
        .into_iter()
        .map(|e| e.name)
        .collect())
}

pub fn count<'a>(target: impl Into<Target<'a>>, scope: Scope, select: Select) -> Result<usize> {
    Ok(find(target, scope, select)?.len())
}

/// One name per line.
pub fn write_names<'a>(
    target: impl Into<Target<'a>>,
    scope: Scope,
    select: Select,
    out: &mut impl Write,
) -> Result<()> {
    let target = target.into();
    for name in names(target, scope, select)? {
        writeln!(out, "{name}").map_err(|e| PathKitError::io(target.path(), e))?;
    }
    Ok(())
}

pub fn print_names<'a>(target: impl Into<Target<'a>>, scope: Scope, select: Select) -> Result<()> {
    write_names(target, scope, select, &mut std::io::stdout().lock())
}

// ---------------------------------------------------------------------------
// Direct files
// ---------------------------------------------------------------------------

pub fn list_direct_files<'a>(target: impl Into<Target<'a>>) -> Result<Vec<String>> {
    names(target, Scope::Direct, Select::Files)
}

pub fn count_direct_files<'a>(target: impl Into<Target<'a>>) -> Result<usize> {
    count(target, Scope::Direct, Select::Files)
}

pub fn print_direct_files<'a>(target: impl Into<Target<'a>>) -> Result<()> {
    print_names(target, Scope::Direct, Select::Files)
}

// ---------------------------------------------------------------------------
// Direct subdirectories
// ---------------------------------------------------------------------------

pub fn list_direct_dirs<'a>(target: impl Into<Target<'a>>) -> Result<Vec<String>> {
    names(target, Scope::Direct, Select::Dirs)
}

pub fn count_direct_dirs<'a>(target: impl Into<Target<'a>>) -> Result<usize> {
    count(target, Scope::Direct, Select::Dirs)
}

pub fn print_direct_dirs<'a>(target: impl Into<Target<'a>>) -> Result<()> {
    print_names(target, Scope::Direct, Select::Dirs)
}

// ---------------------------------------------------------------------------
// Nested files
// ---------------------------------------------------------------------------

pub fn list_all_files<'a>(target: impl Into<Target<'a>>) -> Result<Vec<String>> {
    names(target, Scope::Recursive, Select::Files)
}

pub fn count_all_files<'a>(target: impl Into<Target<'a>>) -> Result<usize> {
    count(target, Scope::Recursive, Select::Files)
}

pub fn print_all_files<'a>(target: impl Into<Target<'a>>) -> Result<()> {
    print_names(target, Scope::Recursive, Select::Files)
}

// ---------------------------------------------------------------------------
// Nested subdirectories
// ---------------------------------------------------------------------------

pub fn list_all_dirs<'a>(target: impl Into<Target<'a>>) -> Result<Vec<String>> {
    names(target, Scope::Recursive, Select::Dirs)
}

pub fn count_all_dirs<'a>(target: impl Into<Target<'a>>) -> Result<usize> {
    count(target, Scope::Recursive, Select::Dirs)
}

pub fn print_all_dirs<'a>(target: impl Into<Target<'a>>) -> Result<()> {
    print_names(target, Scope::Recursive, Select::Dirs)
}

// ---------------------------------------------------------------------------
// Everything
// ---------------------------------------------------------------------------

pub fn list_all_contents<'a>(target: impl Into<Target<'a>>) -> Result<Vec<String>> {
    names(target, Scope::Recursive, Select::Any)
}

pub fn count_all_contents<'a>(target: impl Into<Target<'a>>) -> Result<usize> {
    count(target, Scope::Recursive, Select::Any)
}

pub fn print_all_contents<'a>(target: impl Into<Target<'a>>) -> Result<()> {
    print_names(target, Scope::Recursive, Select::Any)
}
