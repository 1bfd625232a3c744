use std::path::{Path, PathBuf};

use crate::entry::PathKind;
use crate::error::{PathKitError, Result};
use crate::snapshot::PathSnapshot;

/// Anything the traversal utilities accept: a raw path or a snapshot.
///
/// The discriminant is fixed at conversion time, so dispatch is a plain
/// `match` rather than a runtime type check.
///
/// ```rust
/// use std::path::Path;
/// use pathkit::Target;
///
/// let t: Target = Path::new("/tmp").into();
/// assert_eq!(t.path(), Path::new("/tmp"));
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    RawPath(&'a Path),
    Snapshot(&'a PathSnapshot),
}

impl<'a> Target<'a> {
    /// The underlying path, unwrapping a snapshot to its stored handle.
    pub fn path(&self) -> &'a Path {
        match *self {
            Target::RawPath(p) => p,
            Target::Snapshot(s) => s.path(),
        }
    }

    /// Reject handles that cannot name any filesystem location.
    pub(crate) fn validate(&self) -> Result<&'a Path> {
        let path = self.path();
        validate_path(path)?;
        Ok(path)
    }

    /// Directory that listings are taken from.
    ///
    /// A file stands in for its parent directory, so a file reports its
    /// siblings. A snapshot uses the kind it recorded at creation.
    pub(crate) fn listing_root(&self) -> Result<PathBuf> {
        let path = self.validate()?;
        let kind = match self {
            Target::RawPath(p) => PathKind::probe(p).1,
            Target::Snapshot(s) => s.kind(),
        };
        Ok(match kind {
            PathKind::File => crate::parts::parent_of(path),
            _ => path.to_path_buf(),
        })
    }
}

impl<'a> From<&'a Path> for Target<'a> {
    fn from(p: &'a Path) -> Self {
        Target::RawPath(p)
    }
}

impl<'a> From<&'a PathBuf> for Target<'a> {
    fn from(p: &'a PathBuf) -> Self {
        Target::RawPath(p.as_path())
    }
}

impl<'a> From<&'a str> for Target<'a> {
    fn from(s: &'a str) -> Self {
        Target::RawPath(Path::new(s))
    }
}

impl<'a> From<&'a PathSnapshot> for Target<'a> {
    fn from(s: &'a PathSnapshot) -> Self {
        Target::Snapshot(s)
    }
}

pub(crate) fn validate_path(path: &Path) -> Result<()> {
    let raw = path.as_os_str();
    if raw.is_empty() {
        return Err(PathKitError::InvalidHandle("empty path".into()));
    }
    if raw.to_string_lossy().contains('\0') {
        return Err(PathKitError::InvalidHandle(format!(
            "{} contains a NUL byte",
            path.display()
        )));
    }
    Ok(())
}

/// Validated path construction from a string.
///
/// ```rust
/// assert!(pathkit::create_path("notes/today.md").is_ok());
/// assert!(pathkit::create_path("").is_err());
/// ```
pub fn create_path(raw: &str) -> Result<PathBuf> {
    let path = PathBuf::from(raw);
    validate_path(&path)?;
    Ok(path)
}
