//! Lexical path decomposition.
//!
//! Pure string work on a [`Path`]; nothing here touches the filesystem.
//! The rules match the usual shell notion of a suffix: the last dot-separated
//! piece of the final component, where a leading dot (`.bashrc`) does not
//! start a suffix.

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

use crate::error::{PathKitError, Result};

/// Every decomposed identity field of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParts {
    /// Final component, `""` for a bare root or `.`.
    pub name: String,

    /// `name` without its final suffix.
    pub stem: String,

    /// Final suffix including the dot, or `""`.
    pub suffix: String,

    /// All suffixes, each including its dot.
    pub suffixes: Vec<String>,

    /// Logical parent. `.` for a single relative component; a root is its own parent.
    pub parent: PathBuf,

    /// Every ancestor, nearest first.
    pub parents: Vec<PathBuf>,

    /// Components, with the drive and root merged into the first one.
    pub parts: Vec<String>,

    pub drive: String,
    pub root: String,
    /// `drive` followed by `root`.
    pub anchor: String,
}

impl PathParts {
    pub fn of(path: &Path) -> Self {
        let name = name_of(path);
        let (stem, suffix) = split_suffix(&name);
        let (drive, root) = drive_and_root(path);

        Self {
            suffixes: suffixes_of(&name),
            stem,
            suffix,
            parent: parent_of(path),
            parents: parents_of(path),
            parts: parts_of(path),
            anchor: format!("{drive}{root}"),
            drive,
            root,
            name,
        }
    }
}

/// Replace the final component.
pub fn with_name(path: &Path, name: &str) -> Result<PathBuf> {
    if name_of(path).is_empty() {
        return Err(PathKitError::InvalidHandle(format!(
            "{} has an empty name",
            path.display()
        )));
    }
    if name.is_empty() || name.contains(['/', '\0']) || name == "." || name == ".." {
        return Err(PathKitError::InvalidHandle(format!("invalid name {name:?}")));
    }
    Ok(path.with_file_name(name))
}

/// Replace the stem, keeping the suffix.
pub fn with_stem(path: &Path, stem: &str) -> Result<PathBuf> {
    let (_, suffix) = split_suffix(&name_of(path));
    with_name(path, &format!("{stem}{suffix}"))
}

/// Replace (or add, or with `""` remove) the final suffix.
pub fn with_suffix(path: &Path, suffix: &str) -> Result<PathBuf> {
    if !suffix.is_empty() && (!suffix.starts_with('.') || suffix == ".") {
        return Err(PathKitError::InvalidPattern(format!(
            "suffix {suffix:?} must start with a dot"
        )));
    }
    let (stem, _) = split_suffix(&name_of(path));
    with_name(path, &format!("{stem}{suffix}"))
}

pub(crate) fn name_of(path: &Path) -> String {
    match path.components().next_back() {
        Some(Component::Normal(s)) => s.to_string_lossy().into_owned(),
        Some(Component::ParentDir) => "..".to_string(),
        _ => String::new(),
    }
}

/// `(stem, suffix)` of a final component.
pub(crate) fn split_suffix(name: &str) -> (String, String) {
    match name.rfind('.') {
        Some(i) if i > 0 && i < name.len() - 1 => (name[..i].to_string(), name[i..].to_string()),
        _ => (name.to_string(), String::new()),
    }
}

fn suffixes_of(name: &str) -> Vec<String> {
    if name.ends_with('.') {
        return Vec::new();
    }
    name.trim_start_matches('.')
        .split('.')
        .skip(1)
        .map(|s| format!(".{s}"))
        .collect()
}

pub(crate) fn parent_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if p.as_os_str().is_empty() => PathBuf::from("."),
        Some(p) => p.to_path_buf(),
        None => path.to_path_buf(),
    }
}

fn parents_of(path: &Path) -> Vec<PathBuf> {
    let mut parents = Vec::new();
    let mut current = path.to_path_buf();
    loop {
        let next = parent_of(&current);
        if next == current {
            break;
        }
        parents.push(next.clone());
        current = next;
    }
    parents
}

fn parts_of(path: &Path) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut after_prefix = false;
    for component in path.components() {
        match component {
            Component::Prefix(p) => {
                parts.push(p.as_os_str().to_string_lossy().into_owned());
                after_prefix = true;
                continue;
            }
            Component::RootDir if after_prefix => {
                if let Some(drive) = parts.last_mut() {
                    drive.push_str(MAIN_SEPARATOR_STR);
                }
            }
            Component::RootDir => parts.push(MAIN_SEPARATOR_STR.to_string()),
            Component::CurDir => {}
            Component::ParentDir => parts.push("..".to_string()),
            Component::Normal(s) => parts.push(s.to_string_lossy().into_owned()),
        }
        after_prefix = false;
    }
    parts
}

fn drive_and_root(path: &Path) -> (String, String) {
    let mut drive = String::new();
    let mut root = String::new();
    for component in path.components().take(2) {
        match component {
            Component::Prefix(p) => drive = p.as_os_str().to_string_lossy().into_owned(),
            Component::RootDir => root = MAIN_SEPARATOR_STR.to_string(),
            _ => break,
        }
    }
    (drive, root)
}
