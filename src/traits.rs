use glob::Pattern;

use crate::entry::Entry;
use crate::error::{PathKitError, Result};

/// Decides whether an enumerated entry is kept.
///
/// Any `Fn(&Entry) -> bool` closure is a matcher, so one-off filters need no
/// named type.
///
/// # Example
///
/// ```rust
/// use pathkit::{Matcher, Entry};
///
/// struct LargeNames(usize);
///
/// impl Matcher for LargeNames {
///     fn is_match(&self, entry: &Entry) -> bool {
///         entry.name.len() > self.0
///     }
/// }
/// ```
pub trait Matcher {
    /// Returns `true` if this entry should be kept.
    fn is_match(&self, entry: &Entry) -> bool;
}

impl<F> Matcher for F
where
    F: Fn(&Entry) -> bool,
{
    fn is_match(&self, entry: &Entry) -> bool {
        self(entry)
    }
}

// ---------------------------------------------------------------------------
// Built-in matchers
// ---------------------------------------------------------------------------

/// Keep entries by classification. Symlinks are judged by their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Select {
    Files,
    Dirs,
    Any,
}

impl Matcher for Select {
    fn is_match(&self, entry: &Entry) -> bool {
        match self {
            Select::Files => entry.is_file(),
            Select::Dirs => entry.is_dir(),
            Select::Any => true,
        }
    }
}

/// Files whose final suffix equals the given one.
#[derive(Debug, Clone)]
pub struct SuffixMatcher {
    suffix: String,
}

impl SuffixMatcher {
    /// Accepts `"txt"` or `".txt"`. Comparison is case-sensitive.
    pub fn new(suffix: &str) -> Result<Self> {
        let bare = suffix.strip_prefix('.').unwrap_or(suffix);
        if bare.is_empty() || bare.contains('.') {
            return Err(PathKitError::InvalidPattern(format!(
                "suffix {suffix:?} is not a single extension"
            )));
        }
        Ok(Self {
            suffix: format!(".{bare}"),
        })
    }
}

impl Matcher for SuffixMatcher {
    fn is_match(&self, entry: &Entry) -> bool {
        let (_, suffix) = crate::parts::split_suffix(&entry.name);
        entry.is_file() && suffix == self.suffix
    }
}

/// Entries whose name matches a shell glob.
#[derive(Debug, Clone)]
pub struct GlobMatcher {
    pattern: Pattern,
}

impl GlobMatcher {
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern =
            Pattern::new(pattern).map_err(|e| PathKitError::InvalidPattern(e.to_string()))?;
        Ok(Self { pattern })
    }

    /// Names containing `needle` anywhere (`*needle*`), with glob
    /// metacharacters in `needle` taken literally.
    pub fn containing(needle: &str) -> Result<Self> {
        if needle.is_empty() {
            return Err(PathKitError::InvalidPattern("empty substring".into()));
        }
        Self::new(&format!("*{}*", Pattern::escape(needle)))
    }
}

impl Matcher for GlobMatcher {
    fn is_match(&self, entry: &Entry) -> bool {
        self.pattern.matches(&entry.name)
    }
}
