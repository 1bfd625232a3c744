use crate::entry::Entry;

/// Name lists captured by one direct and one recursive enumeration.
///
/// Names are in walker order. Only the tree printer sorts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listings {
    /// Direct children that are files.
    pub local_files: Vec<String>,

    /// Direct children that are directories.
    pub local_dirs: Vec<String>,

    /// Descendants at any depth that are files.
    pub all_files: Vec<String>,

    /// Descendants at any depth that are directories.
    pub all_dirs: Vec<String>,

    /// Every descendant, whatever its kind.
    pub all_contents: Vec<String>,
}

impl Listings {
    /// Split two raw enumerations into the five lists.
    pub(crate) fn from_entries(direct: &[Entry], recursive: &[Entry]) -> Self {
        let names = |entries: &[Entry], keep: fn(&Entry) -> bool| -> Vec<String> {
            entries
                .iter()
                .filter(|e| keep(e))
                .map(|e| e.name.clone())
                .collect()
        };

        Self {
            local_files:  names(direct, Entry::is_file),
            local_dirs:   names(direct, Entry::is_dir),
            all_files:    names(recursive, Entry::is_file),
            all_dirs:     names(recursive, Entry::is_dir),
            all_contents: names(recursive, |_| true),
        }
    }

    pub fn counts(&self) -> Counts {
        Counts {
            local_files: self.local_files.len(),
            local_dirs:  self.local_dirs.len(),
            total_files: self.all_files.len(),
            total_dirs:  self.all_dirs.len(),
        }
    }
}

/// The four counts, always equal to the lengths of the matching lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub local_files: usize,
    pub local_dirs:  usize,
    pub total_files: usize,
    pub total_dirs:  usize,
}
