//! The set of files requested for output in a run.

use indexmap::IndexSet;
use smol_str::SmolStr;

/// Proto files whose TypeScript output is produced by this run.
///
/// Files outside the set are only present as dependencies; their output is
/// expected to exist already under an import root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateSet {
    files: IndexSet<SmolStr>,
}

impl GenerateSet {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a proto file name.
    pub fn insert(&mut self, file: impl Into<SmolStr>) -> bool {
        self.files.insert(file.into())
    }

    /// Check if a proto file is generated in this run.
    pub fn contains(&self, file: &str) -> bool {
        self.files.contains(file)
    }

    /// Iterate over all files in request order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.files.iter().map(SmolStr::as_str)
    }

    /// Get the number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<S: Into<SmolStr>> FromIterator<S> for GenerateSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().map(Into::into).collect(),
        }
    }
}
