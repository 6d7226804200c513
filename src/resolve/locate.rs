//! Finding pre-generated output files below an import root.

use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use walkdir::WalkDir;

/// Searches an import root for files with a given base name.
///
/// Implementations return every match, in a stable order. Picking one of
/// several matches is the resolver's job.
pub trait FileLocator {
    fn locate(&self, root: &Path, file_name: &str) -> io::Result<Vec<PathBuf>>;
}

impl<L: FileLocator + ?Sized> FileLocator for &L {
    fn locate(&self, root: &Path, file_name: &str) -> io::Result<Vec<PathBuf>> {
        (**self).locate(root, file_name)
    }
}

/// Recursive directory walk, the equivalent of `<root>/**/<file_name>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WalkLocator {
    follow_links: bool,
}

impl WalkLocator {
    /// Create a locator that does not follow symlinks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow symbolic links while walking.
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }
}

impl FileLocator for WalkLocator {
    fn locate(&self, root: &Path, file_name: &str) -> io::Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Ok(Vec::new());
        }
        let mut matches = Vec::new();
        for entry in WalkDir::new(root)
            .follow_links(self.follow_links)
            .sort_by_file_name()
        {
            let entry = entry?;
            if entry.file_type().is_file() && entry.file_name() == file_name {
                matches.push(entry.into_path());
            }
        }
        Ok(matches)
    }
}

/// Fixed table of files, for callers that already know the layout.
#[derive(Clone, Debug, Default)]
pub struct StaticLocator {
    files: IndexMap<String, Vec<PathBuf>>,
}

impl StaticLocator {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an existing file at `path`.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.add(path);
        self
    }

    /// Register an existing file at `path`, keyed by its base name.
    pub fn add(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return;
        };
        self.files.entry(name.to_string()).or_default().push(path);
    }
}

impl FileLocator for StaticLocator {
    fn locate(&self, root: &Path, file_name: &str) -> io::Result<Vec<PathBuf>> {
        Ok(self
            .files
            .get(file_name)
            .into_iter()
            .flatten()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect())
    }
}
