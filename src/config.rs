//! Resolver configuration: import roots, aliases and output suffix.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Suffix of generated files when none is configured.
pub const DEFAULT_OUTPUT_SUFFIX: &str = ".ts";

/// A directory searched for files that are not generated in this run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportRoot {
    /// Absolute path of the root.
    pub path: PathBuf,
    /// Replaces `path` in import specifiers when set, e.g. `@gen`.
    pub alias: Option<String>,
}

impl ImportRoot {
    /// Create an import root, resolving `path` against the working directory.
    pub fn new(path: impl AsRef<Path>, alias: Option<String>) -> Result<Self> {
        let path = path.as_ref();
        let path = std::path::absolute(path).map_err(|source| Error::ImportRoot {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path,
            alias: alias.filter(|a| !a.is_empty()),
        })
    }
}

/// Settings for one resolution run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolveConfig {
    roots: Vec<ImportRoot>,
    output_suffix: String,
}

impl ResolveConfig {
    /// One import root at the current working directory, no alias.
    pub fn new() -> Result<Self> {
        Self::with_root(".", None)
    }

    /// One import root at `path` with an optional alias.
    pub fn with_root(path: impl AsRef<Path>, alias: Option<String>) -> Result<Self> {
        Ok(Self::from_roots(vec![ImportRoot::new(path, alias)?]))
    }

    /// Several import roots, searched in the given order.
    pub fn from_roots(roots: Vec<ImportRoot>) -> Self {
        Self {
            roots,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }

    /// Set the suffix that replaces `.proto` in generated file names.
    pub fn with_output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.output_suffix = suffix.into();
        self
    }

    /// Append another import root, searched after the existing ones.
    pub fn add_root(&mut self, root: ImportRoot) {
        self.roots.push(root);
    }

    /// All import roots in search order.
    pub fn roots(&self) -> &[ImportRoot] {
        &self.roots
    }

    /// The first configured root, where output paths are anchored.
    pub fn primary_root(&self) -> Option<&ImportRoot> {
        self.roots.first()
    }

    /// Suffix of generated files, e.g. `.ts`.
    pub fn output_suffix(&self) -> &str {
        &self.output_suffix
    }
}
