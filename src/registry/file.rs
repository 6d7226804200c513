//! Per-file analysis results handed to the emitter.

use smol_str::SmolStr;

/// One `import * as <module_identifier> from '<source_file>'` statement.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dependency {
    pub module_identifier: String,
    /// Import specifier without the output suffix.
    pub source_file: String,
}

/// Analysis data for one proto file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FileData {
    /// Proto file name, e.g. `api/v1/a.proto`.
    pub name: SmolStr,
    pub package: SmolStr,
    /// Generated output file name, e.g. `api/v1/a.ts`.
    pub ts_file_name: String,
    /// Fully-qualified names declared in this file, in declaration order.
    pub types: Vec<SmolStr>,
    /// Fully-qualified names referenced from outside the file's package,
    /// each listed once in first-seen order.
    pub external_depending_types: Vec<SmolStr>,
    /// Filled in by the dependency resolver.
    pub dependencies: Vec<Dependency>,
}

impl FileData {
    /// Create file data with no types and no dependencies yet.
    pub fn new(name: impl Into<SmolStr>, package: impl Into<SmolStr>, ts_file_name: String) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            ts_file_name,
            types: Vec::new(),
            external_depending_types: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    /// Record an external type reference, ignoring repeats.
    pub fn add_external_dependency(&mut self, fq_type_name: &str) {
        if !self.external_depending_types.iter().any(|t| t == fq_type_name) {
            self.external_depending_types.push(fq_type_name.into());
        }
    }
}
