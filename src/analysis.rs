//! One-call entry point: build the registry, then resolve every import.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::config::ResolveConfig;
use crate::descriptor::FileDescriptor;
use crate::error::Result;
use crate::registry::{FileData, GenerateSet, Registry};
use crate::resolve::{DependencyResolver, FileLocator};

/// The outcome of a generation run's analysis phase.
///
/// ```ignore
/// use protots::{Analysis, GenerateSet, ResolveConfig, WalkLocator};
///
/// let config = ResolveConfig::with_root("gen", Some("@gen".into()))?;
/// let generate: GenerateSet = ["api/a.proto"].into_iter().collect();
/// let analysis = Analysis::build(&files, generate, &config, WalkLocator::new())?;
///
/// for file in analysis.generated_files() {
///     for dep in &file.dependencies {
///         println!("import * as {} from '{}'", dep.module_identifier, dep.source_file);
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Analysis {
    registry: Registry,
    files: IndexMap<SmolStr, FileData>,
    generate: GenerateSet,
}

impl Analysis {
    /// Register every type of `files`, then resolve the imports of each
    /// file in `generate`.
    pub fn build<L: FileLocator>(
        files: &[FileDescriptor],
        generate: GenerateSet,
        config: &ResolveConfig,
        locator: L,
    ) -> Result<Self> {
        let mut registry = Registry::new();
        let mut data = registry.analyse(files, config.output_suffix());

        DependencyResolver::new(&registry, &generate, config, locator).resolve_all(&mut data)?;

        tracing::debug!(
            types = registry.len(),
            files = data.len(),
            generated = generate.len(),
            "analysis complete"
        );
        Ok(Self {
            registry,
            files: data,
            generate,
        })
    }

    /// The populated type registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Data for one proto file, generated or not.
    pub fn file(&self, name: &str) -> Option<&FileData> {
        self.files.get(name)
    }

    /// All analysed files in input order.
    pub fn files(&self) -> impl Iterator<Item = &FileData> {
        self.files.values()
    }

    /// Files whose output this run produces, in input order.
    pub fn generated_files(&self) -> impl Iterator<Item = &FileData> {
        self.files
            .values()
            .filter(|f| self.generate.contains(&f.name))
    }
}
