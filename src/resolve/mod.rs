//! Dependency resolution — turning external type references into imports.
//!
//! For each generated file, every externally referenced type is looked up in
//! the [`Registry`] and grouped by the `(package, file)` that declares it.
//! Each group becomes exactly one [`Dependency`]:
//!
//! ```text
//! import * as <module_identifier> from '<source_file>'
//! ```
//!
//! Types are then referenced as `<module_identifier>.<package_identifier>`.
//!
//! ## Import specifiers
//!
//! - Target generated in this run: path relative to the importing file,
//!   always starting with `./` or `../`.
//! - Target generated earlier: located below an import root with a
//!   [`FileLocator`], then either aliased (`@gen/sub/file`) or made relative
//!   to the importing file.
//!
//! In both cases the output suffix is stripped.

mod locate;

use std::path::Path;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::naming::{base_name, module_name, ts_file_name};
use crate::base::path::{
    ensure_dot_relative, relative_path, strip_output_suffix, substitute_alias, to_slash,
};
use crate::config::ResolveConfig;
use crate::error::{Error, Result};
use crate::registry::{Dependency, FileData, GenerateSet, Registry, TypeInformation};

pub use locate::{FileLocator, StaticLocator, WalkLocator};

/// Computes the import list of generated files.
pub struct DependencyResolver<'a, L> {
    registry: &'a Registry,
    generate: &'a GenerateSet,
    config: &'a ResolveConfig,
    locator: L,
}

impl<'a, L: FileLocator> DependencyResolver<'a, L> {
    /// Create a resolver over a populated registry.
    pub fn new(
        registry: &'a Registry,
        generate: &'a GenerateSet,
        config: &'a ResolveConfig,
        locator: L,
    ) -> Self {
        Self {
            registry,
            generate,
            config,
            locator,
        }
    }

    /// Fill in `dependencies` for every file of the generate set.
    ///
    /// Files only present as dependencies are left untouched. The first
    /// failure aborts the whole run.
    pub fn resolve_all(&self, files: &mut IndexMap<SmolStr, FileData>) -> Result<()> {
        for file in files.values_mut() {
            if !self.generate.contains(&file.name) {
                continue;
            }
            file.dependencies = self.resolve_file(file)?;
        }
        Ok(())
    }

    /// Imports needed by one file, one per declaring `(package, file)`,
    /// sorted by module identifier.
    pub fn resolve_file(&self, file: &FileData) -> Result<Vec<Dependency>> {
        let mut dependencies: IndexMap<String, Dependency> = IndexMap::new();

        for type_name in &file.external_depending_types {
            let info = self
                .registry
                .get(type_name)
                .map_err(|e| e.in_file(&file.name, type_name))?;

            let key = info.import_key();
            if dependencies.contains_key(&key) {
                continue;
            }

            let source_file = self
                .source_file(file, info)
                .map_err(|e| e.in_file(&file.name, &info.file))?;
            let dependency = Dependency {
                module_identifier: module_name(&info.package, &info.file),
                source_file,
            };
            tracing::debug!(
                file = %file.name,
                module = %dependency.module_identifier,
                source = %dependency.source_file,
                "dependency resolved"
            );
            dependencies.insert(key, dependency);
        }

        let mut dependencies: Vec<_> = dependencies.into_values().collect();
        dependencies.sort();
        Ok(dependencies)
    }

    fn source_file(&self, file: &FileData, info: &TypeInformation) -> Result<String> {
        let suffix = self.config.output_suffix();
        let target = ts_file_name(&info.file, suffix);
        let specifier = if self.generate.contains(&info.file) {
            in_run_specifier(&file.ts_file_name, &target)?
        } else {
            self.external_specifier(&file.ts_file_name, &target)?
        };
        Ok(strip_output_suffix(&specifier, suffix).to_string())
    }

    /// Search the import roots in order; the first root with a match wins.
    fn external_specifier(&self, current: &str, target: &str) -> Result<String> {
        let file_name = base_name(target);

        for root in self.config.roots() {
            let matches = self
                .locator
                .locate(&root.path, file_name)
                .map_err(|source| Error::FileSearch {
                    root: root.path.clone(),
                    target: target.to_string(),
                    source,
                })?;
            let Some(found) = matches.first() else {
                continue;
            };
            if matches.len() > 1 {
                tracing::warn!(
                    import = %target,
                    root = %root.path.display(),
                    chosen = %found.display(),
                    candidates = ?matches,
                    "multiple files match import, using the first"
                );
            }

            return match &root.alias {
                Some(alias) => {
                    substitute_alias(found, &root.path, alias).ok_or_else(|| Error::OutsideRoot {
                        path: found.clone(),
                        root: root.path.clone(),
                    })
                }
                None => {
                    // Output files are laid out below the primary root.
                    let anchor = self.config.primary_root().map_or(&root.path, |r| &r.path);
                    let base = anchor.join(parent_dir(current));
                    let relative = relative_path(&base, found).ok_or_else(|| {
                        Error::RelativePath {
                            from: base.clone(),
                            to: found.clone(),
                        }
                    })?;
                    Ok(ensure_dot_relative(to_slash(&relative)))
                }
            };
        }

        Err(Error::NotFound {
            target: target.to_string(),
        })
    }
}

fn in_run_specifier(current: &str, target: &str) -> Result<String> {
    let base = parent_dir(current);
    let relative = relative_path(base, Path::new(target)).ok_or_else(|| Error::RelativePath {
        from: base.to_path_buf(),
        to: target.into(),
    })?;
    Ok(ensure_dot_relative(to_slash(&relative)))
}

fn parent_dir(file: &str) -> &Path {
    Path::new(file).parent().unwrap_or(Path::new(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FieldDescriptor, FileDescriptor, MessageDescriptor};

    fn registry_for(files: &[FileDescriptor]) -> (Registry, IndexMap<SmolStr, FileData>) {
        let mut registry = Registry::new();
        let data = registry.analyse(files, ".ts");
        (registry, data)
    }

    fn two_files() -> Vec<FileDescriptor> {
        vec![
            FileDescriptor::new("a.proto", "p1").message(MessageDescriptor::new("Foo")),
            FileDescriptor::new("b.proto", "p2").message(
                MessageDescriptor::new("Bar").field(FieldDescriptor::message("foo", 1, ".p1.Foo")),
            ),
        ]
    }

    #[test]
    fn test_in_run_sibling() {
        let (registry, data) = registry_for(&two_files());
        let generate: GenerateSet = ["a.proto", "b.proto"].into_iter().collect();
        let config = ResolveConfig::with_root("/root", None).unwrap();
        let resolver = DependencyResolver::new(&registry, &generate, &config, StaticLocator::new());

        let deps = resolver.resolve_file(&data["b.proto"]).unwrap();
        assert_eq!(
            deps,
            vec![Dependency {
                module_identifier: "P1A".into(),
                source_file: "./a".into(),
            }]
        );
    }

    #[test]
    fn test_in_run_upward_path() {
        let files = vec![
            FileDescriptor::new("common/a.proto", "p1").message(MessageDescriptor::new("Foo")),
            FileDescriptor::new("svc/api/b.proto", "p2").message(
                MessageDescriptor::new("Bar").field(FieldDescriptor::message("foo", 1, ".p1.Foo")),
            ),
        ];
        let (registry, data) = registry_for(&files);
        let generate: GenerateSet = ["common/a.proto", "svc/api/b.proto"].into_iter().collect();
        let config = ResolveConfig::with_root("/root", None).unwrap();
        let resolver = DependencyResolver::new(&registry, &generate, &config, StaticLocator::new());

        let deps = resolver.resolve_file(&data["svc/api/b.proto"]).unwrap();
        assert_eq!(deps[0].source_file, "../../common/a");
    }

    #[test]
    fn test_unknown_type_is_fatal() {
        let (registry, mut data) = registry_for(&two_files());
        data["b.proto"].add_external_dependency(".p9.Ghost");
        let generate: GenerateSet = ["a.proto", "b.proto"].into_iter().collect();
        let config = ResolveConfig::with_root("/root", None).unwrap();
        let resolver = DependencyResolver::new(&registry, &generate, &config, StaticLocator::new());

        let err = resolver.resolve_all(&mut data).unwrap_err();
        match err {
            Error::Resolve { file, target, source } => {
                assert_eq!(file, "b.proto");
                assert_eq!(target, ".p9.Ghost");
                assert!(matches!(*source, Error::UnknownType(_)));
            }
            other => panic!("expected Resolve, got {other:?}"),
        }
    }

    #[test]
    fn test_external_alias() {
        let (registry, data) = registry_for(&two_files());
        let generate: GenerateSet = ["b.proto"].into_iter().collect();
        let config = ResolveConfig::with_root("/abs/root", Some("@gen".into())).unwrap();
        let locator = StaticLocator::new().with_file("/abs/root/sub/a.ts");
        let resolver = DependencyResolver::new(&registry, &generate, &config, locator);

        let deps = resolver.resolve_file(&data["b.proto"]).unwrap();
        assert_eq!(deps[0].source_file, "@gen/sub/a");
    }

    #[test]
    fn test_external_relative_without_alias() {
        let (registry, data) = registry_for(&two_files());
        let generate: GenerateSet = ["b.proto"].into_iter().collect();
        let config = ResolveConfig::with_root("/abs/root", None).unwrap();
        let locator = StaticLocator::new().with_file("/abs/root/vendor/a.ts");
        let resolver = DependencyResolver::new(&registry, &generate, &config, locator);

        let deps = resolver.resolve_file(&data["b.proto"]).unwrap();
        assert_eq!(deps[0].source_file, "./vendor/a");
    }

    #[test]
    fn test_external_ambiguous_uses_first() {
        let (registry, data) = registry_for(&two_files());
        let generate: GenerateSet = ["b.proto"].into_iter().collect();
        let config = ResolveConfig::with_root("/abs/root", Some("@gen".into())).unwrap();
        let locator = StaticLocator::new()
            .with_file("/abs/root/one/a.ts")
            .with_file("/abs/root/two/a.ts");
        let resolver = DependencyResolver::new(&registry, &generate, &config, locator);

        let deps = resolver.resolve_file(&data["b.proto"]).unwrap();
        assert_eq!(deps[0].source_file, "@gen/one/a");
    }

    #[test]
    fn test_external_missing_is_fatal() {
        let (registry, data) = registry_for(&two_files());
        let generate: GenerateSet = ["b.proto"].into_iter().collect();
        let config = ResolveConfig::with_root("/abs/root", None).unwrap();
        let resolver = DependencyResolver::new(&registry, &generate, &config, StaticLocator::new());

        let err = resolver.resolve_file(&data["b.proto"]).unwrap_err();
        match err {
            Error::Resolve { file, target, source } => {
                assert_eq!(file, "b.proto");
                assert_eq!(target, "a.proto");
                assert!(matches!(*source, Error::NotFound { .. }));
            }
            other => panic!("expected Resolve, got {other:?}"),
        }
    }

    #[test]
    fn test_files_outside_generate_set_untouched() {
        let (registry, mut data) = registry_for(&two_files());
        data["a.proto"].add_external_dependency(".p9.Ghost");
        let generate: GenerateSet = ["b.proto"].into_iter().collect();
        let config = ResolveConfig::with_root("/abs/root", None).unwrap();
        let locator = StaticLocator::new().with_file("/abs/root/a.ts");
        let resolver = DependencyResolver::new(&registry, &generate, &config, locator);

        resolver.resolve_all(&mut data).unwrap();
        assert!(data["a.proto"].dependencies.is_empty());
        assert_eq!(data["b.proto"].dependencies.len(), 1);
    }
}
