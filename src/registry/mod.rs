//! Type registry — the single table of every declared type.
//!
//! The registry maps fully-qualified type names to their declaration
//! metadata. It is populated once per generation run by [`Registry::analyse`]
//! and then read by the dependency resolver and the emitter.
//!
//! ## Key Data Structures
//!
//! - [`TypeInformation`] - Where and how a type is declared
//! - [`FileData`] - Per-file analysis output, including its imports
//! - [`GenerateSet`] - Files whose output this run produces

mod analyse;
mod file;
mod input;
mod types;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

use crate::error::{Error, Result};

pub use file::{Dependency, FileData};
pub use input::GenerateSet;
pub use types::{MapEntryType, TypeInformation, TypeKind};

/// All declared types, keyed by fully-qualified name.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    types: IndexMap<SmolStr, TypeInformation, FxBuildHasher>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous one with the same name.
    pub fn register(&mut self, info: TypeInformation) {
        tracing::debug!(name = %info.fully_qualified_name, file = %info.file, "type registered");
        self.types.insert(info.fully_qualified_name.clone(), info);
    }

    /// Look up a type by fully-qualified name.
    pub fn lookup(&self, fq_name: &str) -> Option<&TypeInformation> {
        self.types.get(fq_name)
    }

    /// Look up a type that must exist.
    ///
    /// A miss means the reference collector and the registry disagree on the
    /// set of declared types.
    pub fn get(&self, fq_name: &str) -> Result<&TypeInformation> {
        self.lookup(fq_name)
            .ok_or_else(|| Error::UnknownType(fq_name.into()))
    }

    /// Iterate over all entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeInformation> {
        self.types.values()
    }

    /// Get the number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if no type has been registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_type(fq: &str, package: &str, file: &str) -> TypeInformation {
        let local = fq.rsplit('.').next().unwrap_or(fq);
        TypeInformation {
            fully_qualified_name: fq.into(),
            package: package.into(),
            file: file.into(),
            package_identifier: local.into(),
            local_identifier: local.into(),
            kind: TypeKind::Message,
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = Registry::new();
        registry.register(make_type(".p1.Foo", "p1", "a.proto"));
        registry.register(make_type(".p2.Bar", "p2", "b.proto"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup(".p1.Foo").unwrap().file, "a.proto");
        assert!(registry.lookup(".p1.Missing").is_none());
    }

    #[test]
    fn test_register_last_write_wins() {
        let mut registry = Registry::new();
        registry.register(make_type(".p1.Foo", "p1", "a.proto"));
        registry.register(make_type(".p1.Foo", "p1", "moved.proto"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup(".p1.Foo").unwrap().file, "moved.proto");
    }

    #[test]
    fn test_get_miss_is_error() {
        let registry = Registry::new();
        match registry.get(".p1.Foo") {
            Err(Error::UnknownType(name)) => assert_eq!(name, ".p1.Foo"),
            other => panic!("expected UnknownType, got {other:?}"),
        }
    }
}
