//! # protots-base
//!
//! Type registry and cross-file import resolution for a protobuf to
//! TypeScript code generator.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! analysis   → One-call entry point (registry + resolution)
//!   ↓
//! resolve    → Dependency resolver, import-root file search
//!   ↓
//! registry   → Type table, per-file analysis, generate set
//!   ↓
//! descriptor → Decoded descriptor tree (input)
//!   ↓
//! base       → Naming scheme, lexical path helpers
//! ```
//!
//! Parsing the wire-format descriptors and emitting TypeScript text happen
//! outside this crate.

/// Foundation helpers: identifiers, module names, paths
pub mod base;

/// Decoded protobuf descriptor tree
pub mod descriptor;

/// Type registry populated from the descriptor tree
pub mod registry;

/// Import resolution for generated files
pub mod resolve;

pub mod analysis;
pub mod config;
pub mod error;

pub use analysis::Analysis;
pub use config::{ImportRoot, ResolveConfig};
pub use error::{Error, Result};
pub use registry::{
    Dependency, FileData, GenerateSet, MapEntryType, Registry, TypeInformation, TypeKind,
};
pub use resolve::{DependencyResolver, FileLocator, StaticLocator, WalkLocator};
