//! Foundation helpers for the generator.
//!
//! This module provides the string and path primitives used throughout:
//! - [`naming`] - Package-level identifiers, module names, externality
//! - [`path`] - Lexical relative paths and import specifier shaping
//!
//! This module has NO dependencies on other protots modules.

pub mod naming;
pub mod path;

pub use naming::{
    build_parent_prefix, derive_package_level_identifier, fully_qualified_name, is_external,
    module_name, ts_file_name,
};
