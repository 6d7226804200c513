//! Naming scheme for generated TypeScript modules and identifiers.
//!
//! Protobuf allows arbitrarily deep nesting of messages and enums, while a
//! TypeScript module is a flat namespace. Nested declarations are therefore
//! flattened into package-level identifiers, and every source file gets one
//! module identifier that is unique across packages.

use std::path::Path;

/// Concatenates the enclosing type names with `name`, without separators.
///
/// `(["Outer", "Inner"], "Leaf")` becomes `OuterInnerLeaf`.
pub fn derive_package_level_identifier<S: AsRef<str>>(parents: &[S], name: &str) -> String {
    let mut out = String::with_capacity(
        parents.iter().map(|p| p.as_ref().len()).sum::<usize>() + name.len(),
    );
    for parent in parents {
        out.push_str(parent.as_ref());
    }
    out.push_str(name);
    out
}

/// Dotted prefix for names declared inside `parents`.
///
/// Empty at the top level, otherwise the parents joined with `.` plus a
/// trailing `.`.
pub fn build_parent_prefix<S: AsRef<str>>(parents: &[S]) -> String {
    let mut out = String::new();
    for parent in parents {
        out.push_str(parent.as_ref());
        out.push('.');
    }
    out
}

/// Fully-qualified name of a declaration: `.package.Parent.Name`.
pub fn fully_qualified_name<S: AsRef<str>>(package: &str, parents: &[S], name: &str) -> String {
    let prefix = build_parent_prefix(parents);
    if package.is_empty() {
        format!(".{prefix}{name}")
    } else {
        format!(".{package}.{prefix}{name}")
    }
}

/// Whether `fq_type_name` is declared outside `current_package`.
///
/// Only package-rooted names (leading `.`) can be external. The package
/// match is anchored: `.pkg.Foo` belongs to `pkg`, `.pkg2.Foo` does not.
/// With an empty current package every rooted name is treated as local,
/// since a root-level declaration cannot be told apart from a packaged one
/// by its name alone.
pub fn is_external(fq_type_name: &str, current_package: &str) -> bool {
    let Some(rest) = fq_type_name.strip_prefix('.') else {
        return false;
    };
    if current_package.is_empty() {
        return false;
    }
    match rest.strip_prefix(current_package) {
        Some(tail) => !(tail.is_empty() || tail.starts_with('.')),
        None => true,
    }
}

/// Identifier bound to `import * as <id>` for a given source file.
///
/// Each package segment and the file stem are CamelCased and concatenated,
/// so `("foo.v1", "dir/my_service.proto")` yields `FooV1MyService`.
pub fn module_name(package: &str, file: &str) -> String {
    let mut out = String::new();
    if !package.is_empty() {
        for part in package.split('.') {
            out.push_str(&to_camel(part));
        }
    }
    out.push_str(&to_camel(file_stem(file)));
    out
}

/// Generated output path for a proto file: same directory, extension
/// replaced by `suffix`.
pub fn ts_file_name(file: &str, suffix: &str) -> String {
    let stem = file_stem(file);
    match Path::new(file).parent().and_then(|p| p.to_str()) {
        Some(dir) if !dir.is_empty() => format!("{dir}/{stem}{suffix}"),
        _ => format!("{stem}{suffix}"),
    }
}

/// Last path segment of `file`.
pub(crate) fn base_name(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}

/// Base name of `file` without its final extension.
pub(crate) fn file_stem(file: &str) -> &str {
    let base = base_name(file);
    match base.rfind('.') {
        Some(0) | None => base,
        Some(idx) => &base[..idx],
    }
}

/// CamelCase conversion.
///
/// Any character that cannot continue an identifier is a word boundary and
/// is dropped. A digit also ends a word, so `v1beta` becomes `V1Beta`.
fn to_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut cap_next = true;
    for ch in s.chars() {
        if ch == '_' || !unicode_ident::is_xid_continue(ch) {
            cap_next = true;
            continue;
        }
        if ch.is_ascii_digit() {
            out.push(ch);
            cap_next = true;
        } else if cap_next {
            out.extend(ch.to_uppercase());
            cap_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
