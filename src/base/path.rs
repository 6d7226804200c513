//! Lexical path manipulation for import specifiers.
//!
//! None of these functions touch the filesystem. Import specifiers always
//! use forward slashes regardless of the host platform.

use std::path::{Component, Path, PathBuf};

/// Removes `.` components and folds `name/..` pairs.
///
/// Leading `..` components that cannot be folded are kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

/// Path of `to` relative to the directory `from_dir`.
///
/// Both paths must be either absolute or relative to the same base.
/// Returns `None` when no lexical answer exists, e.g. when `from_dir`
/// climbs above the common base with `..`.
pub fn relative_path(from_dir: &Path, to: &Path) -> Option<PathBuf> {
    let from = normalize(from_dir);
    let to = normalize(to);
    if from.has_root() != to.has_root() {
        return None;
    }

    let from_parts: Vec<_> = from.components().collect();
    let to_parts: Vec<_> = to.components().collect();
    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for part in &from_parts[common..] {
        match part {
            Component::Normal(_) => out.push(".."),
            _ => return None,
        }
    }
    for part in &to_parts[common..] {
        out.push(part.as_os_str());
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    Some(out)
}

/// Renders a path with `/` separators.
pub fn to_slash(path: &Path) -> String {
    let s = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// Prefixes `./` unless the specifier already starts with `./` or `../`.
pub fn ensure_dot_relative(specifier: String) -> String {
    if specifier.starts_with("./") || specifier.starts_with("../") || specifier == ".." {
        specifier
    } else {
        format!("./{specifier}")
    }
}

/// Drops the output suffix from an import specifier, if present.
pub fn strip_output_suffix<'a>(specifier: &'a str, suffix: &str) -> &'a str {
    specifier.strip_suffix(suffix).unwrap_or(specifier)
}

/// Replaces the `root` prefix of `path` with `alias`.
///
/// Returns `None` if `path` does not live below `root`.
pub fn substitute_alias(path: &Path, root: &Path, alias: &str) -> Option<String> {
    let rest = path.strip_prefix(root).ok()?;
    let rest = to_slash(rest);
    let alias = alias.trim_end_matches('/');
    if rest.is_empty() {
        Some(alias.to_string())
    } else {
        Some(format!("{alias}/{rest}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("a/./b/../c")), PathBuf::from("a/c"));
        assert_eq!(normalize(Path::new("../a")), PathBuf::from("../a"));
        assert_eq!(normalize(Path::new("/a/../../b")), PathBuf::from("/b"));
    }

    #[test]
    fn test_relative_sibling() {
        assert_eq!(
            relative_path(Path::new(""), Path::new("a.ts")),
            Some(PathBuf::from("a.ts"))
        );
        assert_eq!(
            relative_path(Path::new("x/y"), Path::new("x/z/a.ts")),
            Some(PathBuf::from("../z/a.ts"))
        );
    }

    #[test]
    fn test_relative_absolute() {
        assert_eq!(
            relative_path(Path::new("/r/out"), Path::new("/r/gen/a.ts")),
            Some(PathBuf::from("../gen/a.ts"))
        );
    }

    #[test]
    fn test_relative_rejects_mixed_and_unknown_parent() {
        assert_eq!(relative_path(Path::new("/r"), Path::new("a.ts")), None);
        assert_eq!(relative_path(Path::new("../x"), Path::new("a.ts")), None);
    }

    #[test]
    fn test_dot_relative() {
        assert_eq!(ensure_dot_relative("a".into()), "./a");
        assert_eq!(ensure_dot_relative("../a".into()), "../a");
        assert_eq!(ensure_dot_relative("./a".into()), "./a");
        assert_eq!(ensure_dot_relative("sub/a".into()), "./sub/a");
    }

    #[test]
    fn test_strip_suffix() {
        assert_eq!(strip_output_suffix("./a.ts", ".ts"), "./a");
        assert_eq!(strip_output_suffix("./a.pb.ts", ".pb.ts"), "./a");
        assert_eq!(strip_output_suffix("./a", ".ts"), "./a");
    }

    #[test]
    fn test_substitute_alias() {
        assert_eq!(
            substitute_alias(Path::new("/abs/root/sub/file"), Path::new("/abs/root"), "@gen"),
            Some("@gen/sub/file".to_string())
        );
        assert_eq!(
            substitute_alias(Path::new("/abs/root/file"), Path::new("/abs/root"), "@gen/"),
            Some("@gen/file".to_string())
        );
        assert_eq!(
            substitute_alias(Path::new("/elsewhere/file"), Path::new("/abs/root"), "@gen"),
            None
        );
    }
}
