//! Registry entries.

use smol_str::SmolStr;

/// Key or value descriptor of a map-entry type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MapEntryType {
    /// Scalar name (`string`, `int32`, ...) or fully-qualified type name.
    pub type_name: SmolStr,
    /// The type is declared outside the map's own package.
    pub is_external: bool,
}

/// What kind of declaration a registry entry describes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum TypeKind {
    Message,
    Enum,
    /// Synthetic entry message of a `map<K, V>` field.
    MapEntry { key: MapEntryType, value: MapEntryType },
}

/// Declaration metadata for one fully-qualified type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeInformation {
    /// Package-rooted dotted name, e.g. `.pkg.Outer.Inner`.
    pub fully_qualified_name: SmolStr,
    pub package: SmolStr,
    /// Proto file that declares the type.
    pub file: SmolStr,
    /// Flattened name inside the package, e.g. `OuterInner`.
    pub package_identifier: SmolStr,
    /// Name inside the enclosing type.
    pub local_identifier: SmolStr,
    pub kind: TypeKind,
}

impl TypeInformation {
    /// Check if this is a regular message.
    pub fn is_message(&self) -> bool {
        matches!(self.kind, TypeKind::Message)
    }

    /// Check if this is an enum.
    pub fn is_enum(&self) -> bool {
        matches!(self.kind, TypeKind::Enum)
    }

    /// Check if this is a synthetic map entry.
    pub fn is_map_entry(&self) -> bool {
        matches!(self.kind, TypeKind::MapEntry { .. })
    }

    /// Key descriptor, for map entries only.
    pub fn key_type(&self) -> Option<&MapEntryType> {
        match &self.kind {
            TypeKind::MapEntry { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Value descriptor, for map entries only.
    pub fn value_type(&self) -> Option<&MapEntryType> {
        match &self.kind {
            TypeKind::MapEntry { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Key grouping all types that come from the same import.
    pub fn import_key(&self) -> String {
        format!("{}|{}", self.package, self.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(kind: TypeKind) -> TypeInformation {
        TypeInformation {
            fully_qualified_name: ".p1.Foo".into(),
            package: "p1".into(),
            file: "a.proto".into(),
            package_identifier: "Foo".into(),
            local_identifier: "Foo".into(),
            kind,
        }
    }

    #[test]
    fn test_kind_predicates() {
        assert!(info(TypeKind::Message).is_message());
        assert!(info(TypeKind::Enum).is_enum());
        assert!(info(TypeKind::Message).key_type().is_none());
    }

    #[test]
    fn test_map_entry_accessors() {
        let entry = info(TypeKind::MapEntry {
            key: MapEntryType {
                type_name: "string".into(),
                is_external: false,
            },
            value: MapEntryType {
                type_name: ".p2.Bar".into(),
                is_external: true,
            },
        });
        assert!(entry.is_map_entry());
        assert_eq!(entry.key_type().unwrap().type_name, "string");
        assert!(entry.value_type().unwrap().is_external);
    }

    #[test]
    fn test_import_key() {
        assert_eq!(info(TypeKind::Message).import_key(), "p1|a.proto");
    }
}
