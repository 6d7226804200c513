//! Registry population from the descriptor tree.
//!
//! One depth-first pass per file registers every message, enum and map
//! entry, and records which referenced types live outside the file's
//! package.

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::{FileData, MapEntryType, Registry, TypeInformation, TypeKind};
use crate::base::naming::{
    derive_package_level_identifier, fully_qualified_name, is_external, ts_file_name,
};
use crate::descriptor::{EnumDescriptor, FieldDescriptor, FileDescriptor, MessageDescriptor};

impl Registry {
    /// Register all types of `files` and collect their external references.
    ///
    /// Returns one [`FileData`] per input file, keyed by proto file name and
    /// in input order. Dependencies are left empty for the resolver.
    pub fn analyse(
        &mut self,
        files: &[FileDescriptor],
        output_suffix: &str,
    ) -> IndexMap<SmolStr, FileData> {
        let mut data = IndexMap::with_capacity(files.len());
        for file in files {
            let file_data = self.analyse_file(file, output_suffix);
            data.insert(file_data.name.clone(), file_data);
        }
        data
    }

    fn analyse_file(&mut self, file: &FileDescriptor, output_suffix: &str) -> FileData {
        let mut data = FileData::new(
            file.name.as_str(),
            file.package.as_str(),
            ts_file_name(&file.name, output_suffix),
        );
        let mut walker = FileWalker {
            registry: self,
            file,
            data: &mut data,
            parents: Vec::new(),
        };

        for e in &file.enums {
            walker.enumeration(e);
        }
        for message in &file.messages {
            walker.message(message);
        }
        for service in &file.services {
            for method in &service.methods {
                walker.reference(&method.input_type);
                walker.reference(&method.output_type);
            }
        }
        data
    }
}

struct FileWalker<'a> {
    registry: &'a mut Registry,
    file: &'a FileDescriptor,
    data: &'a mut FileData,
    /// Names of the enclosing messages, outermost first.
    parents: Vec<String>,
}

impl FileWalker<'_> {
    fn enumeration(&mut self, e: &EnumDescriptor) {
        self.declare(&e.name, TypeKind::Enum);
    }

    fn message(&mut self, message: &MessageDescriptor) {
        let kind = match message.map_key_value() {
            Some((key, value)) => TypeKind::MapEntry {
                key: self.map_entry_type(key),
                value: self.map_entry_type(value),
            },
            None => TypeKind::Message,
        };
        self.declare(&message.name, kind);

        for field in &message.fields {
            if let Some(type_name) = &field.type_name {
                self.reference(type_name);
            }
        }

        self.parents.push(message.name.clone());
        for e in &message.nested_enums {
            self.enumeration(e);
        }
        for nested in &message.nested_messages {
            self.message(nested);
        }
        self.parents.pop();
    }

    fn declare(&mut self, name: &str, kind: TypeKind) {
        let fq = fully_qualified_name(&self.file.package, &self.parents, name);
        let info = TypeInformation {
            fully_qualified_name: fq.as_str().into(),
            package: self.file.package.as_str().into(),
            file: self.file.name.as_str().into(),
            package_identifier: derive_package_level_identifier(&self.parents, name).into(),
            local_identifier: name.into(),
            kind,
        };
        self.data.types.push(info.fully_qualified_name.clone());
        self.registry.register(info);
    }

    fn reference(&mut self, type_name: &str) {
        if is_external(type_name, &self.file.package) {
            self.data.add_external_dependency(type_name);
        }
    }

    fn map_entry_type(&self, field: &FieldDescriptor) -> MapEntryType {
        let type_name = field.type_string();
        MapEntryType {
            is_external: is_external(&type_name, &self.file.package),
            type_name: type_name.into(),
        }
    }
}
