//! Decoded protobuf descriptor tree.
//!
//! This is the already-parsed input to the generator: files containing
//! messages, enums and services. Type references inside fields and methods
//! are fully-qualified names such as `.pkg.Outer.Inner`.

/// Scalar or reference kind of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Double,
    Float,
    Int64,
    Uint64,
    Int32,
    Fixed64,
    Fixed32,
    Bool,
    String,
    Bytes,
    Uint32,
    Sfixed32,
    Sfixed64,
    Sint32,
    Sint64,
    Message,
    Enum,
}

impl FieldKind {
    /// Lower-case proto name of a scalar kind, `None` for references.
    pub fn scalar_name(self) -> Option<&'static str> {
        Some(match self {
            FieldKind::Double => "double",
            FieldKind::Float => "float",
            FieldKind::Int64 => "int64",
            FieldKind::Uint64 => "uint64",
            FieldKind::Int32 => "int32",
            FieldKind::Fixed64 => "fixed64",
            FieldKind::Fixed32 => "fixed32",
            FieldKind::Bool => "bool",
            FieldKind::String => "string",
            FieldKind::Bytes => "bytes",
            FieldKind::Uint32 => "uint32",
            FieldKind::Sfixed32 => "sfixed32",
            FieldKind::Sfixed64 => "sfixed64",
            FieldKind::Sint32 => "sint32",
            FieldKind::Sint64 => "sint64",
            FieldKind::Message | FieldKind::Enum => return None,
        })
    }

    /// Whether the field refers to another declared type.
    pub fn is_reference(self) -> bool {
        matches!(self, FieldKind::Message | FieldKind::Enum)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub number: i32,
    pub kind: FieldKind,
    /// Fully-qualified referenced type, set for message and enum fields.
    pub type_name: Option<String>,
    pub repeated: bool,
}

impl FieldDescriptor {
    /// A scalar field.
    pub fn scalar(name: impl Into<String>, number: i32, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            number,
            kind,
            type_name: None,
            repeated: false,
        }
    }

    /// A field referencing a message.
    pub fn message(name: impl Into<String>, number: i32, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number,
            kind: FieldKind::Message,
            type_name: Some(type_name.into()),
            repeated: false,
        }
    }

    /// A field referencing an enum.
    pub fn enumeration(name: impl Into<String>, number: i32, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number,
            kind: FieldKind::Enum,
            type_name: Some(type_name.into()),
            repeated: false,
        }
    }

    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    /// Type string used for map keys and values: the referenced name for
    /// message and enum fields, the scalar name otherwise.
    pub fn type_string(&self) -> String {
        match (&self.type_name, self.kind.scalar_name()) {
            (Some(name), _) => name.clone(),
            (None, Some(scalar)) => scalar.to_string(),
            (None, None) => String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnumDescriptor {
    pub name: String,
    pub values: Vec<String>,
}

impl EnumDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageDescriptor {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
    pub nested_messages: Vec<MessageDescriptor>,
    pub nested_enums: Vec<EnumDescriptor>,
    /// Set on the synthetic entry message protoc emits for `map<K, V>`.
    pub is_map_entry: bool,
}

impl MessageDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The synthetic `<Name>Entry` message for a map field.
    pub fn map_entry(name: impl Into<String>, key: FieldDescriptor, value: FieldDescriptor) -> Self {
        Self {
            name: name.into(),
            fields: vec![key, value],
            is_map_entry: true,
            ..Self::default()
        }
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn nested(mut self, message: MessageDescriptor) -> Self {
        self.nested_messages.push(message);
        self
    }

    pub fn nested_enum(mut self, e: EnumDescriptor) -> Self {
        self.nested_enums.push(e);
        self
    }

    /// The `key` and `value` fields of a map entry.
    pub fn map_key_value(&self) -> Option<(&FieldDescriptor, &FieldDescriptor)> {
        if !self.is_map_entry {
            return None;
        }
        let key = self.fields.iter().find(|f| f.name == "key" || f.number == 1)?;
        let value = self.fields.iter().find(|f| f.name == "value" || f.number == 2)?;
        Some((key, value))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: String,
    pub input_type: String,
    pub output_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub name: String,
    pub methods: Vec<MethodDescriptor>,
}

impl ServiceDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    pub fn method(
        mut self,
        name: impl Into<String>,
        input_type: impl Into<String>,
        output_type: impl Into<String>,
    ) -> Self {
        self.methods.push(MethodDescriptor {
            name: name.into(),
            input_type: input_type.into(),
            output_type: output_type.into(),
        });
        self
    }
}

/// One `.proto` source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Path of the source file within the proto tree, e.g. `api/v1/a.proto`.
    pub name: String,
    pub package: String,
    pub messages: Vec<MessageDescriptor>,
    pub enums: Vec<EnumDescriptor>,
    pub services: Vec<ServiceDescriptor>,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            ..Self::default()
        }
    }

    pub fn message(mut self, message: MessageDescriptor) -> Self {
        self.messages.push(message);
        self
    }

    pub fn enumeration(mut self, e: EnumDescriptor) -> Self {
        self.enums.push(e);
        self
    }

    pub fn service(mut self, service: ServiceDescriptor) -> Self {
        self.services.push(service);
        self
    }
}
