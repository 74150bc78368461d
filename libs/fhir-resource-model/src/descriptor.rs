//! Type descriptors
//!
//! Static description of the fields a resource variant declares, the way a
//! generated model layer would publish it.

/// One declared field of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// JSON property name
    pub name: &'static str,
    /// FHIR type code (e.g. "boolean", "Reference")
    pub type_code: &'static str,
    /// Max cardinality is greater than one
    pub repeating: bool,
}

impl FieldDescriptor {
    pub const fn single(name: &'static str, type_code: &'static str) -> Self {
        Self {
            name,
            type_code,
            repeating: false,
        }
    }

    pub const fn repeating(name: &'static str, type_code: &'static str) -> Self {
        Self {
            name,
            type_code,
            repeating: true,
        }
    }

    /// Whether the field holds a primitive (simple) value
    pub fn is_simple(&self) -> bool {
        is_primitive_type(self.type_code)
    }
}

/// Declared field shape of a resource variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl TypeDescriptor {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields holding primitive values
    pub fn simple_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.is_simple())
    }
}

/// Check if a type code names a FHIR primitive
pub fn is_primitive_type(type_code: &str) -> bool {
    matches!(
        type_code,
        "boolean"
            | "integer"
            | "unsignedInt"
            | "positiveInt"
            | "integer64"
            | "decimal"
            | "string"
            | "code"
            | "id"
            | "markdown"
            | "uri"
            | "url"
            | "canonical"
            | "oid"
            | "uuid"
            | "base64Binary"
            | "instant"
            | "date"
            | "dateTime"
            | "time"
    )
}
