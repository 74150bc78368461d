//! Extensions and the per-element extension store
//!
//! An extension attaches a typed value to any element under a URI, without
//! schema changes. Several extensions may share a URI; their relative order
//! is preserved. URIs are compared as opaque, case-sensitive strings.
//!
//! Every operation on [`ExtensionStore`] borrows the owning element, so each
//! one is a single update of its extension sequence. Callers sharing a
//! record across threads must provide their own synchronization.

use crate::datatypes::{CodeableConcept, Coding, Identifier};
use crate::element::{impl_element, Element};
#[cfg(feature = "decimal")]
use crate::primitive::FhirDecimal;
use crate::primitive::{Code, FhirBoolean, FhirDateTime, FhirString, FhirUri, Integer};
use crate::reference::ResourceReference;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Optional additional information attached to an element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Identifies the meaning of the extension
    pub url: String,

    /// Value of the extension, keyed `value<Type>`.
    ///
    /// Required: an extension that carries only nested extensions and no
    /// `value<Type>` key is rejected when deserializing.
    #[serde(flatten)]
    pub value: DataValue,
}

impl Extension {
    pub fn new(url: impl Into<String>, value: impl Into<DataValue>) -> Self {
        Self {
            id: None,
            extension: Vec::new(),
            url: url.into(),
            value: value.into(),
        }
    }
}

impl_element!(Extension);

/// Value of an extension: one of the primitive or composite data types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataValue {
    #[serde(rename = "valueBoolean")]
    Boolean(FhirBoolean),
    #[serde(rename = "valueInteger")]
    Integer(Integer),
    /// Serialized as a decimal string (`"1.50"`) so the scale survives;
    /// both JSON numbers and strings are accepted on input.
    #[cfg(feature = "decimal")]
    #[serde(rename = "valueDecimal")]
    Decimal(FhirDecimal),
    #[serde(rename = "valueString")]
    String(FhirString),
    #[serde(rename = "valueCode")]
    Code(Code),
    #[serde(rename = "valueUri")]
    Uri(FhirUri),
    #[serde(rename = "valueDateTime")]
    DateTime(FhirDateTime),
    #[serde(rename = "valueCoding")]
    Coding(Coding),
    #[serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[serde(rename = "valueIdentifier")]
    Identifier(Identifier),
    #[serde(rename = "valueReference")]
    Reference(ResourceReference),
}

impl DataValue {
    /// FHIR type code of the value
    pub fn type_code(&self) -> &'static str {
        match self {
            DataValue::Boolean(_) => "boolean",
            DataValue::Integer(_) => "integer",
            #[cfg(feature = "decimal")]
            DataValue::Decimal(_) => "decimal",
            DataValue::String(_) => "string",
            DataValue::Code(_) => "code",
            DataValue::Uri(_) => "uri",
            DataValue::DateTime(_) => "dateTime",
            DataValue::Coding(_) => "Coding",
            DataValue::CodeableConcept(_) => "CodeableConcept",
            DataValue::Identifier(_) => "Identifier",
            DataValue::Reference(_) => "Reference",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DataValue::Boolean(b) => b.value,
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            DataValue::Integer(i) => i.value,
            _ => None,
        }
    }

    #[cfg(feature = "decimal")]
    pub fn as_decimal(&self) -> Option<rust_decimal::Decimal> {
        match self {
            DataValue::Decimal(d) => d.value,
            _ => None,
        }
    }

    /// String content of the string-like variants (string, code, uri, dateTime)
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::String(s) | DataValue::Code(s) | DataValue::Uri(s) => s.as_str(),
            DataValue::DateTime(dt) => dt.as_str(),
            _ => None,
        }
    }

    pub fn as_coding(&self) -> Option<&Coding> {
        match self {
            DataValue::Coding(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&ResourceReference> {
        match self {
            DataValue::Reference(r) => Some(r),
            _ => None,
        }
    }

    /// The value as an element, for access to its own id and extensions
    pub fn as_element(&self) -> &dyn Element {
        match self {
            DataValue::Boolean(v) => v,
            DataValue::Integer(v) => v,
            #[cfg(feature = "decimal")]
            DataValue::Decimal(v) => v,
            DataValue::String(v) | DataValue::Code(v) | DataValue::Uri(v) => v,
            DataValue::DateTime(v) => v,
            DataValue::Coding(v) => v,
            DataValue::CodeableConcept(v) => v,
            DataValue::Identifier(v) => v,
            DataValue::Reference(v) => v,
        }
    }
}

impl From<FhirBoolean> for DataValue {
    fn from(value: FhirBoolean) -> Self {
        DataValue::Boolean(value)
    }
}

impl From<Integer> for DataValue {
    fn from(value: Integer) -> Self {
        DataValue::Integer(value)
    }
}

#[cfg(feature = "decimal")]
impl From<FhirDecimal> for DataValue {
    fn from(value: FhirDecimal) -> Self {
        DataValue::Decimal(value)
    }
}

/// Plain strings become `valueString`; use [`DataValue::Code`] or
/// [`DataValue::Uri`] explicitly for the other string-backed types.
impl From<FhirString> for DataValue {
    fn from(value: FhirString) -> Self {
        DataValue::String(value)
    }
}

impl From<FhirDateTime> for DataValue {
    fn from(value: FhirDateTime) -> Self {
        DataValue::DateTime(value)
    }
}

impl From<Coding> for DataValue {
    fn from(value: Coding) -> Self {
        DataValue::Coding(value)
    }
}

impl From<CodeableConcept> for DataValue {
    fn from(value: CodeableConcept) -> Self {
        DataValue::CodeableConcept(value)
    }
}

impl From<Identifier> for DataValue {
    fn from(value: Identifier) -> Self {
        DataValue::Identifier(value)
    }
}

impl From<ResourceReference> for DataValue {
    fn from(value: ResourceReference) -> Self {
        DataValue::Reference(value)
    }
}

impl From<bool> for DataValue {
    fn from(value: bool) -> Self {
        DataValue::Boolean(FhirBoolean::new(value))
    }
}

impl From<i32> for DataValue {
    fn from(value: i32) -> Self {
        DataValue::Integer(Integer::new(value))
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::String(FhirString::new(value))
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        DataValue::String(FhirString::new(value))
    }
}

/// URI-keyed access to the extensions of an element.
///
/// Implemented for every [`Element`].
pub trait ExtensionStore: Element {
    /// First extension with the given URI
    fn extension(&self, uri: &str) -> Option<&Extension> {
        self.extensions().iter().find(|e| e.url == uri)
    }

    /// Value of the first extension with the given URI
    fn get_extension(&self, uri: &str) -> Option<&DataValue> {
        self.extension(uri).map(|e| &e.value)
    }

    /// Values of all extensions with the given URI, in insertion order
    fn get_extensions(&self, uri: &str) -> Vec<&DataValue> {
        self.extensions()
            .iter()
            .filter(|e| e.url == uri)
            .map(|e| &e.value)
            .collect()
    }

    fn has_extension(&self, uri: &str) -> bool {
        self.extensions().iter().any(|e| e.url == uri)
    }

    /// Replace all extensions with the given URI by a single new one
    fn set_extension(&mut self, uri: impl Into<String>, value: impl Into<DataValue>) -> &mut Extension {
        let uri = uri.into();
        let extensions = self.extensions_mut();
        let before = extensions.len();
        extensions.retain(|e| e.url != uri);
        trace!(url = %uri, replaced = before - extensions.len(), "set extension");

        let index = extensions.len();
        extensions.push(Extension::new(uri, value));
        &mut extensions[index]
    }

    /// Append an extension, keeping existing ones with the same URI
    fn add_extension(&mut self, uri: impl Into<String>, value: impl Into<DataValue>) -> &mut Extension {
        let extension = Extension::new(uri, value);
        trace!(url = %extension.url, "add extension");

        let extensions = self.extensions_mut();
        let index = extensions.len();
        extensions.push(extension);
        &mut extensions[index]
    }

    /// Remove all extensions with the given URI; no-op if there are none
    fn remove_extension(&mut self, uri: &str) {
        let extensions = self.extensions_mut();
        let before = extensions.len();
        extensions.retain(|e| e.url != uri);
        if extensions.len() != before {
            trace!(url = uri, removed = before - extensions.len(), "remove extension");
        }
    }
}

impl<E: Element + ?Sized> ExtensionStore for E {}
