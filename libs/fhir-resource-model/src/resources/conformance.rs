//! Conformance resource
//!
//! Its simple-valued fields are exposed both as elements (the public fields)
//! and as plain values (the accessor methods).

use super::impl_domain_resource;
use crate::descriptor::{FieldDescriptor, TypeDescriptor};
use crate::element::impl_element;
use crate::extension::Extension;
use crate::primitive::{
    set_simple_value, set_simple_values, simple_value, simple_values, Code, FhirBoolean,
    FhirDateTime, FhirString,
};
use crate::resource::Resource;
use serde::{Deserialize, Serialize};

/// A conformance statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conformance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contained: Option<Vec<Resource>>,

    /// Informal name for this conformance statement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<FhirString>,

    /// Publishing Organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<FhirString>,

    /// Publication Date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<FhirDateTime>,

    /// True if application accepts unknown elements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_unknown: Option<FhirBoolean>,

    /// Formats supported (xml | json | mime type)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Vec<Code>>,
}

pub(crate) static DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    name: "Conformance",
    fields: &[
        FieldDescriptor::single("name", "string"),
        FieldDescriptor::single("publisher", "string"),
        FieldDescriptor::single("date", "dateTime"),
        FieldDescriptor::single("acceptUnknown", "boolean"),
        FieldDescriptor::repeating("format", "code"),
    ],
};

impl_element!(Conformance);
impl_domain_resource!(Conformance);

impl Conformance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publisher(&self) -> Option<&str> {
        simple_value(&self.publisher).map(String::as_str)
    }

    pub fn set_publisher(&mut self, publisher: Option<impl Into<String>>) {
        set_simple_value(&mut self.publisher, publisher.map(Into::into));
    }

    pub fn accept_unknown(&self) -> Option<bool> {
        simple_value(&self.accept_unknown).copied()
    }

    pub fn set_accept_unknown(&mut self, accept_unknown: Option<bool>) {
        set_simple_value(&mut self.accept_unknown, accept_unknown);
    }

    pub fn format(&self) -> Option<Vec<&str>> {
        simple_values(&self.format).map(|formats| formats.into_iter().map(String::as_str).collect())
    }

    pub fn set_format<I, S>(&mut self, formats: Option<I>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        set_simple_values(
            &mut self.format,
            formats.map(|formats| formats.into_iter().map(Into::into)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_unknown() {
        let mut c = Conformance::new();
        assert!(c.accept_unknown().is_none());

        c.set_accept_unknown(Some(true));
        assert_eq!(c.accept_unknown(), Some(true));
        assert_eq!(c.accept_unknown.as_ref().and_then(|e| e.value), Some(true));
    }

    #[test]
    fn test_publisher() {
        let mut c = Conformance::new();
        c.publisher = Some(FhirString::new("Furore"));
        assert_eq!(c.publisher(), Some("Furore"));

        c.set_publisher(None::<String>);
        assert!(c.publisher.is_none());

        c.set_publisher(Some("Furore"));
        assert!(c.publisher.is_some());
    }

    #[test]
    fn test_format() {
        let mut c = Conformance::new();
        c.set_format(Some(["json", "xml"]));

        let elements = c.format.as_ref().unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].as_str(), Some("json"));

        c.format = Some(vec![Code::new("csv")]);
        assert_eq!(c.format(), Some(vec!["csv"]));

        c.set_format(None::<Vec<String>>);
        assert!(c.format().is_none());
    }
}
