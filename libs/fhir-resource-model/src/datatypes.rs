//! FHIR composite data types
//!
//! Reused across resources and as extension values.

use crate::element::impl_element;
use crate::extension::Extension;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coding - a reference to a code defined by a terminology system
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_selected: Option<bool>,
}

impl Coding {
    pub fn new(system: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            code: Some(code.into()),
            ..Default::default()
        }
    }

    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }
}

/// Short summary of the coding, e.g. ` Code="123" Display="Fever" System="http://snomed.info/sct"`.
///
/// Empty parts are left out.
impl fmt::Display for Coding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            ("Code", &self.code),
            ("Display", &self.display),
            ("System", &self.system),
        ];
        for (label, value) in parts {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                write!(f, " {label}=\"{value}\"")?;
            }
        }
        Ok(())
    }
}

/// Concept - reference to a terminology or just text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeableConcept {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coding: Option<Vec<Coding>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CodeableConcept {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Codings as a slice
    pub fn codings(&self) -> &[Coding] {
        self.coding.as_deref().unwrap_or(&[])
    }
}

/// An identifier intended for computation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// usual | official | temp | secondary
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Identifier {
    pub fn new(system: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

impl_element!(Coding, CodeableConcept, Identifier);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coding_display() {
        let coding = Coding::new("http://snomed.info/sct", "386661006").with_display("Fever");
        assert_eq!(
            coding.to_string(),
            " Code=\"386661006\" Display=\"Fever\" System=\"http://snomed.info/sct\""
        );
    }

    #[test]
    fn test_coding_display_skips_empty_parts() {
        let coding = Coding {
            code: Some("x".to_string()),
            display: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(coding.to_string(), " Code=\"x\"");
        assert_eq!(Coding::default().to_string(), "");
    }

    #[test]
    fn test_deserialize_identifier() {
        let identifier: Identifier = serde_json::from_value(json!({
            "use": "official",
            "system": "urn:oid:2.16.840.1.113883.2.4.6.3",
            "value": "123456789"
        }))
        .unwrap();

        assert_eq!(identifier.use_.as_deref(), Some("official"));
        assert_eq!(identifier.value.as_deref(), Some("123456789"));
        assert!(identifier.extension.is_empty());
    }
}
