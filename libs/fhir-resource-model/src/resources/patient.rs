//! Patient resource

use super::impl_domain_resource;
use crate::datatypes::Identifier;
use crate::descriptor::{FieldDescriptor, TypeDescriptor};
use crate::element::impl_element;
use crate::extension::Extension;
use crate::primitive::{Code, FhirBoolean};
use crate::reference::ResourceReference;
use crate::resource::Resource;
use serde::{Deserialize, Serialize};

/// Demographics and other administrative information about a person
/// receiving care
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Logical id of this artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Contained, inline resources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contained: Option<Vec<Resource>>,

    /// An identifier for this patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Whether this patient's record is in active use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<FhirBoolean>,

    /// male | female | other | unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Code>,

    /// Organization that is the custodian of the patient record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managing_organization: Option<ResourceReference>,
}

pub(crate) static DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    name: "Patient",
    fields: &[
        FieldDescriptor::repeating("identifier", "Identifier"),
        FieldDescriptor::single("active", "boolean"),
        FieldDescriptor::single("gender", "code"),
        FieldDescriptor::single("managingOrganization", "Reference"),
    ],
};

impl_element!(Patient);
impl_domain_resource!(Patient);

impl Patient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Identifiers as a slice
    pub fn identifiers(&self) -> &[Identifier] {
        self.identifier.as_deref().unwrap_or(&[])
    }
}
