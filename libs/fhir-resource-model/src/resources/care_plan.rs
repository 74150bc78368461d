//! CarePlan resource

use super::impl_domain_resource;
use crate::descriptor::{FieldDescriptor, TypeDescriptor};
use crate::element::impl_element;
use crate::extension::Extension;
use crate::primitive::{Code, FhirString};
use crate::reference::ResourceReference;
use crate::resource::Resource;
use serde::{Deserialize, Serialize};

/// Healthcare plan for a patient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contained: Option<Vec<Resource>>,

    /// Who care plan is for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<ResourceReference>,

    /// planned | active | completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Code>,

    /// Summary of nature of plan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<FhirString>,
}

pub(crate) static DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    name: "CarePlan",
    fields: &[
        FieldDescriptor::single("patient", "Reference"),
        FieldDescriptor::single("status", "code"),
        FieldDescriptor::single("notes", "string"),
    ],
};

impl_element!(CarePlan);
impl_domain_resource!(CarePlan);

impl CarePlan {
    /// Care plan for the given patient reference
    pub fn for_patient(patient: ResourceReference) -> Self {
        Self {
            patient: Some(patient),
            ..Default::default()
        }
    }
}
