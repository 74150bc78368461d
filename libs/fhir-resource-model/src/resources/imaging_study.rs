//! ImagingStudy resource
//!
//! A study holds series, a series holds instances. Either level may be
//! absent; see [`crate::traversal`] for walking across studies.

use super::impl_domain_resource;
use crate::datatypes::Coding;
use crate::descriptor::{FieldDescriptor, TypeDescriptor};
use crate::element::impl_element;
use crate::extension::Extension;
use crate::reference::ResourceReference;
use crate::resource::Resource;
use crate::traversal::{count_mid_level, flatten, flatten_mid};
use serde::{Deserialize, Serialize};

/// A set of images produced in a single study
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagingStudy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contained: Option<Vec<Resource>>,

    /// Formal identifier for the study (DICOM Study Instance UID)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Who the images are of
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<ResourceReference>,

    /// Institution-generated description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Each study has one or more series of instances
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<ImagingStudySeries>>,
}

/// Each study has one or more series of instances
///
/// Backbone element for ImagingStudy.series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagingStudySeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Numeric identifier of this series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,

    /// The modality of the instances in the series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modality: Option<Coding>,

    /// Formal identifier for this series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// A single SOP instance from the series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<Vec<ImagingStudySeriesInstance>>,
}

/// A single SOP instance from the series
///
/// Backbone element for ImagingStudy.series.instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagingStudySeriesInstance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// The number of this instance in the series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,

    /// Formal identifier for this instance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// DICOM class type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sop_class: Option<String>,
}

pub(crate) static DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    name: "ImagingStudy",
    fields: &[
        FieldDescriptor::single("uid", "oid"),
        FieldDescriptor::single("patient", "Reference"),
        FieldDescriptor::single("description", "string"),
        FieldDescriptor::repeating("series", "BackboneElement"),
    ],
};

impl_element!(ImagingStudy, ImagingStudySeries, ImagingStudySeriesInstance);
impl_domain_resource!(ImagingStudy);

impl ImagingStudy {
    /// Series as a slice
    pub fn series_list(&self) -> &[ImagingStudySeries] {
        self.series.as_deref().unwrap_or(&[])
    }

    /// Add a series to the study
    pub fn add_series(&mut self, series: ImagingStudySeries) {
        self.series.get_or_insert_with(Vec::new).push(series);
    }

    /// All series across the given studies, study by study
    pub fn list_series<'a, I>(
        studies: I,
    ) -> impl Iterator<Item = &'a ImagingStudySeries> + Clone + 'a
    where
        I: IntoIterator<Item = &'a ImagingStudy>,
        I::IntoIter: Clone + 'a,
    {
        flatten_mid(studies, series_of)
    }

    /// All instances across the given studies, study by study then series by series
    pub fn list_instances<'a, I>(
        studies: I,
    ) -> impl Iterator<Item = &'a ImagingStudySeriesInstance> + Clone + 'a
    where
        I: IntoIterator<Item = &'a ImagingStudy>,
        I::IntoIter: Clone + 'a,
    {
        flatten(studies, series_of, instances_of)
    }

    /// Number of series across the given studies
    pub fn count_series<'a, I>(studies: I) -> usize
    where
        I: IntoIterator<Item = &'a ImagingStudy>,
    {
        count_mid_level(studies, series_of)
    }
}

impl ImagingStudySeries {
    /// Add an instance to the series
    pub fn add_instance(&mut self, instance: ImagingStudySeriesInstance) {
        self.instance.get_or_insert_with(Vec::new).push(instance);
    }
}

impl ImagingStudySeriesInstance {
    pub fn with_uid(uid: impl Into<String>) -> Self {
        Self {
            uid: Some(uid.into()),
            ..Default::default()
        }
    }
}

fn series_of(study: &ImagingStudy) -> Option<&[ImagingStudySeries]> {
    study.series.as_deref()
}

fn instances_of(series: &ImagingStudySeries) -> Option<&[ImagingStudySeriesInstance]> {
    series.instance.as_deref()
}
