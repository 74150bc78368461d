//! FHIR Bundle model
//!
//! A container of resource entries, with typed access to the resources of a
//! single variant.

use crate::entry::ResourceEntry;
use crate::error::{Error, Result};
use crate::resource::ResourceVariant;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// FHIR Bundle resource
///
/// A container for a collection of resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    /// Resource type - always "Bundle"
    #[serde(default = "default_resource_type")]
    pub resource_type: String,

    /// Logical id of this artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Indicates the purpose of this bundle - how it was intended to be used
    #[serde(rename = "type")]
    pub bundle_type: BundleType,

    /// If search, the total number of matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,

    /// Entries in the bundle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<Vec<ResourceEntry>>,
}

fn default_resource_type() -> String {
    "Bundle".to_string()
}

/// Type of Bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BundleType {
    Document,
    Message,
    Transaction,
    TransactionResponse,
    Batch,
    BatchResponse,
    History,
    Searchset,
    Collection,
}

impl Bundle {
    /// Create a new Bundle with minimal required fields
    pub fn new(bundle_type: BundleType) -> Self {
        Self {
            resource_type: default_resource_type(),
            id: None,
            bundle_type,
            total: None,
            entry: None,
        }
    }

    /// Parse from JSON Value
    pub fn from_value(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone()).map_err(Error::from)
    }

    /// Convert to JSON Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(Error::from)
    }

    /// Get the number of entries in the bundle
    pub fn entry_count(&self) -> usize {
        self.entry.as_ref().map(|e| e.len()).unwrap_or(0)
    }

    /// Get entries as a slice
    pub fn entries(&self) -> &[ResourceEntry] {
        self.entry.as_deref().unwrap_or(&[])
    }

    /// Get entries as a mutable slice
    pub fn entries_mut(&mut self) -> &mut [ResourceEntry] {
        self.entry.as_deref_mut().unwrap_or(&mut [])
    }

    /// Add an entry to the bundle
    pub fn add_entry(&mut self, entry: ResourceEntry) {
        self.entry.get_or_insert_with(Vec::new).push(entry);
    }

    /// Resources of variant `T`, in entry order; other variants are skipped
    pub fn typed_resources<'a, T: ResourceVariant + 'a>(
        &'a self,
    ) -> impl Iterator<Item = &'a T> + 'a {
        self.entries()
            .iter()
            .filter_map(|e| e.resource.as_ref())
            .filter_map(T::from_ref)
    }
}
