//! Resource entries and their typed view
//!
//! A [`ResourceEntry`] stores a polymorphic [`Resource`]. A
//! [`TypedResourceEntry<T>`] is the same store seen through a statically
//! expected variant `T`: reads check the stored variant tag, writes through
//! either view land in the one underlying entry.

use crate::error::{Error, Result};
use crate::resource::{Resource, ResourceType, ResourceVariant};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use tracing::debug;

/// Entry holding a resource of any variant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceEntry {
    /// Entry identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Human readable entry title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Full URL for the entry (relative to the base URL, or absolute)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,

    /// The resource in this entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
}

impl ResourceEntry {
    pub fn new(resource: impl Into<Resource>) -> Self {
        Self {
            resource: Some(resource.into()),
            ..Default::default()
        }
    }

    /// Variant of the stored resource, if any
    pub fn resource_type(&self) -> Option<ResourceType> {
        self.resource.as_ref().map(Resource::resource_type)
    }
}

/// A [`ResourceEntry`] whose resource is expected to be a `T`.
///
/// The untyped accessors (and `Deref` to [`ResourceEntry`]) accept any
/// variant. After a different variant is stored through them, typed reads
/// fail with [`Error::TypeMismatch`] until a `T` is stored again.
pub struct TypedResourceEntry<T> {
    entry: ResourceEntry,
    _variant: PhantomData<fn() -> T>,
}

impl<T: ResourceVariant> TypedResourceEntry<T> {
    pub fn new() -> Self {
        Self {
            entry: ResourceEntry::default(),
            _variant: PhantomData,
        }
    }

    pub fn with_resource(resource: T) -> Self {
        let mut entry = Self::new();
        entry.set_resource(resource);
        entry
    }

    /// The stored resource as a `T`.
    ///
    /// `Ok(None)` when the entry holds no resource.
    pub fn resource(&self) -> Result<Option<&T>> {
        match &self.entry.resource {
            None => Ok(None),
            Some(resource) => T::from_ref(resource)
                .map(Some)
                .ok_or_else(|| mismatch::<T>(resource.resource_type())),
        }
    }

    pub fn resource_mut(&mut self) -> Result<Option<&mut T>> {
        match self.entry.resource.as_mut() {
            None => Ok(None),
            Some(resource) => {
                let actual = resource.resource_type();
                T::from_mut(resource)
                    .map(Some)
                    .ok_or_else(|| mismatch::<T>(actual))
            }
        }
    }

    pub fn set_resource(&mut self, resource: T) {
        self.entry.resource = Some(resource.into_resource());
    }

    /// The stored resource, whatever its variant
    pub fn untyped_resource(&self) -> Option<&Resource> {
        self.entry.resource.as_ref()
    }

    /// Store a resource of any variant
    pub fn set_untyped_resource(&mut self, resource: impl Into<Resource>) {
        self.entry.resource = Some(resource.into());
    }

    /// Whether a typed read would succeed
    pub fn is_well_typed(&self) -> bool {
        self.entry
            .resource
            .as_ref()
            .map_or(true, |resource| T::is_instance(resource))
    }

    pub fn entry(&self) -> &ResourceEntry {
        &self.entry
    }

    pub fn entry_mut(&mut self) -> &mut ResourceEntry {
        &mut self.entry
    }

    pub fn into_entry(self) -> ResourceEntry {
        self.entry
    }
}

fn mismatch<T: ResourceVariant>(actual: ResourceType) -> Error {
    debug!(expected = %T::RESOURCE_TYPE, %actual, "typed entry holds another resource type");
    Error::TypeMismatch {
        expected: T::RESOURCE_TYPE,
        actual,
    }
}

impl<T: ResourceVariant> Default for TypedResourceEntry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TypedResourceEntry<T> {
    fn clone(&self) -> Self {
        Self {
            entry: self.entry.clone(),
            _variant: PhantomData,
        }
    }
}

impl<T> PartialEq for TypedResourceEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entry == other.entry
    }
}

impl<T: ResourceVariant> fmt::Debug for TypedResourceEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedResourceEntry")
            .field("expected", &T::RESOURCE_TYPE)
            .field("entry", &self.entry)
            .finish()
    }
}

impl<T> Deref for TypedResourceEntry<T> {
    type Target = ResourceEntry;

    fn deref(&self) -> &ResourceEntry {
        &self.entry
    }
}

impl<T> DerefMut for TypedResourceEntry<T> {
    fn deref_mut(&mut self) -> &mut ResourceEntry {
        &mut self.entry
    }
}

impl<T> From<TypedResourceEntry<T>> for ResourceEntry {
    fn from(typed: TypedResourceEntry<T>) -> Self {
        typed.entry
    }
}

/// Narrow an entry, checking the stored variant once
impl<T: ResourceVariant> TryFrom<ResourceEntry> for TypedResourceEntry<T> {
    type Error = Error;

    fn try_from(entry: ResourceEntry) -> Result<Self> {
        if let Some(resource) = &entry.resource {
            if !T::is_instance(resource) {
                return Err(mismatch::<T>(resource.resource_type()));
            }
        }
        Ok(Self {
            entry,
            _variant: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::resources::{CarePlan, ImagingStudy, Patient};

    #[test]
    fn test_typed_read() {
        let entry = TypedResourceEntry::with_resource(Patient::with_id("p1"));
        let patient = entry.resource().unwrap().unwrap();
        assert_eq!(patient.id(), Some("p1"));
        assert!(entry.is_well_typed());
    }

    #[test]
    fn test_empty_entry_reads_none() {
        let entry = TypedResourceEntry::<Patient>::new();
        assert!(entry.resource().unwrap().is_none());
        assert!(entry.is_well_typed());
    }

    #[test]
    fn test_untyped_write_breaks_typed_read() {
        let mut entry = TypedResourceEntry::with_resource(Patient::new());
        entry.set_untyped_resource(CarePlan::default());

        let err = entry.resource().unwrap_err();
        assert!(err.is_type_mismatch());
        assert!(entry.resource_mut().is_err());
        assert!(!entry.is_well_typed());
        assert!(entry.untyped_resource().unwrap().is::<CarePlan>());

        entry.set_resource(Patient::with_id("again"));
        assert_eq!(entry.resource().unwrap().unwrap().id(), Some("again"));
    }

    #[test]
    fn test_views_share_storage() {
        let mut typed = TypedResourceEntry::with_resource(Patient::new());
        typed.resource_mut().unwrap().unwrap().set_id(Some("shared".to_string()));

        let wide: &mut ResourceEntry = &mut typed;
        assert_eq!(wide.resource.as_ref().and_then(|r| r.id()), Some("shared"));

        wide.resource = Some(ImagingStudy::default().into());
        assert_eq!(typed.resource_type(), Some(ResourceType::ImagingStudy));
        assert!(typed.resource().is_err());
    }

    #[test]
    fn test_entry_accessors() {
        let mut typed = TypedResourceEntry::with_resource(Patient::with_id("p1"));
        typed.entry_mut().full_url = Some("urn:uuid:p1".to_string());
        assert_eq!(typed.entry().full_url.as_deref(), Some("urn:uuid:p1"));
        assert_eq!(typed.entry().resource_type(), Some(ResourceType::Patient));

        typed.entry_mut().resource = Some(CarePlan::default().into());
        assert!(typed.resource().is_err());

        let entry = typed.into_entry();
        assert_eq!(entry.full_url.as_deref(), Some("urn:uuid:p1"));
        assert!(entry.resource.as_ref().unwrap().is::<CarePlan>());
    }

    #[test]
    fn test_try_from_entry() {
        let entry = ResourceEntry::new(CarePlan::default());
        assert!(TypedResourceEntry::<CarePlan>::try_from(entry.clone()).is_ok());

        let err = TypedResourceEntry::<Patient>::try_from(entry).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                expected: ResourceType::Patient,
                actual: ResourceType::CarePlan
            }
        ));

        let empty = TypedResourceEntry::<Patient>::try_from(ResourceEntry::default()).unwrap();
        let widened: ResourceEntry = empty.into();
        assert!(widened.resource.is_none());
    }
}
