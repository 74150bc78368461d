//! References between resources
//!
//! A reference is a string. It points at a contained resource iff it starts
//! with `#` (the rest is the contained resource's local id); anything else is
//! an external reference and is opaque here. No URL parsing is done.
//!
//! Contained resources are owned by value by their container, so resolution
//! is a scan of the container's `contained` list by id, never a stored
//! pointer.

use crate::element::{impl_element, Element};
use crate::error::{Error, Result};
use crate::extension::Extension;
use crate::resource::{DomainResource, Resource, ResourceVariant};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Kind of a reference string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// `#localId`, resolved against the `contained` list of the referencing resource
    Contained,
    /// Any other string
    External,
}

/// Classify a reference string. Never fails.
pub fn classify(reference: &str) -> ReferenceKind {
    if reference.starts_with('#') {
        ReferenceKind::Contained
    } else {
        ReferenceKind::External
    }
}

/// Local id of a contained reference (the part after `#`, possibly empty)
pub fn local_id_of(reference: &str) -> Result<&str> {
    reference
        .strip_prefix('#')
        .ok_or_else(|| Error::malformed_reference(reference, "not a contained reference"))
}

/// Optional pre-check for callers that want to reject unusable reference
/// strings before classifying them.
pub fn validate(reference: &str) -> Result<ReferenceKind> {
    if reference.trim().is_empty() {
        return Err(Error::malformed_reference(reference, "empty reference"));
    }
    if reference.trim() != reference {
        return Err(Error::malformed_reference(
            reference,
            "leading or trailing whitespace",
        ));
    }
    Ok(classify(reference))
}

/// Anything that can supply a reference string
pub trait AsReference {
    fn reference_str(&self) -> Option<&str>;
}

impl AsReference for str {
    fn reference_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsReference for String {
    fn reference_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsReference for ResourceReference {
    fn reference_str(&self) -> Option<&str> {
        self.reference.as_deref()
    }
}

impl<R: AsReference + ?Sized> AsReference for &R {
    fn reference_str(&self) -> Option<&str> {
        (**self).reference_str()
    }
}

/// Find the contained resource a reference points at.
///
/// External references, references without a string, `"#"`, and containers
/// without contained resources all yield `None`. The first match in
/// contained order wins.
pub fn resolve<'a, D, R>(root: &'a D, reference: &R) -> Option<&'a Resource>
where
    D: DomainResource + ?Sized,
    R: AsReference + ?Sized,
{
    let local_id = contained_local_id(reference)?;
    let found = root
        .contained()
        .unwrap_or_default()
        .iter()
        .find(|r| r.id() == Some(local_id));

    if found.is_none() {
        debug!(local_id, "contained resource not found");
    }
    found
}

/// Mutable variant of [`resolve`]
pub fn resolve_mut<'a, D, R>(root: &'a mut D, reference: &R) -> Option<&'a mut Resource>
where
    D: DomainResource + ?Sized,
    R: AsReference + ?Sized,
{
    let local_id = contained_local_id(reference)?;
    let found = root
        .contained_mut()
        .as_deref_mut()
        .unwrap_or_default()
        .iter_mut()
        .find(|r| r.id() == Some(local_id));

    if found.is_none() {
        debug!(local_id, "contained resource not found");
    }
    found
}

/// Resolve a contained reference and narrow it to the expected variant
pub fn resolve_as<'a, T, D, R>(root: &'a D, reference: &R) -> Option<&'a T>
where
    T: ResourceVariant,
    D: DomainResource + ?Sized,
    R: AsReference + ?Sized,
{
    resolve(root, reference).and_then(T::from_ref)
}

fn contained_local_id<R: AsReference + ?Sized>(reference: &R) -> Option<&str> {
    let reference = reference.reference_str()?;
    match classify(reference) {
        ReferenceKind::Contained => local_id_of(reference).ok().filter(|id| !id.is_empty()),
        ReferenceKind::External => {
            debug!(reference, "external reference is not resolved locally");
            None
        }
    }
}

/// A reference from one resource to another
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Relative, internal or absolute URL reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Text alternative for the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl_element!(ResourceReference);

impl ResourceReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Default::default()
        }
    }

    /// Reference to a contained resource with the given local id
    pub fn to_contained(local_id: &str) -> Self {
        Self::new(format!("#{local_id}"))
    }

    /// The raw reference string
    pub fn url(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn kind(&self) -> Option<ReferenceKind> {
        self.url().map(classify)
    }

    pub fn is_contained_reference(&self) -> bool {
        self.kind() == Some(ReferenceKind::Contained)
    }

    /// Local id if this is a contained reference
    pub fn local_id(&self) -> Option<&str> {
        self.url().and_then(|r| local_id_of(r).ok())
    }
}
