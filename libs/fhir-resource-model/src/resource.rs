//! Polymorphic resource handle
//!
//! [`Resource`] is a closed tagged union over the concrete resource shapes
//! this crate models. Narrowing to a concrete shape compares variant tags
//! exactly; there is no subtype coercion.

use crate::descriptor::TypeDescriptor;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::extension::Extension;
use crate::reference::{self, AsReference};
use crate::resources::{care_plan, conformance, imaging_study, patient};
use crate::resources::{CarePlan, Conformance, ImagingStudy, Patient};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A resource that may own contained resources.
///
/// Contained resources are owned by value. Their ids are local to this
/// container and unique within it only by convention.
pub trait DomainResource: Element {
    /// Contained resources, if the list is present
    fn contained(&self) -> Option<&[Resource]>;

    fn contained_mut(&mut self) -> &mut Option<Vec<Resource>>;

    /// Append a contained resource
    fn add_contained(&mut self, resource: impl Into<Resource>)
    where
        Self: Sized,
    {
        self.contained_mut()
            .get_or_insert_with(Vec::new)
            .push(resource.into());
    }

    /// Resolve a contained reference (`#id`) against this resource.
    ///
    /// Accepts a [`ResourceReference`](crate::ResourceReference) or a plain
    /// reference string.
    fn find_contained_resource<R: AsReference + ?Sized>(&self, reference: &R) -> Option<&Resource>
    where
        Self: Sized,
    {
        reference::resolve(self, reference)
    }

    fn find_contained_resource_mut<R: AsReference + ?Sized>(
        &mut self,
        reference: &R,
    ) -> Option<&mut Resource>
    where
        Self: Sized,
    {
        reference::resolve_mut(self, reference)
    }
}

/// A concrete resource shape, one per [`Resource`] variant.
///
/// This is the type descriptor surface of the model: it answers "is this
/// handle an instance of V?" and "what fields does V declare?".
pub trait ResourceVariant: DomainResource + Into<Resource> + Sized {
    const RESOURCE_TYPE: ResourceType;

    /// Declared field shape of this variant
    fn descriptor() -> &'static TypeDescriptor;

    fn from_ref(resource: &Resource) -> Option<&Self>;

    fn from_mut(resource: &mut Resource) -> Option<&mut Self>;

    /// Take the variant out of the handle, or give the handle back unchanged
    fn try_from_resource(resource: Resource) -> std::result::Result<Self, Resource>;

    fn into_resource(self) -> Resource {
        self.into()
    }

    /// Exact variant check
    fn is_instance(resource: &Resource) -> bool {
        resource.resource_type() == Self::RESOURCE_TYPE
    }
}

macro_rules! resource_variants {
    ($($variant:ident => $descriptor:path),+ $(,)?) => {
        /// Concrete kind of a [`Resource`]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum ResourceType {
            $($variant,)+
        }

        impl ResourceType {
            pub const ALL: &'static [ResourceType] = &[$(ResourceType::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ResourceType::$variant => stringify!($variant),)+
                }
            }

            pub fn descriptor(&self) -> &'static TypeDescriptor {
                match self {
                    $(ResourceType::$variant => &$descriptor,)+
                }
            }
        }

        /// Polymorphic resource handle
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "resourceType")]
        pub enum Resource {
            $($variant($variant),)+
        }

        impl Resource {
            pub fn resource_type(&self) -> ResourceType {
                match self {
                    $(Resource::$variant(_) => ResourceType::$variant,)+
                }
            }
        }

        impl Element for Resource {
            fn id(&self) -> Option<&str> {
                match self {
                    $(Resource::$variant(r) => r.id(),)+
                }
            }

            fn set_id(&mut self, id: Option<String>) {
                match self {
                    $(Resource::$variant(r) => r.set_id(id),)+
                }
            }

            fn extensions(&self) -> &[Extension] {
                match self {
                    $(Resource::$variant(r) => r.extensions(),)+
                }
            }

            fn extensions_mut(&mut self) -> &mut Vec<Extension> {
                match self {
                    $(Resource::$variant(r) => r.extensions_mut(),)+
                }
            }
        }

        impl DomainResource for Resource {
            fn contained(&self) -> Option<&[Resource]> {
                match self {
                    $(Resource::$variant(r) => r.contained(),)+
                }
            }

            fn contained_mut(&mut self) -> &mut Option<Vec<Resource>> {
                match self {
                    $(Resource::$variant(r) => r.contained_mut(),)+
                }
            }
        }

        $(
            impl ResourceVariant for $variant {
                const RESOURCE_TYPE: ResourceType = ResourceType::$variant;

                fn descriptor() -> &'static TypeDescriptor {
                    &$descriptor
                }

                fn from_ref(resource: &Resource) -> Option<&Self> {
                    match resource {
                        Resource::$variant(r) => Some(r),
                        _ => None,
                    }
                }

                fn from_mut(resource: &mut Resource) -> Option<&mut Self> {
                    match resource {
                        Resource::$variant(r) => Some(r),
                        _ => None,
                    }
                }

                fn try_from_resource(resource: Resource) -> std::result::Result<Self, Resource> {
                    match resource {
                        Resource::$variant(r) => Ok(r),
                        other => Err(other),
                    }
                }
            }

            impl From<$variant> for Resource {
                fn from(resource: $variant) -> Self {
                    Resource::$variant(resource)
                }
            }
        )+
    };
}

resource_variants! {
    CarePlan => care_plan::DESCRIPTOR,
    Conformance => conformance::DESCRIPTOR,
    ImagingStudy => imaging_study::DESCRIPTOR,
    Patient => patient::DESCRIPTOR,
}

impl Resource {
    /// Exact variant check
    pub fn is<T: ResourceVariant>(&self) -> bool {
        T::is_instance(self)
    }

    pub fn downcast_ref<T: ResourceVariant>(&self) -> Option<&T> {
        T::from_ref(self)
    }

    pub fn downcast_mut<T: ResourceVariant>(&mut self) -> Option<&mut T> {
        T::from_mut(self)
    }

    /// Narrow to `T`, failing with [`Error::TypeMismatch`] for any other variant
    pub fn try_into_variant<T: ResourceVariant>(self) -> Result<T> {
        let actual = self.resource_type();
        T::try_from_resource(self).map_err(|_| Error::TypeMismatch {
            expected: T::RESOURCE_TYPE,
            actual,
        })
    }

    /// Declared field shape of the runtime variant
    pub fn descriptor(&self) -> &'static TypeDescriptor {
        self.resource_type().descriptor()
    }

    /// Parse from JSON Value
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        serde_json::from_value(value.clone()).map_err(Error::from)
    }

    /// Convert to JSON Value
    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(Error::from)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ResourceType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::InvalidFieldValue(format!("unknown resource type: {s}")))
    }
}
