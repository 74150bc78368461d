//! Concrete resource shapes
//!
//! One module per resource, each with its backbone elements and its
//! [`TypeDescriptor`](crate::descriptor::TypeDescriptor).

pub mod care_plan;
pub mod conformance;
pub mod imaging_study;
pub mod patient;

pub use care_plan::CarePlan;
pub use conformance::Conformance;
pub use imaging_study::{ImagingStudy, ImagingStudySeries, ImagingStudySeriesInstance};
pub use patient::Patient;

/// Implement [`DomainResource`](crate::resource::DomainResource) for structs
/// with a `contained: Option<Vec<Resource>>` field.
macro_rules! impl_domain_resource {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::resource::DomainResource for $ty {
                fn contained(&self) -> Option<&[$crate::resource::Resource]> {
                    self.contained.as_deref()
                }

                fn contained_mut(&mut self) -> &mut Option<Vec<$crate::resource::Resource>> {
                    &mut self.contained
                }
            }
        )+
    };
}

pub(crate) use impl_domain_resource;
