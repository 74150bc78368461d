//! FHIR resource model
//!
//! This crate provides the typed in-memory core of a FHIR resource model.
//!
//! # Module Organization
//!
//! - `element`, `extension`: every node carries an id and URI-keyed extensions
//! - `primitive`, `datatypes`: primitive and composite data types
//! - `resource`, `resources`: the closed set of resource variants and their descriptors
//! - `reference`: contained vs. external references and contained resolution
//! - `entry`, `bundle`: polymorphic entries with a typed view
//! - `traversal`: flattening of nested, optionally-absent repeating elements
//!
//! # Concurrency
//!
//! Nothing here locks, blocks or performs I/O. Mutations go through `&mut`
//! borrows; hosts sharing a record between threads synchronize access to it
//! themselves.
//!
//! # Example
//!
//! ```rust
//! use ferrum_resource_model::{
//!     DataValue, DomainResource, ExtensionStore, Patient, Resource, TypedResourceEntry,
//! };
//!
//! let mut patient = Patient::new();
//! patient.add_contained(Patient::with_id("pat1"));
//! patient.set_extension("http://example.org/ext/vip", true);
//!
//! assert!(patient.find_contained_resource("#pat1").is_some());
//! assert_eq!(
//!     patient.get_extension("http://example.org/ext/vip"),
//!     Some(&DataValue::from(true))
//! );
//!
//! let entry = TypedResourceEntry::with_resource(patient);
//! assert!(entry.resource().unwrap().is_some());
//! assert!(matches!(entry.untyped_resource(), Some(Resource::Patient(_))));
//! ```

pub mod bundle;
pub mod datatypes;
pub mod descriptor;
pub mod element;
pub mod entry;
pub mod error;
pub mod extension;
pub mod primitive;
pub mod reference;
pub mod resource;
pub mod resources;
pub mod traversal;

// Re-export commonly used types
pub use bundle::*;
pub use datatypes::*;
pub use descriptor::{FieldDescriptor, TypeDescriptor};
pub use element::Element;
pub use entry::*;
pub use error::{Error, Result};
pub use extension::*;
pub use primitive::*;
pub use reference::{AsReference, ReferenceKind, ResourceReference};
pub use resource::*;
pub use resources::*;
