//! Error types for the resource model
//!
//! Lookups that find nothing are not errors: extension and contained-resource
//! lookups return `None`.

use crate::resource::ResourceType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Type mismatch: expected {expected} resource, found {actual}")]
    TypeMismatch {
        expected: ResourceType,
        actual: ResourceType,
    },

    #[error("Malformed reference {reference:?}: {reason}")]
    MalformedReference {
        reference: String,
        reason: &'static str,
    },

    #[error("Invalid field value: {0}")]
    InvalidFieldValue(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed_reference(reference: &str, reason: &'static str) -> Self {
        Error::MalformedReference {
            reference: reference.to_string(),
            reason,
        }
    }

    /// Check if this error is a typed-entry variant mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
