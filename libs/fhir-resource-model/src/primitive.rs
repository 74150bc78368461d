//! FHIR primitive types
//!
//! A primitive is an element like any other: besides its value it may carry
//! an `id` and extensions, and the value itself may be absent (an element
//! that only carries extensions).

use crate::element::Element;
use crate::error::{Error, Result};
use crate::extension::Extension;
use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A primitive value wrapped in an element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Primitive<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
}

pub type FhirBoolean = Primitive<bool>;
pub type Integer = Primitive<i32>;
#[cfg(feature = "decimal")]
pub type FhirDecimal = Primitive<rust_decimal::Decimal>;
pub type FhirString = Primitive<String>;
pub type Code = Primitive<String>;
pub type FhirUri = Primitive<String>;
pub type FhirDateTime = Primitive<DateTime>;

impl<T> Primitive<T> {
    /// Create a primitive element holding `value`
    pub fn new(value: impl Into<T>) -> Self {
        Self {
            id: None,
            extension: Vec::new(),
            value: Some(value.into()),
        }
    }

    /// Create a primitive element with no value
    pub fn empty() -> Self {
        Self {
            id: None,
            extension: Vec::new(),
            value: None,
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl<T> Default for Primitive<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Element for Primitive<T> {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    fn extensions(&self) -> &[Extension] {
        &self.extension
    }

    fn extensions_mut(&mut self) -> &mut Vec<Extension> {
        &mut self.extension
    }
}

impl Primitive<String> {
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl Primitive<DateTime> {
    /// Build a local date-time element from its components.
    ///
    /// See [`DateTime::from_parts`].
    pub fn from_parts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self> {
        DateTime::from_parts(year, month, day, hour, minute).map(Self::new)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.value.as_ref().map(DateTime::as_str)
    }
}

/// FHIR dateTime literal.
///
/// Partial precision is legal ("2010", "2010-01", "2010-01-01"), so the
/// literal is kept as written instead of being parsed into a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateTime(String);

impl DateTime {
    pub fn new(literal: impl Into<String>) -> Self {
        Self(literal.into())
    }

    /// Render the given local wall-clock time with second precision and the
    /// local UTC offset, e.g. `1972-11-30T15:10:00+01:00`.
    pub fn from_parts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self> {
        let local = Local
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .earliest()
            .ok_or_else(|| {
                Error::InvalidFieldValue(format!(
                    "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02} is not a valid local date-time"
                ))
            })?;

        Ok(Self(local.format("%Y-%m-%dT%H:%M:%S%:z").to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DateTime {
    fn from(literal: &str) -> Self {
        Self::new(literal)
    }
}

impl From<String> for DateTime {
    fn from(literal: String) -> Self {
        Self(literal)
    }
}

impl AsRef<str> for DateTime {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value of an optional primitive element
pub fn simple_value<T>(element: &Option<Primitive<T>>) -> Option<&T> {
    element.as_ref().and_then(|e| e.value.as_ref())
}

/// Set the value of an optional primitive element.
///
/// `None` removes the element. An existing element keeps its `id` and
/// extensions; only its value is replaced.
pub fn set_simple_value<T>(element: &mut Option<Primitive<T>>, value: Option<T>) {
    let Some(value) = value else {
        *element = None;
        return;
    };

    if let Some(existing) = element.as_mut() {
        existing.value = Some(value);
    } else {
        *element = Some(Primitive::new(value));
    }
}

/// Values of a repeating primitive element, skipping value-less entries
pub fn simple_values<T>(elements: &Option<Vec<Primitive<T>>>) -> Option<Vec<&T>> {
    elements
        .as_ref()
        .map(|elements| elements.iter().filter_map(|e| e.value.as_ref()).collect())
}

/// Replace a repeating primitive element with one element per value.
///
/// `None` removes the list.
pub fn set_simple_values<T, I>(elements: &mut Option<Vec<Primitive<T>>>, values: Option<I>)
where
    I: IntoIterator<Item = T>,
{
    *elements = values.map(|values| values.into_iter().map(|v| Primitive::new(v)).collect());
}
