//! Dynamically typed field values and the closed set of field types a weather
//! record can declare.

use crate::types::day::Day;
use crate::types::event::Event;
use crate::types::hour::Hour;
use crate::types::station::Station;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Declared type of a record field.
///
/// Every field in the [`crate::WeatherData`], [`crate::Day`] and [`crate::Hour`] schemas
/// has exactly one of
/// these types. A write through [`crate::Record::with_field`] only succeeds when the
/// supplied [`FieldValue`] carries the same tag; there is no implicit widening
/// (an `Int` is never accepted for a `Float` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Int,
    Float,
    Text,
    TextList,
    Hours,
    Events,
    Days,
    Stations,
}

impl FieldType {
    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            FieldType::Int => "i64",
            FieldType::Float => "f64",
            FieldType::Text => "String",
            FieldType::TextList => "Vec<String>",
            FieldType::Hours => "Vec<Hour>",
            FieldType::Events => "Vec<Event>",
            FieldType::Days => "Vec<Day>",
            FieldType::Stations => "HashMap<String, Station>",
        }
    }
}

/// Formats a `FieldType` as the Rust type it stands for.
///
/// # Examples
///
/// ```
/// use weather_timeline::FieldType;
///
/// assert_eq!(FieldType::Float.to_string(), "f64");
/// assert_eq!(FieldType::TextList.to_string(), "Vec<String>");
/// ```
impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// The value of a single record field, tagged with its type.
///
/// Returned by [`crate::Record::get_field`] and accepted by
/// [`crate::Record::with_field`]. Callers that know the concrete type can
/// use [`crate::Record::get_as`] instead of matching on the variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
    TextList(Vec<String>),
    Hours(Vec<Hour>),
    Events(Vec<Event>),
    Days(Vec<Day>),
    Stations(HashMap<String, Station>),
}

impl FieldValue {
    /// The type tag of the value held.
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Int(_) => FieldType::Int,
            FieldValue::Float(_) => FieldType::Float,
            FieldValue::Text(_) => FieldType::Text,
            FieldValue::TextList(_) => FieldType::TextList,
            FieldValue::Hours(_) => FieldType::Hours,
            FieldValue::Events(_) => FieldType::Events,
            FieldValue::Days(_) => FieldType::Days,
            FieldValue::Stations(_) => FieldType::Stations,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// A Rust type that can be stored in a record field.
///
/// Implemented for every concrete field type. The record schema uses it to
/// derive each field's [`FieldType`] from the struct definition, and to move
/// values in and out of [`FieldValue`].
pub trait FieldKind: Sized {
    const FIELD_TYPE: FieldType;

    fn to_value(&self) -> FieldValue;

    /// Unwraps `value` if it holds `Self`, otherwise hands it back unchanged.
    fn from_value(value: FieldValue) -> Result<Self, FieldValue>;
}

macro_rules! field_kind {
    ($ty:ty, $variant:ident) => {
        impl FieldKind for $ty {
            const FIELD_TYPE: FieldType = FieldType::$variant;

            fn to_value(&self) -> FieldValue {
                FieldValue::$variant(self.clone())
            }

            fn from_value(value: FieldValue) -> Result<Self, FieldValue> {
                match value {
                    FieldValue::$variant(inner) => Ok(inner),
                    other => Err(other),
                }
            }
        }

        impl From<$ty> for FieldValue {
            fn from(value: $ty) -> Self {
                FieldValue::$variant(value)
            }
        }
    };
}

field_kind!(i64, Int);
field_kind!(f64, Float);
field_kind!(String, Text);
field_kind!(Vec<String>, TextList);
field_kind!(Vec<Hour>, Hours);
field_kind!(Vec<Event>, Events);
field_kind!(Vec<Day>, Days);
field_kind!(HashMap<String, Station>, Stations);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_reports_its_type() {
        assert_eq!(FieldValue::from(52.6).field_type(), FieldType::Float);
        assert_eq!(
            FieldValue::from(1_704_067_200i64).field_type(),
            FieldType::Int
        );
        assert_eq!(FieldValue::from("Clear").field_type(), FieldType::Text);
        assert_eq!(
            FieldValue::from(vec!["rain".to_string()]).field_type(),
            FieldType::TextList
        );
        assert_eq!(
            FieldValue::from(Vec::<Hour>::new()).field_type(),
            FieldType::Hours
        );
    }

    #[test]
    fn test_from_value_rejects_other_variants_without_coercion() {
        assert_eq!(f64::from_value(FieldValue::Float(3.5)), Ok(3.5));
        // Integers are not widened to floats.
        assert_eq!(f64::from_value(FieldValue::Int(3)), Err(FieldValue::Int(3)));
        assert_eq!(
            i64::from_value(FieldValue::Text("3".into())),
            Err(FieldValue::Text("3".into()))
        );
    }

    #[test]
    fn test_field_type_display() {
        assert_eq!(FieldType::Int.to_string(), "i64");
        assert_eq!(FieldType::Hours.to_string(), "Vec<Hour>");
        assert_eq!(FieldType::Events.to_string(), "Vec<Event>");
        assert_eq!(FieldType::Stations.to_string(), "HashMap<String, Station>");
    }
}
