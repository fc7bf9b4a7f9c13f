//! Addressing a single record inside an ordered collection.

use crate::access::error::AccessError;
use crate::access::record::Record;
use chrono::{NaiveDate, NaiveTime};
use log::{debug, log_enabled, warn, Level};
use serde_json::Value;
use std::fmt;

/// The address of one record inside an ordered collection of days or hours.
///
/// A locator either names the record by its identifying `datetime` string or points at
/// it by position. It is a transient value: build one per call and discard it.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use weather_timeline::Locator;
///
/// assert_eq!(Locator::from("2024-01-02"), Locator::Key("2024-01-02".to_string()));
/// assert_eq!(Locator::from(3usize), Locator::Index(3));
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// assert_eq!(Locator::from(date), Locator::Key("2024-01-02".to_string()));
///
/// let time = NaiveTime::from_hms_opt(1, 0, 0).unwrap();
/// assert_eq!(Locator::from(time), Locator::Key("01:00:00".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    /// Matches the first record whose `datetime` equals the key.
    Key(String),
    /// Matches the record at this position in document order.
    Index(usize),
}

impl Locator {
    /// Finds the position of the addressed record in `records`.
    ///
    /// # Errors
    ///
    /// * [`AccessError::NotFound`] if no record has the key.
    /// * [`AccessError::IndexOutOfRange`] if the index is not below `records.len()`.
    pub fn position<R: Record>(&self, records: &[R]) -> Result<usize, AccessError> {
        match self {
            Locator::Key(key) => {
                let position = records
                    .iter()
                    .position(|record| record.key() == key)
                    .ok_or_else(|| AccessError::NotFound {
                        record: R::KIND,
                        key: key.clone(),
                    })?;
                if log_enabled!(Level::Warn) {
                    let duplicates = count_duplicates(&records[position + 1..], key);
                    if duplicates > 0 {
                        warn!(
                            "{} {} records share key '{}', using the first one at index {}",
                            duplicates + 1,
                            R::KIND,
                            key,
                            position
                        );
                    }
                }
                debug!("Resolved {} key '{}' to index {}", R::KIND, key, position);
                Ok(position)
            }
            Locator::Index(index) if *index < records.len() => Ok(*index),
            Locator::Index(index) => Err(AccessError::IndexOutOfRange {
                record: R::KIND,
                index: *index,
                len: records.len(),
            }),
        }
    }

    /// Resolves the locator to a reference to the addressed record.
    ///
    /// The record is borrowed, so it cannot be changed through the result; changes are
    /// made on a copy and written back through [`crate::access::navigator`].
    pub fn resolve<'a, R: Record>(&self, records: &'a [R]) -> Result<&'a R, AccessError> {
        let position = self.position(records)?;
        Ok(&records[position])
    }
}

fn count_duplicates<R: Record>(records: &[R], key: &str) -> usize {
    records.iter().filter(|record| record.key() == key).count()
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Key(key) => write!(f, "'{}'", key),
            Locator::Index(index) => write!(f, "#{}", index),
        }
    }
}

impl From<&str> for Locator {
    fn from(key: &str) -> Self {
        Locator::Key(key.to_string())
    }
}

impl From<String> for Locator {
    fn from(key: String) -> Self {
        Locator::Key(key)
    }
}

impl From<&String> for Locator {
    fn from(key: &String) -> Self {
        Locator::Key(key.clone())
    }
}

impl From<usize> for Locator {
    fn from(index: usize) -> Self {
        Locator::Index(index)
    }
}

impl From<&Locator> for Locator {
    fn from(locator: &Locator) -> Self {
        locator.clone()
    }
}

/// Day key in the API's `YYYY-MM-DD` form.
impl From<NaiveDate> for Locator {
    fn from(date: NaiveDate) -> Self {
        Locator::Key(date.format("%Y-%m-%d").to_string())
    }
}

/// Hour key in the API's `HH:MM:SS` form.
impl From<NaiveTime> for Locator {
    fn from(time: NaiveTime) -> Self {
        Locator::Key(time.format("%H:%M:%S").to_string())
    }
}

/// Builds a locator from untyped input such as a JSON request body.
///
/// Strings become [`Locator::Key`], non-negative integers become [`Locator::Index`].
/// Anything else (negative or fractional numbers, booleans, `null`, arrays, objects) is
/// rejected with [`AccessError::InvalidLocatorType`].
impl TryFrom<&Value> for Locator {
    type Error = AccessError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(key) => Ok(Locator::Key(key.clone())),
            Value::Number(number) => number
                .as_u64()
                .and_then(|index| usize::try_from(index).ok())
                .map(Locator::Index)
                .ok_or_else(|| AccessError::InvalidLocatorType(value.to_string())),
            other => Err(AccessError::InvalidLocatorType(other.to_string())),
        }
    }
}

impl TryFrom<Value> for Locator {
    type Error = AccessError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Locator::try_from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::day::Day;
    use crate::types::hour::Hour;
    use serde_json::json;

    fn day(datetime: &str, temp: f64) -> Day {
        Day {
            datetime: datetime.to_string(),
            temp,
            ..Default::default()
        }
    }

    fn days() -> Vec<Day> {
        vec![
            day("2024-01-01", 52.6),
            day("2024-01-02", 54.0),
            day("2024-01-03", 49.5),
        ]
    }

    #[test]
    fn test_resolve_by_key() {
        let days = days();
        let found = Locator::from("2024-01-02").resolve(&days).unwrap();
        assert_eq!(found.temp, 54.0);
        assert_eq!(Locator::from("2024-01-03").position(&days), Ok(2));
    }

    #[test]
    fn test_resolve_by_key_returns_first_match() {
        let mut days = days();
        days.push(day("2024-01-02", 60.0));
        let found = Locator::from("2024-01-02").resolve(&days).unwrap();
        assert_eq!(found.temp, 54.0);
    }

    #[test]
    fn test_count_duplicates() {
        let mut days = days();
        days.push(day("2024-01-02", 60.0));
        assert_eq!(count_duplicates(&days, "2024-01-02"), 2);
        assert_eq!(count_duplicates(&days[2..], "2024-01-02"), 1);
        assert_eq!(count_duplicates(&days, "2024-03-01"), 0);
    }

    #[test]
    fn test_resolve_missing_key() {
        assert_eq!(
            Locator::from("2024-03-01").resolve(&days()),
            Err(AccessError::NotFound {
                record: "day",
                key: "2024-03-01".to_string()
            })
        );
    }

    #[test]
    fn test_resolve_by_index() {
        let days = days();
        for (index, expected) in days.iter().enumerate() {
            assert_eq!(Locator::Index(index).resolve(&days), Ok(expected));
        }
    }

    #[test]
    fn test_resolve_index_out_of_range() {
        let days = days();
        assert_eq!(
            Locator::Index(3).resolve(&days),
            Err(AccessError::IndexOutOfRange {
                record: "day",
                index: 3,
                len: 3
            })
        );
        let hours: Vec<Hour> = Vec::new();
        assert!(matches!(
            Locator::Index(0).resolve(&hours),
            Err(AccessError::IndexOutOfRange { record: "hour", len: 0, .. })
        ));
    }

    #[test]
    fn test_date_and_time_conversions() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(Locator::from(date).resolve(&days()).unwrap().temp, 54.0);
        let time = NaiveTime::from_hms_opt(13, 5, 0).unwrap();
        assert_eq!(Locator::from(time), Locator::Key("13:05:00".to_string()));
    }

    #[test]
    fn test_try_from_json_value() {
        assert_eq!(
            Locator::try_from(&json!("2024-01-01")),
            Ok(Locator::Key("2024-01-01".to_string()))
        );
        assert_eq!(Locator::try_from(json!(4)), Ok(Locator::Index(4)));

        let invalid_values = [
            json!(-1),
            json!(1.5),
            json!(true),
            json!(null),
            json!(["a"]),
            json!({}),
        ];
        for invalid in invalid_values {
            assert!(
                matches!(
                    Locator::try_from(&invalid),
                    Err(AccessError::InvalidLocatorType(_))
                ),
                "{invalid} should be rejected"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Locator::from("01:00:00").to_string(), "'01:00:00'");
        assert_eq!(Locator::Index(2).to_string(), "#2");
    }
}
