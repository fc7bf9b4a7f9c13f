//! Two-level addressing (day, then hour within the day) and write-back of changed
//! records into their owning collection.
//!
//! Every function resolves its locators first and only touches the collection once
//! resolution succeeded, so a failed call leaves the collection exactly as it was.
//! Resolution errors are passed through unchanged.

use crate::access::error::AccessError;
use crate::access::locator::Locator;
use crate::access::record::Record;
use crate::types::day::Day;
use crate::types::hour::Hour;

/// Looks up the hour addressed by `hour` inside the day addressed by `day`.
pub fn get_at<'a>(
    days: &'a [Day],
    day: &Locator,
    hour: &Locator,
) -> Result<&'a Hour, AccessError> {
    let day = day.resolve(days)?;
    hour.resolve(&day.hours)
}

/// Replaces the addressed record with `record` as a whole.
pub fn set_record<R: Record>(
    records: &mut [R],
    locator: &Locator,
    record: R,
) -> Result<(), AccessError> {
    let position = locator.position(records)?;
    records[position] = record;
    Ok(())
}

/// Reads the addressed record, passes it to `update` and stores the record it returns
/// in the same slot.
///
/// Reading and writing back happen in one call, so a changed copy can't be left
/// unsaved. If `update` fails, its error is returned and the collection is unchanged.
pub fn update_record<R, F>(
    records: &mut [R],
    locator: &Locator,
    update: F,
) -> Result<(), AccessError>
where
    R: Record,
    F: FnOnce(&R) -> Result<R, AccessError>,
{
    let position = locator.position(records)?;
    let updated = update(&records[position])?;
    records[position] = updated;
    Ok(())
}

/// Replaces the hour addressed by `hour` inside the day addressed by `day`.
///
/// The stored hour keeps the identity of the slot it lands in: for a positional locator
/// its `datetime` is taken from the hour being replaced, for a key locator from the key.
/// A replacement can therefore never move a record to a different time.
pub fn set_at(
    days: &mut [Day],
    day: &Locator,
    hour: &Locator,
    mut new_hour: Hour,
) -> Result<(), AccessError> {
    let day_position = day.position(days)?;
    let hours = &mut days[day_position].hours;
    let position = hour.position(hours)?;
    match hour {
        Locator::Key(key) => new_hour.set_key(key),
        Locator::Index(_) => new_hour.set_key(hours[position].key()),
    }
    hours[position] = new_hour;
    Ok(())
}

/// Read-modify-write of a single hour, see [`update_record`].
///
/// Unlike [`set_at`] the record returned by `update` is stored as is, so an explicit
/// change of the hour's `datetime` is kept.
pub fn update_at<F>(
    days: &mut [Day],
    day: &Locator,
    hour: &Locator,
    update: F,
) -> Result<(), AccessError>
where
    F: FnOnce(&Hour) -> Result<Hour, AccessError>,
{
    let day_position = day.position(days)?;
    update_record(&mut days[day_position].hours, hour, update)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::field::FieldValue;

    fn hour(datetime: &str, temp: f64) -> Hour {
        Hour {
            datetime: datetime.to_string(),
            temp,
            ..Default::default()
        }
    }

    fn days() -> Vec<Day> {
        vec![
            Day {
                datetime: "2024-01-01".to_string(),
                temp: 52.6,
                tempmax: 58.1,
                hours: vec![hour("00:00:00", 49.0), hour("01:00:00", 48.4)],
                ..Default::default()
            },
            Day {
                datetime: "2024-01-02".to_string(),
                temp: 54.0,
                tempmax: 59.0,
                hours: vec![hour("00:00:00", 51.2), hour("01:00:00", 50.7)],
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_get_at() {
        let days = days();
        let found = get_at(&days, &"2024-01-02".into(), &Locator::Index(1)).unwrap();
        assert_eq!(found.temp, 50.7);
        let found = get_at(&days, &Locator::Index(0), &"00:00:00".into()).unwrap();
        assert_eq!(found.temp, 49.0);
    }

    #[test]
    fn test_get_at_propagates_errors_unchanged() {
        let days = days();
        assert_eq!(
            get_at(&days, &"2024-03-01".into(), &Locator::Index(0)),
            Err(AccessError::NotFound {
                record: "day",
                key: "2024-03-01".to_string()
            })
        );
        assert_eq!(
            get_at(&days, &Locator::Index(0), &"23:00:00".into()),
            Err(AccessError::NotFound {
                record: "hour",
                key: "23:00:00".to_string()
            })
        );
        assert_eq!(
            get_at(&days, &Locator::Index(0), &Locator::Index(24)),
            Err(AccessError::IndexOutOfRange {
                record: "hour",
                index: 24,
                len: 2
            })
        );
    }

    #[test]
    fn test_set_record_replaces_whole_day() {
        let mut days = days();
        let replacement = Day {
            datetime: "2024-01-05".to_string(),
            temp: 40.0,
            ..Default::default()
        };
        set_record(&mut days, &Locator::Index(1), replacement.clone()).unwrap();
        assert_eq!(days[1], replacement);

        set_record(&mut days, &"2024-01-05".into(), Day::default()).unwrap();
        assert_eq!(days[1], Day::default());
        assert_eq!(days[0].temp, 52.6);
    }

    #[test]
    fn test_set_record_failure_leaves_collection_unchanged() {
        let mut days = days();
        let result = set_record(&mut days, &Locator::Index(5), Day::default());
        assert_eq!(
            result,
            Err(AccessError::IndexOutOfRange {
                record: "day",
                index: 5,
                len: 2
            })
        );
        assert_eq!(days, self::days());
    }

    #[test]
    fn test_set_at_by_index_keeps_slot_identity() {
        let mut days = days();
        set_at(
            &mut days,
            &Locator::Index(1),
            &Locator::Index(0),
            hour("17:00:00", 33.3),
        )
        .unwrap();
        assert_eq!(days[1].hours[0], hour("00:00:00", 33.3));
    }

    #[test]
    fn test_set_at_by_key_uses_key_as_identity() {
        let mut days = days();
        set_at(
            &mut days,
            &Locator::Index(1),
            &"01:00:00".into(),
            hour("", 50.0),
        )
        .unwrap();
        assert_eq!(days[1].hours[1], hour("01:00:00", 50.0));
        assert_eq!(days[0].hours[1].temp, 48.4);
    }

    #[test]
    fn test_set_at_missing_hour() {
        let mut days = days();
        let result = set_at(
            &mut days,
            &Locator::Index(0),
            &"05:00:00".into(),
            Hour::default(),
        );
        assert!(matches!(
            result,
            Err(AccessError::NotFound { record: "hour", .. })
        ));
        assert_eq!(days, self::days());
    }

    #[test]
    fn test_update_record_writes_back() {
        let mut days = days();
        update_record(&mut days, &"2024-01-01".into(), |day| {
            day.with_field("temp", 45.5)
        })
        .unwrap();
        assert_eq!(days[0].temp, 45.5);
    }

    #[test]
    fn test_update_record_failed_update_is_not_written() {
        let mut days = days();
        let result = update_record(&mut days, &Locator::Index(0), |day| {
            day.with_field("temp", "warm")
        });
        assert!(matches!(result, Err(AccessError::TypeMismatch { .. })));
        assert_eq!(days, self::days());
    }

    #[test]
    fn test_update_at() {
        let mut days = days();
        update_at(&mut days, &Locator::Index(1), &"01:00:00".into(), |hour| {
            hour.with_field("temp", 50.0)
        })
        .unwrap();
        assert_eq!(
            get_at(&days, &Locator::Index(1), &"01:00:00".into()).unwrap().temp,
            50.0
        );
    }

    #[test]
    fn test_scenario_read_write_project() {
        let mut days = days();

        let day = Locator::from("2024-01-02").resolve(&days).unwrap();
        assert_eq!(day.get_as::<f64>("temp"), Ok(54.0));

        update_at(&mut days, &Locator::Index(1), &"01:00:00".into(), |hour| {
            hour.with_field("temp", 50.0)
        })
        .unwrap();
        let hour = get_at(&days, &Locator::Index(1), &"01:00:00".into()).unwrap();
        assert_eq!(hour.get_field("temp").unwrap(), FieldValue::Float(50.0));

        assert!(matches!(
            Locator::from("2024-03-01").resolve(&days),
            Err(AccessError::NotFound { .. })
        ));
        assert!(matches!(
            Locator::Index(5).resolve(&days),
            Err(AccessError::IndexOutOfRange { index: 5, len: 2, .. })
        ));

        let projected = Locator::Index(0)
            .resolve(&days)
            .unwrap()
            .project(&["temp", "tempmax"]);
        assert_eq!(
            projected,
            Day {
                datetime: "2024-01-01".to_string(),
                temp: 52.6,
                tempmax: 58.1,
                ..Default::default()
            }
        );
    }
}
