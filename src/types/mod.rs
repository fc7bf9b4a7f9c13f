pub mod day;
pub mod event;
pub mod hour;
pub mod station;
pub mod weather_data;

use serde::{Deserialize, Deserializer};

/// Decodes a JSON `null` as the type's zero value.
///
/// The Timeline API sends `null` for measurements it has no value for (e.g. `preciptype`
/// on a dry day); records hold the zero value instead, so every field always has a value
/// of its declared type.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::weather_data::WeatherData;

    const DOCUMENT: &str = r#"{
        "queryCost": 2,
        "latitude": 37.7771,
        "longitude": -122.42,
        "resolvedAddress": "San Francisco, CA, United States",
        "address": "San Francisco",
        "timezone": "America/Los_Angeles",
        "tzoffset": -8.0,
        "days": [
            {
                "datetime": "2024-01-01",
                "datetimeEpoch": 1704096000,
                "tempmax": 58.1,
                "temp": 52.6,
                "preciptype": ["rain"],
                "windgust": null,
                "severerisk": 10,
                "hours": [
                    {"datetime": "00:00:00", "temp": 49.0, "preciptype": null, "stations": ["KSFO"]},
                    {"datetime": "01:00:00", "temp": 48.4, "conditions": "Overcast"}
                ],
                "events": [{"datetime": "2024-01-01 12:00:00", "type": "hail", "size": 1.5}]
            },
            {"datetime": "2024-01-02", "temp": 54.0, "hours": null}
        ],
        "stations": {
            "KSFO": {"id": "KSFO", "name": "KSFO", "distance": 2040.0, "latitude": 37.62,
                     "longitude": -122.37, "useCount": 0, "quality": 50, "contribution": 0.0}
        }
    }"#;

    #[test]
    fn test_decode_document() {
        let data: WeatherData = serde_json::from_str(DOCUMENT).unwrap();
        assert_eq!(data.query_cost, 2);
        assert_eq!(data.timezone, "America/Los_Angeles");
        assert_eq!(data.days.len(), 2);
        assert_eq!(data.stations["KSFO"].quality, Some(50));

        let first = &data.days[0];
        assert_eq!(first.datetime, "2024-01-01");
        assert_eq!(first.datetime_epoch, 1_704_096_000);
        assert_eq!(first.severerisk, 10.0);
        assert_eq!(first.events[0].event_type, "hail");
        assert_eq!(first.hours[1].conditions, "Overcast");
        assert_eq!(first.hours[0].stations, vec!["KSFO".to_string()]);
    }

    #[test]
    fn test_nulls_and_missing_fields_decode_to_zero_values() {
        let data: WeatherData = serde_json::from_str(DOCUMENT).unwrap();
        let first = &data.days[0];
        assert_eq!(first.windgust, 0.0);
        assert_eq!(first.tempmin, 0.0);
        assert!(first.hours[0].preciptype.is_empty());
        assert!(first.hours[1].preciptype.is_empty());
        assert!(data.days[1].hours.is_empty());
        assert_eq!(data.days[1].conditions, "");
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let data: WeatherData = serde_json::from_str(DOCUMENT).unwrap();
        let value = serde_json::to_value(&data.days[0]).unwrap();
        assert_eq!(value["datetimeEpoch"], 1_704_096_000);
        assert_eq!(value["hours"][1]["datetime"], "01:00:00");

        let decoded: WeatherData =
            serde_json::from_str(&serde_json::to_string(&data).unwrap()).unwrap();
        assert_eq!(decoded, data);
    }
}
