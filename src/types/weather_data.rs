//! The top-level timeline document.

use crate::access::record::weather_record;
use crate::types::day::Day;
use crate::types::station::Station;
use std::collections::HashMap;

weather_record! {
    #[record(kind = "weather data", key = resolved_address)]
    /// A complete timeline document: the snapshot every addressing operation works on.
    ///
    /// The snapshot itself is a [`crate::Record`] too, so its top-level fields can be read,
    /// written and projected by wire name like those of a day or an hour. Its identifying
    /// field is `resolvedAddress`, which a projection always keeps.
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_timeline::{Record, WeatherData};
    ///
    /// let json = r#"{"resolvedAddress": "Paris, France", "latitude": 48.85, "tzoffset": 1.0}"#;
    /// let data: WeatherData = serde_json::from_str(json).unwrap();
    ///
    /// let slim = data.project(&["latitude"]);
    /// assert_eq!(slim.resolved_address, "Paris, France");
    /// assert_eq!(slim.latitude, 48.85);
    /// assert_eq!(slim.tzoffset, 0.0);
    /// ```
    pub struct WeatherData {
        /// Number of records the request was billed for.
        "queryCost" => query_cost: i64,
        "latitude" => latitude: f64,
        "longitude" => longitude: f64,
        /// The address the API resolved the requested location to.
        "resolvedAddress" => resolved_address: String,
        /// The location as it was requested.
        "address" => address: String,
        /// IANA timezone name of the location (e.g. `"America/Los_Angeles"`).
        "timezone" => timezone: String,
        /// Offset of the location's timezone from UTC, in hours.
        "tzoffset" => tzoffset: f64,
        "description" => description: String,
        /// Day records in document order. Not guaranteed to be sorted by date.
        "days" => days: Vec<Day>,
        "stations" => stations: HashMap<String, Station>,
    }
}
