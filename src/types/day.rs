//! The daily record of a timeline document.

use crate::access::record::weather_record;
use crate::types::event::Event;
use crate::types::hour::Hour;

weather_record! {
    #[record(kind = "day", key = datetime)]
    /// Aggregated weather for one calendar date, including its hourly records.
    ///
    /// The `datetime` string identifies the day inside [`crate::WeatherData::days`].
    /// Uniqueness is not enforced: lookups by key return the first matching day.
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_timeline::{Day, Record};
    ///
    /// let json = r#"{"datetime": "2024-01-01", "temp": 52.6, "preciptype": null}"#;
    /// let day: Day = serde_json::from_str(json).unwrap();
    ///
    /// assert_eq!(day.key(), "2024-01-01");
    /// assert_eq!(day.temp, 52.6);
    /// assert!(day.preciptype.is_empty());
    /// assert!(day.hours.is_empty());
    /// ```
    pub struct Day {
        /// Date, `YYYY-MM-DD`.
        "datetime" => datetime: String,
        "datetimeEpoch" => datetime_epoch: i64,
        "tempmax" => tempmax: f64,
        "tempmin" => tempmin: f64,
        /// Mean temperature.
        "temp" => temp: f64,
        "feelslikemax" => feelslikemax: f64,
        "feelslikemin" => feelslikemin: f64,
        "feelslike" => feelslike: f64,
        "dew" => dew: f64,
        "humidity" => humidity: f64,
        "precip" => precip: f64,
        "precipprob" => precipprob: f64,
        /// Share of hours with non-zero precipitation, in percent.
        "precipcover" => precipcover: f64,
        "preciptype" => preciptype: Vec<String>,
        "snow" => snow: f64,
        "snowdepth" => snowdepth: f64,
        "windgust" => windgust: f64,
        "windspeed" => windspeed: f64,
        "winddir" => winddir: f64,
        "pressure" => pressure: f64,
        "cloudcover" => cloudcover: f64,
        "visibility" => visibility: f64,
        "solarradiation" => solarradiation: f64,
        "solarenergy" => solarenergy: f64,
        "uvindex" => uvindex: f64,
        "severerisk" => severerisk: f64,
        /// Local sunrise time, `HH:MM:SS`.
        "sunrise" => sunrise: String,
        "sunriseEpoch" => sunrise_epoch: i64,
        "sunset" => sunset: String,
        "sunsetEpoch" => sunset_epoch: i64,
        /// Fractional lunation: 0 is a new moon, 0.5 a full moon.
        "moonphase" => moonphase: f64,
        "conditions" => conditions: String,
        "description" => description: String,
        "icon" => icon: String,
        "stations" => stations: Vec<String>,
        "source" => source: String,
        /// Hourly records of this day, in document order.
        "hours" => hours: Vec<Hour>,
        /// Severe weather events reported for this day.
        "events" => events: Vec<Event>,
    }
}
