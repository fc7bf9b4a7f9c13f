//! The hourly record nested inside each [`crate::Day`].

use crate::access::record::weather_record;

weather_record! {
    #[record(kind = "hour", key = datetime)]
    /// A single hour-of-day observation or forecast.
    ///
    /// Field names on the wire (and for [`crate::Record::get_field`]) are the Timeline
    /// API names given on the left of each declaration. Units follow the `unitGroup`
    /// the document was requested with.
    pub struct Hour {
        /// Time of day, `HH:MM:SS`, in the location's timezone. Identifies the hour
        /// within its day.
        "datetime" => datetime: String,
        /// Seconds since the Unix epoch.
        "datetimeEpoch" => datetime_epoch: i64,
        "temp" => temp: f64,
        "feelslike" => feelslike: f64,
        /// Relative humidity in percent.
        "humidity" => humidity: f64,
        "dew" => dew: f64,
        "precip" => precip: f64,
        /// Chance of precipitation in percent.
        "precipprob" => precipprob: f64,
        "snow" => snow: f64,
        "snowdepth" => snowdepth: f64,
        /// Kinds of precipitation expected or observed (`rain`, `snow`, `freezingrain`, `ice`).
        "preciptype" => preciptype: Vec<String>,
        "windgust" => windgust: f64,
        "windspeed" => windspeed: f64,
        /// Wind direction in degrees.
        "winddir" => winddir: f64,
        "pressure" => pressure: f64,
        "visibility" => visibility: f64,
        "cloudcover" => cloudcover: f64,
        "solarradiation" => solarradiation: f64,
        "solarenergy" => solarenergy: f64,
        "uvindex" => uvindex: f64,
        "severerisk" => severerisk: f64,
        "conditions" => conditions: String,
        "icon" => icon: String,
        "stations" => stations: Vec<String>,
        /// Data source: `obs`, `fcst`, `histfcst` or `stats`.
        "source" => source: String,
    }
}
