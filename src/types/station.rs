//! Weather station metadata referenced by a timeline document.

use serde::{Deserialize, Serialize};

/// A weather station that contributed observations to the returned data.
///
/// Stations are listed once per document in [`crate::WeatherData::stations`], keyed by
/// their identifier; days and hours reference them by that key in their `stations` field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Station {
    /// The station identifier (e.g. `"KSFO"`).
    pub id: String,
    /// Human-readable station name.
    pub name: String,
    /// Distance from the requested location, in meters.
    pub distance: Option<f64>,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Number of times the station was used for the requested period.
    pub use_count: Option<i64>,
    /// Data quality indicator reported by the API.
    pub quality: Option<i64>,
    /// Relative contribution of this station to the returned data.
    pub contribution: Option<f64>,
}
