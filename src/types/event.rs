use serde::{Deserialize, Serialize};

/// A severe weather event (hail, tornado, ...) attached to a [`crate::Day`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    /// Local date and time of the event.
    pub datetime: String,
    pub datetime_epoch: Option<i64>,
    /// Event kind as reported by the API, e.g. `"hail"` or `"tornado"`.
    #[serde(rename = "type")]
    pub event_type: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Distance from the requested location.
    pub distance: Option<f64>,
    pub desc: Option<String>,
    /// Magnitude of the event (hail size, ...), if reported.
    pub size: Option<f64>,
}
