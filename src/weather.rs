//! The main entry point: a Timeline API client that owns one weather snapshot and
//! exposes locator-based access to its days and hours.

use crate::access::error::AccessError;
use crate::access::field::FieldValue;
use crate::access::locator::Locator;
use crate::access::navigator;
use crate::access::record::Record;
use crate::error::WeatherError;
use crate::fetch::loader::{decode, TimelineLoader};
use crate::fetch::request::{TimelineRequest, UnitGroup};
use crate::types::day::Day;
use crate::types::hour::Hour;
use crate::types::weather_data::WeatherData;
use bon::bon;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::warn;
use std::fmt;
use std::path::Path;

/// Default endpoint of the Visual Crossing Timeline API.
pub const DEFAULT_BASE_URL: &str =
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline";

/// A Timeline API client holding the most recently loaded weather snapshot.
///
/// The snapshot is replaced as a whole by [`Weather::fetch_weather_data`],
/// [`Weather::load_from_file`] or [`Weather::set_weather_data`]. Individual days and
/// hours are addressed with a [`Locator`] (a `datetime` key or a position) and read or
/// written field by field through the generic [`Record`] interface.
///
/// Mutating methods take `&mut self`; to share one client between threads, wrap it in a
/// `RwLock`.
///
/// # Examples
///
/// ```rust,no_run
/// # use weather_timeline::{Weather, WeatherError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), WeatherError> {
/// let mut weather = Weather::builder().api_key("YOUR_API_KEY").build();
/// weather
///     .fetch_weather_data()
///     .location("38.95,-95.664")
///     .from_date("2024-01-01")
///     .to_date("2024-01-02")
///     .include("days,hours")
///     .call()
///     .await?;
///
/// let temp = weather.field_on_day("2024-01-02", "temp")?;
/// println!("Mean temperature on Jan 2nd: {temp:?}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Weather {
    api_key: String,
    base_url: String,
    data: WeatherData,
    loader: TimelineLoader,
}

/// Prints the API key masked.
impl fmt::Debug for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() { "" } else { "***" };
        f.debug_struct("Weather")
            .field("api_key", &api_key)
            .field("base_url", &self.base_url)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

#[bon]
impl Weather {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `.api_key(impl Into<String>)`: **Required.** The Visual Crossing API key, sent as
    ///   the `key` query parameter.
    /// * `.base_url(impl Into<String>)`: Optional. The Timeline endpoint. Defaults to
    ///   [`DEFAULT_BASE_URL`].
    /// * `.data(WeatherData)`: Optional. An initial snapshot. Defaults to an empty one.
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_timeline::{Weather, WeatherData};
    ///
    /// let weather = Weather::builder()
    ///     .api_key("YOUR_API_KEY")
    ///     .base_url("http://localhost:8080/timeline")
    ///     .data(WeatherData::default())
    ///     .build();
    /// assert!(weather.weather_data().days.is_empty());
    /// ```
    #[builder]
    pub fn new(
        #[builder(into)] api_key: String,
        #[builder(into)] base_url: Option<String>,
        data: Option<WeatherData>,
    ) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            data: data.unwrap_or_default(),
            loader: TimelineLoader::new(),
        }
    }

    /// Creates a client whose snapshot is decoded from a Timeline JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Fetch`] wrapping `FetchError::JsonParse` if `json` is not a
    /// valid timeline document.
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_timeline::Weather;
    ///
    /// let json = r#"{"days": [{"datetime": "2024-01-01", "temp": 52.6}]}"#;
    /// let weather = Weather::from_json("YOUR_API_KEY", json).unwrap();
    /// assert_eq!(weather.data_on_day("2024-01-01", &[]).unwrap().temp, 52.6);
    /// ```
    pub fn from_json(api_key: impl Into<String>, json: &str) -> Result<Self, WeatherError> {
        let data = decode(json.as_bytes())?;
        Ok(Self::builder().api_key(api_key).data(data).build())
    }

    /// Fetches weather data for a location and replaces the current snapshot with it.
    ///
    /// The response is fully decoded before the snapshot is replaced; on any failure the
    /// previous snapshot is kept as it was.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(impl Into<String>)`: **Required.** Address, partial address, ZIP code
    ///   or `"latitude,longitude"`.
    /// * `.from_date(impl Into<String>)`: Optional. Start date (`YYYY-MM-DD`) or a dynamic
    ///   period such as `"last30days"`. Without it the API returns a 15 day forecast.
    /// * `.to_date(impl Into<String>)`: Optional. End date, only used together with
    ///   `from_date`.
    /// * `.unit_group(UnitGroup)`: Optional. Defaults to [`UnitGroup::Us`].
    /// * `.include(impl Into<String>)`: Optional. Comma-separated sections, e.g.
    ///   `"days,hours"`. Omitted from the request when not set.
    /// * `.elements(Vec<String>)`: Optional. Restricts the response to these fields.
    ///   `datetime` is always added so records stay addressable.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Fetch`] if no API key is set, the request cannot be built,
    /// the network request fails, the server answers with an error status, or the body is
    /// not a valid timeline document.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use weather_timeline::{UnitGroup, Weather, WeatherError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), WeatherError> {
    /// let mut weather = Weather::builder().api_key("YOUR_API_KEY").build();
    ///
    /// // 15 day forecast in metric units
    /// weather
    ///     .fetch_weather_data()
    ///     .location("Amsterdam,NL")
    ///     .unit_group(UnitGroup::Metric)
    ///     .call()
    ///     .await?;
    /// println!("{} days fetched", weather.weather_data().days.len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn fetch_weather_data(
        &mut self,
        #[builder(into)] location: String,
        #[builder(into)] from_date: Option<String>,
        #[builder(into)] to_date: Option<String>,
        unit_group: Option<UnitGroup>,
        #[builder(into)] include: Option<String>,
        elements: Option<Vec<String>>,
    ) -> Result<(), WeatherError> {
        let request = TimelineRequest::builder()
            .location(location)
            .maybe_from_date(from_date)
            .maybe_to_date(to_date)
            .maybe_unit_group(unit_group)
            .maybe_include(include)
            .maybe_elements(elements)
            .build();
        let data = self
            .loader
            .fetch(&request, &self.base_url, &self.api_key)
            .await?;
        self.data = data;
        Ok(())
    }
}

impl Weather {
    /// Replaces the snapshot with the timeline document stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Fetch`] if the file cannot be read or decoded. The previous
    /// snapshot is kept in that case.
    pub async fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), WeatherError> {
        self.data = TimelineLoader::load_file(path.as_ref()).await?;
        Ok(())
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The current snapshot.
    pub fn weather_data(&self) -> &WeatherData {
        &self.data
    }

    pub fn set_weather_data(&mut self, data: WeatherData) {
        self.data = data;
    }

    /// Resets the snapshot to an empty document.
    pub fn clear_weather_data(&mut self) {
        self.data = WeatherData::default();
    }

    /// Returns a copy of the snapshot holding only the top-level fields named in
    /// `elements`, plus `resolvedAddress`. Listed collections (`days`, `stations`) are
    /// copied whole. An empty `elements` slice returns the snapshot unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_timeline::{Weather, WeatherData};
    ///
    /// let data = WeatherData { latitude: 38.95, longitude: -95.664, ..Default::default() };
    /// let weather = Weather::builder().api_key("KEY").data(data).build();
    ///
    /// let slim = weather.projected_weather_data(&["latitude"]);
    /// assert_eq!((slim.latitude, slim.longitude), (38.95, 0.0));
    /// ```
    pub fn projected_weather_data(&self, elements: &[&str]) -> WeatherData {
        project_if_requested(&self.data, elements)
    }

    /// Reads one top-level field of the snapshot, e.g. `"queryCost"` or `"timezone"`.
    ///
    /// # Errors
    ///
    /// [`AccessError::UnknownField`] if the snapshot schema has no such field.
    pub fn snapshot_field(&self, field: &str) -> Result<FieldValue, AccessError> {
        self.data.get_field(field)
    }

    /// Writes one top-level field of the snapshot, with the same type check as
    /// [`Weather::set_field_on_day`]. Nothing is written on error.
    pub fn set_snapshot_field(
        &mut self,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), AccessError> {
        self.data = self.data.with_field(field, value)?;
        Ok(())
    }

    /// Returns all days, each projected to `elements`. An empty `elements` slice returns
    /// the days unchanged.
    pub fn daily_data(&self, elements: &[&str]) -> Vec<Day> {
        self.data
            .days
            .iter()
            .map(|day| project_if_requested(day, elements))
            .collect()
    }

    /// Replaces the whole day collection.
    pub fn set_daily_data(&mut self, days: Vec<Day>) {
        self.data.days = days;
    }

    /// Returns the hours of all days in document order, each projected to `elements`.
    pub fn hourly_data(&self, elements: &[&str]) -> Vec<Hour> {
        self.data
            .days
            .iter()
            .flat_map(|day| day.hours.iter())
            .map(|hour| project_if_requested(hour, elements))
            .collect()
    }

    /// The dates of all days in document order.
    ///
    /// Days whose `datetime` is not a `YYYY-MM-DD` date are skipped with a warning.
    pub fn daily_datetimes(&self) -> Vec<NaiveDate> {
        self.data
            .days
            .iter()
            .filter_map(|day| parse_date(&day.datetime))
            .collect()
    }

    /// The local date and time of every hour, in document order.
    ///
    /// Hours are combined with the date of the day they belong to. Entries with an
    /// unparsable day or hour identifier are skipped with a warning.
    pub fn hourly_datetimes(&self) -> Vec<NaiveDateTime> {
        self.data
            .days
            .iter()
            .filter_map(|day| parse_date(&day.datetime).map(|date| (date, day)))
            .flat_map(|(date, day)| {
                day.hours.iter().filter_map(move |hour| {
                    parse_time(&hour.datetime).map(|time| date.and_time(time))
                })
            })
            .collect()
    }

    /// Returns a copy of the addressed day, projected to `elements` unless the slice is
    /// empty.
    ///
    /// # Errors
    ///
    /// [`AccessError::NotFound`] or [`AccessError::IndexOutOfRange`] if the locator does
    /// not resolve.
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_timeline::{Day, Locator, Weather, WeatherData};
    ///
    /// let data = WeatherData {
    ///     days: vec![Day { datetime: "2024-01-01".into(), temp: 52.6, tempmax: 58.1, ..Default::default() }],
    ///     ..Default::default()
    /// };
    /// let weather = Weather::builder().api_key("KEY").data(data).build();
    ///
    /// let day = weather.data_on_day(Locator::Index(0), &["tempmax"]).unwrap();
    /// assert_eq!((day.datetime.as_str(), day.temp, day.tempmax), ("2024-01-01", 0.0, 58.1));
    /// ```
    pub fn data_on_day(
        &self,
        day: impl Into<Locator>,
        elements: &[&str],
    ) -> Result<Day, AccessError> {
        let day = day.into().resolve(&self.data.days)?;
        Ok(project_if_requested(day, elements))
    }

    /// Replaces the addressed day as a whole, including its `datetime`.
    pub fn set_data_on_day(
        &mut self,
        day: impl Into<Locator>,
        data: Day,
    ) -> Result<(), AccessError> {
        navigator::set_record(&mut self.data.days, &day.into(), data)
    }

    /// Reads one field of the addressed day.
    ///
    /// # Errors
    ///
    /// Resolution errors, or [`AccessError::UnknownField`] if the day schema has no such
    /// field.
    pub fn field_on_day(
        &self,
        day: impl Into<Locator>,
        field: &str,
    ) -> Result<FieldValue, AccessError> {
        day.into().resolve(&self.data.days)?.get_field(field)
    }

    /// Writes one field of the addressed day.
    ///
    /// # Errors
    ///
    /// Resolution errors, [`AccessError::UnknownField`], or [`AccessError::TypeMismatch`]
    /// if `value` does not have the field's declared type. Nothing is written on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_timeline::{AccessError, Day, Weather, WeatherData};
    ///
    /// let data = WeatherData {
    ///     days: vec![Day { datetime: "2024-01-01".into(), ..Default::default() }],
    ///     ..Default::default()
    /// };
    /// let mut weather = Weather::builder().api_key("KEY").data(data).build();
    ///
    /// weather.set_field_on_day("2024-01-01", "conditions", "Snow").unwrap();
    /// assert_eq!(weather.weather_data().days[0].conditions, "Snow");
    ///
    /// let err = weather.set_field_on_day("2024-01-01", "humidity", 80i64).unwrap_err();
    /// assert!(matches!(err, AccessError::TypeMismatch { .. }));
    /// ```
    pub fn set_field_on_day(
        &mut self,
        day: impl Into<Locator>,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), AccessError> {
        let value = value.into();
        self.update_day(day, |day| day.with_field(field, value))
    }

    /// Read-modify-write of the addressed day: `update` receives the stored day and the
    /// day it returns is written back into the same slot.
    pub fn update_day<F>(&mut self, day: impl Into<Locator>, update: F) -> Result<(), AccessError>
    where
        F: FnOnce(&Day) -> Result<Day, AccessError>,
    {
        navigator::update_record(&mut self.data.days, &day.into(), update)
    }

    /// Returns copies of the hours of the addressed day, each projected to `elements`
    /// unless the slice is empty.
    pub fn hourly_data_on_day(
        &self,
        day: impl Into<Locator>,
        elements: &[&str],
    ) -> Result<Vec<Hour>, AccessError> {
        let day = day.into().resolve(&self.data.days)?;
        Ok(day
            .hours
            .iter()
            .map(|hour| project_if_requested(hour, elements))
            .collect())
    }

    /// Replaces all hours of the addressed day.
    pub fn set_hourly_data_on_day(
        &mut self,
        day: impl Into<Locator>,
        hours: Vec<Hour>,
    ) -> Result<(), AccessError> {
        self.update_day(day, |day| day.with_field("hours", hours))
    }

    /// Returns a copy of the addressed hour, projected to `elements` unless the slice is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_timeline::{Day, Hour, Locator, Weather, WeatherData};
    ///
    /// let hours = vec![Hour { datetime: "01:00:00".into(), temp: 48.4, ..Default::default() }];
    /// let data = WeatherData {
    ///     days: vec![Day { datetime: "2024-01-01".into(), hours, ..Default::default() }],
    ///     ..Default::default()
    /// };
    /// let weather = Weather::builder().api_key("KEY").data(data).build();
    ///
    /// let hour = weather.data_at_datetime("2024-01-01", Locator::Index(0), &[]).unwrap();
    /// assert_eq!(hour.temp, 48.4);
    /// ```
    pub fn data_at_datetime(
        &self,
        day: impl Into<Locator>,
        hour: impl Into<Locator>,
        elements: &[&str],
    ) -> Result<Hour, AccessError> {
        let hour = navigator::get_at(&self.data.days, &day.into(), &hour.into())?;
        Ok(project_if_requested(hour, elements))
    }

    /// Replaces the addressed hour. The stored hour keeps the `datetime` of the slot it
    /// replaces, see [`navigator::set_at`].
    pub fn set_data_at_datetime(
        &mut self,
        day: impl Into<Locator>,
        hour: impl Into<Locator>,
        data: Hour,
    ) -> Result<(), AccessError> {
        navigator::set_at(&mut self.data.days, &day.into(), &hour.into(), data)
    }

    /// Applies several field updates to the addressed hour at once. Either all updates
    /// are stored or none is.
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_timeline::{Day, FieldValue, Hour, Locator, Weather, WeatherData};
    ///
    /// let hours = vec![Hour { datetime: "01:00:00".into(), ..Default::default() }];
    /// let data = WeatherData {
    ///     days: vec![Day { datetime: "2024-01-01".into(), hours, ..Default::default() }],
    ///     ..Default::default()
    /// };
    /// let mut weather = Weather::builder().api_key("KEY").data(data).build();
    ///
    /// weather
    ///     .update_data_at_datetime(
    ///         Locator::Index(0),
    ///         "01:00:00",
    ///         [("temp", FieldValue::Float(50.0)), ("icon", "snow".into())],
    ///     )
    ///     .unwrap();
    /// let hour = weather.data_at_datetime(Locator::Index(0), "01:00:00", &[]).unwrap();
    /// assert_eq!((hour.temp, hour.icon.as_str()), (50.0, "snow"));
    /// ```
    pub fn update_data_at_datetime<I, N>(
        &mut self,
        day: impl Into<Locator>,
        hour: impl Into<Locator>,
        updates: I,
    ) -> Result<(), AccessError>
    where
        I: IntoIterator<Item = (N, FieldValue)>,
        N: AsRef<str>,
    {
        navigator::update_at(&mut self.data.days, &day.into(), &hour.into(), |hour| {
            hour.with_fields(updates)
        })
    }

    /// Reads one field of the addressed hour.
    pub fn field_at_datetime(
        &self,
        day: impl Into<Locator>,
        hour: impl Into<Locator>,
        field: &str,
    ) -> Result<FieldValue, AccessError> {
        navigator::get_at(&self.data.days, &day.into(), &hour.into())?.get_field(field)
    }

    /// Writes one field of the addressed hour, with the same type check as
    /// [`Weather::set_field_on_day`].
    pub fn set_field_at_datetime(
        &mut self,
        day: impl Into<Locator>,
        hour: impl Into<Locator>,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), AccessError> {
        let value = value.into();
        navigator::update_at(&mut self.data.days, &day.into(), &hour.into(), |hour| {
            hour.with_field(field, value)
        })
    }
}

fn project_if_requested<R: Record>(record: &R, elements: &[&str]) -> R {
    if elements.is_empty() {
        record.clone()
    } else {
        record.project(elements)
    }
}

fn parse_date(datetime: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(datetime, "%Y-%m-%d")
        .inspect_err(|e| warn!("Skipping day with unparsable datetime '{datetime}': {e}"))
        .ok()
}

fn parse_time(datetime: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(datetime, "%H:%M:%S")
        .inspect_err(|e| warn!("Skipping hour with unparsable datetime '{datetime}': {e}"))
        .ok()
}

impl From<WeatherData> for Weather {
    /// Wraps an existing snapshot in a client without an API key. Fetching requires
    /// setting one first with [`Weather::set_api_key`].
    fn from(data: WeatherData) -> Self {
        Weather::builder().api_key(String::new()).data(data).build()
    }
}
