//! Parameters of a Timeline API request and their mapping onto the request URL.

use crate::fetch::error::FetchError;
use bon::Builder;
use log::warn;
use reqwest::{Client, Request, Url};
use std::fmt;

/// The system of units the API reports measurements in.
///
/// # Examples
///
/// ```
/// use weather_timeline::UnitGroup;
///
/// assert_eq!(UnitGroup::default(), UnitGroup::Us);
/// assert_eq!(UnitGroup::Metric.to_string(), "metric");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnitGroup {
    /// Fahrenheit, inches, miles per hour.
    #[default]
    Us,
    /// Celsius, millimeters, kilometers per hour.
    Metric,
    /// Like metric, but with wind speed and visibility in miles.
    Uk,
    /// Kelvin and SI units throughout.
    Base,
}

impl UnitGroup {
    pub(crate) fn query_value(&self) -> &'static str {
        match self {
            UnitGroup::Us => "us",
            UnitGroup::Metric => "metric",
            UnitGroup::Uk => "uk",
            UnitGroup::Base => "base",
        }
    }
}

impl fmt::Display for UnitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query_value())
    }
}

/// One Timeline query: `{base_url}/{location}[/{from_date}[/{to_date}]]` plus query
/// parameters.
///
/// Dates are passed through as given, so besides `YYYY-MM-DD` the API's dynamic periods
/// (`"last30days"`, `"next7days"`, ...) work as well. Without a start date the API
/// returns its 15 day forecast.
#[derive(Debug, Clone, PartialEq, Builder)]
pub(crate) struct TimelineRequest {
    #[builder(into)]
    location: String,
    #[builder(into)]
    from_date: Option<String>,
    #[builder(into)]
    to_date: Option<String>,
    #[builder(default)]
    unit_group: UnitGroup,
    #[builder(into)]
    include: Option<String>,
    #[builder(default)]
    elements: Vec<String>,
}

impl TimelineRequest {
    fn path_segments(&self) -> Vec<&str> {
        let mut segments = vec![self.location.as_str()];
        if let Some(from_date) = &self.from_date {
            segments.push(from_date);
            if let Some(to_date) = &self.to_date {
                segments.push(to_date);
            }
        }
        segments
    }

    fn query(&self, api_key: &str) -> Vec<(&'static str, String)> {
        let mut query = vec![("unitGroup", self.unit_group.to_string())];
        if let Some(include) = &self.include {
            query.push(("include", include.clone()));
        }
        query.push(("key", api_key.to_string()));
        if !self.elements.is_empty() {
            // Records are addressed by datetime, so it is always requested.
            let mut elements = self.elements.clone();
            if !elements.iter().any(|element| element == "datetime") {
                elements.insert(0, "datetime".to_string());
            }
            query.push(("elements", elements.join(",")));
        }
        query
    }

    /// Builds the GET request against `base_url`. Path segments are percent-encoded, so
    /// free-text locations like `"San Francisco, CA"` can be passed as is.
    pub(crate) fn to_request(
        &self,
        client: &Client,
        base_url: &str,
        api_key: &str,
    ) -> Result<Request, FetchError> {
        if api_key.is_empty() {
            return Err(FetchError::MissingApiKey);
        }
        if self.to_date.is_some() && self.from_date.is_none() {
            warn!(
                "Ignoring end date of request for '{}' without a start date",
                self.location
            );
        }

        let mut request = client
            .get(base_url)
            .query(&self.query(api_key))
            .build()
            .map_err(|e| FetchError::RequestBuild(base_url.to_string(), e))?;
        request
            .url_mut()
            .path_segments_mut()
            .map_err(|_| FetchError::InvalidBaseUrl(base_url.to_string()))?
            .pop_if_empty()
            .extend(self.path_segments());
        Ok(request)
    }
}

/// The request URL without its query, which carries the API key.
pub(crate) fn redacted(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}
