mod access;
mod error;
mod fetch;
mod types;
mod weather;

pub use error::WeatherError;
pub use weather::*;

pub use access::error::AccessError;
pub use access::field::{FieldKind, FieldType, FieldValue};
pub use access::locator::Locator;
pub use access::navigator;
pub use access::record::{FieldDescriptor, Record};

pub use fetch::error::FetchError;
pub use fetch::request::UnitGroup;

pub use types::day::Day;
pub use types::event::Event;
pub use types::hour::Hour;
pub use types::station::Station;
pub use types::weather_data::WeatherData;
