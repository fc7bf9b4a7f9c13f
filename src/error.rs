use crate::access::error::AccessError;
use crate::fetch::error::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
