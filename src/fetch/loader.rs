use crate::fetch::error::FetchError;
use crate::fetch::request::{redacted, TimelineRequest};
use crate::types::weather_data::WeatherData;
use log::{info, warn};
use reqwest::{Client, Request};
use std::path::Path;
use tokio::fs;

/// Downloads timeline documents and decodes them into [`WeatherData`].
///
/// Decoding always completes before anything is handed back, so callers never see a
/// partially filled snapshot.
#[derive(Debug, Clone)]
pub(crate) struct TimelineLoader {
    download_client: Client,
}

impl TimelineLoader {
    pub(crate) fn new() -> TimelineLoader {
        TimelineLoader {
            download_client: Client::new(),
        }
    }

    pub(crate) async fn fetch(
        &self,
        request: &TimelineRequest,
        base_url: &str,
        api_key: &str,
    ) -> Result<WeatherData, FetchError> {
        let request = request.to_request(&self.download_client, base_url, api_key)?;
        let url = redacted(request.url());
        info!("Downloading timeline data from {}", url);

        let bytes = self.download(request, &url).await?;
        let data = decode(&bytes)?;
        info!(
            "Decoded {} day(s) for '{}' from {} bytes",
            data.days.len(),
            data.resolved_address,
            bytes.len()
        );
        Ok(data)
    }

    async fn download(&self, request: Request, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .download_client
            .execute(request)
            .await
            .map_err(|e| FetchError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.to_string(), e))?;
        Ok(body.to_vec())
    }

    pub(crate) async fn load_file(path: &Path) -> Result<WeatherData, FetchError> {
        let bytes = fs::read(path)
            .await
            .map_err(|e| FetchError::DocumentRead(path.to_path_buf(), e))?;
        let data = decode(&bytes)?;
        info!("Loaded {} day(s) from {:?}", data.days.len(), path);
        Ok(data)
    }
}

pub(crate) fn decode(bytes: &[u8]) -> Result<WeatherData, FetchError> {
    Ok(serde_json::from_slice(bytes)?)
}
