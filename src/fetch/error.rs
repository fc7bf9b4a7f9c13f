use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No API key configured, the Timeline API rejects unauthenticated requests")]
    MissingApiKey,

    #[error("Failed to build request for {0}")]
    RequestBuild(String, #[source] reqwest::Error),

    #[error("Base URL '{0}' cannot take path segments")]
    InvalidBaseUrl(String),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse timeline document")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to read timeline document '{0}'")]
    DocumentRead(PathBuf, #[source] std::io::Error),
}
