//! HTTP client for the films-listing endpoint.
//!
//! Wraps a single `GET` of the configured URL using [`reqwest`] and
//! exposes it to the page as a [`MovieSource`].

use async_trait::async_trait;

use filmreel_core::movie::MovieRecord;
use filmreel_core::source::{FetchError, FetchResult, MovieSource};

use crate::config::SwapiConfig;
use crate::messages::{parse_films, FilmsResponse};

/// HTTP client for one films endpoint.
pub struct FilmsApi {
    client: reqwest::Client,
    films_url: String,
}

/// Errors from the films REST layer.
#[derive(Debug, thiserror::Error)]
pub enum FilmsApiError {
    /// The HTTP request itself failed (network, DNS, TLS, body read).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx status code.
    #[error("Films API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body was not the expected films JSON.
    #[error("Malformed films response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<FilmsApiError> for FetchError {
    fn from(err: FilmsApiError) -> Self {
        match err {
            FilmsApiError::ApiError { status, .. } => FetchError::HttpStatus { status },
            FilmsApiError::Request(e) => FetchError::TransportOrParse(e.to_string()),
            FilmsApiError::Decode(e) => FetchError::TransportOrParse(e.to_string()),
        }
    }
}

impl FilmsApi {
    /// Create a client for the given films URL.
    pub fn new(films_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            films_url,
        }
    }

    pub fn from_config(config: &SwapiConfig) -> Self {
        Self::new(config.films_url.clone())
    }

    pub fn films_url(&self) -> &str {
        &self.films_url
    }

    /// Fetch and decode the raw films listing.
    pub async fn list_films(&self) -> Result<FilmsResponse, FilmsApiError> {
        let response = self.client.get(&self.films_url).send().await?;
        let response = Self::ensure_success(response).await?;
        let text = response.text().await?;
        Ok(parse_films(&text)?)
    }

    /// Fetch the listing and map it into display records, preserving order.
    pub async fn list_movies(&self) -> Result<Vec<MovieRecord>, FilmsApiError> {
        Ok(self.list_films().await?.into_records())
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`FilmsApiError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, FilmsApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(FilmsApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl MovieSource for FilmsApi {
    async fn fetch_movies(&self) -> FetchResult {
        match self.list_movies().await {
            Ok(movies) => {
                tracing::info!(
                    url = %self.films_url,
                    count = movies.len(),
                    "Fetched films",
                );
                Ok(movies)
            }
            Err(e) => {
                tracing::warn!(url = %self.films_url, error = %e, "Films fetch failed");
                Err(e.into())
            }
        }
    }
}
