//! Films endpoint configuration.

/// Endpoint used when `FILMS_API_URL` is unset or blank.
pub const DEFAULT_FILMS_URL: &str = "https://swapi.dev/api/films/";

/// Environment variable overriding the films endpoint.
pub const FILMS_URL_VAR: &str = "FILMS_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapiConfig {
    /// Full URL of the films listing, fetched with a plain `GET`.
    pub films_url: String,
}

impl Default for SwapiConfig {
    fn default() -> Self {
        Self {
            films_url: DEFAULT_FILMS_URL.to_string(),
        }
    }
}

impl SwapiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable        | Required | Default                        |
    /// |-----------------|----------|--------------------------------|
    /// | `FILMS_API_URL` | no       | `https://swapi.dev/api/films/` |
    pub fn from_env() -> Self {
        Self {
            films_url: resolve_films_url(std::env::var(FILMS_URL_VAR).ok()),
        }
    }
}

/// Pick the films URL from an optional override, trimming whitespace and
/// ignoring blank values.
pub fn resolve_films_url(raw: Option<String>) -> String {
    raw.map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_FILMS_URL.to_string())
}
