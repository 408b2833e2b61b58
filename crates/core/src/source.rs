//! Where the movie list comes from.
//!
//! The page never talks HTTP directly. It holds an
//! `Arc<dyn MovieSource>` and awaits [`MovieSource::fetch_movies`], which
//! resolves to either the full list or one of the two [`FetchError`]
//! kinds. Both kinds collapse to [`FETCH_ERROR_MESSAGE`] on screen.

use async_trait::async_trait;

use crate::movie::MovieRecord;
use crate::status::FETCH_ERROR_MESSAGE;

/// Result of one fetch of the movie list.
pub type FetchResult = Result<Vec<MovieRecord>, FetchError>;

/// Why a fetch produced no list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("films endpoint returned HTTP {status}")]
    HttpStatus { status: u16 },

    /// The request never completed, or the body was not the expected JSON.
    #[error("films request failed: {0}")]
    TransportOrParse(String),
}

impl FetchError {
    /// The text shown to the user, identical for every kind.
    pub fn user_message(&self) -> &'static str {
        FETCH_ERROR_MESSAGE
    }
}

/// Anything that can produce the full movie list in one call.
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn fetch_movies(&self) -> FetchResult;
}
