//! Display-ready movie records.

use serde::{Deserialize, Serialize};

use crate::types::EpisodeId;

/// One card in the movie grid, built from a fetch response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    /// Episode number reported by the films API; used as the card key.
    pub id: EpisodeId,
    pub title: String,
    pub opening_text: String,
    pub release_date: String,
}
