//! Loading and error flags for the films request.

use serde::Serialize;

/// The only error text the page ever shows for a failed fetch.
pub const FETCH_ERROR_MESSAGE: &str = "Something went wrong!";

/// Where the most recent fetch stands.
///
/// `Succeeded` and `Failed` both allow a new fetch to start; there is no
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// What the renderer needs to know about the outstanding request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStatus {
    pub is_loading: bool,
    pub error: Option<String>,
}
