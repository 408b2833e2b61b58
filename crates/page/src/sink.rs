//! Draft sink that writes submitted movies to the log.

use filmreel_core::draft::DraftMovie;
use filmreel_core::sink::{DraftSink, SinkError};

/// Logs each submitted draft at `info`, as structured fields plus the
/// JSON form of the whole draft.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DraftSink for LogSink {
    fn save(&self, draft: &DraftMovie) -> Result<(), SinkError> {
        let json = serde_json::to_string(draft).map_err(|e| SinkError::Unavailable(e.to_string()))?;
        tracing::info!(
            title = %draft.title,
            release_date = %draft.release_date,
            draft = %json,
            "Movie submitted",
        );
        Ok(())
    }
}
