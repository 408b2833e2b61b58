//! Where submitted drafts go.
//!
//! Submission is fire-and-forget from the form's point of view: the page
//! hands the draft to a [`DraftSink`] and clears the form whatever the
//! sink answers.

use crate::draft::DraftMovie;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Draft sink unavailable: {0}")]
    Unavailable(String),
}

/// Receiver of submitted drafts.
pub trait DraftSink: Send + Sync {
    fn save(&self, draft: &DraftMovie) -> Result<(), SinkError>;
}
