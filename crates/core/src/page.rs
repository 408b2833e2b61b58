//! Page state and its pure update functions.
//!
//! [`PageState`] is everything the films page remembers: the draft form,
//! the last fetched list and the request status. Every mutation goes
//! through one of the small functions below so the page can be driven
//! from a terminal loop or a test without any UI runtime.

use serde::Serialize;

use crate::draft::{DraftField, DraftMovie};
use crate::movie::MovieRecord;
use crate::source::FetchResult;
use crate::status::{FetchPhase, RequestStatus};

#[derive(Debug, Clone, Default, Serialize)]
pub struct PageState {
    pub draft: DraftMovie,
    pub movies: Vec<MovieRecord>,
    pub status: RequestStatus,
    pub phase: FetchPhase,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- form ----

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.update_field(field, value);
    }

    pub fn reset_draft(&mut self) {
        self.draft.reset();
    }

    /// Take the draft for submission and leave an empty form behind.
    pub fn take_draft(&mut self) -> DraftMovie {
        self.draft.take()
    }

    // ---- request status ----

    pub fn set_loading(&mut self, loading: bool) {
        self.status.is_loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.status.error = error;
    }

    /// Replace the whole list. Never appends.
    pub fn set_list(&mut self, movies: Vec<MovieRecord>) {
        self.movies = movies;
    }

    // ---- fetch state machine ----

    /// Enter `Loading`: raise the loading flag and drop any previous error.
    ///
    /// Allowed from every phase, including `Loading` itself.
    pub fn begin_fetch(&mut self) {
        self.set_loading(true);
        self.set_error(None);
        self.phase = FetchPhase::Loading;
    }

    /// Apply the outcome of a fetch.
    ///
    /// On success the list is replaced; on failure the previous list is
    /// kept and the generic message is shown next to it. The loading flag
    /// is cleared either way.
    pub fn complete_fetch(&mut self, result: FetchResult) {
        match result {
            Ok(movies) => {
                self.set_list(movies);
                self.phase = FetchPhase::Succeeded;
            }
            Err(err) => {
                self.set_error(Some(err.user_message().to_string()));
                self.phase = FetchPhase::Failed;
            }
        }
        self.set_loading(false);
    }
}
