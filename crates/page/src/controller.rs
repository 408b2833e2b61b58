//! The films page controller.
//!
//! [`MoviesPage`] owns the [`PageState`] and connects it to a
//! [`MovieSource`] for the list and a [`DraftSink`] for submissions.
//!
//! Fetching is split in two so a caller can keep handling input while a
//! request is in flight: [`MoviesPage::begin_fetch`] flips the page into
//! loading and hands back a detached future, and
//! [`MoviesPage::complete_fetch`] applies whatever that future resolves
//! to. Nothing stops a second fetch from starting before the first one
//! completes, and nothing cancels a fetch once started.

use std::future::Future;
use std::sync::Arc;

use filmreel_core::draft::{DraftField, DraftMovie};
use filmreel_core::page::PageState;
use filmreel_core::render::{render, PageView};
use filmreel_core::sink::DraftSink;
use filmreel_core::source::{FetchResult, MovieSource};

pub struct MoviesPage {
    state: PageState,
    source: Arc<dyn MovieSource>,
    sink: Box<dyn DraftSink>,
}

impl MoviesPage {
    pub fn new(source: Arc<dyn MovieSource>, sink: Box<dyn DraftSink>) -> Self {
        Self {
            state: PageState::new(),
            source,
            sink,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Current view of the page.
    pub fn view(&self) -> PageView {
        render(&self.state)
    }

    // ---- form ----

    /// Set one form field. Never fails and never validates.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.state.update_field(field, value);
    }

    /// "Add Movie": hand the draft to the sink and clear the form.
    ///
    /// The form is cleared even when the sink rejects the draft; the
    /// rejection is only logged. Returns the submitted draft.
    pub fn submit(&mut self) -> DraftMovie {
        let draft = self.state.take_draft();
        if let Err(e) = self.sink.save(&draft) {
            tracing::warn!(error = %e, "Draft sink rejected submission");
        }
        draft
    }

    // ---- fetch ----

    /// Enter loading and return the request as a detached future.
    ///
    /// The future holds its own handle to the source, so it can be
    /// spawned or awaited while the page keeps taking input. Feed its
    /// output to [`complete_fetch`](Self::complete_fetch).
    pub fn begin_fetch(&mut self) -> impl Future<Output = FetchResult> + Send + 'static {
        self.state.begin_fetch();
        tracing::debug!("Films fetch started");
        let source = Arc::clone(&self.source);
        async move { source.fetch_movies().await }
    }

    /// Apply the outcome of a fetch started with
    /// [`begin_fetch`](Self::begin_fetch).
    pub fn complete_fetch(&mut self, result: FetchResult) {
        match &result {
            Ok(movies) => tracing::debug!(count = movies.len(), "Films fetch completed"),
            Err(e) => tracing::debug!(error = %e, "Films fetch failed"),
        }
        self.state.complete_fetch(result);
    }

    /// "Fetch Movies": start a fetch, wait for it, apply it.
    pub async fn fetch_movies(&mut self) {
        let pending = self.begin_fetch();
        let result = pending.await;
        self.complete_fetch(result);
    }
}
