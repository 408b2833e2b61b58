//! Pure rendering of [`PageState`] into a view model.
//!
//! [`render`] decides what is visible; [`render_text`] lays the view out
//! for a terminal. Visibility rules:
//!
//! - the form is always shown;
//! - the loading indicator only while a fetch is in flight;
//! - the error banner whenever an error is set;
//! - the movie grid whenever nothing is loading, even next to an error.

use std::fmt;

use serde::Serialize;

use crate::draft::DraftField;
use crate::page::PageState;
use crate::types::EpisodeId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const PAGE_HEADING: &str = "Star Wars Movies";
pub const ADD_BUTTON_LABEL: &str = "Add Movie";
pub const FETCH_BUTTON_LABEL: &str = "Fetch Movies";
pub const LOADING_TEXT: &str = "Loading...";

/// Visible rows of the opening text input.
pub const OPENING_TEXT_ROWS: u8 = 3;

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// How an input is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    MultilineText { rows: u8 },
    Date,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub field: DraftField,
    pub label: &'static str,
    pub kind: InputKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub key: EpisodeId,
    pub title: String,
    pub subtitle: String,
    pub body: String,
}

/// Everything visible on the page at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub heading: &'static str,
    pub form: FormView,
    pub fetch_label: &'static str,
    pub loading: Option<&'static str>,
    pub error: Option<String>,
    /// `None` while loading; otherwise one card per movie, possibly none.
    pub cards: Option<Vec<CardView>>,
}

fn field_label(field: DraftField) -> &'static str {
    match field {
        DraftField::Title => "Title",
        DraftField::OpeningText => "Opening Text",
        DraftField::ReleaseDate => "Release Date",
    }
}

fn field_kind(field: DraftField) -> InputKind {
    match field {
        DraftField::Title => InputKind::Text,
        DraftField::OpeningText => InputKind::MultilineText {
            rows: OPENING_TEXT_ROWS,
        },
        DraftField::ReleaseDate => InputKind::Date,
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn render(state: &PageState) -> PageView {
    let fields = DraftField::ALL
        .iter()
        .map(|&field| FieldView {
            field,
            label: field_label(field),
            kind: field_kind(field),
            value: state.draft.field(field).to_string(),
        })
        .collect();

    let loading = state.status.is_loading;

    let cards: Option<Vec<CardView>> = (!loading).then(|| {
        state
            .movies
            .iter()
            .map(|movie| CardView {
                key: movie.id,
                title: movie.title.clone(),
                subtitle: movie.release_date.clone(),
                body: movie.opening_text.clone(),
            })
            .collect()
    });

    PageView {
        heading: PAGE_HEADING,
        form: FormView {
            fields,
            submit_label: ADD_BUTTON_LABEL,
        },
        fetch_label: FETCH_BUTTON_LABEL,
        loading: loading.then_some(LOADING_TEXT),
        error: state.status.error.clone(),
        cards,
    }
}

/// Terminal layout of the page, one block per visible part.
impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        writeln!(f, "{}", "=".repeat(self.heading.len()))?;

        for field in &self.form.fields {
            match field.kind {
                InputKind::MultilineText { rows } => {
                    writeln!(f, "{} ({rows} lines):", field.label)?;
                    for line in field.value.lines() {
                        writeln!(f, "  | {line}")?;
                    }
                    if field.value.is_empty() {
                        writeln!(f, "  |")?;
                    }
                }
                InputKind::Text | InputKind::Date => {
                    writeln!(f, "{}: [{}]", field.label, field.value)?;
                }
            }
        }
        writeln!(f, "[ {} ]  [ {} ]", self.form.submit_label, self.fetch_label)?;

        if let Some(loading) = self.loading {
            writeln!(f, "\n{loading}")?;
        }

        if let Some(error) = &self.error {
            writeln!(f, "\n!! {error}")?;
        }

        for card in self.cards.iter().flatten() {
            writeln!(f, "\n#{} {}", card.key, card.title)?;
            writeln!(f, "{}", card.subtitle)?;
            for line in card.body.lines() {
                writeln!(f, "    {}", line.trim_end())?;
            }
        }

        Ok(())
    }
}

/// Lay a [`PageView`] out as plain text.
pub fn render_text(view: &PageView) -> String {
    view.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::MovieRecord;
    use crate::source::FetchError;

    fn with_movies() -> PageState {
        let mut state = PageState::new();
        state.set_list(vec![
            MovieRecord {
                id: 4,
                title: "A New Hope".into(),
                opening_text: "It is a period of civil war.".into(),
                release_date: "1977-05-25".into(),
            },
            MovieRecord {
                id: 5,
                title: "The Empire Strikes Back".into(),
                opening_text: "It is a dark time for the\r\nRebellion.".into(),
                release_date: "1980-05-17".into(),
            },
        ]);
        state
    }

    #[test]
    fn form_is_always_shown_in_order() {
        let mut state = PageState::new();
        state.begin_fetch();
        let view = render(&state);
        let labels: Vec<_> = view.form.fields.iter().map(|f| f.label).collect();
        assert_eq!(labels, ["Title", "Opening Text", "Release Date"]);
        assert_eq!(view.form.fields[1].kind, InputKind::MultilineText { rows: 3 });
        assert_eq!(view.form.fields[2].kind, InputKind::Date);
        assert_eq!(view.form.submit_label, "Add Movie");
        assert_eq!(view.fetch_label, "Fetch Movies");
    }

    #[test]
    fn form_shows_draft_values() {
        let mut state = PageState::new();
        state.update_field(DraftField::ReleaseDate, "2016-12-16");
        let view = render(&state);
        assert_eq!(view.form.fields[2].value, "2016-12-16");
        assert_eq!(view.form.fields[0].value, "");
    }

    #[test]
    fn loading_hides_grid() {
        let mut state = with_movies();
        state.begin_fetch();
        let view = render(&state);
        assert_eq!(view.loading, Some("Loading..."));
        assert!(view.cards.is_none());
    }

    #[test]
    fn idle_shows_cards_in_list_order() {
        let view = render(&with_movies());
        assert!(view.loading.is_none());
        let cards = view.cards.unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].key, 4);
        assert_eq!(cards[0].subtitle, "1977-05-25");
        assert_eq!(cards[1].title, "The Empire Strikes Back");
    }

    #[test]
    fn empty_list_renders_empty_grid() {
        let view = render(&PageState::new());
        assert_eq!(view.cards, Some(Vec::new()));
        assert!(view.error.is_none());
    }

    #[test]
    fn stale_list_is_shown_with_error() {
        let mut state = with_movies();
        state.begin_fetch();
        state.complete_fetch(Err(FetchError::HttpStatus { status: 502 }));
        let view = render(&state);
        assert_eq!(view.error.as_deref(), Some("Something went wrong!"));
        assert_eq!(view.cards.map(|c| c.len()), Some(2));
    }

    #[test]
    fn text_layout_contains_visible_parts() {
        let mut state = with_movies();
        state.update_field(DraftField::Title, "Rogue One");
        let text = render_text(&render(&state));
        assert!(text.starts_with("Star Wars Movies\n"));
        assert!(text.contains("Title: [Rogue One]"));
        assert!(text.contains("[ Add Movie ]  [ Fetch Movies ]"));
        assert!(text.contains("#4 A New Hope"));
        assert!(text.contains("    Rebellion."));
        assert!(!text.contains("Loading..."));
    }

    #[test]
    fn display_matches_render_text() {
        let mut state = with_movies();
        state.begin_fetch();
        state.complete_fetch(Err(FetchError::TransportOrParse("refused".into())));
        let view = render(&state);
        let text = format!("{view}");
        assert_eq!(text, render_text(&view));
        assert!(text.contains("\n!! Something went wrong!\n"));
        assert!(text.contains("#5 The Empire Strikes Back\n1980-05-17\n"));
    }

    #[test]
    fn text_layout_while_loading() {
        let mut state = with_movies();
        state.begin_fetch();
        let text = render_text(&render(&state));
        assert!(text.contains("Loading..."));
        assert!(!text.contains("A New Hope"));
    }
}
