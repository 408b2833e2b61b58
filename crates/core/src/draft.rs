//! The in-progress "add movie" form.
//!
//! [`DraftMovie`] holds exactly the strings last typed into each input.
//! There is no validation: any value, including the empty string, is
//! accepted for any field.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

/// One of the three inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Title,
    OpeningText,
    ReleaseDate,
}

/// Input names accepted by [`DraftField::from_str`], in form order.
const VALID_FIELD_NAMES: &[&str] = &["title", "openingText", "releaseDate"];

impl DraftField {
    /// All fields in the order they appear on the form.
    pub const ALL: [DraftField; 3] = [Self::Title, Self::OpeningText, Self::ReleaseDate];

    /// The input `name` of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::OpeningText => "openingText",
            Self::ReleaseDate => "releaseDate",
        }
    }

    /// Parse a field from its input `name`.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "title" => Ok(Self::Title),
            "openingText" => Ok(Self::OpeningText),
            "releaseDate" => Ok(Self::ReleaseDate),
            _ => Err(CoreError::Validation(format!(
                "Unknown form field '{s}'. Must be one of: {}",
                VALID_FIELD_NAMES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// DraftMovie
// ---------------------------------------------------------------------------

/// The movie currently being typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftMovie {
    pub title: String,
    pub opening_text: String,
    /// ISO date as typed; never parsed.
    pub release_date: String,
}

impl DraftMovie {
    /// Set one field, leaving the other two untouched.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::OpeningText => self.opening_text = value,
            DraftField::ReleaseDate => self.release_date = value,
        }
    }

    /// Current value of one field.
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::OpeningText => &self.opening_text,
            DraftField::ReleaseDate => &self.release_date,
        }
    }

    /// Clear every field back to the empty string.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Take the current draft, leaving an empty one in its place.
    pub fn take(&mut self) -> DraftMovie {
        std::mem::take(self)
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
