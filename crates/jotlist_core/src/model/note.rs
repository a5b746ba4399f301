//! Note domain model.
//!
//! # Responsibility
//! - Define the note record owned by the store.
//! - Define the list filter and its pure visibility predicate.
//!
//! # Invariants
//! - `id` is stable and never reused for another note in the same store.
//! - `text` is trimmed and non-empty once a note exists.
//! - `Filter::matches` never mutates the note it inspects.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for one note in a store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// One short text item in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-issued identifier, unique for the store lifetime.
    pub id: NoteId,
    /// Trimmed, non-empty body text.
    pub text: String,
    /// Completion flag flipped by `toggle`.
    pub completed: bool,
}

impl Note {
    /// Creates an incomplete note with a caller-provided id.
    ///
    /// The store is responsible for trimming and rejecting empty text before
    /// calling this constructor.
    pub(crate) fn new(id: NoteId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Visibility filter applied by `NoteStore::visible_notes`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Every note.
    #[default]
    All,
    /// Notes with `completed == false`.
    Active,
    /// Notes with `completed == true`.
    Completed,
}

/// Stable string value for `Filter::All`.
pub const FILTER_ALL: &str = "all";
/// Stable string value for `Filter::Active`.
pub const FILTER_ACTIVE: &str = "active";
/// Stable string value for `Filter::Completed`.
pub const FILTER_COMPLETED: &str = "completed";

impl Filter {
    /// All filters in display order.
    pub const VARIANTS: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Returns whether `note` passes this filter.
    pub fn matches(self, note: &Note) -> bool {
        match self {
            Self::All => true,
            Self::Active => !note.completed,
            Self::Completed => note.completed,
        }
    }

    /// Stable lowercase id, matching the serde form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => FILTER_ALL,
            Self::Active => FILTER_ACTIVE,
            Self::Completed => FILTER_COMPLETED,
        }
    }

    /// Capitalized label for filter buttons.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = FilterParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" => Err(FilterParseError::Empty),
            FILTER_ALL => Ok(Self::All),
            FILTER_ACTIVE => Ok(Self::Active),
            FILTER_COMPLETED => Ok(Self::Completed),
            _ => Err(FilterParseError::Unsupported(normalized)),
        }
    }
}

/// Filter string parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterParseError {
    Empty,
    Unsupported(String),
}

impl Display for FilterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "filter cannot be empty"),
            Self::Unsupported(value) => write!(
                f,
                "unsupported filter `{value}`; expected all|active|completed"
            ),
        }
    }
}

impl Error for FilterParseError {}
