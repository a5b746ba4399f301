//! In-memory note list store.
//!
//! # Responsibility
//! - Own the ordered note list plus the filter, input draft and edit target.
//! - Apply user commands synchronously and report rejections explicitly.
//!
//! # Invariants
//! - Note ids are unique for the lifetime of the store.
//! - `editing`, when set, points at a note currently in `notes`.
//! - A rejected command leaves every field unchanged.
//! - Committing (add or commit-edit) clears the draft.

use crate::model::note::{Filter, Note, NoteId};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Why a store command was rejected. State is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Text was empty after trimming.
    EmptyText,
    /// No note with this id exists.
    NoteNotFound(NoteId),
    /// `commit_edit` was called while composing.
    NotEditing,
    /// The shared input is bound to an edit of this note.
    EditInProgress(NoteId),
}

impl StoreError {
    /// Short machine-readable reason used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyText => "empty_text",
            Self::NoteNotFound(_) => "note_not_found",
            Self::NotEditing => "not_editing",
            Self::EditInProgress(_) => "edit_in_progress",
        }
    }

}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "note text cannot be empty"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::NotEditing => write!(f, "no note is being edited"),
            Self::EditInProgress(id) => write!(f, "note {id} is being edited"),
        }
    }
}

impl Error for StoreError {}

/// State of the single text input shared by add and edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "note_id", rename_all = "snake_case")]
pub enum InputMode {
    /// Submitting the draft appends a new note.
    Composing,
    /// Submitting the draft replaces this note's text.
    Editing(NoteId),
}

impl InputMode {
    /// Placeholder shown in the empty input field.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Composing => "Enter note…",
            Self::Editing(_) => "Edit note",
        }
    }

    /// Label for the commit trigger.
    pub fn commit_label(self) -> &'static str {
        match self {
            Self::Composing => "Add",
            Self::Editing(_) => "Update",
        }
    }

    /// Stable lowercase mode name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Composing => "composing",
            Self::Editing(_) => "editing",
        }
    }
}

/// Outcome of `NoteStore::submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// The draft became a new note.
    Added(NoteId),
    /// The draft replaced the text of the edited note.
    Updated(NoteId),
}

impl Submitted {
    pub fn note_id(self) -> NoteId {
        match self {
            Self::Added(id) | Self::Updated(id) => id,
        }
    }
}

/// Per-filter note totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

/// Construction options for a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Texts appended as incomplete notes on construction. Blank entries are
    /// skipped.
    pub seed_notes: Vec<String>,
}

impl StoreConfig {
    /// Config used by demo surfaces: one `Sample note`.
    pub fn demo() -> Self {
        Self {
            seed_notes: vec!["Sample note".to_string()],
        }
    }
}

/// Exclusively-owned note list state.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    filter: Filter,
    draft: String,
    editing: Option<NoteId>,
}

impl NoteStore {
    /// Creates an empty store: no notes, filter `All`, composing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded from `config`.
    pub fn with_config(config: StoreConfig) -> Self {
        let mut store = Self::new();
        for text in config.seed_notes {
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            store.notes.push(Note::new(Uuid::new_v4(), text));
        }
        store
    }

    /// Appends a new incomplete note and clears the draft.
    ///
    /// # Errors
    /// - `EditInProgress` while the input is bound to an edit.
    /// - `EmptyText` when `text` is blank after trimming.
    pub fn add(&mut self, text: &str) -> StoreResult<NoteId> {
        if let Some(editing) = self.editing {
            return Err(rejected("note_add", StoreError::EditInProgress(editing)));
        }
        let text = normalize_text(text).map_err(|err| rejected("note_add", err))?;

        let id = Uuid::new_v4();
        self.notes.push(Note::new(id, text));
        self.draft.clear();
        info!(
            "event=note_add module=store status=ok note_id={} total={}",
            id,
            self.notes.len()
        );
        Ok(id)
    }

    /// Binds the input to an edit of `id`, loading its text into the draft.
    ///
    /// While another edit is open the input switches to `id`; calling it for
    /// the current target reloads the note text, discarding the draft.
    ///
    /// # Errors
    /// - `NoteNotFound` when `id` is unknown.
    pub fn start_edit(&mut self, id: NoteId) -> StoreResult<()> {
        let text = match self.get(id) {
            Some(note) => note.text.clone(),
            None => return Err(rejected("note_edit_start", StoreError::NoteNotFound(id))),
        };

        let previous = self.editing.replace(id);
        self.draft = text;
        match previous {
            Some(prev) if prev != id => info!(
                "event=note_edit_start module=store status=ok note_id={id} switched_from={prev}"
            ),
            _ => info!("event=note_edit_start module=store status=ok note_id={id}"),
        }
        Ok(())
    }

    /// Replaces the edited note's text, keeping its flag and position.
    ///
    /// # Errors
    /// - `NotEditing` while composing.
    /// - `EmptyText` when `text` is blank; the edit stays active.
    pub fn commit_edit(&mut self, text: &str) -> StoreResult<NoteId> {
        let Some(id) = self.editing else {
            return Err(rejected("note_edit_commit", StoreError::NotEditing));
        };
        let text = normalize_text(text).map_err(|err| rejected("note_edit_commit", err))?;
        let Some(index) = self.position(id) else {
            // Unreachable while `delete` keeps `editing` in sync.
            return Err(rejected("note_edit_commit", StoreError::NoteNotFound(id)));
        };

        self.notes[index].text = text.to_string();
        self.editing = None;
        self.draft.clear();
        info!("event=note_edit_commit module=store status=ok note_id={id}");
        Ok(id)
    }

    /// Flips `completed` on one note and returns the new value.
    ///
    /// # Errors
    /// - `NoteNotFound` when `id` is unknown.
    pub fn toggle(&mut self, id: NoteId) -> StoreResult<bool> {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return Err(rejected("note_toggle", StoreError::NoteNotFound(id)));
        };

        note.completed = !note.completed;
        let completed = note.completed;
        info!("event=note_toggle module=store status=ok note_id={id} completed={completed}");
        Ok(completed)
    }

    /// Removes one note and returns it. Deleting the edit target returns the
    /// input to composing with an empty draft.
    ///
    /// # Errors
    /// - `NoteNotFound` when `id` is unknown.
    pub fn delete(&mut self, id: NoteId) -> StoreResult<Note> {
        let Some(index) = self.position(id) else {
            return Err(rejected("note_delete", StoreError::NoteNotFound(id)));
        };

        let removed = self.notes.remove(index);
        let cleared_edit = self.editing == Some(id);
        if cleared_edit {
            self.editing = None;
            self.draft.clear();
        }
        info!(
            "event=note_delete module=store status=ok note_id={id} cleared_edit={cleared_edit} total={}",
            self.notes.len()
        );
        Ok(removed)
    }

    /// Sets the visibility filter. Never touches the notes.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        debug!("event=filter_set module=store status=ok filter={filter}");
    }

    /// Mirrors the text input as the user types.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Commits the draft through `add` or `commit_edit` depending on mode.
    pub fn submit(&mut self) -> StoreResult<Submitted> {
        let draft = self.draft.clone();
        match self.input_mode() {
            InputMode::Composing => self.add(&draft).map(Submitted::Added),
            InputMode::Editing(_) => self.commit_edit(&draft).map(Submitted::Updated),
        }
    }

    /// Notes passing the current filter, in store order.
    ///
    /// Re-derived on every call; nothing is cached.
    pub fn visible_notes(&self) -> impl Iterator<Item = &Note> + '_ {
        let filter = self.filter;
        self.notes.iter().filter(move |note| filter.matches(note))
    }

    /// All notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn editing(&self) -> Option<NoteId> {
        self.editing
    }

    pub fn input_mode(&self) -> InputMode {
        match self.editing {
            Some(id) => InputMode::Editing(id),
            None => InputMode::Composing,
        }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Totals for each filter, independent of the current one.
    pub fn counts(&self) -> NoteCounts {
        let completed = self.notes.iter().filter(|note| note.completed).count();
        NoteCounts {
            all: self.notes.len(),
            active: self.notes.len() - completed,
            completed,
        }
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }
}

fn normalize_text(text: &str) -> StoreResult<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StoreError::EmptyText);
    }
    Ok(trimmed)
}

fn rejected(event: &str, err: StoreError) -> StoreError {
    debug!(
        "event={event} module=store status=rejected reason={}",
        err.code()
    );
    err
}
