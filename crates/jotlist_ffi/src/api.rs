//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the note list store to Dart via FRB as an opaque board handle.
//! - Translate store rejections into simple response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Note ids cross the boundary as hyphenated UUID strings.
//! - Each board owns its own store; there is no process-wide note state.

use jotlist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Command, CommandEffect, Filter, InputMode, NoteId, NoteStore, StoreConfig, StoreError,
};
use log::warn;
use uuid::Uuid;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One rendered row of the visible list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardItem {
    /// Stable note ID in string form.
    pub note_id: String,
    pub text: String,
    pub completed: bool,
}

/// Render model for one frame of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Visible rows in store order.
    pub items: Vec<BoardItem>,
    /// Active filter (`all|active|completed`).
    pub filter: String,
    /// Input mode (`composing|editing`).
    pub mode: String,
    /// Note being edited, when `mode == "editing"`.
    pub editing_note_id: Option<String>,
    /// Current text-input value.
    pub draft: String,
    pub input_placeholder: String,
    pub commit_label: String,
    pub total: u32,
    pub active: u32,
    pub completed: u32,
}

/// Generic action response envelope for board commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// Whether the command was applied.
    pub ok: bool,
    /// Note touched by the command, when any.
    pub note_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl BoardActionResponse {
    fn success(message: impl Into<String>, note_id: Option<NoteId>) -> Self {
        Self {
            ok: true,
            note_id: note_id.map(|id| id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            note_id: None,
            message: message.into(),
        }
    }
}

/// Opaque handle owning one note list store.
#[flutter_rust_bridge::frb(opaque)]
pub struct NoteBoard {
    store: NoteStore,
}

impl NoteBoard {
    /// Creates an empty board.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self {
            store: NoteStore::new(),
        }
    }

    /// Creates a board seeded with the demo sample note.
    #[flutter_rust_bridge::frb(sync)]
    pub fn demo() -> Self {
        Self {
            store: NoteStore::with_config(StoreConfig::demo()),
        }
    }

    /// Mirrors the text field. Always succeeds.
    #[flutter_rust_bridge::frb(sync)]
    pub fn set_draft(&mut self, text: String) -> BoardActionResponse {
        self.apply("set_draft", Command::SetDraft(text))
    }

    /// Commit trigger: adds while composing, updates while editing.
    #[flutter_rust_bridge::frb(sync)]
    pub fn submit(&mut self) -> BoardActionResponse {
        self.apply("submit", Command::Submit)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn add(&mut self, text: String) -> BoardActionResponse {
        self.apply("add", Command::Add(text))
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn start_edit(&mut self, note_id: String) -> BoardActionResponse {
        match parse_note_id(&note_id) {
            Ok(id) => self.apply("start_edit", Command::StartEdit(id)),
            Err(response) => response,
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn commit_edit(&mut self, text: String) -> BoardActionResponse {
        self.apply("commit_edit", Command::CommitEdit(text))
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn toggle(&mut self, note_id: String) -> BoardActionResponse {
        match parse_note_id(&note_id) {
            Ok(id) => self.apply("toggle", Command::Toggle(id)),
            Err(response) => response,
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn delete(&mut self, note_id: String) -> BoardActionResponse {
        match parse_note_id(&note_id) {
            Ok(id) => self.apply("delete", Command::Delete(id)),
            Err(response) => response,
        }
    }

    /// Sets the filter from `all|active|completed` (case-insensitive).
    #[flutter_rust_bridge::frb(sync)]
    pub fn set_filter(&mut self, filter: String) -> BoardActionResponse {
        match filter.parse::<Filter>() {
            Ok(filter) => self.apply("set_filter", Command::SetFilter(filter)),
            Err(err) => BoardActionResponse::failure(format!("set_filter failed: {err}")),
        }
    }

    /// Renders the current frame.
    #[flutter_rust_bridge::frb(sync)]
    pub fn view(&self) -> BoardView {
        let snapshot = self.store.snapshot();
        let editing_note_id = match snapshot.mode {
            InputMode::Editing(id) => Some(id.to_string()),
            InputMode::Composing => None,
        };
        BoardView {
            items: snapshot
                .visible
                .into_iter()
                .map(|note| BoardItem {
                    note_id: note.id.to_string(),
                    text: note.text,
                    completed: note.completed,
                })
                .collect(),
            filter: snapshot.filter.as_str().to_string(),
            mode: snapshot.mode.as_str().to_string(),
            editing_note_id,
            draft: snapshot.draft,
            input_placeholder: snapshot.mode.placeholder().to_string(),
            commit_label: snapshot.mode.commit_label().to_string(),
            total: saturating_u32(snapshot.counts.all),
            active: saturating_u32(snapshot.counts.active),
            completed: saturating_u32(snapshot.counts.completed),
        }
    }

    fn apply(&mut self, action: &str, command: Command) -> BoardActionResponse {
        match self.store.dispatch(command) {
            Ok(effect) => BoardActionResponse::success(effect_message(&effect), effect.note_id()),
            Err(err) => rejection_response(action, &err),
        }
    }
}

impl Default for NoteBoard {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_note_id(raw: &str) -> Result<NoteId, BoardActionResponse> {
    Uuid::parse_str(raw.trim()).map_err(|err| {
        warn!("event=ffi_bad_note_id module=ffi status=error error={err}");
        BoardActionResponse::failure(format!("invalid note_id: {err}"))
    })
}

fn effect_message(effect: &CommandEffect) -> &'static str {
    match effect {
        CommandEffect::DraftChanged => "Draft updated.",
        CommandEffect::Added(_) => "Note added.",
        CommandEffect::EditStarted(_) => "Editing note.",
        CommandEffect::Updated(_) => "Note updated.",
        CommandEffect::Toggled {
            completed: true, ..
        } => "Note completed.",
        CommandEffect::Toggled {
            completed: false, ..
        } => "Note reopened.",
        CommandEffect::Deleted(_) => "Note deleted.",
        CommandEffect::FilterChanged(_) => "Filter changed.",
    }
}

fn rejection_response(action: &str, err: &StoreError) -> BoardActionResponse {
    BoardActionResponse::failure(format!("{action} rejected: {err}"))
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging, ping, NoteBoard};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn board_add_toggle_filter_round_trip() {
        let mut board = NoteBoard::new();
        let added = board.add("buy milk".to_string());
        assert!(added.ok, "{}", added.message);
        let note_id = added.note_id.expect("add should return note_id");

        let toggled = board.toggle(note_id.clone());
        assert!(toggled.ok);
        assert_eq!(toggled.message, "Note completed.");

        assert!(board.set_filter("Active".to_string()).ok);
        assert!(board.view().items.is_empty());

        assert!(board.set_filter("completed".to_string()).ok);
        let view = board.view();
        assert_eq!(view.filter, "completed");
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].note_id, note_id);
        assert!(view.items[0].completed);
        assert_eq!(view.completed, 1);
    }

    #[test]
    fn board_edit_flow_switches_labels() {
        let mut board = NoteBoard::demo();
        let sample_id = board.view().items[0].note_id.clone();

        assert!(board.start_edit(sample_id.clone()).ok);
        let editing = board.view();
        assert_eq!(editing.mode, "editing");
        assert_eq!(editing.editing_note_id.as_deref(), Some(sample_id.as_str()));
        assert_eq!(editing.draft, "Sample note");
        assert_eq!(editing.commit_label, "Update");

        assert!(board.set_draft("Renamed".to_string()).ok);
        let submitted = board.submit();
        assert!(submitted.ok, "{}", submitted.message);
        assert_eq!(submitted.note_id.as_deref(), Some(sample_id.as_str()));

        let view = board.view();
        assert_eq!(view.mode, "composing");
        assert_eq!(view.commit_label, "Add");
        assert_eq!(view.input_placeholder, "Enter note…");
        assert_eq!(view.items[0].text, "Renamed");
    }

    #[test]
    fn board_rejects_malformed_ids_and_blank_text() {
        let mut board = NoteBoard::new();
        let bad = board.delete("not-a-uuid".to_string());
        assert!(!bad.ok);
        assert!(bad.message.contains("invalid note_id"));

        let blank = board.add("   ".to_string());
        assert!(!blank.ok);
        assert!(blank.message.contains("cannot be empty"));

        let filter = board.set_filter("someday".to_string());
        assert!(!filter.ok);
        assert_eq!(board.view().total, 0);
    }

    #[test]
    fn board_delete_of_edit_target_returns_to_composing() {
        let mut board = NoteBoard::new();
        let note_id = board.add("temp".to_string()).note_id.unwrap();
        assert!(board.start_edit(note_id.clone()).ok);
        assert!(board.delete(note_id).ok);

        let view = board.view();
        assert_eq!(view.mode, "composing");
        assert!(view.draft.is_empty());
        assert!(!board.commit_edit("late".to_string()).ok);
    }

    #[test]
    fn board_start_edit_switches_between_notes() {
        let mut board = NoteBoard::new();
        let first = board.add("first".to_string()).note_id.unwrap();
        let second = board.add("second".to_string()).note_id.unwrap();

        assert!(board.start_edit(first).ok);
        let switched = board.start_edit(second.clone());
        assert!(switched.ok, "{}", switched.message);

        let view = board.view();
        assert_eq!(view.editing_note_id.as_deref(), Some(second.as_str()));
        assert_eq!(view.draft, "second");
    }
}
