//! Data form of store commands.
//!
//! View layers bind each row's handlers to that row's id as `Command`
//! values and feed them through `NoteStore::dispatch`.

use crate::model::note::{Filter, Note, NoteId};
use crate::store::note_store::{NoteStore, StoreResult, Submitted};

/// One user action against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetDraft(String),
    Submit,
    Add(String),
    StartEdit(NoteId),
    CommitEdit(String),
    Toggle(NoteId),
    Delete(NoteId),
    SetFilter(Filter),
}

/// What an applied command changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEffect {
    DraftChanged,
    Added(NoteId),
    EditStarted(NoteId),
    Updated(NoteId),
    Toggled { id: NoteId, completed: bool },
    Deleted(Note),
    FilterChanged(Filter),
}

impl CommandEffect {
    /// Note touched by this effect, if any.
    pub fn note_id(&self) -> Option<NoteId> {
        match self {
            Self::Added(id) | Self::EditStarted(id) | Self::Updated(id) => Some(*id),
            Self::Toggled { id, .. } => Some(*id),
            Self::Deleted(note) => Some(note.id),
            Self::DraftChanged | Self::FilterChanged(_) => None,
        }
    }
}

impl From<Submitted> for CommandEffect {
    fn from(value: Submitted) -> Self {
        match value {
            Submitted::Added(id) => Self::Added(id),
            Submitted::Updated(id) => Self::Updated(id),
        }
    }
}

impl NoteStore {
    /// Applies one command. Errors leave the store unchanged.
    pub fn dispatch(&mut self, command: Command) -> StoreResult<CommandEffect> {
        match command {
            Command::SetDraft(text) => {
                self.set_draft(text);
                Ok(CommandEffect::DraftChanged)
            }
            Command::Submit => self.submit().map(CommandEffect::from),
            Command::Add(text) => self.add(&text).map(CommandEffect::Added),
            Command::StartEdit(id) => self.start_edit(id).map(|()| CommandEffect::EditStarted(id)),
            Command::CommitEdit(text) => self.commit_edit(&text).map(CommandEffect::Updated),
            Command::Toggle(id) => self
                .toggle(id)
                .map(|completed| CommandEffect::Toggled { id, completed }),
            Command::Delete(id) => self.delete(id).map(CommandEffect::Deleted),
            Command::SetFilter(filter) => {
                self.set_filter(filter);
                Ok(CommandEffect::FilterChanged(filter))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, CommandEffect};
    use crate::model::note::Filter;
    use crate::store::note_store::{NoteStore, StoreError};

    #[test]
    fn dispatch_routes_submit_by_mode() {
        let mut store = NoteStore::new();
        store.dispatch(Command::SetDraft("draft".to_string())).unwrap();
        let added = store.dispatch(Command::Submit).unwrap();
        let id = added.note_id().unwrap();
        assert_eq!(added, CommandEffect::Added(id));

        store.dispatch(Command::StartEdit(id)).unwrap();
        store.dispatch(Command::SetDraft("redraft".to_string())).unwrap();
        assert_eq!(
            store.dispatch(Command::Submit).unwrap(),
            CommandEffect::Updated(id)
        );
        assert_eq!(store.get(id).unwrap().text, "redraft");
    }

    #[test]
    fn dispatch_reports_toggle_and_filter_effects() {
        let mut store = NoteStore::new();
        let id = store.add("a").unwrap();
        assert_eq!(
            store.dispatch(Command::Toggle(id)).unwrap(),
            CommandEffect::Toggled {
                id,
                completed: true
            }
        );
        assert_eq!(
            store.dispatch(Command::SetFilter(Filter::Completed)).unwrap(),
            CommandEffect::FilterChanged(Filter::Completed)
        );
        assert_eq!(CommandEffect::FilterChanged(Filter::All).note_id(), None);
    }

    #[test]
    fn dispatch_passes_rejections_through() {
        let mut store = NoteStore::new();
        let err = store
            .dispatch(Command::CommitEdit("x".to_string()))
            .unwrap_err();
        assert_eq!(err, StoreError::NotEditing);
    }
}
