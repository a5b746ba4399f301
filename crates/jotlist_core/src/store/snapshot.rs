//! Serializable render model.

use crate::model::note::{Filter, Note};
use crate::store::note_store::{InputMode, NoteCounts, NoteStore};
use serde::{Deserialize, Serialize};

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Notes passing `filter`, in store order.
    pub visible: Vec<Note>,
    pub filter: Filter,
    pub mode: InputMode,
    /// Current text-input value.
    pub draft: String,
    pub counts: NoteCounts,
}

impl NoteStore {
    /// Captures the current render model.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            visible: self.visible_notes().cloned().collect(),
            filter: self.filter(),
            mode: self.input_mode(),
            draft: self.draft().to_string(),
            counts: self.counts(),
        }
    }
}
