//! Domain model for the note list.
//!
//! # Responsibility
//! - Define the note record and the list filter shared by store and views.
//! - Keep view-facing wire names stable through serde attributes.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion is a hard removal; there are no tombstones.

pub mod note;
