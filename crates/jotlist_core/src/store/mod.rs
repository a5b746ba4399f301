//! Note list store and its command surface.
//!
//! # Responsibility
//! - Hold the single exclusively-owned note list state.
//! - Expose every user action both as a method and as `Command` data.
//! - Produce a serializable render model for view layers.
//!
//! # Invariants
//! - Commands run to completion synchronously; nothing is shared.
//! - A rejected command never mutates state.

pub mod command;
pub mod note_store;
pub mod snapshot;
