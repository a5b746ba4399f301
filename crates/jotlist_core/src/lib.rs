//! Core domain logic for Jotlist.
//! This crate is the single source of truth for note list invariants.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::note::{Filter, FilterParseError, Note, NoteId};
pub use store::command::{Command, CommandEffect};
pub use store::note_store::{
    InputMode, NoteCounts, NoteStore, StoreConfig, StoreError, StoreResult, Submitted,
};
pub use store::snapshot::StoreSnapshot;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
