//! Flutter-facing bindings for the Jotlist core.

pub mod api;
