//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events to [`crate::types::GameAction`] values. The
//! mapping depends on the current [`crate::types::Phase`] because the same key
//! means different things in the menu overlays and during play.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_key, should_quit, KeyActions};
