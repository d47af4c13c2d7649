//! Terminal renderer.
//!
//! A small, game-oriented rendering layer: [`GameView`] draws a
//! [`core::GameSnapshot`] into a [`FrameBuffer`] with no I/O, and [`Screen`]
//! diffs successive framebuffers onto a real terminal through `crossterm`.
//! Board cells are two columns wide to offset the glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame, Screen};
