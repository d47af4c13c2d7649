//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and nothing else: no terminal, no
//! clock, no I/O. A driver owns one [`GameState`] value, feeds it commands and
//! clock readings, and replaces it with whatever each command returns.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven catalog shapes and colors
//! - [`geometry`]: collision test and matrix rotation
//! - [`board`]: 10x20 grid with merge and line clearing
//! - [`rng`]: uniform piece generator (seeded LCG) and fixed sequences
//! - [`scoring`]: line clear, drop and level arithmetic
//! - [`timing`]: level → gravity interval and the "is a drop due" gate
//! - [`game_state`]: the state machine
//! - [`snapshot`] / [`cues`]: what renderers and audio observers read
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, PieceGenerator};
//! use blockfall_core::types::{Phase, PieceKind};
//!
//! let game = GameState::with_generator(PieceGenerator::sequence(&[PieceKind::O]), 0).start();
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! let game = game.move_right().hard_drop(16);
//! assert_eq!(game.score(), 36); // 18 rows at 2 points each
//! assert_eq!(game.board().filled_count(), 4);
//! ```
//!
//! # Rotation
//!
//! Rotation turns the full catalog matrix and, when that collides, tries a
//! single kick table shared by all kinds: `+1x, -1x, up 1, +2x, -2x`. This is a
//! deliberate simplification and not SRS.

pub mod board;
pub mod cues;
pub mod game_state;
pub mod geometry;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod timing;

pub use blockfall_types as types;

pub use board::Board;
pub use cues::{cues_between, Cue};
pub use game_state::{landing_position, spawn_position, GameState};
pub use geometry::{collides, rotate_ccw, rotate_cw};
pub use pieces::{catalog_shape, Piece, ShapeMatrix};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{hard_drop_score, level_for_lines, score_for_clear, soft_drop_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use timing::{drop_interval_ms, should_gravity_tick};
