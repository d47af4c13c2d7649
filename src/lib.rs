//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates as `blockfall::{types, core, input, term}` so
//! integration tests and the binary depend on one package. The rules live in
//! `blockfall::core`; everything else is a driver around it.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
