//! Sound cues derived by diffing successive snapshots
//!
//! The engine never pushes notifications. An observer keeps the previous
//! snapshot and asks which cues the transition to the new one produced.

use arrayvec::ArrayVec;

use crate::snapshot::GameSnapshot;
use crate::types::Phase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Level went up (to `level`)
    LevelUp { level: u32 },
    /// The game just ended
    GameOver,
}

/// Cues produced by the transition `prev → next`
pub fn cues_between(prev: &GameSnapshot, next: &GameSnapshot) -> ArrayVec<Cue, 2> {
    let mut cues = ArrayVec::new();
    if next.level > prev.level {
        cues.push(Cue::LevelUp { level: next.level });
    }
    if next.phase == Phase::GameOver && prev.phase != Phase::GameOver {
        cues.push(Cue::GameOver);
    }
    cues
}
