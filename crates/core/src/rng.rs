//! RNG module - piece generation
//!
//! Pieces are drawn independently and uniformly from the seven kinds. There
//! is no 7-bag, so droughts and repeats are possible.
//!
//! The generator lives inside the game state, which keeps every transition a
//! pure function of its input: cloning a state clones its future pieces too.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales the full 32-bit output instead of taking a modulus, since the
    /// low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Source of upcoming piece kinds
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PieceGenerator {
    /// Independent uniform draws
    Uniform(SimpleRng),
    /// A fixed list of kinds, repeated forever
    Sequence { kinds: Vec<PieceKind>, cursor: usize },
}

impl PieceGenerator {
    pub fn uniform(seed: u32) -> Self {
        PieceGenerator::Uniform(SimpleRng::new(seed))
    }

    /// Cycle through `kinds`; an empty list falls back to `I` pieces.
    pub fn sequence(kinds: &[PieceKind]) -> Self {
        let kinds = if kinds.is_empty() {
            vec![PieceKind::I]
        } else {
            kinds.to_vec()
        };
        PieceGenerator::Sequence { kinds, cursor: 0 }
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        match self {
            PieceGenerator::Uniform(rng) => {
                PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
            }
            PieceGenerator::Sequence { kinds, cursor } => {
                let kind = kinds[*cursor % kinds.len()];
                *cursor = (*cursor + 1) % kinds.len();
                kind
            }
        }
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::uniform(1)
    }
}
