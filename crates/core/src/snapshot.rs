use crate::pieces::ShapeMatrix;
use crate::types::{Cell, Phase, PieceKind, Position, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub position: Position,
}

impl ActiveSnapshot {
    /// Board coordinates of the piece's cells at `origin`
    pub fn cells_at(&self, origin: Position) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (origin.x + dx, origin.y + dy))
    }
}

/// Everything a renderer or audio observer reads from one game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Hard-drop landing position of the active piece
    pub shadow: Option<Position>,
    pub next: PieceKind,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub phase: Phase,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            shadow: None,
            next: PieceKind::I,
            score: 0,
            level: 0,
            lines: 0,
            phase: Phase::Ready,
        }
    }
}
