//! Core types module - shared data structures and constants
//!
//! Everything in this crate is plain data with no dependencies, so it can be
//! used by the engine, the input mapping and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the spawn edge)
//!
//! # Drop Intervals by Level
//!
//! Gravity speeds up with level (milliseconds per row):
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 800ms |
//! | 1 | 720ms |
//! | 2 | 630ms |
//! | 3 | 550ms |
//! | 4 | 470ms |
//! | 5 | 380ms |
//! | 6 | 300ms |
//! | 7 | 220ms |
//! | 8 | 130ms |
//! | 9 | 100ms |
//! | 10+ | 80ms |

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame period of the terminal driver (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table, indexed by lines cleared.
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points awarded for each soft drop command
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points awarded per row fallen during a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// Drop intervals by level (milliseconds per row)
///
/// Levels past the end of the table use the last entry.
pub const DROP_INTERVALS_MS: [u64; 11] = [800, 720, 630, 550, 470, 380, 300, 220, 130, 100, 80];

/// Offsets tried, in order, when a rotation collides in place.
///
/// This is one small table applied to every piece kind, not per-piece SRS data.
pub const KICK_OFFSETS: [(i8, i8); 5] = [(1, 0), (-1, 0), (0, -1), (2, 0), (-2, 0)];


/// 24-bit RGB color carried by filled cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The seven piece kinds
///
/// - **I**: Cyan, 4x4 frame
/// - **J**: Blue
/// - **L**: Orange
/// - **O**: Yellow, 2x2 frame
/// - **S**: Green
/// - **T**: Magenta
/// - **Z**: Red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Fixed display color of the kind
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::rgb(0x00, 0xFF, 0xFF),
            PieceKind::J => Color::rgb(0x00, 0x00, 0xFF),
            PieceKind::L => Color::rgb(0xFF, 0xA5, 0x00),
            PieceKind::O => Color::rgb(0xFF, 0xFF, 0x00),
            PieceKind::S => Color::rgb(0x00, 0xFF, 0x00),
            PieceKind::T => Color::rgb(0xFF, 0x00, 0xFF),
            PieceKind::Z => Color::rgb(0xFF, 0x00, 0x00),
        }
    }
}

/// A cell on the game board
///
/// Empty cells carry no color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Filled(color) => Some(*color),
        }
    }
}

/// Board-relative offset of a piece matrix's top-left corner.
///
/// May be negative or out of range for candidate moves. A committed position
/// is collision-free unless the piece was just promoted onto the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Lifecycle phase of a game
///
/// `Ready → Playing → {Paused ⇄ Playing} → GameOver`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Ready,
    Playing,
    Paused,
    GameOver,
}

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDir {
    Clockwise,
    CounterClockwise,
}

/// Horizontal move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDir {
    Left,
    Right,
}

impl MoveDir {
    pub fn dx(&self) -> i8 {
        match self {
            MoveDir::Left => -1,
            MoveDir::Right => 1,
        }
    }
}

/// Commands an input driver can issue against the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down (with soft drop scoring)
    SoftDrop,
    /// Instantly drop piece to lowest valid position
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Leave `Ready` (or `Paused`) for `Playing`
    Start,
    /// Toggle pause state
    Pause,
    /// Discard the game and return to `Ready`
    Restart,
}

impl GameAction {
    /// Whether the action manipulates the active piece
    pub fn is_piece_command(&self) -> bool {
        !matches!(
            self,
            GameAction::Start | GameAction::Pause | GameAction::Restart
        )
    }
}
