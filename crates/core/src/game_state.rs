//! Game state module - the authoritative game value and its transitions
//!
//! A [`GameState`] is never mutated through its public API. Every command
//! (`move_left`, `rotate`, `hard_drop`, `tick`, ...) reads the current value
//! and returns its successor; the driver installs the returned value before
//! issuing the next command. Commands that do not apply (wrong phase, would
//! collide) return an identical copy.

use log::{debug, info};

use crate::board::Board;
use crate::geometry::collides;
use crate::pieces::Piece;
use crate::rng::PieceGenerator;
use crate::scoring::{hard_drop_score, level_for_lines, score_for_clear, soft_drop_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::timing::should_gravity_tick;
use crate::types::*;

/// Spawn position for a piece: horizontally centered on row 0
pub fn spawn_position(piece: &Piece) -> Position {
    Position::new(
        (BOARD_WIDTH / 2) as i8 - (piece.width() / 2) as i8,
        0,
    )
}

/// Lowest position the piece can reach by falling straight down from `from`,
/// with the number of rows it would fall.
pub fn landing_position(piece: &Piece, from: Position, board: &Board) -> (Position, u32) {
    let mut position = from;
    let mut rows = 0;
    while !collides(piece, position.offset(0, 1), board) {
        position = position.offset(0, 1);
        rows += 1;
    }
    (position, rows)
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    position: Position,
    next: Piece,
    generator: PieceGenerator,
    score: u32,
    level: u32,
    lines: u32,
    phase: Phase,
    /// Clock reading (ms) of the last downward step.
    last_gravity_ms: u64,
}

impl GameState {
    /// Create a new game drawing pieces uniformly from `seed`
    pub fn new(seed: u32, now_ms: u64) -> Self {
        Self::with_generator(PieceGenerator::uniform(seed), now_ms)
    }

    /// Create a new game in `Ready` with an empty board, drawing the active
    /// and next pieces from `generator`.
    pub fn with_generator(mut generator: PieceGenerator, now_ms: u64) -> Self {
        let active = Piece::new(generator.draw());
        let next = Piece::new(generator.draw());

        Self {
            board: Board::new(),
            active: Some(active),
            position: spawn_position(&active),
            next,
            generator,
            score: 0,
            level: 0,
            lines: 0,
            phase: Phase::Ready,
            last_gravity_ms: now_ms,
        }
    }

    /// Replace the board, for setting up positions.
    ///
    /// Full rows in `board` are removed first (without scoring).
    pub fn with_board(self, board: Board) -> Self {
        Self {
            board: board.cleared().0,
            ..self
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_gravity_ms(&self) -> u64 {
        self.last_gravity_ms
    }

    fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Where the active piece would land if hard-dropped now
    pub fn shadow_position(&self) -> Option<Position> {
        let active = self.active?;
        Some(landing_position(&active, self.position, &self.board).0)
    }

    /// `Ready` or `Paused` → `Playing`; no-op otherwise
    pub fn start(&self) -> Self {
        match self.phase {
            Phase::Ready | Phase::Paused => Self {
                phase: Phase::Playing,
                ..self.clone()
            },
            Phase::Playing | Phase::GameOver => self.clone(),
        }
    }

    /// Toggle `Playing ⇄ Paused`; no-op from any other phase
    pub fn pause(&self) -> Self {
        let phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            other => other,
        };
        Self {
            phase,
            ..self.clone()
        }
    }

    /// `Paused` → `Playing`; no-op otherwise
    pub fn resume(&self) -> Self {
        if self.phase == Phase::Paused {
            self.pause()
        } else {
            self.clone()
        }
    }

    /// Throw the game away and return a fresh `Ready` state.
    ///
    /// The piece generator keeps advancing, so the new game does not replay
    /// the old sequence.
    pub fn restart(&self, now_ms: u64) -> Self {
        info!("restart after score={} lines={}", self.score, self.lines);
        Self::with_generator(self.generator.clone(), now_ms)
    }

    pub fn move_left(&self) -> Self {
        self.move_horizontal(MoveDir::Left)
    }

    pub fn move_right(&self) -> Self {
        self.move_horizontal(MoveDir::Right)
    }

    /// Shift the active piece one column; unchanged if it would collide
    pub fn move_horizontal(&self, dir: MoveDir) -> Self {
        let Some(active) = self.active.filter(|_| self.is_playing()) else {
            return self.clone();
        };

        let candidate = self.position.offset(dir.dx(), 0);
        if collides(&active, candidate, &self.board) {
            return self.clone();
        }

        Self {
            position: candidate,
            ..self.clone()
        }
    }

    pub fn rotate_cw(&self) -> Self {
        self.rotate(RotateDir::Clockwise)
    }

    pub fn rotate_ccw(&self) -> Self {
        self.rotate(RotateDir::CounterClockwise)
    }

    /// Rotate the active piece, trying [`KICK_OFFSETS`] in order if it
    /// collides in place. Unchanged if every candidate collides.
    pub fn rotate(&self, dir: RotateDir) -> Self {
        let Some(active) = self.active.filter(|_| self.is_playing()) else {
            return self.clone();
        };

        let rotated = match dir {
            RotateDir::Clockwise => active.rotated_cw(),
            RotateDir::CounterClockwise => active.rotated_ccw(),
        };

        let candidates = std::iter::once((0, 0)).chain(KICK_OFFSETS);
        for (dx, dy) in candidates {
            let position = self.position.offset(dx, dy);
            if !collides(&rotated, position, &self.board) {
                return Self {
                    active: Some(rotated),
                    position,
                    ..self.clone()
                };
            }
        }

        self.clone()
    }

    /// Player-driven one-row drop, worth [`SOFT_DROP_POINTS`] whether it
    /// moves the piece or locks it.
    pub fn soft_drop(&self, now_ms: u64) -> Self {
        if !self.is_playing() {
            return self.clone();
        }
        let next = self.step_down(now_ms);
        Self {
            score: next.score.saturating_add(soft_drop_score()),
            ..next
        }
    }

    /// Automatic one-row drop, unconditionally (see [`GameState::tick`]).
    pub fn gravity_tick(&self, now_ms: u64) -> Self {
        if !self.is_playing() {
            return self.clone();
        }
        self.step_down(now_ms)
    }

    /// Drop the active piece to its landing row and lock it there.
    pub fn hard_drop(&self, now_ms: u64) -> Self {
        let Some(active) = self.active.filter(|_| self.is_playing()) else {
            return self.clone();
        };

        let (position, rows) = landing_position(&active, self.position, &self.board);
        let dropped = Self {
            position,
            score: self.score.saturating_add(hard_drop_score(rows)),
            ..self.clone()
        };
        dropped.lock(now_ms)
    }

    /// Advance the simulation to `now_ms`: apply one gravity step if a full
    /// drop interval has passed since the last downward step.
    pub fn tick(&self, now_ms: u64) -> Self {
        if self.is_playing() && should_gravity_tick(self.last_gravity_ms, self.level, now_ms) {
            self.gravity_tick(now_ms)
        } else {
            self.clone()
        }
    }

    /// Apply a driver command
    pub fn apply_action(&self, action: GameAction, now_ms: u64) -> Self {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(now_ms),
            GameAction::HardDrop => self.hard_drop(now_ms),
            GameAction::RotateCw => self.rotate_cw(),
            GameAction::RotateCcw => self.rotate_ccw(),
            GameAction::Start => self.start(),
            GameAction::Pause => self.pause(),
            GameAction::Restart => self.restart(now_ms),
        }
    }

    /// Move down one row, or lock in place if that collides
    fn step_down(&self, now_ms: u64) -> Self {
        let Some(active) = self.active else {
            return self.clone();
        };

        let candidate = self.position.offset(0, 1);
        if collides(&active, candidate, &self.board) {
            return self.lock(now_ms);
        }

        Self {
            position: candidate,
            last_gravity_ms: now_ms,
            ..self.clone()
        }
    }

    /// Merge the active piece, clear lines, score, and bring in the next piece.
    ///
    /// A piece that locks without having left the spawn row ends the game.
    fn lock(&self, now_ms: u64) -> Self {
        let Some(active) = self.active else {
            return self.clone();
        };

        let merged = self.board.merged(&active, self.position);
        let (board, cleared) = merged.cleared();
        let score = self
            .score
            .saturating_add(score_for_clear(cleared, self.level));
        let lines = self.lines.saturating_add(cleared);
        let level = level_for_lines(lines);

        debug!(
            "lock {:?} at ({}, {}), cleared {}",
            active.kind, self.position.x, self.position.y, cleared
        );
        if level > self.level {
            info!("level up: {} -> {}", self.level, level);
        }

        let locked = Self {
            board,
            score,
            lines,
            level,
            last_gravity_ms: now_ms,
            ..self.clone()
        };

        if self.position.y <= 0 {
            info!("game over: locked at spawn row, score={}", score);
            return Self {
                phase: Phase::GameOver,
                ..locked
            };
        }

        // The next piece is promoted even onto the stack; it can still slide
        // out sideways, and otherwise locks on the spawn row at its next step.
        let promoted = self.next;
        let mut generator = self.generator.clone();
        let next = Piece::new(generator.draw());

        Self {
            active: Some(promoted),
            position: spawn_position(&promoted),
            next,
            generator,
            ..locked
        }
    }

    /// Renderer view of this state, including the shadow position
    pub fn snapshot(&self) -> GameSnapshot {
        let mut board = [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (dst, src) in board.iter_mut().zip(self.board.rows()) {
            dst.copy_from_slice(src);
        }

        GameSnapshot {
            board,
            active: self.active.map(|piece| ActiveSnapshot {
                kind: piece.kind,
                shape: piece.shape,
                position: self.position,
            }),
            shadow: self.shadow_position(),
            next: self.next.kind,
            score: self.score,
            level: self.level,
            lines: self.lines,
            phase: self.phase,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(kinds: &[PieceKind]) -> GameState {
        GameState::with_generator(PieceGenerator::sequence(kinds), 0).start()
    }

    fn filled() -> Cell {
        Cell::Filled(Color::rgb(128, 128, 128))
    }

    /// Fill row `y` except the given columns
    fn row_with_gaps(board: &mut Board, y: i8, gaps: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            if !gaps.contains(&x) {
                board.set(x, y, filled());
            }
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345, 100);

        assert_eq!(state.phase, Phase::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.last_gravity_ms, 100);
        assert!(state.active.is_some());
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn test_spawn_positions() {
        assert_eq!(spawn_position(&Piece::new(PieceKind::I)), Position::new(3, 0));
        assert_eq!(spawn_position(&Piece::new(PieceKind::O)), Position::new(4, 0));
        assert_eq!(spawn_position(&Piece::new(PieceKind::T)), Position::new(4, 0));
    }

    #[test]
    fn test_start_and_pause() {
        let state = GameState::new(1, 0);
        let started = state.start();
        assert_eq!(started.phase, Phase::Playing);

        let paused = started.pause();
        assert_eq!(paused.phase, Phase::Paused);
        assert_eq!(paused.pause().phase, Phase::Playing);
        assert_eq!(paused.resume().phase, Phase::Playing);
        assert_eq!(paused.start().phase, Phase::Playing);

        // Pause does nothing before the game starts.
        assert_eq!(state.pause(), state);
        assert_eq!(state.resume(), state);
    }

    #[test]
    fn test_move_horizontal() {
        let state = playing(&[PieceKind::T]);
        let x = state.position.x;

        assert_eq!(state.move_right().position.x, x + 1);
        assert_eq!(state.move_left().position.x, x - 1);
        assert_eq!(state.move_right().move_left(), state);
    }

    #[test]
    fn test_move_into_wall_is_noop() {
        let mut state = playing(&[PieceKind::T]);
        for _ in 0..10 {
            state = state.move_left();
        }
        assert_eq!(state.position.x, 0);
        assert_eq!(state.move_left(), state);
    }

    #[test]
    fn test_rotate_in_place() {
        let state = playing(&[PieceKind::T]);
        let rotated = state.rotate_cw();
        assert_eq!(rotated.position, state.position);
        assert_eq!(
            rotated.active.unwrap().shape,
            state.active.unwrap().rotated_cw().shape
        );
        assert_eq!(rotated.rotate_ccw(), state);
    }

    #[test]
    fn test_rotate_kicks_right_off_left_wall() {
        // Vertical I in the left-most column, matrix column 1 at x=0.
        let mut state = playing(&[PieceKind::I]).rotate_ccw();
        for _ in 0..10 {
            state = state.move_left();
        }
        // CCW leaves the bar in matrix column 1.
        assert_eq!(state.position.x, -1);
        let rotated = state.rotate_cw();
        // Bar spans matrix columns 0..3; at x=-1 that collides, +1x fits.
        assert_eq!(rotated.position, Position::new(0, state.position.y));
        assert_ne!(rotated.active, state.active);
    }

    #[test]
    fn test_rotate_kick_up() {
        // A pocket three columns wide (x=4..6) on rows 10-11 with a floor at row 12.
        let state = playing(&[PieceKind::T]);
        let mut board = Board::new();
        for y in 10..12 {
            row_with_gaps(&mut board, y, &[4, 5, 6]);
        }
        row_with_gaps(&mut board, 12, &[9]);
        let state = GameState {
            position: Position::new(4, 10),
            ..state.with_board(board)
        };
        assert!(!collides(&state.active.unwrap(), state.position, &state.board));

        // Clockwise needs (5,12); the side kicks hit the pocket walls or floor,
        // so the first free candidate is one row up.
        let rotated = state.rotate_cw();
        assert_eq!(rotated.position, Position::new(4, 9));
    }

    /// T at (4, 10) on a board with the given stones. Rotated clockwise, the
    /// T stem sits at column 5 + dx and its bottom cell at row 12 + dy.
    fn t_among_stones(stones: &[(i8, i8)]) -> GameState {
        let mut board = Board::new();
        for &(x, y) in stones {
            board.set(x, y, filled());
        }
        GameState {
            position: Position::new(4, 10),
            ..playing(&[PieceKind::T]).with_board(board)
        }
    }

    #[test]
    fn test_rotate_kick_left_before_up() {
        // In place and +1x hit row 12; -1x and up are both free.
        let state = t_among_stones(&[(5, 12), (6, 12)]);
        let rotated_t = state.active.unwrap().rotated_cw();
        assert!(!collides(&rotated_t, Position::new(4, 9), &state.board));

        assert_eq!(state.rotate_cw().position, Position::new(3, 10));
    }

    #[test]
    fn test_rotate_kick_two_right_before_two_left() {
        // Row 12 blocks in place and +/-1x, (5, 9) blocks up; +2x and -2x are free.
        let state = t_among_stones(&[(4, 12), (5, 12), (6, 12), (5, 9)]);
        let rotated_t = state.active.unwrap().rotated_cw();
        assert!(!collides(&rotated_t, Position::new(2, 10), &state.board));

        let rotated = state.rotate_cw();
        assert_eq!(rotated.position, Position::new(6, 10));
        assert_eq!(rotated.active, Some(rotated_t));
    }

    #[test]
    fn test_rotate_kick_two_left_is_last_resort() {
        let state = t_among_stones(&[(4, 12), (5, 12), (6, 12), (7, 12), (5, 9)]);
        assert_eq!(state.rotate_cw().position, Position::new(2, 10));

        // Blocking -2x too leaves the piece untouched.
        let stuck = t_among_stones(&[(3, 12), (4, 12), (5, 12), (6, 12), (7, 12), (5, 9)]);
        assert_eq!(stuck.rotate_cw(), stuck);
    }

    #[test]
    fn test_rotate_blocked_everywhere_is_noop() {
        let state = playing(&[PieceKind::I]);
        let mut board = Board::new();
        // Only the I's own row is open near it; column 0 stays empty so no row is full.
        for y in 0..BOARD_HEIGHT as i8 {
            if y != 1 {
                row_with_gaps(&mut board, y, &[0]);
            }
        }
        let state = state.with_board(board);
        assert_eq!(state.rotate_cw(), state);
        assert_eq!(state.rotate_ccw(), state);
    }

    #[test]
    fn test_soft_drop_moves_and_scores() {
        let state = playing(&[PieceKind::O]);
        let dropped = state.soft_drop(500);
        assert_eq!(dropped.position.y, 1);
        assert_eq!(dropped.score, SOFT_DROP_POINTS);
        assert_eq!(dropped.last_gravity_ms, 500);
    }

    #[test]
    fn test_gravity_tick_does_not_score() {
        let state = playing(&[PieceKind::O]);
        let dropped = state.gravity_tick(500);
        assert_eq!(dropped.position.y, 1);
        assert_eq!(dropped.score, 0);
    }

    #[test]
    fn test_tick_respects_interval() {
        let state = playing(&[PieceKind::O]);
        assert_eq!(state.tick(800), state);
        let ticked = state.tick(801);
        assert_eq!(ticked.position.y, 1);
        assert_eq!(ticked.last_gravity_ms, 801);
        // Clock restarted at 801.
        assert_eq!(ticked.tick(1_601), ticked);
        assert_eq!(ticked.tick(1_602).position.y, 2);
    }

    #[test]
    fn test_horizontal_move_keeps_gravity_clock() {
        let state = playing(&[PieceKind::T]);
        assert_eq!(state.move_left().last_gravity_ms, state.last_gravity_ms);
        assert_eq!(state.rotate_cw().last_gravity_ms, state.last_gravity_ms);
    }

    #[test]
    fn test_hard_drop_locks_and_promotes_next() {
        let state = playing(&[PieceKind::O, PieceKind::T, PieceKind::I]);
        let dropped = state.hard_drop(1_000);

        assert_eq!(dropped.score, hard_drop_score(18));
        assert_eq!(dropped.board.filled_count(), 4);
        assert!(dropped.board.is_occupied(4, 19));
        assert!(dropped.board.is_occupied(5, 18));
        assert_eq!(dropped.active.unwrap().kind, PieceKind::T);
        assert_eq!(dropped.position, Position::new(4, 0));
        assert_eq!(dropped.next.kind, PieceKind::I);
        assert_eq!(dropped.phase, Phase::Playing);
        assert_eq!(dropped.last_gravity_ms, 1_000);
    }

    #[test]
    fn test_line_clear_scores_and_levels() {
        // Bottom row full except where an I lands flat.
        let state = playing(&[PieceKind::I, PieceKind::O]);
        let mut board = Board::new();
        row_with_gaps(&mut board, 19, &[3, 4, 5, 6]);
        let state = GameState {
            lines: 9,
            ..state.with_board(board)
        };

        let dropped = state.hard_drop(0);
        // I lies on matrix row 1, so it falls from y=0 to y=18.
        assert_eq!(dropped.lines, 10);
        assert_eq!(dropped.level, 1);
        assert_eq!(dropped.score, hard_drop_score(18) + score_for_clear(1, 0));
        assert_eq!(dropped.board.filled_count(), 0);
        assert!(!dropped.board.has_full_row());
    }

    #[test]
    fn test_clear_scored_at_pre_clear_level() {
        let state = playing(&[PieceKind::I, PieceKind::O]);
        let mut board = Board::new();
        row_with_gaps(&mut board, 19, &[3, 4, 5, 6]);
        let state = GameState {
            lines: 19,
            level: 1,
            ..state.with_board(board)
        };
        let dropped = state.hard_drop(0);
        assert_eq!(dropped.level, 2);
        assert_eq!(dropped.score, hard_drop_score(18) + score_for_clear(1, 1));
    }

    #[test]
    fn test_game_over_when_locking_on_spawn_row() {
        let state = playing(&[PieceKind::T, PieceKind::O]);
        let mut board = Board::new();
        // Directly under the T's bottom row (board row 1 at spawn).
        board.set(4, 2, filled());
        let state = state.with_board(board);

        let ended = state.gravity_tick(10);
        assert_eq!(ended.phase, Phase::GameOver);
        assert_eq!(ended.active, state.active);
        assert_eq!(ended.position, state.position);
        assert_eq!(ended.next, state.next);
        // The piece was still merged.
        assert_eq!(ended.board.filled_count(), 5);

        // Nothing moves any more.
        assert_eq!(ended.move_left(), ended);
        assert_eq!(ended.hard_drop(20), ended);
        assert_eq!(ended.tick(100_000), ended);
        assert_eq!(ended.pause(), ended);
    }

    #[test]
    fn test_next_piece_promoted_onto_stack_can_slide_out() {
        // The next O spawns at (4, 0) over a stone at (5, 1).
        let state = playing(&[PieceKind::I, PieceKind::O]);
        let mut board = Board::new();
        board.set(5, 1, filled());
        let state = GameState {
            position: Position::new(0, 5),
            ..state.with_board(board)
        };

        let promoted = state.hard_drop(0);
        assert_eq!(promoted.phase, Phase::Playing);
        assert_eq!(promoted.active.map(|p| p.kind), Some(PieceKind::O));
        assert_eq!(promoted.position, Position::new(4, 0));
        assert!(collides(&promoted.active.unwrap(), promoted.position, &promoted.board));

        let slid = promoted.move_left();
        assert_eq!(slid.position, Position::new(3, 0));
        assert_eq!(slid.phase, Phase::Playing);

        // Left in place, the overlapping piece locks on the spawn row.
        let ended = promoted.gravity_tick(10);
        assert_eq!(ended.phase, Phase::GameOver);
        assert_eq!(ended.active.map(|p| p.kind), Some(PieceKind::O));
    }

    #[test]
    fn test_shadow_position() {
        let state = playing(&[PieceKind::O]);
        assert_eq!(state.shadow_position(), Some(Position::new(4, 18)));

        let mut board = Board::new();
        board.set(5, 10, filled());
        let state = state.with_board(board);
        assert_eq!(state.shadow_position(), Some(Position::new(4, 8)));
        // Computing the shadow commits nothing.
        assert_eq!(state.position, Position::new(4, 0));
    }

    #[test]
    fn test_commands_ignored_when_not_playing() {
        let ready = GameState::new(3, 0);
        let paused = ready.start().pause();
        for state in [ready, paused] {
            assert_eq!(state.move_left(), state);
            assert_eq!(state.move_right(), state);
            assert_eq!(state.rotate_cw(), state);
            assert_eq!(state.rotate_ccw(), state);
            assert_eq!(state.soft_drop(5_000), state);
            assert_eq!(state.gravity_tick(5_000), state);
            assert_eq!(state.hard_drop(5_000), state);
            assert_eq!(state.tick(5_000), state);
        }
    }

    #[test]
    fn test_restart_returns_to_ready() {
        let state = playing(&[PieceKind::O, PieceKind::J]).hard_drop(0);
        assert!(state.score > 0);

        let restarted = state.restart(42);
        assert_eq!(restarted.phase, Phase::Ready);
        assert_eq!(restarted.score, 0);
        assert_eq!(restarted.lines, 0);
        assert_eq!(restarted.level, 0);
        assert_eq!(restarted.board.filled_count(), 0);
        assert_eq!(restarted.last_gravity_ms, 42);
    }

    #[test]
    fn test_apply_action_dispatch() {
        let state = GameState::with_generator(PieceGenerator::sequence(&[PieceKind::T]), 0);
        let started = state.apply_action(GameAction::Start, 0);
        assert_eq!(started.phase, Phase::Playing);
        assert_eq!(
            started.apply_action(GameAction::MoveRight, 0),
            started.move_right()
        );
        assert_eq!(
            started.apply_action(GameAction::HardDrop, 7),
            started.hard_drop(7)
        );
        assert_eq!(
            started.apply_action(GameAction::Pause, 0).phase,
            Phase::Paused
        );
        assert_eq!(
            started.apply_action(GameAction::Restart, 0).phase,
            Phase::Ready
        );
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let state = playing(&[PieceKind::O, PieceKind::Z]);
        let snap = state.snapshot();
        assert_eq!(snap.phase, Phase::Playing);
        assert_eq!(snap.next, PieceKind::Z);
        let active = snap.active.unwrap();
        assert_eq!(active.kind, PieceKind::O);
        assert_eq!(active.position, Position::new(4, 0));
        assert_eq!(snap.shadow, Some(Position::new(4, 18)));
        assert!(snap.board.iter().flatten().all(|c| !c.is_filled()));
    }
}
