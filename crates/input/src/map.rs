//! Key mapping from terminal events to game actions.

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::{GameAction, Phase};

/// Actions produced by a single key press, applied in order
pub type KeyActions = ArrayVec<GameAction, 2>;

/// Map a key press to the actions it triggers in `phase`.
///
/// Piece keys only do something while playing. Enter starts from Ready,
/// resumes from Paused and starts over after a game over. P toggles pause
/// and R always restarts.
pub fn map_key(key: KeyEvent, phase: Phase) -> KeyActions {
    let mut actions = KeyActions::new();

    // Terminals with the kitty protocol report releases too.
    if key.kind == KeyEventKind::Release {
        return actions;
    }

    match (key.code, phase) {
        (KeyCode::Enter, Phase::GameOver) => {
            actions.push(GameAction::Restart);
            actions.push(GameAction::Start);
        }
        (KeyCode::Enter, Phase::Ready | Phase::Paused) => actions.push(GameAction::Start),
        (KeyCode::Char('p') | KeyCode::Char('P'), Phase::Paused) => {
            actions.push(GameAction::Start)
        }
        (KeyCode::Char('r') | KeyCode::Char('R'), _) => actions.push(GameAction::Restart),
        (code, Phase::Playing) => {
            if let Some(action) = playing_action(code) {
                actions.push(action);
            }
        }
        _ => {}
    }

    actions
}

fn playing_action(code: KeyCode) -> Option<GameAction> {
    match code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameAction::RotateCcw),

        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
