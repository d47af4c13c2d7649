//! Scoring module - line clear points, drop points and level accounting

use crate::types::{HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_SCORES, SOFT_DROP_POINTS};

/// Points for clearing `lines` rows at once at `level` (0-based).
///
/// 1-4 lines use the base table scaled by `level + 1`; anything else,
/// including 0, scores nothing.
pub fn score_for_clear(lines: u32, level: u32) -> u32 {
    if lines == 0 || lines as usize >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines as usize].saturating_mul(level.saturating_add(1))
}

/// Hard drop: +2 per row fallen
pub fn hard_drop_score(rows: u32) -> u32 {
    rows.saturating_mul(HARD_DROP_POINTS)
}

/// Soft drop: flat bonus per command
pub fn soft_drop_score() -> u32 {
    SOFT_DROP_POINTS
}

/// Level for a running line total
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}
