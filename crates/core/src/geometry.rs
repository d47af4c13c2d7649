//! Geometry - collision test and square-matrix rotation

use crate::board::Board;
use crate::pieces::{Piece, ShapeMatrix};
use crate::types::{Position, BOARD_HEIGHT, BOARD_WIDTH};

/// Check whether `piece` placed at `position` overlaps a wall, the floor or a filled cell.
///
/// Cells above the top edge (`y < 0`) only have to be inside the side walls;
/// they are never tested against board occupancy, so pieces can spawn
/// partially above the visible grid.
pub fn collides(piece: &Piece, position: Position, board: &Board) -> bool {
    piece.shape.cells().any(|(dx, dy)| {
        let x = position.x + dx;
        let y = position.y + dy;
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        y >= 0 && board.is_occupied(x, y)
    })
}

/// Rotate 90° clockwise: cell `(y, x)` moves to `(x, n-1-y)`.
pub fn rotate_cw(matrix: &ShapeMatrix) -> ShapeMatrix {
    let n = matrix.size() as usize;
    let mut out = ShapeMatrix::empty(matrix.size());
    for y in 0..n {
        for x in 0..n {
            // row x, column n-1-y
            out.set(n - 1 - y, x, matrix.get(x, y));
        }
    }
    out
}

/// Rotate 90° counter-clockwise: cell `(y, x)` moves to `(n-1-x, y)`.
pub fn rotate_ccw(matrix: &ShapeMatrix) -> ShapeMatrix {
    let n = matrix.size() as usize;
    let mut out = ShapeMatrix::empty(matrix.size());
    for y in 0..n {
        for x in 0..n {
            out.set(y, n - 1 - x, matrix.get(x, y));
        }
    }
    out
}
