//! Pieces module - the piece catalog
//!
//! Each kind has a fixed square shape matrix (4x4 for I, 2x2 for O, 3x3 for
//! the rest) and a fixed color. Rotation always works on the full matrix, so
//! O rotates into itself and I turns in place inside its 4x4 frame.

use crate::geometry;
use crate::types::{Color, PieceKind};

/// Largest matrix side in the catalog
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square occupancy matrix, stored in a fixed 4x4 array.
///
/// Only the top-left `size x size` block is meaningful; the rest is always
/// empty, so a non-square shape cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Build from string rows of `0`/`1`; every row must be as long as there are rows.
    const fn parse(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        let mut out = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut y = 0;
        while y < size {
            assert!(rows[y].len() == size, "shape matrix must be square");
            let mut x = 0;
            while x < size {
                out[y][x] = rows[y][x] == b'1';
                x += 1;
            }
            y += 1;
        }
        Self {
            size: size as u8,
            rows: out,
        }
    }

    pub(crate) fn empty(size: u8) -> Self {
        Self {
            size,
            rows: [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
        }
    }

    /// Side length of the matrix
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether `(x, y)` inside the matrix is occupied
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.size as usize && y < self.size as usize && self.rows[y][x]
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, filled: bool) {
        self.rows[y][x] = filled;
    }

    /// Iterate occupied cells as `(dx, dy)` offsets from the top-left corner
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| self.rows[y][x].then_some((x as i8, y as i8)))
        })
    }
}

const I_SHAPE: ShapeMatrix = ShapeMatrix::parse(&[b"0000", b"1111", b"0000", b"0000"]);
const J_SHAPE: ShapeMatrix = ShapeMatrix::parse(&[b"100", b"111", b"000"]);
const L_SHAPE: ShapeMatrix = ShapeMatrix::parse(&[b"001", b"111", b"000"]);
const O_SHAPE: ShapeMatrix = ShapeMatrix::parse(&[b"11", b"11"]);
const S_SHAPE: ShapeMatrix = ShapeMatrix::parse(&[b"011", b"110", b"000"]);
const T_SHAPE: ShapeMatrix = ShapeMatrix::parse(&[b"010", b"111", b"000"]);
const Z_SHAPE: ShapeMatrix = ShapeMatrix::parse(&[b"110", b"011", b"000"]);

/// Catalog matrix for a piece kind (spawn orientation)
pub fn catalog_shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// A piece: its kind plus the shape matrix of its current rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
}

impl Piece {
    /// Create a piece in its catalog orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: catalog_shape(kind),
        }
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Matrix width used to center the piece at spawn
    pub fn width(&self) -> u8 {
        self.shape.size()
    }

    /// Same piece with its matrix rotated 90° clockwise
    pub fn rotated_cw(&self) -> Self {
        Self {
            shape: geometry::rotate_cw(&self.shape),
            ..*self
        }
    }

    /// Same piece with its matrix rotated 90° counter-clockwise
    pub fn rotated_ccw(&self) -> Self {
        Self {
            shape: geometry::rotate_ccw(&self.shape),
            ..*self
        }
    }
}
