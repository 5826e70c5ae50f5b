//! Active falling piece
//!
//! A `Piece` is a plain value. Moving or rotating produces a new piece and
//! leaves the old one untouched, so the session can test a candidate with
//! the collision detector before it replaces the current piece.

use crate::board::Cell;
use crate::randomizer::Randomizer;
use crate::tetromino::{Shape, TetrominoType};

/// A shape bound to a board position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub piece_type: TetrominoType,
    pub shape: Shape,
    /// Column of the bounding box's left edge
    pub x: i32,
    /// Row of the bounding box's top edge; negative while above the board
    pub y: i32,
}

impl Piece {
    /// Create a piece in spawn orientation at the given anchor
    pub fn new(piece_type: TetrominoType, x: i32, y: i32) -> Self {
        Self {
            piece_type,
            shape: piece_type.shape(),
            x,
            y,
        }
    }

    /// Place a piece at the top row, near the middle of a board `cols` wide
    pub fn spawn(piece_type: TetrominoType, cols: usize) -> Self {
        Self::new(piece_type, spawn_column(cols), 0)
    }

    /// Cell value this piece paints on lock
    pub fn id(&self) -> Cell {
        self.piece_type.id()
    }

    /// The same piece shifted by (dx, dy)
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    /// The same piece turned clockwise about its anchor
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..self.clone()
        }
    }

    /// Absolute (row, col) of every filled cell
    pub fn block_positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .filled_cells()
            .map(|(r, c)| (self.y + r as i32, self.x + c as i32))
    }
}

/// Left edge for a freshly spawned piece: column 4 on a 10-wide board
pub fn spawn_column(cols: usize) -> i32 {
    (cols as i32 / 2 - 1).max(0)
}

/// Draw a uniformly random piece and place it at the spawn point
pub fn spawn_piece(randomizer: &mut Randomizer, cols: usize) -> Piece {
    Piece::spawn(randomizer.next(), cols)
}
