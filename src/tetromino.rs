//! Tetromino definitions and shapes
//!
//! All 7 standard tetrominoes, each stored in its spawn orientation as the
//! smallest bounding box that holds it. Other orientations are derived by
//! rotating the box (see `rotation`).

use crate::board::Cell;
use crate::error::ShapeError;

/// A bounding-box matrix of filled/empty flags, independent of position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: Vec<Vec<bool>>,
}

impl Shape {
    /// Build a shape from rows of flags; rows must be non-empty and equally long
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self, ShapeError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(ShapeError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(ShapeError::Ragged {
                row,
                expected: width,
                found,
            });
        }
        Ok(Self { rows })
    }

    /// Wrap rows already known to form a non-empty rectangle
    pub(crate) fn from_raw(rows: Vec<Vec<bool>>) -> Self {
        debug_assert!(
            rows.first().is_some_and(|row| !row.is_empty())
                && rows.windows(2).all(|w| w[0].len() == w[1].len()),
            "shape rows must form a non-empty rectangle"
        );
        Self { rows }
    }

    /// Build a shape from 0/1 flags
    pub(crate) fn from_flags<const W: usize>(flags: &[[u8; W]]) -> Self {
        Self::from_raw(
            flags
                .iter()
                .map(|row| row.iter().map(|&f| f != 0).collect())
                .collect(),
        )
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// (row, col) offsets of every filled cell, row-major
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &filled)| filled)
                .map(move |(c, _)| (r, c))
        })
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }
}

/// The 7 tetromino types, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    O, // square
    I, // long bar
    T,
    S,
    Z, // mirrored S
    J,
    L, // mirrored J
}

impl TetrominoType {
    /// Get all tetromino types in catalog order
    pub fn all() -> [TetrominoType; 7] {
        [
            TetrominoType::O,
            TetrominoType::I,
            TetrominoType::T,
            TetrominoType::S,
            TetrominoType::Z,
            TetrominoType::J,
            TetrominoType::L,
        ]
    }

    /// Catalog position
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Look up a type by catalog position
    pub fn from_index(index: usize) -> Option<TetrominoType> {
        Self::all().get(index).copied()
    }

    /// Cell value painted on lock (1-7)
    pub fn id(&self) -> Cell {
        self.index() as Cell + 1
    }

    /// Look up a type by the cell value it paints
    pub fn from_id(id: Cell) -> Option<TetrominoType> {
        (id as usize).checked_sub(1).and_then(Self::from_index)
    }

    /// Spawn-orientation bounding box
    pub fn shape(&self) -> Shape {
        match self {
            TetrominoType::O => Shape::from_flags(&[[1, 1], [1, 1]]),
            TetrominoType::I => Shape::from_flags(&[[1, 1, 1, 1]]),
            TetrominoType::T => Shape::from_flags(&[[0, 1, 0], [1, 1, 1]]),
            // .SS
            // SS.
            TetrominoType::S => Shape::from_flags(&[[0, 1, 1], [1, 1, 0]]),
            // ZZ.
            // .ZZ
            TetrominoType::Z => Shape::from_flags(&[[1, 1, 0], [0, 1, 1]]),
            TetrominoType::J => Shape::from_flags(&[[1, 0, 0], [1, 1, 1]]),
            TetrominoType::L => Shape::from_flags(&[[0, 0, 1], [1, 1, 1]]),
        }
    }
}
