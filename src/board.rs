//! Game board representation
//!
//! Row 0 is the top of the playfield, row `rows - 1` sits on the floor.

use crate::error::BoardError;

/// Reference board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// A cell on the board: `EMPTY` or the id (1-7) of the piece that settled there
pub type Cell = u8;

pub const EMPTY: Cell = 0;

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Grid stored as [row][col]; every row holds exactly `cols` cells
    cells: Vec<Vec<Cell>>,
    cols: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_HEIGHT, BOARD_WIDTH)
    }
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: (0..rows).map(|_| Self::empty_row(cols)).collect(),
            cols,
        }
    }

    /// Build a board from explicit rows, top row first
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(BoardError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(BoardError::Ragged {
                row,
                expected: cols,
                found,
            });
        }
        Ok(Self { cells: rows, cols })
    }

    /// Wrap rows already known to be `cols` wide
    pub(crate) fn from_raw(cells: Vec<Vec<Cell>>, cols: usize) -> Self {
        debug_assert!(cells.iter().all(|row| row.len() == cols));
        Self { cells, cols }
    }

    /// A freshly allocated empty row
    pub(crate) fn empty_row(cols: usize) -> Vec<Cell> {
        vec![EMPTY; cols]
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.cells
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }

    /// Borrow one row, top row first
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.cells.get(row).map(Vec::as_slice)
    }

    /// Iterate over rows from top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Check if the board has no settled cells
    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell == EMPTY))
    }

    /// Take the rows out, consuming the board
    pub(crate) fn into_rows(self) -> Vec<Vec<Cell>> {
        self.cells
    }

    /// Write a cell; out-of-bounds writes are dropped
    /// Returns false if out of bounds
    pub(crate) fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        match self
            .cells
            .get_mut(row as usize)
            .and_then(|r| r.get_mut(col as usize))
        {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4, 3);
        assert!(board.is_empty());
        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 3);
        assert!(board.iter_rows().all(|row| row == [EMPTY; 3]));
    }

    #[test]
    fn test_default_is_reference_size() {
        let board = Board::default();
        assert_eq!(board.rows(), BOARD_HEIGHT);
        assert_eq!(board.cols(), BOARD_WIDTH);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(5, 5);
        assert!(board.set(4, 2, 3));
        assert_eq!(board.get(4, 2), Some(3));
        assert!(!board.is_empty());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::new(5, 5);
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, -1), None);
        assert_eq!(board.get(5, 0), None);
        assert_eq!(board.get(0, 5), None);
        assert!(!board.set(5, 0, 1));
        assert!(!board.set(-1, 0, 1));
        assert!(board.is_empty());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Board::from_rows(vec![vec![0, 0], vec![0]]).unwrap_err();
        assert_eq!(
            err,
            BoardError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(Board::from_rows(vec![]).unwrap_err(), BoardError::Empty);
    }

    #[test]
    fn test_from_rows_keeps_order() {
        let board = Board::from_rows(vec![vec![0, 1], vec![2, 0]]).unwrap();
        assert_eq!(board.row(0), Some(&[0, 1][..]));
        assert_eq!(board.get(1, 0), Some(2));
    }
}
