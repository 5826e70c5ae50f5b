//! Locking a piece into the board and clearing full rows

use crate::board::{Board, EMPTY};
use crate::piece::Piece;
use tracing::debug;

/// Outcome of merging a piece into the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockResult {
    /// The board after painting the piece and compacting cleared rows
    pub board: Board,
    pub lines_cleared: usize,
    pub cells_removed: usize,
    pub score_delta: u64,
}

impl LockResult {
    pub fn summary(&self) -> LockSummary {
        LockSummary {
            lines_cleared: self.lines_cleared,
            cells_removed: self.cells_removed,
            score_delta: self.score_delta,
        }
    }
}

/// `LockResult` without the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockSummary {
    pub lines_cleared: usize,
    pub cells_removed: usize,
    pub score_delta: u64,
}

/// Paint `piece` onto a copy of `board`, drop every full row and score it.
///
/// Cells above the board or outside it are not written. Remaining rows keep
/// their order and empty rows are added on top, so the board keeps its size.
/// Every cleared cell is worth `points_per_cell`; clearing several rows at
/// once earns no bonus.
pub fn merge(board: &Board, piece: &Piece, points_per_cell: u64) -> LockResult {
    let mut painted = board.clone();
    for (row, col) in piece.block_positions() {
        painted.set(row, col, piece.id());
    }

    let rows = painted.rows();
    let cols = painted.cols();
    let (full, kept): (Vec<_>, Vec<_>) = painted
        .into_rows()
        .into_iter()
        .partition(|row| row.iter().all(|&cell| cell != EMPTY));

    let lines_cleared = full.len();
    let mut compacted = Vec::with_capacity(rows);
    compacted.extend((0..lines_cleared).map(|_| Board::empty_row(cols)));
    compacted.extend(kept);

    let cells_removed = lines_cleared * cols;
    let score_delta = (cells_removed as u64).saturating_mul(points_per_cell);

    if lines_cleared > 0 {
        debug!(
            lines_cleared,
            cells_removed, score_delta, "cleared rows after lock"
        );
    }

    LockResult {
        board: Board::from_raw(compacted, cols),
        lines_cleared,
        cells_removed,
        score_delta,
    }
}
