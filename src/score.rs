//! Cumulative score tracking

use crate::lock::LockSummary;

/// Points earned per cleared cell when no setting overrides it
pub const DEFAULT_POINTS_PER_CELL: u64 = 10;

/// Running totals for a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Current score
    pub points: u64,
    /// Total rows cleared
    pub lines: u64,
    /// Pieces locked into the board
    pub pieces: u64,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one lock into the totals
    pub fn record_lock(&mut self, lock: &LockSummary) {
        self.points = self.points.saturating_add(lock.score_delta);
        self.lines = self.lines.saturating_add(lock.lines_cleared as u64);
        self.pieces = self.pieces.saturating_add(1);
    }
}
