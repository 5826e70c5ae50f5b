//! Error types for board and shape construction, session configuration and settings

use std::io;
use thiserror::Error;

/// Rejected session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one row")]
    ZeroRows,
    #[error("board must have at least one column")]
    ZeroColumns,
    #[error("{0} interval must be longer than zero")]
    ZeroInterval(&'static str),
}

/// Rejected row set passed to `Board::from_rows`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board needs at least one non-empty row")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Rejected flag matrix passed to `Shape::new`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape needs at least one row and one column")]
    Empty,
    #[error("shape row {row} has {found} flags, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Failure while persisting settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("failed to write settings: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
