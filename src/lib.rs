//! BLOCKFALL - a falling-block puzzle engine
//!
//! The engine is the board, the piece catalog, rotation, collision, locking
//! and the `Game` session that ties them together. `input` and `ui` are the
//! terminal collaborators used by the binary.

pub mod board;
pub mod collision;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod lock;
pub mod piece;
pub mod randomizer;
pub mod rotation;
pub mod score;
pub mod settings;
pub mod tetromino;
pub mod ui;

pub use board::{Board, Cell, EMPTY};
pub use collision::{collides, fits};
pub use config::SessionConfig;
pub use error::{BoardError, ConfigError, SettingsError, ShapeError};
pub use game::{Command, Game, GameState, Snapshot, TickOutcome};
pub use lock::{LockResult, LockSummary, merge};
pub use piece::{Piece, spawn_piece};
pub use randomizer::Randomizer;
pub use rotation::rotate_cw;
pub use score::Score;
pub use settings::Settings;
pub use tetromino::{Shape, TetrominoType};
