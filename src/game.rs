//! Core game state and logic
//!
//! `Game` owns the board, the falling piece, the score and the gravity
//! cadence. Every transition builds the candidate piece or board first,
//! checks it, then swaps it in whole, so a caller never observes a half
//! applied step.

use crate::board::Board;
use crate::collision::{collides, fits};
use crate::config::SessionConfig;
use crate::error::ConfigError;
use crate::lock::{LockSummary, merge};
use crate::piece::{Piece, spawn_piece};
use crate::randomizer::Randomizer;
use crate::score::Score;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    /// A freshly spawned piece overlapped the stack
    GameOver,
}

/// Player commands the game can process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDropStart,
    SoftDropStop,
}

/// What one gravity step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece moved down one row
    Fell,
    /// The piece locked and a new piece spawned
    Locked(LockSummary),
    /// The piece locked and the next piece had no room
    ToppedOut(LockSummary),
}

/// Read-only view handed to renderers
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub board: &'a Board,
    pub piece: &'a Piece,
    pub score: Score,
    pub state: GameState,
}

/// The main game struct
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_piece: Piece,
    randomizer: Randomizer,
    score: Score,
    state: GameState,
    config: SessionConfig,
    /// Current gravity cadence; shortened while soft drop is held
    fall_interval: Duration,
    /// Last gravity tick
    last_fall: Instant,
}

impl Game {
    /// Start a session with a random piece stream
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, rand::random())
    }

    /// Start a session whose piece stream is fixed by `seed`
    pub fn with_seed(config: SessionConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut randomizer = Randomizer::with_seed(seed);
        let board = Board::new(config.rows, config.cols);
        let current_piece = spawn_piece(&mut randomizer, config.cols);
        let state = if fits(&board, &current_piece) {
            GameState::Playing
        } else {
            GameState::GameOver
        };

        info!(
            seed,
            rows = config.rows,
            cols = config.cols,
            fall_ms = config.fall_interval.as_millis() as u64,
            "session started"
        );

        Ok(Self {
            board,
            current_piece,
            randomizer,
            score: Score::new(),
            state,
            config,
            fall_interval: config.fall_interval,
            last_fall: Instant::now(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> &Piece {
        &self.current_piece
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn fall_interval(&self) -> Duration {
        self.fall_interval
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            board: &self.board,
            piece: &self.current_piece,
            score: self.score,
            state: self.state,
        }
    }

    /// Process a command. Returns false when it was rejected and nothing changed.
    pub fn process_command(&mut self, command: Command) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        match command {
            Command::MoveLeft => self.shift(-1),
            Command::MoveRight => self.shift(1),
            Command::Rotate => self.rotate(),
            Command::SoftDropStart => {
                self.fall_interval = self.config.soft_drop_interval;
                true
            }
            Command::SoftDropStop => {
                self.fall_interval = self.config.fall_interval;
                true
            }
        }
    }

    /// Run a gravity step if the current fall interval has elapsed since the last one
    pub fn update(&mut self, now: Instant) -> Option<TickOutcome> {
        if self.state != GameState::Playing {
            return None;
        }
        if now.duration_since(self.last_fall) < self.fall_interval {
            return None;
        }
        self.last_fall = now;
        self.tick()
    }

    /// One gravity step: fall a row, or lock, clear and spawn the next piece
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if self.state != GameState::Playing {
            return None;
        }

        let piece = &self.current_piece;
        if !collides(&self.board, piece, piece.x, piece.y + 1) {
            self.current_piece = piece.translated(0, 1);
            return Some(TickOutcome::Fell);
        }

        Some(self.lock_piece())
    }

    fn shift(&mut self, dx: i32) -> bool {
        let piece = &self.current_piece;
        if collides(&self.board, piece, piece.x + dx, piece.y) {
            return false;
        }
        self.current_piece = piece.translated(dx, 0);
        true
    }

    /// Rotate in place; no wall kicks are tried
    fn rotate(&mut self) -> bool {
        let rotated = self.current_piece.rotated();
        if !fits(&self.board, &rotated) {
            return false;
        }
        self.current_piece = rotated;
        true
    }

    /// Lock the current piece and spawn next
    fn lock_piece(&mut self) -> TickOutcome {
        let result = merge(&self.board, &self.current_piece, self.config.points_per_cell);
        let summary = result.summary();
        debug!(
            piece = ?self.current_piece.piece_type,
            x = self.current_piece.x,
            y = self.current_piece.y,
            lines = summary.lines_cleared,
            "piece locked"
        );

        let next_piece = spawn_piece(&mut self.randomizer, self.config.cols);
        let topped_out = !fits(&result.board, &next_piece);

        self.board = result.board;
        self.score.record_lock(&summary);
        self.current_piece = next_piece;

        // Check for top out
        if topped_out {
            self.state = GameState::GameOver;
            info!(
                points = self.score.points,
                lines = self.score.lines,
                pieces = self.score.pieces,
                "game over"
            );
            return TickOutcome::ToppedOut(summary);
        }
        TickOutcome::Locked(summary)
    }
}
