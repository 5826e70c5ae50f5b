//! Uniform piece randomizer
//!
//! Every draw is independent: each of the 7 pieces has the same chance no
//! matter what came before. There is no bag, so repeats and droughts happen.

use crate::tetromino::TetrominoType;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable uniform piece source
#[derive(Debug, Clone)]
pub struct Randomizer {
    rng: ChaCha8Rng,
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer {
    /// Create a randomizer with a random seed
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a randomizer whose piece stream is fixed by `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw the next piece type
    pub fn next(&mut self) -> TetrominoType {
        let kinds = TetrominoType::all();
        kinds[self.rng.gen_range(0..kinds.len())]
    }
}
