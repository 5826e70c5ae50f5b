//! Session configuration accepted by `Game::new`

use crate::board::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::error::ConfigError;
use crate::score::DEFAULT_POINTS_PER_CELL;
use std::time::Duration;

pub const DEFAULT_FALL_INTERVAL: Duration = Duration::from_millis(500);
pub const DEFAULT_SOFT_DROP_INTERVAL: Duration = Duration::from_millis(50);

/// Board size, gravity cadence and scoring for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub rows: usize,
    pub cols: usize,
    /// Time between gravity steps
    pub fall_interval: Duration,
    /// Time between gravity steps while soft drop is held
    pub soft_drop_interval: Duration,
    pub points_per_cell: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_HEIGHT,
            cols: BOARD_WIDTH,
            fall_interval: DEFAULT_FALL_INTERVAL,
            soft_drop_interval: DEFAULT_SOFT_DROP_INTERVAL,
            points_per_cell: DEFAULT_POINTS_PER_CELL,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.fall_interval.is_zero() {
            return Err(ConfigError::ZeroInterval("fall"));
        }
        if self.soft_drop_interval.is_zero() {
            return Err(ConfigError::ZeroInterval("soft drop"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(SessionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let config = SessionConfig {
            rows: 0,
            ..SessionConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroRows));

        let config = SessionConfig {
            cols: 0,
            ..SessionConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroColumns));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = SessionConfig {
            soft_drop_interval: Duration::ZERO,
            ..SessionConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval("soft drop")));
    }
}
