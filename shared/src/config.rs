//! Start-up configuration for a simulation.

use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_WIDTH: usize = 50;
pub const DEFAULT_HEIGHT: usize = 50;
pub const DEFAULT_TICK_DELAY: Duration = Duration::from_millis(100);

/// Fixed parameters supplied by the application at start-up.
///
/// The core never reads `tick_delay` itself; it is carried here so the
/// scheduler driving [`crate::Simulation::tick`] and the grid share one
/// source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub tick_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_delay: DEFAULT_TICK_DELAY,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::config(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.tick_delay.is_zero() {
            return Err(Error::config("tick delay must be greater than zero"));
        }
        Ok(())
    }
}
