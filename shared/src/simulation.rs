//! Run/pause state machine driving a [`Grid`].
//!
//! The controller never sleeps or owns a timer. Whoever drives it calls
//! [`Simulation::tick`] at a fixed cadence and stops rescheduling once a tick
//! reports [`TickOutcome::Stopped`].

use log::{debug, trace, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::grid::{CellState, Grid};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Paused,
}

/// What a single [`Simulation::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced,
    Paused,
    Stopped,
}

impl TickOutcome {
    pub fn should_reschedule(self) -> bool {
        self != TickOutcome::Stopped
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOutcome {
    /// The counter now equals the requested target.
    Reached { advanced: u64 },
    /// The target lies behind the current generation; nothing changed.
    BackwardRejected { current: u64 },
}

/// Parses textual seek input into a generation number.
pub fn parse_seek_target(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| Error::InvalidSeekTarget(trimmed.to_string()))
}

#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
    state: RunState,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
            state: RunState::Idle,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(Grid::new(config.width, config.height)?))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state != RunState::Idle
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    pub fn get(&self, row: usize, col: usize) -> Result<CellState> {
        self.grid.get(row, col)
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Edits are allowed while idle or paused, never while actively running.
    fn accepts_edits(&self) -> bool {
        self.state != RunState::Running
    }

    pub fn start(&mut self) {
        if self.state == RunState::Idle {
            debug!("simulation started at generation {}", self.generation);
            self.state = RunState::Running;
        }
    }

    /// Flips between running and paused. Does nothing while idle.
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            RunState::Idle => return,
        };
        debug!("simulation {:?} at generation {}", self.state, self.generation);
    }

    /// Advances one generation by hand. Ignored unless idle, and refused once
    /// the generation counter is at its maximum.
    pub fn step_once(&mut self) -> bool {
        if self.is_running() {
            debug!("manual step ignored while running");
            return false;
        }
        self.advance()
    }

    /// One scheduled step. A run whose counter is exhausted ends here and
    /// reports [`TickOutcome::Stopped`].
    pub fn tick(&mut self) -> TickOutcome {
        match self.state {
            RunState::Running => {
                if self.advance() {
                    TickOutcome::Advanced
                } else {
                    self.state = RunState::Idle;
                    TickOutcome::Stopped
                }
            }
            RunState::Paused => TickOutcome::Paused,
            RunState::Idle => TickOutcome::Stopped,
        }
    }

    /// Advances until the counter equals `target`.
    ///
    /// Repeated board states are detected with Brent's cycle search; once the
    /// period is known only `remaining % period` generations are computed.
    /// The resulting grid is the same as stepping each generation.
    pub fn seek_to_generation(&mut self, target: u64) -> SeekOutcome {
        if target < self.generation {
            debug!(
                "seek to {target} rejected, already at generation {}",
                self.generation
            );
            return SeekOutcome::BackwardRejected {
                current: self.generation,
            };
        }

        let start = self.generation;
        let mut snapshot = self.grid.clone();
        let mut power = 1u64;
        let mut period = 0u64;
        while self.generation < target {
            self.grid = self.grid.next_state();
            self.generation += 1;
            period += 1;

            if self.grid == snapshot {
                trace!("period {period} found at generation {}", self.generation);
                for _ in 0..(target - self.generation) % period {
                    self.grid = self.grid.next_state();
                }
                self.generation = target;
                break;
            }
            if period == power {
                snapshot = self.grid.clone();
                power = power.saturating_mul(2);
                period = 0;
            }
        }
        debug!("seeked from generation {start} to {target}");
        SeekOutcome::Reached {
            advanced: target - start,
        }
    }

    /// Seek driven by raw text from the UI.
    pub fn seek_to_input(&mut self, input: &str) -> Result<SeekOutcome> {
        let target = parse_seek_target(input)?;
        Ok(self.seek_to_generation(target))
    }

    /// Toggles a cell unless the simulation is actively running.
    ///
    /// Returns the new state of the cell, or `None` when the edit was ignored.
    pub fn toggle_cell_at(&mut self, row: usize, col: usize) -> Result<Option<CellState>> {
        if !self.accepts_edits() {
            debug!("edit of ({row}, {col}) ignored while running");
            return Ok(None);
        }
        self.grid.toggle(row, col).map(Some)
    }

    /// Random fill, guarded like [`Simulation::toggle_cell_at`]. The
    /// generation counter is left alone.
    pub fn randomize(&mut self) -> bool {
        if !self.accepts_edits() {
            debug!("randomize ignored while running");
            return false;
        }
        self.grid.randomize();
        true
    }

    pub fn reset(&mut self) {
        debug!("simulation reset from {:?}", self.state);
        self.state = RunState::Idle;
        self.grid.reset();
        self.generation = 0;
    }

    /// Refuses to move the board once the counter cannot count the step.
    fn advance(&mut self) -> bool {
        let Some(next_generation) = self.generation.checked_add(1) else {
            warn!("generation counter exhausted at {}, not advancing", self.generation);
            return false;
        };
        let changed = self.grid.advance();
        self.generation = next_generation;
        trace!("generation {} (changed: {changed})", self.generation);
        true
    }
}
