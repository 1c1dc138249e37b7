use std::fmt;

use log::trace;
use rand::Rng;

use crate::error::{Error, Result};
use crate::grid::CellState::{Alive, Dead};

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }

    pub fn flipped(self) -> Self {
        match self {
            Alive => Dead,
            Dead => Alive,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Alive
        } else {
            Dead
        }
    }
}

/// Fixed-size toroidal board. Every cell in `[0, height) x [0, width)` holds
/// exactly one state; the dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellState>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Grid {
            width,
            height,
            cells: vec![vec![Dead; width]; height],
        })
    }

    /// Parses ASCII rows where `#` is alive and `.` is dead.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        let mut grid = Grid::new(width, rows.len())
            .map_err(|_| Error::pattern("pattern must have at least one non-empty row"))?;

        for (row_index, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(Error::pattern(format!(
                    "row {row_index} is {} cells wide, expected {width}",
                    row.chars().count()
                )));
            }
            for (col_index, ch) in row.chars().enumerate() {
                grid.cells[row_index][col_index] = match ch {
                    '#' => Alive,
                    '.' => Dead,
                    other => {
                        return Err(Error::pattern(format!(
                            "unexpected {other:?} at ({row_index}, {col_index})"
                        )))
                    }
                };
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    fn check(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(Error::OutOfRange {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<CellState> {
        self.check(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<()> {
        self.check(row, col)?;
        self.cells[row][col] = state;
        Ok(())
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<CellState> {
        self.check(row, col)?;
        let cell = &mut self.cells[row][col];
        *cell = cell.flipped();
        Ok(*cell)
    }

    pub fn count_live_neighbors(&self, row: usize, col: usize) -> Result<usize> {
        self.check(row, col)?;
        Ok(self.alive_neighbors(row, col))
    }

    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_alive())
            .count()
    }

    /// Computes the following generation from a read-only view of this one.
    pub fn next_state(&self) -> Grid {
        let mut next_cells = vec![vec![Dead; self.width]; self.height];

        for row in 0..self.height {
            for col in 0..self.width {
                let alive_neighbors = self.alive_neighbors(row, col);

                next_cells[row][col] = match (self.cells[row][col], alive_neighbors) {
                    (Alive, 2..=3) => Alive, // Survives
                    (Dead, 3) => Alive,      // Becomes alive
                    _ => Dead,               // Dies or remains dead
                };
            }
        }

        Grid {
            width: self.width,
            height: self.height,
            cells: next_cells,
        }
    }

    /// Advance the grid by one step, returning whether any cell changed.
    pub fn advance(&mut self) -> bool {
        let next = self.next_state();
        if next == *self {
            trace!("grid is a still life");
            return false;
        }
        *self = next;
        true
    }

    pub fn reset(&mut self) {
        for row in &mut self.cells {
            row.fill(Dead);
        }
    }

    /// Fills every cell independently, alive with probability `density`.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidDensity(density));
        }
        self.fill_random(rng, density);
        Ok(())
    }

    /// Half of the cells alive on average, drawn from the thread RNG.
    pub fn randomize(&mut self) {
        self.fill_random(&mut rand::rng(), 0.5);
    }

    /// `density` must already be within [0, 1].
    fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        for cell in self.cells.iter_mut().flatten() {
            *cell = rng.random_bool(density).into();
        }
    }

    /// Count the number of alive neighbors for a cell
    fn alive_neighbors(&self, row: usize, col: usize) -> usize {
        let mut count = 0;

        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let neighbor_row = (row as isize + dr).rem_euclid(self.height as isize) as usize;
                let neighbor_col = (col as isize + dc).rem_euclid(self.width as isize) as usize;

                if self.cells[neighbor_row][neighbor_col] == Alive {
                    count += 1;
                }
            }
        }

        count
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}
