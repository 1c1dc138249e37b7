/**
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* The board is a torus: the top row neighbors the bottom row and the left
* column neighbors the right column.
*/

pub mod config;
pub mod error;
pub mod grid;
pub mod simulation;

pub use config::Config;
pub use error::{Error, Result};
pub use grid::{CellState, Grid};
pub use simulation::{parse_seek_target, RunState, SeekOutcome, Simulation, TickOutcome};
