//! Conway's Game of Life on a wrap-around grid.
//!
//! ```
//! use conway::{Grid, patterns::pattern_by_name};
//!
//! let mut grid = Grid::new(8, 8).unwrap();
//! pattern_by_name("blinker").unwrap().stamp(&mut grid, 2, 3);
//! assert_eq!(grid.step().step(), grid);
//! ```

pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rules;
pub mod simulation;

pub use engine::{generation, live_neighbors};
pub use error::LoadError;
pub use grid::{ALIVE, DEAD, Grid, MAX_DIMENSION, MIN_DIMENSION};
pub use simulation::Simulation;
