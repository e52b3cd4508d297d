// simulation.rs - Generation driver with short-cycle detection

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::engine;
use crate::grid::Grid;

/// How many past generations are remembered for cycle detection
pub const HISTORY_LEN: usize = 10;

pub struct Simulation {
    grid: Grid,
    generation: u64,
    /// (grid hash, generation) of the most recent grids, oldest first
    history: VecDeque<(u64, u64)>,
    period: Option<u64>,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        let mut sim = Self {
            grid,
            generation: 0,
            history: VecDeque::with_capacity(HISTORY_LEN),
            period: None,
        };
        let hash = sim.hash_grid();
        sim.history.push_back((hash, 0));
        sim
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// First period detected so far, if any.
    pub fn period(&self) -> Option<u64> {
        self.period
    }

    /// Steps once. Returns the period when the new grid repeats one of the
    /// last [`HISTORY_LEN`] grids.
    pub fn advance(&mut self) -> Option<u64> {
        // The previous grid is dropped here, once its successor exists.
        self.grid = engine::generation(&self.grid);
        self.generation += 1;
        log::trace!(
            "generation {}: population {}",
            self.generation,
            self.grid.population()
        );

        let period = self.check_for_cycle();
        if let (Some(p), None) = (period, self.period) {
            log::info!("cycle of period {} reached at generation {}", p, self.generation);
            self.period = Some(p);
        }
        period
    }

    fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.grid.hash(&mut hasher);
        hasher.finish()
    }

    fn check_for_cycle(&mut self) -> Option<u64> {
        let current_hash = self.hash_grid();
        let period = self
            .history
            .iter()
            .rev()
            .find(|&&(hash, _)| hash == current_hash)
            .map(|&(_, seen_at)| self.generation - seen_at);

        if self.history.len() == HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back((current_hash, self.generation));
        period
    }
}
