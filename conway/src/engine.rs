// engine.rs - Neighbor counting and generation step

use crate::grid::Grid;
use crate::rules;

/// Moore neighborhood offsets, row by row.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Live cells among the 8 wrapped neighbors of `(x, y)`.
///
/// On grids narrower or shorter than 3 cells an offset can land on the same
/// cell twice (or on `(x, y)` itself); each offset is counted separately.
pub fn live_neighbors(grid: &Grid, x: isize, y: isize) -> usize {
    // Onto the grid first so the offsets below cannot overflow.
    let x = x.rem_euclid(grid.width() as isize);
    let y = y.rem_euclid(grid.height() as isize);
    NEIGHBORS
        .iter()
        .filter(|&&(dx, dy)| grid.wrapped(x + dx, y + dy))
        .count()
}

/// Computes the next generation. Every read goes against `prev`, so all
/// cells update simultaneously.
pub fn generation(prev: &Grid) -> Grid {
    let mut next = prev.same_shape();
    for y in 0..prev.height() as isize {
        for x in 0..prev.width() as isize {
            let alive = prev.wrapped(x, y);
            let count = live_neighbors(prev, x, y);
            next.set(x, y, rules::next_state(alive, count));
        }
    }
    next
}

impl Grid {
    /// Shorthand for [`generation`].
    pub fn step(&self) -> Grid {
        generation(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_cell_dies() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(2, 2, true);
        assert_eq!(live_neighbors(&grid, 2, 2), 0);
        assert_eq!(generation(&grid).population(), 0);
    }

    #[test]
    fn neighbors_wrap_across_corners() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(3, 3, true);
        assert_eq!(live_neighbors(&grid, 0, 0), 1);
        assert_eq!(live_neighbors(&grid, 3, 0), 1);
        assert_eq!(live_neighbors(&grid, 1, 1), 0);
    }

    #[test]
    fn extreme_coordinates_wrap_like_small_ones() {
        let mut grid = Grid::new(5, 3).unwrap();
        grid.set(0, 0, true);
        grid.set(4, 2, true);
        for (x, y) in [(isize::MAX, 0), (isize::MIN, isize::MAX), (0, isize::MIN)] {
            let nx = x.rem_euclid(5);
            let ny = y.rem_euclid(3);
            assert_eq!(live_neighbors(&grid, x, y), live_neighbors(&grid, nx, ny));
        }
    }

    #[test]
    fn single_cell_torus_counts_itself_eight_times() {
        let grid: Grid = "1\n1\n1\n".parse().unwrap();
        assert_eq!(live_neighbors(&grid, 0, 0), 8);
        assert_eq!(generation(&grid).population(), 0);
    }

    #[test]
    fn blinker_oscillates() {
        let grid: Grid = "5\n5\n00000\n00000\n01110\n00000\n00000\n".parse().unwrap();
        let next = grid.step();
        let expected: Grid = "5\n5\n00000\n00100\n00100\n00100\n00000\n".parse().unwrap();
        assert_eq!(next, expected);
        assert_eq!(next.step(), grid);
    }
}
