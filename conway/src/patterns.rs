// patterns.rs - Named seed patterns, stamped onto a grid with wrap-around

use crate::grid::{ALIVE, Grid};

pub struct Pattern {
    pub name: &'static str,
    /// `(x, y)` offsets from the stamp origin
    pub cells: &'static [(isize, isize)],
    /// Repeat period in place; `None` for patterns that move or evolve
    pub period: Option<usize>,
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
        period: Some(1),
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
        period: Some(2),
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
        period: Some(2),
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
        period: Some(2),
    },
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        period: None,
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
        period: None,
    },
];

impl Pattern {
    /// Sets the pattern's cells alive with its origin at `(x, y)`. Other cells are untouched.
    pub fn stamp(&self, grid: &mut Grid, x: isize, y: isize) {
        for &(dx, dy) in self.cells {
            grid.set(x + dx, y + dy, ALIVE);
        }
    }
}

pub fn pattern_by_name(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(pattern_by_name("glider").map(|p| p.name), Some("Glider"));
        assert_eq!(pattern_by_name("r-PENTOMINO").map(|p| p.cells.len()), Some(5));
        assert!(pattern_by_name("gun").is_none());
    }

    #[test]
    fn stamp_wraps_past_the_edge() {
        let mut grid = Grid::new(6, 6).unwrap();
        pattern_by_name("block").unwrap().stamp(&mut grid, 5, 5);
        assert_eq!(grid.population(), 4);
        assert_eq!(grid.get(5, 5), Some(true));
        assert_eq!(grid.get(0, 0), Some(true));
        assert_eq!(grid.get(0, 5), Some(true));
        assert_eq!(grid.get(5, 0), Some(true));
    }
}
