// rules.rs - Standard Life transition table (B3/S23)

use crate::grid::{ALIVE, DEAD};

/// Next state indexed by `[current as usize][live neighbors]`.
pub const TRANSITIONS: [[bool; 9]; 2] = [
    // Dead: birth on exactly 3
    [DEAD, DEAD, DEAD, ALIVE, DEAD, DEAD, DEAD, DEAD, DEAD],
    // Alive: survival on 2 or 3
    [DEAD, DEAD, ALIVE, ALIVE, DEAD, DEAD, DEAD, DEAD, DEAD],
];

pub fn next_state(alive: bool, live_neighbors: usize) -> bool {
    TRANSITIONS[alive as usize][live_neighbors]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_life_rule() {
        for count in 0..=8 {
            let survives = matches!((true, count), (true, 2) | (true, 3));
            let born = count == 3;
            assert_eq!(next_state(ALIVE, count), survives, "alive with {}", count);
            assert_eq!(next_state(DEAD, count), born, "dead with {}", count);
        }
    }
}
