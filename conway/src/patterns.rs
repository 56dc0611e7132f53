// patterns.rs - Named seed patterns and a seeded random fill

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::info;

use crate::grid::Grid;

/// A pattern as `(row, col)` offsets from its own top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding box as `(rows, cols)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Lightweight spaceship",
        cells: &[(0, 1), (0, 4), (1, 0), (2, 0), (2, 4), (3, 0), (3, 1), (3, 2), (3, 3)],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Clears the grid and places `pattern` centred on it. Patterns larger than
/// the board wrap around its edges.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    grid.set_running(false);
    grid.clear();

    let (h, w) = (grid.height(), grid.width());
    let (ph, pw) = pattern.extent();
    let top = h.saturating_sub(ph) / 2;
    let left = w.saturating_sub(pw) / 2;

    for &(row, col) in pattern.cells {
        grid.set_wrapped(top + row, left + col, true);
    }
    info!(pattern = pattern.name, live = grid.live_count(), "loaded pattern");
}

/// Clears the grid and makes roughly a third of the cells alive. The same
/// seed always produces the same board.
pub fn apply_random(grid: &mut Grid, seed_value: u64) {
    grid.set_running(false);
    grid.clear();

    // Simple pseudo-random generator
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            grid.set_wrapped(row, col, (seed >> 33) % 3 == 0);
        }
    }
    info!(seed = seed_value, live = grid.live_count(), "loaded random board");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents() {
        assert_eq!(find("pulsar").unwrap().extent(), (13, 13));
        assert_eq!(find("Blinker").unwrap().extent(), (1, 3));
        assert!(find("Gosper Glider Gun").is_none());
    }

    #[test]
    fn pattern_is_centred() {
        let mut grid = Grid::new(9, 9).unwrap();
        apply_pattern(&mut grid, find("Block").unwrap());
        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![(3, 3), (3, 4), (4, 3), (4, 4)]);
    }

    #[test]
    fn pattern_load_pauses_and_resets() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set_alive(0, 0, true).unwrap();
        grid.set_running(true);
        grid.advance_generation();
        apply_pattern(&mut grid, find("Glider").unwrap());
        assert!(!grid.is_running());
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.live_count(), 5);
    }

    #[test]
    fn oversized_pattern_wraps() {
        let mut grid = Grid::new(5, 5).unwrap();
        apply_pattern(&mut grid, find("Pulsar").unwrap());
        // (0, 2) stays put; (2, 12) folds onto (2, 2)
        assert_eq!(grid.cell(0, 2), Ok(true));
        assert_eq!(grid.cell(2, 2), Ok(true));
    }

    #[test]
    fn pattern_crossing_the_edge_wraps() {
        let mut grid = Grid::new(4, 4).unwrap();
        apply_pattern(&mut grid, find("Lightweight spaceship").unwrap());
        // column 4 folds onto column 0, and (2, 4) lands on the live (2, 0)
        assert_eq!(grid.cell(0, 0), Ok(true));
        assert_eq!(grid.live_count(), 9 - 1);
    }

    #[test]
    fn random_is_deterministic_per_seed() {
        let mut a = Grid::new(20, 20).unwrap();
        let mut b = Grid::new(20, 20).unwrap();
        apply_random(&mut a, 42);
        apply_random(&mut b, 42);
        assert_eq!(a.fingerprint(), b.fingerprint());
        let live = a.live_count();
        assert!(live > 60 && live < 200, "unexpected density: {live}");
    }
}
