//! Named patterns
//!
//! Each pattern is stored in a frame large enough to hold every phase it goes
//! through (for oscillators), with cell coordinates relative to that frame.
//! `to_grid` adds a one-cell dead border around the frame.

use crate::core::{Grid, GridError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    StillLife,
    Oscillator { period: u32 },
    Spaceship { period: u32 },
}

#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub kind: PatternKind,
    pub rows: usize,
    pub cols: usize,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    // Still lifes
    Pattern {
        name: "block",
        kind: PatternKind::StillLife,
        rows: 2,
        cols: 2,
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "bee-hive",
        kind: PatternKind::StillLife,
        rows: 3,
        cols: 4,
        cells: &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)],
    },
    Pattern {
        name: "loaf",
        kind: PatternKind::StillLife,
        rows: 4,
        cols: 4,
        cells: &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 3), (3, 2)],
    },
    Pattern {
        name: "boat",
        kind: PatternKind::StillLife,
        rows: 3,
        cols: 3,
        cells: &[(0, 0), (0, 1), (1, 0), (1, 2), (2, 1)],
    },
    Pattern {
        name: "tub",
        kind: PatternKind::StillLife,
        rows: 3,
        cols: 3,
        cells: &[(0, 1), (1, 0), (1, 2), (2, 1)],
    },
    // Oscillators
    Pattern {
        name: "blinker",
        kind: PatternKind::Oscillator { period: 2 },
        rows: 3,
        cols: 3,
        cells: &[(0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "toad",
        kind: PatternKind::Oscillator { period: 2 },
        rows: 4,
        cols: 4,
        cells: &[(1, 1), (1, 2), (1, 3), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "beacon",
        kind: PatternKind::Oscillator { period: 2 },
        rows: 4,
        cols: 4,
        cells: &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
    },
    // Spaceships
    Pattern {
        name: "glider",
        kind: PatternKind::Spaceship { period: 4 },
        rows: 3,
        cols: 3,
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
];

impl Pattern {
    /// The pattern on its own grid, framed by one row/column of dead cells
    pub fn to_grid(&self) -> Grid {
        let mut grid = Grid::new(self.rows + 2, self.cols + 2);
        self.place(&mut grid, 1, 1);
        grid
    }

    /// Stamp live cells into `grid` with the frame's top-left at `(top, left)`.
    /// Cells that land outside `grid` are dropped. Returns how many were placed.
    pub fn place(&self, grid: &mut Grid, top: usize, left: usize) -> usize {
        let mut placed = 0;
        for &(row, col) in self.cells {
            if grid.set(top + row, left + col, true).is_ok() {
                placed += 1;
            }
        }
        placed
    }

    /// Top-left offset that centers the frame inside a `rows x cols` grid
    pub fn centered_origin(&self, rows: usize, cols: usize) -> (usize, usize) {
        (rows.saturating_sub(self.rows) / 2, cols.saturating_sub(self.cols) / 2)
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case-insensitive lookup; `-`, `_` and spaces are ignored ("Bee Hive" == "beehive")
pub fn pattern_by_name(name: &str) -> Result<&'static Pattern, GridError> {
    let wanted = normalize(name);
    PATTERNS
        .iter()
        .find(|p| normalize(p.name) == wanted)
        .ok_or_else(|| GridError::UnknownPattern(name.to_string()))
}

/// All names in table order, for populating a picker in the page
pub fn pattern_names() -> Vec<&'static str> {
    PATTERNS.iter().map(|p| p.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_fit_their_frames() {
        for p in PATTERNS {
            for &(r, c) in p.cells {
                assert!(r < p.rows && c < p.cols, "{} has cell ({}, {}) outside frame", p.name, r, c);
            }
        }
    }

    #[test]
    fn block_grid_matches_fixture() {
        let block = pattern_by_name("block").unwrap().to_grid();
        let expected = Grid::from_rows(vec![
            vec![false, false, false, false],
            vec![false, true, true, false],
            vec![false, true, true, false],
            vec![false, false, false, false],
        ])
        .unwrap();
        assert_eq!(block, expected);
    }

    #[test]
    fn lookup_ignores_case_and_separators() {
        assert_eq!(pattern_by_name("Bee Hive").unwrap().name, "bee-hive");
        assert_eq!(pattern_by_name("beehive").unwrap().name, "bee-hive");
        assert_eq!(pattern_by_name("BLINKER").unwrap().name, "blinker");
        assert_eq!(
            pattern_by_name("spaceship").unwrap_err(),
            GridError::UnknownPattern("spaceship".to_string())
        );
    }

    #[test]
    fn place_clips_at_edges() {
        let glider = pattern_by_name("glider").unwrap();
        let mut grid = Grid::new(2, 2);
        // Only (0, 1) of the glider fits at the origin
        assert_eq!(glider.place(&mut grid, 0, 0), 1);
        assert!(grid.is_alive(0, 1));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn centered_origin_saturates() {
        let beacon = pattern_by_name("beacon").unwrap();
        assert_eq!(beacon.centered_origin(10, 8), (3, 2));
        assert_eq!(beacon.centered_origin(2, 2), (0, 0));
    }

    #[test]
    fn names_are_unique() {
        let names = pattern_names();
        for (i, a) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(a), "duplicate pattern {}", a);
        }
    }
}
