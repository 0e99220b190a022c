//! Moore-neighborhood counting on a bounded grid
//!
//! Cells past the edge count as dead. There is no wraparound.

use crate::core::Grid;

/// Offsets of the 8 surrounding cells, row-major, center excluded
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Number of live neighbors of `(row, col)`, always in `0..=8`.
///
/// `(row, col)` must be inside `grid`. Debug builds assert it; release builds
/// just count whatever in-bounds neighbors exist.
pub fn count_neighbors(row: usize, col: usize, grid: &Grid) -> u8 {
    debug_assert!(
        row < grid.rows() && col < grid.cols(),
        "count_neighbors: ({}, {}) outside {}x{} grid",
        row,
        col,
        grid.rows(),
        grid.cols()
    );

    let (row, col) = (row as isize, col as isize);
    let mut count = 0;
    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let (nr, nc) = (row + dr, col + dc);
        if grid.in_bounds(nr, nc) && grid.as_slice()[grid.index(nr as usize, nc as usize)] {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<bool>>) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn all_alive_center_has_eight() {
        let g = grid(vec![
            vec![true, true, true],
            vec![true, true, true],
            vec![true, true, true],
        ]);
        assert_eq!(count_neighbors(1, 1, &g), 8);
    }

    #[test]
    fn isolated_center_has_zero() {
        let g = grid(vec![
            vec![false, false, false],
            vec![false, true, false],
            vec![false, false, false],
        ]);
        assert_eq!(count_neighbors(1, 1, &g), 0);
    }

    #[test]
    fn cell_itself_is_not_counted() {
        let g = Grid::from_cells(3, 3, &[(1, 1), (0, 0)]).unwrap();
        assert_eq!(count_neighbors(1, 1, &g), 1);
    }

    #[test]
    fn edges_do_not_wrap() {
        // Full 3x3: corners see 3, edges see 5
        let g = grid(vec![vec![true; 3]; 3]);
        assert_eq!(count_neighbors(0, 0, &g), 3);
        assert_eq!(count_neighbors(2, 2, &g), 3);
        assert_eq!(count_neighbors(0, 1, &g), 5);
        assert_eq!(count_neighbors(1, 2, &g), 5);

        // A live cell on the opposite edge must not leak across
        let g = Grid::from_cells(1, 5, &[(0, 4)]).unwrap();
        assert_eq!(count_neighbors(0, 0, &g), 0);
    }

    #[test]
    fn single_cell_grid() {
        let g = grid(vec![vec![true]]);
        assert_eq!(count_neighbors(0, 0, &g), 0);
    }

    #[test]
    fn count_stays_in_range_for_every_cell() {
        // Checkerboard-ish fill driven by a fixed bit pattern
        let rows: Vec<Vec<bool>> = (0..7)
            .map(|r| (0..9).map(|c| (r * 31 + c * 17) % 3 != 0).collect())
            .collect();
        let g = grid(rows);
        for r in 0..g.rows() {
            for c in 0..g.cols() {
                assert!(count_neighbors(r, c, &g) <= 8);
            }
        }
    }
}
