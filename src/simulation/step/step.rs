use crate::core::Grid;
use crate::systems::{count_neighbors, next_state};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::UniverseCore;

/// Apply one generation of B3/S23 to `grid`, returning a new grid of the
/// same dimensions. The input is only read.
///
/// With the `parallel` feature, output rows are filled concurrently; every row
/// reads only from `grid`, so the result matches the sequential path.
pub fn next_generation(grid: &Grid) -> Grid {
    let cols = grid.cols();
    let mut cells = vec![false; grid.len()];
    if cols == 0 {
        return grid.with_cells(cells);
    }

    #[cfg(feature = "parallel")]
    {
        cells
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(row, out)| step_row(grid, row, out));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (row, out) in cells.chunks_mut(cols).enumerate() {
            step_row(grid, row, out);
        }
    }

    grid.with_cells(cells)
}

#[inline]
fn step_row(grid: &Grid, row: usize, out: &mut [bool]) {
    let current = grid.as_slice();
    for (col, cell) in out.iter_mut().enumerate() {
        let alive = current[grid.index(row, col)];
        *cell = next_state(alive, count_neighbors(row, col, grid));
    }
}

pub(super) fn step(universe: &mut UniverseCore) {
    universe.grid = next_generation(&universe.grid);
    universe.generation += 1;
}
