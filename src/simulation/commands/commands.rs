use crate::core::GridError;
use crate::domain::patterns::pattern_by_name;

use super::random;
use super::UniverseCore;

pub(super) fn set_cell(universe: &mut UniverseCore, row: usize, col: usize, alive: bool) -> bool {
    universe.grid.set(row, col, alive).is_ok()
}

pub(super) fn toggle_cell(universe: &mut UniverseCore, row: usize, col: usize) -> bool {
    universe.grid.toggle(row, col).is_ok()
}

pub(super) fn clear(universe: &mut UniverseCore) {
    universe.grid.clear();
    universe.generation = 0;
}

/// Clear, then draw the pattern centered. Unknown names leave the universe untouched.
pub(super) fn load_pattern(universe: &mut UniverseCore, name: &str) -> Result<(), GridError> {
    let pattern = pattern_by_name(name)?;

    clear(universe);
    let (top, left) = pattern.centered_origin(universe.grid.rows(), universe.grid.cols());
    let placed = pattern.place(&mut universe.grid, top, left);

    console_log!(
        "loaded pattern {} at ({}, {}): {}/{} cells",
        pattern.name,
        top,
        left,
        placed,
        pattern.cells.len()
    );
    Ok(())
}

pub(super) fn randomize(universe: &mut UniverseCore, seed: u32, density: f32) {
    let (rows, cols) = (universe.grid.rows(), universe.grid.cols());
    random::fill(universe.grid.cells_mut(), seed, density);
    universe.generation = 0;

    console_log!(
        "randomized {}x{} (seed {}, density {}): {} alive",
        rows,
        cols,
        seed,
        density,
        universe.grid.population()
    );
}
