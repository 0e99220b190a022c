//! Universe - the page-facing holder of the current generation
//!
//! `UniverseCore` owns one grid and a generation counter; it keeps no history.
//! Stepping replaces the grid with `next_generation(&grid)`.
//! The `#[wasm_bindgen]` wrapper lives in `facade.rs`.

use crate::core::{Grid, GridError};

#[path = "init/random.rs"]
mod random;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
mod facade;

pub use facade::Universe;
pub use step::next_generation;

pub struct UniverseCore {
    grid: Grid,
    generation: u64,
}

impl UniverseCore {
    /// Create an all-dead universe with given dimensions
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::try_new(rows, cols)?,
            generation: 0,
        })
    }

    /// Start from an existing grid at generation 0
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid, generation: 0 }
    }

    /// A universe holding just the named pattern, framed like `Pattern::to_grid`
    pub fn from_pattern(name: &str) -> Result<Self, GridError> {
        let pattern = crate::domain::patterns::pattern_by_name(name)?;
        Ok(Self::from_grid(pattern.to_grid()))
    }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn rows(&self) -> usize { self.grid.rows() }

    pub fn cols(&self) -> usize { self.grid.cols() }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn population(&self) -> usize { self.grid.population() }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.grid.is_alive(row, col)
    }

    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) -> bool {
        commands::set_cell(self, row, col, alive)
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) -> bool {
        commands::toggle_cell(self, row, col)
    }

    pub fn clear(&mut self) {
        commands::clear(self);
    }

    pub fn load_pattern(&mut self, name: &str) -> Result<(), GridError> {
        commands::load_pattern(self, name)
    }

    pub fn randomize(&mut self, seed: u32, density: f32) {
        commands::randomize(self, seed, density);
    }

    /// Advance one generation
    pub fn step(&mut self) {
        step::step(self);
    }

    pub fn step_n(&mut self, n: u32) {
        for _ in 0..n {
            step::step(self);
        }
    }

    /// Row-major cells as 0/1 bytes
    pub fn cells(&self) -> Vec<u8> {
        self.grid.as_slice().iter().map(|&alive| alive as u8).collect()
    }

    /// Pointer to the row-major cell array (for JS rendering straight from WASM memory).
    /// `bool` is one byte holding 0 or 1, so JS can view it as a `Uint8Array`.
    pub fn cells_ptr(&self) -> *const u8 {
        self.grid.as_slice().as_ptr() as *const u8
    }

    pub fn cells_len(&self) -> usize {
        self.grid.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
