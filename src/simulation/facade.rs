use wasm_bindgen::prelude::*;

use crate::core::Grid;

use super::UniverseCore;

#[wasm_bindgen]
pub struct Universe {
    core: UniverseCore,
}

#[wasm_bindgen]
impl Universe {
    /// Create an all-dead universe with given dimensions; rejects boards too
    /// large to address
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u32, cols: u32) -> Result<Universe, JsValue> {
        let core = UniverseCore::new(rows as usize, cols as usize)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    /// A universe sized to hold just the named pattern
    #[wasm_bindgen(js_name = fromPattern)]
    pub fn from_pattern(name: &str) -> Result<Universe, JsValue> {
        let core = UniverseCore::from_pattern(name).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() as u32 }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() as u32 }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    #[wasm_bindgen(getter)]
    pub fn population(&self) -> u32 { self.core.population() as u32 }

    pub fn is_alive(&self, row: u32, col: u32) -> bool {
        self.core.is_alive(row as usize, col as usize)
    }

    /// Set one cell; false (and no change) when out of range
    pub fn set_cell(&mut self, row: u32, col: u32, alive: bool) -> bool {
        self.core.set_cell(row as usize, col as usize, alive)
    }

    /// Flip one cell (click handler); false (and no change) when out of range
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> bool {
        self.core.toggle_cell(row as usize, col as usize)
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Deterministic random fill; `density` is clamped to [0, 1]
    pub fn randomize(&mut self, seed: u32, density: f32) {
        self.core.randomize(seed, density);
    }

    /// Clear and draw the named pattern in the middle
    pub fn load_pattern(&mut self, name: &str) -> Result<(), JsValue> {
        self.core
            .load_pattern(name)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Step the simulation forward one generation
    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn step_n(&mut self, n: u32) {
        self.core.step_n(n);
    }

    /// Copy of the cells, row-major, 1 = alive
    pub fn cells(&self) -> Vec<u8> {
        self.core.cells()
    }

    /// Get pointer to the cell array (for JS rendering without a copy)
    pub fn cells_ptr(&self) -> *const u8 {
        self.core.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }

    /// Text form, `#` alive / `.` dead
    pub fn render(&self) -> String {
        self.core.grid().to_string()
    }
}

impl Universe {
    /// Start from an existing grid at generation 0
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            core: UniverseCore::from_grid(grid),
        }
    }

    pub fn grid(&self) -> &Grid {
        self.core.grid()
    }
}
