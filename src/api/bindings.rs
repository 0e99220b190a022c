use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::core::{Grid, GridError};
use crate::domain::patterns::{pattern_by_name, pattern_names};
use crate::simulation::next_generation;
use crate::systems::count_neighbors;

fn to_js_error(err: GridError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Read a JS `boolean[][]`. Cells use JS truthiness, matching how the page reads them.
pub fn grid_from_js(value: &JsValue) -> Result<Grid, GridError> {
    if !Array::is_array(value) {
        return Err(GridError::NotAnArray("grid".to_string()));
    }

    let rows = Array::from(value);
    let mut out: Vec<Vec<bool>> = Vec::with_capacity(rows.length() as usize);
    for (idx, row) in rows.iter().enumerate() {
        if !Array::is_array(&row) {
            return Err(GridError::NotAnArray(format!("row {}", idx)));
        }
        out.push(Array::from(&row).iter().map(|cell| cell.is_truthy()).collect());
    }
    Grid::from_rows(out)
}

/// Write a grid back out as a fresh JS `boolean[][]`
pub fn grid_to_js(grid: &Grid) -> Array {
    grid.iter_rows()
        .map(|row| row.iter().map(|&alive| JsValue::from_bool(alive)).collect::<Array>())
        .collect()
}

/// Live neighbors of `(row, col)`; rejects out-of-range coordinates and ragged grids
#[wasm_bindgen(js_name = countNeighbors)]
pub fn count_neighbors_js(row: u32, col: u32, grid: &JsValue) -> Result<u8, JsValue> {
    let grid = grid_from_js(grid).map_err(to_js_error)?;
    let (row, col) = (row as usize, col as usize);
    if row >= grid.rows() || col >= grid.cols() {
        return Err(to_js_error(GridError::OutOfBounds {
            row,
            col,
            rows: grid.rows(),
            cols: grid.cols(),
        }));
    }
    Ok(count_neighbors(row, col, &grid))
}

/// Next generation as a new array; the input array is not touched
#[wasm_bindgen(js_name = nextGeneration)]
pub fn next_generation_js(grid: &JsValue) -> Result<Array, JsValue> {
    let grid = grid_from_js(grid).map_err(to_js_error)?;
    Ok(grid_to_js(&next_generation(&grid)))
}

/// Names for the pattern picker
#[wasm_bindgen(js_name = patternNames)]
pub fn pattern_names_js() -> Array {
    pattern_names().into_iter().map(JsValue::from_str).collect()
}

/// The named pattern as a framed `boolean[][]`
#[wasm_bindgen(js_name = patternGrid)]
pub fn pattern_grid_js(name: &str) -> Result<Array, JsValue> {
    let pattern = pattern_by_name(name).map_err(to_js_error)?;
    Ok(grid_to_js(&pattern.to_grid()))
}
