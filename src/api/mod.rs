//! JS-facing entry points
//!
//! - bindings: `countNeighbors` / `nextGeneration` over plain `boolean[][]`
//! - `Universe` is exported from `simulation`

pub mod bindings;
