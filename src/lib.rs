//! Life Engine - Conway's Game of Life core in WASM
//!
//! The page owns rendering, input and the animation timer; it calls in here
//! to count neighbors and compute the next generation.
//!
//! Architecture:
//! - core/        - Grid type, errors, logging macro
//! - domain/      - Named patterns
//! - systems/     - Per-cell neighbor count and B3/S23 rule
//! - simulation/  - Generation stepper and the `Universe` holder
//! - api/         - JS bindings over plain `boolean[][]`

// Macros first so later modules can use `console_log!`
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

pub use crate::core::{Grid, GridError};
pub use domain::patterns::{pattern_by_name, Pattern, PatternKind, PATTERNS};
pub use simulation::{next_generation, Universe};
pub use systems::count_neighbors;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization (JS: initThreadPool)
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Life engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
