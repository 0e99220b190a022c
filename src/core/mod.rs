//! Core types shared by every layer: the grid, its errors, and logging helpers.

// Macros first so the rest of the crate can use `console_log!`.
#[macro_use]
pub mod utils;
pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::Grid;
