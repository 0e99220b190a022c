//! Per-cell systems: neighbor counting and the transition rule.
//! The stepper in `simulation` drives both over the whole grid.

pub mod neighbors;
pub mod rules;

pub use neighbors::count_neighbors;
pub use rules::next_state;
