//! B3/S23 - the standard Conway rule

/// Next state of one cell given its current state and live-neighbor count
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // survival
        (false, 3) => true,            // birth
        _ => false,                    // under/overpopulation, or stays dead
    }
}
