/// Seed used when the caller passes 0 (xorshift never leaves the all-zero state)
pub(super) const DEFAULT_SEED: u32 = 12345;

/// Random number generator (xorshift32)
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Fill every cell from the generator; each cell is alive with probability `density`
pub(super) fn fill(cells: &mut [bool], seed: u32, density: f32) {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    // Scaled to 2^32 so density 1.0 beats every possible roll
    let threshold = (density as f64 * (1u64 << 32) as f64) as u64;
    let mut state = if seed == 0 { DEFAULT_SEED } else { seed };

    for cell in cells.iter_mut() {
        *cell = (xorshift32(&mut state) as u64) < threshold;
    }
}
