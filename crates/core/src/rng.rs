//! RNG module - deterministic pseudo-random numbers
//!
//! A small LCG owned by each game session. Keeping the generator inside the
//! game state (rather than process-global) makes a whole session replayable
//! from its seed.

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid the all-zero fixed point
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}
