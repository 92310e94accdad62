/// Layout seed used for foliage, lights and photos.
pub const LAYOUT_SEED: i32 = 42;

/// Reserved general-purpose seed; the text sampler draws from it.
pub const RESERVED_SEED: i32 = 12345;

/// Two-lane multiply-with-carry generator producing floats in `[0, 1)`.
///
/// The sequence is a pure function of the seed and the number of draws, so two generators
/// built from the same seed stay in lockstep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRng {
    w: i32,
    z: i32,
}

impl SeededRng {
    /// Create a generator from a 32-bit seed.
    pub fn new(seed: i32) -> Self {
        Self {
            w: 123_456_789i32.wrapping_add(seed),
            z: 987_654_321i32.wrapping_sub(seed),
        }
    }

    /// Next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        // Arithmetic shifts on purpose: both lanes are signed 32-bit words.
        self.z = 36969i32
            .wrapping_mul(self.z & 0xFFFF)
            .wrapping_add(self.z >> 16);
        self.w = 18000i32
            .wrapping_mul(self.w & 0xFFFF)
            .wrapping_add(self.w >> 16);
        (self.z << 16).wrapping_add(self.w & 0xFFFF) as u32
    }

    /// Next float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
