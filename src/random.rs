//! Fast 16-bit pseudo random generator
//!
//! Same linear congruential generator FastLED uses for `random8`/`random16`:
//! good enough for sparkles, cheap enough to call per pixel.

const RAND16_MULTIPLIER: u16 = 2053;
const RAND16_INCREMENT: u16 = 13849;

/// Default seed used when the platform has no entropy source
pub const DEFAULT_SEED: u16 = 1337;

/// Linear congruential random generator
#[derive(Debug, Clone)]
pub struct Random8 {
    seed: u16,
}

impl Default for Random8 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Random8 {
    pub const fn new(seed: u16) -> Self {
        Self { seed }
    }

    /// Next 16-bit value
    pub const fn random16(&mut self) -> u16 {
        self.seed = self
            .seed
            .wrapping_mul(RAND16_MULTIPLIER)
            .wrapping_add(RAND16_INCREMENT);
        self.seed
    }

    /// Next 8-bit value
    ///
    /// Folds both halves of the state so the low byte's short period
    /// does not show.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn random8(&mut self) -> u8 {
        let value = self.random16();
        ((value & 0xFF) as u8).wrapping_add((value >> 8) as u8)
    }

    /// Random value in `0..limit` (0 when `limit` is 0)
    #[allow(clippy::cast_possible_truncation)]
    pub const fn below(&mut self, limit: u8) -> u8 {
        ((self.random8() as u16 * limit as u16) >> 8) as u8
    }

    /// Random value in `min..limit` (`min` when the range is empty)
    pub const fn between(&mut self, min: u8, limit: u8) -> u8 {
        if limit <= min {
            return min;
        }
        min + self.below(limit - min)
    }
}
