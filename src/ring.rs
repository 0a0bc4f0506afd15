//! Geometry of the two LED rings
//!
//! Both rings live in one contiguous buffer: ring A is `0..RING_LEDS`,
//! ring B is `RING_LEDS..NUM_LEDS`. Ring B is usually driven mirrored so
//! effects counter-rotate between the two sides of the glasses.

use crate::color::{Rgb, add_colors, fade_to_black_by, fill_solid};

/// Number of LEDs in one ring
pub const RING_LEDS: usize = 48;

/// Number of rings
pub const RING_COUNT: usize = 2;

/// Number of LEDs in the whole buffer
pub const NUM_LEDS: usize = RING_LEDS * RING_COUNT;

/// Frame buffer for both rings
pub type PixelBuffer = [Rgb; NUM_LEDS];

/// Mirror a ring-relative index (`ring - 1 - i`). Applying it twice is identity.
pub const fn mirror_index(index: usize) -> usize {
    RING_LEDS - 1 - (index % RING_LEDS)
}

/// Shorter-arc distance between two positions on a ring
pub const fn arc_distance(a: usize, b: usize) -> usize {
    let d = a.abs_diff(b) % RING_LEDS;
    if d > RING_LEDS - d { RING_LEDS - d } else { d }
}

/// Split the buffer into a forward ring A and a mirrored ring B
pub fn rings(leds: &mut PixelBuffer) -> (Ring<'_>, Ring<'_>) {
    let (a, b) = leds.split_at_mut(RING_LEDS);
    (Ring::forward(a), Ring::mirrored(b))
}

/// Split the buffer into two forward rings
pub fn rings_forward(leds: &mut PixelBuffer) -> (Ring<'_>, Ring<'_>) {
    let (a, b) = leds.split_at_mut(RING_LEDS);
    (Ring::forward(a), Ring::forward(b))
}

/// Mutable view of one ring with circular, optionally mirrored indexing
pub struct Ring<'a> {
    leds: &'a mut [Rgb],
    mirrored: bool,
}

impl<'a> Ring<'a> {
    pub const fn forward(leds: &'a mut [Rgb]) -> Self {
        Self {
            leds,
            mirrored: false,
        }
    }

    pub const fn mirrored(leds: &'a mut [Rgb]) -> Self {
        Self {
            leds,
            mirrored: true,
        }
    }

    /// Physical slot for a logical position; positions wrap around the ring
    const fn slot(&self, position: usize) -> usize {
        let position = position % RING_LEDS;
        if self.mirrored {
            mirror_index(position)
        } else {
            position
        }
    }

    pub fn set(&mut self, position: usize, color: Rgb) {
        let slot = self.slot(position);
        self.leds[slot] = color;
    }

    /// Add `color` on top of what is already there
    pub fn add(&mut self, position: usize, color: Rgb) {
        let slot = self.slot(position);
        self.leds[slot] = add_colors(self.leds[slot], color);
    }

    pub fn get(&self, position: usize) -> Rgb {
        self.leds[self.slot(position)]
    }

    pub fn fill(&mut self, color: Rgb) {
        fill_solid(self.leds, color);
    }

    pub fn fade(&mut self, amount: u8) {
        fade_to_black_by(self.leds, amount);
    }

    /// Paint `width` consecutive positions starting at `start`
    pub fn band(&mut self, start: usize, width: usize, color: Rgb) {
        for offset in 0..width {
            self.set(start + offset, color);
        }
    }
}
