//! Rainbow cycle
//!
//! Each ring shows the whole color wheel, distributed exactly over its
//! pixels, and the wheel rotates by one hue step per frame.

use embassy_time::Duration;

use super::{Frame, Mode};
use crate::{
    color::fill_exact_rainbow,
    ring::{PixelBuffer, RING_LEDS},
};

const FRAME_DELAY: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Default)]
pub struct RainbowCycle {
    start_hue_a: u8,
    start_hue_b: u8,
}

impl RainbowCycle {
    pub const fn new() -> Self {
        Self {
            start_hue_a: 0,
            start_hue_b: 0,
        }
    }
}

impl Mode for RainbowCycle {
    fn render(&mut self, _frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let (ring_a, ring_b) = leds.split_at_mut(RING_LEDS);
        fill_exact_rainbow(ring_a, self.start_hue_a);
        fill_exact_rainbow(ring_b, self.start_hue_b);

        self.start_hue_a = self.start_hue_a.wrapping_add(1);
        self.start_hue_b = self.start_hue_b.wrapping_add(1);

        FRAME_DELAY
    }
}
