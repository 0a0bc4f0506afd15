//! Side wipe
//!
//! Paints each ring from both ends toward the middle, then starts over in
//! the other color so the new wipe overlays the old one. Entering the mode
//! clears the rings and restarts the wipe from the ends.

use embassy_time::Duration;

use super::{Frame, Mode};
use crate::{
    color::{BLACK, BLUE, RED, Rgb, fill_solid},
    ring::{PixelBuffer, RING_LEDS, rings_forward},
};

/// Wipe is complete once both fronts have covered half the ring
const HALF_RING: usize = RING_LEDS / 2;

#[derive(Debug, Clone)]
pub struct SideWipe {
    expansion: usize,
    color: Rgb,
}

impl Default for SideWipe {
    fn default() -> Self {
        Self::new()
    }
}

impl SideWipe {
    pub const fn new() -> Self {
        Self {
            expansion: 0,
            color: BLUE,
        }
    }
}

impl Mode for SideWipe {
    fn render(&mut self, frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        if frame.just_entered {
            fill_solid(leds, BLACK);
            self.expansion = 0;
        }

        let near = self.expansion;
        let far = RING_LEDS - 1 - self.expansion;
        if near <= far {
            let (mut ring_a, mut ring_b) = rings_forward(leds);
            for ring in [&mut ring_a, &mut ring_b] {
                ring.set(near, self.color);
                ring.set(far, self.color);
            }
        }

        self.expansion += 1;
        if self.expansion > HALF_RING {
            self.expansion = 0;
            self.color = if self.color == BLUE { RED } else { BLUE };
        }

        Duration::from_millis(15)
    }
}
