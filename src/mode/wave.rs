//! Full-ring patterns computed per pixel: noise, stripes, sine waves and
//! ripples. Ring B is mirrored with its own hue offset.

use embassy_time::Duration;

use super::{Frame, Mode};
use crate::{
    color::{BLACK, hsv},
    math8::{noise8, sin8},
    ring::{PixelBuffer, RING_LEDS, arc_distance, rings},
};

/// Noise-driven hue swirl at control brightness
#[derive(Debug, Clone, Default)]
pub struct PsychedelicSwirl {
    x: u16,
}

const SWIRL_SCALE: u16 = 40;
const SWIRL_SPEED: u16 = 30;

impl Mode for PsychedelicSwirl {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let (mut ring_a, mut ring_b) = rings(leds);
        for i in 0..RING_LEDS {
            let noise = noise8((i as u16).wrapping_mul(SWIRL_SCALE).wrapping_add(self.x));
            ring_a.set(i, hsv(noise, 255, frame.brightness));
            ring_b.set(i, hsv(noise.wrapping_add(64), 255, frame.brightness));
        }

        self.x = self.x.wrapping_add(SWIRL_SPEED);
        Duration::from_millis(20)
    }
}

const STRIPE_WIDTH: usize = 4;

/// Alternating lit and dark stripes crawling around the rings
#[derive(Debug, Clone, Default)]
pub struct NeonGrid {
    hue: u8,
}

impl Mode for NeonGrid {
    fn render(&mut self, frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let offset = usize::from(self.hue) % (STRIPE_WIDTH * 2);
        let color_a = hsv(self.hue, 255, frame.brightness);
        let color_b = hsv(self.hue.wrapping_add(64), 255, frame.brightness);

        let (mut ring_a, mut ring_b) = rings(leds);
        for i in 0..RING_LEDS {
            let lit = (i + offset) % (STRIPE_WIDTH * 2) < STRIPE_WIDTH;
            ring_a.set(i, if lit { color_a } else { BLACK });
            ring_b.set(i, if lit { color_b } else { BLACK });
        }

        self.hue = self.hue.wrapping_add(1);
        Duration::from_millis(30)
    }
}

/// Sine brightness wave traveling around each ring
#[derive(Debug, Clone, Default)]
pub struct EchoWaves {
    hue: u8,
}

impl Mode for EchoWaves {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, _frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let (mut ring_a, mut ring_b) = rings(leds);
        for i in 0..RING_LEDS {
            let value = sin8((i as u8).wrapping_mul(10).wrapping_add(self.hue));
            ring_a.set(i, hsv(self.hue, 255, value));
            ring_b.set(i, hsv(self.hue.wrapping_add(96), 255, value));
        }

        self.hue = self.hue.wrapping_add(1);
        Duration::from_millis(20)
    }
}

/// Brightness lost per pixel of distance from the ripple center
#[allow(clippy::cast_possible_truncation)]
const RIPPLE_FALLOFF: u8 = (255 / (RING_LEDS / 2)) as u8;

/// Brightness peak orbiting each ring, falling off with arc distance
#[derive(Debug, Clone, Default)]
pub struct LiquidRipple {
    center_a: usize,
    center_b: usize,
    hue: u8,
}

impl LiquidRipple {
    #[allow(clippy::cast_possible_truncation)]
    fn value_at(position: usize, center: usize) -> u8 {
        let distance = arc_distance(position, center) as u8;
        255u8.saturating_sub(distance.saturating_mul(RIPPLE_FALLOFF))
    }
}

impl Mode for LiquidRipple {
    fn render(&mut self, _frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let (mut ring_a, mut ring_b) = rings(leds);
        for i in 0..RING_LEDS {
            ring_a.set(i, hsv(self.hue, 255, Self::value_at(i, self.center_a)));
            ring_b.set(
                i,
                hsv(self.hue.wrapping_add(128), 255, Self::value_at(i, self.center_b)),
            );
        }

        self.center_a = (self.center_a + 1) % RING_LEDS;
        self.center_b = (self.center_b + 1) % RING_LEDS;
        self.hue = self.hue.wrapping_add(1);
        Duration::from_millis(40)
    }
}
