//! Random flashes over a decaying background
//!
//! The whole buffer decays toward black every frame, so every random
//! highlight leaves a short afterglow without tracking pixel history.

use embassy_time::Duration;

use super::{Frame, Mode};
use crate::{
    color::{fade_to_black_by, fill_solid, hsv},
    ring::{NUM_LEDS, PixelBuffer, RING_LEDS, rings},
};

#[allow(clippy::cast_possible_truncation)]
const NUM_LEDS_U8: u8 = NUM_LEDS as u8;
#[allow(clippy::cast_possible_truncation)]
const RING_LEDS_U8: u8 = RING_LEDS as u8;

/// One random pixel anywhere on the rings per frame
#[derive(Debug, Clone, Default)]
pub struct Sparkle;

impl Mode for Sparkle {
    fn render(&mut self, frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        fade_to_black_by(leds, 10);
        let position = usize::from(frame.rng.below(NUM_LEDS_U8));
        let hue = frame.rng.random8();
        leds[position] = hsv(hue, 200, 255);
        Duration::from_millis(30)
    }
}

/// Chance out of 256 that a firefly lights up on a ring each frame
const FIREFLY_CHANCE: u8 = 80;

#[derive(Debug, Clone, Default)]
pub struct FireflyDance {
    hue: u8,
}

impl Mode for FireflyDance {
    fn render(&mut self, frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let (mut ring_a, mut ring_b) = rings(leds);
        ring_a.fade(30);
        ring_b.fade(30);

        if frame.rng.random8() < FIREFLY_CHANCE {
            let position = usize::from(frame.rng.below(RING_LEDS_U8));
            ring_a.set(position, hsv(self.hue, 200, 255));
        }
        if frame.rng.random8() < FIREFLY_CHANCE {
            let position = usize::from(frame.rng.below(RING_LEDS_U8));
            ring_b.set(position, hsv(self.hue.wrapping_add(64), 200, 255));
        }

        self.hue = self.hue.wrapping_add(1);
        Duration::from_millis(30)
    }
}

/// Number of flash frames before the strobe fades out
const STROBE_FLASHES: u8 = 3;
/// Chance out of 256 that a faded strobe fires again
const STROBE_RESTART_CHANCE: u8 = 50;

/// Short strobe bursts at control brightness, fading out in between
#[derive(Debug, Clone, Default)]
pub struct StrobeFade {
    flashing: bool,
    flashes: u8,
    hue: u8,
}

impl Mode for StrobeFade {
    fn render(&mut self, frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        if self.flashing {
            fill_solid(leds, hsv(self.hue, 255, frame.brightness));
            self.flashes += 1;
            if self.flashes >= STROBE_FLASHES {
                self.flashing = false;
                self.flashes = 0;
            }
        } else {
            fade_to_black_by(leds, 80);
            if frame.rng.random8() < STROBE_RESTART_CHANCE {
                self.flashing = true;
            }
        }

        self.hue = self.hue.wrapping_add(1);
        Duration::from_millis(30)
    }
}
