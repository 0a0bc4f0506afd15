//! Whole-buffer fills: solid colors, strobes and pulses
//!
//! None of these care about ring geometry except the rave strobe, which
//! gives each ring its own hue.

use embassy_time::Duration;

use super::{Frame, Mode};
use crate::{
    color::{BLACK, BLUE, Rgb, WHITE, fill_solid, hsv},
    math8::beatsin8,
    ring::{PixelBuffer, RING_LEDS},
};

/// All pixels off; also the fallback for unknown mode ids
#[derive(Debug, Clone, Default)]
pub struct Blank;

impl Mode for Blank {
    fn render(&mut self, _frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        fill_solid(leds, BLACK);
        Duration::from_millis(50)
    }
}

/// Single static color
#[derive(Debug, Clone)]
pub struct SolidFill {
    color: Rgb,
}

impl Default for SolidFill {
    fn default() -> Self {
        Self::new(BLUE)
    }
}

impl SolidFill {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Mode for SolidFill {
    fn render(&mut self, _frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        fill_solid(leds, self.color);
        Duration::from_millis(50)
    }
}

/// White / black toggle
#[derive(Debug, Clone, Default)]
pub struct FlashWhite {
    lit: bool,
}

impl Mode for FlashWhite {
    fn render(&mut self, _frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        fill_solid(leds, if self.lit { WHITE } else { BLACK });
        self.lit = !self.lit;
        Duration::from_millis(100)
    }
}

/// Full-ring pulse oscillating between 220 and 255
#[derive(Debug, Clone, Default)]
pub struct FullThrottlePulse {
    hue: u8,
}

impl Mode for FullThrottlePulse {
    fn render(&mut self, frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let value = beatsin8(30, 220, 255, frame.now, 0);
        fill_solid(leds, hsv(self.hue, 255, value));
        self.hue = self.hue.wrapping_add(1);
        Duration::from_millis(20)
    }
}

/// Rapid full-bright color cycling, ring B a quarter turn ahead
#[derive(Debug, Clone, Default)]
pub struct RaveStrobe {
    hue: u8,
}

impl Mode for RaveStrobe {
    fn render(&mut self, _frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let (ring_a, ring_b) = leds.split_at_mut(RING_LEDS);
        fill_solid(ring_a, hsv(self.hue, 255, 255));
        fill_solid(ring_b, hsv(self.hue.wrapping_add(64), 255, 255));
        self.hue = self.hue.wrapping_add(5);
        Duration::from_millis(20)
    }
}

const THUNDER_CYCLE: u8 = 60;
const THUNDER_FLASH_FRAMES: u8 = 5;
const THUNDER_BASE: u8 = 220;
const THUNDER_FLASH: u8 = 255;

/// Steady glow with a short full-bright flash every 60 frames
#[derive(Debug, Clone, Default)]
pub struct ThunderPulse {
    counter: u8,
    hue: u8,
}

impl Mode for ThunderPulse {
    fn render(&mut self, _frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let value = if self.counter < THUNDER_FLASH_FRAMES {
            THUNDER_FLASH
        } else {
            THUNDER_BASE
        };
        fill_solid(leds, hsv(self.hue, 255, value));
        self.counter = (self.counter + 1) % THUNDER_CYCLE;
        self.hue = self.hue.wrapping_add(1);
        Duration::from_millis(30)
    }
}

/// One full-color frame out of four, blackout otherwise
#[derive(Debug, Clone, Default)]
pub struct BassDrop {
    counter: u8,
    hue: u8,
}

impl Mode for BassDrop {
    fn render(&mut self, _frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let color = if self.counter % 4 == 0 {
            hsv(self.hue, 255, 255)
        } else {
            BLACK
        };
        fill_solid(leds, color);
        self.counter = self.counter.wrapping_add(1);
        self.hue = self.hue.wrapping_add(3);
        Duration::from_millis(100)
    }
}
