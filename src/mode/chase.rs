//! Moving dots, bands and gaps
//!
//! Positions are ring-relative and advance by a fixed step each frame,
//! always modulo the ring size. Ring B runs mirrored unless noted.

use embassy_time::Duration;

use super::{Frame, Mode};
use crate::{
    color::{BLACK, WHITE, hsv},
    ring::{PixelBuffer, RING_LEDS, rings, rings_forward},
};

/// Every third pixel lit, pattern crawls along the whole buffer
#[derive(Debug, Clone, Default)]
pub struct TheatreChase {
    offset: usize,
}

impl Mode for TheatreChase {
    fn render(&mut self, _frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        for (i, led) in leds.iter_mut().enumerate() {
            *led = if (i + self.offset) % 3 == 0 { WHITE } else { BLACK };
        }
        self.offset = (self.offset + 1) % 3;
        Duration::from_millis(50)
    }
}

/// White dot with a fading tail, same direction on both rings
#[derive(Debug, Clone, Default)]
pub struct RunningLights {
    position_a: usize,
    position_b: usize,
}

impl Mode for RunningLights {
    fn render(&mut self, _frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let (mut ring_a, mut ring_b) = rings_forward(leds);
        ring_a.fade(50);
        ring_b.fade(50);
        ring_a.set(self.position_a, WHITE);
        ring_b.set(self.position_b, WHITE);

        self.position_a = (self.position_a + 1) % RING_LEDS;
        self.position_b = (self.position_b + 1) % RING_LEDS;
        Duration::from_millis(30)
    }
}

/// How the lit band of a [`BandSweep`] is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandValue {
    /// Full brightness
    Full,
    /// Follow the control brightness
    Control,
}

/// Parameters of a rotating band
#[derive(Debug, Clone, Copy)]
pub struct SweepStyle {
    /// Band width in pixels
    pub width: usize,
    /// Decay applied before drawing (255 clears the rings)
    pub fade: u8,
    /// Positions advanced per frame
    pub step: usize,
    /// Hue advance per frame
    pub hue_step: u8,
    pub value: BandValue,
    pub delay: Duration,
}

/// Narrow laser band with a trail
pub const LASER_SWEEP: SweepStyle = SweepStyle {
    width: 3,
    fade: 40,
    step: 1,
    hue_step: 1,
    value: BandValue::Full,
    delay: Duration::from_millis(20),
};

/// Wide solid bar on an otherwise dark ring
pub const SPINNING_BAR: SweepStyle = SweepStyle {
    width: 6,
    fade: 255,
    step: 1,
    hue_step: 1,
    value: BandValue::Control,
    delay: Duration::from_millis(30),
};

/// Fast double-step slice with a short trail
pub const SONIC_SLICER: SweepStyle = SweepStyle {
    width: 6,
    fade: 80,
    step: 2,
    hue_step: 2,
    value: BandValue::Full,
    delay: Duration::from_millis(10),
};

/// Colored band rotating around each ring, counter-rotating on ring B
#[derive(Debug, Clone)]
pub struct BandSweep {
    style: SweepStyle,
    position_a: usize,
    position_b: usize,
    hue: u8,
}

impl BandSweep {
    pub const fn new(style: SweepStyle) -> Self {
        Self {
            style,
            position_a: 0,
            position_b: 0,
            hue: 0,
        }
    }
}

impl Mode for BandSweep {
    fn render(&mut self, frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let style = self.style;
        let value = match style.value {
            BandValue::Full => 255,
            BandValue::Control => frame.brightness,
        };

        let (mut ring_a, mut ring_b) = rings(leds);
        ring_a.fade(style.fade);
        ring_b.fade(style.fade);
        ring_a.band(self.position_a, style.width, hsv(self.hue, 255, value));
        ring_b.band(
            self.position_b,
            style.width,
            hsv(self.hue.wrapping_add(64), 255, value),
        );

        self.position_a = (self.position_a + style.step) % RING_LEDS;
        self.position_b = (self.position_b + style.step) % RING_LEDS;
        self.hue = self.hue.wrapping_add(style.hue_step);
        style.delay
    }
}

/// Two comets per ring at different speeds
#[derive(Debug, Clone, Default)]
pub struct OrbitingComets {
    slow: usize,
    fast: usize,
    hue: u8,
}

impl Mode for OrbitingComets {
    fn render(&mut self, _frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let hue = self.hue;
        let (mut ring_a, mut ring_b) = rings(leds);
        ring_a.fade(40);
        ring_b.fade(40);
        ring_a.set(self.slow, hsv(hue, 255, 255));
        ring_a.set(self.fast, hsv(hue.wrapping_add(32), 255, 255));
        ring_b.set(self.slow, hsv(hue.wrapping_add(64), 255, 255));
        ring_b.set(self.fast, hsv(hue.wrapping_add(96), 255, 255));

        self.slow = (self.slow + 1) % RING_LEDS;
        self.fast = (self.fast + 2) % RING_LEDS;
        self.hue = hue.wrapping_add(1);
        Duration::from_millis(30)
    }
}

/// Dot bouncing between the two ends of a ring
#[derive(Debug, Clone, Copy, Default)]
struct Bouncer {
    position: usize,
    backward: bool,
}

impl Bouncer {
    fn advance(&mut self) {
        if self.backward {
            self.position = self.position.saturating_sub(1);
        } else {
            self.position = (self.position + 1).min(RING_LEDS - 1);
        }
        if self.position == 0 || self.position == RING_LEDS - 1 {
            self.backward = !self.backward;
        }
    }
}

/// Bouncing ball of color on each ring
#[derive(Debug, Clone, Default)]
pub struct ColorBounce {
    ball_a: Bouncer,
    ball_b: Bouncer,
    hue: u8,
}

impl Mode for ColorBounce {
    fn render(&mut self, _frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let (mut ring_a, mut ring_b) = rings(leds);
        ring_a.fade(50);
        ring_b.fade(50);
        ring_a.set(self.ball_a.position, hsv(self.hue, 255, 255));
        ring_b.set(self.ball_b.position, hsv(self.hue.wrapping_add(64), 255, 255));

        self.ball_a.advance();
        self.ball_b.advance();
        self.hue = self.hue.wrapping_add(1);
        Duration::from_millis(40)
    }
}

const SURGE_GAP: usize = 4;
const SURGE_STEP: usize = 3;

/// Full-bright rings with a dark gap sweeping around
#[derive(Debug, Clone, Default)]
pub struct RadialSurge {
    gap_a: usize,
    gap_b: usize,
    hue: u8,
}

impl Mode for RadialSurge {
    fn render(&mut self, _frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let (mut ring_a, mut ring_b) = rings(leds);
        ring_a.fill(hsv(self.hue, 255, 255));
        ring_b.fill(hsv(self.hue.wrapping_add(64), 255, 255));
        ring_a.band(self.gap_a, SURGE_GAP, BLACK);
        ring_b.band(self.gap_b, SURGE_GAP, BLACK);

        self.gap_a = (self.gap_a + SURGE_STEP) % RING_LEDS;
        self.gap_b = (self.gap_b + SURGE_STEP) % RING_LEDS;
        self.hue = self.hue.wrapping_add(1);
        Duration::from_millis(50)
    }
}
