//! Oscillator-driven dots
//!
//! Positions come from sine oscillators over the frame time instead of a
//! stored velocity, so motion stays periodic and never drifts.

use embassy_time::Duration;

use super::{Frame, Mode};
use crate::{
    color::hsv,
    math8::{beatsin8, beatsin16},
    ring::{PixelBuffer, RING_LEDS, rings},
};

#[allow(clippy::cast_possible_truncation)]
const LAST_POSITION: u8 = (RING_LEDS - 1) as u8;

/// Single swinging dot with a trail
#[derive(Debug, Clone, Default)]
pub struct Sinelon {
    hue: u8,
}

impl Mode for Sinelon {
    fn render(&mut self, frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let position = usize::from(beatsin8(10, 0, LAST_POSITION, frame.now, 0));

        let (mut ring_a, mut ring_b) = rings(leds);
        ring_a.fade(20);
        ring_b.fade(20);
        ring_a.add(position, hsv(self.hue, 200, 255));
        ring_b.add(position, hsv(self.hue.wrapping_add(64), 200, 255));

        self.hue = self.hue.wrapping_add(1);
        Duration::from_millis(20)
    }
}

const JUGGLE_DOTS: u8 = 4;

/// Four dots on slightly different periods weaving around each other
#[derive(Debug, Clone, Default)]
pub struct Juggle {
    hue: u8,
}

impl Mode for Juggle {
    fn render(&mut self, frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let (mut ring_a, mut ring_b) = rings(leds);
        ring_a.fade(20);
        ring_b.fade(20);

        for dot in 0..JUGGLE_DOTS {
            let position = usize::from(beatsin16(
                7 + u16::from(dot),
                0,
                u16::from(LAST_POSITION),
                frame.now,
                u16::from(dot) * 1000,
            ));
            let spread = dot * 32;
            ring_a.add(position, hsv(self.hue.wrapping_add(spread), 200, 255));
            ring_b.add(
                position,
                hsv(self.hue.wrapping_add(128).wrapping_add(spread), 200, 255),
            );
        }

        self.hue = self.hue.wrapping_add(1);
        Duration::from_millis(20)
    }
}
