//! Randomized bursts that restart with fresh parameters

use embassy_time::Duration;

use super::{Frame, Mode};
use crate::{
    color::{BLACK, fill_solid, hsv},
    random::Random8,
    ring::{PixelBuffer, RING_LEDS, arc_distance, rings, rings_forward},
};

#[allow(clippy::cast_possible_truncation)]
const RING_LEDS_U8: u8 = RING_LEDS as u8;

const SHOCK_GROWTH: usize = 3;
const SHOCK_MAX_RADIUS: usize = 12;

/// Burst expanding from a random center, restarting elsewhere once it
/// reaches its maximum radius
#[derive(Debug, Clone, Default)]
pub struct Shockwave {
    radius: usize,
    centers: Option<(usize, usize)>,
    hue: u8,
}

impl Shockwave {
    fn random_centers(rng: &mut Random8) -> (usize, usize) {
        (
            usize::from(rng.below(RING_LEDS_U8)),
            usize::from(rng.below(RING_LEDS_U8)),
        )
    }
}

impl Mode for Shockwave {
    fn render(&mut self, frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let (center_a, center_b) = *self
            .centers
            .get_or_insert_with(|| Self::random_centers(frame.rng));

        fill_solid(leds, BLACK);
        let (mut ring_a, mut ring_b) = rings(leds);
        let color_a = hsv(self.hue, 255, 255);
        let color_b = hsv(self.hue.wrapping_add(32), 255, 255);
        for i in 0..RING_LEDS {
            if arc_distance(i, center_a) <= self.radius {
                ring_a.set(i, color_a);
            }
            if arc_distance(i, center_b) <= self.radius {
                ring_b.set(i, color_b);
            }
        }

        self.radius += SHOCK_GROWTH;
        if self.radius > SHOCK_MAX_RADIUS {
            self.radius = 0;
            self.centers = Some(Self::random_centers(frame.rng));
            self.hue = self.hue.wrapping_add(1);
        }

        Duration::from_millis(10)
    }
}

const BARS: usize = 3;
const BAR_WIDTH: usize = RING_LEDS / BARS;
#[allow(clippy::cast_possible_truncation)]
const BAR_WIDTH_U8: u8 = BAR_WIDTH as u8;
const BAR_HUE_SPREAD: u8 = 40;

/// Three bars per ring jumping to random heights, like a spectrum display
///
/// Ring B grows its bars from the other end of each segment.
#[derive(Debug, Clone, Default)]
pub struct BarGraph {
    hue: u8,
}

impl Mode for BarGraph {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        let (mut ring_a, mut ring_b) = rings_forward(leds);
        for bar in 0..BARS {
            let height_a = usize::from(frame.rng.between(1, BAR_WIDTH_U8 + 1));
            let height_b = usize::from(frame.rng.between(1, BAR_WIDTH_U8 + 1));
            let spread = (bar as u8).wrapping_mul(BAR_HUE_SPREAD);
            let color_a = hsv(self.hue.wrapping_add(spread), 255, 255);
            let color_b = hsv(self.hue.wrapping_add(128).wrapping_add(spread), 255, 255);

            let start = bar * BAR_WIDTH;
            for i in 0..BAR_WIDTH {
                ring_a.set(start + i, if i < height_a { color_a } else { BLACK });
                let reversed = start + (BAR_WIDTH - 1 - i);
                ring_b.set(reversed, if i < height_b { color_b } else { BLACK });
            }
        }

        self.hue = self.hue.wrapping_add(1);
        Duration::from_millis(80)
    }
}
