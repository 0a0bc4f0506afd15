use crate::color::{Rgb, utils::hsv};

/// Hue of pixel `index` when 256 hues are spread over `len` pixels.
///
/// Bresenham-style: every step adds `256 / len`, and the remainder
/// `256 % len` is accumulated until it overflows `len`, adding one more.
/// Equivalent to `start + floor(256 * index / len)` modulo 256.
#[allow(clippy::cast_possible_truncation)]
pub const fn exact_rainbow_hue(start_hue: u8, index: usize, len: usize) -> u8 {
    if len == 0 {
        return start_hue;
    }
    start_hue.wrapping_add(((256 * index) / len) as u8)
}

/// Fill `ring` with a full 0-255 hue sweep starting at `start_hue`.
///
/// Hues are distributed without rounding bias, so every ring size spans
/// the color wheel exactly once.
#[allow(clippy::cast_possible_truncation)]
pub fn fill_exact_rainbow(ring: &mut [Rgb], start_hue: u8) {
    let len = ring.len();
    if len == 0 {
        return;
    }

    let base_step = 256 / len;
    let remainder = 256 % len;

    let mut hue = start_hue;
    let mut error = 0;
    for led in ring.iter_mut() {
        *led = hsv(hue, 255, 255);
        hue = hue.wrapping_add(base_step as u8);
        error += remainder;
        if error >= len {
            hue = hue.wrapping_add(1);
            error -= len;
        }
    }
}
