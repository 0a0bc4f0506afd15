//! 8- and 16-bit fixed-point helpers (FastLED-compatible)
//!
//! Everything here works on integers except the sine tables, which use
//! `libm` so the crate stays `no_std`.

use core::f32::consts::TAU;

use embassy_time::Instant;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale a 16-bit value by a factor (0-65535 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale16(value: u16, scale: u16) -> u16 {
    ((value as u32 * (1 + scale as u32)) >> 16) as u16
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Ease in out quadratic
pub const fn ease_in_out_quad(i: u8) -> u8 {
    let j = if i & 0x80 != 0 { 255 - i } else { i };
    let jj = scale8(j, j);
    let jj2 = jj << 1;
    if i & 0x80 == 0 { jj2 } else { 255 - jj2 }
}

/// Sine of an 8-bit angle (256 = full turn), mapped to 1..=255
///
/// `sin8(0) == 128`, peak at 64, trough at 192.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless
)]
pub fn sin8(theta: u8) -> u8 {
    let angle = f32::from(theta) * TAU / 256.0;
    libm::roundf(128.0 + 127.0 * libm::sinf(angle)) as u8
}

/// Sine of a 16-bit angle (65536 = full turn), mapped to -32767..=32767
#[allow(clippy::cast_possible_truncation)]
pub fn sin16(theta: u16) -> i16 {
    let angle = f32::from(theta) * TAU / 65536.0;
    libm::roundf(32767.0 * libm::sinf(angle)) as i16
}

/// Sawtooth that wraps `bpm` times per minute, 16-bit resolution
#[allow(clippy::cast_possible_truncation)]
pub const fn beat16(bpm: u16, now: Instant) -> u16 {
    // Same as FastLED beat88(bpm << 8): ms * bpm88 * 280 >> 16
    (now.as_millis().wrapping_mul(bpm as u64).wrapping_mul(280) >> 8) as u16
}

/// Sawtooth that wraps `bpm` times per minute, 8-bit resolution
#[allow(clippy::cast_possible_truncation)]
pub const fn beat8(bpm: u16, now: Instant) -> u8 {
    (beat16(bpm, now) >> 8) as u8
}

/// Sine oscillator between `low` and `high` (inclusive), `bpm` cycles per minute
pub fn beatsin8(bpm: u8, low: u8, high: u8, now: Instant, phase_offset: u8) -> u8 {
    let beat = beat8(u16::from(bpm), now);
    let sin = sin8(beat.wrapping_add(phase_offset));
    low.saturating_add(scale8(sin, high.saturating_sub(low)))
}

/// 16-bit sine oscillator between `low` and `high` (inclusive)
#[allow(clippy::cast_sign_loss)]
pub fn beatsin16(bpm: u16, low: u16, high: u16, now: Instant, phase_offset: u16) -> u16 {
    let beat = beat16(bpm, now);
    let sin = (i32::from(sin16(beat.wrapping_add(phase_offset))) + 32768) as u16;
    low.saturating_add(scale16(sin, high.saturating_sub(low)))
}

/// Simple deterministic hash for noise generation (no floats)
#[inline]
const fn hash(x: u64) -> u32 {
    // SplitMix64-style mixing, then fold down to u32.
    let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    #[allow(clippy::cast_possible_truncation)]
    {
        (z ^ (z >> 31)) as u32
    }
}

/// Smooth 1D value noise over an 8.8 fixed-point position.
///
/// The high byte selects the lattice cell, the low byte interpolates to the
/// next one. Returns 0-255.
#[allow(clippy::cast_possible_truncation)]
pub const fn noise8(x: u16) -> u8 {
    let cell = (x >> 8) as u64;
    let frac = (x & 0xFF) as u8;

    let v0 = (hash(cell) & 0xFF) as u8;
    let v1 = (hash(cell.wrapping_add(1)) & 0xFF) as u8;

    blend8(v0, v1, ease_in_out_quad(frac))
}
