//! Perceptual gamma correction

/// Gamma exponent for perceptually linear fades
pub const GAMMA: f32 = 2.2;

/// Gamma-correct an 8-bit level: `255 * (value / 255) ^ 2.2`
///
/// The result is truncated, so low levels collapse to 0 and 255 maps to 255.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn gamma8(value: u8) -> u8 {
    let normalized = f32::from(value) / 255.0;
    (libm::powf(normalized, GAMMA) * 255.0) as u8
}
