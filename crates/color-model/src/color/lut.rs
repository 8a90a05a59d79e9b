//! Gamma conversion between 8-bit sRGB and linear light.
//!
//! The decode direction uses a table generated at compile time by build.rs;
//! the encode direction uses the exact transfer function since its input is
//! continuous.

include!(concat!(env!("OUT_DIR"), "/gamma_table.rs"));

/// Decode an 8-bit sRGB code value to linear light (0.0..=1.0).
#[inline]
pub fn srgb8_to_linear(value: u8) -> f64 {
    SRGB8_TO_LINEAR[value as usize]
}

/// Encode linear light to a gamma-corrected sRGB value (0.0..=1.0).
///
/// Input outside 0.0..=1.0 is clamped first.
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    let linear = linear.clamp(0.0, 1.0);
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Encode linear light straight to an 8-bit sRGB code value.
#[inline]
pub fn linear_to_srgb8(linear: f64) -> u8 {
    (linear_to_srgb(linear) * 255.0).round().clamp(0.0, 255.0) as u8
}
