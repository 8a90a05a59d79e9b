//! Color types and conversion utilities
//!
//! - [`Color`]: the immutable 8-bit sRGB value every other module consumes
//! - [`LinearRgb`]: linear light, the base for luminance and conversions
//! - [`Oklab`]: cheap perceptual distance
//! - [`Lab`]: CIELAB with the CIEDE2000 difference
//! - [`Hsl`]: hue rotation for harmony rules

#[allow(clippy::module_inception)]
mod color;
mod hsl;
mod lab;
mod linear_rgb;
mod lut;
mod named;
mod oklab;

pub use color::{Channel, Color};
pub use hsl::Hsl;
pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use lut::{linear_to_srgb, srgb8_to_linear};
pub use oklab::Oklab;
