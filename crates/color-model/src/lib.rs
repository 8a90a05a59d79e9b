//! color-model: perceptual color primitives for palette search
//!
//! This library provides the color value type and the pure perceptual
//! functions that palette scoring is built from.
//!
//! # Quick Start
//!
//! ```
//! use color_model::{contrast_ratio, distance, Color};
//!
//! let ink: Color = "#1a1a2e".parse().unwrap();
//! let paper: Color = "white".parse().unwrap();
//!
//! assert!(contrast_ratio(&ink, &paper) > 7.0);
//! assert!(distance(&ink, &paper) > 50.0);
//! ```
//!
//! # Color Spaces
//!
//! | Color Space | Key Property | Used For |
//! |-------------|--------------|----------|
//! | **sRGB (8-bit)** | Storage encoding | [`Color`] channels, hex I/O, search moves |
//! | **Linear RGB** | Proportional to light | Luminance, contrast, CVD simulation |
//! | **CIELAB** | CIEDE2000 is defined on it | [`distance()`] |
//! | **OkLab** | Uniform, cheap Euclidean metric | [`oklab_distance()`], chroma |
//! | **HSL** | Designer-friendly hue angle | Harmony hue rotation |
//!
//! A [`Color`] computes all of these once at construction. Search code
//! creates many colors and queries each one many times, so paying the
//! conversion cost up front keeps the scoring loop free of `powf` and `cbrt`.
//!
//! # Perceptual Distance
//!
//! [`distance()`] is CIEDE2000: about 1.0 is a just-noticeable difference,
//! 10.0 or more reads as a different color. [`oklab_distance()`] is on a
//! 0..~1 scale and much cheaper; use it only where relative ordering is
//! enough.
//!
//! # Accessibility
//!
//! [`contrast_ratio()`] implements WCAG 2.x (1:1 to 21:1). [`simulate()`]
//! renders a color as seen with protanopia, deuteranopia or tritanopia
//! using the Brettel 1997 model.

pub mod color;
pub mod contrast;
pub mod cvd;
pub mod error;

pub use color::{Channel, Color, Hsl, Lab, LinearRgb, Oklab};
pub use contrast::{contrast_ratio, luminance};
pub use cvd::{simulate, Deficiency};
pub use error::ParseColorError;

/// CIEDE2000 perceptual distance between two colors (alpha is ignored).
#[inline]
pub fn distance(a: &Color, b: &Color) -> f64 {
    a.lab().delta_e_2000(b.lab())
}

/// Euclidean OkLab distance between two colors (alpha is ignored).
#[inline]
pub fn oklab_distance(a: &Color, b: &Color) -> f64 {
    a.oklab().distance(b.oklab())
}
