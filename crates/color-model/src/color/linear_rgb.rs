//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.
//! Luminance, OkLab/CIELAB conversion and dichromacy simulation all start here.

/// A color in linear RGB color space.
///
/// Values are typically in the range 0.0..=1.0, but intermediate results of
/// simulation or inverse transforms may fall outside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation towards `other` (`t = 0` keeps `self`).
    #[inline]
    pub fn lerp(self, other: LinearRgb, t: f64) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// WCAG 2.x relative luminance (Rec. 709 coefficients).
    #[inline]
    pub fn luminance(self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }
}
