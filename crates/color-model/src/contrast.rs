//! WCAG 2.x luminance and contrast ratio.

use crate::color::Color;

/// WCAG AAA threshold for normal text.
pub const AAA_NORMAL_TEXT: f64 = 7.0;
/// WCAG AA threshold for normal text.
pub const AA_NORMAL_TEXT: f64 = 4.5;
/// WCAG AA threshold for large text and non-text UI components.
pub const AA_NON_TEXT: f64 = 3.0;

/// Relative luminance of a color (0.0..=1.0).
#[inline]
pub fn luminance(color: &Color) -> f64 {
    color.luminance()
}

/// WCAG contrast ratio between two colors, in 1.0..=21.0.
///
/// Symmetric: the lighter color is always the numerator.
///
/// ```
/// use color_model::{contrast_ratio, Color};
///
/// let black = Color::from_rgb(0, 0, 0);
/// let white = Color::from_rgb(255, 255, 255);
/// assert!((contrast_ratio(&black, &white) - 21.0).abs() < 1e-9);
/// ```
pub fn contrast_ratio(a: &Color, b: &Color) -> f64 {
    let la = a.luminance();
    let lb = b.luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
