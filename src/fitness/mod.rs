//! Multi-criteria palette fitness.
//!
//! Palette fitness is **maximized**: higher is strictly better, scores never
//! exceed [`MAX_FITNESS`], and `-inf` is the sentinel for structurally invalid or
//! numerically degenerate palettes. Callers must treat any non-finite score
//! as "reject, never select".
//!
//! The score is a weighted sum of independent terms, see [`FitnessBreakdown`].
//! Evaluation is pure and deterministic.

mod terms;

use color_model::Color;
use serde::Serialize;

use crate::models::{Palette, Role, PALETTE_SIZE};

pub use terms::{harmony_reward, min_pairwise_distance, MAX_FITNESS, TARGET_SEPARATION};

/// Per-criterion contributions to a palette's fitness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitnessBreakdown {
    /// buttonText vs accent and vs background, mainText vs surface (double weight)
    pub text_contrast: f64,
    /// accent vs surface and background vs surface
    pub ui_contrast: f64,
    /// Non-monotonic separation between accent, background and the primary color
    pub harmony: f64,
    /// Penalty for a background outside the comfortable luminance band
    pub background_luminance: f64,
    /// Grey backgrounds are penalized, moderately tinted ones rewarded
    pub background_chroma: f64,
    /// Penalty (or bonus) from the closest pair of palette colors
    pub separation: f64,
}

impl FitnessBreakdown {
    /// Sum of all terms; non-finite sums collapse to `-inf`.
    pub fn total(&self) -> f64 {
        let total = self.text_contrast
            + self.ui_contrast
            + self.harmony
            + self.background_luminance
            + self.background_chroma
            + self.separation;
        if total.is_finite() {
            total
        } else {
            f64::NEG_INFINITY
        }
    }

    /// Combined background quality term.
    pub fn background_quality(&self) -> f64 {
        self.background_luminance + self.background_chroma
    }
}

/// Score every criterion of `palette` against the `primary` brand color.
pub fn breakdown(primary: &Color, palette: &Palette) -> FitnessBreakdown {
    let accent = palette.get(Role::Accent);
    let background = palette.get(Role::Background);
    let surface = palette.get(Role::Surface);
    let button_text = palette.get(Role::ButtonText);
    let main_text = palette.get(Role::MainText);

    let text_contrast = terms::BUTTON_TEXT_WEIGHT
        * (terms::capped_contrast(button_text, accent, terms::TEXT_CONTRAST_CAP)
            + terms::capped_contrast(button_text, background, terms::TEXT_CONTRAST_CAP))
        + terms::MAIN_TEXT_WEIGHT
            * terms::capped_contrast(main_text, surface, terms::TEXT_CONTRAST_CAP);

    let ui_contrast = terms::UI_CONTRAST_WEIGHT
        * (terms::capped_contrast(accent, surface, terms::ACCENT_SURFACE_CAP)
            + terms::capped_contrast(background, surface, terms::BACKGROUND_SURFACE_CAP));

    let harmony = terms::HARMONY_WEIGHT
        * (harmony_reward(color_model::contrast_ratio(accent, primary))
            + harmony_reward(color_model::contrast_ratio(background, primary))
            + harmony_reward(color_model::contrast_ratio(accent, background)));

    FitnessBreakdown {
        text_contrast,
        ui_contrast,
        harmony,
        background_luminance: terms::background_luminance_score(background.luminance()),
        background_chroma: terms::background_chroma_score(background.oklab().chroma()),
        separation: terms::separation_score(min_pairwise_distance(palette)),
    }
}

/// Fitness of a palette. Higher is better.
///
/// ```
/// use chromatune::fitness::evaluate;
/// use chromatune::models::Palette;
///
/// let primary = "#3366ff".parse().unwrap();
/// let palette =
///     Palette::from_hex(&["#3366ff", "#eef2fb", "#ffffff", "#ffffff", "#1b1b29"]).unwrap();
/// assert!(evaluate(&primary, &palette).is_finite());
/// ```
#[inline]
pub fn evaluate(primary: &Color, palette: &Palette) -> f64 {
    breakdown(primary, palette).total()
}

/// Fitness of an unchecked color slice: `-inf` unless it holds exactly five colors.
pub fn evaluate_colors(primary: &Color, colors: &[Color]) -> f64 {
    if colors.len() != PALETTE_SIZE {
        return f64::NEG_INFINITY;
    }
    match Palette::from_slice(colors) {
        Ok(palette) => evaluate(primary, &palette),
        Err(_) => f64::NEG_INFINITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(hex: &str) -> Color {
        hex.parse().unwrap()
    }

    fn good_palette() -> Palette {
        Palette::from_hex(&["#2f5bd8", "#dfe6f5", "#f7f9fd", "#ffffff", "#151a2b"]).unwrap()
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let primary = color("#3366ff");
        let palette = good_palette();
        let a = evaluate(&primary, &palette);
        let b = evaluate(&primary, &palette);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_wrong_length_is_neg_infinity() {
        let primary = color("#3366ff");
        let four = vec![color("#000"); 4];
        let six = vec![color("#000"); 6];
        assert_eq!(evaluate_colors(&primary, &four), f64::NEG_INFINITY);
        assert_eq!(evaluate_colors(&primary, &six), f64::NEG_INFINITY);
        assert_eq!(evaluate_colors(&primary, &[]), f64::NEG_INFINITY);
    }

    #[test]
    fn test_evaluate_colors_matches_evaluate() {
        let primary = color("#3366ff");
        let palette = good_palette();
        assert_eq!(
            evaluate_colors(&primary, palette.colors()),
            evaluate(&primary, &palette)
        );
    }

    #[test]
    fn test_bright_grey_background_triggers_penalties() {
        let white = color("#ffffff");
        let palette =
            Palette::from_hex(&["#000000", "#ffffff", "#808080", "#000000", "#ffffff"]).unwrap();
        let scores = breakdown(&white, &palette);

        // Background luminance 1.0 is above the 0.9 ceiling
        assert!(scores.background_luminance < 0.0);
        // Pure white has no chroma
        assert!(scores.background_chroma < 0.0);
        assert!(scores.background_quality() < 0.0);
        // Duplicate colors collapse the minimum separation to zero
        assert_eq!(scores.separation, -TARGET_SEPARATION);
    }

    #[test]
    fn test_good_palette_beats_degenerate_one() {
        let primary = color("#3366ff");
        let flat = Palette::new([color("#777777"); 5]);
        assert!(evaluate(&primary, &good_palette()) > evaluate(&primary, &flat));
    }

    #[test]
    fn test_text_contrast_is_capped() {
        let primary = color("#3366ff");
        // Black on white already exceeds 7:1, so all text terms saturate.
        let palette =
            Palette::from_hex(&["#ffffff", "#ffffff", "#ffffff", "#000000", "#000000"]).unwrap();
        let scores = breakdown(&primary, &palette);
        let max_text = terms::TEXT_CONTRAST_CAP
            * (2.0 * terms::BUTTON_TEXT_WEIGHT + terms::MAIN_TEXT_WEIGHT);
        assert!((scores.text_contrast - max_text).abs() < 1e-9);
    }

    #[test]
    fn test_total_sums_terms() {
        let primary = color("#3366ff");
        let scores = breakdown(&primary, &good_palette());
        let sum = scores.text_contrast
            + scores.ui_contrast
            + scores.harmony
            + scores.background_luminance
            + scores.background_chroma
            + scores.separation;
        assert!((scores.total() - sum).abs() < 1e-12);
    }
}
