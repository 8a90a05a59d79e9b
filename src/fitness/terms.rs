//! Individual scoring curves. Each returns a weighted contribution; the
//! weights are tuning constants, not derived at runtime.
//!
//! The rewards add up to at most [`MAX_FITNESS`]. They are sized so that a
//! well-balanced palette clears the default convergence thresholds of the
//! searches (mean 90, best 99) while the harmony seeds start below them.

use color_model::{contrast_ratio, distance, Color};

use crate::models::{Palette, PALETTE_SIZE};

/// Text contrast beyond WCAG AAA earns nothing more.
pub const TEXT_CONTRAST_CAP: f64 = 7.0;
pub const BUTTON_TEXT_WEIGHT: f64 = 2.6;
/// Main text is the primary reading content, so it counts double.
pub const MAIN_TEXT_WEIGHT: f64 = 2.0 * BUTTON_TEXT_WEIGHT;

/// Non-text UI elements only need WCAG AA-ish separation.
pub const ACCENT_SURFACE_CAP: f64 = 4.5;
pub const BACKGROUND_SURFACE_CAP: f64 = 3.0;
pub const UI_CONTRAST_WEIGHT: f64 = 2.6;

pub const HARMONY_WEIGHT: f64 = 1.3;

pub const MIN_BACKGROUND_LUMINANCE: f64 = 0.1;
pub const MAX_BACKGROUND_LUMINANCE: f64 = 0.9;
/// Penalty per unit of luminance outside the allowed band.
pub const LUMINANCE_PENALTY_SLOPE: f64 = 50.0;
/// OkLab chroma below this reads as flat grey.
pub const GREY_CHROMA: f64 = 0.02;
/// OkLab chroma above this stops earning the "tinted background" reward.
pub const MODERATE_CHROMA: f64 = 0.12;
pub const CHROMA_REWARD: f64 = 2.6;
pub const GREY_PENALTY: f64 = 2.0;

/// Target CIEDE2000 separation between any two palette colors.
pub const TARGET_SEPARATION: f64 = 10.0;
pub const SEPARATION_PENALTY_SLOPE: f64 = 1.0;
pub const SEPARATION_BONUS: f64 = 2.6;

/// Best harmony score for a single pair.
pub const HARMONY_PEAK: f64 = 5.0;

/// Upper bound of the total score, reached when every term is at its cap.
pub const MAX_FITNESS: f64 = TEXT_CONTRAST_CAP * (2.0 * BUTTON_TEXT_WEIGHT + MAIN_TEXT_WEIGHT)
    + UI_CONTRAST_WEIGHT * (ACCENT_SURFACE_CAP + BACKGROUND_SURFACE_CAP)
    + HARMONY_WEIGHT * 3.0 * HARMONY_PEAK
    + CHROMA_REWARD
    + SEPARATION_BONUS;

pub fn capped_contrast(a: &Color, b: &Color, cap: f64) -> f64 {
    contrast_ratio(a, b).min(cap)
}

/// Reward for the contrast between two colors that should relate but stay
/// distinguishable.
///
/// Non-monotonic: below 1.5:1 the pair is indistinguishable and penalized,
/// 3:1 to 7:1 is the sweet spot, and above 10:1 the reward tapers off
/// because the pair becomes jarring. The curve is continuous.
pub fn harmony_reward(ratio: f64) -> f64 {
    if ratio < 1.5 {
        -20.0 * (1.5 - ratio)
    } else if ratio < 3.0 {
        HARMONY_PEAK * (ratio - 1.5) / 1.5
    } else if ratio <= 7.0 {
        HARMONY_PEAK
    } else if ratio <= 10.0 {
        HARMONY_PEAK - (ratio - 7.0) * 2.0 / 3.0
    } else {
        3.0 - (ratio - 10.0) * 0.5
    }
}

/// Zero inside `[0.1, 0.9]`, negative and proportional to the overshoot outside.
pub fn background_luminance_score(luminance: f64) -> f64 {
    if luminance < MIN_BACKGROUND_LUMINANCE {
        -(MIN_BACKGROUND_LUMINANCE - luminance) * LUMINANCE_PENALTY_SLOPE
    } else if luminance > MAX_BACKGROUND_LUMINANCE {
        -(luminance - MAX_BACKGROUND_LUMINANCE) * LUMINANCE_PENALTY_SLOPE
    } else {
        0.0
    }
}

/// Penalize grey backgrounds, reward a moderate tint, fade the reward for
/// saturated backgrounds.
pub fn background_chroma_score(chroma: f64) -> f64 {
    if chroma < GREY_CHROMA {
        -GREY_PENALTY
    } else if chroma <= MODERATE_CHROMA {
        CHROMA_REWARD
    } else {
        (CHROMA_REWARD - (chroma - MODERATE_CHROMA) * 20.0).max(0.0)
    }
}

/// Smallest CIEDE2000 distance over the 10 unique pairs of the palette.
pub fn min_pairwise_distance(palette: &Palette) -> f64 {
    let colors = palette.colors();
    let mut min = f64::INFINITY;
    for i in 0..PALETTE_SIZE {
        for j in (i + 1)..PALETTE_SIZE {
            min = min.min(distance(&colors[i], &colors[j]));
        }
    }
    min
}

pub fn separation_score(min_distance: f64) -> f64 {
    if min_distance < TARGET_SEPARATION {
        -(TARGET_SEPARATION - min_distance) * SEPARATION_PENALTY_SLOPE
    } else {
        SEPARATION_BONUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harmony_curve_shape() {
        // Under-contrast is penalized
        assert!(harmony_reward(1.0) < 0.0);
        assert_eq!(harmony_reward(1.5), 0.0);
        // Sweet spot
        assert_eq!(harmony_reward(3.0), 5.0);
        assert_eq!(harmony_reward(5.0), 5.0);
        assert_eq!(harmony_reward(7.0), 5.0);
        // Tapering above 7:1, keeps falling past 10:1
        assert!(harmony_reward(9.0) < 5.0);
        assert!((harmony_reward(10.0) - 3.0).abs() < 1e-12);
        assert!(harmony_reward(21.0) < harmony_reward(10.0));
        // Over-contrast still beats indistinguishable
        assert!(harmony_reward(21.0) > harmony_reward(1.0));
    }

    #[test]
    fn test_harmony_curve_is_continuous() {
        for edge in [1.5, 3.0, 7.0, 10.0] {
            let below = harmony_reward(edge - 1e-9);
            let above = harmony_reward(edge + 1e-9);
            assert!((below - above).abs() < 1e-6, "discontinuity at {edge}");
        }
    }

    #[test]
    fn test_background_luminance_band() {
        assert_eq!(background_luminance_score(0.5), 0.0);
        assert_eq!(background_luminance_score(0.1), 0.0);
        assert!(background_luminance_score(0.95) < 0.0);
        assert!(background_luminance_score(0.02) < 0.0);
        assert!(background_luminance_score(1.0) < background_luminance_score(0.95));
    }

    #[test]
    fn test_background_chroma_rewards_moderate_tint() {
        assert_eq!(background_chroma_score(0.0), -GREY_PENALTY);
        assert_eq!(background_chroma_score(0.05), CHROMA_REWARD);
        assert!(background_chroma_score(0.2) < CHROMA_REWARD);
        assert!(background_chroma_score(0.5) >= 0.0);
    }

    #[test]
    fn test_max_fitness_leaves_headroom_over_thresholds() {
        // Default genetic threshold is 90, its best-individual bar 99.
        assert!(MAX_FITNESS > 99.0 + 10.0, "max fitness {MAX_FITNESS}");
        assert!((MAX_FITNESS - 117.0).abs() < 1e-9);
    }

    #[test]
    fn test_separation_penalty_is_proportional() {
        assert_eq!(separation_score(25.0), SEPARATION_BONUS);
        assert_eq!(separation_score(0.0), -TARGET_SEPARATION);
        assert!(separation_score(8.0) > separation_score(2.0));
    }
}
