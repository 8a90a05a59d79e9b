//! Test fixtures and constants.

use chromatune::models::{parse_color, Palette};
use chromatune::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Primary colors used across scenarios
pub mod primaries {
    /// Material blue
    pub const BLUE: &str = "#1e88e5";

    /// Saturated orange
    pub const ORANGE: &str = "#e65100";

    /// Muted teal
    pub const TEAL: &str = "#2a9d8f";
}

/// Palettes as `[accent, background, surface, buttonText, mainText]`
pub mod palettes {
    /// Every role the same mid grey
    pub const GREY: [&str; 5] = ["#808080", "#808080", "#808080", "#808080", "#808080"];

    /// A reasonable hand-made light theme for a blue primary
    pub const LIGHT_BLUE: [&str; 5] = ["#e5771e", "#f4f7fb", "#dde6f0", "#121212", "#1a2230"];

    /// Pure white background with pure black text
    pub const WHITE_BACKGROUND: [&str; 5] =
        ["#ff6600", "#ffffff", "#eeeeee", "#000000", "#000000"];
}

pub fn color(hex: &str) -> Color {
    parse_color(hex).unwrap()
}

pub fn palette(hex: &[&str]) -> Palette {
    Palette::from_hex(hex).unwrap()
}

/// Raw colors, for optimizer inputs that take slices.
pub fn colors(hex: &[&str]) -> Vec<Color> {
    hex.iter().map(|h| color(h)).collect()
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
