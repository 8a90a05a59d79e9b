//! Harmony-based starting palettes built from the primary color.

use std::fmt;
use std::str::FromStr;

use color_model::{contrast_ratio, Channel, Color};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ParseOptionError;
use crate::models::Palette;

/// Channel jitter applied to seeded palettes past the first full cycle.
const SEED_JITTER: i32 = 24;

/// Near-white or near-black, whichever contrasts more with `background`.
fn text_on(background: &Color) -> Color {
    let light = Color::from_rgb(0xfa, 0xfa, 0xfa);
    let dark = Color::from_rgb(0x12, 0x12, 0x12);
    if contrast_ratio(&light, background) >= contrast_ratio(&dark, background) {
        light
    } else {
        dark
    }
}

/// Hue relationship between the primary color and the accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Harmony {
    /// Opposite hue (180 degrees)
    #[default]
    Complementary,
    /// Neighbouring hue (30 degrees)
    Analogous,
    /// One third round the wheel (120 degrees)
    Triadic,
    /// Next to the complement (150 degrees)
    SplitComplementary,
    /// Same hue, different lightness
    Monochromatic,
}

impl Harmony {
    pub const ALL: [Harmony; 5] = [
        Harmony::Complementary,
        Harmony::Analogous,
        Harmony::Triadic,
        Harmony::SplitComplementary,
        Harmony::Monochromatic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Harmony::Complementary => "complementary",
            Harmony::Analogous => "analogous",
            Harmony::Triadic => "triadic",
            Harmony::SplitComplementary => "split-complementary",
            Harmony::Monochromatic => "monochromatic",
        }
    }

    fn rotation(self) -> f64 {
        match self {
            Harmony::Complementary => 180.0,
            Harmony::Analogous => 30.0,
            Harmony::Triadic => 120.0,
            Harmony::SplitComplementary => 150.0,
            Harmony::Monochromatic => 0.0,
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Harmony {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Harmony::ALL
            .into_iter()
            .find(|h| h.name() == wanted || h.name().replace('-', "") == wanted)
            .ok_or_else(|| ParseOptionError {
                kind: "harmony",
                value: s.to_string(),
                expected: "complementary, analogous, triadic, split-complementary, monochromatic",
            })
    }
}

/// Deterministic palette `[accent, background, surface, buttonText,
/// mainText]` derived from `primary`.
///
/// The accent takes the harmony's hue with at least moderate saturation and
/// mid lightness. Background and surface are pale tints of the primary hue,
/// button text is near-white or near-black (whichever reads better on the
/// accent), and main text is a very dark tint.
pub fn harmony_palette(primary: &Color, harmony: Harmony) -> Palette {
    let base = primary.hsl();

    let accent = if harmony == Harmony::Monochromatic {
        let l = if base.l > 0.5 { base.l - 0.2 } else { base.l + 0.2 };
        Color::from_hsl(base.h, base.s.max(0.45), l.clamp(0.35, 0.6))
    } else {
        let hue = base.rotate(harmony.rotation()).h;
        Color::from_hsl(hue, base.s.max(0.45), base.l.clamp(0.35, 0.6))
    };
    let tint = base.s.min(0.25);
    let background = Color::from_hsl(base.h, tint, 0.94);
    let surface = Color::from_hsl(base.h, tint, 0.86);
    let button_text = text_on(&accent);
    let main_text = Color::from_hsl(base.h, 0.2, 0.12);

    Palette::new([accent, background, surface, button_text, main_text])
}

/// `size` starting palettes for the genetic search.
///
/// Cycles through every [`Harmony`]; after the first cycle each channel is
/// jittered by up to `±24` so repeated harmonies still differ.
pub fn seed_population<R: Rng + ?Sized>(
    primary: &Color,
    size: usize,
    rng: &mut R,
) -> Vec<Palette> {
    (0..size)
        .map(|i| {
            let mut palette = harmony_palette(primary, Harmony::ALL[i % Harmony::ALL.len()]);
            if i >= Harmony::ALL.len() {
                for color in palette.colors_mut().iter_mut() {
                    for channel in Channel::ALL {
                        let value = i32::from(color.channel(channel))
                            + rng.gen_range(-SEED_JITTER..=SEED_JITTER);
                        *color = color.with_channel(channel, value.clamp(0, 255) as u8);
                    }
                }
            }
            palette
        })
        .collect()
}
