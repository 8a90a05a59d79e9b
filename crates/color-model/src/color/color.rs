//! The [`Color`] value type.

use std::fmt;
use std::str::FromStr;

use super::hsl::Hsl;
use super::lab::Lab;
use super::linear_rgb::LinearRgb;
use super::lut::{linear_to_srgb8, srgb8_to_linear};
use super::named;
use super::oklab::Oklab;
use crate::error::ParseColorError;

/// One of the three 8-bit sRGB channels of a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in R, G, B order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        })
    }
}

/// An immutable sRGB color with every derived representation precomputed.
///
/// Channels are 8-bit integers; alpha is 0.0..=1.0. Construction computes
/// linear RGB, OkLab, CIELAB, HSL and relative luminance once, so perceptual
/// queries in search loops are plain field reads. There are no setters:
/// [`with_channel`](Self::with_channel) returns a fresh value with all caches
/// recomputed.
///
/// Equality compares RGB and alpha only.
///
/// # Example
///
/// ```
/// use color_model::{Channel, Color};
///
/// let teal: Color = "#008080".parse().unwrap();
/// let brighter = teal.with_channel(Channel::Green, 200);
/// assert_eq!(brighter.rgb(), [0, 200, 128]);
/// assert!(brighter.luminance() > teal.luminance());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Color {
    rgb: [u8; 3],
    alpha: f32,
    linear: LinearRgb,
    oklab: Oklab,
    lab: Lab,
    hsl: Hsl,
    luminance: f64,
}

impl Color {
    /// Opaque color from 8-bit channels.
    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// Color from 8-bit channels and an alpha value.
    ///
    /// Alpha is clamped into 0.0..=1.0; a NaN alpha is treated as opaque.
    pub fn from_rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        let alpha = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
        let linear = LinearRgb::new(srgb8_to_linear(r), srgb8_to_linear(g), srgb8_to_linear(b));
        let hsl = Hsl::from_srgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);

        Self {
            rgb: [r, g, b],
            alpha,
            linear,
            oklab: Oklab::from(linear),
            lab: Lab::from(linear),
            hsl,
            luminance: linear.luminance(),
        }
    }

    /// Opaque color from HSL (hue in degrees, saturation and lightness 0..=1).
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let (r, g, b) = Hsl::new(h, s, l).to_srgb();
        Self::from_rgb(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Opaque color from linear light, clamped into the sRGB gamut.
    pub fn from_linear(linear: LinearRgb) -> Self {
        Self::from_rgb(
            linear_to_srgb8(linear.r),
            linear_to_srgb8(linear.g),
            linear_to_srgb8(linear.b),
        )
    }

    #[inline]
    pub fn r(&self) -> u8 {
        self.rgb[0]
    }

    #[inline]
    pub fn g(&self) -> u8 {
        self.rgb[1]
    }

    #[inline]
    pub fn b(&self) -> u8 {
        self.rgb[2]
    }

    #[inline]
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Value of a single channel.
    #[inline]
    pub fn channel(&self, channel: Channel) -> u8 {
        self.rgb[channel_index(channel)]
    }

    /// New color with one channel replaced; alpha is kept.
    pub fn with_channel(&self, channel: Channel, value: u8) -> Self {
        let mut rgb = self.rgb;
        rgb[channel_index(channel)] = value;
        Self::from_rgba(rgb[0], rgb[1], rgb[2], self.alpha)
    }

    #[inline]
    pub fn linear(&self) -> LinearRgb {
        self.linear
    }

    #[inline]
    pub fn oklab(&self) -> Oklab {
        self.oklab
    }

    #[inline]
    pub fn lab(&self) -> Lab {
        self.lab
    }

    #[inline]
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// WCAG relative luminance, 0.0 (black) to 1.0 (white).
    #[inline]
    pub fn luminance(&self) -> f64 {
        self.luminance
    }

    /// Lowercase hex form: `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.rgb;
        if self.alpha < 1.0 {
            let a = (self.alpha * 255.0).round() as u8;
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}")
        }
    }
}

#[inline]
fn channel_index(channel: Channel) -> usize {
    match channel {
        Channel::Red => 0,
        Channel::Green => 1,
        Channel::Blue => 2,
    }
}

#[inline]
fn to_u8(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb && self.alpha == other.alpha
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a hex string or CSS color name.
    ///
    /// Supported hex forms (hash optional, case-insensitive, whitespace trimmed):
    /// `RGB`, `RRGGBB`, `RRGGBBAA`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some([r, g, b]) = named::lookup(s) {
            return Ok(Self::from_rgb(r, g, b));
        }
        if s.chars().all(|c| c.is_ascii_hexdigit()) && !s.is_empty() {
            return parse_hex(s);
        }
        Err(ParseColorError::UnknownName(s.to_string()))
    }
}

fn parse_hex(s: &str) -> Result<Color, ParseColorError> {
    if !s.is_ascii() {
        return Err(ParseColorError::UnknownName(s.to_string()));
    }
    if !matches!(s.len(), 3 | 6 | 8) {
        return Err(ParseColorError::InvalidLength);
    }
    // from_str_radix tolerates a leading sign
    if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidDigit(c));
    }
    match s.len() {
        3 => {
            // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
            let r = u8::from_str_radix(&s[0..1], 16)? * 17;
            let g = u8::from_str_radix(&s[1..2], 16)? * 17;
            let b = u8::from_str_radix(&s[2..3], 16)? * 17;
            Ok(Color::from_rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&s[0..2], 16)?;
            let g = u8::from_str_radix(&s[2..4], 16)?;
            let b = u8::from_str_radix(&s[4..6], 16)?;
            Ok(Color::from_rgb(r, g, b))
        }
        8 => {
            let r = u8::from_str_radix(&s[0..2], 16)?;
            let g = u8::from_str_radix(&s[2..4], 16)?;
            let b = u8::from_str_radix(&s[4..6], 16)?;
            let a = u8::from_str_radix(&s[6..8], 16)?;
            Ok(Color::from_rgba(r, g, b, a as f32 / 255.0))
        }
        _ => Err(ParseColorError::InvalidLength),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hex_parsing() {
        let white: Color = "#FFFFFF".parse().unwrap();
        assert_eq!(white.rgb(), [255, 255, 255]);

        let red: Color = "#f00".parse().unwrap();
        assert_eq!(red.rgb(), [255, 0, 0]);

        let no_hash: Color = "336699".parse().unwrap();
        assert_eq!(no_hash.rgb(), [0x33, 0x66, 0x99]);

        let padded: Color = "  #abc  ".parse().unwrap();
        assert_eq!(padded.rgb(), [0xaa, 0xbb, 0xcc]);
    }

    #[test]
    fn test_hex_with_alpha() {
        let c: Color = "#ff000080".parse().unwrap();
        assert_eq!(c.rgb(), [255, 0, 0]);
        assert!((c.alpha() - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.to_hex(), "#ff000080");
    }

    #[test]
    fn test_named_colors() {
        let white: Color = "white".parse().unwrap();
        assert_eq!(white, Color::from_rgb(255, 255, 255));
        let navy: Color = "Navy".parse().unwrap();
        assert_eq!(navy.rgb(), [0, 0, 0x80]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("#GGG".parse::<Color>(), Err(ParseColorError::InvalidDigit('G'))));
        assert!(matches!("#FFFF".parse::<Color>(), Err(ParseColorError::InvalidLength)));
        assert!(matches!("#".parse::<Color>(), Err(ParseColorError::InvalidLength)));
        assert!(matches!("".parse::<Color>(), Err(ParseColorError::UnknownName(_))));
        assert!(matches!("blurple".parse::<Color>(), Err(ParseColorError::UnknownName(_))));
    }

    #[test]
    fn test_signs_are_not_hex_digits() {
        assert!(matches!("#+f+f+f".parse::<Color>(), Err(ParseColorError::InvalidDigit('+'))));
        assert!(matches!("#+ff".parse::<Color>(), Err(ParseColorError::InvalidDigit('+'))));
        assert!(matches!("#-0f".parse::<Color>(), Err(ParseColorError::InvalidDigit('-'))));
        assert!(matches!("+fff".parse::<Color>(), Err(ParseColorError::UnknownName(_))));
    }

    #[test]
    fn test_equality_ignores_caches_but_not_alpha() {
        let a = Color::from_rgb(10, 20, 30);
        let b: Color = "#0a141e".parse().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Color::from_rgba(10, 20, 30, 0.5));
    }

    #[test]
    fn test_with_channel_recomputes_everything() {
        let black = Color::from_rgb(0, 0, 0);
        let red = black.with_channel(Channel::Red, 255);
        assert_eq!(red, Color::from_rgb(255, 0, 0));
        assert_eq!(red.oklab(), Color::from_rgb(255, 0, 0).oklab());
        assert_eq!(red.lab(), Color::from_rgb(255, 0, 0).lab());
        assert!(red.luminance() > 0.2);
        assert_eq!(black.rgb(), [0, 0, 0]);
    }

    #[test]
    fn test_hsl_constructor() {
        assert_eq!(Color::from_hsl(0.0, 1.0, 0.5).rgb(), [255, 0, 0]);
        assert_eq!(Color::from_hsl(240.0, 1.0, 0.5).rgb(), [0, 0, 255]);
        assert_eq!(Color::from_hsl(0.0, 0.0, 1.0).rgb(), [255, 255, 255]);
    }

    #[test]
    fn test_from_linear_clamps() {
        let c = Color::from_linear(LinearRgb::new(1.5, -0.2, 0.5));
        assert_eq!(c.r(), 255);
        assert_eq!(c.g(), 0);
    }

    #[test]
    fn test_to_hex_and_display() {
        let c = Color::from_rgb(0x12, 0xab, 0xef);
        assert_eq!(c.to_hex(), "#12abef");
        assert_eq!(c.to_string(), "#12abef");
    }
}
