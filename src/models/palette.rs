use std::fmt;
use std::ops::Index;

use color_model::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::OptimizeError;

/// Number of colors in every palette the engine works with.
pub const PALETTE_SIZE: usize = 5;

/// The UI role of each palette slot. The discriminant is the slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Accent = 0,
    Background = 1,
    Surface = 2,
    ButtonText = 3,
    MainText = 4,
}

impl Role {
    pub const ALL: [Role; PALETTE_SIZE] = [
        Role::Accent,
        Role::Background,
        Role::Surface,
        Role::ButtonText,
        Role::MainText,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Accent => "accent",
            Role::Background => "background",
            Role::Surface => "surface",
            Role::ButtonText => "buttonText",
            Role::MainText => "mainText",
        }
    }
}

/// An ordered, role-indexed set of exactly five colors:
/// `[accent, background, surface, buttonText, mainText]`.
///
/// The length is part of the type, so a `Palette` can never be mis-sized;
/// conversions from slices reject anything but five colors instead of
/// padding or truncating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette([Color; PALETTE_SIZE]);

impl Palette {
    #[inline]
    pub fn new(colors: [Color; PALETTE_SIZE]) -> Self {
        Self(colors)
    }

    /// Build from a slice, failing unless it holds exactly five colors.
    pub fn from_slice(colors: &[Color]) -> Result<Self, OptimizeError> {
        let array = <[Color; PALETTE_SIZE]>::try_from(colors).map_err(|_| {
            OptimizeError::InvalidPaletteLength {
                expected: PALETTE_SIZE,
                actual: colors.len(),
            }
        })?;
        Ok(Self(array))
    }

    /// Parse five hex strings or color names.
    pub fn from_hex<S: AsRef<str>>(values: &[S]) -> Result<Self, OptimizeError> {
        let colors = values
            .iter()
            .map(|v| parse_color(v.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_slice(&colors)
    }

    #[inline]
    pub fn colors(&self) -> &[Color; PALETTE_SIZE] {
        &self.0
    }

    #[inline]
    pub fn get(&self, role: Role) -> &Color {
        &self.0[role.index()]
    }

    /// Copy of this palette with slot `index` replaced.
    pub fn with_color(&self, index: usize, color: Color) -> Self {
        let mut colors = self.0;
        colors[index] = color;
        Self(colors)
    }

    #[inline]
    pub(crate) fn colors_mut(&mut self) -> &mut [Color; PALETTE_SIZE] {
        &mut self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.0.iter()
    }

    pub fn to_hex(&self) -> Vec<String> {
        self.0.iter().map(Color::to_hex).collect()
    }
}

/// Parse one color identifier, attaching the input to the error.
pub fn parse_color(input: &str) -> Result<Color, OptimizeError> {
    input
        .parse::<Color>()
        .map_err(|source| OptimizeError::InvalidColor {
            input: input.to_string(),
            source,
        })
}

impl TryFrom<&[Color]> for Palette {
    type Error = OptimizeError;

    fn try_from(colors: &[Color]) -> Result<Self, Self::Error> {
        Self::from_slice(colors)
    }
}

impl AsRef<[Color]> for Palette {
    fn as_ref(&self) -> &[Color] {
        &self.0
    }
}

impl From<[Color; PALETTE_SIZE]> for Palette {
    fn from(colors: [Color; PALETTE_SIZE]) -> Self {
        Self(colors)
    }
}

impl Index<Role> for Palette {
    type Output = Color;

    fn index(&self, role: Role) -> &Color {
        &self.0[role.index()]
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.0[index]
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.to_hex().join(", "))
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_hex().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<String>::deserialize(deserializer)?;
        Palette::from_hex(&values).map_err(serde::de::Error::custom)
    }
}
