//! Color vision deficiency simulation (Brettel, Viénot & Mollon 1997).
//!
//! Dichromat vision is modelled as a projection of linear RGB onto one of
//! two half-planes in LMS space; which half-plane applies depends on the side
//! of a separation plane the input falls on. Both projections are folded into
//! precomputed linear-RGB matrices, so simulation is one dot product plus one
//! 3x3 multiply.
//!
//! # References
//!
//! - Brettel, Viénot & Mollon, "Computerized simulation of color appearance
//!   for dichromats", JOSA A 14(10), 1997
//! - Matrices as published by the DaltonLens project for sRGB primaries

use crate::color::{Color, LinearRgb};

/// Kind of dichromacy to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deficiency {
    /// Missing L cones (red-blind)
    Protanopia,
    /// Missing M cones (green-blind)
    Deuteranopia,
    /// Missing S cones (blue-blind)
    Tritanopia,
}

impl Deficiency {
    pub const ALL: [Deficiency; 3] = [
        Deficiency::Protanopia,
        Deficiency::Deuteranopia,
        Deficiency::Tritanopia,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Deficiency::Protanopia => "protanopia",
            Deficiency::Deuteranopia => "deuteranopia",
            Deficiency::Tritanopia => "tritanopia",
        }
    }

    fn params(self) -> &'static BrettelParams {
        match self {
            Deficiency::Protanopia => &PROTAN,
            Deficiency::Deuteranopia => &DEUTAN,
            Deficiency::Tritanopia => &TRITAN,
        }
    }
}

struct BrettelParams {
    first_plane: [[f64; 3]; 3],
    second_plane: [[f64; 3]; 3],
    separation_normal: [f64; 3],
}

const PROTAN: BrettelParams = BrettelParams {
    first_plane: [
        [0.14980, 1.19548, -0.34528],
        [0.10764, 0.84864, 0.04372],
        [0.00384, -0.00540, 1.00156],
    ],
    second_plane: [
        [0.14570, 1.16172, -0.30742],
        [0.10816, 0.85291, 0.03892],
        [0.00386, -0.00527, 1.00141],
    ],
    separation_normal: [0.00048, 0.00393, -0.00441],
};

const DEUTAN: BrettelParams = BrettelParams {
    first_plane: [
        [0.36477, 0.86381, -0.22858],
        [0.26294, 0.64245, 0.09462],
        [-0.02006, 0.02728, 0.99278],
    ],
    second_plane: [
        [0.37298, 0.88166, -0.25464],
        [0.25954, 0.63506, 0.10540],
        [-0.01980, 0.02784, 0.99196],
    ],
    separation_normal: [-0.00281, -0.00611, 0.00892],
};

const TRITAN: BrettelParams = BrettelParams {
    first_plane: [
        [1.01277, 0.13548, -0.14826],
        [-0.01243, 0.86812, 0.14431],
        [0.07589, 0.80500, 0.11911],
    ],
    second_plane: [
        [0.93678, 0.18979, -0.12657],
        [0.06154, 0.81526, 0.12320],
        [-0.37562, 1.12767, 0.24796],
    ],
    separation_normal: [0.03901, -0.02788, -0.01113],
};

fn apply(m: &[[f64; 3]; 3], rgb: LinearRgb) -> LinearRgb {
    LinearRgb::new(
        m[0][0] * rgb.r + m[0][1] * rgb.g + m[0][2] * rgb.b,
        m[1][0] * rgb.r + m[1][1] * rgb.g + m[1][2] * rgb.b,
        m[2][0] * rgb.r + m[2][1] * rgb.g + m[2][2] * rgb.b,
    )
}

/// Simulate how `color` appears to a viewer with `deficiency`.
///
/// `severity` is clamped to 0.0..=1.0: 0.0 returns the input unchanged,
/// 1.0 is full dichromacy, values in between blend in linear RGB. Alpha is
/// carried over.
///
/// ```
/// use color_model::{simulate, Color, Deficiency};
///
/// let red = Color::from_rgb(255, 0, 0);
/// assert_eq!(simulate(&red, Deficiency::Protanopia, 0.0), red);
/// assert_ne!(simulate(&red, Deficiency::Protanopia, 1.0), red);
/// ```
pub fn simulate(color: &Color, deficiency: Deficiency, severity: f64) -> Color {
    let severity = if severity.is_nan() { 0.0 } else { severity.clamp(0.0, 1.0) };
    if severity == 0.0 {
        return *color;
    }

    let params = deficiency.params();
    let rgb = color.linear();
    let n = params.separation_normal;
    let side = rgb.r * n[0] + rgb.g * n[1] + rgb.b * n[2];
    let matrix = if side >= 0.0 {
        &params.first_plane
    } else {
        &params.second_plane
    };

    let simulated = rgb.lerp(apply(matrix, rgb), severity);
    let [r, g, b] = Color::from_linear(simulated).rgb();
    Color::from_rgba(r, g, b, color.alpha())
}
