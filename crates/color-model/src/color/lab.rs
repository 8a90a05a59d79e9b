//! CIELAB (D65) and the CIEDE2000 color difference.
//!
//! CIEDE2000 is the crate's canonical "perceptual distance": one unit is
//! roughly a just-noticeable difference, and values around 10 or more read
//! as clearly different colors.
//!
//! # References
//!
//! Sharma, Wu & Dalal, "The CIEDE2000 Color-Difference Formula:
//! Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations" (2005)

use super::linear_rgb::LinearRgb;

/// D65 reference white in XYZ.
const WHITE_X: f64 = 0.95047;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.08883;

const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

/// 25^7, used by the chroma compensation terms of CIEDE2000.
const POW25_7: f64 = 6_103_515_625.0;

/// A color in CIELAB space relative to the D65 white point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// CIE chroma `sqrt(a^2 + b^2)`.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    /// CIEDE2000 color difference with unit weighting factors (kL = kC = kH = 1).
    ///
    /// Symmetric, zero for identical inputs.
    ///
    /// ```
    /// use color_model::Lab;
    ///
    /// let a = Lab::new(50.0, 2.6772, -79.7751);
    /// let b = Lab::new(50.0, 0.0, -82.7485);
    /// assert!((a.delta_e_2000(b) - 2.0425).abs() < 1e-4);
    /// ```
    pub fn delta_e_2000(self, other: Lab) -> f64 {
        let (l1, a1, b1) = (self.l, self.a, self.b);
        let (l2, a2, b2) = (other.l, other.a, other.b);

        let c_bar = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
        let c_bar7 = c_bar.powi(7);
        let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

        let a1p = (1.0 + g) * a1;
        let a2p = (1.0 + g) * a2;
        let c1p = a1p.hypot(b1);
        let c2p = a2p.hypot(b2);
        let h1p = hue_degrees(b1, a1p);
        let h2p = hue_degrees(b2, a2p);

        let dl = l2 - l1;
        let dc = c2p - c1p;
        let dh_angle = if c1p * c2p == 0.0 {
            0.0
        } else {
            let diff = h2p - h1p;
            if diff.abs() <= 180.0 {
                diff
            } else if diff > 180.0 {
                diff - 360.0
            } else {
                diff + 360.0
            }
        };
        let dh = 2.0 * (c1p * c2p).sqrt() * (dh_angle.to_radians() / 2.0).sin();

        let l_bar = (l1 + l2) / 2.0;
        let c_bar_p = (c1p + c2p) / 2.0;
        let h_bar_p = if c1p * c2p == 0.0 {
            h1p + h2p
        } else if (h1p - h2p).abs() <= 180.0 {
            (h1p + h2p) / 2.0
        } else if h1p + h2p < 360.0 {
            (h1p + h2p + 360.0) / 2.0
        } else {
            (h1p + h2p - 360.0) / 2.0
        };

        let t = 1.0 - 0.17 * (h_bar_p - 30.0).to_radians().cos()
            + 0.24 * (2.0 * h_bar_p).to_radians().cos()
            + 0.32 * (3.0 * h_bar_p + 6.0).to_radians().cos()
            - 0.20 * (4.0 * h_bar_p - 63.0).to_radians().cos();

        let d_theta = 30.0 * (-((h_bar_p - 275.0) / 25.0).powi(2)).exp();
        let c_bar_p7 = c_bar_p.powi(7);
        let r_c = 2.0 * (c_bar_p7 / (c_bar_p7 + POW25_7)).sqrt();
        let l_term = (l_bar - 50.0).powi(2);
        let s_l = 1.0 + 0.015 * l_term / (20.0 + l_term).sqrt();
        let s_c = 1.0 + 0.045 * c_bar_p;
        let s_h = 1.0 + 0.015 * c_bar_p * t;
        let r_t = -(2.0 * d_theta).to_radians().sin() * r_c;

        let dl_s = dl / s_l;
        let dc_s = dc / s_c;
        let dh_s = dh / s_h;

        (dl_s * dl_s + dc_s * dc_s + dh_s * dh_s + r_t * dc_s * dh_s)
            .max(0.0)
            .sqrt()
    }
}

fn hue_degrees(b: f64, a: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

impl From<LinearRgb> for Lab {
    /// Linear sRGB -> XYZ (D65) -> CIELAB.
    fn from(rgb: LinearRgb) -> Self {
        let x = 0.4124564 * rgb.r + 0.3575761 * rgb.g + 0.1804375 * rgb.b;
        let y = 0.2126729 * rgb.r + 0.7151522 * rgb.g + 0.0721750 * rgb.b;
        let z = 0.0193339 * rgb.r + 0.1191920 * rgb.g + 0.9503041 * rgb.b;

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y / WHITE_Y);
        let fz = lab_f(z / WHITE_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}
