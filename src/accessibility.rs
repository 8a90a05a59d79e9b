//! Color-vision-deficiency diagnostics.
//!
//! Reported next to a palette's fitness; never folded into it.

use color_model::{distance, simulate, Deficiency};
use serde::Serialize;

use crate::models::{Palette, Role, PALETTE_SIZE};

/// How well one deficiency still separates the palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CvdSeparation {
    pub deficiency: &'static str,
    /// Smallest CIEDE2000 distance between any two simulated colors.
    pub min_distance: f64,
    /// Roles of the closest pair.
    pub closest: (&'static str, &'static str),
}

/// Simulate every deficiency at full severity and report the closest pair of
/// roles under each.
pub fn cvd_report(palette: &Palette) -> Vec<CvdSeparation> {
    Deficiency::ALL
        .iter()
        .map(|&deficiency| separation(palette, deficiency))
        .collect()
}

fn separation(palette: &Palette, deficiency: Deficiency) -> CvdSeparation {
    let simulated: Vec<_> = palette
        .iter()
        .map(|color| simulate(color, deficiency, 1.0))
        .collect();

    let mut min_distance = f64::INFINITY;
    let mut closest = (0, 1);
    for i in 0..PALETTE_SIZE {
        for j in (i + 1)..PALETTE_SIZE {
            let d = distance(&simulated[i], &simulated[j]);
            if d < min_distance {
                min_distance = d;
                closest = (i, j);
            }
        }
    }

    CvdSeparation {
        deficiency: deficiency.name(),
        min_distance,
        closest: (Role::ALL[closest.0].name(), Role::ALL[closest.1].name()),
    }
}
