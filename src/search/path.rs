//! Ordering an arbitrary color set into an even-stepped sequence.
//!
//! Path fitness is MINIMIZED, the opposite of palette fitness. `+inf` marks a
//! path that cannot be scored.

use color_model::{distance, Color};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::PathOptions;
use crate::error::OptimizeError;
use crate::models::parse_color;

/// Weight of the inverse-mean term that discourages low-contrast paths.
const LOW_CONTRAST_PENALTY: f64 = 1.0;

/// Complete graph over a deduplicated color set, weighted by CIEDE2000.
#[derive(Debug, Clone)]
pub struct ColorGraph {
    labels: Vec<String>,
    colors: Vec<Color>,
    distances: Vec<Vec<f64>>,
}

impl ColorGraph {
    /// Parse and deduplicate `inputs`. Two identifiers naming the same color
    /// (`#fff` and `white`) collapse into one node labelled with the first
    /// spelling.
    pub fn build<S: AsRef<str>>(inputs: &[S]) -> Result<Self, OptimizeError> {
        let mut labels = Vec::new();
        let mut colors: Vec<Color> = Vec::new();
        for input in inputs {
            let input = input.as_ref();
            let color = parse_color(input)?;
            if !colors.contains(&color) {
                labels.push(input.to_string());
                colors.push(color);
            }
        }

        let distances = colors
            .iter()
            .map(|a| colors.iter().map(|b| distance(a, b)).collect())
            .collect();
        Ok(Self {
            labels,
            colors,
            distances,
        })
    }

    /// Number of unique colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances[from][to]
    }

    /// Fitness of visiting the nodes in `order`.
    pub fn fitness(&self, order: &[usize]) -> f64 {
        let steps: Vec<f64> = order
            .windows(2)
            .map(|pair| self.distance(pair[0], pair[1]))
            .collect();
        path_fitness(&steps)
    }
}

/// Coefficient of variation of the step distances plus a small inverse-mean
/// penalty. Lower is better; `+inf` when there are no steps or the mean step
/// is zero.
pub fn path_fitness(steps: &[f64]) -> f64 {
    if steps.is_empty() {
        return f64::INFINITY;
    }
    let n = steps.len() as f64;
    let mean = steps.iter().sum::<f64>() / n;
    if mean <= 0.0 || !mean.is_finite() {
        return f64::INFINITY;
    }
    let variance = steps.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt() / mean + LOW_CONTRAST_PENALTY / mean
}

/// Ordered color identifiers and their path fitness.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub path: Vec<String>,
    pub fitness: f64,
}

/// Order `colors` so that consecutive perceptual steps are as even as
/// possible.
///
/// Duplicates are dropped and the first color stays first. The rest start in
/// random order, and `iterations` random swaps of two non-first positions are
/// tried, each kept only if it strictly lowers the fitness. With fewer than
/// two unique colors the input is returned unchanged with `+inf`.
///
/// # Errors
///
/// - [`OptimizeError::TooFewColors`] for fewer than two identifiers
/// - [`OptimizeError::InvalidColor`] for an identifier that does not parse
pub fn find_optimal_color_path<S, R>(
    colors: &[S],
    options: &PathOptions,
    rng: &mut R,
) -> Result<PathResult, OptimizeError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if colors.len() < 2 {
        return Err(OptimizeError::TooFewColors {
            count: colors.len(),
        });
    }
    let graph = ColorGraph::build(colors)?;
    if graph.len() < 2 {
        tracing::debug!(
            inputs = colors.len(),
            "Fewer than two unique colors, nothing to order"
        );
        return Ok(PathResult {
            path: colors.iter().map(|c| c.as_ref().to_string()).collect(),
            fitness: f64::INFINITY,
        });
    }

    let n = graph.len();
    let mut order: Vec<usize> = (0..n).collect();
    order[1..].shuffle(rng);
    let mut fitness = graph.fitness(&order);
    let mut improvements = 0u32;

    if n >= 3 {
        for _ in 0..options.iterations {
            let i = rng.gen_range(1..n);
            let mut j = rng.gen_range(1..n - 1);
            if j >= i {
                j += 1;
            }
            order.swap(i, j);
            let candidate = graph.fitness(&order);
            if candidate < fitness {
                fitness = candidate;
                improvements += 1;
            } else {
                order.swap(i, j);
            }
        }
    }

    tracing::debug!(colors = n, improvements, fitness, "Color path optimized");

    Ok(PathResult {
        path: order.iter().map(|&i| graph.labels[i].clone()).collect(),
        fitness,
    })
}
