//! Optimizer options.
//!
//! One struct per optimizer, every field named, typed and defaulted. All of
//! them deserialize from partial YAML/JSON (missing fields take the default)
//! and offer consuming builder setters.
//!
//! ```
//! use chromatune::search::{CrossoverOperation, GeneticOptions};
//!
//! let options = GeneticOptions::new()
//!     .max_iterations(200)
//!     .crossover_operation(CrossoverOperation::TwoPoint);
//! assert_eq!(options.elitism_count, 1);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseOptionError;

/// Steepest-ascent hill climbing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HillClimbingOptions {
    /// Hard cap on climbing iterations.
    ///
    /// Default: `1000`
    pub max_iterations: u32,

    /// Consecutive non-improving iterations before giving up.
    ///
    /// Default: `50`
    pub patience: u32,

    /// Channel step used to generate neighbors.
    ///
    /// Default: `10`
    pub neighbour_step: u8,
}

impl Default for HillClimbingOptions {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            patience: 50,
            neighbour_step: 10,
        }
    }
}

impl HillClimbingOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[inline]
    pub fn patience(mut self, patience: u32) -> Self {
        self.patience = patience;
        self
    }

    #[inline]
    pub fn neighbour_step(mut self, step: u8) -> Self {
        self.neighbour_step = step;
        self
    }
}

/// Simulated annealing with geometric cooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealingOptions {
    /// Default: `5000`
    pub max_iterations: u32,

    /// Starting temperature, in fitness units.
    ///
    /// Default: `100.0`
    pub initial_temperature: f64,

    /// Multiplier applied to the temperature after every iteration.
    ///
    /// Default: `0.995`
    pub cooling_rate: f64,

    /// The run stops once the temperature is no longer above this.
    ///
    /// Default: `0.1`
    pub min_temperature: f64,

    /// Default: `15`
    pub neighbour_step: u8,
}

impl Default for AnnealingOptions {
    fn default() -> Self {
        Self {
            max_iterations: 5000,
            initial_temperature: 100.0,
            cooling_rate: 0.995,
            min_temperature: 0.1,
            neighbour_step: 15,
        }
    }
}

impl AnnealingOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[inline]
    pub fn initial_temperature(mut self, temperature: f64) -> Self {
        self.initial_temperature = temperature;
        self
    }

    #[inline]
    pub fn cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    #[inline]
    pub fn min_temperature(mut self, temperature: f64) -> Self {
        self.min_temperature = temperature;
        self
    }

    #[inline]
    pub fn neighbour_step(mut self, step: u8) -> Self {
        self.neighbour_step = step;
        self
    }
}

/// Crossover operator applied to a pair of 5-gene palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrossoverOperation {
    /// Swap the tail after one random cut point.
    OnePoint,
    /// Swap the middle segment between two random cut points.
    TwoPoint,
    /// Swap a random inclusive sub-range.
    Block,
    /// Swap each position independently with 50% probability.
    #[default]
    Uniform,
    /// Permute a random sub-range inside each offspring; nothing is exchanged.
    Shuffle,
}

impl CrossoverOperation {
    pub const ALL: [CrossoverOperation; 5] = [
        CrossoverOperation::OnePoint,
        CrossoverOperation::TwoPoint,
        CrossoverOperation::Block,
        CrossoverOperation::Uniform,
        CrossoverOperation::Shuffle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CrossoverOperation::OnePoint => "one-point",
            CrossoverOperation::TwoPoint => "two-point",
            CrossoverOperation::Block => "block",
            CrossoverOperation::Uniform => "uniform",
            CrossoverOperation::Shuffle => "shuffle",
        }
    }
}

impl fmt::Display for CrossoverOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CrossoverOperation {
    type Err = ParseOptionError;

    /// Accepts the kebab-case names plus their camelCase spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "one-point" | "onepoint" => Ok(CrossoverOperation::OnePoint),
            "two-point" | "twopoint" => Ok(CrossoverOperation::TwoPoint),
            "block" => Ok(CrossoverOperation::Block),
            "uniform" => Ok(CrossoverOperation::Uniform),
            "shuffle" => Ok(CrossoverOperation::Shuffle),
            _ => Err(ParseOptionError {
                kind: "crossover operation",
                value: s.to_string(),
                expected: "one-point, two-point, block, uniform, shuffle",
            }),
        }
    }
}

/// Genetic algorithm. Probabilities are percentages in `0..=100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticOptions {
    /// Maximum number of generations.
    ///
    /// Default: `1000`
    pub max_iterations: u32,

    /// Chance (percent) that a selected pair is recombined.
    ///
    /// Default: `70`
    pub crossover_probability: u8,

    /// Chance (percent) that a gene mutates, and that each channel of a
    /// jittered gene moves.
    ///
    /// Default: `10`
    pub mutation_probability: u8,

    /// Largest per-channel jitter.
    ///
    /// Default: `20`
    pub mutation_amount: u8,

    /// Stop once the average finite fitness reaches this, or the best-ever
    /// fitness reaches 110% of it.
    ///
    /// Default: `90.0`
    pub threshold_fitness: f64,

    /// Default: [`CrossoverOperation::Uniform`]
    pub crossover_operation: CrossoverOperation,

    /// Top individuals copied unchanged into the next generation.
    ///
    /// Default: `1`
    pub elitism_count: usize,
}

impl Default for GeneticOptions {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            crossover_probability: 70,
            mutation_probability: 10,
            mutation_amount: 20,
            threshold_fitness: 90.0,
            crossover_operation: CrossoverOperation::Uniform,
            elitism_count: 1,
        }
    }
}

impl GeneticOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[inline]
    pub fn crossover_probability(mut self, percent: u8) -> Self {
        self.crossover_probability = percent;
        self
    }

    #[inline]
    pub fn mutation_probability(mut self, percent: u8) -> Self {
        self.mutation_probability = percent;
        self
    }

    #[inline]
    pub fn mutation_amount(mut self, amount: u8) -> Self {
        self.mutation_amount = amount;
        self
    }

    #[inline]
    pub fn threshold_fitness(mut self, threshold: f64) -> Self {
        self.threshold_fitness = threshold;
        self
    }

    #[inline]
    pub fn crossover_operation(mut self, operation: CrossoverOperation) -> Self {
        self.crossover_operation = operation;
        self
    }

    #[inline]
    pub fn elitism_count(mut self, count: usize) -> Self {
        self.elitism_count = count;
        self
    }
}

/// Sequence (path) optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathOptions {
    /// Number of swap attempts. There is no early termination.
    ///
    /// Default: `10000`
    pub iterations: u32,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self { iterations: 10_000 }
    }
}

impl PathOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }
}

/// Convert a percentage option into a probability for `Rng::gen_bool`.
#[inline]
pub(crate) fn percent(value: u8) -> f64 {
    f64::from(value.min(100)) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let hc = HillClimbingOptions::default();
        assert_eq!((hc.max_iterations, hc.patience, hc.neighbour_step), (1000, 50, 10));

        let sa = AnnealingOptions::default();
        assert_eq!(sa.max_iterations, 5000);
        assert_eq!(sa.initial_temperature, 100.0);
        assert_eq!(sa.cooling_rate, 0.995);
        assert_eq!(sa.min_temperature, 0.1);
        assert_eq!(sa.neighbour_step, 15);

        let ga = GeneticOptions::default();
        assert_eq!(ga.max_iterations, 1000);
        assert_eq!(ga.crossover_probability, 70);
        assert_eq!(ga.mutation_probability, 10);
        assert_eq!(ga.mutation_amount, 20);
        assert_eq!(ga.threshold_fitness, 90.0);
        assert_eq!(ga.crossover_operation, CrossoverOperation::Uniform);
        assert_eq!(ga.elitism_count, 1);

        assert_eq!(PathOptions::default().iterations, 10_000);
    }

    #[test]
    fn test_builder_chaining() {
        let opts = AnnealingOptions::new()
            .initial_temperature(10.0)
            .min_temperature(1.0)
            .cooling_rate(0.9);
        assert_eq!(opts.initial_temperature, 10.0);
        assert_eq!(opts.min_temperature, 1.0);
        assert_eq!(opts.cooling_rate, 0.9);
        // Other values unchanged
        assert_eq!(opts.max_iterations, 5000);
    }

    #[test]
    fn test_crossover_from_str() {
        assert_eq!("one-point".parse::<CrossoverOperation>(), Ok(CrossoverOperation::OnePoint));
        assert_eq!("twoPoint".parse::<CrossoverOperation>(), Ok(CrossoverOperation::TwoPoint));
        assert_eq!(" Shuffle ".parse::<CrossoverOperation>(), Ok(CrossoverOperation::Shuffle));
        assert!("three-point".parse::<CrossoverOperation>().is_err());
        for op in CrossoverOperation::ALL {
            assert_eq!(op.name().parse::<CrossoverOperation>(), Ok(op));
        }
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let opts: GeneticOptions =
            serde_yaml::from_str("crossover_operation: block\nelitism_count: 3\n").unwrap();
        assert_eq!(opts.crossover_operation, CrossoverOperation::Block);
        assert_eq!(opts.elitism_count, 3);
        assert_eq!(opts.max_iterations, 1000);
    }

    #[test]
    fn test_unknown_crossover_in_yaml_is_rejected() {
        let result: Result<GeneticOptions, _> =
            serde_yaml::from_str("crossover_operation: three-point\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_percent_is_clamped() {
        assert_eq!(percent(70), 0.7);
        assert_eq!(percent(250), 1.0);
        assert_eq!(percent(0), 0.0);
    }
}
