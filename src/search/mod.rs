//! Palette and path search.
//!
//! Three palette optimizers share the move generator in [`moves`] and the
//! fitness in [`crate::fitness`], and all of them MAXIMIZE fitness:
//!
//! - [`hill_climbing`]: steepest ascent, deterministic
//! - [`simulated_annealing`]: random walk with Metropolis acceptance
//! - [`genetic`]: rank-selected population with crossover and mutation
//!
//! [`find_optimal_color_path`] orders an arbitrary color set and MINIMIZES
//! its own path fitness. The two polarities are never mixed.
//!
//! Every stochastic optimizer takes the random source as an argument. Seed a
//! [`rand::rngs::StdRng`] to make a run reproducible.

mod annealing;
pub mod genetic;
mod hill_climbing;
pub mod moves;
mod options;
mod path;

use serde::Serialize;

use crate::models::Palette;

pub use annealing::simulated_annealing;
pub use genetic::{genetic, GeneticResult, Individual};
pub use hill_climbing::hill_climbing;
pub use moves::{neighbors, Move};
pub use options::{
    AnnealingOptions, CrossoverOperation, GeneticOptions, HillClimbingOptions, PathOptions,
};
pub use path::{find_optimal_color_path, path_fitness, ColorGraph, PathResult};

pub(crate) use options::percent;

/// Outcome of a single-solution optimizer run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub best_solution: Palette,
    pub best_fitness: f64,
    /// Completed iterations.
    pub iterations: u32,
    /// Fitness of the current solution after each iteration.
    pub fitness_history: Vec<f64>,
    /// Temperature at the start of each iteration. Only annealing sets it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_history: Option<Vec<f64>>,
}

impl OptimizationResult {
    /// Result for a start that cannot be climbed from.
    pub(crate) fn rejected(initial: Palette) -> Self {
        Self {
            best_solution: initial,
            best_fitness: f64::NEG_INFINITY,
            iterations: 0,
            fitness_history: Vec::new(),
            temperature_history: None,
        }
    }
}
