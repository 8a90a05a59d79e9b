//! Genetic algorithm over palettes.
//!
//! A generation is evaluated, its best member is folded into the best-ever
//! individual, and then the next generation is bred: elites are copied,
//! parents are drawn by rank, recombined with the configured
//! [`CrossoverOperation`] and mutated. Breeding consumes the caller's RNG on
//! the calling thread; only the pure fitness evaluation of the offspring is
//! spread across the rayon pool, so a seeded run is reproducible.

mod crossover;
mod mutation;
mod selection;

use color_model::Color;
use rand::Rng;
use rayon::prelude::*;
use serde::Serialize;

use super::{percent, CrossoverOperation, GeneticOptions};
use crate::error::OptimizeError;
use crate::fitness::evaluate;
use crate::models::Palette;

pub use crossover::crossover;
pub use mutation::mutate;
use selection::RankSelector;

/// Above this multiple of the threshold a single individual ends the run.
const BEST_THRESHOLD_FACTOR: f64 = 1.1;

/// A palette and its cached fitness.
///
/// Only [`Individual::new`] builds one, so the cached score always belongs
/// to the palette it sits next to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Individual {
    palette: Palette,
    fitness: f64,
}

impl Individual {
    pub fn new(primary: &Color, palette: Palette) -> Self {
        Self {
            fitness: evaluate(primary, &palette),
            palette,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }
}

/// Outcome of a genetic run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneticResult {
    /// The last generation.
    pub population: Vec<Individual>,
    pub best_palette: Palette,
    pub best_fitness: f64,
    /// Generations bred.
    pub iterations: u32,
    /// Fitness of every individual, one row per evaluated generation. Row 0
    /// is the initial population, so there is always one more row than
    /// `iterations`.
    pub fitness_history: Vec<Vec<f64>>,
}

/// Evolve `initial_population` towards higher fitness.
///
/// The population size stays at the initial size. The run stops after
/// `max_iterations` generations, or earlier once the mean finite fitness of
/// a generation reaches `threshold_fitness` or the best-ever fitness reaches
/// 110% of it.
///
/// # Errors
///
/// - [`OptimizeError::PopulationTooSmall`] for fewer than two palettes
/// - [`OptimizeError::InvalidPaletteLength`] if any palette is not five colors
pub fn genetic<P, R>(
    primary: &Color,
    initial_population: &[P],
    options: &GeneticOptions,
    rng: &mut R,
) -> Result<GeneticResult, OptimizeError>
where
    P: AsRef<[Color]>,
    R: Rng + ?Sized,
{
    if initial_population.len() < 2 {
        return Err(OptimizeError::PopulationTooSmall {
            size: initial_population.len(),
        });
    }
    let mut population = initial_population
        .iter()
        .map(|colors| Palette::from_slice(colors.as_ref()).map(|p| Individual::new(primary, p)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut best_palette = population[0].palette;
    let mut best_fitness = f64::NEG_INFINITY;
    let mut history = Vec::new();
    let mut iterations = 0;

    loop {
        let fitness: Vec<f64> = population.iter().map(|i| i.fitness).collect();
        for individual in &population {
            if individual.fitness > best_fitness {
                best_palette = individual.palette;
                best_fitness = individual.fitness;
            }
        }

        let mean = mean_finite(&fitness);
        tracing::trace!(
            generation = iterations,
            best_fitness,
            mean_fitness = mean,
            "Generation evaluated"
        );
        history.push(fitness);

        if has_converged(mean, best_fitness, options.threshold_fitness) {
            tracing::debug!(generation = iterations, "Genetic search converged");
            break;
        }
        if iterations >= options.max_iterations {
            break;
        }

        population = next_generation(primary, &population, options, rng);
        iterations += 1;
    }

    tracing::debug!(
        iterations,
        best_fitness,
        population = population.len(),
        "Genetic search finished"
    );

    Ok(GeneticResult {
        population,
        best_palette,
        best_fitness,
        iterations,
        fitness_history: history,
    })
}

fn mean_finite(fitness: &[f64]) -> Option<f64> {
    let finite: Vec<f64> = fitness.iter().copied().filter(|f| f.is_finite()).collect();
    if finite.is_empty() {
        None
    } else {
        Some(finite.iter().sum::<f64>() / finite.len() as f64)
    }
}

fn has_converged(mean: Option<f64>, best: f64, threshold: f64) -> bool {
    mean.is_some_and(|mean| mean >= threshold) || best >= threshold * BEST_THRESHOLD_FACTOR
}

fn next_generation<R: Rng + ?Sized>(
    primary: &Color,
    population: &[Individual],
    options: &GeneticOptions,
    rng: &mut R,
) -> Vec<Individual> {
    let size = population.len();
    let mut next = Vec::with_capacity(size);

    let mut ranked: Vec<&Individual> = population
        .iter()
        .filter(|i| i.fitness.is_finite())
        .collect();
    ranked.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    next.extend(ranked.into_iter().take(options.elitism_count).copied());

    let fitness: Vec<f64> = population.iter().map(|i| i.fitness).collect();
    let selector = RankSelector::new(&fitness);
    let crossover_probability = percent(options.crossover_probability);
    let mutation_probability = percent(options.mutation_probability);

    let mut offspring = Vec::with_capacity(size.saturating_sub(next.len()));
    while next.len() + offspring.len() < size {
        let first = &population[selector.select(rng)].palette;
        let second = &population[selector.select(rng)].palette;

        let (mut a, mut b) = if rng.gen_bool(crossover_probability) {
            crossover(options.crossover_operation, first, second, rng)
        } else {
            (*first, *second)
        };
        mutate(&mut a, mutation_probability, options.mutation_amount, rng);
        mutate(&mut b, mutation_probability, options.mutation_amount, rng);

        offspring.push(a);
        if next.len() + offspring.len() < size {
            offspring.push(b);
        }
    }

    next.par_extend(
        offspring
            .into_par_iter()
            .map(|palette| Individual::new(primary, palette)),
    );
    next
}
