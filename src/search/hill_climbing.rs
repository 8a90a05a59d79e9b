use color_model::Color;

use super::moves::neighbors;
use super::{HillClimbingOptions, OptimizationResult};
use crate::error::OptimizeError;
use crate::fitness::evaluate;
use crate::models::Palette;

/// Steepest-ascent hill climbing from `initial`.
///
/// Each iteration evaluates every neighbor and moves to the best one only if
/// it is strictly better than the current palette. An iteration without
/// improvement counts against `patience`; the run ends when that many
/// non-improving iterations happen in a row, when `max_iterations` is hit, or
/// when the palette has no neighbors at all.
///
/// The current palette is always the best seen, so it is returned as
/// `best_solution`. A start with non-finite fitness is returned unchanged
/// with `-inf` and zero iterations.
///
/// # Errors
///
/// [`OptimizeError::InvalidPaletteLength`] unless `initial` has five colors.
pub fn hill_climbing(
    primary: &Color,
    initial: &[Color],
    options: &HillClimbingOptions,
) -> Result<OptimizationResult, OptimizeError> {
    let mut current = Palette::from_slice(initial)?;
    let mut current_fitness = evaluate(primary, &current);
    if !current_fitness.is_finite() {
        tracing::warn!(palette = %current, "Initial palette has no finite fitness");
        return Ok(OptimizationResult::rejected(current));
    }

    let mut history = Vec::new();
    let mut stale = 0;
    let mut iterations = 0;

    while iterations < options.max_iterations && stale < options.patience {
        let moves = neighbors(&current, options.neighbour_step);
        if moves.is_empty() {
            break;
        }
        iterations += 1;

        // Ties keep the earliest candidate.
        let mut best_move: Option<(Palette, f64)> = None;
        for mv in &moves {
            let candidate = mv.apply(&current);
            let fitness = evaluate(primary, &candidate);
            if best_move.as_ref().map_or(true, |(_, best)| fitness > *best) {
                best_move = Some((candidate, fitness));
            }
        }

        match best_move {
            Some((candidate, fitness)) if fitness > current_fitness => {
                current = candidate;
                current_fitness = fitness;
                stale = 0;
            }
            _ => stale += 1,
        }
        history.push(current_fitness);

        tracing::trace!(
            iteration = iterations,
            fitness = current_fitness,
            stale,
            "Hill climbing step"
        );
    }

    tracing::debug!(
        iterations,
        best_fitness = current_fitness,
        "Hill climbing finished"
    );

    Ok(OptimizationResult {
        best_solution: current,
        best_fitness: current_fitness,
        iterations,
        fitness_history: history,
        temperature_history: None,
    })
}
