use color_model::Color;
use rand::seq::SliceRandom;
use rand::Rng;

use super::moves::neighbors;
use super::{AnnealingOptions, OptimizationResult};
use crate::error::OptimizeError;
use crate::fitness::evaluate;
use crate::models::Palette;

/// Metropolis acceptance: improvements always, regressions with probability
/// `exp(delta / temperature)`.
fn accept<R: Rng + ?Sized>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta > 0.0 {
        return true;
    }
    rng.gen::<f64>() < (delta / temperature).exp()
}

/// Simulated annealing from `initial` with geometric cooling.
///
/// Each iteration applies one uniformly chosen neighbor move. Candidates with
/// non-finite fitness are skipped, but the iteration still counts and the
/// temperature still drops. The run ends after `max_iterations`, once the
/// temperature is no longer above `min_temperature`, or when the current
/// palette has no neighbors.
///
/// Returns the best palette visited, which may differ from where the walk
/// ended. `fitness_history` holds the current fitness and
/// `temperature_history` the temperature of every completed iteration.
///
/// # Errors
///
/// [`OptimizeError::InvalidPaletteLength`] unless `initial` has five colors.
pub fn simulated_annealing<R: Rng + ?Sized>(
    primary: &Color,
    initial: &[Color],
    options: &AnnealingOptions,
    rng: &mut R,
) -> Result<OptimizationResult, OptimizeError> {
    let mut current = Palette::from_slice(initial)?;
    let mut current_fitness = evaluate(primary, &current);
    if !current_fitness.is_finite() {
        tracing::warn!(palette = %current, "Initial palette has no finite fitness");
        return Ok(OptimizationResult::rejected(current));
    }

    let mut best = current;
    let mut best_fitness = current_fitness;
    let mut temperature = options.initial_temperature;
    let mut fitness_history = Vec::new();
    let mut temperature_history = Vec::new();
    let mut iterations = 0;
    let mut accepted = 0u32;

    while iterations < options.max_iterations && temperature > options.min_temperature {
        let moves = neighbors(&current, options.neighbour_step);
        let Some(mv) = moves.choose(rng) else {
            break;
        };
        iterations += 1;
        temperature_history.push(temperature);

        let candidate = mv.apply(&current);
        let candidate_fitness = evaluate(primary, &candidate);

        if candidate_fitness.is_finite()
            && accept(candidate_fitness - current_fitness, temperature, rng)
        {
            current = candidate;
            current_fitness = candidate_fitness;
            accepted += 1;
            if current_fitness > best_fitness {
                best = current;
                best_fitness = current_fitness;
            }
        }

        fitness_history.push(current_fitness);
        temperature *= options.cooling_rate;
    }

    tracing::debug!(
        iterations,
        accepted,
        best_fitness,
        final_temperature = temperature,
        "Simulated annealing finished"
    );

    Ok(OptimizationResult {
        best_solution: best,
        best_fitness,
        iterations,
        fitness_history,
        temperature_history: Some(temperature_history),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn primary() -> Color {
        Color::from_rgb(0xe0, 0x4f, 0x1a)
    }

    fn start() -> Vec<Color> {
        vec![Color::from_rgb(128, 128, 128); 5]
    }

    #[test]
    fn test_accept_always_takes_improvements() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(accept(0.5, 1e-9, &mut rng));
        }
    }

    #[test]
    fn test_accept_rejects_large_regressions_when_cold() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(!accept(-1000.0, 0.01, &mut rng));
        }
    }

    #[test]
    fn test_best_is_never_below_history() {
        let options = AnnealingOptions::new().max_iterations(500);
        let mut rng = StdRng::seed_from_u64(42);
        let result = simulated_annealing(&primary(), &start(), &options, &mut rng).unwrap();

        assert_eq!(result.iterations, 500);
        assert_eq!(result.fitness_history.len(), 500);
        for fitness in &result.fitness_history {
            assert!(result.best_fitness >= *fitness);
        }
        assert_eq!(result.best_fitness, evaluate(&primary(), &result.best_solution));
    }

    #[test]
    fn test_temperature_decays_geometrically() {
        let options = AnnealingOptions::new()
            .max_iterations(10)
            .initial_temperature(50.0)
            .cooling_rate(0.5);
        let mut rng = StdRng::seed_from_u64(3);
        let result = simulated_annealing(&primary(), &start(), &options, &mut rng).unwrap();

        let temperatures = result.temperature_history.unwrap();
        // 50, 25, ... stops once the temperature reaches 0.1
        assert_eq!(temperatures.len(), 9);
        assert_eq!(temperatures[0], 50.0);
        for pair in temperatures.windows(2) {
            assert_eq!(pair[1], pair[0] * 0.5);
        }
    }

    #[test]
    fn test_cold_start_runs_no_iterations() {
        let options = AnnealingOptions::new()
            .initial_temperature(0.05)
            .min_temperature(0.1);
        let mut rng = StdRng::seed_from_u64(0);
        let result = simulated_annealing(&primary(), &start(), &options, &mut rng).unwrap();

        assert_eq!(result.iterations, 0);
        assert_eq!(result.best_solution.colors().to_vec(), start());
        assert_eq!(result.temperature_history, Some(Vec::new()));
    }

    #[test]
    fn test_same_seed_same_run() {
        let options = AnnealingOptions::new().max_iterations(200);
        let a = simulated_annealing(
            &primary(),
            &start(),
            &options,
            &mut StdRng::seed_from_u64(9),
        )
        .unwrap();
        let b = simulated_annealing(
            &primary(),
            &start(),
            &options,
            &mut StdRng::seed_from_u64(9),
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
