//! Assertion helpers for tests.

use chromatune::fitness::evaluate;
use chromatune::search::OptimizationResult;
use chromatune::{Color, Palette};
use pretty_assertions::assert_eq;

/// Assert `history` never goes down
pub fn assert_non_decreasing(history: &[f64]) {
    for (i, pair) in history.windows(2).enumerate() {
        assert!(
            pair[1] >= pair[0],
            "Fitness regressed at iteration {}: {} -> {}",
            i + 1,
            pair[0],
            pair[1]
        );
    }
}

/// Assert the reported best fitness dominates every recorded value
pub fn assert_best_dominates<'a>(best: f64, history: impl IntoIterator<Item = &'a f64>) {
    for fitness in history {
        assert!(
            best >= *fitness,
            "Best fitness {best} is below recorded fitness {fitness}"
        );
    }
}

/// Assert the reported fitness is the palette's actual score
pub fn assert_consistent(primary: &Color, result: &OptimizationResult) {
    assert_eq!(
        result.best_fitness,
        evaluate(primary, &result.best_solution),
        "Reported fitness does not match best solution"
    );
}

/// Assert `palette` is a valid five-color palette whose score is finite
pub fn assert_scorable(primary: &Color, palette: &Palette) {
    assert_eq!(palette.colors().len(), 5);
    assert!(
        evaluate(primary, palette).is_finite(),
        "Palette {palette} has no finite fitness"
    );
}
