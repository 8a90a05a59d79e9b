use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Rank-based roulette over one generation.
///
/// Finite individuals are ranked by fitness, best first, and drawn with
/// weight `N - rank`. Non-finite individuals get rank `N` and therefore
/// weight zero. With fewer than two finite individuals there is nothing to
/// rank and every index is equally likely.
#[derive(Debug, Clone)]
pub(crate) struct RankSelector {
    weights: Option<WeightedIndex<usize>>,
    len: usize,
}

impl RankSelector {
    pub(crate) fn new(fitness: &[f64]) -> Self {
        let len = fitness.len();
        let mut order: Vec<usize> = (0..len).filter(|&i| fitness[i].is_finite()).collect();
        if order.len() < 2 {
            return Self { weights: None, len };
        }
        order.sort_by(|&a, &b| fitness[b].total_cmp(&fitness[a]));

        let mut weights = vec![0usize; len];
        for (rank, &index) in order.iter().enumerate() {
            weights[index] = len - rank;
        }
        Self {
            weights: WeightedIndex::new(&weights).ok(),
            len,
        }
    }

    /// Index of one selected parent.
    pub(crate) fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match &self.weights {
            Some(weights) => weights.sample(rng),
            None => rng.gen_range(0..self.len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn counts(selector: &RankSelector, len: usize, draws: usize) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = vec![0; len];
        for _ in 0..draws {
            counts[selector.select(&mut rng)] += 1;
        }
        counts
    }

    #[test]
    fn test_better_rank_is_drawn_more_often() {
        let selector = RankSelector::new(&[1.0, 30.0, 10.0, 20.0]);
        let counts = counts(&selector, 4, 20_000);
        // weights: 30 -> 4, 20 -> 3, 10 -> 2, 1 -> 1
        assert!(counts[1] > counts[3]);
        assert!(counts[3] > counts[2]);
        assert!(counts[2] > counts[0]);
        assert!(counts[0] > 0, "worst individual is never excluded");
    }

    #[test]
    fn test_non_finite_is_never_drawn() {
        let selector = RankSelector::new(&[f64::NEG_INFINITY, 5.0, f64::NAN, 2.0]);
        let counts = counts(&selector, 4, 5_000);
        assert_eq!(counts[0], 0);
        assert_eq!(counts[2], 0);
    }

    #[test]
    fn test_falls_back_to_uniform() {
        let selector = RankSelector::new(&[f64::NEG_INFINITY, 3.0, f64::NEG_INFINITY]);
        assert!(selector.weights.is_none());
        let counts = counts(&selector, 3, 3_000);
        assert!(counts.iter().all(|&c| c > 0));
    }
}
