use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::models::{Palette, PALETTE_SIZE};
use crate::search::CrossoverOperation;

/// Recombine two parents into two children.
///
/// Every operator keeps genes in place except `Shuffle`, which permutes a
/// range inside each child. Either way each child only carries colors taken
/// from its parents.
pub fn crossover<R: Rng + ?Sized>(
    operation: CrossoverOperation,
    first: &Palette,
    second: &Palette,
    rng: &mut R,
) -> (Palette, Palette) {
    let mut a = *first;
    let mut b = *second;

    match operation {
        CrossoverOperation::OnePoint => {
            let cut = rng.gen_range(1..PALETTE_SIZE);
            swap_range(&mut a, &mut b, cut, PALETTE_SIZE);
        }
        CrossoverOperation::TwoPoint => {
            let mut cuts = index::sample(rng, PALETTE_SIZE - 1, 2).into_vec();
            cuts.sort_unstable();
            swap_range(&mut a, &mut b, cuts[0] + 1, cuts[1] + 1);
        }
        CrossoverOperation::Block => {
            let start = rng.gen_range(0..PALETTE_SIZE);
            let end = rng.gen_range(start..PALETTE_SIZE);
            swap_range(&mut a, &mut b, start, end + 1);
        }
        CrossoverOperation::Uniform => {
            for i in 0..PALETTE_SIZE {
                if rng.gen_bool(0.5) {
                    swap_range(&mut a, &mut b, i, i + 1);
                }
            }
        }
        CrossoverOperation::Shuffle => {
            shuffle_range(&mut a, rng);
            shuffle_range(&mut b, rng);
        }
    }

    (a, b)
}

fn swap_range(a: &mut Palette, b: &mut Palette, start: usize, end: usize) {
    a.colors_mut()[start..end].swap_with_slice(&mut b.colors_mut()[start..end]);
}

fn shuffle_range<R: Rng + ?Sized>(palette: &mut Palette, rng: &mut R) {
    let start = rng.gen_range(0..PALETTE_SIZE);
    let end = rng.gen_range(start..PALETTE_SIZE);
    palette.colors_mut()[start..=end].shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_model::Color;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn parents() -> (Palette, Palette) {
        let a = Palette::from_hex(&["#100000", "#200000", "#300000", "#400000", "#500000"]);
        let b = Palette::from_hex(&["#000010", "#000020", "#000030", "#000040", "#000050"]);
        (a.unwrap(), b.unwrap())
    }

    fn contains(palette: &Palette, color: &Color) -> bool {
        palette.iter().any(|c| c == color)
    }

    #[test]
    fn test_children_only_carry_parent_genes() {
        let (a, b) = parents();
        let mut rng = StdRng::seed_from_u64(5);
        for operation in CrossoverOperation::ALL {
            for _ in 0..200 {
                let (c1, c2) = crossover(operation, &a, &b, &mut rng);
                for gene in c1.iter().chain(c2.iter()) {
                    assert!(
                        contains(&a, gene) || contains(&b, gene),
                        "{operation} invented {gene}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_swapping_operators_keep_positions() {
        let (a, b) = parents();
        let mut rng = StdRng::seed_from_u64(6);
        for operation in [
            CrossoverOperation::OnePoint,
            CrossoverOperation::TwoPoint,
            CrossoverOperation::Block,
            CrossoverOperation::Uniform,
        ] {
            for _ in 0..200 {
                let (c1, c2) = crossover(operation, &a, &b, &mut rng);
                for i in 0..PALETTE_SIZE {
                    let pair = (c1[i], c2[i]);
                    assert!(
                        pair == (a[i], b[i]) || pair == (b[i], a[i]),
                        "{operation} moved gene {i}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_one_point_swaps_a_tail() {
        let (a, b) = parents();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let (c1, _) = crossover(CrossoverOperation::OnePoint, &a, &b, &mut rng);
            // First gene always stays; once a gene comes from `b` the rest do too
            assert_eq!(c1[0], a[0]);
            let first_swapped = (1..PALETTE_SIZE).find(|&i| c1[i] == b[i]).unwrap();
            assert!((first_swapped..PALETTE_SIZE).all(|i| c1[i] == b[i]));
        }
    }

    #[test]
    fn test_two_point_swaps_a_middle_segment() {
        let (a, b) = parents();
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            let (c1, _) = crossover(CrossoverOperation::TwoPoint, &a, &b, &mut rng);
            assert_eq!(c1[0], a[0]);
            let swapped: Vec<usize> = (0..PALETTE_SIZE).filter(|&i| c1[i] == b[i]).collect();
            assert!(!swapped.is_empty());
            assert!(swapped.windows(2).all(|w| w[1] == w[0] + 1), "{swapped:?}");
        }
    }

    #[test]
    fn test_shuffle_keeps_each_parent_intact() {
        let (a, b) = parents();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let (c1, c2) = crossover(CrossoverOperation::Shuffle, &a, &b, &mut rng);
            assert!(a.iter().all(|gene| contains(&c1, gene)));
            assert!(b.iter().all(|gene| contains(&c2, gene)));
        }
    }
}
