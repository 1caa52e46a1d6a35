//! Uniform shuffling.
//!
//! Plate sampling, answer-option order, and the interleaving of test types
//! all go through [`shuffle`], so the fairness of the whole test rests on it
//! producing every permutation with equal probability.

use rand::Rng;

/// Return a uniformly random permutation of `items`, leaving the input intact.
///
/// Fisher–Yates: walks from the last index down to 1 and swaps each position
/// with a uniformly chosen index in `0..=i`.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
