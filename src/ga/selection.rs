//! Tournament selection.
//!
//! The engine uses one selection scheme throughout: sample a small group of
//! distinct genomes uniformly at random and keep its two best. The same
//! primitive picks recombination parents and, later in the generation,
//! survivors.

use crate::board::{cmp_fitness_desc, Genome};
use rand::Rng;

/// Runs one tournament over `pool` and returns the indices of its two
/// fittest entrants, best first.
///
/// `size` distinct indices are sampled uniformly, resampling duplicates, so
/// the two winners always reference different genomes.
///
/// # Panics
/// Panics if `size < 2` or the pool holds fewer than `size` genomes.
pub fn tournament_pair<R: Rng>(pool: &[Genome], size: usize, rng: &mut R) -> (usize, usize) {
    assert!(size >= 2, "tournament size must be at least 2");
    assert!(
        pool.len() >= size,
        "tournament size {size} exceeds pool of {}",
        pool.len()
    );

    let mut entrants: Vec<usize> = Vec::with_capacity(size);
    while entrants.len() < size {
        let idx = rng.random_range(0..pool.len());
        if !entrants.contains(&idx) {
            entrants.push(idx);
        }
    }

    entrants.sort_by(|&a, &b| cmp_fitness_desc(&pool[a], &pool[b]));
    (entrants[0], entrants[1])
}
