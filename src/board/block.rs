//! Random block generation.
//!
//! A block is the N×N sub-square of the board that must contain each of the
//! values `1..=N²` exactly once. Blocks are the one constraint the search
//! never violates: genomes are assembled from whole blocks and mutated only
//! by swaps inside a block, so block-completeness holds by construction.

use super::cell::Cell;
use rand::seq::SliceRandom;
use rand::Rng;

/// Generates one random block at the given cell offsets.
///
/// Returns the `base²` cell/value pairs covering the `base × base` square at
/// `(col_offset, row_offset)`; the values are a uniformly random permutation
/// of `1..=base²`.
///
/// # Panics
/// Panics if `base` is zero.
pub fn random_block<R: Rng>(
    base: usize,
    col_offset: usize,
    row_offset: usize,
    rng: &mut R,
) -> Vec<(Cell, u16)> {
    assert!(base >= 1, "block edge length must be at least 1");

    let mut values: Vec<u16> = (1..=(base * base) as u16).collect();
    values.shuffle(rng);

    let mut entries = Vec::with_capacity(base * base);
    let mut next = 0;
    for col in 0..base {
        for row in 0..base {
            entries.push((Cell::new(col + col_offset, row + row_offset), values[next]));
            next += 1;
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_covers_offset_square() {
        let mut rng = create_rng(42);
        let entries = random_block(2, 1, 2, &mut rng);

        let actual: HashSet<Cell> = entries.iter().map(|&(c, _)| c).collect();
        let expected: HashSet<Cell> = [
            Cell::new(1, 2),
            Cell::new(1, 3),
            Cell::new(2, 2),
            Cell::new(2, 3),
        ]
        .into_iter()
        .collect();

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_values_are_permutation() {
        let mut rng = create_rng(7);
        for _ in 0..50 {
            let entries = random_block(3, 0, 0, &mut rng);
            let mut values: Vec<u16> = entries.iter().map(|&(_, v)| v).collect();
            values.sort_unstable();
            assert_eq!(values, (1..=9).collect::<Vec<u16>>());
        }
    }

    #[test]
    fn test_single_cell_block() {
        let mut rng = create_rng(0);
        let entries = random_block(1, 0, 0, &mut rng);
        assert_eq!(entries, vec![(Cell::new(0, 0), 1)]);
    }

    proptest! {
        #[test]
        fn prop_block_is_permutation(base in 1usize..6, seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let entries = random_block(base, base * 2, base, &mut rng);

            prop_assert_eq!(entries.len(), base * base);

            let mut values: Vec<u16> = entries.iter().map(|&(_, v)| v).collect();
            values.sort_unstable();
            let expected: Vec<u16> = (1..=(base * base) as u16).collect();
            prop_assert_eq!(values, expected);

            for &(cell, _) in &entries {
                prop_assert!(cell.col >= base * 2 && cell.col < base * 3);
                prop_assert!(cell.row >= base && cell.row < base * 2);
            }
        }
    }
}
