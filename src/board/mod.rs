//! Board representation: cells, blocks, and candidate genomes.
//!
//! The board is an N²×N² grid tiled by N² blocks of N×N cells. A [`Genome`]
//! is one complete assignment of values to cells in which every block is a
//! permutation of `1..=N²`; that invariant is established by
//! [`random_block`] and preserved by crossover and mutation, so the search
//! only ever has to fix rows and columns.

mod block;
mod cell;
mod genome;

pub use block::random_block;
pub use cell::Cell;
pub use genome::{cmp_fitness_desc, Genome};
