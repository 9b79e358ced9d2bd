//! Candidate Sudoku boards.
//!
//! A [`Genome`] is one full board assignment: every cell holds a value in
//! `1..=N²`, and every N×N block is a permutation of `1..=N²` by
//! construction. Rows and columns are *not* guaranteed distinct; reducing
//! their duplicate count to zero is the search objective, and the cached
//! fitness measures exactly that.

use super::block::random_block;
use super::cell::Cell;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

/// One candidate board in the population.
///
/// Genomes are created either fresh ([`Genome::random`]) or as the crossover
/// child of two parents ([`Genome::child`]); afterwards the only mutation is
/// an in-place value swap via [`Genome::mutate`]. Fitness is recomputed
/// eagerly on every construction and mutation, so the cached value is never
/// stale. `Clone` deep-copies the cell storage.
#[derive(Debug, Clone)]
pub struct Genome {
    base: usize,
    size: usize,
    cells: Vec<u16>,
    fitness: f64,
    max_error: f64,
}

impl Genome {
    /// Builds a fresh random genome: `base²` independently shuffled blocks
    /// tiling the full board.
    ///
    /// # Panics
    /// Panics if `base` is outside `1..=255`.
    pub fn random<R: Rng>(base: usize, rng: &mut R) -> Self {
        let mut genome = Self::empty(base);
        for block_col in 0..base {
            for block_row in 0..base {
                for (cell, value) in
                    random_block(base, block_col * base, block_row * base, rng)
                {
                    genome.cells[cell.row * genome.size + cell.col] = value;
                }
            }
        }
        genome.recompute_fitness();
        genome
    }

    /// Builds a child genome from two parents.
    ///
    /// The child starts as a full copy of `a`, then every cell in the
    /// rectangular region of blocks from `(cross_col, cross_row)` through
    /// the far corner (all cells with `col >= cross_col * base` *and*
    /// `row >= cross_row * base`) is overwritten with `b`'s value. Whole
    /// blocks come from one parent or the other, never merged cell by cell,
    /// so block-completeness survives crossover.
    ///
    /// # Panics
    /// Panics if the parents have different sizes or the crossover point is
    /// outside `[0, base)`.
    pub fn child(a: &Genome, b: &Genome, cross_col: usize, cross_row: usize) -> Self {
        assert_eq!(a.base, b.base, "crossover parents must have the same size");
        assert!(
            cross_col < a.base && cross_row < a.base,
            "crossover block ({cross_col}, {cross_row}) outside [0, {})",
            a.base
        );

        let mut genome = a.clone();
        for row in cross_row * a.base..a.size {
            for col in cross_col * a.base..a.size {
                genome.cells[row * a.size + col] = b.cells[row * a.size + col];
            }
        }
        genome.recompute_fitness();
        genome
    }

    fn empty(base: usize) -> Self {
        assert!(
            base >= 1 && base <= 255,
            "block edge length must be in 1..=255, got {base}"
        );
        let size = base * base;
        // Normalization bound for the summed row and column duplicate
        // count; 0 for the degenerate 1×1 board.
        let max_error = (2 * (size / 2) * size) as f64;
        Self {
            base,
            size,
            cells: vec![0; size * size],
            fitness: 0.0,
            max_error,
        }
    }

    #[cfg(test)]
    fn from_cells(base: usize, cells: Vec<u16>) -> Self {
        let mut genome = Self::empty(base);
        assert_eq!(cells.len(), genome.size * genome.size);
        genome.cells = cells;
        genome.recompute_fitness();
        genome
    }

    /// The block edge length N.
    pub fn base(&self) -> usize {
        self.base
    }

    /// The board edge length N².
    pub fn size(&self) -> usize {
        self.size
    }

    /// The value at a cell.
    ///
    /// # Panics
    /// Panics if the coordinate lies outside the board.
    pub fn value(&self, cell: Cell) -> u16 {
        assert!(
            cell.col < self.size && cell.row < self.size,
            "cell ({}, {}) outside {size}x{size} board",
            cell.col,
            cell.row,
            size = self.size,
        );
        self.cells[cell.row * self.size + cell.col]
    }

    /// The cached fitness in `[0, 1]`; exactly `1.0` means the board is a
    /// valid Sudoku.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Swaps the values of two distinct cells inside one uniformly chosen
    /// block, then recomputes fitness.
    ///
    /// The coordinate pair is resampled until the two cells differ, so every
    /// mutation is a genuine perturbation. The block stays a permutation of
    /// `1..=N²`; only row and column duplication changes. A 1×1 board has no
    /// distinct pair to swap and is left untouched.
    pub fn mutate<R: Rng>(&mut self, rng: &mut R) {
        if self.size == 1 {
            return;
        }

        let block_col = rng.random_range(0..self.base) * self.base;
        let block_row = rng.random_range(0..self.base) * self.base;

        let (first, second) = loop {
            let col1 = block_col + rng.random_range(0..self.base);
            let row1 = block_row + rng.random_range(0..self.base);
            let col2 = block_col + rng.random_range(0..self.base);
            let row2 = block_row + rng.random_range(0..self.base);
            if (col1, row1) != (col2, row2) {
                break (row1 * self.size + col1, row2 * self.size + col2);
            }
        };

        self.cells.swap(first, second);
        self.recompute_fitness();
    }

    /// Recomputes the cached fitness from the cell values.
    ///
    /// The error is the summed duplicate count over all rows and columns:
    /// `N² − |distinct values|` per line. Fitness normalizes that against
    /// `max_error`; an error above the bound means construction broke the
    /// block invariant and aborts the run.
    fn recompute_fitness(&mut self) {
        let size = self.size;
        let mut seen = vec![false; size + 1];
        let mut error = 0usize;

        for row in 0..size {
            seen.fill(false);
            let mut distinct = 0;
            for col in 0..size {
                let value = usize::from(self.cells[row * size + col]);
                if !seen[value] {
                    seen[value] = true;
                    distinct += 1;
                }
            }
            error += size - distinct;
        }

        for col in 0..size {
            seen.fill(false);
            let mut distinct = 0;
            for row in 0..size {
                let value = usize::from(self.cells[row * size + col]);
                if !seen[value] {
                    seen[value] = true;
                    distinct += 1;
                }
            }
            error += size - distinct;
        }

        assert!(
            error as f64 <= self.max_error,
            "line error {error} exceeds bound {}",
            self.max_error
        );

        // A 1×1 board has max_error 0 and is trivially valid.
        self.fitness = if self.max_error == 0.0 {
            1.0
        } else {
            (self.max_error - error as f64) / self.max_error
        };
    }
}

/// Orders genomes by fitness, highest first.
///
/// Sorting with this comparator puts the fittest genome at position 0.
pub fn cmp_fitness_desc(a: &Genome, b: &Genome) -> Ordering {
    b.fitness
        .partial_cmp(&a.fitness)
        .unwrap_or(Ordering::Equal)
}

impl fmt::Display for Genome {
    /// Renders the board row-major with `|` between block columns and
    /// `-`/`+` rule lines between block rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.size.to_string().len();
        for row in 0..self.size {
            if row % self.base == 0 && row != 0 {
                for col in 0..self.size {
                    if col % self.base == 0 && col != 0 {
                        f.write_str("+")?;
                    }
                    f.write_str(&"-".repeat(width))?;
                }
                writeln!(f)?;
            }
            for col in 0..self.size {
                if col % self.base == 0 && col != 0 {
                    f.write_str("|")?;
                }
                write!(f, "{:>width$}", self.cells[row * self.size + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
