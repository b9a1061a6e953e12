//! This module contains the logic for solving 6x6 Sudoku grids.
//!
//! Most importantly, this module contains the definition of the
//! [BacktrackingSolver], which can count the solutions of a grid with an
//! early exit as well as produce the unique solution if there is one.

use crate::{SIZE, SudokuGrid};
use crate::rules;

/// The counting cap of [BacktrackingSolver::count_solutions]. The search
/// stops as soon as this many solutions were found, which keeps uniqueness
/// checks during generation tractable. Callers must only ever test whether
/// the count equals 1.
pub const SOLUTION_LIMIT: usize = 2;

/// An enumeration of the different ways a grid can be solveable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the grid is not solveable at all.
    Impossible,

    /// Indicates that the grid has a unique solution, which is wrapped in
    /// this instance.
    Unique(SudokuGrid),

    /// Indicates that the grid has multiple solutions.
    Ambiguous
}

/// A perfect solver which works by recursively testing all valid numbers for
/// each empty cell. This means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be slow if the grid
/// has many missing digits. For 36 cells this is fast in practice.
/// * It can provide the correct [Solution] for any grid.
///
/// The search visits empty cells in fixed row-major order and tries the
/// candidates for each cell in ascending order, so its backtracking path is
/// fully deterministic for a given grid.
pub struct BacktrackingSolver;

fn count_rec(grid: &mut SudokuGrid, column: usize, row: usize, limit: usize,
        witness: &mut Option<SudokuGrid>) -> usize {
    if row == SIZE {
        if witness.is_none() {
            *witness = Some(grid.clone());
        }

        return 1;
    }

    let next_column = (column + 1) % SIZE;
    let next_row = if next_column == 0 { row + 1 } else { row };

    if grid.get_cell(column, row).unwrap().is_some() {
        return count_rec(grid, next_column, next_row, limit, witness);
    }

    let mut count = 0;

    for number in 1..=SIZE {
        if rules::check_number(grid, column, row, number) {
            grid.set_cell(column, row, number).unwrap();
            count += count_rec(grid, next_column, next_row, limit - count,
                witness);
            grid.clear_cell(column, row).unwrap();

            if count >= limit {
                break;
            }
        }
    }

    count
}

impl BacktrackingSolver {

    /// Counts the solutions of the given grid, that is, the number of full
    /// grids which contain all its digits and satisfy the row, column, and
    /// block rules. The search returns early once [SOLUTION_LIMIT] solutions
    /// were found, so the result is never greater than that cap and carries
    /// no information beyond it.
    pub fn count_solutions(&self, grid: &SudokuGrid) -> usize {
        let mut scratch = grid.clone();
        count_rec(&mut scratch, 0, 0, SOLUTION_LIMIT, &mut None)
    }

    /// Solves, or attempts to solve, the provided grid. Returns
    /// [Solution::Unique] wrapping the solved grid if there is exactly one
    /// solution, [Solution::Impossible] if there is none, and
    /// [Solution::Ambiguous] if there is more than one.
    pub fn solve(&self, grid: &SudokuGrid) -> Solution {
        let mut scratch = grid.clone();
        let mut witness = None;
        let count =
            count_rec(&mut scratch, 0, 0, SOLUTION_LIMIT, &mut witness);

        match (count, witness) {
            (0, _) => Solution::Impossible,
            (1, Some(solved)) => Solution::Unique(solved),
            _ => Solution::Ambiguous
        }
    }
}
