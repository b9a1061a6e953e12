//! This module contains logic for generating random 6x6 Sudoku puzzles.
//!
//! Generation of puzzles is done by first generating a full grid with a
//! [Generator] and then removing some clues using a [Reducer], which proves
//! after every removal that the grid still has exactly one solution.

use crate::{CELL_COUNT, SIZE, SudokuGrid};
use crate::error::{SudokuError, SudokuResult};
use crate::rules;
use crate::solver::BacktrackingSolver;

use rand::Rng;
use rand::rngs::ThreadRng;

/// The number of cells the [Reducer] attempts to remove from a full grid.
/// With 36 total cells this leaves 12 clues when the target is reached.
pub const TARGET_REMOVALS: usize = 24;

/// The maximum number of removal attempts before the [Reducer] gives up,
/// which bounds its runtime when few removals preserve uniqueness.
const MAX_ATTEMPTS: usize = CELL_COUNT * 2;

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    if len < 2 {
        return vec;
    }

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

/// A generator randomly generates a full [SudokuGrid], that is, a grid with
/// no missing digits. It uses a random number generator to decide the
/// content. For most cases, sensible defaults are provided by
/// [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, grid: &mut SudokuGrid, column: usize, row: usize)
            -> bool {
        if row == SIZE {
            return true;
        }

        let next_column = (column + 1) % SIZE;
        let next_row = if next_column == 0 { row + 1 } else { row };

        if grid.get_cell(column, row).unwrap().is_some() {
            return self.fill_rec(grid, next_column, next_row);
        }

        for number in shuffle(&mut self.rng, 1..=SIZE) {
            if rules::check_number(grid, column, row, number) {
                grid.set_cell(column, row, number).unwrap();

                if self.fill_rec(grid, next_column, next_row) {
                    return true;
                }

                grid.clear_cell(column, row).unwrap();
            }
        }

        false
    }

    /// Fills the given [SudokuGrid] with random digits that satisfy the
    /// rules and match all already present digits. If it is not possible, an
    /// error will be returned.
    ///
    /// If no error is returned, it is guaranteed that the grid is full and
    /// [rules::check] returns `true` for it after this operation. Otherwise,
    /// it remains unchanged.
    ///
    /// # Arguments
    ///
    /// * `grid`: The grid to fill with random digits.
    ///
    /// # Errors
    ///
    /// * `SudokuError::UnsatisfiableGrid` If there is no set of digits that
    /// can be entered into the grid that satisfies the rules without
    /// changing digits already present.
    pub fn fill(&mut self, grid: &mut SudokuGrid) -> SudokuResult<()> {
        if self.fill_rec(grid, 0, 0) {
            Ok(())
        }
        else {
            Err(SudokuError::UnsatisfiableGrid)
        }
    }

    /// Generates a new random full [SudokuGrid]. Starting from an empty 6x6
    /// grid the backtracking fill always terminates successfully, so unlike
    /// [Generator::fill] this cannot fail.
    pub fn generate(&mut self) -> SudokuGrid {
        let mut grid = SudokuGrid::new();
        let filled = self.fill_rec(&mut grid, 0, 0);

        // An empty grid always admits a completion.
        debug_assert!(filled);
        grid
    }
}

/// A reducer can be applied to the output of a [Generator] to remove digits
/// from the grid as long as it keeps exactly one solution, which is verified
/// with [BacktrackingSolver::count_solutions] after every tentative removal.
/// A random number generator decides which digits are removed.
///
/// The algorithm is greedy and order-dependent: different shuffles yield
/// different clue placements, and when the attempt budget binds before the
/// removal target is reached, also different final clue counts. That
/// non-determinism is intentional.
pub struct Reducer<R: Rng> {
    rng: R
}

impl Reducer<ThreadRng> {

    /// Generates a new reducer with a [ThreadRng] to decide which digits are
    /// removed.
    pub fn new_default() -> Reducer<ThreadRng> {
        Reducer::new(rand::thread_rng())
    }
}

impl<R: Rng> Reducer<R> {

    /// Creates a new reducer with the given random number generator.
    ///
    /// # Arguments
    ///
    /// * `rng`: A random number generator that decides which digits are
    /// removed.
    pub fn new(rng: R) -> Reducer<R> {
        Reducer {
            rng
        }
    }

    /// Reduces the given grid by removing digits while the grid still has
    /// exactly one solution. Removals that would lose uniqueness are rolled
    /// back. The process stops once [TARGET_REMOVALS] digits were removed,
    /// the attempt budget of twice the cell count is exhausted, or every
    /// coordinate was tried.
    ///
    /// It is expected that the given `grid` is full; empty cells encountered
    /// in the coordinate pool are skipped, though they still consume an
    /// attempt.
    ///
    /// Returns the number of digits that were removed.
    pub fn reduce(&mut self, grid: &mut SudokuGrid) -> usize {
        let solver = BacktrackingSolver;
        let coordinates = (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |column| (column, row)));
        let mut pool = shuffle(&mut self.rng, coordinates);
        let mut removed = 0;
        let mut attempts = 0;

        while removed < TARGET_REMOVALS && attempts < MAX_ATTEMPTS {
            let (column, row) = match pool.pop() {
                Some(coordinate) => coordinate,
                None => break
            };
            attempts += 1;

            let number = match grid.get_cell(column, row).unwrap() {
                Some(number) => number,
                None => continue
            };

            grid.clear_cell(column, row).unwrap();

            if solver.count_solutions(grid) == 1 {
                removed += 1;
            }
            else {
                grid.set_cell(column, row, number).unwrap();
            }
        }

        removed
    }
}
