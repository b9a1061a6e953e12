//! This module contains the playable puzzle session built on top of the
//! [generator](crate::generator) and [solver](crate::solver) modules.
//!
//! A [Puzzle] bundles the playable board, the retained solution grid, and a
//! lock mask protecting the given clues. It exposes the operations a
//! presentation layer needs: move validation, cell mutation, hints, and win
//! detection. All operations are total; out-of-range coordinates yield a
//! safe default (`false`, `None`, or a no-op) instead of an error, since the
//! grid size is a compile-time constant and callers are expected to respect
//! it.
//!
//! The puzzle performs no internal locking. A host that mutates the board on
//! one thread and polls [Puzzle::is_complete] on another must synchronize
//! externally.

use crate::{CELL_COUNT, SIZE, SudokuGrid, index};
use crate::generator::{Generator, Reducer};
use crate::rules;

use rand::Rng;

use serde::{Deserialize, Serialize};

/// A playable 6x6 Sudoku puzzle with a verifiably unique solution.
///
/// The puzzle tracks two grids: the *solution* grid, which is the complete
/// assignment generated first and kept as the answer key for hints, and the
/// *board*, which is derived from the solution by removing clues and is
/// mutated by player moves. A lock mask marks the cells holding given clues,
/// which a player may not overwrite.
///
/// Note that [Puzzle::place_value] does not itself consult the lock mask;
/// enforcing the locks is a policy of the caller, which should check
/// [Puzzle::is_cell_locked] before writing.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Puzzle {
    solution: Option<SudokuGrid>,
    board: SudokuGrid,
    locked: Vec<bool>
}

impl Puzzle {

    /// Generates a new puzzle using the given random number generator. The
    /// result has a full, rule-satisfying solution grid, a board whose clues
    /// admit exactly one completion, and a lock mask covering exactly the
    /// clue cells.
    pub fn generate<R: Rng>(rng: &mut R) -> Puzzle {
        let mut puzzle = Puzzle {
            solution: None,
            board: SudokuGrid::new(),
            locked: vec![false; CELL_COUNT]
        };
        puzzle.regenerate(rng);
        puzzle
    }

    /// Generates a new puzzle using a
    /// [ThreadRng](rand::rngs::ThreadRng).
    pub fn new_default() -> Puzzle {
        Puzzle::generate(&mut rand::thread_rng())
    }

    /// Wraps an existing board in a puzzle, locking every filled cell. No
    /// solution grid is retained in this mode, so [Puzzle::hint] falls back
    /// to a weaker candidate scan and uniqueness of the board's completion
    /// is whatever the caller handed in.
    pub fn from_clues(board: SudokuGrid) -> Puzzle {
        let locked = board.cells().iter().map(Option::is_some).collect();

        Puzzle {
            solution: None,
            board,
            locked
        }
    }

    /// Discards the current state and generates a fresh puzzle in place:
    /// fill a new solution grid by randomized backtracking, copy it to the
    /// board, remove clues while re-proving uniqueness after every removal,
    /// and lock the remaining clue cells.
    pub fn regenerate<R: Rng>(&mut self, rng: &mut R) {
        let mut generator = Generator::new(&mut *rng);
        let solution = generator.generate();
        let mut board = solution.clone();
        let mut reducer = Reducer::new(&mut *rng);
        reducer.reduce(&mut board);

        self.locked = board.cells().iter().map(Option::is_some).collect();
        self.board = board;
        self.solution = Some(solution);
    }

    /// Gets a reference to the playable board.
    pub fn board(&self) -> &SudokuGrid {
        &self.board
    }

    /// Gets a reference to the retained solution grid, if there is one.
    /// Puzzles created by [Puzzle::from_clues] have none.
    pub fn solution(&self) -> Option<&SudokuGrid> {
        self.solution.as_ref()
    }

    /// Gets a row-major snapshot of the board for presentation layers,
    /// where 0 encodes an empty cell and all other values are the digits 1
    /// to 6.
    pub fn values(&self) -> Vec<usize> {
        self.board.cells().iter()
            .map(|cell| cell.unwrap_or(0))
            .collect()
    }

    /// Indicates whether placing `number` at the given position would
    /// violate the row, column, or block rule against the other cells of
    /// the board. Returns `false` for out-of-range coordinates or numbers.
    /// This is the same validity rule the generator uses; there is exactly
    /// one.
    pub fn is_valid_move(&self, column: usize, row: usize, number: usize)
            -> bool {
        rules::check_number(&self.board, column, row, number)
    }

    /// Writes `number` into the board at the given position. Out-of-range
    /// coordinates or numbers make this a no-op. The lock mask is *not*
    /// consulted; callers preserve given clues by checking
    /// [Puzzle::is_cell_locked] first.
    pub fn place_value(&mut self, column: usize, row: usize, number: usize) {
        // Errors encode out-of-range input here, which is defined as no-op.
        let _ = self.board.set_cell(column, row, number);
    }

    /// Clears the board cell at the given position. Out-of-range
    /// coordinates make this a no-op.
    pub fn clear_value(&mut self, column: usize, row: usize) {
        let _ = self.board.clear_cell(column, row);
    }

    /// Marks the cell at the given position as locked, preventing player
    /// modification. Out-of-range coordinates make this a no-op.
    pub fn lock_cell(&mut self, column: usize, row: usize) {
        if column < SIZE && row < SIZE {
            self.locked[index(column, row)] = true;
        }
    }

    /// Marks the cell at the given position as unlocked, allowing player
    /// modification. Out-of-range coordinates make this a no-op.
    pub fn unlock_cell(&mut self, column: usize, row: usize) {
        if column < SIZE && row < SIZE {
            self.locked[index(column, row)] = false;
        }
    }

    /// Indicates whether the cell at the given position is locked. Returns
    /// `false` for out-of-range coordinates.
    pub fn is_cell_locked(&self, column: usize, row: usize) -> bool {
        column < SIZE && row < SIZE && self.locked[index(column, row)]
    }

    /// Empties the board and unlocks every cell, returning the puzzle to a
    /// blank playing surface. The retained solution grid, if any, is left in
    /// place; use [Puzzle::regenerate] to start over with a fresh puzzle.
    pub fn clear_board(&mut self) {
        self.board = SudokuGrid::new();

        for lock in self.locked.iter_mut() {
            *lock = false;
        }
    }

    /// Unlocks every cell that is currently empty. The lock state of filled
    /// cells is left untouched. Intended for callers that lock cells while
    /// populating a view and need the empty ones editable afterwards.
    pub fn unlock_empty_cells(&mut self) {
        for row in 0..SIZE {
            for column in 0..SIZE {
                if self.board.get_cell(column, row).unwrap().is_none() {
                    self.locked[index(column, row)] = false;
                }
            }
        }
    }

    /// Gets the suggested digit for the empty cell at the given position,
    /// or `None` if the cell is already filled or out of range.
    ///
    /// If a solution grid is retained, the suggestion is its value at the
    /// position and therefore consistent with the puzzle's unique solution.
    /// Without one (see [Puzzle::from_clues]) the smallest digit that is
    /// currently a valid placement is suggested, which is a weaker guarantee
    /// since it may differ from the value an actual completion requires.
    pub fn hint(&self, column: usize, row: usize) -> Option<usize> {
        match self.board.get_cell(column, row) {
            Ok(None) => {},
            _ => return None
        }

        if let Some(solution) = &self.solution {
            return solution.get_cell(column, row).unwrap();
        }

        (1..=SIZE)
            .find(|&number|
                rules::check_number(&self.board, column, row, number))
    }

    /// Indicates whether the board is complete: every cell is filled and
    /// the whole grid satisfies the row, column, and block rules. This is
    /// recomputed from scratch rather than compared against the stored
    /// solution, so a player reaching a different valid completion would be
    /// recognized. By the uniqueness check during generation that cannot
    /// happen for generated puzzles, making this equivalent to an exact
    /// match with the solution grid there.
    pub fn is_complete(&self) -> bool {
        self.board.is_full() && rules::check(&self.board)
    }
}
