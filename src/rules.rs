//! This module contains the validity rule of the 6x6 variant: no duplicate
//! digits in any row, any column, or any 2x3 block.
//!
//! There is exactly one rule, shared by the generator, the solver, and move
//! validation in the [puzzle](crate::puzzle) module. All functions here are
//! pure; they never mutate the grid they are handed.

use crate::{BLOCK_HEIGHT, BLOCK_WIDTH, SIZE, SudokuGrid};

/// Checks whether `number` could be placed in the cell at the specified
/// position without violating the row, column, or block rule against the
/// *other* cells of the grid. The current content of the target cell is
/// ignored, since it would be overwritten by the placement.
///
/// Out-of-range coordinates or numbers are not valid placements, so `false`
/// is returned for them.
///
/// # Arguments
///
/// * `grid`: The grid in which the placement is checked.
/// * `column`: The column (x-coordinate) of the checked cell.
/// * `row`: The row (y-coordinate) of the checked cell.
/// * `number`: The number whose placement is checked.
pub fn check_number(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    if column >= SIZE || row >= SIZE || number == 0 || number > SIZE {
        return false;
    }

    for other_column in 0..SIZE {
        if other_column != column &&
                grid.has_number(other_column, row, number).unwrap() {
            return false;
        }
    }

    for other_row in 0..SIZE {
        if other_row != row &&
                grid.has_number(column, other_row, number).unwrap() {
            return false;
        }
    }

    let block_column = (column / BLOCK_WIDTH) * BLOCK_WIDTH;
    let block_row = (row / BLOCK_HEIGHT) * BLOCK_HEIGHT;

    for other_row in block_row..(block_row + BLOCK_HEIGHT) {
        for other_column in block_column..(block_column + BLOCK_WIDTH) {
            if (other_row != row || other_column != column) &&
                    grid.has_number(other_column, other_row, number).unwrap() {
                return false;
            }
        }
    }

    true
}

/// Checks whether the cell at the given position violates the rule. Empty
/// cells are always considered valid.
///
/// # Arguments
///
/// * `grid`: The grid in which the cell is checked.
/// * `column`: The column (x-coordinate) of the checked cell. Must be in the
/// range `[0, 6[`.
/// * `row`: The row (y-coordinate) of the checked cell. Must be in the range
/// `[0, 6[`.
pub fn check_cell(grid: &SudokuGrid, column: usize, row: usize) -> bool {
    if let Ok(Some(number)) = grid.get_cell(column, row) {
        check_number(grid, column, row, number)
    }
    else {
        true
    }
}

fn check_unit(grid: &SudokuGrid,
        cells: impl Iterator<Item = (usize, usize)>) -> bool {
    // Digits 1 to 6 fit in a u8 bit set.
    let mut seen = 0u8;

    for (column, row) in cells {
        if let Ok(Some(number)) = grid.get_cell(column, row) {
            let bit = 1u8 << number;

            if seen & bit != 0 {
                return false;
            }

            seen |= bit;
        }
    }

    true
}

fn block_origins() -> impl Iterator<Item = (usize, usize)> {
    (0..BLOCK_WIDTH).flat_map(|block_y| (0..BLOCK_HEIGHT)
        .map(move |block_x|
            (block_x * BLOCK_WIDTH, block_y * BLOCK_HEIGHT)))
}

/// Checks whether the entire grid satisfies the rule, that is, no row,
/// column, or block contains a duplicate digit. Empty cells do not conflict
/// with anything, so partial grids can be valid.
pub fn check(grid: &SudokuGrid) -> bool {
    for row in 0..SIZE {
        if !check_unit(grid, (0..SIZE).map(|column| (column, row))) {
            return false;
        }
    }

    for column in 0..SIZE {
        if !check_unit(grid, (0..SIZE).map(|row| (column, row))) {
            return false;
        }
    }

    for (block_column, block_row) in block_origins() {
        let cells = (block_row..(block_row + BLOCK_HEIGHT))
            .flat_map(|row| (block_column..(block_column + BLOCK_WIDTH))
                .map(move |column| (column, row)));

        if !check_unit(grid, cells) {
            return false;
        }
    }

    true
}
