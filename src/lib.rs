// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

//! This crate implements an easy-to-understand engine for a 6x6 Sudoku
//! variant whose blocks are 2 rows by 3 columns. It supports the following
//! key features:
//!
//! * Parsing and printing 6x6 Sudoku grids
//! * Checking validity of moves and entire grids according to the row,
//! column, and block rules
//! * Solving grids using a perfect backtracking algorithm and counting
//! solutions with an early exit
//! * Generating puzzles that are guaranteed to have exactly one solution,
//! together with a lock mask protecting the given clues
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and
//! display a grid is provided below.
//!
//! ```
//! use sudoku_six::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!     1,2,3,4,5,6,\
//!     4,5,6,1,2,3,\
//!     2,3,1,5,6,4,\
//!     5,6,4,2,3,1,\
//!     3,1,2,6,4,5,\
//!     6,4,5,3,1,2").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity
//!
//! The [rules] module contains the single validity rule of this variant: no
//! duplicate digits in any row, column, or 2x3 block. It can be queried for
//! entire grids, single cells, or potential changes to single cells that do
//! not require changing the grid's state.
//!
//! ```
//! use sudoku_six::SudokuGrid;
//! use sudoku_six::rules;
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(0, 0, 3).unwrap();
//!
//! // Another 3 in the same row is not allowed.
//! assert!(!rules::check_number(&grid, 5, 0, 3));
//! ```
//!
//! # Solving grids
//!
//! The [solver::BacktrackingSolver] recursively tests all valid numbers for
//! each empty cell. It can prove that a grid is impossible, uniquely
//! solveable, or ambiguous, and it can count solutions, stopping as soon as
//! a second one is found.
//!
//! # Generating puzzles
//!
//! Probably the most interesting feature of this crate is the generation of
//! random puzzles. This is done in two steps: generating a full grid using a
//! [Generator](generator::Generator) and then removing clues using a
//! [Reducer](generator::Reducer), which proves after every removal that the
//! puzzle still has exactly one solution. [Puzzle](puzzle::Puzzle) bundles
//! both steps with a lock mask and the operations a user interface needs.
//!
//! ```
//! use sudoku_six::puzzle::Puzzle;
//! use sudoku_six::solver::BacktrackingSolver;
//!
//! let puzzle = Puzzle::new_default();
//!
//! assert!(!puzzle.board().is_full());
//! assert_eq!(1, BacktrackingSolver.count_solutions(puzzle.board()));
//! ```
//!
//! # Note regarding performance
//!
//! Counting solutions during generation is exponential in the worst case,
//! but the 36-cell grid keeps it fast in practice. It is still recommended
//! to use at least `opt-level = 2` in tests that generate many puzzles.

pub mod error;
pub mod generator;
pub mod puzzle;
pub mod rules;
pub mod solver;

use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// The number of columns in one block, which is also the number of blocks
/// stacked vertically in the grid.
pub const BLOCK_WIDTH: usize = 3;

/// The number of rows in one block, which is also the number of blocks
/// lying side by side in the grid.
pub const BLOCK_HEIGHT: usize = 2;

/// The number of rows and columns of the grid as well as the greatest number
/// that can occupy a cell.
pub const SIZE: usize = BLOCK_WIDTH * BLOCK_HEIGHT;

/// The total number of cells in the grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// A Sudoku grid of 6x6 cells that is composed of six non-overlapping blocks
/// of 2 rows and 3 columns each:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// Each cell may or may not be occupied by a number in the range `[1, 6]`.
/// The grid itself poses no rules on the numbers; see the [rules] module for
/// validity checking.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_WIDTH == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.cells[index(x, y)]), ' ', '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK_HEIGHT == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

impl SudokuGrid {

    /// Creates a new, empty 6x6 Sudoku grid.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; CELL_COUNT]
        }
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of 36 entries, which are either empty or a number in the range
    /// `[1, 6]`. The entries are assigned left-to-right, top-to-bottom,
    /// where each row is completed before the next one is started.
    /// Whitespace in the entries is ignored to allow for more intuitive
    /// formatting.
    ///
    /// As an example, a code whose first entries are `1, ,2` places the
    /// digits 1 and 2 in the first row with an empty cell between them.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let numbers: Vec<&str> = code.split(',').collect();

        if numbers.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut grid = SudokuGrid::new();

        for (i, number_str) in numbers.iter().enumerate() {
            let number_str = number_str.trim();

            if number_str.is_empty() {
                continue;
            }

            let number = number_str.parse::<usize>()?;

            if number == 0 || number > SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse](#method.parse). That is, a grid that is converted
    /// to a string and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_six::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 6[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 6[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 6[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 6[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, 6]`, `false` will always be
    /// returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 6[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 6[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, 6]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 6[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 6[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Assigns the content of another grid to this one, i.e., changes the
    /// cells in this grid to the state in `other`.
    pub fn assign(&mut self, other: &SudokuGrid) {
        self.cells.copy_from_slice(&other.cells);
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns
    /// [CELL_COUNT].
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be
    /// filled in `other` with the same number. If this condition is met,
    /// `true` is returned, and `false` otherwise.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        match other_cell {
                            Some(other_number) => self_number == other_number,
                            None => false
                        },
                    None => true
                }
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &SudokuGrid) -> bool {
        other.is_subset(self)
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }

    /// Gets a mutable reference to the vector which holds the cells. They
    /// are in left-to-right, top-to-bottom order, where rows are together.
    pub fn cells_mut(&mut self) -> &mut Vec<Option<usize>> {
        &mut self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}



#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_ok() {
        let grid_res = SudokuGrid::parse("\
            1, , ,2, , ,\
             ,3, , ,4, ,\
             ,2, , , , ,\
            3, , , , ,5,\
             , ,6, , , ,\
             , , ,1, , ");

        if let Ok(grid) = grid_res {
            assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
            assert_eq!(None, grid.get_cell(1, 0).unwrap());
            assert_eq!(Some(2), grid.get_cell(3, 0).unwrap());
            assert_eq!(Some(3), grid.get_cell(1, 1).unwrap());
            assert_eq!(Some(4), grid.get_cell(4, 1).unwrap());
            assert_eq!(Some(2), grid.get_cell(1, 2).unwrap());
            assert_eq!(Some(3), grid.get_cell(0, 3).unwrap());
            assert_eq!(Some(5), grid.get_cell(5, 3).unwrap());
            assert_eq!(Some(6), grid.get_cell(2, 4).unwrap());
            assert_eq!(Some(1), grid.get_cell(3, 5).unwrap());
            assert_eq!(None, grid.get_cell(5, 5).unwrap());
        }
        else {
            panic!("Parsing valid grid failed.");
        }
    }

    /// A code of `clues` followed by enough empty entries for a full grid.
    fn pad_code(clues: &str) -> String {
        let present = clues.split(',').count();
        let mut code = String::from(clues);
        code.push_str(&",".repeat(CELL_COUNT - present));
        code
    }

    #[test]
    fn parse_number_format_error() {
        assert_eq!(Err(SudokuParseError::NumberFormatError),
            SudokuGrid::parse(&pad_code("#")));
    }

    #[test]
    fn parse_invalid_number() {
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::parse(&pad_code("7")));
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::parse(&pad_code("0")));
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse(&",".repeat(CELL_COUNT - 2)));
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse(&",".repeat(CELL_COUNT)));
    }

    #[test]
    fn to_parseable_string() {
        let mut grid = SudokuGrid::new();

        assert_eq!(",".repeat(CELL_COUNT - 1),
            grid.to_parseable_string());

        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(1, 1, 2).unwrap();
        grid.set_cell(2, 2, 3).unwrap();
        grid.set_cell(5, 5, 4).unwrap();

        let code = grid.to_parseable_string();

        assert!(code.starts_with("1,,,,,,,2,"));
        assert!(code.ends_with(",4"));
        assert_eq!(grid, SudokuGrid::parse(&code).unwrap());
    }

    #[test]
    fn out_of_bounds_rejected() {
        let mut grid = SudokuGrid::new();

        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(6, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(0, 6, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.clear_cell(6, 6));
    }

    #[test]
    fn invalid_number_rejected() {
        let mut grid = SudokuGrid::new();

        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 7));
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = SudokuGrid::new();
        let partial = SudokuGrid::parse(
            "1,,3,2,4,,,,,,,,,,1,,,,,,,,,,,,,,,,,,,,,").unwrap();
        let full = SudokuGrid::parse("\
            1,2,3,4,5,6,\
            4,5,6,1,2,3,\
            2,3,1,5,6,4,\
            5,6,4,2,3,1,\
            3,1,2,6,4,5,\
            6,4,5,3,1,2").unwrap();

        assert_eq!(0, empty.count_clues());
        assert_eq!(5, partial.count_clues());
        assert_eq!(CELL_COUNT, full.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    fn assert_subset_relation(a: &SudokuGrid, b: &SudokuGrid, a_subset_b: bool,
            b_subset_a: bool) {
        assert!(a.is_subset(b) == a_subset_b);
        assert!(a.is_superset(b) == b_subset_a);
        assert!(b.is_subset(a) == b_subset_a);
        assert!(b.is_superset(a) == a_subset_b);
    }

    #[test]
    fn empty_is_subset() {
        let empty = SudokuGrid::new();
        let non_empty = SudokuGrid::parse(
            "1,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,").unwrap();

        assert_subset_relation(&empty, &empty, true, true);
        assert_subset_relation(&empty, &non_empty, true, false);
    }

    #[test]
    fn true_subset() {
        let g1 = SudokuGrid::parse(
            "1,,3,,2,,,,4,,4,3,,,,2,,,,,,,,,,,,,,,,,,,,").unwrap();
        let g2 = SudokuGrid::parse(
            "1,2,3,,2,,3,,4,,4,3,,,1,2,,,,,,,,,,,,,,,,,,,,").unwrap();

        assert_subset_relation(&g1, &g2, true, false);
    }

    #[test]
    fn unrelated_grids_not_subsets() {
        // g1 and g2 differ in the third digit (3 in g1, 4 in g2)
        let g1 = SudokuGrid::parse(
            "1,,3,,2,,,,4,,4,3,,,,2,,,,,,,,,,,,,,,,,,,,").unwrap();
        let g2 = SudokuGrid::parse(
            "1,2,4,,2,,3,,4,,4,3,,,1,2,,,,,,,,,,,,,,,,,,,,").unwrap();

        assert_subset_relation(&g1, &g2, false, false);
    }

    #[test]
    fn assign_copies_cells() {
        let full = SudokuGrid::parse("\
            1,2,3,4,5,6,\
            4,5,6,1,2,3,\
            2,3,1,5,6,4,\
            5,6,4,2,3,1,\
            3,1,2,6,4,5,\
            6,4,5,3,1,2").unwrap();
        let mut grid = SudokuGrid::new();
        grid.assign(&full);

        assert_eq!(full, grid);
    }

    #[test]
    fn serde_round_trip() {
        let grid = SudokuGrid::parse(
            "1,,3,,2,,,,4,,4,3,,,,2,,,,,,,,,,,,,,,,,,,,").unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let parsed: SudokuGrid = serde_json::from_str(&json).unwrap();

        assert_eq!(grid, parsed);
    }

    #[test]
    fn display_marks_blocks() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 1).unwrap();
        let printed = format!("{}", grid);

        // 6 content rows, 5 separators and 2 borders
        assert_eq!(13, printed.lines().count());
        assert!(printed.contains('1'));
        assert!(printed.contains('╬'));
    }
}
