//! The 9×9 board: cell storage, legality checks, and candidate queries.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// A 9×9 grid of optional digits.
///
/// This is the puzzle state model. Cells are stored row-major; an empty cell
/// is `None`. The grid itself never auto-corrects: legality checks answer
/// "can this digit go here", and callers decide whether to act on a "no".
///
/// The board-consistency invariant (no two conflicting digits) is enforced
/// only through the mutation contract: [`try_place`] upholds it, while the
/// raw [`place`] requires the caller to check [`is_legal_placement`] first.
///
/// [`try_place`]: DigitGrid::try_place
/// [`place`]: DigitGrid::place
/// [`is_legal_placement`]: DigitGrid::is_legal_placement
///
/// # Examples
///
/// ```
/// use numplace_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// let pos = Position::new(3, 0);
///
/// assert!(grid.is_legal_placement(pos, Digit::D4));
/// grid.place(pos, Digit::D4);
/// assert_eq!(grid[pos], Some(Digit::D4));
///
/// // The same digit is now illegal elsewhere in row 0
/// assert!(!grid.is_legal_placement(Position::new(7, 0), Digit::D4));
///
/// grid.clear(pos);
/// assert_eq!(grid[pos], None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates a new grid with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    fn cell_index(pos: Position) -> usize {
        usize::from(pos.y()) * 9 + usize::from(pos.x())
    }

    /// Returns the digit at the given position, or `None` if the cell is
    /// empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[Self::cell_index(pos)]
    }

    /// Unconditionally writes a digit into a cell.
    ///
    /// This is a raw write: no legality check is performed and no signal is
    /// returned. Callers that want to preserve the board-consistency
    /// invariant must check [`is_legal_placement`] first, or use
    /// [`try_place`].
    ///
    /// [`is_legal_placement`]: DigitGrid::is_legal_placement
    /// [`try_place`]: DigitGrid::try_place
    pub fn place(&mut self, pos: Position, digit: Digit) {
        self.cells[Self::cell_index(pos)] = Some(digit);
    }

    /// Writes a digit into a cell after checking emptiness and legality.
    ///
    /// Unlike [`place`], the result reflects whether the write actually
    /// happened: the cell is mutated only on `Ok`.
    ///
    /// [`place`]: DigitGrid::place
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OccupiedCell`] if the cell already holds a
    /// digit, or [`PlaceError::IllegalDigit`] if the digit is already
    /// present in the row, column, or box of `pos`.
    ///
    /// # Examples
    ///
    /// ```
    /// use numplace_core::{Digit, DigitGrid, PlaceError, Position};
    ///
    /// let mut grid = DigitGrid::new();
    /// grid.try_place(Position::new(0, 0), Digit::D5)?;
    ///
    /// // Same digit in the same row is rejected, and nothing is written
    /// let result = grid.try_place(Position::new(8, 0), Digit::D5);
    /// assert_eq!(result, Err(PlaceError::IllegalDigit));
    /// assert_eq!(grid[Position::new(8, 0)], None);
    /// # Ok::<(), PlaceError>(())
    /// ```
    pub fn try_place(&mut self, pos: Position, digit: Digit) -> Result<(), PlaceError> {
        if self.get(pos).is_some() {
            return Err(PlaceError::OccupiedCell);
        }
        if !self.is_legal_placement(pos, digit) {
            return Err(PlaceError::IllegalDigit);
        }
        self.place(pos, digit);
        Ok(())
    }

    /// Sets the cell at the given position to empty.
    pub fn clear(&mut self, pos: Position) {
        self.cells[Self::cell_index(pos)] = None;
    }

    /// Returns `true` if no cell in the row or column of `pos` holds
    /// `digit`.
    ///
    /// The check scans the full row and column, including the target cell
    /// itself; the intended use is testing a fresh digit against an empty
    /// target cell (row/column uniqueness).
    #[must_use]
    pub fn is_row_col_legal(&self, pos: Position, digit: Digit) -> bool {
        for i in 0..9 {
            if self.get(Position::new(i, pos.y())) == Some(digit)
                || self.get(Position::new(pos.x(), i)) == Some(digit)
            {
                return false;
            }
        }
        true
    }

    /// Returns `true` if no cell within the 3×3 box containing `pos` holds
    /// `digit`.
    #[must_use]
    pub fn is_box_legal(&self, pos: Position, digit: Digit) -> bool {
        let box_index = pos.box_index();
        for i in 0..9 {
            if self.get(Position::from_box(box_index, i)) == Some(digit) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if placing `digit` at `pos` violates no row, column,
    /// or box uniqueness constraint.
    ///
    /// This is the single authority for "can this digit go here"; both the
    /// solver and interactive callers route placement decisions through it.
    #[must_use]
    pub fn is_legal_placement(&self, pos: Position, digit: Digit) -> bool {
        self.is_row_col_legal(pos, digit) && self.is_box_legal(pos, digit)
    }

    /// Returns the digits not excluded by the row, column, or box of `pos`.
    ///
    /// For a non-empty cell this returns [`DigitSet::EMPTY`]: an occupied
    /// cell has no candidates. Callers that care about the distinction
    /// should check emptiness first via [`get`].
    ///
    /// [`get`]: DigitGrid::get
    ///
    /// # Examples
    ///
    /// ```
    /// use numplace_core::{Digit, DigitGrid, Position};
    ///
    /// let mut grid = DigitGrid::new();
    /// grid.place(Position::new(0, 0), Digit::D1);
    ///
    /// let candidates = grid.candidates(Position::new(4, 0));
    /// assert_eq!(candidates.len(), 8);
    /// assert!(!candidates.contains(Digit::D1)); // excluded by the row
    /// ```
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        if self.get(pos).is_some() {
            return DigitSet::EMPTY;
        }
        let mut candidates = DigitSet::FULL;
        for i in 0..9 {
            if let Some(d) = self.get(Position::new(i, pos.y())) {
                candidates.remove(d);
            }
            if let Some(d) = self.get(Position::new(pos.x(), i)) {
                candidates.remove(d);
            }
            if let Some(d) = self.get(Position::from_box(pos.box_index(), i)) {
                candidates.remove(d);
            }
        }
        candidates
    }

    /// Returns `true` if every cell is non-empty.
    ///
    /// Completeness and correctness are distinct: this does not verify
    /// legality of the filled grid. Use [`is_solved`] for both.
    ///
    /// [`is_solved`]: DigitGrid::is_solved
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the row-major first empty cell, or `None` if the grid is
    /// complete.
    ///
    /// This fixed top-left-to-bottom-right scan is the solver's search-order
    /// policy; no heuristic ordering is applied.
    #[must_use]
    pub fn first_empty_cell(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self.get(pos).is_none())
    }

    /// Returns `true` if no digit appears twice in any row, column, or box.
    ///
    /// Empty cells are ignored, so an empty grid is consistent. This is the
    /// precondition a hydrated grid must satisfy before solving; grids
    /// mutated only through [`try_place`] satisfy it by construction.
    ///
    /// [`try_place`]: DigitGrid::try_place
    ///
    /// # Examples
    ///
    /// ```
    /// use numplace_core::{Digit, DigitGrid, Position};
    ///
    /// let mut grid = DigitGrid::new();
    /// assert!(grid.is_consistent());
    ///
    /// // Raw writes can break the invariant
    /// grid.place(Position::new(0, 0), Digit::D5);
    /// grid.place(Position::new(1, 0), Digit::D5);
    /// assert!(!grid.is_consistent());
    /// ```
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut rows = [DigitSet::EMPTY; 9];
        let mut cols = [DigitSet::EMPTY; 9];
        let mut boxes = [DigitSet::EMPTY; 9];
        for pos in Position::ALL {
            let Some(digit) = self.get(pos) else {
                continue;
            };
            let row = &mut rows[usize::from(pos.y())];
            let col = &mut cols[usize::from(pos.x())];
            let boxed = &mut boxes[usize::from(pos.box_index())];
            if row.contains(digit) || col.contains(digit) || boxed.contains(digit) {
                return false;
            }
            row.insert(digit);
            col.insert(digit);
            boxed.insert(digit);
        }
        true
    }

    /// Returns `true` if the grid is complete **and** consistent, i.e.
    /// every row, column, and box contains each digit 1-9 exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.is_consistent()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[Self::cell_index(pos)]
    }
}

/// Errors that can occur when placing a digit through [`DigitGrid::try_place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    /// The target cell already holds a digit.
    #[display("cell already holds a digit")]
    OccupiedCell,
    /// The digit is already present in the row, column, or box.
    #[display("digit already present in row, column, or box")]
    IllegalDigit,
}

/// Errors that can occur when parsing a grid from its textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The string does not contain exactly 81 cell characters.
    #[display("grid must contain exactly 81 cells, found {len}")]
    InvalidLength {
        /// Number of cell characters found.
        len: usize,
    },
    /// A character is neither a digit, `'.'`, `'0'`, nor whitespace.
    #[display("invalid cell character: {ch:?}")]
    InvalidCell {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    /// Parses the 81-character textual form, row-major: `'1'`-`'9'` for
    /// digits, `'.'` or `'0'` for empty cells. ASCII whitespace is ignored.
    ///
    /// Only the shape is validated. The no-duplicates precondition on loaded
    /// puzzles is the caller's to uphold, checkable via
    /// [`DigitGrid::is_consistent`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut len = 0;
        for ch in s.chars() {
            if ch.is_ascii_whitespace() {
                continue;
            }
            let cell = match ch {
                '.' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = ch.to_digit(10).unwrap_or_default() as u8;
                    Some(Digit::from_value(value))
                }
                _ => return Err(ParseGridError::InvalidCell { ch }),
            };
            if len < 81
                && let Some(digit) = cell
            {
                grid.place(Position::ALL[len], digit);
            }
            len += 1;
        }
        if len != 81 {
            return Err(ParseGridError::InvalidLength { len });
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    /// Writes the canonical 81-character form: row-major, `'.'` for empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in Position::ALL {
            match self.get(pos) {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}
