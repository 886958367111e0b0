//! Core data structures for number-place (Sudoku) applications.
//!
//! This crate provides the puzzle state model: a 9×9 grid of optional digits
//! together with the legality and candidate queries that decide whether a
//! digit may be placed in a cell. It carries all of the rules; consumers such
//! as solvers or interactive front ends read and mutate the grid through a
//! small call surface and never re-implement the constraints.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of digits 1-9
//! - [`position`]: Board coordinates (x, y) in the range 0-8
//! - [`digit_set`]: A 9-bit set of digits, used for candidate queries
//! - [`grid`]: The board itself: cell storage, legality checks, candidate
//!   enumeration, and textual hydration
//!
//! # Examples
//!
//! ```
//! use numplace_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! let pos = Position::new(0, 0);
//!
//! assert!(grid.is_legal_placement(pos, Digit::D5));
//! grid.place(pos, Digit::D5);
//!
//! // 5 is now excluded from the rest of row 0, column 0, and the top-left box
//! assert!(!grid.is_legal_placement(Position::new(8, 0), Digit::D5));
//! assert!(!grid.candidates(Position::new(0, 8)).contains(Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError, PlaceError},
    position::Position,
};
