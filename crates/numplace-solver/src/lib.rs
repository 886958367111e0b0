//! Backtracking solver for number-place (Sudoku) grids.
//!
//! This crate completes a partially-filled [`DigitGrid`] by exhaustive
//! constrained search. Placement legality is delegated entirely to the grid;
//! the solver only supplies the search policy: first empty cell in row-major
//! order, digits tried 1-9 ascending, chronological undo on failed branches.
//!
//! [`DigitGrid`]: numplace_core::DigitGrid
//!
//! # Examples
//!
//! ```
//! use numplace_core::DigitGrid;
//! use numplace_solver::BacktrackSolver;
//!
//! let mut grid = DigitGrid::new();
//! let solver = BacktrackSolver::new();
//!
//! assert!(solver.solve(&mut grid));
//! assert!(grid.is_solved());
//! ```

pub use self::backtrack::*;

mod backtrack;
