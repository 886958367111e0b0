use numplace_core::{Digit, DigitGrid};

/// A depth-first backtracking solver.
///
/// Given a grid whose filled cells are mutually consistent, [`solve`]
/// attempts to fill every remaining cell so that each row, column, and box
/// contains the digits 1-9 exactly once. The search commits a digit only
/// after the grid confirms its legality, and fully undoes every failed
/// branch, so on failure the grid is exactly as it was on entry.
///
/// The solver is stateless; it carries no configuration and may be reused
/// across grids. It runs synchronously on the calling thread with no
/// timeout or cancellation. Recursion depth is bounded by the 81 cells, so
/// native call-stack recursion is safe.
///
/// A grid that already violates the consistency invariant (built through
/// raw writes without legality checks) is outside the solver's contract;
/// its behavior on such input is undefined.
///
/// [`solve`]: BacktrackSolver::solve
///
/// # Examples
///
/// ```
/// use numplace_core::DigitGrid;
/// use numplace_solver::BacktrackSolver;
///
/// let mut grid: DigitGrid = "\
///     53..7....\
///     6..195...\
///     .98....6.\
///     8...6...3\
///     4..8.3..1\
///     7...2...6\
///     .6....28.\
///     ...419..5\
///     ....8..79"
///     .parse()?;
///
/// let solver = BacktrackSolver::new();
/// assert!(solver.solve(&mut grid));
/// assert!(grid.is_solved());
/// # Ok::<(), numplace_core::ParseGridError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackSolver;

impl BacktrackSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        BacktrackSolver
    }

    /// Attempts to complete the grid in place.
    ///
    /// Returns `true` on success, in which case the grid is a complete,
    /// legal solution; the first solution found in search order is kept and
    /// no alternates are enumerated. Returns `false` if no solution exists
    /// for the given partial grid, in which case every tentative placement
    /// has been undone and the grid is unchanged. A `false` result is a
    /// negative answer, not a fault.
    #[must_use]
    pub fn solve(&self, grid: &mut DigitGrid) -> bool {
        // An already-complete grid is a trivial success; legality is not
        // re-validated (completeness and correctness are distinct).
        let Some(pos) = grid.first_empty_cell() else {
            return true;
        };
        for digit in Digit::ALL {
            if grid.is_legal_placement(pos, digit) {
                grid.place(pos, digit);
                if self.solve(grid) {
                    return true;
                }
                grid.clear(pos);
            }
        }
        false
    }

    /// Returns whether the grid has at least one solution, without
    /// mutating it.
    ///
    /// The search runs over a working copy, so this costs a grid clone on
    /// top of [`solve`].
    ///
    /// [`solve`]: BacktrackSolver::solve
    ///
    /// # Examples
    ///
    /// ```
    /// use numplace_core::DigitGrid;
    /// use numplace_solver::BacktrackSolver;
    ///
    /// let grid = DigitGrid::new();
    /// let solver = BacktrackSolver::new();
    ///
    /// assert!(solver.is_solvable(&grid));
    /// assert_eq!(grid.first_empty_cell(), Some(numplace_core::Position::new(0, 0)));
    /// ```
    #[must_use]
    pub fn is_solvable(&self, grid: &DigitGrid) -> bool {
        let mut scratch = grid.clone();
        self.solve(&mut scratch)
    }
}
