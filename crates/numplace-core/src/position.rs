//! Board position (x, y) coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Construction asserts the range, so a `Position` is always a
/// valid board coordinate.
///
/// # Examples
///
/// ```
/// use numplace_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.box_index(), 7); // bottom-middle box
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 81 board positions in row-major order.
    ///
    /// Row-major order (left to right within a row, top row first) is the
    /// scan order that defines the "first empty cell" for solving.
    ///
    /// # Examples
    ///
    /// ```
    /// use numplace_core::Position;
    ///
    /// assert_eq!(Position::ALL.len(), 81);
    /// assert_eq!(Position::ALL[0], Position::new(0, 0));
    /// assert_eq!(Position::ALL[8], Position::new(8, 0));
    /// assert_eq!(Position::ALL[9], Position::new(0, 1));
    /// ```
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8. Out-of-range
    /// coordinates are a caller error, never clamped.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index of the 3×3 box containing this position.
    ///
    /// Boxes are numbered 0-8, left to right, top to bottom. The box
    /// containing (x, y) is the block starting at
    /// `(x - x % 3, y - y % 3)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use numplace_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).box_index(), 0);
    /// assert_eq!(Position::new(8, 0).box_index(), 2);
    /// assert_eq!(Position::new(4, 4).box_index(), 4);
    /// assert_eq!(Position::new(0, 8).box_index(), 6);
    /// ```
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Converts a box index and a cell index within that box (both 0-8)
    /// into an absolute position.
    ///
    /// Cells within a box are numbered row-major, like the boxes themselves.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell` is not in the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use numplace_core::Position;
    ///
    /// assert_eq!(Position::from_box(0, 0), Position::new(0, 0));
    /// assert_eq!(Position::from_box(4, 4), Position::new(4, 4));
    /// assert_eq!(Position::from_box(8, 8), Position::new(8, 8));
    /// ```
    #[must_use]
    pub const fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(box_index < 9 && cell < 9);
        Self::new(
            (box_index % 3) * 3 + cell % 3,
            (box_index / 3) * 3 + cell / 3,
        )
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let pos = Position::new(3, 5);
        assert_eq!(pos.x(), 3);
        assert_eq!(pos.y(), 5);
        assert_eq!(format!("{pos}"), "(3, 5)");
    }

    #[test]
    fn test_all_is_row_major_and_complete() {
        assert_eq!(Position::ALL.len(), 81);
        for (i, pos) in (0..).zip(Position::ALL) {
            assert_eq!(pos, Position::new(i % 9, i / 9));
        }
    }

    #[test]
    fn test_box_index_round_trip() {
        for pos in Position::ALL {
            let box_index = pos.box_index();
            assert!(box_index < 9);
            // The box block starts at (x - x % 3, y - y % 3)
            assert_eq!(box_index % 3, (pos.x() - pos.x() % 3) / 3);
            assert_eq!(box_index / 3, (pos.y() - pos.y() % 3) / 3);
        }

        // from_box enumerates exactly the 9 cells of each box
        for box_index in 0..9 {
            for cell in 0..9 {
                let pos = Position::from_box(box_index, cell);
                assert_eq!(pos.box_index(), box_index);
            }
        }
    }

    #[test]
    #[should_panic(expected = "x < 9 && y < 9")]
    fn test_out_of_range_panics() {
        let _ = Position::new(9, 0);
    }
}
