//! A set of digits 1-9, used for candidate queries.

use std::{
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::digit::Digit;

/// A set of digits 1-9, represented as a bitset.
///
/// The implementation uses a 16-bit integer where bits 0-8 represent digits
/// 1-9 respectively, providing compact storage and fast set operations. This
/// is the return type of candidate queries: "which digits can still go in
/// this cell".
///
/// # Examples
///
/// ```
/// use numplace_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::new();
/// set.insert(Digit::D1);
/// set.insert(Digit::D5);
/// set.insert(Digit::D9);
///
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(Digit::D5));
/// assert!(!set.contains(Digit::D2));
///
/// set.remove(Digit::D5);
/// assert_eq!(set.len(), 2);
/// ```
///
/// # Set operations
///
/// ```
/// use numplace_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(
///     a | b,
///     DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4])
/// );
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
/// assert_eq!(a.difference(b), DigitSet::from_iter([Digit::D1]));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The set containing no digits.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all digits 1-9.
    pub const FULL: Self = Self { bits: 0x1ff };

    /// Creates a new, empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    #[must_use]
    pub const fn from_elem(digit: Digit) -> Self {
        Self {
            bits: Self::bit(digit),
        }
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Adds a digit to the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.bits |= Self::bit(digit);
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.bits &= !Self::bit(digit);
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the single digit in the set, or `None` if the set does not
    /// contain exactly one digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use numplace_core::{Digit, DigitSet};
    ///
    /// assert_eq!(DigitSet::from_elem(Digit::D7).as_single(), Some(Digit::D7));
    /// assert_eq!(DigitSet::EMPTY.as_single(), None);
    /// assert_eq!(DigitSet::FULL.as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.len() != 1 {
            return None;
        }
        self.iter().next()
    }

    /// Returns the union of the two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the intersection of the two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns an iterator over the digits in the set, in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the digits in a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Digit::from_value(index + 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}
