// ============================================================================
// Operand Alignment
// Pads two magnitudes to a common digit layout for digit-wise operations
// ============================================================================

use super::bcd::{Bcd, Digits};
use std::cmp::Ordering;
use std::iter;

/// Two magnitudes laid out digit-for-digit.
///
/// Both sequences have the same length and the same number of fractional
/// digits, so index `i` of `left` and `right` has the same place value.
/// Signs are not carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AlignedPair {
    pub(crate) left: Digits,
    pub(crate) right: Digits,
    pub(crate) fractional_digits: usize,
}

impl AlignedPair {
    /// Digit count shared by both sides.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.left.len()
    }

    /// Compare the two magnitudes, most significant digit first.
    #[inline]
    pub(crate) fn compare(&self) -> Ordering {
        self.left.as_slice().cmp(self.right.as_slice())
    }
}

/// Align the magnitudes of `a` and `b`.
///
/// The side with fewer fractional digits is right-padded with zeros, then
/// the side with fewer integer digits is left-padded. Neither operand is
/// touched; both sides of the pair are fresh copies.
pub(crate) fn align(a: &Bcd, b: &Bcd) -> AlignedPair {
    let fractional_digits = a.fractional_digits.max(b.fractional_digits);
    let integer_digits = a.integer_digits().max(b.integer_digits());

    AlignedPair {
        left: padded(a, integer_digits, fractional_digits),
        right: padded(b, integer_digits, fractional_digits),
        fractional_digits,
    }
}

fn padded(value: &Bcd, integer_digits: usize, fractional_digits: usize) -> Digits {
    let lead = integer_digits - value.integer_digits();
    let trail = fractional_digits - value.fractional_digits;

    let mut digits = Digits::with_capacity(integer_digits + fractional_digits);
    digits.extend(iter::repeat(0).take(lead));
    digits.extend_from_slice(&value.digits);
    digits.extend(iter::repeat(0).take(trail));
    digits
}
