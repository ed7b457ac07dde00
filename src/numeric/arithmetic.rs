// ============================================================================
// Arithmetic Engine
// Digit-level add/subtract/multiply, sign dispatch and total ordering
// ============================================================================

use super::align::align;
use super::bcd::{Bcd, Digits};
use super::errors::{DecimalError, DecimalResult};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Product Precision Policy
// ============================================================================

/// How many fractional digits a product keeps.
///
/// A raw product of operands with `fa` and `fb` fractional digits has
/// `fa + fb` of them. Repeated multiplication would let that grow without
/// bound, so the default policy truncates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProductPrecision {
    /// Keep at most `max(fa, fb) + m` fractional digits, where `m` is the
    /// integer digit count of the larger operand (at least 1).
    ///
    /// Products with an integer operand are exact. Products of two small
    /// fractions lose their tail: `0.0001 * 0.0001` is zero.
    #[default]
    MagnitudeScaled,
    /// Keep all `fa + fb` fractional digits.
    Exact,
}

impl ProductPrecision {
    fn retained_fractional_digits(self, a: &Bcd, b: &Bcd) -> usize {
        let raw = a.fractional_digits + b.fractional_digits;
        match self {
            ProductPrecision::Exact => raw,
            ProductPrecision::MagnitudeScaled => {
                let magnitude = a.integer_digits().max(b.integer_digits()).max(1);
                raw.min(a.fractional_digits.max(b.fractional_digits) + magnitude)
            }
        }
    }
}

// ============================================================================
// Magnitude Operations
// ============================================================================

fn with_sign(mut value: Bcd, negative: bool) -> Bcd {
    value.negative = negative && !value.is_zero();
    value
}

/// Compare `|a|` with `|b|`.
fn compare_magnitudes(a: &Bcd, b: &Bcd) -> Ordering {
    align(a, b).compare()
}

/// `|a| + |b|`
fn add_magnitudes(a: &Bcd, b: &Bcd) -> Bcd {
    let pair = align(a, b);

    let mut digits = Digits::with_capacity(pair.len() + 1);
    let mut carry = 0u8;
    for (&x, &y) in pair.left.iter().rev().zip(pair.right.iter().rev()) {
        let sum = x + y + carry;
        digits.push(sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        digits.push(carry);
    }
    digits.reverse();

    Bcd::from_parts(digits, pair.fractional_digits, false)
}

/// `|a| - |b|`, requires `|a| >= |b|`.
fn subtract_magnitudes(a: &Bcd, b: &Bcd) -> Bcd {
    let pair = align(a, b);
    debug_assert_ne!(pair.compare(), Ordering::Less);

    let mut digits = Digits::with_capacity(pair.len());
    let mut borrow = 0u8;
    for (&x, &y) in pair.left.iter().rev().zip(pair.right.iter().rev()) {
        let subtrahend = y + borrow;
        if x >= subtrahend {
            digits.push(x - subtrahend);
            borrow = 0;
        } else {
            digits.push(x + 10 - subtrahend);
            borrow = 1;
        }
    }
    digits.reverse();

    Bcd::from_parts(digits, pair.fractional_digits, false)
}

/// Full schoolbook product of the digit sequences, no truncation.
///
/// Partial products accumulate in `u64` cells and carries are folded once at
/// the end, so no cell can wrap.
fn multiply_digits(a: &[u8], b: &[u8]) -> Digits {
    let mut cells = vec![0u64; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            cells[i + j + 1] += u64::from(x) * u64::from(y);
        }
    }

    let mut digits = Digits::with_capacity(cells.len());
    let mut carry = 0u64;
    for cell in cells.iter().rev() {
        let value = cell + carry;
        digits.push((value % 10) as u8);
        carry = value / 10;
    }
    debug_assert_eq!(carry, 0);
    digits.reverse();
    digits
}

fn signed_add(a: &Bcd, b: &Bcd) -> Bcd {
    if a.negative == b.negative {
        return with_sign(add_magnitudes(a, b), a.negative);
    }

    match compare_magnitudes(a, b) {
        Ordering::Greater => with_sign(subtract_magnitudes(a, b), a.negative),
        Ordering::Less => with_sign(subtract_magnitudes(b, a), b.negative),
        Ordering::Equal => Bcd::zero(),
    }
}

// ============================================================================
// Multiplication and Powers
// ============================================================================

impl Bcd {
    /// Multiply with an explicit product precision policy.
    ///
    /// The sign is the XOR of the operand signs; a zero product is never
    /// negative.
    pub fn mul_with(&self, rhs: &Bcd, precision: ProductPrecision) -> Bcd {
        let mut digits = multiply_digits(&self.digits, &rhs.digits);

        let raw = self.fractional_digits + rhs.fractional_digits;
        let kept = precision.retained_fractional_digits(self, rhs);
        digits.truncate(digits.len() - (raw - kept));

        Bcd::from_parts(digits, kept, self.negative != rhs.negative)
    }

    /// Raise to a non-negative integer power by repeated squaring.
    ///
    /// # Errors
    /// Returns `UnsupportedOperation` for a negative exponent, which would
    /// need general division.
    pub fn pow(&self, exponent: i32) -> DecimalResult<Bcd> {
        let mut remaining =
            u32::try_from(exponent).map_err(|_| DecimalError::UnsupportedOperation)?;

        let mut result = Bcd::one();
        let mut base = self.clone();
        while remaining > 0 {
            if remaining & 1 == 1 {
                result *= &base;
            }
            remaining >>= 1;
            if remaining > 0 {
                base = &base * &base;
            }
        }
        Ok(result)
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl PartialOrd for Bcd {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bcd {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => compare_magnitudes(self, other),
            // a < b iff -b < -a
            (true, true) => compare_magnitudes(other, self),
        }
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Neg for &Bcd {
    type Output = Bcd;

    fn neg(self) -> Bcd {
        let negative = !self.negative;
        with_sign(self.clone(), negative)
    }
}

impl Neg for Bcd {
    type Output = Bcd;

    #[inline]
    fn neg(self) -> Bcd {
        let negative = !self.negative;
        with_sign(self, negative)
    }
}

impl Add<&Bcd> for &Bcd {
    type Output = Bcd;

    #[inline]
    fn add(self, rhs: &Bcd) -> Bcd {
        signed_add(self, rhs)
    }
}

impl Sub<&Bcd> for &Bcd {
    type Output = Bcd;

    #[inline]
    fn sub(self, rhs: &Bcd) -> Bcd {
        signed_add(self, &-rhs)
    }
}

impl Mul<&Bcd> for &Bcd {
    type Output = Bcd;

    #[inline]
    fn mul(self, rhs: &Bcd) -> Bcd {
        self.mul_with(rhs, ProductPrecision::default())
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Bcd> for Bcd {
            type Output = Bcd;

            #[inline]
            fn $method(self, rhs: Bcd) -> Bcd {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&Bcd> for Bcd {
            type Output = Bcd;

            #[inline]
            fn $method(self, rhs: &Bcd) -> Bcd {
                (&self).$method(rhs)
            }
        }

        impl $imp<Bcd> for &Bcd {
            type Output = Bcd;

            #[inline]
            fn $method(self, rhs: Bcd) -> Bcd {
                self.$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

// Compound assignment replaces the receiver; the argument is only read.
macro_rules! forward_assign {
    ($imp:ident, $method:ident, $op:tt) => {
        impl $imp<&Bcd> for Bcd {
            #[inline]
            fn $method(&mut self, rhs: &Bcd) {
                *self = &*self $op rhs;
            }
        }

        impl $imp<Bcd> for Bcd {
            #[inline]
            fn $method(&mut self, rhs: Bcd) {
                *self = &*self $op &rhs;
            }
        }
    };
}

forward_assign!(AddAssign, add_assign, +);
forward_assign!(SubAssign, sub_assign, -);
forward_assign!(MulAssign, mul_assign, *);

// ============================================================================
// Tests
// ============================================================================
