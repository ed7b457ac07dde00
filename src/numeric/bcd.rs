// ============================================================================
// Binary-Coded Decimal
// Arbitrary-precision signed decimal stored as one digit per element
// ============================================================================

use super::errors::{DecimalError, DecimalResult};
use smallvec::{smallvec, SmallVec};
use std::fmt;

/// Digit storage, most significant digit first.
///
/// Everyday magnitudes stay inline; long fractions (reciprocals, series
/// sums) spill to the heap.
pub(crate) type Digits = SmallVec<[u8; 32]>;

/// Maximum number of integer digits accepted from external input
/// (text, machine integers, `rust_decimal` values).
pub const INTEGER_DIGIT_LIMIT: usize = 10;

/// Most significant digits a `rust_decimal::Decimal` can hold losslessly.
const MAX_DECIMAL_DIGITS: usize = 28;

/// Arbitrary-precision signed decimal number.
///
/// Stores the decimal digits of the magnitude, how many of them lie right of
/// the decimal point, and a sign flag.
///
/// Every value is kept in canonical form:
/// - no leading zeros in the integer portion (a magnitude below one has an
///   empty integer portion, so `0.5` is the single digit `5`)
/// - no trailing zeros in the fractional portion
/// - zero is the single digit `0` with no fractional digits and is never
///   negative
///
/// Because the form is canonical, the derived equality and hash agree with
/// numeric equality.
///
/// # Example
/// ```
/// use bcd_decimal::numeric::Bcd;
///
/// let a: Bcd = "123.45".parse().unwrap();
/// let b: Bcd = "67.6".parse().unwrap();
/// assert_eq!((a + b).to_string(), "191.05");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Bcd {
    pub(super) digits: Digits,
    pub(super) fractional_digits: usize,
    pub(super) negative: bool,
}

impl Bcd {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The canonical zero value.
    #[inline]
    pub fn zero() -> Self {
        Self {
            digits: smallvec![0],
            fractional_digits: 0,
            negative: false,
        }
    }

    /// One (1).
    #[inline]
    pub fn one() -> Self {
        Self {
            digits: smallvec![1],
            fractional_digits: 0,
            negative: false,
        }
    }

    /// Build a value from raw parts and bring it into canonical form.
    ///
    /// `digits` must hold at least `fractional_digits` elements, each 0-9.
    pub(crate) fn from_parts(digits: Digits, fractional_digits: usize, negative: bool) -> Self {
        debug_assert!(digits.len() >= fractional_digits);
        debug_assert!(digits.iter().all(|&d| d < 10));

        let mut value = Self {
            digits,
            fractional_digits,
            negative,
        };
        value.normalize();
        value
    }

    /// Build an integer value from an unsigned magnitude and a sign.
    ///
    /// No digit limit is applied; callers that take external input check it.
    pub(crate) fn from_magnitude(magnitude: u128, negative: bool) -> Self {
        Self::from_parts(magnitude_digits(magnitude), 0, negative)
    }

    /// `10^-places`: a one in the last of `places` fractional positions.
    pub(crate) fn pow10_neg(places: usize) -> Self {
        if places == 0 {
            return Self::one();
        }

        let mut digits: Digits = smallvec![0; places - 1];
        digits.push(1);
        Self::from_parts(digits, places, false)
    }

    /// Reject values whose integer portion exceeds [`INTEGER_DIGIT_LIMIT`].
    pub(super) fn check_integer_limit(self) -> DecimalResult<Self> {
        if self.integer_digits() > INTEGER_DIGIT_LIMIT {
            Err(DecimalError::IntegerOverflow)
        } else {
            Ok(self)
        }
    }

    // ========================================================================
    // Canonical Form
    // ========================================================================

    /// Strip leading integer zeros and trailing fractional zeros, collapsing
    /// to the canonical zero when nothing significant remains.
    ///
    /// Idempotent.
    pub(super) fn normalize(&mut self) {
        let integer_digits = self.integer_digits();
        let leading = self.digits[..integer_digits]
            .iter()
            .take_while(|&&d| d == 0)
            .count();
        if leading > 0 {
            self.digits.drain(..leading);
        }

        while self.fractional_digits > 0 && self.digits.last() == Some(&0) {
            self.digits.pop();
            self.fractional_digits -= 1;
        }

        if self.digits.is_empty() {
            *self = Self::zero();
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of digits right of the decimal point.
    #[inline]
    pub fn fractional_digits(&self) -> usize {
        self.fractional_digits
    }

    /// Number of digits left of the decimal point (zero for `0 < |x| < 1`).
    #[inline]
    pub fn integer_digits(&self) -> usize {
        self.digits.len() - self.fractional_digits
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    /// The digit sequence, most significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Get absolute value.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..self.clone()
        }
    }

    /// Drop fractional digits beyond `places` (truncation toward zero).
    pub fn truncate(&self, places: usize) -> Self {
        if self.fractional_digits <= places {
            return self.clone();
        }

        let mut digits = self.digits.clone();
        digits.truncate(self.digits.len() - (self.fractional_digits - places));
        Self::from_parts(digits, places, self.negative)
    }

    /// Integer portion with the sign applied (truncated toward zero).
    ///
    /// # Errors
    /// Returns `IntegerOverflow` if the integer portion does not fit an `i64`.
    pub fn to_integer(&self) -> DecimalResult<i64> {
        let magnitude = self.digits[..self.integer_digits()]
            .iter()
            .try_fold(0i64, |acc, &d| acc.checked_mul(10)?.checked_add(i64::from(d)))
            .ok_or(DecimalError::IntegerOverflow)?;

        Ok(if self.negative { -magnitude } else { magnitude })
    }
}

/// Decimal digits of `magnitude`, most significant first (empty for zero).
fn magnitude_digits(mut magnitude: u128) -> Digits {
    let mut digits = Digits::new();
    while magnitude > 0 {
        digits.push((magnitude % 10) as u8);
        magnitude /= 10;
    }
    digits.reverse();
    digits
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Bcd {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i32> for Bcd {
    fn from(value: i32) -> Self {
        Self::from_magnitude(u128::from(value.unsigned_abs()), value < 0)
    }
}

impl TryFrom<i64> for Bcd {
    type Error = DecimalError;

    /// # Errors
    /// Returns `IntegerOverflow` if `value` has more than ten digits.
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_magnitude(u128::from(value.unsigned_abs()), value < 0).check_integer_limit()
    }
}

impl fmt::Debug for Bcd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bcd({}, fractional_digits={})",
            self, self.fractional_digits
        )
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Bcd {
    /// Convert from rust_decimal::Decimal.
    ///
    /// Trailing zeros carried by the decimal's scale are normalized away.
    ///
    /// # Errors
    /// Returns `IntegerOverflow` if the integer part has more than ten digits.
    pub fn from_decimal(d: rust_decimal::Decimal) -> DecimalResult<Self> {
        let scale = d.scale() as usize;
        let mut digits = magnitude_digits(d.mantissa().unsigned_abs());

        // 0.05 has mantissa 5 and scale 2
        if digits.len() < scale {
            let padding = scale - digits.len();
            digits.insert_many(0, std::iter::repeat(0).take(padding));
        }

        Self::from_parts(digits, scale, d.is_sign_negative()).check_integer_limit()
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` if the value has more significant digits than
    /// a `rust_decimal::Decimal` can represent.
    pub fn to_decimal(&self) -> DecimalResult<rust_decimal::Decimal> {
        if self.digits.len() > MAX_DECIMAL_DIGITS {
            return Err(DecimalError::PrecisionLoss);
        }

        let magnitude = self
            .digits
            .iter()
            .fold(0i128, |acc, &d| acc * 10 + i128::from(d));
        let mantissa = if self.negative { -magnitude } else { magnitude };
        let scale = u32::try_from(self.fractional_digits).map_err(|_| DecimalError::PrecisionLoss)?;

        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, scale)
            .map_err(|_| DecimalError::PrecisionLoss)
    }
}

// ============================================================================
// Tests
// ============================================================================
