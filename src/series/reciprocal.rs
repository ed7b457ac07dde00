// ============================================================================
// Long-Division Reciprocal
// 1/n digit by digit through repeated subtraction
// ============================================================================

use crate::config::ArithmeticConfig;
use crate::numeric::{Bcd, DecimalError, DecimalResult, Digits};
use smallvec::smallvec;

/// Compute `1/n` truncated to `precision` fractional digits.
///
/// # Errors
/// Returns `DivisionByZero` if `n` is zero.
///
/// # Example
/// ```
/// use bcd_decimal::series::reciprocal;
///
/// assert_eq!(reciprocal(3, 5).unwrap().to_string(), "0.33333");
/// assert_eq!(reciprocal(-4, 3).unwrap().to_string(), "-0.25");
/// ```
pub fn reciprocal(n: i64, precision: usize) -> DecimalResult<Bcd> {
    reciprocal_with(n, precision, &ArithmeticConfig::default())
}

/// [`reciprocal`] with an explicit configuration.
pub fn reciprocal_with(n: i64, precision: usize, config: &ArithmeticConfig) -> DecimalResult<Bcd> {
    let divisor = Bcd::from_magnitude(u128::from(n.unsigned_abs()), n < 0);
    reciprocal_of_with(&divisor, precision, config)
}

/// Compute `1/divisor` for an integer-valued `divisor` of any size.
///
/// # Errors
/// - `DivisionByZero` if `divisor` is zero
/// - `UnsupportedOperation` if `divisor` has fractional digits
pub fn reciprocal_of(divisor: &Bcd, precision: usize) -> DecimalResult<Bcd> {
    reciprocal_of_with(divisor, precision, &ArithmeticConfig::default())
}

/// [`reciprocal_of`] with an explicit configuration.
///
/// Runs `precision + reciprocal_guard_digits` long-division steps, stopping
/// early when the remainder reaches zero, then truncates to `precision`.
pub fn reciprocal_of_with(
    divisor: &Bcd,
    precision: usize,
    config: &ArithmeticConfig,
) -> DecimalResult<Bcd> {
    config
        .validate()
        .map_err(|_| DecimalError::UnsupportedOperation)?;

    if divisor.is_zero() {
        return Err(DecimalError::DivisionByZero);
    }
    if divisor.fractional_digits() > 0 {
        return Err(DecimalError::UnsupportedOperation);
    }

    let magnitude = divisor.abs();
    if magnitude == Bcd::one() {
        return Ok(divisor.clone());
    }

    let ten = Bcd::from(10);
    let mut remainder = Bcd::one();
    // Integer portion is the leading 0, every step appends one fractional digit
    let mut digits: Digits = smallvec![0];

    for step in 0..precision + config.reciprocal_guard_digits {
        remainder = remainder.mul_with(&ten, config.product_precision);

        let mut digit = 0u8;
        while remainder >= magnitude {
            remainder -= &magnitude;
            digit += 1;
        }
        debug_assert!(digit < 10);
        digits.push(digit);

        if remainder.is_zero() {
            tracing::trace!(divisor = %divisor, steps = step + 1, "long division terminated");
            break;
        }
    }

    let fractional_digits = digits.len() - 1;
    Ok(Bcd::from_parts(digits, fractional_digits, divisor.is_negative()).truncate(precision))
}
