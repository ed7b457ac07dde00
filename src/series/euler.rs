// ============================================================================
// Euler's Constant
// Taylor series of e with an analytic truncation bound
// ============================================================================

use super::reciprocal::reciprocal_of_with;
use crate::config::ArithmeticConfig;
use crate::numeric::{Bcd, DecimalError, DecimalResult};

/// `n!` as an exact integer. `0! = 1! = 1`.
pub fn factorial(n: u32) -> Bcd {
    (2..=n).fold(Bcd::one(), |acc, k| {
        acc * Bcd::from_magnitude(u128::from(k), false)
    })
}

/// Compute Euler's constant truncated to `precision` fractional digits.
///
/// # Errors
/// Returns `UnsupportedOperation` if the series would need more terms than
/// the configured maximum.
///
/// # Example
/// ```
/// use bcd_decimal::series::compute_e;
///
/// assert_eq!(compute_e(5).unwrap().to_string(), "2.71828");
/// ```
pub fn compute_e(precision: usize) -> DecimalResult<Bcd> {
    compute_e_with(precision, &ArithmeticConfig::default())
}

/// [`compute_e`] with an explicit configuration.
///
/// The series `Σ 1/n!` is cut after the first `N` whose tail bound
/// `3 / (N+1)!` falls below `10^-(precision + stop_guard_digits)`. Terms and
/// the running sum carry `series_guard_digits` extra digits, and the sum is
/// truncated to `precision` at the end.
pub fn compute_e_with(precision: usize, config: &ArithmeticConfig) -> DecimalResult<Bcd> {
    config
        .validate()
        .map_err(|_| DecimalError::UnsupportedOperation)?;

    let terms = series_terms(precision, config)?;
    tracing::debug!(precision, terms, "e series truncation point");

    let working = precision + config.series_guard_digits;
    let mut sum = Bcd::one();
    for n in 1..=terms {
        sum += reciprocal_of_with(&factorial(n), working, config)?;
        if sum.fractional_digits() > working {
            sum = sum.truncate(working);
        }
    }

    Ok(sum.truncate(precision))
}

/// Smallest `N >= 1` with `3 / (N+1)! < 10^-target`.
fn series_terms(precision: usize, config: &ArithmeticConfig) -> DecimalResult<u32> {
    let target = precision + config.stop_guard_digits;
    let threshold = Bcd::pow10_neg(target);
    let three = Bcd::from(3);

    let mut terms = 1u32;
    loop {
        let bound = reciprocal_of_with(
            &factorial(terms + 1),
            target + config.error_bound_guard_digits,
            config,
        )?
        .mul_with(&three, config.product_precision);

        if bound < threshold {
            return Ok(terms);
        }

        terms += 1;
        if terms > config.max_series_terms {
            return Err(DecimalError::UnsupportedOperation);
        }
    }
}
