// ============================================================================
// Arithmetic Configuration
// Guard digits and truncation policy for the derived algorithms
// ============================================================================

use crate::numeric::ProductPrecision;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Extra long-division iterations beyond the requested precision
pub const DEFAULT_RECIPROCAL_GUARD_DIGITS: usize = 10;

/// Digits beyond the target used when evaluating the series error bound
pub const DEFAULT_ERROR_BOUND_GUARD_DIGITS: usize = 2;

/// Digits beyond the target carried by series terms and the running sum
pub const DEFAULT_SERIES_GUARD_DIGITS: usize = 5;

/// Digits beyond the target demanded of the series truncation error
pub const DEFAULT_STOP_GUARD_DIGITS: usize = 1;

/// Upper bound on the number of series terms
pub const DEFAULT_MAX_SERIES_TERMS: u32 = 10_000;

// ============================================================================
// Arithmetic Configuration
// ============================================================================

/// Configuration for reciprocal and series evaluation.
///
/// The plain operators (`*`, `reciprocal`, `compute_e`) use
/// [`ArithmeticConfig::default`]; the `*_with` variants take an explicit
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArithmeticConfig {
    /// Policy for products computed inside the algorithms
    pub product_precision: ProductPrecision,

    /// Long division runs `precision + reciprocal_guard_digits` iterations
    /// before truncating to `precision`
    pub reciprocal_guard_digits: usize,

    /// The error bound `3 / (N+1)!` is evaluated to
    /// `target + error_bound_guard_digits` fractional digits
    pub error_bound_guard_digits: usize,

    /// Series terms and the running sum carry
    /// `precision + series_guard_digits` fractional digits
    pub series_guard_digits: usize,

    /// The series stops once its error bound is below
    /// `10^-(precision + stop_guard_digits)`.
    /// Zero compares against `10^-precision` exactly, which can leave the
    /// truncated result one unit short in the last place.
    pub stop_guard_digits: usize,

    /// Maximum number of series terms before giving up
    pub max_series_terms: u32,
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self {
            product_precision: ProductPrecision::MagnitudeScaled,
            reciprocal_guard_digits: DEFAULT_RECIPROCAL_GUARD_DIGITS,
            error_bound_guard_digits: DEFAULT_ERROR_BOUND_GUARD_DIGITS,
            series_guard_digits: DEFAULT_SERIES_GUARD_DIGITS,
            stop_guard_digits: DEFAULT_STOP_GUARD_DIGITS,
            max_series_terms: DEFAULT_MAX_SERIES_TERMS,
        }
    }
}

impl ArithmeticConfig {
    /// Builder method: Set product precision policy
    pub fn with_product_precision(mut self, precision: ProductPrecision) -> Self {
        self.product_precision = precision;
        self
    }

    /// Builder method: Set reciprocal guard digits
    pub fn with_reciprocal_guard_digits(mut self, digits: usize) -> Self {
        self.reciprocal_guard_digits = digits;
        self
    }

    /// Builder method: Set error bound guard digits
    pub fn with_error_bound_guard_digits(mut self, digits: usize) -> Self {
        self.error_bound_guard_digits = digits;
        self
    }

    /// Builder method: Set series guard digits
    pub fn with_series_guard_digits(mut self, digits: usize) -> Self {
        self.series_guard_digits = digits;
        self
    }

    /// Builder method: Set stop guard digits
    pub fn with_stop_guard_digits(mut self, digits: usize) -> Self {
        self.stop_guard_digits = digits;
        self
    }

    /// Builder method: Set maximum series terms
    pub fn with_max_series_terms(mut self, terms: u32) -> Self {
        self.max_series_terms = terms;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_series_terms == 0 {
            return Err("Maximum series terms must be positive".to_string());
        }

        if self.series_guard_digits == 0 {
            return Err("Series guard digits must be positive".to_string());
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ArithmeticConfig {
    /// Stopping rule exactly as `3 / (N+1)! < 10^-precision`
    /// - No stop guard digit
    /// - All other settings at their defaults
    pub fn literal() -> Self {
        Self::default().with_stop_guard_digits(0)
    }

    /// Exact products everywhere
    /// - Useful for checking how much the default truncation costs
    pub fn exact_products() -> Self {
        Self::default().with_product_precision(ProductPrecision::Exact)
    }
}
