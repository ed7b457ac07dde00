// ============================================================================
// BCD Decimal Library
// Arbitrary-precision decimal arithmetic with convergent series evaluation
// ============================================================================

//! # BCD Decimal
//!
//! An arbitrary-precision signed decimal type stored one decimal digit per
//! element, with exact digit-level arithmetic and two derived algorithms.
//!
//! ## Features
//!
//! - **Exact addition and subtraction** with carry/borrow propagation over
//!   aligned digit sequences
//! - **Schoolbook multiplication** with a documented fractional-digit policy
//! - **Canonical form** for every value: structural equality is numeric
//!   equality
//! - **Long-division reciprocal** `1/n` to any number of digits
//! - **Euler's constant** from its Taylor series with an analytic stopping
//!   bound
//!
//! ## Example
//!
//! ```rust
//! use bcd_decimal::prelude::*;
//!
//! let a: Bcd = "123.45".parse().unwrap();
//! let b: Bcd = "67.6".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "191.05");
//! assert!(a > b);
//!
//! assert_eq!(reciprocal(3, 5).unwrap().to_string(), "0.33333");
//! assert_eq!(compute_e(5).unwrap().to_string(), "2.71828");
//!
//! let too_long: Result<Bcd, _> = "12345678901".parse();
//! assert_eq!(too_long, Err(DecimalError::IntegerOverflow));
//! ```

pub mod config;
pub mod numeric;
pub mod series;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::ArithmeticConfig;
    pub use crate::numeric::{Bcd, DecimalError, DecimalResult, ProductPrecision};
    pub use crate::series::{
        compute_e, compute_e_with, factorial, reciprocal, reciprocal_of, reciprocal_of_with,
        reciprocal_with,
    };
}
