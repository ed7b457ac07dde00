// ============================================================================
// Numeric Module
// Arbitrary-precision binary-coded decimal arithmetic
// ============================================================================
//
// This module provides:
// - Bcd: signed decimal stored one digit per element, always canonical
// - ProductPrecision: truncation policy for products
// - DecimalError: Error types for construction and arithmetic
//
// Design principles:
// - No floating-point operations
// - Every operation returns a fresh value; operands are never mutated
// - Fallible construction returns Result, arithmetic operators are total
// - Alignment is a pure function producing padded copies

mod align;
mod arithmetic;
mod bcd;
mod errors;
mod text;

#[cfg(test)]
mod proptests;

pub use arithmetic::ProductPrecision;
pub use bcd::{Bcd, INTEGER_DIGIT_LIMIT};
pub use errors::{DecimalError, DecimalResult};

pub(crate) use bcd::Digits;
