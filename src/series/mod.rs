// ============================================================================
// Series Module
// Numeric algorithms built on the decimal arithmetic engine
// ============================================================================
//
// This module provides:
// - reciprocal: 1/n by long division with guard digits
// - factorial: exact n! through repeated multiplication
// - compute_e: Euler's constant from its Taylor series with a proven
//   truncation bound
//
// Every function is a pure computation; errors are returned, never retried.

mod euler;
mod reciprocal;

pub use euler::{compute_e, compute_e_with, factorial};
pub use reciprocal::{reciprocal, reciprocal_of, reciprocal_of_with, reciprocal_with};
