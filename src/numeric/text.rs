// ============================================================================
// Text Boundary
// Parsing from and formatting to decimal strings
// ============================================================================

use super::bcd::{Bcd, Digits};
use super::errors::{DecimalError, DecimalResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

#[inline]
fn decimal_digit(byte: u8) -> DecimalResult<u8> {
    if byte.is_ascii_digit() {
        Ok(byte - b'0')
    } else {
        Err(DecimalError::InvalidCharacter)
    }
}

#[inline]
fn digit_char(digit: u8) -> char {
    char::from(b'0' + digit)
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Bcd {
    type Err = DecimalError;

    /// Parse from a decimal string.
    ///
    /// Grammar: optional `+`/`-`, optional integer digits, optional `.`
    /// followed by fractional digits. Whitespace is not trimmed.
    ///
    /// # Examples
    /// - "123.45" -> 123.45
    /// - "-.5" -> -0.5
    /// - "" -> 0
    /// - "-0.00" -> 0
    ///
    /// # Errors
    /// - `InvalidCharacter` for anything outside the grammar
    /// - `IntegerOverflow` if more than ten integer digits remain after
    ///   leading zeros are stripped
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::zero());
        }

        let (negative, body) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else {
            (false, s)
        };

        let (int_str, frac_str) = body.split_once('.').unwrap_or((body, ""));

        let mut digits = Digits::with_capacity(int_str.len() + frac_str.len());
        for byte in int_str.bytes().chain(frac_str.bytes()) {
            digits.push(decimal_digit(byte)?);
        }

        Self::from_parts(digits, frac_str.len(), negative).check_integer_limit()
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Bcd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (int_part, frac_part) = self.digits.split_at(self.integer_digits());

        let mut out = String::with_capacity(self.digits.len() + 3);
        if self.negative {
            out.push('-');
        }

        if int_part.is_empty() {
            out.push('0');
        } else {
            out.extend(int_part.iter().copied().map(digit_char));
        }

        if !frac_part.is_empty() {
            out.push('.');
            out.extend(frac_part.iter().copied().map(digit_char));
        }

        f.pad(&out)
    }
}

// ============================================================================
// Serde (canonical string form)
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for Bcd {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Bcd {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
