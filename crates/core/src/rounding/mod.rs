//! Rounding modes and integer division with rounding.
//!
//! The engine works on exact fractions `numerator / denominator` and returns
//! the unique correctly-rounded integer for the requested mode. Exact
//! quotients are returned unchanged by every mode.

use std::fmt;
use std::str::FromStr;

use monetra_shared::{MoneyError, MoneyResult};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod props;

/// How to resolve a fractional result to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingMode {
    /// Largest integer not above the exact value.
    Floor,
    /// Smallest integer not below the exact value.
    Ceil,
    /// Nearest integer; ties move away from zero.
    HalfUp,
    /// Nearest integer; ties move toward zero.
    HalfDown,
    /// Nearest integer; ties go to the even neighbour (banker's rounding).
    HalfEven,
    /// Discard the fractional part (toward zero).
    Truncate,
}

impl RoundingMode {
    /// All modes, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Floor,
        Self::Ceil,
        Self::HalfUp,
        Self::HalfDown,
        Self::HalfEven,
        Self::Truncate,
    ];

    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Floor => "FLOOR",
            Self::Ceil => "CEIL",
            Self::HalfUp => "HALF_UP",
            Self::HalfDown => "HALF_DOWN",
            Self::HalfEven => "HALF_EVEN",
            Self::Truncate => "TRUNCATE",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingMode {
    type Err = MoneyError;

    /// Accepts canonical names case-insensitively, with `_` or `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| MoneyError::UnsupportedRoundingMode(s.to_string()))
    }
}

/// Divides `numerator` by `denominator`, rounding with `mode`.
///
/// Truncating division yields the magnitude-smaller candidate; every mode
/// either keeps it or moves one step away from zero.
///
/// # Errors
///
/// `DivisionByZero` when `denominator == 0`; `Overflow` for
/// `i128::MIN / -1` or when stepping away from zero leaves the `i128` range.
///
/// # Example
///
/// ```
/// use monetra_core::{RoundingMode, divide_with_rounding};
///
/// assert_eq!(divide_with_rounding(25, 10, RoundingMode::HalfEven).unwrap(), 2);
/// assert_eq!(divide_with_rounding(-10, 3, RoundingMode::Floor).unwrap(), -4);
/// ```
pub fn divide_with_rounding(
    numerator: i128,
    denominator: i128,
    mode: RoundingMode,
) -> MoneyResult<i128> {
    if denominator == 0 {
        return Err(MoneyError::DivisionByZero);
    }

    let quotient = numerator.checked_div(denominator).ok_or(MoneyError::Overflow)?;
    let remainder = numerator - quotient * denominator;

    if remainder == 0 {
        return Ok(quotient);
    }

    let sign: i128 = if (numerator < 0) == (denominator < 0) { 1 } else { -1 };
    let twice_remainder = remainder.unsigned_abs() * 2;
    let abs_denominator = denominator.unsigned_abs();
    let is_half = twice_remainder == abs_denominator;
    let is_more_than_half = twice_remainder > abs_denominator;

    let away_from_zero = || quotient.checked_add(sign).ok_or(MoneyError::Overflow);

    match mode {
        RoundingMode::Floor => {
            if sign > 0 {
                Ok(quotient)
            } else {
                away_from_zero()
            }
        }
        RoundingMode::Ceil => {
            if sign > 0 {
                away_from_zero()
            } else {
                Ok(quotient)
            }
        }
        RoundingMode::Truncate => Ok(quotient),
        RoundingMode::HalfUp => {
            if is_more_than_half || is_half {
                away_from_zero()
            } else {
                Ok(quotient)
            }
        }
        RoundingMode::HalfDown => {
            if is_more_than_half {
                away_from_zero()
            } else {
                Ok(quotient)
            }
        }
        RoundingMode::HalfEven => {
            if is_more_than_half || (is_half && quotient % 2 != 0) {
                away_from_zero()
            } else {
                Ok(quotient)
            }
        }
    }
}
