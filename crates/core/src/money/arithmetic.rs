//! Minor-unit arithmetic behind `Money`.
//!
//! Scalars are exact fractions, so `amount * n/d` is computed as one integer
//! product followed by a single division. Rounding happens at most once, and
//! only when the caller asked for it.

use monetra_shared::{MoneyError, MoneyResult};

use crate::rational::DecimalLiteral;
use crate::rounding::{RoundingMode, divide_with_rounding};

/// Adds two minor-unit amounts.
pub fn add(a: i128, b: i128) -> MoneyResult<i128> {
    a.checked_add(b).ok_or(MoneyError::Overflow)
}

/// Subtracts two minor-unit amounts.
pub fn subtract(a: i128, b: i128) -> MoneyResult<i128> {
    a.checked_sub(b).ok_or(MoneyError::Overflow)
}

/// Multiplies an amount by an exact decimal.
///
/// # Errors
///
/// `RoundingRequired` when the product is fractional and `rounding` is
/// `None`; `Overflow` when the product leaves the `i128` range.
pub fn multiply(
    amount: i128,
    multiplier: DecimalLiteral,
    rounding: Option<RoundingMode>,
) -> MoneyResult<i128> {
    let ratio = multiplier.rational();
    let product = amount
        .checked_mul(ratio.numerator())
        .ok_or(MoneyError::Overflow)?;
    resolve("multiply", product, ratio.denominator(), rounding)
}

/// Divides an amount by an exact decimal, as multiplication by its
/// reciprocal.
///
/// # Errors
///
/// `DivisionByZero` when the divisor is zero, otherwise as [`multiply`].
pub fn divide(
    amount: i128,
    divisor: DecimalLiteral,
    rounding: Option<RoundingMode>,
) -> MoneyResult<i128> {
    if divisor.is_zero() {
        return Err(MoneyError::DivisionByZero);
    }
    let ratio = divisor.rational();
    let product = amount
        .checked_mul(ratio.denominator())
        .ok_or(MoneyError::Overflow)?;
    resolve("divide", product, ratio.numerator(), rounding)
}

/// Takes `percent`% of an amount, rounding once with `rounding`.
///
/// `percentage(1000, 12.5, _)` is `125`.
pub fn percentage(amount: i128, percent: DecimalLiteral, rounding: RoundingMode) -> MoneyResult<i128> {
    let ratio = percent.rational();
    let product = amount
        .checked_mul(ratio.numerator())
        .ok_or(MoneyError::Overflow)?;
    let denominator = ratio
        .denominator()
        .checked_mul(100)
        .ok_or(MoneyError::Overflow)?;
    resolve("percentage", product, denominator, Some(rounding))
}

/// Returns the exact quotient, or rounds it when a mode was supplied.
pub(crate) fn resolve(
    operation: &'static str,
    numerator: i128,
    denominator: i128,
    rounding: Option<RoundingMode>,
) -> MoneyResult<i128> {
    let remainder = numerator
        .checked_rem(denominator)
        .ok_or(MoneyError::Overflow)?;
    if remainder == 0 {
        return numerator
            .checked_div(denominator)
            .ok_or(MoneyError::Overflow);
    }

    match rounding {
        Some(mode) => divide_with_rounding(numerator, denominator, mode),
        None => Err(MoneyError::RoundingRequired {
            operation,
            approximate: numerator / denominator,
        }),
    }
}
