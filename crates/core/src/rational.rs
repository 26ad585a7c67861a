//! Decimal literal parsing.
//!
//! Every multiplier, divisor, ratio, and major-unit amount enters the crate
//! as a [`DecimalLiteral`]: text validated once against
//! `-?[0-9]+(\.[0-9]+)?` and held as an exact integer with a decimal scale.
//! Nothing is ever routed through binary floating point.

use std::fmt;
use std::str::FromStr;

use monetra_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest scale whose power of ten fits in an `i128`.
pub const MAX_SCALE: u32 = 38;

/// Returns `10^exp`, or `Overflow` past [`MAX_SCALE`].
pub(crate) fn pow10(exp: u32) -> MoneyResult<i128> {
    10i128.checked_pow(exp).ok_or(MoneyError::Overflow)
}

/// Greatest common divisor of the magnitudes; `gcd(0, 0) == 0`.
pub(crate) fn gcd(a: i128, b: i128) -> u128 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// An exact fraction with a strictly positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: i128,
    denominator: i128,
}

impl Rational {
    /// Creates a rational, moving any sign onto the numerator.
    pub fn new(numerator: i128, denominator: i128) -> MoneyResult<Self> {
        if denominator == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        if denominator < 0 {
            return Ok(Self {
                numerator: numerator.checked_neg().ok_or(MoneyError::Overflow)?,
                denominator: denominator.checked_neg().ok_or(MoneyError::Overflow)?,
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn numerator(&self) -> i128 {
        self.numerator
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub const fn denominator(&self) -> i128 {
        self.denominator
    }

    /// Returns true if the fraction is a whole number.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.numerator % self.denominator == 0
    }

    /// Returns `denominator / numerator`.
    pub fn reciprocal(&self) -> MoneyResult<Self> {
        Self::new(self.denominator, self.numerator)
    }
}

/// A validated decimal literal: `digits / 10^scale`.
///
/// Equality is structural, so `"1.0"` and `"1"` are different literals with
/// the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DecimalLiteral {
    digits: i128,
    scale: u32,
}

impl DecimalLiteral {
    /// Zero with no fractional digits.
    pub const ZERO: Self = Self {
        digits: 0,
        scale: 0,
    };

    /// One with no fractional digits.
    pub const ONE: Self = Self {
        digits: 1,
        scale: 0,
    };

    /// Builds a literal from raw digits and scale.
    pub fn new(digits: i128, scale: u32) -> MoneyResult<Self> {
        if scale > MAX_SCALE {
            return Err(MoneyError::Overflow);
        }
        Ok(Self { digits, scale })
    }

    /// Parses decimal text.
    ///
    /// Rejects exponents, more than one decimal point, signs other than a
    /// single leading `-`, separators, whitespace, and empty digit groups.
    pub fn parse(input: &str) -> MoneyResult<Self> {
        if input.contains(['e', 'E']) {
            return Err(MoneyError::invalid_format(
                input,
                "scientific notation not supported",
            ));
        }

        let (negative, body) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let mut parts = body.split('.');
        let int_part = parts.next().unwrap_or_default();
        let frac_part = parts.next().unwrap_or_default();
        if parts.next().is_some() {
            return Err(MoneyError::invalid_format(input, "multiple decimal points"));
        }

        if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(MoneyError::invalid_format(input, "invalid characters"));
        }
        if int_part.is_empty() || (body.contains('.') && frac_part.is_empty()) {
            return Err(MoneyError::invalid_format(input, "missing digits"));
        }

        let scale = u32::try_from(frac_part.len()).map_err(|_| MoneyError::Overflow)?;
        if scale > MAX_SCALE {
            return Err(MoneyError::Overflow);
        }

        let magnitude = int_part
            .bytes()
            .chain(frac_part.bytes())
            .try_fold(0i128, |acc, b| {
                acc.checked_mul(10)
                    .and_then(|v| v.checked_add(i128::from(b - b'0')))
            })
            .ok_or(MoneyError::Overflow)?;

        let digits = if negative { -magnitude } else { magnitude };
        Ok(Self { digits, scale })
    }

    /// Returns the unscaled digits.
    #[must_use]
    pub const fn digits(&self) -> i128 {
        self.digits
    }

    /// Returns the number of fractional digits.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns true if the value is exactly zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.digits == 0
    }

    /// Returns true if the value is below zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.digits < 0
    }

    /// Returns the exact fraction `digits / 10^scale` in lowest terms.
    ///
    /// `"1.000"` and `"1"` both yield `1/1`.
    #[must_use]
    pub fn rational(&self) -> Rational {
        // `scale <= MAX_SCALE` is enforced by every constructor.
        let denominator = 10i128.pow(self.scale);
        // The divisor divides a positive i128, so it fits back into one.
        let divisor = i128::try_from(gcd(self.digits, denominator)).unwrap_or(1);
        Rational {
            numerator: self.digits / divisor,
            denominator: denominator / divisor,
        }
    }

    /// Returns the same value with trailing fractional zeros removed.
    ///
    /// `"2.500"` becomes `"2.5"`; `"0.00"` becomes `"0"`.
    #[must_use]
    pub const fn normalized(&self) -> Self {
        let mut digits = self.digits;
        let mut scale = self.scale;
        while scale > 0 && digits % 10 == 0 {
            digits /= 10;
            scale -= 1;
        }
        Self { digits, scale }
    }

    /// Returns the digits expressed at a larger scale.
    ///
    /// `"1.5"` at scale 3 is `1500`. Fails with `InvalidPrecision` when the
    /// target scale is smaller than the literal's own.
    pub fn rescaled(&self, target_scale: u32) -> MoneyResult<i128> {
        if target_scale < self.scale {
            return Err(MoneyError::InvalidPrecision {
                scale: self.scale,
                decimals: target_scale,
            });
        }
        self.digits
            .checked_mul(pow10(target_scale - self.scale)?)
            .ok_or(MoneyError::Overflow)
    }
}

impl FromStr for DecimalLiteral {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for DecimalLiteral {
    type Error = MoneyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for DecimalLiteral {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// Converts through the float's shortest round-trip decimal text.
///
/// Exact for that text, which may differ from the value the caller had in
/// mind when the float cannot represent it. Pass strings when it matters.
impl TryFrom<f64> for DecimalLiteral {
    type Error = MoneyError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let text = value.to_string();
        if !value.is_finite() {
            return Err(MoneyError::invalid_format(&text, "not a finite number"));
        }
        Self::parse(&text)
    }
}

impl From<i64> for DecimalLiteral {
    fn from(value: i64) -> Self {
        Self {
            digits: i128::from(value),
            scale: 0,
        }
    }
}

impl From<i32> for DecimalLiteral {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<u32> for DecimalLiteral {
    fn from(value: u32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<Decimal> for DecimalLiteral {
    fn from(value: Decimal) -> Self {
        Self {
            digits: value.mantissa(),
            scale: value.scale(),
        }
    }
}

impl From<DecimalLiteral> for String {
    fn from(value: DecimalLiteral) -> Self {
        value.to_string()
    }
}

/// Renders `digits / 10^scale` in plain positional notation.
pub(crate) fn format_scaled(digits: i128, scale: u32) -> String {
    let sign = if digits < 0 { "-" } else { "" };
    let magnitude = digits.unsigned_abs().to_string();
    if scale == 0 {
        return format!("{sign}{magnitude}");
    }
    let scale = scale as usize;
    let padded = format!("{magnitude:0>width$}", width = scale + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - scale);
    format!("{sign}{int_part}.{frac_part}")
}

/// Writes `digits / 10^scale` in plain positional notation.
pub(crate) fn write_scaled(f: &mut fmt::Formatter<'_>, digits: i128, scale: u32) -> fmt::Result {
    f.write_str(&format_scaled(digits, scale))
}

impl fmt::Display for DecimalLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scaled(f, self.digits, self.scale)
    }
}
