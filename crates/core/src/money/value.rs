//! The immutable money value.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use monetra_shared::{Currency, MoneyError, MoneyResult};
use rust_decimal::Decimal;
use serde::Serialize;

use super::arithmetic;
use super::repr::MoneyRepr;
use crate::allocation::AllocationUtil;
use crate::rational::{DecimalLiteral, format_scaled, pow10, write_scaled};
use crate::rounding::RoundingMode;

/// Represents a monetary amount in a specific currency.
///
/// The amount is an integer count of minor units (cents, yen, fils), so
/// `minor / 10^decimals` is the value in major units. Every operation returns
/// a new value; nothing is mutated in place.
#[derive(Debug, Clone, Serialize)]
#[serde(into = "MoneyRepr")]
pub struct Money {
    minor: i128,
    currency: Currency,
}

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ```
    /// use monetra_core::{Money, iso::USD};
    ///
    /// let m = Money::from_minor(100, USD); // $1.00
    /// assert_eq!(m.minor(), 100);
    /// ```
    #[must_use]
    pub fn from_minor(minor: impl Into<i128>, currency: Currency) -> Self {
        Self {
            minor: minor.into(),
            currency,
        }
    }

    /// Creates a Money value from a major-unit decimal string such as `"10.50"`.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` for malformed text, `InvalidPrecision` when the text
    /// has more fractional digits than the currency allows.
    pub fn from_major(amount: &str, currency: Currency) -> MoneyResult<Self> {
        let literal = DecimalLiteral::parse(amount)?;
        let minor = literal.rescaled(currency.decimals)?;
        Ok(Self { minor, currency })
    }

    /// Creates a Money value from a float, through its decimal text.
    ///
    /// The float's shortest round-trip text is taken as the intended value.
    /// Extra fractional digits beyond the currency's need `rounding`.
    pub fn from_float(
        amount: f64,
        currency: Currency,
        rounding: Option<RoundingMode>,
    ) -> MoneyResult<Self> {
        tracing::warn!(
            amount,
            currency = %currency.code,
            "Creating money from a float; pass a decimal string for exact input"
        );
        let literal = DecimalLiteral::try_from(amount)?;
        let minor = if literal.scale() <= currency.decimals {
            literal.rescaled(currency.decimals)?
        } else {
            let excess = pow10(literal.scale() - currency.decimals)?;
            arithmetic::resolve("from_float", literal.digits(), excess, rounding)?
        };
        Ok(Self { minor, currency })
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self { minor: 0, currency }
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub const fn minor(&self) -> i128 {
        self.minor
    }

    /// Returns the currency.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency.same_code(&other.currency) {
            Ok(())
        } else {
            Err(MoneyError::mismatch(&self.currency.code, &other.currency.code))
        }
    }

    fn with_minor(&self, minor: i128) -> Self {
        Self {
            minor,
            currency: self.currency.clone(),
        }
    }

    /// Adds another Money value of the same currency.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        Ok(self.with_minor(arithmetic::add(self.minor, other.minor)?))
    }

    /// Subtracts another Money value of the same currency.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        Ok(self.with_minor(arithmetic::subtract(self.minor, other.minor)?))
    }

    /// Multiplies by an exact decimal.
    ///
    /// Fails with `RoundingRequired` if the result is fractional and no
    /// rounding mode was supplied.
    ///
    /// ```
    /// use monetra_core::{Money, RoundingMode, iso::USD};
    ///
    /// let m = Money::from_minor(100, USD);
    /// let factor = "0.555".parse().unwrap();
    /// assert!(m.multiply(factor, None).is_err());
    /// assert_eq!(m.multiply(factor, Some(RoundingMode::HalfUp)).unwrap().minor(), 56);
    /// ```
    pub fn multiply(
        &self,
        multiplier: DecimalLiteral,
        rounding: Option<RoundingMode>,
    ) -> MoneyResult<Self> {
        Ok(self.with_minor(arithmetic::multiply(self.minor, multiplier, rounding)?))
    }

    /// Divides by an exact decimal.
    ///
    /// Fails with `DivisionByZero` for a zero divisor and `RoundingRequired`
    /// if the result is fractional and no rounding mode was supplied.
    pub fn divide(
        &self,
        divisor: DecimalLiteral,
        rounding: Option<RoundingMode>,
    ) -> MoneyResult<Self> {
        Ok(self.with_minor(arithmetic::divide(self.minor, divisor, rounding)?))
    }

    /// Returns `percent`% of this value.
    ///
    /// Always rounds once with `rounding`; `RoundingMode::HalfEven` is the
    /// usual choice.
    ///
    /// ```
    /// use monetra_core::{Money, RoundingMode, iso::USD};
    ///
    /// let m = Money::from_minor(1000, USD);
    /// let tip = m.percentage("12.5".parse().unwrap(), RoundingMode::HalfEven).unwrap();
    /// assert_eq!(tip.minor(), 125);
    /// ```
    pub fn percentage(&self, percent: DecimalLiteral, rounding: RoundingMode) -> MoneyResult<Self> {
        Ok(self.with_minor(arithmetic::percentage(self.minor, percent, rounding)?))
    }

    /// Adds `percent`% of this value to itself.
    pub fn add_percent(&self, percent: DecimalLiteral, rounding: RoundingMode) -> MoneyResult<Self> {
        self.add(&self.percentage(percent, rounding)?)
    }

    /// Subtracts `percent`% of this value from itself.
    pub fn subtract_percent(
        &self,
        percent: DecimalLiteral,
        rounding: RoundingMode,
    ) -> MoneyResult<Self> {
        self.subtract(&self.percentage(percent, rounding)?)
    }

    /// Limits this value to the inclusive range `[min, max]`.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` when either bound has another currency,
    /// `InvalidRange` when `min` is greater than `max`.
    pub fn clamp(&self, min: &Self, max: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(min)?;
        self.ensure_same_currency(max)?;
        if min.minor > max.minor {
            return Err(MoneyError::InvalidRange {
                min: min.to_decimal_string(),
                max: max.to_decimal_string(),
            });
        }
        Ok(self.with_minor(self.minor.clamp(min.minor, max.minor)))
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.with_minor(self.minor.saturating_abs())
    }

    /// Returns the value with its sign flipped.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.with_minor(self.minor.saturating_neg())
    }

    /// Orders two values of the same currency.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.minor.cmp(&other.minor))
    }

    /// Returns true if amounts and currency codes are equal.
    ///
    /// Unlike the ordered comparisons, a currency mismatch is simply unequal.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.currency.same_code(&other.currency) && self.minor == other.minor
    }

    /// Returns true if this value is greater than `other`.
    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_gt())
    }

    /// Returns true if this value is greater than or equal to `other`.
    pub fn greater_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_ge())
    }

    /// Returns true if this value is less than `other`.
    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_lt())
    }

    /// Returns true if this value is less than or equal to `other`.
    pub fn less_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_le())
    }

    /// Returns the smallest value, or `None` for an empty slice.
    pub fn min(values: &[Self]) -> MoneyResult<Option<Self>> {
        Self::pick(values, Ordering::Less)
    }

    /// Returns the largest value, or `None` for an empty slice.
    pub fn max(values: &[Self]) -> MoneyResult<Option<Self>> {
        Self::pick(values, Ordering::Greater)
    }

    fn pick(values: &[Self], wanted: Ordering) -> MoneyResult<Option<Self>> {
        let Some((first, rest)) = values.split_first() else {
            return Ok(None);
        };
        let mut best = first;
        for current in rest {
            if current.compare(best)? == wanted {
                best = current;
            }
        }
        Ok(Some(best.clone()))
    }

    /// Splits this value by ratios; the parts always sum to the original.
    pub fn allocate(&self, ratios: &[DecimalLiteral]) -> MoneyResult<Vec<Self>> {
        let shares = AllocationUtil::allocate(self.minor, ratios)?;
        Ok(shares.into_iter().map(|share| self.with_minor(share)).collect())
    }

    /// Splits this value into `count` equal parts, earlier parts taking the
    /// leftover units.
    pub fn allocate_equal(&self, count: usize) -> MoneyResult<Vec<Self>> {
        let shares = AllocationUtil::allocate_equal(self.minor, count)?;
        Ok(shares.into_iter().map(|share| self.with_minor(share)).collect())
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.minor == 0
    }

    /// Returns true if the amount is below zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.minor < 0
    }

    /// Returns true if the amount is above zero.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.minor > 0
    }

    /// Returns the value in major units.
    ///
    /// Fails with `Overflow` past `Decimal`'s 96-bit mantissa or 28-digit
    /// scale.
    pub fn to_decimal(&self) -> MoneyResult<Decimal> {
        Decimal::try_from_i128_with_scale(self.minor, self.currency.decimals)
            .map_err(|_| MoneyError::Overflow)
    }

    /// Returns the amount in major units as plain text, without the code.
    ///
    /// `"10.50"`, `"-0.05"`, `"1500"`. Use `Display` for `"10.50 USD"`.
    #[must_use]
    pub fn to_decimal_string(&self) -> String {
        format_scaled(self.minor, self.currency.decimals)
    }

    /// Returns the serialized representation.
    #[must_use]
    pub fn to_repr(&self) -> MoneyRepr {
        MoneyRepr::from(self)
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.minor.hash(state);
        self.currency.code.hash(state);
    }
}

/// Plain, locale-free rendering: `10.50 USD`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scaled(f, self.minor, self.currency.decimals)?;
        write!(f, " {}", self.currency.code)
    }
}
