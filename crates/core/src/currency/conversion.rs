//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - The rate ratio and the decimals shift form one exact fraction
//! - That fraction is rounded exactly once, in the caller's mode
//! - Converting within one currency never rounds

use std::collections::BTreeMap;

use monetra_shared::config::ConversionConfig;
use monetra_shared::{Currency, MoneyError, MoneyResult};

use super::exchange::ExchangeRate;
use crate::money::Money;
use crate::rational::{DecimalLiteral, Rational, pow10};
use crate::rounding::{RoundingMode, divide_with_rounding};

/// Converts money between currencies using rates quoted against a base.
///
/// Every rate reads "1 base = rate target"; the base itself is fixed at 1.
#[derive(Debug, Clone)]
pub struct Converter {
    base: String,
    rates: BTreeMap<String, Rational>,
}

impl Converter {
    /// Creates a converter from a base code and its rates.
    ///
    /// # Errors
    ///
    /// `InvalidExchangeRate` when any rate is zero or negative.
    pub fn new(
        base: impl Into<String>,
        rates: impl IntoIterator<Item = (String, DecimalLiteral)>,
    ) -> MoneyResult<Self> {
        let base = base.into();
        let mut table = BTreeMap::new();
        for (code, rate) in rates {
            if rate.is_zero() || rate.is_negative() {
                return Err(MoneyError::InvalidExchangeRate(code));
            }
            table.insert(code, rate.rational());
        }
        table.insert(base.clone(), DecimalLiteral::ONE.rational());
        tracing::debug!(base = %base, rates = table.len(), "Built currency converter");
        Ok(Self { base, rates: table })
    }

    /// Builds a converter from configuration.
    ///
    /// Codes are upper-cased, since environment overrides arrive lower-cased.
    pub fn from_config(config: &ConversionConfig) -> MoneyResult<Self> {
        let rates = config
            .rates
            .iter()
            .map(|(code, rate)| Ok((code.to_uppercase(), DecimalLiteral::parse(rate)?)))
            .collect::<MoneyResult<Vec<_>>>()?;
        Self::new(config.base.to_uppercase(), rates)
    }

    /// Returns the base currency code.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    fn quote(&self, from: &str, to: &str, code: &str) -> MoneyResult<Rational> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| MoneyError::MissingExchangeRate {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Returns the exact cross rate `1 from = rate to`.
    pub fn rate(&self, from: &str, to: &str) -> MoneyResult<ExchangeRate> {
        let from_rate = self.quote(from, to, from)?;
        let to_rate = self.quote(from, to, to)?;
        // (tn / td) / (fn / fd) == (tn * fd) / (td * fn)
        let numerator = to_rate
            .numerator()
            .checked_mul(from_rate.denominator())
            .ok_or(MoneyError::Overflow)?;
        let denominator = to_rate
            .denominator()
            .checked_mul(from_rate.numerator())
            .ok_or(MoneyError::Overflow)?;
        Ok(ExchangeRate::new(
            from.to_string(),
            to.to_string(),
            Rational::new(numerator, denominator)?,
        ))
    }

    /// Converts `money` into `target`, rounding once with `rounding`.
    ///
    /// The result is `minor * rate * 10^(target.decimals - source.decimals)`
    /// computed exactly before rounding.
    ///
    /// # Errors
    ///
    /// `MissingExchangeRate` when either code has no rate, `Overflow` when an
    /// intermediate product leaves the `i128` range.
    pub fn convert(
        &self,
        money: &Money,
        target: &Currency,
        rounding: RoundingMode,
    ) -> MoneyResult<Money> {
        let source = money.currency();
        if source.same_code(target) {
            return Ok(money.clone());
        }

        let rate = self.rate(&source.code, &target.code)?.rate;
        let mut numerator = money
            .minor()
            .checked_mul(rate.numerator())
            .ok_or(MoneyError::Overflow)?;
        let mut denominator = rate.denominator();
        if target.decimals >= source.decimals {
            numerator = numerator
                .checked_mul(pow10(target.decimals - source.decimals)?)
                .ok_or(MoneyError::Overflow)?;
        } else {
            denominator = denominator
                .checked_mul(pow10(source.decimals - target.decimals)?)
                .ok_or(MoneyError::Overflow)?;
        }

        let minor = divide_with_rounding(numerator, denominator, rounding)?;
        tracing::debug!(
            from = %source.code,
            to = %target.code,
            source_minor = money.minor(),
            target_minor = minor,
            mode = %rounding,
            "Converted money"
        );
        Ok(Money::from_minor(minor, target.clone()))
    }
}
