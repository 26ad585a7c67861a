//! Exchange rate types.

use monetra_shared::MoneyResult;

use crate::rational::Rational;

/// Exchange rate between two currencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRate {
    /// Source currency code.
    pub from_currency: String,
    /// Target currency code.
    pub to_currency: String,
    /// Exchange rate (1 from_currency = rate to_currency), kept exact.
    pub rate: Rational,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub const fn new(from_currency: String, to_currency: String, rate: Rational) -> Self {
        Self {
            from_currency,
            to_currency,
            rate,
        }
    }

    /// Returns the inverse rate.
    ///
    /// Fails with `DivisionByZero` for a zero rate.
    pub fn inverse(&self) -> MoneyResult<Self> {
        Ok(Self {
            from_currency: self.to_currency.clone(),
            to_currency: self.from_currency.clone(),
            rate: self.rate.reciprocal()?,
        })
    }
}
