//! A per-currency accumulator of money values.

use std::collections::BTreeMap;

use monetra_shared::{Currency, MoneyResult};
use serde::{Serialize, Serializer};

use super::repr::MoneyRepr;
use super::value::Money;
use crate::currency::Converter;
use crate::rounding::RoundingMode;

/// Holds one running balance per currency code, like a wallet.
///
/// Balances never mix: adding EUR to a bag holding USD opens a second
/// balance rather than converting.
#[derive(Debug, Clone, Default)]
pub struct MoneyBag {
    contents: BTreeMap<String, Money>,
}

impl MoneyBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an amount to the balance of its currency.
    pub fn add(&mut self, money: &Money) -> MoneyResult<()> {
        let code = money.currency().code.to_string();
        let updated = match self.contents.get(&code) {
            Some(existing) => existing.add(money)?,
            None => money.clone(),
        };
        self.contents.insert(code, updated);
        Ok(())
    }

    /// Subtracts an amount; an absent currency starts from zero.
    pub fn subtract(&mut self, money: &Money) -> MoneyResult<()> {
        let code = money.currency().code.to_string();
        let updated = match self.contents.get(&code) {
            Some(existing) => existing.subtract(money)?,
            None => Money::zero(money.currency().clone()).subtract(money)?,
        };
        self.contents.insert(code, updated);
        Ok(())
    }

    /// Returns the balance for a currency, zero if the bag has none.
    #[must_use]
    pub fn get(&self, currency: &Currency) -> Money {
        self.contents
            .get(currency.code())
            .cloned()
            .unwrap_or_else(|| Money::zero(currency.clone()))
    }

    /// Converts every balance to `target` and sums them.
    ///
    /// Each balance is rounded once, on conversion.
    pub fn total(
        &self,
        target: &Currency,
        converter: &Converter,
        rounding: RoundingMode,
    ) -> MoneyResult<Money> {
        self.contents
            .values()
            .try_fold(Money::zero(target.clone()), |total, money| {
                total.add(&converter.convert(money, target, rounding)?)
            })
    }

    /// Iterates balances in currency-code order.
    pub fn iter(&self) -> impl Iterator<Item = &Money> {
        self.contents.values()
    }

    /// Returns the number of currencies held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Returns true if the bag holds no balances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Returns the serialized form of every balance.
    #[must_use]
    pub fn to_repr(&self) -> Vec<MoneyRepr> {
        self.contents.values().map(MoneyRepr::from).collect()
    }
}

impl Serialize for MoneyBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.contents.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::DecimalLiteral;
    use monetra_shared::types::currency::{EUR, JPY, USD};

    fn converter() -> Converter {
        Converter::new(
            "USD",
            [
                ("EUR".to_string(), "0.5".parse::<DecimalLiteral>().unwrap()),
                ("JPY".to_string(), "150".parse::<DecimalLiteral>().unwrap()),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_add_to_bag() {
        let mut bag = MoneyBag::new();
        bag.add(&Money::from_major("100", USD).unwrap()).unwrap();
        assert_eq!(bag.get(&USD).minor(), 10_000);
    }

    #[test]
    fn test_add_accumulates_per_currency() {
        let mut bag = MoneyBag::new();
        bag.add(&Money::from_minor(100, USD)).unwrap();
        bag.add(&Money::from_minor(250, USD)).unwrap();
        bag.add(&Money::from_minor(700, EUR)).unwrap();
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.get(&USD).minor(), 350);
        assert_eq!(bag.get(&EUR).minor(), 700);
    }

    #[test]
    fn test_subtract_from_absent_currency() {
        let mut bag = MoneyBag::new();
        bag.subtract(&Money::from_minor(500, JPY)).unwrap();
        assert_eq!(bag.get(&JPY).minor(), -500);
    }

    #[test]
    fn test_get_missing_is_zero() {
        let bag = MoneyBag::new();
        assert!(bag.is_empty());
        assert!(bag.get(&EUR).is_zero());
        assert_eq!(bag.get(&EUR).currency(), &EUR);
    }

    #[test]
    fn test_total() {
        let mut bag = MoneyBag::new();
        bag.add(&Money::from_minor(1000, USD)).unwrap(); // 10.00 USD
        bag.add(&Money::from_minor(1000, EUR)).unwrap(); // 10.00 EUR = 20.00 USD
        bag.add(&Money::from_minor(1500, JPY)).unwrap(); // 1500 JPY = 10.00 USD
        let total = bag.total(&USD, &converter(), RoundingMode::HalfEven).unwrap();
        assert_eq!(total.minor(), 4000);
        assert_eq!(total.currency(), &USD);
    }

    #[test]
    fn test_total_missing_rate() {
        let mut bag = MoneyBag::new();
        bag.add(&Money::from_minor(1000, monetra_shared::types::currency::GBP))
            .unwrap();
        assert!(bag.total(&USD, &converter(), RoundingMode::HalfEven).is_err());
    }

    #[test]
    fn test_serialize() {
        let mut bag = MoneyBag::new();
        bag.add(&Money::from_minor(1050, USD)).unwrap();
        bag.add(&Money::from_minor(99, EUR)).unwrap();
        let json = serde_json::to_value(&bag).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "amount": "99", "currency": "EUR", "precision": 2 },
                { "amount": "1050", "currency": "USD", "precision": 2 },
            ])
        );
        assert_eq!(bag.to_repr().len(), 2);
        assert_eq!(bag.iter().count(), 2);
    }
}
