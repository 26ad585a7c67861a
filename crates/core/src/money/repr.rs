//! Serialized money representation.
//!
//! `{ "amount": "1050", "currency": "USD", "precision": 2 }`: minor units as
//! a decimal integer string, then the currency code and its decimals at
//! serialization time. Restoring needs a registry to resolve the code; see
//! `CurrencyRegistry::restore`.

use monetra_shared::{MoneyError, MoneyResult};
use serde::{Deserialize, Serialize};

use super::value::Money;
use crate::rational::DecimalLiteral;

/// Wire form of a `Money` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRepr {
    /// Minor units as a decimal integer string.
    pub amount: String,
    /// Currency code.
    pub currency: String,
    /// Currency decimals at serialization time.
    pub precision: u32,
}

impl MoneyRepr {
    /// Parses `amount` as integer minor units.
    pub fn minor(&self) -> MoneyResult<i128> {
        let literal = DecimalLiteral::parse(&self.amount)?;
        if literal.scale() != 0 {
            return Err(MoneyError::invalid_format(
                &self.amount,
                "amount must be an integer count of minor units",
            ));
        }
        Ok(literal.digits())
    }
}

impl From<&Money> for MoneyRepr {
    fn from(money: &Money) -> Self {
        Self {
            amount: money.minor().to_string(),
            currency: money.currency().code.to_string(),
            precision: money.currency().decimals,
        }
    }
}

impl From<Money> for MoneyRepr {
    fn from(money: Money) -> Self {
        Self::from(&money)
    }
}
