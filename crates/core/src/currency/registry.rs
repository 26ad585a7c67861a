//! Currency registry.
//!
//! An explicit, caller-owned map from code to metadata. Registration is
//! append-only: once a code is known its decimals can never change, because
//! every stored amount is interpreted through them.

use std::collections::BTreeMap;

use monetra_shared::config::RegistryConfig;
use monetra_shared::types::currency::ISO_CURRENCIES;
use monetra_shared::{Currency, MoneyError, MoneyResult};

use crate::money::{Money, MoneyRepr};
use crate::rational::MAX_SCALE;

/// Lookup table of known currencies.
#[derive(Debug, Clone, Default)]
pub struct CurrencyRegistry {
    currencies: BTreeMap<String, Currency>,
}

impl CurrencyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry preloaded with the built-in ISO 4217 currencies.
    #[must_use]
    pub fn with_iso() -> Self {
        let currencies = ISO_CURRENCIES
            .iter()
            .map(|currency| (currency.code.to_string(), currency.clone()))
            .collect();
        Self { currencies }
    }

    /// Builds a registry from configuration.
    ///
    /// Configured codes are upper-cased before registration.
    pub fn from_config(config: &RegistryConfig) -> MoneyResult<Self> {
        let mut registry = if config.include_iso {
            Self::with_iso()
        } else {
            Self::new()
        };
        for entry in &config.currencies {
            registry.register(Currency::new(
                entry.code.to_uppercase(),
                entry.decimals,
                entry.symbol.clone(),
                entry.locale.clone(),
            ))?;
        }
        Ok(registry)
    }

    /// Registers a currency.
    ///
    /// Re-registering identical metadata is a no-op.
    ///
    /// # Errors
    ///
    /// `CurrencyConflict` when the code is known with different metadata,
    /// `InvalidPrecision` when `decimals` exceeds the supported scale.
    pub fn register(&mut self, currency: Currency) -> MoneyResult<()> {
        if currency.decimals > MAX_SCALE {
            return Err(MoneyError::InvalidPrecision {
                scale: currency.decimals,
                decimals: MAX_SCALE,
            });
        }
        if let Some(existing) = self.currencies.get(currency.code()) {
            if *existing == currency {
                return Ok(());
            }
            tracing::warn!(
                code = %currency.code,
                registered_decimals = existing.decimals,
                requested_decimals = currency.decimals,
                "Refusing to redefine currency"
            );
            return Err(MoneyError::CurrencyConflict(currency.code.to_string()));
        }
        tracing::debug!(code = %currency.code, decimals = currency.decimals, "Registered currency");
        self.currencies.insert(currency.code.to_string(), currency);
        Ok(())
    }

    /// Returns the currency registered under `code`.
    pub fn lookup(&self, code: &str) -> MoneyResult<&Currency> {
        self.currencies
            .get(code)
            .ok_or_else(|| MoneyError::CurrencyNotFound(code.to_string()))
    }

    /// Returns true if `code` is registered.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.currencies.contains_key(code)
    }

    /// Returns the registered codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.currencies.keys().map(String::as_str)
    }

    /// Returns the number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Resolves `code` and builds a value from minor units.
    pub fn money_from_minor(&self, minor: i128, code: &str) -> MoneyResult<Money> {
        Ok(Money::from_minor(minor, self.lookup(code)?.clone()))
    }

    /// Resolves `code` and builds a value from a major-unit string.
    pub fn money_from_major(&self, amount: &str, code: &str) -> MoneyResult<Money> {
        Money::from_major(amount, self.lookup(code)?.clone())
    }

    /// Rebuilds a value from its serialized form.
    ///
    /// # Errors
    ///
    /// `CurrencyNotFound` for an unknown code, `InvalidFormat` for a
    /// non-integer amount, and `InvalidPrecision` when the recorded precision
    /// no longer matches the registered decimals.
    pub fn restore(&self, repr: &MoneyRepr) -> MoneyResult<Money> {
        let currency = self.lookup(&repr.currency)?;
        if repr.precision != currency.decimals {
            return Err(MoneyError::InvalidPrecision {
                scale: repr.precision,
                decimals: currency.decimals,
            });
        }
        Ok(Money::from_minor(repr.minor()?, currency.clone()))
    }
}
