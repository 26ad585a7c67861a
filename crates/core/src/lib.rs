//! Core monetary arithmetic for Monetra.
//!
//! This crate contains pure arithmetic with ZERO I/O dependencies.
//! Amounts are integers in minor units; fractional inputs are exact
//! rationals; rounding only ever happens when the caller names a mode.
//!
//! # Modules
//!
//! - `rational` - Decimal literal parsing into exact fractions
//! - `rounding` - Rounding modes and integer division with rounding
//! - `allocation` - Largest Remainder apportionment
//! - `money` - The immutable `Money` value, its serialized form, and `MoneyBag`
//! - `currency` - Currency registry and exchange-rate conversion

pub mod allocation;
pub mod currency;
pub mod money;
pub mod rational;
pub mod rounding;

pub use currency::{Converter, CurrencyRegistry, ExchangeRate};
pub use money::{Money, MoneyBag, MoneyRepr};
pub use monetra_shared::types::currency as iso;
pub use monetra_shared::{Currency, MoneyError, MoneyResult};
pub use rational::{DecimalLiteral, Rational};
pub use rounding::{RoundingMode, divide_with_rounding};
