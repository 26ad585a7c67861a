//! The `Money` value type and the things built directly on it.
//!
//! - `value` - Immutable `Money` (minor units + currency)
//! - `arithmetic` - Minor-unit add/subtract/multiply/divide
//! - `repr` - Serialized `{amount, currency, precision}` form
//! - `bag` - Multi-currency accumulator

pub mod arithmetic;
pub mod bag;
pub mod repr;
pub mod value;

#[cfg(test)]
mod props;

pub use bag::MoneyBag;
pub use repr::MoneyRepr;
pub use value::Money;
