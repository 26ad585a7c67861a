//! Currency registry, exchange rates, and conversion.

pub mod conversion;
pub mod exchange;
pub mod registry;

#[cfg(test)]
mod props;

pub use conversion::Converter;
pub use exchange::ExchangeRate;
pub use registry::CurrencyRegistry;
