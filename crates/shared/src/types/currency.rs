//! Currency metadata.
//!
//! A currency is identified by its code and carries the number of fractional
//! digits that define its minor unit. Metadata is immutable once created:
//! changing `decimals` for a code would silently reinterpret every amount
//! stored against it.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Metadata describing a currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    /// Unique currency code (e.g., "USD", "JPY").
    pub code: Cow<'static, str>,
    /// Number of fractional digits of the minor unit (2 for cents, 0 for yen).
    pub decimals: u32,
    /// Display symbol (e.g., "$").
    pub symbol: Cow<'static, str>,
    /// Locale hint for formatting layers (e.g., "en-US").
    pub locale: Cow<'static, str>,
}

impl Currency {
    /// Creates a currency from owned metadata.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        decimals: u32,
        symbol: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            code: Cow::Owned(code.into()),
            decimals,
            symbol: Cow::Owned(symbol.into()),
            locale: Cow::Owned(locale.into()),
        }
    }

    const fn builtin(
        code: &'static str,
        decimals: u32,
        symbol: &'static str,
        locale: &'static str,
    ) -> Self {
        Self {
            code: Cow::Borrowed(code),
            decimals,
            symbol: Cow::Borrowed(symbol),
            locale: Cow::Borrowed(locale),
        }
    }

    /// Returns the currency code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns true if both currencies share the same code.
    #[must_use]
    pub fn same_code(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

/// US Dollar
pub const USD: Currency = Currency::builtin("USD", 2, "$", "en-US");
/// Euro
pub const EUR: Currency = Currency::builtin("EUR", 2, "€", "de-DE");
/// British Pound Sterling
pub const GBP: Currency = Currency::builtin("GBP", 2, "£", "en-GB");
/// Japanese Yen
pub const JPY: Currency = Currency::builtin("JPY", 0, "¥", "ja-JP");
/// South African Rand
pub const ZAR: Currency = Currency::builtin("ZAR", 2, "R", "en-ZA");
/// Indian Rupee
pub const INR: Currency = Currency::builtin("INR", 2, "₹", "en-IN");
/// Indonesian Rupiah
pub const IDR: Currency = Currency::builtin("IDR", 2, "Rp", "id-ID");
/// Singapore Dollar
pub const SGD: Currency = Currency::builtin("SGD", 2, "S$", "en-SG");
/// Swiss Franc
pub const CHF: Currency = Currency::builtin("CHF", 2, "CHF", "de-CH");
/// Kuwaiti Dinar
pub const KWD: Currency = Currency::builtin("KWD", 3, "KD", "ar-KW");
/// Bahraini Dinar
pub const BHD: Currency = Currency::builtin("BHD", 3, "BD", "ar-BH");

/// All built-in ISO 4217 currencies, in registration order.
pub static ISO_CURRENCIES: [Currency; 11] = [USD, EUR, GBP, JPY, ZAR, INR, IDR, SGD, CHF, KWD, BHD];
