//! Money error taxonomy.
//!
//! Every arithmetic entry point is fallible. Errors are local to a single
//! call: values are immutable, so there is never anything to roll back, and
//! retrying with the same inputs always fails the same way.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money arithmetic and its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Arithmetic Errors ==========
    /// Two values reference different currency codes.
    #[error("Currency mismatch: expected {expected}, received {actual}")]
    CurrencyMismatch {
        /// Code of the receiver.
        expected: String,
        /// Code of the argument.
        actual: String,
    },

    /// The exact result is fractional and no rounding mode was supplied.
    #[error("Rounding is required for {operation} (approximate result {approximate})")]
    RoundingRequired {
        /// Operation that needed rounding ("multiply", "divide", ...).
        operation: &'static str,
        /// Truncated result, for diagnostics only.
        approximate: i128,
    },

    /// Divisor is exactly zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Result does not fit in 128-bit minor units.
    #[error("Arithmetic overflow")]
    Overflow,

    // ========== Input Errors ==========
    /// Decimal literal is malformed.
    #[error("Invalid number format '{input}': {reason}")]
    InvalidFormat {
        /// Offending input text.
        input: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Amount has more fractional digits than the currency allows.
    #[error("Precision {scale} exceeds currency decimals {decimals}")]
    InvalidPrecision {
        /// Fractional digits supplied.
        scale: u32,
        /// Fractional digits the currency allows.
        decimals: u32,
    },

    /// Lower bound of a range lies above its upper bound.
    #[error("Invalid range: minimum {min} is greater than maximum {max}")]
    InvalidRange {
        /// Lower bound, as displayed.
        min: String,
        /// Upper bound, as displayed.
        max: String,
    },

    /// Rounding mode name is not recognised.
    #[error("Unsupported rounding mode: {0}")]
    UnsupportedRoundingMode(String),

    // ========== Allocation Errors ==========
    /// No ratios were supplied.
    #[error("Cannot allocate with empty ratios")]
    EmptyRatios,

    /// Ratios sum to zero.
    #[error("Total ratio must be greater than zero")]
    ZeroTotalRatio,

    /// A ratio is negative.
    #[error("Ratio cannot be negative: {0}")]
    NegativeRatio(String),

    // ========== Registry Errors ==========
    /// Currency code is not registered.
    #[error("Currency not found: {0}")]
    CurrencyNotFound(String),

    /// Code is already registered with different metadata.
    #[error("Currency {0} is already registered with different metadata")]
    CurrencyConflict(String),

    // ========== Conversion Errors ==========
    /// No exchange rate is known for the pair.
    #[error("No exchange rate found for {from} to {to}")]
    MissingExchangeRate {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
    },

    /// Exchange rate must be positive.
    #[error("Exchange rate for {0} must be positive")]
    InvalidExchangeRate(String),
}

impl MoneyError {
    /// Builds a currency mismatch error from two codes.
    #[must_use]
    pub fn mismatch(expected: &str, actual: &str) -> Self {
        Self::CurrencyMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Builds an invalid format error.
    #[must_use]
    pub fn invalid_format(input: &str, reason: &'static str) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            reason,
        }
    }

    /// Returns the stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::RoundingRequired { .. } => "ROUNDING_REQUIRED",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Overflow => "OVERFLOW",
            Self::InvalidFormat { .. } => "INVALID_FORMAT",
            Self::InvalidPrecision { .. } => "INVALID_PRECISION",
            Self::InvalidRange { .. } => "INVALID_RANGE",
            Self::UnsupportedRoundingMode(_) => "UNSUPPORTED_ROUNDING_MODE",
            Self::EmptyRatios => "EMPTY_RATIOS",
            Self::ZeroTotalRatio => "ZERO_TOTAL_RATIO",
            Self::NegativeRatio(_) => "NEGATIVE_RATIO",
            Self::CurrencyNotFound(_) => "CURRENCY_NOT_FOUND",
            Self::CurrencyConflict(_) => "CURRENCY_CONFLICT",
            Self::MissingExchangeRate { .. } => "MISSING_EXCHANGE_RATE",
            Self::InvalidExchangeRate(_) => "INVALID_EXCHANGE_RATE",
        }
    }

    /// Returns true for errors that indicate a programming error rather
    /// than bad input.
    #[must_use]
    pub const fn is_programming_error(&self) -> bool {
        matches!(self, Self::UnsupportedRoundingMode(_) | Self::Overflow)
    }
}
