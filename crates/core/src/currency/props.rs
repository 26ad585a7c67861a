//! Property-based tests for currency operations.
//!
//! - Property 15: Same-currency conversion is the identity
//! - Property 16: Widening then narrowing at rate 1 restores the amount
//! - Property 17: Conversion rounds within one unit of exact
//! - Property 18: Registry restore round trip

use proptest::prelude::*;

use super::{Converter, CurrencyRegistry};
use crate::money::Money;
use crate::rational::DecimalLiteral;
use crate::rounding::RoundingMode;
use monetra_shared::types::currency::{EUR, JPY, KWD, USD};

/// Strategy to generate minor-unit amounts (both signs).
fn minor() -> impl Strategy<Value = i128> {
    (-1_000_000_000_000i64..1_000_000_000_000i64).prop_map(i128::from)
}

/// Strategy to generate positive rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = DecimalLiteral> {
    (1i64..100_000_000i64).prop_map(|v| DecimalLiteral::new(i128::from(v), 4).unwrap())
}

/// Strategy to generate any rounding mode.
fn mode() -> impl Strategy<Value = RoundingMode> {
    prop::sample::select(RoundingMode::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 15: converting into the same currency changes nothing.
    #[test]
    fn prop_same_currency_identity(a in minor(), rate in positive_rate(), mode in mode()) {
        let converter = Converter::new("USD", [("EUR".to_string(), rate)]).unwrap();
        let money = Money::from_minor(a, EUR);
        prop_assert_eq!(converter.convert(&money, &EUR, mode).unwrap(), money);
    }

    /// Property 16: USD -> KWD -> USD at rate 1 is lossless.
    #[test]
    fn prop_widen_narrow_round_trip(a in minor(), mode in mode()) {
        let converter = Converter::new("USD", [("KWD".to_string(), DecimalLiteral::ONE)]).unwrap();
        let money = Money::from_minor(a, USD);
        let widened = converter.convert(&money, &KWD, mode).unwrap();
        prop_assert_eq!(widened.minor(), a * 10);
        let back = converter.convert(&widened, &USD, mode).unwrap();
        prop_assert_eq!(back, money);
    }

    /// Property 17: FLOOR and CEIL results bracket each other within one unit,
    /// and every mode lands between them.
    #[test]
    fn prop_conversion_within_one_unit(
        a in minor(),
        rate in positive_rate(),
        mode in mode(),
    ) {
        let converter = Converter::new("USD", [("JPY".to_string(), rate)]).unwrap();
        let money = Money::from_minor(a, USD);
        let floor = converter.convert(&money, &JPY, RoundingMode::Floor).unwrap().minor();
        let ceil = converter.convert(&money, &JPY, RoundingMode::Ceil).unwrap().minor();
        let rounded = converter.convert(&money, &JPY, mode).unwrap().minor();
        prop_assert!(ceil - floor <= 1);
        prop_assert!(floor <= rounded && rounded <= ceil);
    }

    /// Property 18: a serialized value restores to an equal value.
    #[test]
    fn prop_restore_round_trip(a in minor()) {
        let registry = CurrencyRegistry::with_iso();
        for code in ["USD", "JPY", "KWD"] {
            let money = registry.money_from_minor(a, code).unwrap();
            prop_assert_eq!(registry.restore(&money.to_repr()).unwrap(), money);
        }
    }
}
