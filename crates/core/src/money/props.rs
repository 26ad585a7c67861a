//! Property-based tests for `Money`.
//!
//! - Property 9: Additive inverse
//! - Property 10: Multiplying by one is the identity
//! - Property 11: HALF_UP products stay within half a unit of exact
//! - Property 12: FLOOR products never exceed exact
//! - Property 13: Allocated parts sum to the whole
//! - Property 14: Serialized form preserves the amount

use proptest::prelude::*;

use super::Money;
use crate::rational::DecimalLiteral;
use crate::rounding::RoundingMode;
use monetra_shared::types::currency::{JPY, KWD, USD};
use monetra_shared::Currency;

/// Strategy to generate minor-unit amounts (both signs).
fn minor() -> impl Strategy<Value = i128> {
    (-1_000_000_000_000i64..1_000_000_000_000i64).prop_map(i128::from)
}

/// Strategy to generate a currency with 0, 2 or 3 decimals.
fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(vec![USD, JPY, KWD])
}

/// Strategy to generate multipliers with up to 6 fractional digits.
fn multiplier() -> impl Strategy<Value = DecimalLiteral> {
    (-10_000_000i64..10_000_000i64, 0u32..=6)
        .prop_map(|(digits, scale)| DecimalLiteral::new(i128::from(digits), scale).unwrap())
}

/// Strategy to generate 1-10 positive ratios.
fn ratios() -> impl Strategy<Value = Vec<DecimalLiteral>> {
    prop::collection::vec(1i64..1_000, 1..10)
        .prop_map(|values| values.into_iter().map(DecimalLiteral::from).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 9: (a + b) - b == a.
    #[test]
    fn prop_additive_inverse(a in minor(), b in minor(), currency in currency()) {
        let a = Money::from_minor(a, currency.clone());
        let b = Money::from_minor(b, currency);
        prop_assert!(a.add(&b).unwrap().subtract(&b).unwrap().equals(&a));
    }

    /// Property 10: a * 1 == a, with no rounding needed.
    #[test]
    fn prop_multiply_by_one(a in minor(), currency in currency()) {
        let money = Money::from_minor(a, currency);
        let product = money.multiply(DecimalLiteral::ONE, None).unwrap();
        prop_assert_eq!(product, money);
    }

    /// Property 11: |rounded * 10^s - exact * 10^s| <= 10^s / 2.
    #[test]
    fn prop_half_up_within_half_unit(a in minor(), factor in multiplier()) {
        let money = Money::from_minor(a, USD);
        let rounded = money.multiply(factor, Some(RoundingMode::HalfUp)).unwrap();
        let scale = 10i128.pow(factor.scale());
        let exact_scaled = a * factor.digits();
        let diff = (rounded.minor() * scale - exact_scaled).abs();
        prop_assert!(diff * 2 <= scale);
    }

    /// Property 12: FLOOR never rounds up, CEIL never rounds down.
    #[test]
    fn prop_floor_ceil_bracket(a in minor(), factor in multiplier()) {
        let money = Money::from_minor(a, USD);
        let scale = 10i128.pow(factor.scale());
        let exact_scaled = a * factor.digits();
        let floor = money.multiply(factor, Some(RoundingMode::Floor)).unwrap();
        let ceil = money.multiply(factor, Some(RoundingMode::Ceil)).unwrap();
        prop_assert!(floor.minor() * scale <= exact_scaled);
        prop_assert!(ceil.minor() * scale >= exact_scaled);
        prop_assert!(ceil.minor() - floor.minor() <= 1);
    }

    /// Property 13: allocated parts sum to the original amount.
    #[test]
    fn prop_allocate_sums_to_whole(
        a in minor(),
        currency in currency(),
        ratios in ratios(),
    ) {
        let money = Money::from_minor(a, currency.clone());
        let parts = money.allocate(&ratios).unwrap();
        prop_assert_eq!(parts.len(), ratios.len());
        let total = parts
            .iter()
            .try_fold(Money::zero(currency), |acc, part| acc.add(part))
            .unwrap();
        prop_assert_eq!(total, money);
    }

    /// Property 14: the serialized form carries the exact minor units.
    #[test]
    fn prop_repr_preserves_amount(a in minor(), currency in currency()) {
        let money = Money::from_minor(a, currency.clone());
        let repr = money.to_repr();
        prop_assert_eq!(repr.minor().unwrap(), a);
        prop_assert_eq!(repr.precision, currency.decimals);
        prop_assert_eq!(repr.currency, currency.code.to_string());
    }
}
