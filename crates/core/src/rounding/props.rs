//! Property-based tests for the rounding engine.
//!
//! - Property 1: Determinism
//! - Property 2: Floor/Ceil bracketing
//! - Property 3: Half-even parity
//! - Property 4: Nearest modes stay within half a unit

use proptest::prelude::*;

use super::{RoundingMode, divide_with_rounding};

/// Strategy to generate numerators (both signs).
fn numerator() -> impl Strategy<Value = i128> {
    (-1_000_000_000_000i64..1_000_000_000_000i64).prop_map(i128::from)
}

/// Strategy to generate positive denominators.
fn positive_denominator() -> impl Strategy<Value = i128> {
    (1i64..1_000_000i64).prop_map(i128::from)
}

/// Strategy to generate any rounding mode.
fn mode() -> impl Strategy<Value = RoundingMode> {
    prop::sample::select(RoundingMode::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property 1: Rounding is deterministic.
    #[test]
    fn prop_rounding_is_deterministic(
        n in numerator(),
        d in positive_denominator(),
        negate_denominator in any::<bool>(),
        mode in mode(),
    ) {
        let d = if negate_denominator { -d } else { d };
        let first = divide_with_rounding(n, d, mode).unwrap();
        let second = divide_with_rounding(n, d, mode).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property 2: FLOOR(n, d) <= n/d <= CEIL(n, d), one unit apart at most.
    #[test]
    fn prop_floor_ceil_bracket(
        n in numerator(),
        d in positive_denominator(),
    ) {
        let floor = divide_with_rounding(n, d, RoundingMode::Floor).unwrap();
        let ceil = divide_with_rounding(n, d, RoundingMode::Ceil).unwrap();
        prop_assert!(floor * d <= n, "floor {} * {} > {}", floor, d, n);
        prop_assert!(n <= ceil * d, "ceil {} * {} < {}", ceil, d, n);
        prop_assert!(ceil - floor <= 1);
    }

    /// Property 2 (negative denominators): sign lives on the quotient.
    #[test]
    fn prop_negative_denominator_matches_negated_numerator(
        n in numerator(),
        d in positive_denominator(),
        mode in mode(),
    ) {
        prop_assert_eq!(
            divide_with_rounding(n, -d, mode).unwrap(),
            divide_with_rounding(-n, d, mode).unwrap()
        );
    }

    /// Property 3: Exact halves round to an even integer.
    #[test]
    fn prop_half_even_parity(k in -1_000_000_000i64..1_000_000_000i64) {
        let n = 2 * i128::from(k) + 1;
        let result = divide_with_rounding(n, 2, RoundingMode::HalfEven).unwrap();
        prop_assert_eq!(result % 2, 0, "{}/2 rounded to odd {}", n, result);
    }

    /// Property 4: HALF_* modes never land more than half a unit away.
    #[test]
    fn prop_nearest_within_half(
        n in numerator(),
        d in positive_denominator(),
        mode in prop::sample::select(vec![
            RoundingMode::HalfUp,
            RoundingMode::HalfDown,
            RoundingMode::HalfEven,
        ]),
    ) {
        let result = divide_with_rounding(n, d, mode).unwrap();
        let distance = (n - result * d).abs() * 2;
        prop_assert!(distance <= d, "{}/{} -> {} is too far", n, d, result);
    }

    /// Truncation never moves away from zero.
    #[test]
    fn prop_truncate_toward_zero(
        n in numerator(),
        d in positive_denominator(),
    ) {
        let result = divide_with_rounding(n, d, RoundingMode::Truncate).unwrap();
        prop_assert!((result * d).abs() <= n.abs());
    }
}
