//! Property-based tests for allocation.
//!
//! - Property 5: Allocation Sum Invariant
//! - Property 6: Allocation Shape
//! - Property 7: Shares stay within one unit of the exact floor
//! - Property 8: Negative amounts mirror positive ones

use proptest::prelude::*;

use super::AllocationUtil;
use crate::rational::DecimalLiteral;

/// Strategy to generate amounts in minor units (both signs).
fn amount() -> impl Strategy<Value = i128> {
    (-1_000_000_000_000i64..1_000_000_000_000i64).prop_map(i128::from)
}

/// Strategy to generate non-negative amounts.
fn non_negative_amount() -> impl Strategy<Value = i128> {
    (0i64..1_000_000_000_000i64).prop_map(i128::from)
}

/// Strategy to generate 1-20 ratios with 0-4 fractional digits and a
/// positive total.
fn ratios() -> impl Strategy<Value = Vec<DecimalLiteral>> {
    prop::collection::vec((0i64..10_000, 0u32..=4), 1..20)
        .prop_filter("total ratio must be positive", |values| {
            values.iter().any(|(digits, _)| *digits > 0)
        })
        .prop_map(|values| {
            values
                .into_iter()
                .map(|(digits, scale)| DecimalLiteral::new(i128::from(digits), scale).unwrap())
                .collect()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property 5: sum(allocate(A, R)) == A.
    #[test]
    fn prop_allocate_sum_invariant(
        amount in amount(),
        ratios in ratios(),
    ) {
        let result = AllocationUtil::allocate(amount, &ratios).unwrap();
        let sum: i128 = result.iter().sum();
        prop_assert_eq!(sum, amount, "Sum of allocations must equal the amount");
    }

    /// Property 6: One share per ratio.
    #[test]
    fn prop_allocate_correct_count(
        amount in amount(),
        ratios in ratios(),
    ) {
        let result = AllocationUtil::allocate(amount, &ratios).unwrap();
        prop_assert_eq!(result.len(), ratios.len());
    }

    /// Property 7: Each share is its exact floor or one more.
    #[test]
    fn prop_allocate_near_exact_share(
        amount in non_negative_amount(),
        ratios in ratios(),
    ) {
        let scale = ratios.iter().map(DecimalLiteral::scale).max().unwrap_or(0);
        let weights: Vec<i128> = ratios.iter().map(|r| r.rescaled(scale).unwrap()).collect();
        let total: i128 = weights.iter().sum();

        let result = AllocationUtil::allocate(amount, &ratios).unwrap();
        for (share, weight) in result.iter().zip(weights.iter()) {
            let floor = amount * weight / total;
            prop_assert!(
                *share == floor || *share == floor + 1,
                "share {} too far from exact floor {}",
                share, floor
            );
        }
    }

    /// Property 8: allocate(-A, R) == -allocate(A, R).
    #[test]
    fn prop_allocate_negative_mirrors_positive(
        amount in non_negative_amount(),
        ratios in ratios(),
    ) {
        let positive = AllocationUtil::allocate(amount, &ratios).unwrap();
        let negative = AllocationUtil::allocate(-amount, &ratios).unwrap();
        let mirrored: Vec<i128> = positive.iter().map(|s| -s).collect();
        prop_assert_eq!(negative, mirrored);
    }

    /// Equal allocation shares differ by at most one and never increase.
    #[test]
    fn prop_allocate_equal_is_front_loaded(
        amount in non_negative_amount(),
        count in 1usize..100,
    ) {
        let result = AllocationUtil::allocate_equal(amount, count).unwrap();
        prop_assert_eq!(result.iter().sum::<i128>(), amount);
        for pair in result.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
            prop_assert!(pair[0] - pair[1] <= 1);
        }
    }
}
