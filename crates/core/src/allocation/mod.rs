//! Amount allocation using the Largest Remainder Method.
//!
//! This module splits an integer amount of minor units into shares
//! proportional to a list of ratios, guaranteeing that the shares sum
//! exactly to the original amount (no cents lost or gained).
//!
//! The Largest Remainder Method works by:
//! 1. Rescale every ratio to integer weights over a common power of ten
//! 2. Give each index `floor(amount * weight / total)`
//! 3. Count the leftover units (amount - sum of base shares)
//! 4. Hand one leftover unit to each of the indices with the largest
//!    remainders; ties go to the earlier index

use monetra_shared::{MoneyError, MoneyResult};

use crate::rational::{DecimalLiteral, gcd};

#[cfg(test)]
mod props;

/// Allocation utility for distributing amounts.
///
/// Uses the Largest Remainder Method to ensure:
/// - Each share approximates `amount * ratio / sum(ratios)`
/// - Sum of allocations EXACTLY equals the original amount
/// - Symmetric ratios hand leftover units out first-come by position
pub struct AllocationUtil;

impl AllocationUtil {
    /// Allocate `amount` proportionally to `ratios`.
    ///
    /// Negative ratios are rejected. A negative amount is allocated as the
    /// mirror image of its absolute value, so the leftover units land on the
    /// same indices as for the positive amount.
    ///
    /// # Errors
    ///
    /// `EmptyRatios`, `NegativeRatio`, `ZeroTotalRatio`, or `Overflow` when
    /// `amount * weight` leaves the `i128` range.
    ///
    /// # Example
    ///
    /// ```
    /// use monetra_core::DecimalLiteral;
    /// use monetra_core::allocation::AllocationUtil;
    ///
    /// let ratios = [DecimalLiteral::ONE; 3];
    /// let result = AllocationUtil::allocate(25_000, &ratios).unwrap();
    /// assert_eq!(result, vec![8334, 8333, 8333]);
    /// ```
    pub fn allocate(amount: i128, ratios: &[DecimalLiteral]) -> MoneyResult<Vec<i128>> {
        if ratios.is_empty() {
            return Err(MoneyError::EmptyRatios);
        }
        if let Some(negative) = ratios.iter().find(|r| r.is_negative()) {
            return Err(MoneyError::NegativeRatio(negative.to_string()));
        }

        // Rescale to a common denominator of 10^max_scale, ignoring trailing zeros
        let ratios: Vec<DecimalLiteral> = ratios.iter().map(DecimalLiteral::normalized).collect();
        let scale = ratios.iter().map(DecimalLiteral::scale).max().unwrap_or(0);
        let mut weights = ratios
            .iter()
            .map(|r| r.rescaled(scale))
            .collect::<MoneyResult<Vec<i128>>>()?;

        // Dividing out the common factor leaves shares and remainder order unchanged
        let common = weights
            .iter()
            .fold(0i128, |acc, w| i128::try_from(gcd(acc, *w)).unwrap_or(1));
        if common > 1 {
            for weight in &mut weights {
                *weight /= common;
            }
        }

        let total = weights
            .iter()
            .try_fold(0i128, |acc, w| acc.checked_add(*w))
            .ok_or(MoneyError::Overflow)?;
        if total == 0 {
            return Err(MoneyError::ZeroTotalRatio);
        }

        if amount < 0 {
            let magnitude = amount.checked_neg().ok_or(MoneyError::Overflow)?;
            let shares = Self::distribute(magnitude, &weights, total)?;
            return Ok(shares.into_iter().map(|share| -share).collect());
        }

        Self::distribute(amount, &weights, total)
    }

    /// Allocate `amount` equally across `count` recipients.
    ///
    /// `allocate_equal(100, 3)` is `[34, 33, 33]`.
    pub fn allocate_equal(amount: i128, count: usize) -> MoneyResult<Vec<i128>> {
        if count == 0 {
            return Err(MoneyError::EmptyRatios);
        }
        Self::allocate(amount, &vec![DecimalLiteral::ONE; count])
    }

    /// Core of the method for a non-negative amount and positive total.
    fn distribute(amount: i128, weights: &[i128], total: i128) -> MoneyResult<Vec<i128>> {
        let mut shares = Vec::with_capacity(weights.len());
        let mut remainders = Vec::with_capacity(weights.len());
        for weight in weights {
            let product = amount.checked_mul(*weight).ok_or(MoneyError::Overflow)?;
            shares.push(product / total);
            remainders.push(product % total);
        }

        // Base shares never exceed the amount, so this cannot overflow
        let allocated: i128 = shares.iter().sum();
        let leftover = usize::try_from(amount - allocated).map_err(|_| MoneyError::Overflow)?;
        if leftover == 0 {
            return Ok(shares);
        }

        // Stable: equal remainders keep input order
        let mut order: Vec<usize> = (0..weights.len()).collect();
        order.sort_by(|&a, &b| remainders[b].cmp(&remainders[a]));

        for &idx in order.iter().take(leftover) {
            shares[idx] += 1;
        }

        Ok(shares)
    }
}
