//! Amount allocation using the Largest Remainder Method.
//!
//! Every allocation sums EXACTLY to the total rounded to the target precision.
//!
//! The method:
//! 1. Round the total half-up to the target precision
//! 2. Compute exact shares and truncate each toward zero
//! 3. Hand out the leftover units one at a time, largest truncated fraction
//!    first, earlier position first on ties
//!
//! Precision is capped at [`MAX_DECIMAL_PLACES`].

use comuniapp_shared::config::MAX_DECIMAL_PLACES;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Allocation helper for distributing an amount over recipients.
pub struct Allocation;

impl Allocation {
    /// Allocate `total` equally across `count` recipients.
    ///
    /// The first recipients absorb the leftover units, so shares differ by at
    /// most one unit of precision.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use comuniapp_core::proration::Allocation;
    ///
    /// // 100 / 3 = [33.34, 33.33, 33.33], sum = 100.00
    /// let result = Allocation::equal(dec!(100), 3, 2);
    /// assert_eq!(result, vec![dec!(33.34), dec!(33.33), dec!(33.33)]);
    /// ```
    #[must_use]
    pub fn equal(total: Decimal, count: usize, decimal_places: u32) -> Vec<Decimal> {
        let decimal_places = decimal_places.min(MAX_DECIMAL_PLACES);
        if count == 0 {
            return vec![];
        }

        let total_rounded = round_half_up(total, decimal_places);
        if count == 1 {
            return vec![total_rounded];
        }

        let count_dec = Decimal::from(count as u64);
        let base = truncate(total_rounded / count_dec, decimal_places);
        let remainder = total_rounded - base * count_dec;

        let mut shares = vec![base; count];
        let (extra, step) = leftover_units(remainder, decimal_places);
        for share in shares.iter_mut().take(extra) {
            *share += step;
        }
        shares
    }

    /// Allocate `total` proportionally to non-negative `weights`.
    ///
    /// Falls back to [`Allocation::equal`] when the weights sum to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use comuniapp_core::proration::Allocation;
    ///
    /// let result = Allocation::by_weights(dec!(400), &[dec!(1), dec!(1), dec!(2)], 2);
    /// assert_eq!(result, vec![dec!(100), dec!(100), dec!(200)]);
    /// ```
    #[must_use]
    pub fn by_weights(total: Decimal, weights: &[Decimal], decimal_places: u32) -> Vec<Decimal> {
        let decimal_places = decimal_places.min(MAX_DECIMAL_PLACES);
        if weights.is_empty() {
            return vec![];
        }

        let Some(weight_sum) = checked_sum(weights) else {
            // Weights near Decimal::MAX: their ratios survive scaling down.
            let count = Decimal::from(weights.len() as u64);
            let scaled: Vec<Decimal> = weights.iter().map(|w| *w / count).collect();
            return Self::by_weights(total, &scaled, decimal_places);
        };
        if weight_sum <= Decimal::ZERO {
            return Self::equal(total, weights.len(), decimal_places);
        }

        let total_rounded = round_half_up(total, decimal_places);

        // Ratio first: it never exceeds 1, so the product never exceeds the total.
        let exact: Vec<Decimal> = weights
            .iter()
            .map(|w| total_rounded * (*w / weight_sum))
            .collect();

        let mut rounded: Vec<Decimal> = exact
            .iter()
            .map(|a| truncate(*a, decimal_places))
            .collect();

        let sum_rounded: Decimal = rounded.iter().copied().sum();
        let (units_to_distribute, step) =
            leftover_units(total_rounded - sum_rounded, decimal_places);

        if units_to_distribute == 0 {
            return rounded;
        }

        let mut fractions: Vec<(usize, Decimal)> = exact
            .iter()
            .zip(rounded.iter())
            .enumerate()
            .map(|(i, (e, r))| (i, *e - *r))
            .collect();

        // Stable sort keeps input order among equal fractions.
        if step.is_sign_positive() {
            fractions.sort_by(|a, b| b.1.cmp(&a.1));
        } else {
            fractions.sort_by(|a, b| a.1.cmp(&b.1));
        }

        for (idx, _) in fractions.iter().cycle().take(units_to_distribute) {
            rounded[*idx] += step;
        }

        rounded
    }
}

fn checked_sum(values: &[Decimal]) -> Option<Decimal> {
    values
        .iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
}

fn round_half_up(amount: Decimal, decimal_places: u32) -> Decimal {
    amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

fn truncate(amount: Decimal, decimal_places: u32) -> Decimal {
    amount.round_dp_with_strategy(decimal_places, RoundingStrategy::ToZero)
}

/// Splits a leftover amount into a count of signed precision units.
fn leftover_units(remainder: Decimal, decimal_places: u32) -> (usize, Decimal) {
    let unit = Decimal::new(1, decimal_places);
    let step = if remainder.is_sign_negative() { -unit } else { unit };
    let count = (remainder.abs() / unit)
        .trunc()
        .to_u64()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    (count, step)
}
