//! Property-based tests for proration.
//!
//! - Sum invariant: shares add up to the rounded total
//! - Shape invariant: one share per unit, in order
//! - Equal spread: equal shares differ by at most one precision unit
//! - Monotonicity: a larger coefficient never lowers a unit's share

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use super::allocation::Allocation;
use super::calculator::ProrationCalculator;
use super::types::ProrationMethod;
use crate::community::Unit;

/// Strategy to generate non-negative amounts (0.00 to 1,000,000.00).
fn non_negative_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy reaching far past everyday amounts (up to ~1.8e24, cents kept).
fn wide_amount() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        non_negative_amount(),
        (any::<u64>(), 0i64..100i64).prop_map(|(whole, cents)| {
            Decimal::from(whole) * Decimal::from(100_000u32) + Decimal::new(cents, 2)
        }),
    ]
}

/// Strategy to generate optional coefficients, including non-positive ones.
fn coefficient() -> impl Strategy<Value = Option<Decimal>> {
    prop_oneof![
        Just(None),
        (-100i64..0i64).prop_map(|v| Some(Decimal::new(v, 2))),
        (1i64..10_000i64).prop_map(|v| Some(Decimal::new(v, 3))),
    ]
}

/// Strategy to generate 1-40 units.
fn units() -> impl Strategy<Value = Vec<Unit>> {
    prop::collection::vec(coefficient(), 1..40).prop_map(|coefficients| {
        coefficients
            .into_iter()
            .enumerate()
            .map(|(i, c)| Unit::new(format!("{}", i + 1), c))
            .collect()
    })
}

fn method() -> impl Strategy<Value = ProrationMethod> {
    prop_oneof![Just(ProrationMethod::Equal), Just(ProrationMethod::Coefficient)]
}

fn round_half_up(amount: Decimal, decimal_places: u32) -> Decimal {
    amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* units, total and method, the shares SHALL sum to the total.
    #[test]
    fn prop_shares_sum_to_total(
        units in units(),
        total in wide_amount(),
        method in method(),
    ) {
        let shares = ProrationCalculator::calculate(&units, total, method);
        prop_assert_eq!(ProrationCalculator::allocated_total(&shares), total);
    }

    /// *For any* precision 0-4, the shares SHALL sum to the rounded total.
    #[test]
    fn prop_sum_invariant_any_precision(
        units in units(),
        total in wide_amount(),
        method in method(),
        places in 0u32..=4,
    ) {
        let shares = ProrationCalculator::calculate_with_precision(&units, total, method, places);
        prop_assert_eq!(
            ProrationCalculator::allocated_total(&shares),
            round_half_up(total, places)
        );
    }

    /// Output length and order SHALL match the input units.
    #[test]
    fn prop_one_share_per_unit_in_order(
        units in units(),
        total in wide_amount(),
        method in method(),
    ) {
        let shares = ProrationCalculator::calculate(&units, total, method);
        prop_assert_eq!(shares.len(), units.len());
        for (unit, share) in units.iter().zip(&shares) {
            prop_assert_eq!(share.unit_id, unit.id);
            prop_assert!(share.amount >= Decimal::ZERO);
        }
    }

    /// EQUAL shares SHALL differ by at most one cent.
    #[test]
    fn prop_equal_shares_within_one_cent(
        units in units(),
        total in wide_amount(),
    ) {
        let shares = ProrationCalculator::calculate(&units, total, ProrationMethod::Equal);
        let max = shares.iter().map(|s| s.amount).max().unwrap_or_default();
        let min = shares.iter().map(|s| s.amount).min().unwrap_or_default();
        prop_assert!(max - min <= Decimal::new(1, 2));
    }

    /// When no unit has a positive coefficient, COEFFICIENT SHALL equal EQUAL.
    #[test]
    fn prop_defaulted_coefficients_match_equal(
        count in 1usize..30,
        total in non_negative_amount(),
    ) {
        let units: Vec<Unit> = (0..count).map(|i| Unit::new(format!("{i}"), None)).collect();
        prop_assert_eq!(
            ProrationCalculator::calculate(&units, total, ProrationMethod::Coefficient),
            ProrationCalculator::calculate(&units, total, ProrationMethod::Equal)
        );
    }

    /// Doubling one unit's coefficient SHALL NOT lower its share.
    #[test]
    fn prop_doubling_coefficient_never_lowers_share(
        units in units(),
        total in non_negative_amount(),
        pick in any::<prop::sample::Index>(),
    ) {
        let idx = pick.index(units.len());
        let before = ProrationCalculator::calculate(&units, total, ProrationMethod::Coefficient);

        let mut doubled = units.clone();
        doubled[idx].coefficient = Some(units[idx].effective_coefficient() * Decimal::TWO);
        let after = ProrationCalculator::calculate(&doubled, total, ProrationMethod::Coefficient);

        // One cent of slack for the remainder hand-out.
        prop_assert!(after[idx].amount + Decimal::new(1, 2) >= before[idx].amount);
        prop_assert_eq!(ProrationCalculator::allocated_total(&after), total);
    }

    /// Each weighted share SHALL stay within one cent of its exact value.
    #[test]
    fn prop_weighted_shares_within_one_unit_of_exact(
        weights in prop::collection::vec(1i64..10_000i64, 1..20),
        total in non_negative_amount(),
    ) {
        let weights: Vec<Decimal> = weights.into_iter().map(Decimal::from).collect();
        let weight_sum: Decimal = weights.iter().copied().sum();
        let result = Allocation::by_weights(total, &weights, 2);
        for (share, weight) in result.iter().zip(&weights) {
            let exact = total * *weight / weight_sum;
            prop_assert!((*share - exact).abs() < Decimal::new(1, 2));
        }
    }
}
