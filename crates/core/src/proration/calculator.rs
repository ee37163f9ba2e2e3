//! Expense proration calculator.
//!
//! Splits a common-expense total across the units of a community. The
//! calculator is pure and never fails: missing or non-positive coefficients
//! count as 1 and a zero coefficient sum falls back to an equal split.

use comuniapp_shared::config::MAX_DECIMAL_PLACES;
use rust_decimal::Decimal;

use super::allocation::Allocation;
use super::types::{ProrationMethod, ProrationShare};
use crate::community::Unit;

/// Default precision of a unit share (cents).
pub const CENT_PLACES: u32 = 2;

/// Stateless proration calculator.
pub struct ProrationCalculator;

impl ProrationCalculator {
    /// Prorates `total_amount` across `units` at cent precision.
    ///
    /// Shares come back in unit order, one per unit, and sum exactly to the
    /// total rounded half-up to cents.
    #[must_use]
    pub fn calculate(
        units: &[Unit],
        total_amount: Decimal,
        method: ProrationMethod,
    ) -> Vec<ProrationShare> {
        Self::calculate_with_precision(units, total_amount, method, CENT_PLACES)
    }

    /// Prorates `total_amount` across `units` at `decimal_places` precision.
    ///
    /// Precision above [`MAX_DECIMAL_PLACES`] is capped to it.
    #[must_use]
    pub fn calculate_with_precision(
        units: &[Unit],
        total_amount: Decimal,
        method: ProrationMethod,
        decimal_places: u32,
    ) -> Vec<ProrationShare> {
        let coefficients: Vec<Decimal> = units.iter().map(Unit::effective_coefficient).collect();

        // A zero coefficient sum falls back to the equal split inside
        // `by_weights`; effective coefficients make that an empty list only.
        let amounts = match method {
            ProrationMethod::Coefficient => {
                Allocation::by_weights(total_amount, &coefficients, decimal_places)
            }
            ProrationMethod::Equal => Allocation::equal(total_amount, units.len(), decimal_places),
        };

        units
            .iter()
            .zip(coefficients)
            .zip(amounts)
            .map(|((unit, coefficient), amount)| ProrationShare {
                unit_id: unit.id,
                unit_number: unit.number.clone(),
                coefficient,
                amount,
            })
            .collect()
    }

    /// Sum of the share amounts.
    #[must_use]
    pub fn allocated_total(shares: &[ProrationShare]) -> Decimal {
        shares.iter().map(|s| s.amount).sum()
    }
}

/// Prorates `total_amount` across `units` at cent precision.
///
/// Shorthand for [`ProrationCalculator::calculate`].
#[must_use]
pub fn calculate_proration(
    units: &[Unit],
    total_amount: Decimal,
    method: ProrationMethod,
) -> Vec<ProrationShare> {
    ProrationCalculator::calculate(units, total_amount, method)
}
