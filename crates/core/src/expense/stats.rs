//! Expense collection statistics.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use super::error::ExpenseError;
use super::types::{CommonExpense, ExpenseStatus, ResidentExpense};

/// Counts and amounts of charges per payment status.
///
/// Cancelled charges count toward the totals only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseStats {
    /// Number of charges.
    pub total_count: u64,
    /// Number of paid charges.
    pub paid_count: u64,
    /// Number of pending charges.
    pub pending_count: u64,
    /// Number of overdue charges.
    pub overdue_count: u64,
    /// Sum of all charges.
    pub total_amount: Decimal,
    /// Sum of paid charges.
    pub paid_amount: Decimal,
    /// Sum of pending charges.
    pub pending_amount: Decimal,
    /// Sum of overdue charges.
    pub overdue_amount: Decimal,
}

impl ExpenseStats {
    /// Tallies `(amount, status)` pairs.
    ///
    /// Fails with [`ExpenseError::AmountOverflow`] when an amount sum leaves
    /// the decimal range.
    pub fn from_charges<I>(charges: I) -> Result<Self, ExpenseError>
    where
        I: IntoIterator<Item = (Decimal, ExpenseStatus)>,
    {
        charges
            .into_iter()
            .try_fold(Self::default(), |acc, (amount, status)| {
                acc.record(amount, status)
            })
            .ok_or(ExpenseError::AmountOverflow)
    }

    /// Summary of a resident's own charges.
    pub fn for_resident(expenses: &[ResidentExpense]) -> Result<Self, ExpenseError> {
        Self::from_charges(expenses.iter().map(|e| (e.amount, e.status)))
    }

    /// Community overview across several expenses.
    pub fn aggregate<I>(stats: I) -> Result<Self, ExpenseError>
    where
        I: IntoIterator<Item = Self>,
    {
        stats
            .into_iter()
            .try_fold(Self::default(), Self::checked_add)
            .ok_or(ExpenseError::AmountOverflow)
    }

    /// Field-wise sum, or `None` on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self {
            total_count: self.total_count.checked_add(rhs.total_count)?,
            paid_count: self.paid_count.checked_add(rhs.paid_count)?,
            pending_count: self.pending_count.checked_add(rhs.pending_count)?,
            overdue_count: self.overdue_count.checked_add(rhs.overdue_count)?,
            total_amount: self.total_amount.checked_add(rhs.total_amount)?,
            paid_amount: self.paid_amount.checked_add(rhs.paid_amount)?,
            pending_amount: self.pending_amount.checked_add(rhs.pending_amount)?,
            overdue_amount: self.overdue_amount.checked_add(rhs.overdue_amount)?,
        })
    }

    /// Share of charges paid, in percent with one decimal.
    #[must_use]
    pub fn payment_percentage(&self) -> Decimal {
        percentage(Decimal::from(self.paid_count), Decimal::from(self.total_count))
    }

    fn record(mut self, amount: Decimal, status: ExpenseStatus) -> Option<Self> {
        self.total_count += 1;
        self.total_amount = self.total_amount.checked_add(amount)?;
        match status {
            ExpenseStatus::Paid => {
                self.paid_count += 1;
                self.paid_amount = self.paid_amount.checked_add(amount)?;
            }
            ExpenseStatus::Pending => {
                self.pending_count += 1;
                self.pending_amount = self.pending_amount.checked_add(amount)?;
            }
            ExpenseStatus::Overdue => {
                self.overdue_count += 1;
                self.overdue_amount = self.overdue_amount.checked_add(amount)?;
            }
            ExpenseStatus::Cancelled => {}
        }
        Some(self)
    }
}

impl CommonExpense {
    /// Statistics over this expense's unit charges.
    pub fn stats(&self) -> Result<ExpenseStats, ExpenseError> {
        ExpenseStats::from_charges(self.charges.iter().map(|c| (c.amount, c.status)))
    }
}

/// `part / whole * 100`, rounded half-up to one decimal; 0 when `whole` is 0.
#[must_use]
pub fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    (part / whole * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Keeps expenses with the given status, or all of them for `None`.
#[must_use]
pub fn filter_by_status(
    expenses: &[ResidentExpense],
    status: Option<ExpenseStatus>,
) -> Vec<&ResidentExpense> {
    expenses
        .iter()
        .filter(|e| status.is_none_or(|s| e.status == s))
        .collect()
}
