//! Common expense data types.

use chrono::{DateTime, NaiveDate, Utc};
use comuniapp_shared::types::{CommunityId, ExpenseId, UnitId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::proration::ProrationMethod;

/// Payment status of a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExpenseStatus {
    /// Awaiting payment.
    Pending,
    /// Paid in full.
    Paid,
    /// Past its due date without payment.
    Overdue,
    /// Voided; no longer collectable.
    Cancelled,
}

impl ExpenseStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Overdue => "OVERDUE",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PENDING" => Some(Self::Pending),
            "PAID" => Some(Self::Paid),
            "OVERDUE" => Some(Self::Overdue),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One line of a common expense (e.g., elevator maintenance).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpenseItem {
    /// Item name.
    pub name: String,
    /// Item amount.
    pub amount: Decimal,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A unit's charge under a common expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCharge {
    /// Charged unit.
    pub unit_id: UnitId,
    /// Charged amount.
    pub amount: Decimal,
    /// Payment status.
    pub status: ExpenseStatus,
}

/// A common expense billed across a community for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonExpense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Billed community.
    pub community_id: CommunityId,
    /// Billing period (YYYY-MM).
    pub period: String,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Expense lines.
    pub items: Vec<ExpenseItem>,
    /// How the total was split.
    pub proration_method: ProrationMethod,
    /// Per-unit charges.
    pub charges: Vec<UnitCharge>,
}

impl CommonExpense {
    /// Sum of the item amounts, or `None` when it overflows.
    #[must_use]
    pub fn total_amount(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.amount))
    }
}

/// A charge as seen by the resident who owes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResidentExpense {
    /// Charge ID.
    pub id: ExpenseId,
    /// Amount owed.
    pub amount: Decimal,
    /// Short concept (e.g., "Gasto común 2024-03").
    pub concept: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Payment status.
    pub status: ExpenseStatus,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Parent common expense, when billed through one.
    #[serde(default)]
    pub common_expense_id: Option<ExpenseId>,
}
