//! Common expense draft form.
//!
//! The form is an immutable value. Edits go through [`ExpenseForm::reduce`],
//! which consumes the current form and returns the next one.

use chrono::NaiveDate;
use comuniapp_shared::types::CommunityId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::{ExpenseError, FormErrors};
use super::types::ExpenseItem;
use crate::community::Unit;
use crate::proration::{ProrationCalculator, ProrationMethod, ProrationShare};

/// Draft of a common expense before submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpenseForm {
    /// Community being billed.
    pub community_id: CommunityId,
    /// Billing period (YYYY-MM).
    #[serde(default)]
    pub period: String,
    /// Payment due date.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Expense lines.
    #[serde(default)]
    pub items: Vec<ExpenseItem>,
    /// Splitting policy.
    #[serde(default)]
    pub proration_method: ProrationMethod,
}

/// Item field targeted by [`ExpenseFormAction::UpdateItem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemField {
    /// Replace the item name.
    Name(String),
    /// Replace the item amount.
    Amount(Decimal),
    /// Replace the item description.
    Description(Option<String>),
}

/// Edits applied to an [`ExpenseForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseFormAction {
    /// Set the billing period.
    SetPeriod(String),
    /// Set or clear the due date.
    SetDueDate(Option<NaiveDate>),
    /// Choose the splitting policy.
    SetMethod(ProrationMethod),
    /// Append an empty item.
    AddItem,
    /// Remove the item at an index. The last item is never removed.
    RemoveItem(usize),
    /// Change one field of the item at an index.
    UpdateItem {
        /// Item position.
        index: usize,
        /// New field value.
        field: ItemField,
    },
    /// Start over with a blank form for the same community.
    Reset,
}

/// Result of previewing a valid draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpensePreview {
    /// Sum of the item amounts.
    pub total_amount: Decimal,
    /// Splitting policy used.
    pub method: ProrationMethod,
    /// Per-unit shares.
    pub shares: Vec<ProrationShare>,
}

impl ExpenseForm {
    /// Blank form with a single empty item.
    #[must_use]
    pub fn new(community_id: CommunityId) -> Self {
        Self {
            community_id,
            period: String::new(),
            due_date: None,
            items: vec![ExpenseItem::default()],
            proration_method: ProrationMethod::Equal,
        }
    }

    /// Applies an action and returns the next form.
    #[must_use]
    pub fn reduce(self, action: ExpenseFormAction) -> Self {
        match action {
            ExpenseFormAction::SetPeriod(period) => Self { period, ..self },
            ExpenseFormAction::SetDueDate(due_date) => Self { due_date, ..self },
            ExpenseFormAction::SetMethod(proration_method) => Self {
                proration_method,
                ..self
            },
            ExpenseFormAction::AddItem => {
                let mut items = self.items;
                items.push(ExpenseItem::default());
                Self { items, ..self }
            }
            ExpenseFormAction::RemoveItem(index) => {
                if self.items.len() <= 1 || index >= self.items.len() {
                    return self;
                }
                let mut items = self.items;
                items.remove(index);
                Self { items, ..self }
            }
            ExpenseFormAction::UpdateItem { index, field } => {
                let mut items = self.items;
                if let Some(item) = items.get_mut(index) {
                    match field {
                        ItemField::Name(name) => item.name = name,
                        ItemField::Amount(amount) => item.amount = amount,
                        ItemField::Description(description) => item.description = description,
                    }
                }
                Self { items, ..self }
            }
            ExpenseFormAction::Reset => Self::new(self.community_id),
        }
    }

    /// Sum of the item amounts, or `None` when it overflows.
    #[must_use]
    pub fn total_amount(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.amount))
    }

    /// Checks the whole draft and reports every failing field.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();

        let period = self.period.trim();
        if period.is_empty() {
            errors.push(&ExpenseError::PeriodRequired);
        } else if !is_valid_period(period) {
            errors.push(&ExpenseError::InvalidPeriod(period.to_string()));
        }

        if self.due_date.is_none() {
            errors.push(&ExpenseError::DueDateRequired);
        }

        if self.items.is_empty() {
            errors.push(&ExpenseError::NoItems);
        }

        for (index, item) in self.items.iter().enumerate() {
            if item.name.trim().is_empty() {
                errors.push(&ExpenseError::ItemNameRequired { index });
            }
            if item.amount <= Decimal::ZERO {
                errors.push(&ExpenseError::ItemAmountNotPositive { index });
            }
        }

        if self.total_amount().is_none() {
            errors.push(&ExpenseError::AmountOverflow);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates the draft and prorates its total across `units`.
    pub fn preview(&self, units: &[Unit], decimal_places: u32) -> Result<ExpensePreview, FormErrors> {
        self.validate()?;

        let Some(total_amount) = self.total_amount() else {
            let mut errors = FormErrors::default();
            errors.push(&ExpenseError::AmountOverflow);
            return Err(errors);
        };
        let shares = ProrationCalculator::calculate_with_precision(
            units,
            total_amount,
            self.proration_method,
            decimal_places,
        );

        Ok(ExpensePreview {
            total_amount,
            method: self.proration_method,
            shares,
        })
    }
}

/// Returns true for `YYYY-MM` with a month between 01 and 12.
fn is_valid_period(period: &str) -> bool {
    let Some((year, month)) = period.split_once('-') else {
        return false;
    };
    if year.len() != 4 || month.len() != 2 {
        return false;
    }
    if !year.bytes().all(|b| b.is_ascii_digit()) || !month.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    matches!(month.parse::<u32>(), Ok(1..=12))
}
