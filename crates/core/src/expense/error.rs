//! Expense form validation errors.

use std::collections::BTreeMap;

use comuniapp_shared::AppError;
use serde::Serialize;
use thiserror::Error;

/// A single problem with an expense draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseError {
    /// Period was left empty.
    #[error("Period is required")]
    PeriodRequired,

    /// Period is not a valid `YYYY-MM` month.
    #[error("Period must use the YYYY-MM format, got '{0}'")]
    InvalidPeriod(String),

    /// Due date was left empty.
    #[error("Due date is required")]
    DueDateRequired,

    /// The draft has no items.
    #[error("At least one item is required")]
    NoItems,

    /// An item has a blank name.
    #[error("Item {index} needs a name")]
    ItemNameRequired {
        /// Position of the item.
        index: usize,
    },

    /// An item amount is zero or negative.
    #[error("Item {index} amount must be greater than zero")]
    ItemAmountNotPositive {
        /// Position of the item.
        index: usize,
    },

    /// Amounts add up past the largest representable decimal.
    #[error("Amounts add up beyond the supported range")]
    AmountOverflow,
}

impl ExpenseError {
    /// Form field the error belongs to.
    #[must_use]
    pub fn field(&self) -> String {
        match self {
            Self::PeriodRequired | Self::InvalidPeriod(_) => "period".to_string(),
            Self::DueDateRequired => "due_date".to_string(),
            Self::NoItems | Self::AmountOverflow => "items".to_string(),
            Self::ItemNameRequired { index } => format!("items[{index}].name"),
            Self::ItemAmountNotPositive { index } => format!("items[{index}].amount"),
        }
    }
}

/// Every problem found in a draft, keyed by form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{}", self.joined())]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    /// Records an error under its field, keeping the first one per field.
    pub fn push(&mut self, error: &ExpenseError) {
        self.0
            .entry(error.field())
            .or_insert_with(|| error.to_string());
    }

    /// Returns true when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message recorded for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Messages in field order, separated by `; `.
    #[must_use]
    pub fn joined(&self) -> String {
        self.0.values().map(String::as_str).collect::<Vec<_>>().join("; ")
    }

    /// Iterates `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<ExpenseError> for AppError {
    fn from(error: ExpenseError) -> Self {
        AppError::Validation(error.to_string())
    }
}

impl From<FormErrors> for AppError {
    fn from(errors: FormErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}
