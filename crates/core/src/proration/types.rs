//! Proration data types.

use comuniapp_shared::types::UnitId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ProrationError;
use crate::community::Unit;

/// Policy for splitting a common expense across units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProrationMethod {
    /// Every unit pays the same share.
    #[default]
    Equal,
    /// Each unit pays in proportion to its coefficient.
    Coefficient,
}

impl ProrationMethod {
    /// Returns the string representation of the method.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "EQUAL",
            Self::Coefficient => "COEFFICIENT",
        }
    }

    /// Parses a method from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "EQUAL" => Some(Self::Equal),
            "COEFFICIENT" => Some(Self::Coefficient),
            _ => None,
        }
    }
}

impl fmt::Display for ProrationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Amount to distribute and the policy to distribute it with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProrationInput {
    /// Total to split across units.
    pub total_amount: Decimal,
    /// Splitting policy.
    pub method: ProrationMethod,
}

impl ProrationInput {
    /// Creates a new input.
    #[must_use]
    pub const fn new(total_amount: Decimal, method: ProrationMethod) -> Self {
        Self {
            total_amount,
            method,
        }
    }

    /// Checks the caller-side preconditions of a proration.
    ///
    /// The calculator itself accepts anything; this is for request boundaries.
    pub fn validate(&self, units: &[Unit]) -> Result<(), ProrationError> {
        if units.is_empty() {
            return Err(ProrationError::NoUnits);
        }
        if self.total_amount.is_sign_negative() && !self.total_amount.is_zero() {
            return Err(ProrationError::NegativeTotal(self.total_amount));
        }
        Ok(())
    }
}

/// One unit's share of a prorated total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProrationShare {
    /// Unit ID.
    pub unit_id: UnitId,
    /// Unit display number.
    pub unit_number: String,
    /// Coefficient the share was computed with.
    pub coefficient: Decimal,
    /// Amount charged to the unit.
    pub amount: Decimal,
}
