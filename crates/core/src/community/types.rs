//! Community and unit records.

use comuniapp_shared::types::{CommunityId, UnitId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A billable residential unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Unit {
    /// Unit ID.
    pub id: UnitId,
    /// Display number (e.g., "101", "B-12").
    pub number: String,
    /// Proration weight, usually the ownership share.
    #[serde(default)]
    pub coefficient: Option<Decimal>,
}

impl Unit {
    /// Creates a unit with an explicit coefficient.
    #[must_use]
    pub fn new(number: impl Into<String>, coefficient: Option<Decimal>) -> Self {
        Self {
            id: UnitId::new(),
            number: number.into(),
            coefficient,
        }
    }

    /// Coefficient used for proration.
    ///
    /// Missing and non-positive coefficients count as 1.
    #[must_use]
    pub fn effective_coefficient(&self) -> Decimal {
        match self.coefficient {
            Some(c) if c > Decimal::ZERO => c,
            _ => Decimal::ONE,
        }
    }
}

/// A residential community and the units billed in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Community {
    /// Community ID.
    pub id: CommunityId,
    /// Community name.
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
    /// Units in the community.
    #[serde(default)]
    pub units: Vec<Unit>,
}

impl Community {
    /// Sum of the effective coefficients of every unit.
    #[must_use]
    pub fn total_coefficient(&self) -> Decimal {
        self.units.iter().map(Unit::effective_coefficient).sum()
    }
}
