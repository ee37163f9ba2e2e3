//! Visitor log types.

use chrono::{DateTime, Utc};
use comuniapp_shared::types::VisitId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visit status.
///
/// The valid transitions are:
/// - Scheduled → Arrived (visitor checked in)
/// - Arrived → Completed (visitor left)
/// - Scheduled → Cancelled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VisitStatus {
    /// Announced by the resident.
    #[default]
    Scheduled,
    /// Visitor is on the premises.
    Arrived,
    /// Visitor has left.
    Completed,
    /// Called off before arrival.
    Cancelled,
}

impl VisitStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Arrived => "ARRIVED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A visitor log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    /// Visit ID.
    pub id: VisitId,
    /// Visitor full name.
    pub visitor_name: String,
    /// Visitor identity document number.
    pub visitor_document: String,
    /// Visitor phone.
    #[serde(default)]
    pub visitor_phone: Option<String>,
    /// Visited unit number.
    pub unit_number: String,
    /// Hosting resident.
    pub resident_name: String,
    /// Reason for the visit.
    pub purpose: String,
    /// Announced arrival.
    pub expected_arrival: DateTime<Utc>,
    /// Announced departure.
    #[serde(default)]
    pub expected_departure: Option<DateTime<Utc>>,
    /// Vehicle plate or description.
    #[serde(default)]
    pub vehicle_info: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Actual check-in.
    #[serde(default)]
    pub arrival_time: Option<DateTime<Utc>>,
    /// Actual check-out.
    #[serde(default)]
    pub departure_time: Option<DateTime<Utc>>,
    /// Current status.
    #[serde(default)]
    pub status: VisitStatus,
}

/// Visit totals per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VisitCounts {
    /// All visits.
    pub total: usize,
    /// Not yet arrived.
    pub scheduled: usize,
    /// On the premises.
    pub arrived: usize,
    /// Finished.
    pub completed: usize,
    /// Called off.
    pub cancelled: usize,
}

impl VisitCounts {
    /// Counts visits per status.
    #[must_use]
    pub fn from_visits(visits: &[Visit]) -> Self {
        visits.iter().fold(Self::default(), |mut acc, v| {
            acc.total += 1;
            match v.status {
                VisitStatus::Scheduled => acc.scheduled += 1,
                VisitStatus::Arrived => acc.arrived += 1,
                VisitStatus::Completed => acc.completed += 1,
                VisitStatus::Cancelled => acc.cancelled += 1,
            }
            acc
        })
    }
}
