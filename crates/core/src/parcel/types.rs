//! Parcel log types.

use chrono::{DateTime, Utc};
use comuniapp_shared::types::ParcelId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parcel status at the concierge desk.
///
/// The valid transitions are:
/// - Received → Retrieved (resident picked it up)
/// - Received → Expired (never claimed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParcelStatus {
    /// Held at the concierge desk.
    #[default]
    Received,
    /// Handed over to the resident.
    Retrieved,
    /// Not claimed in time.
    Expired,
}

impl ParcelStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "RECEIVED",
            Self::Retrieved => "RETRIEVED",
            Self::Expired => "EXPIRED",
        }
    }

    /// Returns true once the parcel has left the desk's custody.
    #[must_use]
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Retrieved | Self::Expired)
    }
}

impl fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A package received for a resident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Parcel ID.
    pub id: ParcelId,
    /// Destination unit number.
    pub unit_number: String,
    /// What arrived.
    pub description: String,
    /// Who sent it.
    pub sender: String,
    /// Sender phone.
    #[serde(default)]
    pub sender_phone: Option<String>,
    /// Resident the parcel is for.
    pub recipient_name: String,
    /// Recipient's residence label.
    pub recipient_residence: String,
    /// Recipient phone.
    #[serde(default)]
    pub recipient_phone: Option<String>,
    /// Recipient email.
    #[serde(default)]
    pub recipient_email: Option<String>,
    /// Concierge who received it.
    pub concierge_name: String,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// When the desk received it.
    pub received_at: DateTime<Utc>,
    /// When the resident picked it up.
    #[serde(default)]
    pub retrieved_at: Option<DateTime<Utc>>,
    /// Current status.
    #[serde(default)]
    pub status: ParcelStatus,
}

/// Parcel totals per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParcelCounts {
    /// All parcels.
    pub total: usize,
    /// Waiting at the desk.
    pub received: usize,
    /// Picked up.
    pub retrieved: usize,
    /// Never claimed.
    pub expired: usize,
}

impl ParcelCounts {
    /// Counts parcels per status.
    #[must_use]
    pub fn from_parcels(parcels: &[Parcel]) -> Self {
        parcels.iter().fold(Self::default(), |mut acc, p| {
            acc.total += 1;
            match p.status {
                ParcelStatus::Received => acc.received += 1,
                ParcelStatus::Retrieved => acc.retrieved += 1,
                ParcelStatus::Expired => acc.expired += 1,
            }
            acc
        })
    }
}
