//! Parcel status transitions and search.

use chrono::{DateTime, Utc};

use super::error::ParcelError;
use super::types::{Parcel, ParcelStatus};
use crate::search::matches_any;

/// Stateless service for parcel lifecycle operations.
///
/// Transitions never mutate their input; they return the updated parcel.
pub struct ParcelService;

impl ParcelService {
    /// Hand a received parcel over to the resident.
    ///
    /// # Returns
    /// * `Ok(Parcel)` in `Retrieved` with `retrieved_at` set
    /// * `Err(ParcelError::InvalidTransition)` if not in `Received` status
    pub fn mark_retrieved(parcel: &Parcel, at: DateTime<Utc>) -> Result<Parcel, ParcelError> {
        Self::transition(parcel, ParcelStatus::Retrieved).map(|mut next| {
            next.retrieved_at = Some(at);
            next
        })
    }

    /// Mark a received parcel as never claimed.
    pub fn mark_expired(parcel: &Parcel) -> Result<Parcel, ParcelError> {
        Self::transition(parcel, ParcelStatus::Expired)
    }

    fn transition(parcel: &Parcel, to: ParcelStatus) -> Result<Parcel, ParcelError> {
        match parcel.status {
            ParcelStatus::Received => Ok(Parcel {
                status: to,
                ..parcel.clone()
            }),
            from => Err(ParcelError::InvalidTransition { from, to }),
        }
    }

    /// Parcels matching `term` and, when given, `status`.
    #[must_use]
    pub fn search<'a>(
        parcels: &'a [Parcel],
        term: &str,
        status: Option<ParcelStatus>,
    ) -> Vec<&'a Parcel> {
        parcels
            .iter()
            .filter(|p| status.is_none_or(|s| p.status == s))
            .filter(|p| {
                matches_any(
                    term,
                    &[
                        p.description.as_str(),
                        p.sender.as_str(),
                        p.recipient_name.as_str(),
                        p.recipient_residence.as_str(),
                        p.concierge_name.as_str(),
                        p.unit_number.as_str(),
                    ],
                )
            })
            .collect()
    }
}
