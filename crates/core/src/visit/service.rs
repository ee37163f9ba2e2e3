//! Visit status transitions and search.

use chrono::{DateTime, Utc};

use super::error::VisitError;
use super::types::{Visit, VisitStatus};
use crate::search::matches_any;

/// Stateless service for visit lifecycle operations.
pub struct VisitService;

impl VisitService {
    /// Check a scheduled visitor in.
    ///
    /// # Returns
    /// * `Ok(Visit)` in `Arrived` with `arrival_time` set
    /// * `Err(VisitError::InvalidTransition)` if not in `Scheduled` status
    pub fn mark_arrived(visit: &Visit, at: DateTime<Utc>) -> Result<Visit, VisitError> {
        match visit.status {
            VisitStatus::Scheduled => Ok(Visit {
                status: VisitStatus::Arrived,
                arrival_time: Some(at),
                ..visit.clone()
            }),
            from => Err(VisitError::InvalidTransition {
                from,
                to: VisitStatus::Arrived,
            }),
        }
    }

    /// Check a visitor out.
    ///
    /// # Returns
    /// * `Ok(Visit)` in `Completed` with `departure_time` set
    /// * `Err(VisitError::InvalidTransition)` if not in `Arrived` status
    pub fn mark_completed(visit: &Visit, at: DateTime<Utc>) -> Result<Visit, VisitError> {
        match visit.status {
            VisitStatus::Arrived => Ok(Visit {
                status: VisitStatus::Completed,
                departure_time: Some(at),
                ..visit.clone()
            }),
            from => Err(VisitError::InvalidTransition {
                from,
                to: VisitStatus::Completed,
            }),
        }
    }

    /// Call off a visit that has not started.
    pub fn cancel(visit: &Visit) -> Result<Visit, VisitError> {
        match visit.status {
            VisitStatus::Scheduled => Ok(Visit {
                status: VisitStatus::Cancelled,
                ..visit.clone()
            }),
            from => Err(VisitError::InvalidTransition {
                from,
                to: VisitStatus::Cancelled,
            }),
        }
    }

    /// Visits matching `term` and, when given, `status`.
    #[must_use]
    pub fn search<'a>(visits: &'a [Visit], term: &str, status: Option<VisitStatus>) -> Vec<&'a Visit> {
        visits
            .iter()
            .filter(|v| status.is_none_or(|s| v.status == s))
            .filter(|v| {
                matches_any(
                    term,
                    &[
                        v.visitor_name.as_str(),
                        v.visitor_document.as_str(),
                        v.resident_name.as_str(),
                        v.unit_number.as_str(),
                        v.purpose.as_str(),
                    ],
                )
            })
            .collect()
    }
}
