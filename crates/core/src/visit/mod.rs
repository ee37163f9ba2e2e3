//! Visitor log.

pub mod error;
pub mod service;
pub mod types;

pub use error::VisitError;
pub use service::VisitService;
pub use types::{Visit, VisitCounts, VisitStatus};
