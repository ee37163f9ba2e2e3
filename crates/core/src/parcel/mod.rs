//! Parcel log kept by the concierge desk.

pub mod error;
pub mod service;
pub mod types;

pub use error::ParcelError;
pub use service::ParcelService;
pub use types::{Parcel, ParcelCounts, ParcelStatus};
