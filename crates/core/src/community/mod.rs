//! Communities and their billable units.

pub mod types;

pub use types::{Community, Unit};
