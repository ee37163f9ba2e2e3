//! Core billing and community logic for ComuniApp.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `proration` - Splitting common expenses across units
//! - `community` - Communities and billable units
//! - `expense` - Expense drafts, validation, and collection statistics
//! - `parcel` - Parcel log and its status transitions
//! - `visit` - Visitor log and its status transitions

pub mod community;
pub mod expense;
pub mod parcel;
pub mod proration;
pub mod visit;

mod search;
