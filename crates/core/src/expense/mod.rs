//! Common expenses: draft forms, validation, and collection statistics.

pub mod error;
pub mod form;
pub mod stats;
pub mod types;


pub use error::{ExpenseError, FormErrors};
pub use form::{ExpenseForm, ExpenseFormAction, ExpensePreview, ItemField};
pub use stats::{ExpenseStats, filter_by_status, percentage};
pub use types::{CommonExpense, ExpenseItem, ExpenseStatus, ResidentExpense, UnitCharge};
