//! Core contracts and helpers for Numalchemy.
//!
//! This crate defines the constraint-set types attached to numeric fields,
//! the structural validation applied to them, and the shared error type.

pub mod constraints;
pub mod error;
pub mod types;
pub mod validation;

pub use constraints::{ConstraintSet, NumericConstraints};
pub use error::{Error, Result};
pub use types::NumericKind;
pub use validation::{IssueSeverity, ValidationIssue, ValidationReport, validate_constraints};

pub use rust_decimal::Decimal;
