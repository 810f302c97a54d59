use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::NumericKind;

/// Declared constraints of a numeric field, typed to one numeric kind.
///
/// Every field is optional. When both an inclusive and an exclusive bound are
/// supplied for the same side, the inclusive one (`le`/`ge`) wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConstraintSet<T> {
    /// Exclusive upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<T>,
    /// Inclusive upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub le: Option<T>,
    /// Exclusive lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<T>,
    /// Inclusive lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ge: Option<T>,
    /// The value must be an exact multiple of this divisor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<T>,
    /// Maximum number of digits (decimals only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_digits: Option<i64>,
    /// Maximum number of decimal places (decimals only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<i64>,
}

impl<T> Default for ConstraintSet<T> {
    fn default() -> Self {
        Self {
            lt: None,
            le: None,
            gt: None,
            ge: None,
            multiple_of: None,
            max_digits: None,
            decimal_places: None,
        }
    }
}

impl<T> ConstraintSet<T> {
    /// Unconstrained set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lt(mut self, value: T) -> Self {
        self.lt = Some(value);
        self
    }

    pub fn with_le(mut self, value: T) -> Self {
        self.le = Some(value);
        self
    }

    pub fn with_gt(mut self, value: T) -> Self {
        self.gt = Some(value);
        self
    }

    pub fn with_ge(mut self, value: T) -> Self {
        self.ge = Some(value);
        self
    }

    pub fn with_multiple_of(mut self, value: T) -> Self {
        self.multiple_of = Some(value);
        self
    }

    pub fn with_max_digits(mut self, max_digits: i64) -> Self {
        self.max_digits = Some(max_digits);
        self
    }

    pub fn with_decimal_places(mut self, decimal_places: i64) -> Self {
        self.decimal_places = Some(decimal_places);
        self
    }

    /// Returns true when no constraint at all is declared.
    pub fn is_unconstrained(&self) -> bool {
        self.lt.is_none()
            && self.le.is_none()
            && self.gt.is_none()
            && self.ge.is_none()
            && self.multiple_of.is_none()
            && self.max_digits.is_none()
            && self.decimal_places.is_none()
    }
}

/// Constraint set tagged with the numeric kind it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NumericConstraints {
    Integer(ConstraintSet<i64>),
    Float(ConstraintSet<f64>),
    /// Decimal bounds are serialized as strings to keep their precision.
    Decimal(ConstraintSet<Decimal>),
}

impl NumericConstraints {
    pub fn kind(&self) -> NumericKind {
        match self {
            NumericConstraints::Integer(_) => NumericKind::Integer,
            NumericConstraints::Float(_) => NumericKind::Float,
            NumericConstraints::Decimal(_) => NumericKind::Decimal,
        }
    }
}

impl From<ConstraintSet<i64>> for NumericConstraints {
    fn from(value: ConstraintSet<i64>) -> Self {
        NumericConstraints::Integer(value)
    }
}

impl From<ConstraintSet<f64>> for NumericConstraints {
    fn from(value: ConstraintSet<f64>) -> Self {
        NumericConstraints::Float(value)
    }
}

impl From<ConstraintSet<Decimal>> for NumericConstraints {
    fn from(value: ConstraintSet<Decimal>) -> Self {
        NumericConstraints::Decimal(value)
    }
}
