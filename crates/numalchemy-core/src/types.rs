use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Numeric kind a constraint set is typed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NumericKind {
    /// Signed 64-bit integers.
    Integer,
    /// Double precision floating point.
    Float,
    /// Arbitrary-precision decimals.
    Decimal,
}

impl NumericKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericKind::Integer => "integer",
            NumericKind::Float => "float",
            NumericKind::Decimal => "decimal",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
