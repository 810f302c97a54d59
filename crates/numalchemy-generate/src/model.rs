use std::fmt;
use std::path::Path;

use numalchemy_core::{NumericConstraints, NumericKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

/// Options for the number factory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateOptions {
    /// Seed of the random source; equal seeds replay equal sequences.
    pub seed: u64,
    /// Log output format used by [`crate::logging::init_logging`].
    pub log_format: LogFormat,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            log_format: LogFormat::Plain,
        }
    }
}

impl GenerateOptions {
    pub fn from_toml_str(content: &str) -> Result<Self, GenerationError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, GenerationError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Parse a kind-tagged constraint set from its JSON form.
pub fn parse_constraints(json: &str) -> Result<NumericConstraints, GenerationError> {
    Ok(serde_json::from_str(json)?)
}

/// Value produced for a [`NumericConstraints`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeneratedNumber {
    Integer(i64),
    Float(f64),
    Decimal(Decimal),
}

impl GeneratedNumber {
    pub fn kind(&self) -> NumericKind {
        match self {
            GeneratedNumber::Integer(_) => NumericKind::Integer,
            GeneratedNumber::Float(_) => NumericKind::Float,
            GeneratedNumber::Decimal(_) => NumericKind::Decimal,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GeneratedNumber::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GeneratedNumber::Integer(value) => Some(*value as f64),
            GeneratedNumber::Float(value) => Some(*value),
            GeneratedNumber::Decimal(_) => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            GeneratedNumber::Decimal(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for GeneratedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratedNumber::Integer(value) => write!(f, "{value}"),
            GeneratedNumber::Float(value) => write!(f, "{value}"),
            GeneratedNumber::Decimal(value) => write!(f, "{value}"),
        }
    }
}
