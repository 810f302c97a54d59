use thiserror::Error;

/// Errors emitted while generating constrained numbers.
///
/// Every variant except the loading ones is a precondition violation: the
/// constraint set itself is infeasible, so retrying cannot help.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("infeasible range: {0}")]
    InfeasibleRange(String),
    #[error("infeasible multiple_of: {0}")]
    MultipleOfExceedsMaximum(String),
    #[error("unsupported feature: {0}")]
    Unsupported(String),
    #[error("invalid max_digits: {0}")]
    InvalidMaxDigits(String),
    #[error("invalid decimal: {0}")]
    InvalidDecimal(String),
    #[error("invalid constraints: {0}")]
    Core(#[from] numalchemy_core::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging error: {0}")]
    Logging(String),
}
