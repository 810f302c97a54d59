use thiserror::Error;

/// Core error type shared across Numalchemy crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The constraint set violates structural invariants.
    #[error("invalid constraints: {0}")]
    InvalidConstraints(String),
}

/// Convenience alias for results returned by Numalchemy crates.
pub type Result<T> = std::result::Result<T, Error>;
