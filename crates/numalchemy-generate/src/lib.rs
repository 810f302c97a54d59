//! Constraint-aware numeric generation for Numalchemy.
//!
//! Resolves a field's declared bounds, `multiple_of` and digit limits into a
//! single random value of the field's kind, deterministically for a given
//! seed.

pub mod adapter;
pub mod constrained;
pub mod digits;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod model;
pub mod numeric;
pub mod range;
pub mod synth;

pub use adapter::{NumberGenerator, RngNumberGenerator, SampleNumber};
pub use constrained::{generate, generate_decimal, generate_float, generate_int};
pub use engine::NumberFactory;
pub use errors::GenerationError;
pub use model::{GenerateOptions, GeneratedNumber, LogFormat, parse_constraints};
pub use range::{ResolvedRange, resolve_range};
