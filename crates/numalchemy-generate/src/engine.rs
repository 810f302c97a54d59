use numalchemy_core::{ConstraintSet, NumericConstraints, validate_constraints};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::constrained::{generate, generate_decimal, generate_float, generate_int};
use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GeneratedNumber};

/// Seeded entry point for generating constrained numbers.
///
/// Owns its random source so two factories built from the same seed produce
/// the same sequence.
#[derive(Debug, Clone)]
pub struct NumberFactory {
    options: GenerateOptions,
    rng: ChaCha8Rng,
}

impl NumberFactory {
    pub fn new(options: GenerateOptions) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(options.seed);
        Self { options, rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(GenerateOptions {
            seed,
            ..GenerateOptions::default()
        })
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn seed(&self) -> u64 {
        self.options.seed
    }

    /// Restart the random sequence from `seed`.
    pub fn seed_random(&mut self, seed: u64) {
        info!(seed, "reseeding number factory");
        self.options.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    pub fn int(&mut self, constraints: &ConstraintSet<i64>) -> Result<i64, GenerationError> {
        generate_int(constraints, &mut self.rng)
    }

    pub fn float(&mut self, constraints: &ConstraintSet<f64>) -> Result<f64, GenerationError> {
        generate_float(constraints, &mut self.rng)
    }

    pub fn decimal(
        &mut self,
        constraints: &ConstraintSet<Decimal>,
    ) -> Result<Decimal, GenerationError> {
        generate_decimal(constraints, &mut self.rng)
    }

    /// Validate `constraints` structurally, then generate one value.
    pub fn generate(
        &mut self,
        constraints: &NumericConstraints,
    ) -> Result<GeneratedNumber, GenerationError> {
        check_constraints(constraints)?;
        generate(constraints, &mut self.rng)
    }

    /// Generate `count` values from the same constraint set.
    pub fn batch(
        &mut self,
        constraints: &NumericConstraints,
        count: usize,
    ) -> Result<Vec<GeneratedNumber>, GenerationError> {
        check_constraints(constraints)?;
        (0..count)
            .map(|_| generate(constraints, &mut self.rng))
            .collect()
    }
}

impl Default for NumberFactory {
    fn default() -> Self {
        Self::new(GenerateOptions::default())
    }
}

/// Reject structurally invalid constraints and log the remaining warnings.
fn check_constraints(constraints: &NumericConstraints) -> Result<(), GenerationError> {
    let warnings = validate_constraints(constraints).into_result()?;
    for issue in &warnings {
        warn!(
            kind = %constraints.kind(),
            code = %issue.code,
            path = %issue.path,
            "{}",
            issue.message
        );
    }
    Ok(())
}
