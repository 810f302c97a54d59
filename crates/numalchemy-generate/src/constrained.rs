//! Per-kind entry points turning a constraint set into one value.

use numalchemy_core::{ConstraintSet, NumericConstraints};
use rand::RngCore;
use rust_decimal::Decimal;
use tracing::debug;

use crate::adapter::{RngNumberGenerator, SampleNumber};
use crate::digits::{adjust_for_max_digits, digit_budget, trim_decimal};
use crate::errors::GenerationError;
use crate::model::GeneratedNumber;
use crate::numeric::ConstrainedNumber;
use crate::range::resolve_range;
use crate::synth::synthesize;

/// Generate an integer satisfying `constraints`.
pub fn generate_int(
    constraints: &ConstraintSet<i64>,
    rng: &mut dyn RngCore,
) -> Result<i64, GenerationError> {
    generate_bounded(constraints, rng)
}

/// Generate a float satisfying `constraints`.
pub fn generate_float(
    constraints: &ConstraintSet<f64>,
    rng: &mut dyn RngCore,
) -> Result<f64, GenerationError> {
    generate_bounded(constraints, rng)
}

/// Generate a decimal satisfying `constraints`.
///
/// A non-zero `multiple_of` is rejected. When `max_digits` or
/// `decimal_places` is set the value is trimmed to the digit budget, which
/// may move it below the declared minimum.
pub fn generate_decimal(
    constraints: &ConstraintSet<Decimal>,
    rng: &mut dyn RngCore,
) -> Result<Decimal, GenerationError> {
    if let Some(multiple_of) = constraints.multiple_of {
        if multiple_of.is_zero() {
            return Ok(Decimal::ZERO);
        }
        return Err(GenerationError::Unsupported(
            "generating decimals with multiple_of is not supported".to_string(),
        ));
    }

    let mut range = resolve_range(constraints, None, rng)?;
    if let Some(max_digits) = constraints.max_digits {
        range = adjust_for_max_digits(range, max_digits, constraints.decimal_places)?;
    }

    let value = synthesize(range, None, &mut RngNumberGenerator::new(rng));
    let value = match digit_budget(constraints.max_digits, constraints.decimal_places) {
        Some(max_length) => trim_decimal(value, max_length)?,
        None => value,
    };

    let kind = Decimal::KIND;
    debug!(
        kind = %kind,
        minimum = ?range.minimum,
        maximum = ?range.maximum,
        value = %value,
        "generated constrained number"
    );
    Ok(value)
}

/// Dispatch on the kind of `constraints`.
pub fn generate(
    constraints: &NumericConstraints,
    rng: &mut dyn RngCore,
) -> Result<GeneratedNumber, GenerationError> {
    match constraints {
        NumericConstraints::Integer(set) => generate_int(set, rng).map(GeneratedNumber::Integer),
        NumericConstraints::Float(set) => generate_float(set, rng).map(GeneratedNumber::Float),
        NumericConstraints::Decimal(set) => {
            generate_decimal(set, rng).map(GeneratedNumber::Decimal)
        }
    }
}

// Shared integer/float path: zero multiple_of short-circuits, otherwise the
// divisor takes part in both resolution and synthesis.
fn generate_bounded<T>(
    constraints: &ConstraintSet<T>,
    rng: &mut dyn RngCore,
) -> Result<T, GenerationError>
where
    T: ConstrainedNumber + SampleNumber,
{
    let multiple_of = constraints.multiple_of;
    if multiple_of.is_some_and(ConstrainedNumber::is_zero) {
        return Ok(T::zero());
    }

    let range = resolve_range(constraints, multiple_of, rng)?;
    let value = synthesize(range, multiple_of, &mut RngNumberGenerator::new(rng));

    let kind = T::KIND;
    debug!(
        kind = %kind,
        minimum = ?range.minimum,
        maximum = ?range.maximum,
        multiple_of = ?multiple_of,
        value = %value,
        "generated constrained number"
    );
    Ok(value)
}
