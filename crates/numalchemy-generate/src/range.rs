use numalchemy_core::ConstraintSet;
use rand::RngCore;

use crate::errors::GenerationError;
use crate::numeric::{ConstrainedNumber, draw_seed};

/// Closed working interval derived from a constraint set.
///
/// An absent side means the value is unconstrained in that direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRange<T> {
    pub minimum: Option<T>,
    pub maximum: Option<T>,
}

impl<T> ResolvedRange<T> {
    pub fn new(minimum: Option<T>, maximum: Option<T>) -> Self {
        Self { minimum, maximum }
    }

    pub fn unbounded() -> Self {
        Self {
            minimum: None,
            maximum: None,
        }
    }
}

/// Resolve the bounds of `constraints` into a single inclusive interval.
///
/// Inclusive bounds win over exclusive ones; exclusive bounds are moved inward
/// by the kind's increment. When `multiple_of` is absent and only one side is
/// known, the other side is placed a random span (below ten) away. The
/// `multiple_of` field of `constraints` itself is ignored so callers decide
/// whether it takes part.
pub fn resolve_range<T: ConstrainedNumber>(
    constraints: &ConstraintSet<T>,
    multiple_of: Option<T>,
    rng: &mut dyn RngCore,
) -> Result<ResolvedRange<T>, GenerationError> {
    let seed: T = draw_seed(rng);
    let declared = [
        constraints.lt,
        constraints.le,
        constraints.gt,
        constraints.ge,
        multiple_of,
    ];
    if let Some(value) = declared.into_iter().flatten().find(|value| !value.is_finite()) {
        return Err(GenerationError::InfeasibleRange(format!(
            "bounds must be finite numbers (got {value})"
        )));
    }
    let minimum = match (constraints.ge, constraints.gt) {
        (Some(ge), _) => Some(ge),
        (None, Some(gt)) => Some(gt.checked_add(T::increment()).ok_or_else(|| {
            GenerationError::InfeasibleRange(format!("no {} is greater than {gt}", T::KIND))
        })?),
        (None, None) => None,
    };
    let maximum = match (constraints.le, constraints.lt) {
        (Some(le), _) => Some(le),
        (None, Some(lt)) => Some(lt.checked_sub(T::increment()).ok_or_else(|| {
            GenerationError::InfeasibleRange(format!("no {} is lower than {lt}", T::KIND))
        })?),
        (None, None) => None,
    };

    if let (Some(minimum), Some(maximum)) = (minimum, maximum)
        && minimum >= maximum
    {
        return Err(GenerationError::InfeasibleRange(format!(
            "minimum must be lower than maximum (minimum {minimum}, maximum {maximum})"
        )));
    }

    if let (Some(multiple_of), Some(maximum)) = (multiple_of, maximum)
        && maximum <= multiple_of
    {
        return Err(GenerationError::MultipleOfExceedsMaximum(format!(
            "maximum value must be greater than multiple_of (maximum {maximum}, multiple_of {multiple_of})"
        )));
    }

    if multiple_of.is_none() {
        match (minimum, maximum) {
            (Some(minimum), None) if minimum.is_zero() => {
                return Ok(ResolvedRange::new(Some(minimum), Some(seed)));
            }
            (Some(minimum), None) => {
                let maximum = minimum.saturating_add(seed);
                return Ok(ResolvedRange::new(Some(minimum), Some(maximum)));
            }
            (None, Some(maximum)) => {
                let minimum = maximum.saturating_sub(seed);
                return Ok(ResolvedRange::new(Some(minimum), Some(maximum)));
            }
            _ => {}
        }
    }

    Ok(ResolvedRange::new(minimum, maximum))
}
