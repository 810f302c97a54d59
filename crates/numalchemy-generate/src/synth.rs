use crate::adapter::NumberGenerator;
use crate::numeric::ConstrainedNumber;
use crate::range::ResolvedRange;

/// Combine a resolved range with an optional `multiple_of` into one value.
///
/// Never fails: infeasible combinations are rejected by the range resolver.
pub fn synthesize<T, G>(range: ResolvedRange<T>, multiple_of: Option<T>, generator: &mut G) -> T
where
    T: ConstrainedNumber,
    G: NumberGenerator<T> + ?Sized,
{
    match (range.minimum, range.maximum, multiple_of) {
        (Some(minimum), Some(maximum), None) => generator.in_range(minimum, maximum),
        (Some(minimum), Some(_), Some(multiple_of)) if multiple_of >= minimum => multiple_of,
        (Some(minimum), Some(maximum), Some(multiple_of)) => {
            let snapped = generator
                .in_range(minimum, maximum)
                .snap_to_multiple(multiple_of);
            pull_into_range(snapped, multiple_of.abs(), minimum, maximum)
        }
        (_, _, Some(multiple_of)) => multiple_of,
        (_, _, None) => generator.unbounded(),
    }
}

// Rounding to the nearest multiple can land one step outside the range.
fn pull_into_range<T: ConstrainedNumber>(value: T, step: T, minimum: T, maximum: T) -> T {
    if value < minimum {
        let raised = value.saturating_add(step);
        if raised <= maximum {
            return raised;
        }
    }
    if value > maximum {
        let lowered = value.saturating_sub(step);
        if lowered >= minimum {
            return lowered;
        }
    }
    value
}
