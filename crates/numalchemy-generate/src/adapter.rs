use rand::{Rng, RngCore};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::numeric::DECIMAL_SCALE;

/// Width of the window drawn for values with no bound at all.
const UNBOUNDED_SPAN: i64 = 100;
/// Number of evenly spaced decimal positions sampled inside a range.
const DECIMAL_STEPS: i64 = 1_000_000;

/// Source of plain random numbers for one numeric kind.
pub trait NumberGenerator<T> {
    /// Uniform value in `[minimum, maximum]`. Requires `minimum <= maximum`.
    fn in_range(&mut self, minimum: T, maximum: T) -> T;

    /// Value with no constraint at all.
    fn unbounded(&mut self) -> T;
}

/// Kinds the rand-backed generator knows how to sample.
pub trait SampleNumber: Sized {
    fn sample_in_range<R: RngCore + ?Sized>(rng: &mut R, minimum: Self, maximum: Self) -> Self;

    fn sample_unbounded<R: RngCore + ?Sized>(rng: &mut R) -> Self;
}

/// [`NumberGenerator`] backed by any `rand` generator.
pub struct RngNumberGenerator<'a, R: RngCore + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: RngCore + ?Sized> RngNumberGenerator<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<T: SampleNumber, R: RngCore + ?Sized> NumberGenerator<T> for RngNumberGenerator<'_, R> {
    fn in_range(&mut self, minimum: T, maximum: T) -> T {
        T::sample_in_range(self.rng, minimum, maximum)
    }

    fn unbounded(&mut self) -> T {
        T::sample_unbounded(self.rng)
    }
}

fn truncated_offset(span: Decimal, fraction: Decimal) -> Decimal {
    (span * fraction).round_dp_with_strategy(DECIMAL_SCALE, RoundingStrategy::ToZero)
}

fn unbounded_window<R: RngCore + ?Sized>(rng: &mut R) -> (i64, i64) {
    let minimum = rng.random_range(0..=UNBOUNDED_SPAN);
    let maximum = minimum + rng.random_range(0..=UNBOUNDED_SPAN);
    (minimum, maximum)
}

impl SampleNumber for i64 {
    fn sample_in_range<R: RngCore + ?Sized>(rng: &mut R, minimum: i64, maximum: i64) -> i64 {
        rng.random_range(minimum..=maximum)
    }

    fn sample_unbounded<R: RngCore + ?Sized>(rng: &mut R) -> i64 {
        let (minimum, maximum) = unbounded_window(rng);
        Self::sample_in_range(rng, minimum, maximum)
    }
}

impl SampleNumber for f64 {
    fn sample_in_range<R: RngCore + ?Sized>(rng: &mut R, minimum: f64, maximum: f64) -> f64 {
        if (maximum - minimum).is_finite() {
            return rng.random_range(minimum..=maximum);
        }
        // The width overflows; halving both ends is exact and keeps it finite.
        let halved = rng.random_range(minimum / 2.0..=maximum / 2.0);
        (halved * 2.0).clamp(minimum, maximum)
    }

    fn sample_unbounded<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
        let (minimum, maximum) = unbounded_window(rng);
        Self::sample_in_range(rng, minimum as f64, maximum as f64)
    }
}

impl SampleNumber for Decimal {
    fn sample_in_range<R: RngCore + ?Sized>(
        rng: &mut R,
        minimum: Decimal,
        maximum: Decimal,
    ) -> Decimal {
        let steps = rng.random_range(0..=DECIMAL_STEPS);
        let fraction = Decimal::new(steps, DECIMAL_SCALE);
        let value = match maximum.checked_sub(minimum) {
            Some(span) => minimum.saturating_add(truncated_offset(span, fraction)),
            None => {
                // The width overflows; sample between the quartered ends and scale back.
                let divisor = Decimal::from(4);
                let low = minimum / divisor;
                let high = maximum / divisor;
                let quartered = low.saturating_add(truncated_offset(high - low, fraction));
                quartered.checked_mul(divisor).unwrap_or(maximum)
            }
        };
        value.clamp(minimum, maximum).normalize()
    }

    fn sample_unbounded<R: RngCore + ?Sized>(rng: &mut R) -> Decimal {
        let (minimum, maximum) = unbounded_window(rng);
        Self::sample_in_range(rng, Decimal::from(minimum), Decimal::from(maximum))
    }
}
