use std::fmt;

use numalchemy_core::NumericKind;
use rand::{Rng, RngCore};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Scale kept by generated decimals.
pub const DECIMAL_SCALE: u32 = 6;

/// Upper bound (exclusive) of the random span injected for half-open ranges.
const SEED_SPAN: f64 = 10.0;

/// Arithmetic the range resolver and the synthesizer need from a numeric kind.
pub trait ConstrainedNumber: Copy + PartialOrd + fmt::Debug + fmt::Display {
    const KIND: NumericKind;

    fn zero() -> Self;

    /// Step used to turn an exclusive bound into an inclusive one.
    fn increment() -> Self;

    /// Cast a seed drawn from `[0, 10)` into this kind.
    fn from_seed(seed: f64) -> Self;

    fn abs(self) -> Self;

    /// `None` when the sum leaves the representable range.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `None` when the difference leaves the representable range.
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn saturating_add(self, rhs: Self) -> Self;

    fn saturating_sub(self, rhs: Self) -> Self;

    /// Round `self / multiple` to the nearest integer (ties to even) and scale
    /// back. `multiple` must be non-zero.
    fn snap_to_multiple(self, multiple: Self) -> Self;

    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    fn is_finite(self) -> bool {
        true
    }
}

/// Draw the fallback span used when only one bound is known.
pub fn draw_seed<T: ConstrainedNumber>(rng: &mut dyn RngCore) -> T {
    T::from_seed(rng.random::<f64>() * SEED_SPAN)
}

impl ConstrainedNumber for i64 {
    const KIND: NumericKind = NumericKind::Integer;

    fn zero() -> Self {
        0
    }

    fn increment() -> Self {
        1
    }

    fn from_seed(seed: f64) -> Self {
        seed as i64
    }

    fn abs(self) -> Self {
        self.saturating_abs()
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        i64::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        i64::checked_sub(self, rhs)
    }

    fn saturating_add(self, rhs: Self) -> Self {
        i64::saturating_add(self, rhs)
    }

    fn saturating_sub(self, rhs: Self) -> Self {
        i64::saturating_sub(self, rhs)
    }

    fn snap_to_multiple(self, multiple: Self) -> Self {
        let quotient = (self as f64 / multiple as f64).round_ties_even();
        (quotient as i64).saturating_mul(multiple)
    }
}

impl ConstrainedNumber for f64 {
    const KIND: NumericKind = NumericKind::Float;

    fn zero() -> Self {
        0.0
    }

    fn increment() -> Self {
        0.0001
    }

    fn from_seed(seed: f64) -> Self {
        seed
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs).filter(|sum| sum.is_finite())
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(self - rhs).filter(|difference| difference.is_finite())
    }

    fn saturating_add(self, rhs: Self) -> Self {
        (self + rhs).clamp(f64::MIN, f64::MAX)
    }

    fn saturating_sub(self, rhs: Self) -> Self {
        (self - rhs).clamp(f64::MIN, f64::MAX)
    }

    fn snap_to_multiple(self, multiple: Self) -> Self {
        (self / multiple).round_ties_even() * multiple
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

impl ConstrainedNumber for Decimal {
    const KIND: NumericKind = NumericKind::Decimal;

    fn zero() -> Self {
        Decimal::ZERO
    }

    fn increment() -> Self {
        Decimal::new(1, 3)
    }

    fn from_seed(seed: f64) -> Self {
        Decimal::from_f64(seed)
            .unwrap_or(Decimal::ZERO)
            .round_dp_with_strategy(DECIMAL_SCALE, RoundingStrategy::ToZero)
    }

    fn abs(self) -> Self {
        Decimal::abs(&self)
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Decimal::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Decimal::checked_sub(self, rhs)
    }

    fn saturating_add(self, rhs: Self) -> Self {
        Decimal::saturating_add(self, rhs)
    }

    fn saturating_sub(self, rhs: Self) -> Self {
        Decimal::saturating_sub(self, rhs)
    }

    fn snap_to_multiple(self, multiple: Self) -> Self {
        (self / multiple).round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven) * multiple
    }
}
