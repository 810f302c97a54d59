use std::str::FromStr;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;

use numalchemy_core::ConstraintSet;
use numalchemy_generate::digits::adjust_for_max_digits;
use numalchemy_generate::errors::GenerationError;
use numalchemy_generate::{ResolvedRange, generate_decimal, generate_float, generate_int};

fn dec(text: &str) -> Decimal {
    Decimal::from_str(text).expect("valid decimal")
}

fn digit_count(value: Decimal) -> usize {
    value
        .normalize()
        .to_string()
        .chars()
        .filter(|ch| ch.is_ascii_digit())
        .count()
}

#[test]
fn integer_stays_within_inclusive_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let constraints = ConstraintSet::<i64>::new().with_ge(10).with_le(20);
    for _ in 0..200 {
        let value = generate_int(&constraints, &mut rng).expect("feasible");
        assert!((10..=20).contains(&value), "{value} out of range");
    }
}

#[test]
fn integer_multiple_above_minimum_is_returned() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let constraints = ConstraintSet::<i64>::new()
        .with_gt(0)
        .with_lt(100)
        .with_multiple_of(7);
    for _ in 0..20 {
        assert_eq!(generate_int(&constraints, &mut rng).expect("feasible"), 7);
    }
}

#[test]
fn integer_multiple_below_minimum_is_snapped() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let constraints = ConstraintSet::<i64>::new()
        .with_ge(50)
        .with_le(100)
        .with_multiple_of(10);
    for _ in 0..200 {
        let value = generate_int(&constraints, &mut rng).expect("feasible");
        assert_eq!(value % 10, 0);
        assert!((50..=100).contains(&value), "{value} out of range");
    }
}

#[test]
fn zero_multiple_short_circuits_every_kind() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    let ints = ConstraintSet::<i64>::new()
        .with_ge(10)
        .with_le(5)
        .with_multiple_of(0);
    assert_eq!(generate_int(&ints, &mut rng).expect("zero"), 0);

    let floats = ConstraintSet::<f64>::new().with_gt(3.0).with_multiple_of(0.0);
    assert_eq!(generate_float(&floats, &mut rng).expect("zero"), 0.0);

    let decimals = ConstraintSet::new()
        .with_ge(dec("1"))
        .with_multiple_of(Decimal::ZERO);
    assert_eq!(generate_decimal(&decimals, &mut rng).expect("zero"), Decimal::ZERO);
}

#[test]
fn infeasible_integer_sets_are_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let empty = ConstraintSet::<i64>::new().with_ge(10).with_le(10);
    assert!(matches!(
        generate_int(&empty, &mut rng),
        Err(GenerationError::InfeasibleRange(_))
    ));

    let multiple = ConstraintSet::<i64>::new().with_le(5).with_multiple_of(5);
    assert!(matches!(
        generate_int(&multiple, &mut rng),
        Err(GenerationError::MultipleOfExceedsMaximum(_))
    ));
}

#[test]
fn lower_bound_only_gets_a_short_span() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let constraints = ConstraintSet::<i64>::new().with_ge(3);
    for _ in 0..100 {
        let value = generate_int(&constraints, &mut rng).expect("feasible");
        assert!((3..=12).contains(&value), "{value} out of range");
    }
}

#[test]
fn unconstrained_integer_is_generated() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let value = generate_int(&ConstraintSet::new(), &mut rng).expect("unconstrained");
    assert!((0..=200).contains(&value));
}

#[test]
fn float_respects_exclusive_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let constraints = ConstraintSet::<f64>::new().with_gt(0.5).with_lt(1.5);
    for _ in 0..200 {
        let value = generate_float(&constraints, &mut rng).expect("feasible");
        assert!(value > 0.5 && value < 1.5, "{value} out of range");
    }
}

#[test]
fn float_multiple_below_minimum_is_snapped() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let constraints = ConstraintSet::<f64>::new()
        .with_ge(10.0)
        .with_le(20.0)
        .with_multiple_of(2.5);
    for _ in 0..200 {
        let value = generate_float(&constraints, &mut rng).expect("feasible");
        assert!((value / 2.5).fract().abs() < 1e-9, "{value} is not a multiple");
        assert!((10.0..=20.0).contains(&value), "{value} out of range");
    }
}

#[test]
fn decimal_stays_within_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(10);
    let constraints = ConstraintSet::new()
        .with_ge(dec("1.5"))
        .with_le(dec("2.5"));
    for _ in 0..200 {
        let value = generate_decimal(&constraints, &mut rng).expect("feasible");
        assert!(value >= dec("1.5") && value <= dec("2.5"), "{value} out of range");
    }
}

#[test]
fn decimal_multiple_of_is_unsupported() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let constraints = ConstraintSet::new().with_multiple_of(dec("5"));
    assert!(matches!(
        generate_decimal(&constraints, &mut rng),
        Err(GenerationError::Unsupported(_))
    ));
}

#[test]
fn decimal_max_digits_must_be_positive() {
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let constraints = ConstraintSet::new().with_le(dec("10")).with_max_digits(0);
    assert!(matches!(
        generate_decimal(&constraints, &mut rng),
        Err(GenerationError::InvalidMaxDigits(_))
    ));
}

#[test]
fn decimal_places_must_be_below_max_digits() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let constraints = ConstraintSet::new()
        .with_le(dec("10"))
        .with_max_digits(2)
        .with_decimal_places(2);
    assert!(matches!(
        generate_decimal(&constraints, &mut rng),
        Err(GenerationError::InvalidMaxDigits(_))
    ));
}

#[test]
fn decimal_maximum_is_clamped_to_max_digits() {
    let mut rng = ChaCha8Rng::seed_from_u64(14);
    let constraints = ConstraintSet::new()
        .with_ge(dec("5"))
        .with_le(dec("5000"))
        .with_max_digits(3);
    for _ in 0..100 {
        let value = generate_decimal(&constraints, &mut rng).expect("feasible");
        assert!(value >= dec("5") && value <= dec("999"), "{value} out of range");
        assert!(digit_count(value) <= 3, "{value} exceeds the digit budget");
    }

    let adjusted = adjust_for_max_digits(ResolvedRange::new(None, Some(dec("12345"))), 3, None)
        .expect("clamped");
    assert_eq!(adjusted.maximum, Some(dec("999")));
    let adjusted = adjust_for_max_digits(ResolvedRange::new(None, Some(dec("-12345"))), 3, None)
        .expect("clamped");
    assert_eq!(adjusted.maximum, Some(dec("-999")));
}

#[test]
fn decimal_minimum_longer_than_max_digits_is_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let constraints = ConstraintSet::new()
        .with_ge(dec("100"))
        .with_le(dec("5000"))
        .with_max_digits(3);
    assert!(matches!(
        generate_decimal(&constraints, &mut rng),
        Err(GenerationError::InvalidMaxDigits(_))
    ));
}

#[test]
fn decimal_is_trimmed_to_digit_budget() {
    let mut rng = ChaCha8Rng::seed_from_u64(15);
    let constraints = ConstraintSet::new()
        .with_ge(dec("0"))
        .with_le(dec("50"))
        .with_max_digits(5)
        .with_decimal_places(2);
    for _ in 0..100 {
        let value = generate_decimal(&constraints, &mut rng).expect("feasible");
        assert!(digit_count(value) <= 3, "{value} exceeds the digit budget");
        assert!(value >= Decimal::ZERO && value <= dec("50"), "{value} out of range");
    }
}

// Known boundary gap: trimming drops leading whole digits once the fraction is
// exhausted and the result is not checked against the minimum again.
#[test]
fn digit_trimming_can_drop_below_minimum() {
    let mut rng = ChaCha8Rng::seed_from_u64(16);
    let minimum = dec("123.4");
    let constraints = ConstraintSet::new()
        .with_ge(minimum)
        .with_le(dec("123.9"))
        .with_decimal_places(2);
    let value = generate_decimal(&constraints, &mut rng).expect("generated");
    assert_eq!(value, dec("23"));
    assert!(value < minimum);
}

#[test]
fn integer_bounds_at_the_type_limits() {
    let mut rng = ChaCha8Rng::seed_from_u64(18);
    let constraints = ConstraintSet::<i64>::new().with_gt(i64::MAX);
    assert!(matches!(
        generate_int(&constraints, &mut rng),
        Err(GenerationError::InfeasibleRange(_))
    ));

    let constraints = ConstraintSet::<i64>::new().with_ge(i64::MAX - 1);
    for _ in 0..50 {
        let value = generate_int(&constraints, &mut rng).expect("feasible");
        assert!(value >= i64::MAX - 1, "{value} below the minimum");
    }

    let constraints = ConstraintSet::<i64>::new().with_lt(i64::MIN);
    assert!(matches!(
        generate_int(&constraints, &mut rng),
        Err(GenerationError::InfeasibleRange(_))
    ));
}

#[test]
fn float_range_spanning_every_finite_value() {
    let mut rng = ChaCha8Rng::seed_from_u64(19);
    let constraints = ConstraintSet::new().with_ge(-f64::MAX).with_le(f64::MAX);
    for _ in 0..50 {
        let value = generate_float(&constraints, &mut rng).expect("feasible");
        assert!(value.is_finite(), "{value} is not finite");
    }

    let constraints = ConstraintSet::new().with_ge(f64::NEG_INFINITY).with_le(1.0);
    assert!(matches!(
        generate_float(&constraints, &mut rng),
        Err(GenerationError::InfeasibleRange(_))
    ));
}

#[test]
fn decimal_range_spanning_every_representable_value() {
    let mut rng = ChaCha8Rng::seed_from_u64(20);
    let constraints = ConstraintSet::new()
        .with_ge(Decimal::MIN)
        .with_le(Decimal::MAX);
    for _ in 0..50 {
        let value = generate_decimal(&constraints, &mut rng).expect("feasible");
        assert!((Decimal::MIN..=Decimal::MAX).contains(&value));
    }
}
