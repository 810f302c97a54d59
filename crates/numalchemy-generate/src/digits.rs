use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;

use crate::errors::GenerationError;
use crate::range::ResolvedRange;

/// Number of decimal digits in the absolute integer part of `value`.
pub fn digit_length(value: Decimal) -> usize {
    let whole = value.abs().trunc().normalize().to_string();
    whole.split('.').next().map_or(0, str::len)
}

/// Fit a resolved decimal range into a `max_digits` budget.
///
/// A maximum wider than the budget is clamped to the longest run of nines
/// that fits, keeping its sign. A minimum that cannot fit is an error; it
/// fits when its digit length does not exceed the digit length of
/// `max_digits` itself.
pub fn adjust_for_max_digits(
    range: ResolvedRange<Decimal>,
    max_digits: i64,
    decimal_places: Option<i64>,
) -> Result<ResolvedRange<Decimal>, GenerationError> {
    if max_digits <= 0 {
        return Err(GenerationError::InvalidMaxDigits(format!(
            "max_digits must be greater than 0 (got {max_digits})"
        )));
    }
    let budget = usize::try_from(max_digits).unwrap_or(usize::MAX);

    if let Some(minimum) = range.minimum
        && digit_length(Decimal::from(max_digits)) < digit_length(minimum)
    {
        return Err(GenerationError::InvalidMaxDigits(format!(
            "minimum {minimum} is longer than max_digits {max_digits}"
        )));
    }

    let mut maximum = range.maximum;
    if let Some(current) = maximum
        && digit_length(current) > budget
    {
        let clamped = nines(budget, current.is_sign_negative())?;
        warn!(
            maximum = %current,
            clamped = %clamped,
            max_digits,
            "maximum exceeds max_digits, clamping"
        );
        maximum = Some(clamped);
    }

    if let Some(decimal_places) = decimal_places
        && max_digits <= decimal_places
    {
        return Err(GenerationError::InvalidMaxDigits(format!(
            "max_digits must be bigger than decimal_places (max_digits {max_digits}, decimal_places {decimal_places})"
        )));
    }

    if let (Some(minimum), Some(maximum)) = (range.minimum, maximum)
        && minimum >= maximum
    {
        return Err(GenerationError::InfeasibleRange(format!(
            "minimum {minimum} is not lower than maximum {maximum} clamped to {max_digits} digits"
        )));
    }

    Ok(ResolvedRange::new(range.minimum, maximum))
}

/// Total digit budget implied by `max_digits` and `decimal_places`.
pub fn digit_budget(max_digits: Option<i64>, decimal_places: Option<i64>) -> Option<usize> {
    let budget = match (max_digits, decimal_places) {
        (Some(max_digits), Some(decimal_places)) => max_digits - decimal_places,
        (Some(max_digits), None) => max_digits,
        (None, Some(decimal_places)) => decimal_places,
        (None, None) => return None,
    };
    Some(usize::try_from(budget).unwrap_or(0))
}

/// Drop digits from the textual form of a decimal until at most `max_length`
/// remain.
///
/// Fractional digits go first, right to left; once none are left, whole
/// digits are dropped from the left, so the magnitude can shrink. The result
/// is not checked against any range.
pub fn trim_digits(text: &str, max_length: usize) -> String {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let mut whole = whole.to_string();
    let mut fraction = fraction.to_string();

    while whole.len() + fraction.len() > max_length {
        if fraction.pop().is_none() {
            whole.remove(0);
        }
    }

    if whole.is_empty() && fraction.is_empty() {
        return "0".to_string();
    }

    let mut trimmed = String::with_capacity(whole.len() + fraction.len() + 2);
    if negative {
        trimmed.push('-');
    }
    trimmed.push_str(&whole);
    if !fraction.is_empty() {
        trimmed.push('.');
        trimmed.push_str(&fraction);
    }
    trimmed
}

/// [`trim_digits`] applied to a decimal value.
pub fn trim_decimal(value: Decimal, max_length: usize) -> Result<Decimal, GenerationError> {
    let trimmed = trim_digits(&value.normalize().to_string(), max_length);
    Decimal::from_str(&trimmed)
        .map_err(|err| GenerationError::InvalidDecimal(format!("'{trimmed}': {err}")))
}

fn nines(count: usize, negative: bool) -> Result<Decimal, GenerationError> {
    let digits = "9".repeat(count);
    let value = Decimal::from_str(&digits).map_err(|err| {
        GenerationError::InvalidMaxDigits(format!("{count} digits cannot be represented: {err}"))
    })?;
    Ok(if negative { -value } else { value })
}
