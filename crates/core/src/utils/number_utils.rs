//! Sanitizers for numeric inputs arriving from manual entry or extraction.
//!
//! Nothing here fails: unusable values collapse to zero or `None` and the
//! caller decides what that means.

use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::constants::{CONSERVATION_TOLERANCE, MAX_PERCENT};

/// Converts a boundary `f64` into a `Decimal`. NaN and infinities become 0;
/// finite values beyond the `Decimal` range clamp to `Decimal::MAX`/`MIN`.
pub fn decimal_from_f64(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(if value < 0.0 {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Parses a currency-like string such as `$1,234.50` or `(12.5)`.
///
/// Returns `None` when the text holds no number.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    let (negative, body) = match trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        Some(inner) => (true, inner),
        None => (false, trimmed),
    };

    let cleaned: String = body
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '_') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let value = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()?;
    Some(if negative { -value.abs() } else { value })
}

/// Clamps to `>= 0`.
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// `a + b`, pinned to `Decimal::MAX`/`MIN` instead of overflowing.
pub fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(if b.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Clamps a percentage to [0, 100] and converts it to a rate in [0, 1].
pub fn percent_to_rate(percent: Decimal) -> Decimal {
    clamp_percent(percent) / MAX_PERCENT
}

/// Clamps a percentage to [0, 100].
pub fn clamp_percent(percent: Decimal) -> Decimal {
    percent.clamp(Decimal::ZERO, MAX_PERCENT)
}

/// Clamps a rate to [0, 1].
pub fn clamp_rate(rate: Decimal) -> Decimal {
    rate.clamp(Decimal::ZERO, Decimal::ONE)
}

/// True when `actual` is within the conservation tolerance of `expected`,
/// relative to `max(|expected|, 1)`.
pub fn within_tolerance(expected: Decimal, actual: Decimal) -> bool {
    let scale = expected.abs().max(Decimal::ONE);
    (expected - actual).abs() <= CONSERVATION_TOLERANCE * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decimal_from_f64_zeroes_non_finite() {
        assert_eq!(decimal_from_f64(f64::NAN), Decimal::ZERO);
        assert_eq!(decimal_from_f64(f64::INFINITY), Decimal::ZERO);
        assert_eq!(decimal_from_f64(f64::NEG_INFINITY), Decimal::ZERO);
        assert_eq!(decimal_from_f64(4113.0), dec!(4113));
    }

    #[test]
    fn test_decimal_from_f64_clamps_out_of_range() {
        assert_eq!(decimal_from_f64(1e40), Decimal::MAX);
        assert_eq!(decimal_from_f64(-1e40), Decimal::MIN);
    }

    #[test]
    fn test_saturating_arithmetic() {
        assert_eq!(saturating_add(Decimal::MAX, Decimal::ONE), Decimal::MAX);
        assert_eq!(saturating_add(Decimal::MIN, -Decimal::ONE), Decimal::MIN);
        assert_eq!(saturating_add(dec!(2), dec!(3)), dec!(5));
    }

    #[test]
    fn test_parse_amount_strips_currency_formatting() {
        assert_eq!(parse_amount("$1,234.50"), Some(dec!(1234.50)));
        assert_eq!(parse_amount(" 5000 "), Some(dec!(5000)));
        assert_eq!(parse_amount("(12.5)"), Some(dec!(-12.5)));
        assert_eq!(parse_amount("-3"), Some(dec!(-3)));
    }

    #[test]
    fn test_parse_amount_rejects_text() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("n/a"), None);
        assert_eq!(parse_amount("$"), None);
    }

    #[test]
    fn test_percent_to_rate_clamps() {
        assert_eq!(percent_to_rate(dec!(20)), dec!(0.2));
        assert_eq!(percent_to_rate(dec!(-5)), Decimal::ZERO);
        assert_eq!(percent_to_rate(dec!(250)), Decimal::ONE);
    }

    #[test]
    fn test_within_tolerance_is_relative() {
        assert!(within_tolerance(dec!(4113), dec!(4113.000001)));
        assert!(!within_tolerance(dec!(4113), dec!(4113.01)));
        assert!(within_tolerance(Decimal::ZERO, dec!(0.0000000001)));
        assert!(!within_tolerance(Decimal::ZERO, dec!(0.01)));
    }

    #[test]
    fn test_clamp_rate() {
        assert_eq!(clamp_rate(dec!(1.5)), Decimal::ONE);
        assert_eq!(clamp_rate(dec!(-0.1)), Decimal::ZERO);
        assert_eq!(clamp_rate(dec!(0.02)), dec!(0.02));
    }
}
