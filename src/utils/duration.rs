//! Duration literal parsing (`90s`, `1h30m`, `1.5h`, `250ms`)

use core::time::Duration;

use regex::Regex;
use thiserror::Error;

/// One `<decimal><unit>` group; the unit is optional so a missing unit can be reported
const GROUP_PATTERN: &str = r"^([0-9]*)(?:\.([0-9]*))?(ns|us|µs|μs|ms|s|m|h)?";

/// Errors produced while parsing a duration literal
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DurationError {
    #[error("invalid duration \"\"")]
    Empty,

    #[error("negative duration {literal:?} is not allowed")]
    Negative { literal: String },

    #[error("invalid duration {literal:?}")]
    Invalid { literal: String },

    #[error("missing unit in duration {literal:?}")]
    MissingUnit { literal: String },

    #[error("duration {literal:?} is out of range")]
    Overflow { literal: String },

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

/// Nanoseconds per unit suffix
fn unit_nanos(unit: &str) -> u128 {
    match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => 1_000,
        "ms" => 1_000_000,
        "s" => 1_000_000_000,
        "m" => 60 * 1_000_000_000,
        _ => 3_600 * 1_000_000_000,
    }
}

/// Parse a duration literal into a [`Duration`]
///
/// Accepts an optional leading `+` followed by one or more groups of a
/// decimal number and a unit (`ns`, `us`, `µs`, `ms`, `s`, `m`, `h`).
/// A bare `0` is accepted without a unit.
///
/// # Errors
///
/// Returns an error if:
/// - The literal is empty or negative
/// - A group has no digits or no unit
/// - The total exceeds the range of signed 64-bit nanoseconds
#[inline]
pub fn parse_duration(literal: &str) -> Result<Duration, DurationError> {
    let trimmed = literal.trim();
    if trimmed.is_empty() {
        return Err(DurationError::Empty);
    }
    // Only a negative zero is representable.
    if let Some(magnitude) = trimmed.strip_prefix('-') {
        return match parse_duration(magnitude)? {
            Duration::ZERO => Ok(Duration::ZERO),
            _ => Err(DurationError::Negative {
                literal: literal.to_owned(),
            }),
        };
    }

    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if body == "0" {
        return Ok(Duration::ZERO);
    }
    if body.is_empty() {
        return Err(DurationError::Invalid {
            literal: literal.to_owned(),
        });
    }

    let group = Regex::new(GROUP_PATTERN)?;
    let limit = u128::try_from(i64::MAX).unwrap_or(u128::MAX);
    let mut total: u128 = 0;
    let mut rest = body;

    while !rest.is_empty() {
        let Some(caps) = group.captures(rest) else {
            return Err(DurationError::Invalid {
                literal: literal.to_owned(),
            });
        };

        let whole = caps.get(1).map_or("", |m| m.as_str());
        let fraction = caps.get(2).map_or("", |m| m.as_str());
        if whole.is_empty() && fraction.is_empty() {
            return Err(DurationError::Invalid {
                literal: literal.to_owned(),
            });
        }
        let Some(unit) = caps.get(3) else {
            return Err(DurationError::MissingUnit {
                literal: literal.to_owned(),
            });
        };

        let scale = unit_nanos(unit.as_str());
        let overflow = || DurationError::Overflow {
            literal: literal.to_owned(),
        };

        let whole_value: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let mut nanos = whole_value.checked_mul(scale).ok_or_else(overflow)?;

        // Digits beyond nanosecond precision are dropped.
        let mut divisor: u128 = 1;
        let mut fraction_value: u128 = 0;
        for digit in fraction.bytes().take(18) {
            fraction_value = fraction_value * 10 + u128::from(digit - b'0');
            divisor *= 10;
        }
        nanos += fraction_value * scale / divisor;

        total = total.checked_add(nanos).ok_or_else(overflow)?;
        if total > limit {
            return Err(overflow());
        }

        let consumed = caps.get(0).map_or(0, |m| m.end());
        rest = &rest[consumed..];
    }

    let nanos = u64::try_from(total).map_err(|_| DurationError::Overflow {
        literal: literal.to_owned(),
    })?;
    Ok(Duration::from_nanos(nanos))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "These are unit tests")]
mod tests {
    use super::*;

    #[test]
    fn parses_single_units() {
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3_600));
        assert_eq!(parse_duration("15m").unwrap(), Duration::from_secs(900));
        assert_eq!(parse_duration("90s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_duration("7us").unwrap(), Duration::from_micros(7));
        assert_eq!(parse_duration("7µs").unwrap(), Duration::from_micros(7));
        assert_eq!(parse_duration("3ns").unwrap(), Duration::from_nanos(3));
    }

    #[test]
    fn parses_compound_and_fractional_literals() {
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5_400));
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::from_secs(5_400));
        assert_eq!(parse_duration(".5s").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("+2m").unwrap(), Duration::from_secs(120));
    }

    #[test]
    fn bare_zero_needs_no_unit() {
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(parse_duration("-0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("-0s").unwrap(), Duration::ZERO);
        assert!(matches!(
            parse_duration("-1ms"),
            Err(DurationError::Negative { .. })
        ));
    }

    #[test]
    fn rejects_malformed_literals() {
        assert!(matches!(parse_duration(""), Err(DurationError::Empty)));
        assert!(matches!(
            parse_duration("-1h"),
            Err(DurationError::Negative { .. })
        ));
        assert!(matches!(
            parse_duration("10"),
            Err(DurationError::MissingUnit { .. })
        ));
        assert!(matches!(
            parse_duration("1x"),
            Err(DurationError::MissingUnit { .. })
        ));
        assert!(matches!(
            parse_duration("h"),
            Err(DurationError::Invalid { .. })
        ));
        assert!(matches!(
            parse_duration("3000000h"),
            Err(DurationError::Overflow { .. })
        ));
    }
}
