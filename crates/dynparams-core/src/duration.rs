//! Duration text grammar
//!
//! Accepts an optional sign followed by one or more `<decimal><unit>` groups,
//! e.g. `"300ms"`, `"-1.5h"`, `"2h45m"`. Valid units are `ns`, `us` (or `µs`,
//! `μs`), `ms`, `s`, `m`, `h`. A bare `"0"` needs no unit. Resolution is one
//! nanosecond and the total must fit in an `i64` of nanoseconds.

use std::fmt;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Magnitude of `i64::MIN`; the largest value a negative duration may reach
const MAGNITUDE_LIMIT: u64 = 1 << 63;

/// Why a duration string was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    Empty,
    Invalid(String),
    MissingUnit(String),
    UnknownUnit { unit: String, input: String },
    Overflow(String),
}

impl fmt::Display for DurationParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationParseError::Empty => write!(f, "empty duration"),
            DurationParseError::Invalid(s) => write!(f, "invalid duration {:?}", s),
            DurationParseError::MissingUnit(s) => write!(f, "missing unit in duration {:?}", s),
            DurationParseError::UnknownUnit { unit, input } => {
                write!(f, "unknown unit {:?} in duration {:?}", unit, input)
            }
            DurationParseError::Overflow(s) => write!(f, "duration out of range {:?}", s),
        }
    }
}

impl std::error::Error for DurationParseError {}

fn unit_scale(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "µs" | "μs" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// Consume leading ASCII digits; `None` on overflow
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: u64 = 0;
    for b in s[..end].bytes() {
        if value > (MAGNITUDE_LIMIT - 1) / 10 {
            return None;
        }
        value = value * 10 + u64::from(b - b'0');
        if value > MAGNITUDE_LIMIT {
            return None;
        }
    }
    Some((value, &s[end..]))
}

/// Consume leading fraction digits as `(numerator, scale)`
///
/// Digits past the point where the numerator would overflow are dropped.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: u64 = 0;
    let mut scale = 1.0_f64;
    let mut overflowed = false;
    for b in s[..end].bytes() {
        if overflowed {
            continue;
        }
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
        {
            Some(next) if next <= MAGNITUDE_LIMIT => {
                value = next;
                scale *= 10.0;
            }
            _ => overflowed = true,
        }
    }
    (value, scale, &s[end..])
}

/// Parse a duration string into a signed chrono duration
pub fn parse_duration(input: &str) -> Result<chrono::Duration, DurationParseError> {
    let mut s = input;
    let mut negative = false;

    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(chrono::Duration::zero());
    }
    if s.is_empty() {
        return if input.is_empty() {
            Err(DurationParseError::Empty)
        } else {
            Err(DurationParseError::Invalid(input.to_string()))
        };
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        let first = s.as_bytes()[0];
        if !(first == b'.' || first.is_ascii_digit()) {
            return Err(DurationParseError::Invalid(input.to_string()));
        }

        let before = s.len();
        let (whole, rest) =
            leading_int(s).ok_or_else(|| DurationParseError::Overflow(input.to_string()))?;
        s = rest;
        let has_whole = before != s.len();

        let mut frac = 0;
        let mut scale = 1.0;
        let mut has_frac = false;
        if let Some(rest) = s.strip_prefix('.') {
            let before = rest.len();
            let (f, sc, rest) = leading_fraction(rest);
            frac = f;
            scale = sc;
            has_frac = before != rest.len();
            s = rest;
        }
        if !has_whole && !has_frac {
            return Err(DurationParseError::Invalid(input.to_string()));
        }

        let unit_len = s
            .bytes()
            .take_while(|b| *b != b'.' && !b.is_ascii_digit())
            .count();
        if unit_len == 0 {
            return Err(DurationParseError::MissingUnit(input.to_string()));
        }
        let (unit, rest) = s.split_at(unit_len);
        s = rest;
        let unit_ns = unit_scale(unit).ok_or_else(|| DurationParseError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let overflow = || DurationParseError::Overflow(input.to_string());
        if whole > MAGNITUDE_LIMIT / unit_ns {
            return Err(overflow());
        }
        let mut value = whole * unit_ns;
        if frac > 0 {
            value += (frac as f64 * (unit_ns as f64 / scale)) as u64;
            if value > MAGNITUDE_LIMIT {
                return Err(overflow());
            }
        }
        total = total.checked_add(value).ok_or_else(overflow)?;
        if total > MAGNITUDE_LIMIT {
            return Err(overflow());
        }
    }

    let nanos = if negative {
        if total == MAGNITUDE_LIMIT {
            i64::MIN
        } else {
            -(total as i64)
        }
    } else {
        i64::try_from(total).map_err(|_| DurationParseError::Overflow(input.to_string()))?
    };
    Ok(chrono::Duration::nanoseconds(nanos))
}
