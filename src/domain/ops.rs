//! Timestamp operations: UTC conversion, ordering, interval stepping.

use crate::domain::civil::CivilDateTime;
use crate::domain::error::DatetimeError;
use crate::domain::interval::IntervalSpec;
use crate::domain::timestamp::{self, TimezoneOffset};
use std::cmp::Ordering;

/// Converts either timestamp shape to canonical UTC text (`...+00:00`).
pub fn to_utc(text: &str) -> Result<String, DatetimeError> {
    let (civil, offset) = timestamp::parse(text)?;
    let shifted = CivilDateTime {
        hour: civil.hour - offset.signed_hours(),
        minute: civil.minute - offset.signed_minutes(),
        ..civil
    }
    .normalized();
    log::debug!("to_utc {text} -> {shifted:?}");
    timestamp::format(&shifted, &TimezoneOffset::UTC)
}

/// Orders two timestamps by the instant they denote.
///
/// Canonical UTC text is fixed-width and most-significant-field first, so
/// byte order on it is chronological order.
pub fn compare(a: &str, b: &str) -> Result<Ordering, DatetimeError> {
    let a = to_utc(a)?;
    let b = to_utc(b)?;
    Ok(a.cmp(&b))
}

/// True when `a` is strictly later than `b`.
pub fn is_after(a: &str, b: &str) -> Result<bool, DatetimeError> {
    Ok(compare(a, b)? == Ordering::Greater)
}

/// Advances an offset-bearing timestamp by an interval token.
///
/// Only the 25-character shape is accepted here. The offset is carried
/// through unchanged; the result is in the same local time as the input.
pub fn add_interval(text: &str, token: &str) -> Result<String, DatetimeError> {
    let (civil, offset) = timestamp::parse_with_offset(text)?;
    let stepped = match IntervalSpec::lookup(token)? {
        IntervalSpec::FixedDuration { seconds } => civil.plus_seconds(seconds),
        IntervalSpec::CalendarStep { months } => civil.plus_months(months),
    };
    log::debug!("add_interval {text} + {token} -> {stepped:?}");
    timestamp::format(&stepped, &offset)
}
