//! Gregorian calendar arithmetic.

use crate::domain::error::DatetimeError;

const MONTH_LENGTHS: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
///
/// Returns [`DatetimeError::InvalidFormat`] when `month` is outside 1..=12.
pub fn days_in_month(year: i64, month: i64) -> Result<i64, DatetimeError> {
    if !(1..=12).contains(&month) {
        return Err(DatetimeError::InvalidFormat {
            input: format!("{year:04}-{month:02}"),
            reason: format!("month {month} out of range 1..=12"),
        });
    }
    Ok(month_length(year, month))
}

/// Unchecked lookup for months already known to be in 1..=12.
pub(crate) fn month_length(year: i64, month: i64) -> i64 {
    debug_assert!((1..=12).contains(&month));
    if month == 2 && is_leap_year(year) {
        29
    } else {
        MONTH_LENGTHS[(month - 1) as usize]
    }
}
