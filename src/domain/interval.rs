//! Sampling interval tokens.
//!
//! Tokens name either a fixed number of seconds (`1m`, `4h`, `1wk`, ...) or
//! a calendar step applied to the month field (`1mo`, `3mo`). Lookups are
//! case-sensitive and consult the fixed-duration table first.

use crate::domain::error::DatetimeError;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

const FIXED_DURATIONS: [(&str, i64); 14] = [
    ("1m", 60),
    ("2m", 120),
    ("5m", 300),
    ("15m", 900),
    ("30m", 1_800),
    ("60m", 3_600),
    ("90m", 5_400),
    ("1h", 3_600),
    ("2h", 7_200),
    ("4h", 14_400),
    ("12h", 43_200),
    ("1d", 86_400),
    ("5d", 432_000),
    ("1wk", 604_800),
];

const CALENDAR_STEPS: [(&str, i64); 2] = [("1mo", 1), ("3mo", 3)];

static SECONDS_BY_TOKEN: LazyLock<HashMap<&'static str, i64>> =
    LazyLock::new(|| FIXED_DURATIONS.into_iter().collect());

static MONTHS_BY_TOKEN: LazyLock<HashMap<&'static str, i64>> =
    LazyLock::new(|| CALENDAR_STEPS.into_iter().collect());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalSpec {
    FixedDuration { seconds: i64 },
    CalendarStep { months: i64 },
}

impl IntervalSpec {
    pub fn lookup(token: &str) -> Result<Self, DatetimeError> {
        if let Some(&seconds) = SECONDS_BY_TOKEN.get(token) {
            return Ok(IntervalSpec::FixedDuration { seconds });
        }
        if let Some(&months) = MONTHS_BY_TOKEN.get(token) {
            return Ok(IntervalSpec::CalendarStep { months });
        }
        Err(DatetimeError::UnsupportedInterval(token.to_string()))
    }
}

impl FromStr for IntervalSpec {
    type Err = DatetimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl fmt::Display for IntervalSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalSpec::FixedDuration { seconds } => write!(f, "{seconds} seconds"),
            IntervalSpec::CalendarStep { months: 1 } => write!(f, "1 month"),
            IntervalSpec::CalendarStep { months } => write!(f, "{months} months"),
        }
    }
}

/// Every supported token with its interval, fixed durations first.
pub fn tokens() -> Vec<(&'static str, IntervalSpec)> {
    FIXED_DURATIONS
        .iter()
        .map(|&(token, seconds)| (token, IntervalSpec::FixedDuration { seconds }))
        .chain(
            CALENDAR_STEPS
                .iter()
                .map(|&(token, months)| (token, IntervalSpec::CalendarStep { months })),
        )
        .collect()
}
