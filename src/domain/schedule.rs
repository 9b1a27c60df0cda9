//! Stepping a backtest window from a start to an end timestamp.
//!
//! Each [`Window`] is the `(begin, end, interval)` triple a market-data
//! source is asked for. Windows are contiguous: one window's `end` is the
//! next one's `begin`.

use crate::domain::error::DatetimeError;
use crate::domain::interval::IntervalSpec;
use crate::domain::ops::{add_interval, is_after, to_utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub begin: String,
    pub end: String,
    pub interval: String,
}

#[derive(Debug, Clone)]
pub struct Schedule {
    current: Option<String>,
    end: String,
    interval: String,
}

impl Schedule {
    /// Builds a schedule over canonical UTC timestamps.
    ///
    /// `start` and `end` may use either timestamp shape. A start later than
    /// the end produces an empty schedule.
    pub fn new(start: &str, end: &str, interval: &str) -> Result<Self, DatetimeError> {
        let start = to_utc(start)?;
        let end = to_utc(end)?;
        IntervalSpec::lookup(interval)?;
        Ok(Self {
            current: Some(start),
            end,
            interval: interval.to_string(),
        })
    }

    pub fn start(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn interval(&self) -> &str {
        &self.interval
    }
}

impl Iterator for Schedule {
    type Item = Result<Window, DatetimeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let begin = self.current.take()?;
        let step = is_after(&begin, &self.end).and_then(|past_end| {
            if past_end {
                return Ok(None);
            }
            add_interval(&begin, &self.interval).map(Some)
        });
        match step {
            Ok(Some(next)) => {
                self.current = Some(next.clone());
                Some(Ok(Window {
                    begin,
                    end: next,
                    interval: self.interval.clone(),
                }))
            }
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
