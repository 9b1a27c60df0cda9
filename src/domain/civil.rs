//! Civil date-time fields and their normalization.
//!
//! A [`CivilDateTime`] is six signed integers that may sit outside their
//! usual ranges, e.g. after an offset has been subtracted or an interval
//! added. [`CivilDateTime::normalized`] cascades the overflow upward so every
//! field lands back in its canonical range without gaining or losing time.

use crate::domain::calendar::month_length;
use crate::domain::error::DatetimeError;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDateTime {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

impl CivilDateTime {
    pub fn new(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Returns the same instant with every field in canonical range.
    ///
    /// Month may be arbitrary on input; it is folded into 1..=12 before the
    /// day is resolved against month lengths.
    pub fn normalized(self) -> Self {
        let mut f = self;

        f.minute += f.second.div_euclid(60);
        f.second = f.second.rem_euclid(60);

        f.hour += f.minute.div_euclid(60);
        f.minute = f.minute.rem_euclid(60);

        f.day += f.hour.div_euclid(24);
        f.hour = f.hour.rem_euclid(24);

        let months = f.month - 1;
        f.year += months.div_euclid(12);
        f.month = months.rem_euclid(12) + 1;

        while f.day > month_length(f.year, f.month) {
            f.day -= month_length(f.year, f.month);
            f.month += 1;
            if f.month > 12 {
                f.month = 1;
                f.year += 1;
            }
        }

        while f.day < 1 {
            f.month -= 1;
            if f.month < 1 {
                f.month = 12;
                f.year -= 1;
            }
            f.day += month_length(f.year, f.month);
        }

        f
    }

    pub fn is_normalized(&self) -> bool {
        (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= month_length(self.year, self.month)
            && (0..24).contains(&self.hour)
            && (0..60).contains(&self.minute)
            && (0..60).contains(&self.second)
    }

    /// Shifts the fields by a signed number of seconds, then normalizes.
    pub fn plus_seconds(self, seconds: i64) -> Self {
        Self {
            second: self.second + seconds,
            ..self
        }
        .normalized()
    }

    /// Shifts the month field, then normalizes. Day overflow rolls into the
    /// following month rather than clamping to its last day.
    pub fn plus_months(self, months: i64) -> Self {
        Self {
            month: self.month + months,
            ..self
        }
        .normalized()
    }
}

impl From<NaiveDateTime> for CivilDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self::new(
            i64::from(dt.year()),
            i64::from(dt.month()),
            i64::from(dt.day()),
            i64::from(dt.hour()),
            i64::from(dt.minute()),
            i64::from(dt.second()),
        )
    }
}

impl TryFrom<CivilDateTime> for NaiveDateTime {
    type Error = DatetimeError;

    fn try_from(civil: CivilDateTime) -> Result<Self, Self::Error> {
        let f = civil.normalized();
        let out_of_range = || DatetimeError::YearOutOfRange { year: f.year };
        let year = i32::try_from(f.year).map_err(|_| out_of_range())?;
        NaiveDate::from_ymd_opt(year, f.month as u32, f.day as u32)
            .and_then(|d| d.and_hms_opt(f.hour as u32, f.minute as u32, f.second as u32))
            .ok_or_else(out_of_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn civil(y: i64, mo: i64, d: i64, h: i64, mi: i64, s: i64) -> CivilDateTime {
        CivilDateTime::new(y, mo, d, h, mi, s)
    }

    #[test]
    fn canonical_fields_are_unchanged() {
        let c = civil(2024, 6, 4, 15, 30, 45);
        assert_eq!(c.normalized(), c);
        assert!(c.is_normalized());
    }

    #[test]
    fn seconds_carry_into_minutes_and_hours() {
        assert_eq!(
            civil(2024, 6, 4, 23, 59, 60).normalized(),
            civil(2024, 6, 5, 0, 0, 0)
        );
        assert_eq!(
            civil(2024, 6, 4, 15, 0, 14_400).normalized(),
            civil(2024, 6, 4, 19, 0, 0)
        );
    }

    #[test]
    fn negative_hour_borrows_from_previous_day() {
        assert_eq!(
            civil(2024, 6, 5, -9, 0, 0).normalized(),
            civil(2024, 6, 4, 15, 0, 0)
        );
    }

    #[test]
    fn negative_remainder_uses_floor_division() {
        // -1 second is 23:59:59 of the previous day, not a negative field.
        assert_eq!(
            civil(2024, 3, 1, 0, 0, -1).normalized(),
            civil(2024, 2, 29, 23, 59, 59)
        );
        assert_eq!(
            civil(2023, 3, 1, 0, -61, 0).normalized(),
            civil(2023, 2, 28, 22, 59, 0)
        );
    }

    #[test]
    fn day_overflow_crosses_year_end() {
        assert_eq!(
            civil(2023, 12, 31, 24, 0, 0).normalized(),
            civil(2024, 1, 1, 0, 0, 0)
        );
    }

    #[test]
    fn day_underflow_crosses_year_start() {
        assert_eq!(
            civil(2024, 1, 1, -1, 0, 0).normalized(),
            civil(2023, 12, 31, 23, 0, 0)
        );
        assert_eq!(civil(2024, 1, 0, 0, 0, 0).normalized(), civil(2023, 12, 31, 0, 0, 0));
    }

    #[test]
    fn month_is_folded_before_day_resolution() {
        assert_eq!(civil(2024, 13, 15, 0, 0, 0).normalized(), civil(2025, 1, 15, 0, 0, 0));
        assert_eq!(civil(2024, 0, 15, 0, 0, 0).normalized(), civil(2023, 12, 15, 0, 0, 0));
        assert_eq!(civil(2024, -11, 1, 0, 0, 0).normalized(), civil(2023, 1, 1, 0, 0, 0));
        assert_eq!(civil(2024, 25, 1, 0, 0, 0).normalized(), civil(2026, 1, 1, 0, 0, 0));
    }

    #[test]
    fn plus_months_rolls_over_short_months() {
        assert_eq!(
            civil(2024, 1, 31, 0, 0, 0).plus_months(1),
            civil(2024, 3, 2, 0, 0, 0)
        );
        assert_eq!(
            civil(2023, 1, 31, 0, 0, 0).plus_months(1),
            civil(2023, 3, 3, 0, 0, 0)
        );
        assert_eq!(
            civil(2024, 11, 30, 0, 0, 0).plus_months(3),
            civil(2025, 3, 2, 0, 0, 0)
        );
    }

    #[test]
    fn plus_seconds_crosses_leap_day() {
        assert_eq!(
            civil(2024, 2, 28, 12, 0, 0).plus_seconds(86_400),
            civil(2024, 2, 29, 12, 0, 0)
        );
        assert_eq!(
            civil(2023, 2, 28, 12, 0, 0).plus_seconds(86_400),
            civil(2023, 3, 1, 12, 0, 0)
        );
    }

    #[test]
    fn chrono_round_trip() {
        let dt = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(13, 14, 15)
            .unwrap();
        let c = CivilDateTime::from(dt);
        assert_eq!(c, civil(2024, 2, 29, 13, 14, 15));
        assert_eq!(NaiveDateTime::try_from(c).unwrap(), dt);
    }

    #[test]
    fn chrono_conversion_normalizes_first() {
        let dt = NaiveDateTime::try_from(civil(2024, 1, 31, 0, 0, 0).plus_months(1)).unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        let dt = NaiveDateTime::try_from(civil(2024, 2, 30, 25, 0, 0)).unwrap();
        assert_eq!(
            dt,
            NaiveDate::from_ymd_opt(2024, 3, 2)
                .unwrap()
                .and_hms_opt(1, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn chrono_conversion_rejects_unrepresentable_year() {
        let err = NaiveDateTime::try_from(civil(i64::from(i32::MAX) + 1, 1, 1, 0, 0, 0))
            .unwrap_err();
        assert!(matches!(err, DatetimeError::YearOutOfRange { .. }));
    }
}
