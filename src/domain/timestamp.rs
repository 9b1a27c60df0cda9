//! Fixed-width timestamp text.
//!
//! Two shapes are accepted:
//!
//! ```text
//! YYYY-MM-DD HH:MM:SS          (19 chars, offset +00:00)
//! YYYY-MM-DD HH:MM:SS+HH:MM    (25 chars)
//! ```
//!
//! Every position is checked against its character class, so a string of
//! the right length with a stray character is rejected rather than sliced
//! into nonsense.

use crate::domain::civil::CivilDateTime;
use crate::domain::error::DatetimeError;
use std::fmt;

pub const NAIVE_LEN: usize = 19;
pub const OFFSET_LEN: usize = 25;

/// Grammar of the 25-character shape. `9` is a digit, `±` a sign, anything
/// else must match literally. The 19-character shape is its prefix.
const GRAMMAR: &[u8; OFFSET_LEN] = b"9999-99-99 99:99:99\xB199:99";
const SIGN_SLOT: u8 = 0xB1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    fn factor(self) -> i64 {
        match self {
            Sign::Plus => 1,
            Sign::Minus => -1,
        }
    }
}

/// A fixed numeric UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneOffset {
    sign: Sign,
    hours: u8,
    minutes: u8,
}

impl TimezoneOffset {
    pub const UTC: TimezoneOffset = TimezoneOffset {
        sign: Sign::Plus,
        hours: 0,
        minutes: 0,
    };

    pub fn new(sign: Sign, hours: u8, minutes: u8) -> Result<Self, DatetimeError> {
        if hours > 23 || minutes > 59 {
            return Err(DatetimeError::invalid(
                &format!("{hours:02}:{minutes:02}"),
                "offset must be within 00:00..=23:59",
            ));
        }
        Ok(Self {
            sign,
            hours,
            minutes,
        })
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Signed hour component.
    pub fn signed_hours(&self) -> i64 {
        self.sign.factor() * i64::from(self.hours)
    }

    /// Signed minute component.
    pub fn signed_minutes(&self) -> i64 {
        self.sign.factor() * i64::from(self.minutes)
    }
}

impl Default for TimezoneOffset {
    fn default() -> Self {
        Self::UTC
    }
}

impl fmt::Display for TimezoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.sign {
            Sign::Plus => '+',
            Sign::Minus => '-',
        };
        write!(f, "{}{:02}:{:02}", sign, self.hours, self.minutes)
    }
}

/// Parses either timestamp shape into civil fields and an offset.
pub fn parse(text: &str) -> Result<(CivilDateTime, TimezoneOffset), DatetimeError> {
    let bytes = text.as_bytes();
    match bytes.len() {
        NAIVE_LEN | OFFSET_LEN => {}
        n => {
            return Err(DatetimeError::invalid(
                text,
                format!("expected {NAIVE_LEN} or {OFFSET_LEN} characters, found {n}"),
            ));
        }
    }
    check_grammar(text, bytes)?;

    let civil = CivilDateTime::new(
        digits(bytes, 0, 4),
        digits(bytes, 5, 2),
        digits(bytes, 8, 2),
        digits(bytes, 11, 2),
        digits(bytes, 14, 2),
        digits(bytes, 17, 2),
    );
    if !(1..=12).contains(&civil.month) {
        return Err(DatetimeError::invalid(
            text,
            format!("month {} out of range 1..=12", civil.month),
        ));
    }

    let offset = if bytes.len() == OFFSET_LEN {
        let sign = if bytes[19] == b'-' {
            Sign::Minus
        } else {
            Sign::Plus
        };
        TimezoneOffset::new(sign, digits(bytes, 20, 2) as u8, digits(bytes, 23, 2) as u8)
            .map_err(|_| DatetimeError::invalid(text, "offset must be within 00:00..=23:59"))?
    } else {
        TimezoneOffset::UTC
    };

    Ok((civil, offset))
}

/// Parses only the 25-character offset-bearing shape.
pub fn parse_with_offset(text: &str) -> Result<(CivilDateTime, TimezoneOffset), DatetimeError> {
    if text.len() != OFFSET_LEN {
        return Err(DatetimeError::invalid(
            text,
            format!("expected {OFFSET_LEN} characters with a UTC offset"),
        ));
    }
    parse(text)
}

/// Renders civil fields and an offset in the 25-character shape.
///
/// Fields are written as given; callers normalize first. Years outside
/// 0..=9999 have no four-digit rendering and are rejected.
pub fn format(civil: &CivilDateTime, offset: &TimezoneOffset) -> Result<String, DatetimeError> {
    if !(0..=9999).contains(&civil.year) {
        return Err(DatetimeError::YearOutOfRange { year: civil.year });
    }
    Ok(format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}{}",
        civil.year, civil.month, civil.day, civil.hour, civil.minute, civil.second, offset
    ))
}

fn check_grammar(text: &str, bytes: &[u8]) -> Result<(), DatetimeError> {
    for (pos, (&actual, &expected)) in bytes.iter().zip(GRAMMAR.iter()).enumerate() {
        let ok = match expected {
            b'9' => actual.is_ascii_digit(),
            SIGN_SLOT => actual == b'+' || actual == b'-',
            literal => actual == literal,
        };
        if !ok {
            let wanted = match expected {
                b'9' => "digit".to_string(),
                SIGN_SLOT => "'+' or '-'".to_string(),
                literal => format!("'{}'", literal as char),
            };
            return Err(DatetimeError::invalid(
                text,
                format!("expected {wanted} at position {pos}"),
            ));
        }
    }
    Ok(())
}

/// Reads `len` ASCII digits starting at `start`. Grammar already checked.
fn digits(bytes: &[u8], start: usize, len: usize) -> i64 {
    bytes[start..start + len]
        .iter()
        .fold(0, |acc, b| acc * 10 + i64::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_naive_shape_with_utc_default() {
        let (civil, offset) = parse("2024-06-05 07:08:09").unwrap();
        assert_eq!(civil, CivilDateTime::new(2024, 6, 5, 7, 8, 9));
        assert_eq!(offset, TimezoneOffset::UTC);
    }

    #[test]
    fn parses_offset_shape() {
        let (civil, offset) = parse("2024-06-05 00:00:00+09:00").unwrap();
        assert_eq!(civil, CivilDateTime::new(2024, 6, 5, 0, 0, 0));
        assert_eq!(offset.signed_hours(), 9);
        assert_eq!(offset.signed_minutes(), 0);

        let (_, offset) = parse("2024-06-05 00:00:00-05:30").unwrap();
        assert_eq!(offset.sign(), Sign::Minus);
        assert_eq!(offset.signed_hours(), -5);
        assert_eq!(offset.signed_minutes(), -30);
    }

    #[test]
    fn rejects_wrong_lengths() {
        for text in ["", "2024-06-05", "2024-06-05 00:00:0", "2024-06-05 00:00:00+09:0", "2024-06-05 00:00:00Z"] {
            assert!(
                matches!(parse(text), Err(DatetimeError::InvalidFormat { .. })),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_misplaced_characters_of_right_length() {
        for text in [
            "2024/06/05 00:00:00",
            "2024-06-05T00:00:00",
            "2024-06-05 00-00-00",
            "20a4-06-05 00:00:00",
            "2024-06-05 00:00:00 09:00",
            "2024-06-05 00:00:00+09-00",
            "2024-06-05 00:00:00+0x:00",
            "+024-06-05 00:00:00",
        ] {
            assert!(
                matches!(parse(text), Err(DatetimeError::InvalidFormat { .. })),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn error_reports_position() {
        let err = parse("2024-06-05T00:00:00").unwrap_err();
        assert!(err.to_string().contains("position 10"), "{err}");
    }

    #[test]
    fn rejects_month_out_of_range() {
        assert!(parse("2024-13-01 00:00:00").is_err());
        assert!(parse("2024-00-01 00:00:00").is_err());
    }

    #[test]
    fn rejects_offset_out_of_range() {
        assert!(parse("2024-06-05 00:00:00+24:00").is_err());
        assert!(parse("2024-06-05 00:00:00+01:60").is_err());
    }

    #[test]
    fn day_and_time_digits_are_left_for_normalization() {
        let (civil, _) = parse("2024-02-30 25:61:61").unwrap();
        assert_eq!(civil, CivilDateTime::new(2024, 2, 30, 25, 61, 61));
    }

    #[test]
    fn parse_with_offset_rejects_naive_shape() {
        assert!(parse_with_offset("2024-06-05 00:00:00").is_err());
        assert!(parse_with_offset("2024-06-05 00:00:00+00:00").is_ok());
    }

    #[test]
    fn format_pads_fields() {
        let civil = CivilDateTime::new(5, 1, 2, 3, 4, 5);
        let offset = TimezoneOffset::new(Sign::Minus, 3, 30).unwrap();
        assert_eq!(format(&civil, &offset).unwrap(), "0005-01-02 03:04:05-03:30");
    }

    #[test]
    fn format_rejects_unrepresentable_years() {
        let offset = TimezoneOffset::UTC;
        assert_eq!(
            format(&CivilDateTime::new(10_000, 1, 1, 0, 0, 0), &offset),
            Err(DatetimeError::YearOutOfRange { year: 10_000 })
        );
        assert_eq!(
            format(&CivilDateTime::new(-1, 12, 31, 0, 0, 0), &offset),
            Err(DatetimeError::YearOutOfRange { year: -1 })
        );
    }

    #[test]
    fn format_inverts_parse() {
        for text in [
            "2024-06-05 00:00:00+09:00",
            "1999-12-31 23:59:59-11:45",
            "0000-01-01 00:00:00+00:00",
        ] {
            let (civil, offset) = parse(text).unwrap();
            assert_eq!(format(&civil, &offset).unwrap(), text);
        }
    }

    #[test]
    fn offset_display() {
        assert_eq!(TimezoneOffset::UTC.to_string(), "+00:00");
        assert_eq!(
            TimezoneOffset::new(Sign::Plus, 9, 5).unwrap().to_string(),
            "+09:05"
        );
    }
}
