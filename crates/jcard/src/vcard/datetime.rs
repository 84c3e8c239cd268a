//! Partial date and time values (RFC 6350 §4.3).
//!
//! jCard carries dates and times in the extended (separator) forms, so the
//! `Display` impls here always produce extended output. Parsing accepts the
//! basic forms as well; producers in the wild emit both.
#![expect(
    clippy::map_err_ignore,
    reason = "numeric parse errors carry no context beyond the failing field"
)]

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::ParseFailure;

/// A date with possibly reduced accuracy or truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VCardDate {
    /// Complete date.
    Full(NaiveDate),
    /// Year and month (`1985-04`).
    YearMonth {
        year: i32,
        month: u32,
    },
    /// Year only (`1985`).
    Year(i32),
    /// Month and day, year truncated (`--04-12`).
    MonthDay {
        month: u32,
        day: u32,
    },
    /// Month only (`--04`).
    Month(u32),
    /// Day only (`---12`).
    Day(u32),
}

impl VCardDate {
    /// Parses a date in extended or basic form, including the truncated
    /// representations.
    ///
    /// ## Errors
    /// Returns a failure if the string matches none of the RFC 6350 date
    /// forms or a field is out of range.
    pub fn parse(s: &str) -> Result<Self, ParseFailure> {
        let s = s.trim();

        if let Some(rest) = s.strip_prefix("---") {
            let day = parse_field(rest, 1, 31, "day")?;
            return Ok(Self::Day(day));
        }

        if let Some(rest) = s.strip_prefix("--") {
            return parse_truncated_month(rest);
        }

        // Extended: YYYY-MM-DD or YYYY-MM
        if s.contains('-') {
            let parts: Vec<&str> = s.split('-').collect();
            match parts[..] {
                [y, m, d] => {
                    let year: i32 = y
                        .parse()
                        .map_err(|_| ParseFailure::date_time("invalid year"))?;
                    let month = parse_field(m, 1, 12, "month")?;
                    let day = parse_field(d, 1, 31, "day")?;
                    let date = NaiveDate::from_ymd_opt(year, month, day)
                        .ok_or_else(|| ParseFailure::date_time("no such calendar date"))?;
                    return Ok(Self::Full(date));
                }
                [y, m] => {
                    let year: i32 = y
                        .parse()
                        .map_err(|_| ParseFailure::date_time("invalid year"))?;
                    let month = parse_field(m, 1, 12, "month")?;
                    return Ok(Self::YearMonth { year, month });
                }
                _ => {}
            }
        }

        // Basic: YYYYMMDD
        if s.len() == 8 && all_digits(s) {
            let year: i32 = s[..4]
                .parse()
                .map_err(|_| ParseFailure::date_time("invalid year"))?;
            let month = parse_field(&s[4..6], 1, 12, "month")?;
            let day = parse_field(&s[6..8], 1, 31, "day")?;
            let date = NaiveDate::from_ymd_opt(year, month, day)
                .ok_or_else(|| ParseFailure::date_time("no such calendar date"))?;
            return Ok(Self::Full(date));
        }

        // Year only: YYYY
        if s.len() == 4 && all_digits(s) {
            let year: i32 = s
                .parse()
                .map_err(|_| ParseFailure::date_time("invalid year"))?;
            return Ok(Self::Year(year));
        }

        Err(ParseFailure::date_time(format!(
            "unrecognized date form: {s}"
        )))
    }
}

fn parse_truncated_month(rest: &str) -> Result<VCardDate, ParseFailure> {
    // --MM-DD, --MMDD, or --MM
    if let Some((m, d)) = rest.split_once('-') {
        let month = parse_field(m, 1, 12, "month")?;
        let day = parse_field(d, 1, 31, "day")?;
        return Ok(VCardDate::MonthDay { month, day });
    }
    match rest.len() {
        4 if all_digits(rest) => {
            let month = parse_field(&rest[..2], 1, 12, "month")?;
            let day = parse_field(&rest[2..], 1, 31, "day")?;
            Ok(VCardDate::MonthDay { month, day })
        }
        2 => {
            let month = parse_field(rest, 1, 12, "month")?;
            Ok(VCardDate::Month(month))
        }
        _ => Err(ParseFailure::date_time(format!(
            "unrecognized truncated date form: --{rest}"
        ))),
    }
}

impl fmt::Display for VCardDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::YearMonth { year, month } => write!(f, "{year:04}-{month:02}"),
            Self::Year(year) => write!(f, "{year:04}"),
            Self::MonthDay { month, day } => write!(f, "--{month:02}-{day:02}"),
            Self::Month(month) => write!(f, "--{month:02}"),
            Self::Day(day) => write!(f, "---{day:02}"),
        }
    }
}

/// A time with possibly truncated leading components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VCardTime {
    /// Complete time.
    Full(NaiveTime),
    /// Hour and minute (`10:22`).
    HourMinute {
        hour: u32,
        minute: u32,
    },
    /// Hour only (`10`).
    Hour(u32),
    /// Minute and second, hour truncated (`-22:00`).
    MinuteSecond {
        minute: u32,
        second: u32,
    },
    /// Second only (`--00`).
    Second(u32),
}

impl VCardTime {
    /// Parses a time in extended or basic form, including the truncated
    /// representations. The string must not carry a zone designator; use
    /// [`parse_time_and_offset`] for that.
    ///
    /// ## Errors
    /// Returns a failure if the string matches none of the RFC 6350 time
    /// forms or a field is out of range.
    pub fn parse(s: &str) -> Result<Self, ParseFailure> {
        if let Some(rest) = s.strip_prefix("--") {
            let second = parse_field(rest, 0, 59, "second")?;
            return Ok(Self::Second(second));
        }

        if let Some(rest) = s.strip_prefix('-') {
            return parse_truncated_minute(rest);
        }

        if s.contains(':') {
            let parts: Vec<&str> = s.split(':').collect();
            return match parts[..] {
                [h, m] => Ok(Self::HourMinute {
                    hour: parse_field(h, 0, 23, "hour")?,
                    minute: parse_field(m, 0, 59, "minute")?,
                }),
                [h, m, sec] => full_time(h, m, sec),
                _ => Err(ParseFailure::date_time("invalid time form")),
            };
        }

        match s.len() {
            2 => Ok(Self::Hour(parse_field(s, 0, 23, "hour")?)),
            4 if all_digits(s) => Ok(Self::HourMinute {
                hour: parse_field(&s[..2], 0, 23, "hour")?,
                minute: parse_field(&s[2..], 0, 59, "minute")?,
            }),
            6..=9 if s.bytes().take(6).all(|b| b.is_ascii_digit()) => {
                full_time(&s[..2], &s[2..4], &s[4..])
            }
            _ => Err(ParseFailure::date_time(format!(
                "unrecognized time form: {s}"
            ))),
        }
    }
}

fn parse_truncated_minute(rest: &str) -> Result<VCardTime, ParseFailure> {
    // -MM:SS, -MMSS, or -MM
    if let Some((m, sec)) = rest.split_once(':') {
        return Ok(VCardTime::MinuteSecond {
            minute: parse_field(m, 0, 59, "minute")?,
            second: parse_field(sec, 0, 59, "second")?,
        });
    }
    match rest.len() {
        2 => Ok(VCardTime::MinuteSecond {
            minute: parse_field(rest, 0, 59, "minute")?,
            second: 0,
        }),
        4 if all_digits(rest) => Ok(VCardTime::MinuteSecond {
            minute: parse_field(&rest[..2], 0, 59, "minute")?,
            second: parse_field(&rest[2..], 0, 59, "second")?,
        }),
        _ => Err(ParseFailure::date_time(format!(
            "unrecognized truncated time form: -{rest}"
        ))),
    }
}

fn full_time(h: &str, m: &str, sec: &str) -> Result<VCardTime, ParseFailure> {
    let hour = parse_field(h, 0, 23, "hour")?;
    let minute = parse_field(m, 0, 59, "minute")?;
    // Fractional seconds are accepted and truncated.
    let sec = sec.split('.').next().unwrap_or(sec);
    let second = parse_field(sec, 0, 59, "second")?;
    let time = NaiveTime::from_hms_opt(hour, minute, second)
        .ok_or_else(|| ParseFailure::date_time("no such time of day"))?;
    Ok(VCardTime::Full(time))
}

impl fmt::Display for VCardTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full(time) => write!(f, "{}", time.format("%H:%M:%S")),
            Self::HourMinute { hour, minute } => write!(f, "{hour:02}:{minute:02}"),
            Self::Hour(hour) => write!(f, "{hour:02}"),
            Self::MinuteSecond { minute, second } => write!(f, "-{minute:02}:{second:02}"),
            Self::Second(second) => write!(f, "--{second:02}"),
        }
    }
}

/// Splits a zone designator off a time string and parses both halves.
///
/// ## Errors
/// Returns a failure if either the time or the offset is malformed.
pub fn parse_time_and_offset(
    s: &str,
) -> Result<(VCardTime, Option<VCardUtcOffset>), ParseFailure> {
    let s = s.trim();

    let (time_str, offset) = if let Some(stripped) = s.strip_suffix('Z') {
        (stripped, Some(VCardUtcOffset::UTC))
    } else if let Some(pos) = s.rfind('+') {
        (&s[..pos], Some(VCardUtcOffset::parse(&s[pos..])?))
    } else if let Some(pos) = s.rfind('-') {
        // A leading '-' belongs to a truncated time, not an offset.
        if pos > 0 && s[..pos].bytes().all(|b| b.is_ascii_digit() || b == b':') {
            (&s[..pos], Some(VCardUtcOffset::parse(&s[pos..])?))
        } else {
            (s, None)
        }
    } else {
        (s, None)
    };

    Ok((VCardTime::parse(time_str)?, offset))
}

/// A UTC offset (`+05:30`, `-08:00`, `Z`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VCardUtcOffset {
    /// Signed hours component.
    pub hours: i8,
    /// Minutes component (always non-negative; the sign lives on `hours`).
    pub minutes: u8,
}

impl VCardUtcOffset {
    /// The zero offset.
    pub const UTC: Self = Self {
        hours: 0,
        minutes: 0,
    };

    /// Creates an offset.
    #[must_use]
    pub const fn new(hours: i8, minutes: u8) -> Self {
        Self { hours, minutes }
    }

    /// Returns whether this is the zero offset.
    #[must_use]
    pub const fn is_utc(self) -> bool {
        self.hours == 0 && self.minutes == 0
    }

    /// Parses a zone designator (`Z`, `±HH`, `±HHMM`, `±HH:MM`).
    ///
    /// ## Errors
    /// Returns a failure if the designator is malformed.
    pub fn parse(s: &str) -> Result<Self, ParseFailure> {
        let s = s.trim();
        if s == "Z" {
            return Ok(Self::UTC);
        }

        let (sign, rest) = if let Some(rest) = s.strip_prefix('+') {
            (1i8, rest)
        } else if let Some(rest) = s.strip_prefix('-') {
            (-1i8, rest)
        } else {
            return Err(ParseFailure::date_time(
                "UTC offset must start with '+' or '-'",
            ));
        };

        let (h, m) = if let Some((h, m)) = rest.split_once(':') {
            (h, Some(m))
        } else {
            match rest.len() {
                2 => (rest, None),
                4 if all_digits(rest) => (&rest[..2], Some(&rest[2..])),
                _ => {
                    return Err(ParseFailure::date_time(format!("invalid UTC offset: {s}")));
                }
            }
        };

        let hours: i8 = h
            .parse()
            .map_err(|_| ParseFailure::date_time("invalid offset hours"))?;
        let minutes: u8 = match m {
            Some(m) => m
                .parse()
                .map_err(|_| ParseFailure::date_time("invalid offset minutes"))?,
            None => 0,
        };
        if hours > 14 || minutes > 59 {
            return Err(ParseFailure::date_time("UTC offset out of range"));
        }

        Ok(Self::new(sign * hours, minutes))
    }
}

impl fmt::Display for VCardUtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_utc() {
            return f.write_str("Z");
        }
        let sign = if self.hours < 0 { '-' } else { '+' };
        write!(f, "{sign}{:02}:{:02}", self.hours.unsigned_abs(), self.minutes)
    }
}

/// A date, a time, or both (RFC 6350 `date-and-or-time`), or its free-text
/// fallback form.
#[derive(Debug, Clone, PartialEq)]
pub enum DateAndOrTime {
    /// Date only.
    Date(VCardDate),
    /// Time only, optionally zoned.
    Time {
        time: VCardTime,
        offset: Option<VCardUtcOffset>,
    },
    /// Date and time, optionally zoned.
    DateTime {
        date: VCardDate,
        time: VCardTime,
        offset: Option<VCardUtcOffset>,
    },
    /// Free-text value (`circa 1800`).
    Text(String),
}

impl DateAndOrTime {
    /// Parses a date-and-or-time value.
    ///
    /// A leading `T` marks a time-only value. Free-text values are not
    /// detected here; the caller chooses [`DateAndOrTime::Text`] based on
    /// the declared data type.
    ///
    /// ## Errors
    /// Returns a failure if neither a date, a time, nor a combination can
    /// be read from the string.
    pub fn parse(s: &str) -> Result<Self, ParseFailure> {
        let s = s.trim();

        if let Some(stripped) = s.strip_prefix('T') {
            let (time, offset) = parse_time_and_offset(stripped)?;
            return Ok(Self::Time { time, offset });
        }

        if let Some((d, t)) = s.split_once('T') {
            let date = VCardDate::parse(d)?;
            let (time, offset) = parse_time_and_offset(t)?;
            return Ok(Self::DateTime { date, time, offset });
        }

        Ok(Self::Date(VCardDate::parse(s)?))
    }
}

impl fmt::Display for DateAndOrTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{date}"),
            Self::Time { time, offset } => {
                write!(f, "T{time}")?;
                offset.map_or(Ok(()), |o| write!(f, "{o}"))
            }
            Self::DateTime { date, time, offset } => {
                write!(f, "{date}T{time}")?;
                offset.map_or(Ok(()), |o| write!(f, "{o}"))
            }
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A complete UTC timestamp (REV property).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Parses a timestamp in RFC 3339 form (`1995-10-31T22:27:10Z`) or the
    /// basic form (`19951031T222710Z`).
    ///
    /// ## Errors
    /// Returns a failure if the string is not a complete UTC timestamp.
    pub fn parse(s: &str) -> Result<Self, ParseFailure> {
        let s = s.trim();

        if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(instant.with_timezone(&Utc)));
        }
        if let Ok(instant) = DateTime::parse_from_str(s, "%Y%m%dT%H%M%S%#z") {
            return Ok(Self(instant.with_timezone(&Utc)));
        }
        if let Some(basic) = s.strip_suffix('Z')
            && let Ok(naive) =
                chrono::NaiveDateTime::parse_from_str(basic, "%Y%m%dT%H%M%S")
        {
            return Ok(Self(DateTime::from_naive_utc_and_offset(naive, Utc)));
        }

        Err(ParseFailure::date_time(format!("invalid timestamp: {s}")))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_field(s: &str, min: u32, max: u32, what: &str) -> Result<u32, ParseFailure> {
    let n: u32 = s
        .parse()
        .map_err(|_| ParseFailure::date_time(format!("invalid {what}: {s}")))?;
    if n < min || n > max {
        return Err(ParseFailure::date_time(format!("{what} out of range: {n}")));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_full_extended() {
        let date = VCardDate::parse("1954-10-28").unwrap();
        assert_eq!(date.to_string(), "1954-10-28");
    }

    #[test]
    fn date_full_basic() {
        let date = VCardDate::parse("19541028").unwrap();
        assert_eq!(date.to_string(), "1954-10-28");
    }

    #[test]
    fn date_year_month() {
        assert_eq!(
            VCardDate::parse("1985-04").unwrap(),
            VCardDate::YearMonth {
                year: 1985,
                month: 4
            }
        );
    }

    #[test]
    fn date_truncated_forms() {
        assert_eq!(
            VCardDate::parse("--04-12").unwrap(),
            VCardDate::MonthDay { month: 4, day: 12 }
        );
        assert_eq!(VCardDate::parse("--06").unwrap(), VCardDate::Month(6));
        assert_eq!(VCardDate::parse("---28").unwrap(), VCardDate::Day(28));
        assert_eq!(VCardDate::parse("1985").unwrap(), VCardDate::Year(1985));
    }

    #[test]
    fn date_rejects_garbage() {
        assert!(VCardDate::parse("yesterday").is_err());
        assert!(VCardDate::parse("1985-13").is_err());
        assert!(VCardDate::parse("--00-12").is_err());
    }

    #[test]
    fn date_display_pads() {
        assert_eq!(VCardDate::Month(6).to_string(), "--06");
        assert_eq!(VCardDate::Day(3).to_string(), "---03");
    }

    #[test]
    fn time_forms() {
        assert_eq!(
            VCardTime::parse("10:22").unwrap(),
            VCardTime::HourMinute {
                hour: 10,
                minute: 22
            }
        );
        assert_eq!(VCardTime::parse("10").unwrap(), VCardTime::Hour(10));
        assert_eq!(
            VCardTime::parse("-22:00").unwrap(),
            VCardTime::MinuteSecond {
                minute: 22,
                second: 0
            }
        );
        assert_eq!(VCardTime::parse("--30").unwrap(), VCardTime::Second(30));
    }

    #[test]
    fn time_with_offset() {
        let (time, offset) = parse_time_and_offset("10:22:00-08:00").unwrap();
        assert!(matches!(time, VCardTime::Full(_)));
        assert_eq!(offset, Some(VCardUtcOffset::new(-8, 0)));
    }

    #[test]
    fn truncated_time_keeps_leading_dash() {
        let (time, offset) = parse_time_and_offset("--30Z").unwrap();
        assert_eq!(time, VCardTime::Second(30));
        assert_eq!(offset, Some(VCardUtcOffset::UTC));
    }

    #[test]
    fn offset_round_trip() {
        let offset = VCardUtcOffset::parse("+05:30").unwrap();
        assert_eq!(offset.to_string(), "+05:30");
        assert_eq!(VCardUtcOffset::parse("-0800").unwrap().to_string(), "-08:00");
        assert_eq!(VCardUtcOffset::parse("Z").unwrap().to_string(), "Z");
    }

    #[test]
    fn date_and_or_time_combined() {
        let value = DateAndOrTime::parse("1954-10-28T10:22:00Z").unwrap();
        assert_eq!(value.to_string(), "1954-10-28T10:22:00Z");
    }

    #[test]
    fn date_and_or_time_time_only() {
        let value = DateAndOrTime::parse("T10:22").unwrap();
        assert_eq!(value.to_string(), "T10:22");
    }

    #[test]
    fn timestamp_both_forms() {
        let extended = Timestamp::parse("1995-10-31T22:27:10Z").unwrap();
        let basic = Timestamp::parse("19951031T222710Z").unwrap();
        assert_eq!(extended, basic);
        assert_eq!(extended.to_string(), "1995-10-31T22:27:10Z");
    }

    #[test]
    fn timestamp_rejects_date_only() {
        assert!(Timestamp::parse("1995-10-31").is_err());
    }
}
