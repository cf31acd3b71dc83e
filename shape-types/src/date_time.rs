/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! An instant in time, stored as seconds (and subsecond nanos) since the Unix
//! epoch and rendered in the three formats the wire protocols use.

use chrono::{DateTime as ChronoDateTime, SecondsFormat, TimeZone, Utc};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// An instant in time.
///
/// Timestamp fields on shapes use this type rather than a calendar type:
/// the service's wire formats are all epoch-based, and two instants compare
/// equal whenever they denote the same moment, no matter which constructor
/// produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
    seconds: i64,
    subsecond_nanos: u32,
}

impl DateTime {
    /// Creates a `DateTime` from whole seconds since the Unix epoch.
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        DateTime {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates a `DateTime` from epoch seconds plus a fractional second in `[0, 1)`.
    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        DateTime {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * NANOS_PER_SECOND as f64) as u32,
        }
    }

    /// Creates a `DateTime` from epoch seconds and subsecond nanoseconds.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        DateTime {
            seconds,
            subsecond_nanos,
        }
    }

    /// Creates a `DateTime` from a [`SystemTime`], which must not predate the Unix epoch.
    pub fn from_system_time(system_time: SystemTime) -> Result<Self, DateTimeError> {
        let duration = system_time
            .duration_since(UNIX_EPOCH)
            .map_err(|_| DateTimeError::new("system time predates the Unix epoch"))?;
        Ok(DateTime {
            seconds: duration.as_secs() as i64,
            subsecond_nanos: duration.subsec_nanos(),
        })
    }

    /// Whole seconds since the Unix epoch.
    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    /// Nanoseconds past the whole second.
    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// True if this instant carries subsecond precision.
    pub fn has_subsec_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    fn to_chrono(self) -> Option<ChronoDateTime<Utc>> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos).single()
    }

    /// Renders this instant in the given wire format.
    ///
    /// Instants outside the representable calendar range fall back to the
    /// epoch-seconds rendering.
    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.to_chrono() {
                Some(dt) => {
                    let rfc3339 = dt.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                    let mut out = rfc3339.trim_end_matches('Z').to_owned();
                    if out.contains('.') {
                        out = out.trim_end_matches('0').trim_end_matches('.').to_owned();
                    }
                    out.push('Z');
                    out
                }
                None => self.fmt(Format::EpochSeconds),
            },
            Format::HttpDate => match self.to_chrono() {
                Some(dt) => {
                    let base = dt.format("%a, %d %b %Y %H:%M:%S").to_string();
                    if self.subsecond_nanos == 0 {
                        format!("{base} GMT")
                    } else {
                        format!("{base}.{:03} GMT", self.subsecond_nanos / 1_000_000)
                    }
                }
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
        }
    }

    /// Parses an instant from the given wire format.
    pub fn parse(s: &str, format: Format) -> Result<Self, DateTimeError> {
        match format {
            Format::DateTime => {
                let parsed = ChronoDateTime::parse_from_rfc3339(s)
                    .map_err(|e| DateTimeError::new(format!("invalid date-time `{s}`: {e}")))?
                    .with_timezone(&Utc);
                Ok(DateTime {
                    seconds: parsed.timestamp(),
                    subsecond_nanos: parsed.timestamp_subsec_nanos(),
                })
            }
            Format::HttpDate => {
                let parsed =
                    chrono::NaiveDateTime::parse_from_str(s, "%a, %d %b %Y %H:%M:%S%.f GMT")
                        .map_err(|e| DateTimeError::new(format!("invalid http date `{s}`: {e}")))?
                        .and_utc();
                Ok(DateTime {
                    seconds: parsed.timestamp(),
                    subsecond_nanos: parsed.timestamp_subsec_nanos(),
                })
            }
            Format::EpochSeconds => {
                let (whole, fraction) = match s.split_once('.') {
                    Some((whole, fraction)) => (whole, Some(fraction)),
                    None => (s, None),
                };
                let seconds: i64 = whole
                    .parse()
                    .map_err(|_| DateTimeError::new(format!("invalid epoch seconds `{s}`")))?;
                let subsecond_nanos = match fraction {
                    None | Some("") => 0,
                    Some(fraction) => {
                        if fraction.len() > 9 || fraction.bytes().any(|b| !b.is_ascii_digit()) {
                            return Err(DateTimeError::new(format!(
                                "invalid fractional seconds `{s}`"
                            )));
                        }
                        let padded = format!("{fraction:0<9}");
                        padded
                            .parse()
                            .map_err(|_| DateTimeError::new(format!("invalid epoch seconds `{s}`")))?
                    }
                };
                Ok(DateTime {
                    seconds,
                    subsecond_nanos,
                })
            }
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fmt(Format::DateTime))
    }
}

/// The wire formats an instant can be rendered in or parsed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339 date-time, e.g. `2019-12-16T23:48:18Z`.
    DateTime,
    /// IMF-fixdate, e.g. `Mon, 16 Dec 2019 23:48:18 GMT`.
    HttpDate,
    /// Seconds since the Unix epoch with optional fraction, e.g. `1576540098.52`.
    EpochSeconds,
}

/// A date-time could not be constructed or parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateTimeError {
    message: String,
}

impl DateTimeError {
    fn new(message: impl Into<String>) -> Self {
        DateTimeError {
            message: message.into(),
        }
    }
}

impl fmt::Display for DateTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for DateTimeError {}

#[cfg(test)]
mod test {
    use super::{DateTime, Format};
    use proptest::prelude::*;

    #[test]
    fn datetime_fmt() {
        let date_time = DateTime::from_epoch_seconds(1576540098);
        assert_eq!(date_time.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(date_time.fmt(Format::EpochSeconds), "1576540098");
        assert_eq!(
            date_time.fmt(Format::HttpDate),
            "Mon, 16 Dec 2019 23:48:18 GMT"
        );

        let date_time = DateTime::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(date_time.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(date_time.fmt(Format::EpochSeconds), "1576540098.52");
        assert_eq!(
            date_time.fmt(Format::HttpDate),
            "Mon, 16 Dec 2019 23:48:18.520 GMT"
        );
    }

    #[test]
    fn datetime_parse() {
        let expected = DateTime::from_epoch_seconds(1576540098);
        assert_eq!(
            DateTime::parse("2019-12-16T23:48:18Z", Format::DateTime).unwrap(),
            expected
        );
        assert_eq!(
            DateTime::parse("Mon, 16 Dec 2019 23:48:18 GMT", Format::HttpDate).unwrap(),
            expected
        );
        assert_eq!(
            DateTime::parse("1576540098", Format::EpochSeconds).unwrap(),
            expected
        );
        assert_eq!(
            DateTime::parse("1576540098.52", Format::EpochSeconds).unwrap(),
            DateTime::from_secs_and_nanos(1576540098, 520_000_000)
        );
    }

    #[test]
    fn equal_instants_from_different_constructors() {
        assert_eq!(
            DateTime::from_epoch_seconds(1576540098),
            DateTime::from_secs_and_nanos(1576540098, 0)
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(DateTime::parse("not a date", Format::DateTime).is_err());
        assert!(DateTime::parse("12.34.56", Format::EpochSeconds).is_err());
        assert!(DateTime::parse("1576540098.1234567891", Format::EpochSeconds).is_err());
    }

    proptest! {
        #[test]
        fn epoch_seconds_roundtrip(seconds in -62_135_596_800i64..=253_402_300_799i64, millis in 0u32..1000) {
            let date_time = DateTime::from_secs_and_nanos(seconds, millis * 1_000_000);
            let rendered = date_time.fmt(Format::EpochSeconds);
            prop_assert_eq!(DateTime::parse(&rendered, Format::EpochSeconds).unwrap(), date_time);
        }

        #[test]
        fn date_time_roundtrip(seconds in -62_135_596_800i64..=253_402_300_799i64, millis in 0u32..1000) {
            let date_time = DateTime::from_secs_and_nanos(seconds, millis * 1_000_000);
            let rendered = date_time.fmt(Format::DateTime);
            prop_assert_eq!(DateTime::parse(&rendered, Format::DateTime).unwrap(), date_time);
        }
    }
}
