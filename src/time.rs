//! Timestamp resolution for loosely formatted sources.
//!
//! Exports from databases and APIs disagree on how timestamps look: RFC 3339
//! with or without fractional seconds, space-separated database output with a
//! truncated `+00` offset, naive datetimes, bare dates, bare times of day.
//! [`resolve`] tries the candidate layouts in [`TIME_LAYOUTS`] in order and
//! returns the first instant that parses, normalized to UTC.
//!
//! # Layout Order
//!
//! ```text
//! 1. rfc3339             2024-03-28T15:00:00Z, 2024-03-28T15:00:00.123456789+02:00
//! 2. offset_datetime     2024-03-28 15:00:00.000000+00, 2024-03-28 15:00:00Z
//! 3. naive_datetime_t    2024-03-28T15:00:00.5           (assumed UTC)
//! 4. naive_datetime      2024-03-28 15:00:00             (assumed UTC)
//! 5. date                2024-03-28                      (midnight UTC)
//! 6. time_of_day         15:04:05, 15:04:05.250          (0000-01-01, UTC)
//! ```
//!
//! Every field is fixed width and zero padded: `2024-3-28` and `9:5:1` are
//! not timestamps.
//!
//! Layouts carrying an explicit offset come first so a string that is valid
//! in several layouts always resolves to the offset-aware reading.
//!
//! # Examples
//!
//! ```rust
//! use hsds_types::time::resolve;
//!
//! let a = resolve("2024-03-28T15:00:00Z").unwrap();
//! let b = resolve("2024-03-28 15:00:00.000000+00").unwrap();
//! assert_eq!(a, b);
//!
//! assert!(resolve("not-a-date").is_none());
//! ```
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, SubsecRound, Utc};

use crate::error::TimeParseError;

/// Field names treated as timestamp candidates when decoding generic records.
///
/// Membership is checked on the key alone; the value still has to be a
/// string that one of the [`TIME_LAYOUTS`] accepts.
pub const STANDARD_TIME_FIELDS: &[&str] = &[
    "created_at",
    "updated_at",
    "last_modified",
    "assured_date",
    "valid_from",
    "valid_to",
    "dtstart",
    "until",
    "opens_at",
    "closes_at",
    "updated",
    "last_action_date",
];

/// How a [`TimeLayout`] interprets its pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Full RFC 3339, offset required, any fractional precision.
    Rfc3339,
    /// `chrono` pattern with an explicit offset.
    OffsetDateTime,
    /// `chrono` pattern without offset; the value is taken as UTC.
    NaiveDateTime,
    /// Calendar date only; midnight UTC.
    Date,
    /// Time of day only; anchored on 0000-01-01 UTC.
    TimeOfDay,
}

/// One entry of the candidate format list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeLayout {
    /// Stable name, used in logs.
    pub name: &'static str,
    /// Interpretation of `pattern`.
    pub kind: LayoutKind,
    /// `chrono` strftime pattern (informational for [`LayoutKind::Rfc3339`]).
    pub pattern: &'static str,
    /// Fixed-width prefix the input must have before `pattern` is tried.
    ///
    /// `9` stands for one ASCII digit, any other byte must match literally.
    /// `chrono` reads numeric fields with variable width, so without this
    /// `1-2-3` would pass as a date.
    pub shape: &'static str,
}

/// The candidate format list, evaluated first-match-wins.
pub const TIME_LAYOUTS: &[TimeLayout] = &[
    // RFC 3339 parsing in chrono is already fixed width.
    TimeLayout {
        name: "rfc3339",
        kind: LayoutKind::Rfc3339,
        pattern: "%Y-%m-%dT%H:%M:%S%.f%:z",
        shape: "",
    },
    // `%#z` accepts `Z`, `+hh`, `+hhmm` and `+hh:mm`.
    TimeLayout {
        name: "offset_datetime",
        kind: LayoutKind::OffsetDateTime,
        pattern: "%Y-%m-%d %H:%M:%S%.f%#z",
        shape: "9999-99-99 99:99:99",
    },
    TimeLayout {
        name: "naive_datetime_t",
        kind: LayoutKind::NaiveDateTime,
        pattern: "%Y-%m-%dT%H:%M:%S%.f",
        shape: "9999-99-99T99:99:99",
    },
    TimeLayout {
        name: "naive_datetime",
        kind: LayoutKind::NaiveDateTime,
        pattern: "%Y-%m-%d %H:%M:%S%.f",
        shape: "9999-99-99 99:99:99",
    },
    TimeLayout {
        name: "date",
        kind: LayoutKind::Date,
        pattern: "%Y-%m-%d",
        shape: "9999-99-99",
    },
    TimeLayout {
        name: "time_of_day",
        kind: LayoutKind::TimeOfDay,
        pattern: "%H:%M:%S%.f",
        shape: "99:99:99",
    },
];

impl TimeLayout {
    /// Parses `raw` with this layout alone.
    pub fn parse(&self, raw: &str) -> Option<DateTime<Utc>> {
        if !has_shape(raw, self.shape) {
            return None;
        }
        match self.kind {
            LayoutKind::Rfc3339 => DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            LayoutKind::OffsetDateTime => DateTime::parse_from_str(raw, self.pattern)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            LayoutKind::NaiveDateTime => NaiveDateTime::parse_from_str(raw, self.pattern)
                .ok()
                .map(|naive| naive.and_utc()),
            LayoutKind::Date => NaiveDate::parse_from_str(raw, self.pattern)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc()),
            LayoutKind::TimeOfDay => {
                let time = NaiveTime::parse_from_str(raw, self.pattern).ok()?;
                NaiveDate::from_ymd_opt(0, 1, 1).map(|date| date.and_time(time).and_utc())
            }
        }
    }
}

fn has_shape(raw: &str, shape: &str) -> bool {
    let raw = raw.as_bytes();
    raw.len() >= shape.len()
        && shape.bytes().zip(raw).all(|(want, &got)| match want {
            b'9' => got.is_ascii_digit(),
            literal => got == literal,
        })
}

/// Resolves `raw` against [`TIME_LAYOUTS`], returning the instant in UTC.
///
/// `None` means no layout matched. It is a soft signal: callers decoding
/// generic records leave the original string untouched.
pub fn resolve(raw: &str) -> Option<DateTime<Utc>> {
    resolve_with_layout(raw).map(|(instant, _)| instant)
}

/// Like [`resolve`], also reporting which layout matched.
///
/// ```rust
/// use hsds_types::time::resolve_with_layout;
///
/// let (_, layout) = resolve_with_layout("2024-03-28").unwrap();
/// assert_eq!(layout.name, "date");
/// ```
pub fn resolve_with_layout(raw: &str) -> Option<(DateTime<Utc>, &'static TimeLayout)> {
    TIME_LAYOUTS
        .iter()
        .find_map(|layout| layout.parse(raw).map(|instant| (instant, layout)))
}

/// Strict variant of [`resolve`] for callers that want an error value.
///
/// # Errors
///
/// [`TimeParseError::Unrecognized`] when no layout matches.
pub fn parse_time(raw: &str) -> Result<DateTime<Utc>, TimeParseError> {
    resolve(raw).ok_or_else(|| TimeParseError::Unrecognized(raw.to_string()))
}

/// Current instant in UTC, truncated to whole seconds.
///
/// Used to stamp `created_at` on newly constructed records. Two records
/// created within the same second compare equal.
pub fn ical_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Formats an instant in the iCalendar (RFC 5545) UTC form, e.g. `20240328T150000Z`.
pub fn format_ical(instant: &DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Canonical string form written back into rewritten records.
///
/// RFC 3339 with a `Z` suffix; fractional seconds only when non-zero.
pub fn encode_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
