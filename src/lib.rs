mod calendar;
mod consts;
mod interface;
mod locale;
pub mod prelude;
mod types;

pub use consts::*;
pub use interface::DateTimeValue;
pub use locale::{LocaleFormatter, NumericLocale, PatternLocale};
pub use types::{DateInput, Error, Hint, Primitive, Result};

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use types::Ymd;

/// A calendar day without time of day or zone.
///
/// Holds a year, a zero-based month and a day of the month, or nothing at all
/// when the value is invalid. Time-of-day operations from
/// [`DateTimeValue`] are neutralized: getters report `None`, setters leave the
/// day untouched.
///
/// Equality and ordering go through [`DateTimeValue::get_time`], so an invalid
/// value equals nothing, not even itself.
#[derive(Debug, Clone, Copy)]
pub struct PlainDate {
    ymd: Option<Ymd>,
}

impl PlainDate {
    /// Creates a date from raw fields. Fields are stored as given; an
    /// out-of-range month or day is only normalized when the calendar engine
    /// reads it.
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self {
            ymd: Some(Ymd::new(year, month, day)),
        }
    }

    /// Creates the first day of `month` in `year`.
    pub const fn year_month(year: i32, month: i32) -> Self {
        Self::new(year, month, DEFAULT_DAY)
    }

    /// The invalid value.
    pub const fn invalid() -> Self {
        Self { ymd: None }
    }

    /// The current local calendar day.
    pub fn now() -> Self {
        Self {
            ymd: Some(calendar::today()),
        }
    }

    /// The local calendar day containing the instant `millis` (milliseconds
    /// since the Unix epoch). `None`, or an instant the calendar cannot
    /// represent, gives the invalid value.
    pub fn from_time(millis: impl Into<Option<i64>>) -> Self {
        let millis = millis.into();
        let ymd = millis.and_then(calendar::ymd_at);
        if ymd.is_none() {
            tracing::debug!(?millis, "instant outside the calendar, yielding invalid date");
        }
        Self { ymd }
    }

    /// The local calendar day of a full date-time, time of day discarded.
    /// Gives the invalid value when the local day falls outside the calendar.
    pub fn from_date_time<Tz: TimeZone>(date_time: &DateTime<Tz>) -> Self {
        let ymd = calendar::local_ymd(date_time);
        if ymd.is_none() {
            tracing::debug!("local day outside the calendar, yielding invalid date");
        }
        Self { ymd }
    }

    /// Reads the first `YYYY-MM-DD` found in `s`, ignoring anything around it
    /// (a trailing time, for instance). Yields the invalid value when there is
    /// none.
    pub fn from_string(s: &str) -> Self {
        let ymd = find_iso_date(s);
        if ymd.is_none() {
            tracing::debug!(input = s, "no YYYY-MM-DD date found, yielding invalid date");
        }
        Self { ymd }
    }

    /// Builds a date from whichever argument shape the caller has.
    pub fn from_input(input: impl Into<DateInput>) -> Self {
        match input.into() {
            DateInput::Now => Self::now(),
            DateInput::Time(millis) => Self::from_time(millis),
            DateInput::Text(s) => Self::from_string(&s),
            DateInput::DateTime(date_time) => Self::from_date_time(&date_time),
            DateInput::Fields { year, month, day } => Self::new(year, month, day.unwrap_or(DEFAULT_DAY)),
        }
    }

    /// Parses `s` and returns the milliseconds since the epoch at local
    /// midnight of the resulting day.
    ///
    /// A full RFC 3339 or RFC 2822 instant is read in the local calendar,
    /// anything else goes through [`PlainDate::from_string`]. A bare
    /// `YYYY-MM-DD` therefore keeps its literal day rather than being read as
    /// UTC midnight and shifted into the local zone.
    pub fn parse(s: &str) -> Option<i64> {
        let instant = DateTime::parse_from_rfc3339(s).or_else(|_| DateTime::parse_from_rfc2822(s));
        match instant {
            Ok(instant) => Self::from_date_time(&instant).get_time(),
            Err(_) => Self::from_string(s).get_time(),
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.ymd.is_some()
    }

    /// The stored year.
    pub fn year(&self) -> Option<i32> {
        self.ymd.map(|ymd| ymd.year)
    }

    /// The stored month, zero-based.
    pub fn month(&self) -> Option<i32> {
        self.ymd.map(|ymd| ymd.month)
    }

    /// The stored day of the month.
    pub fn day(&self) -> Option<i32> {
        self.ymd.map(|ymd| ymd.day)
    }

    /// The calendar day after rollover normalization.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        self.ymd.and_then(calendar::normalize)
    }

    /// Local midnight of this day as a full date-time.
    pub fn to_date_time(&self) -> Option<DateTime<Local>> {
        self.to_naive_date().and_then(calendar::local_midnight)
    }

    /// Formats the normalized day with `formatter`.
    pub fn format_locale(&self, formatter: &dyn LocaleFormatter) -> String {
        self.to_naive_date()
            .map_or_else(|| INVALID_DATE.to_owned(), |date| formatter.format_date(date))
    }

    /// Shared body of every time-of-day getter and setter.
    const fn time_of_day(&self) -> Option<u32> {
        None
    }

    /// Applies a partial field update through the calendar engine: the stored
    /// fields are normalized first, the update lands on that day, and the
    /// result is normalized again. An invalid date stays invalid.
    fn roll(&mut self, update: impl FnOnce(Ymd) -> Ymd) -> Option<i64> {
        self.ymd = self.ymd.and_then(calendar::roll).map(update).and_then(calendar::roll);
        self.get_time()
    }
}

/// Finds the first ASCII `DDDD-DD-DD` in `s`.
fn find_iso_date(s: &str) -> Option<Ymd> {
    s.as_bytes().windows(ISO_DATE_LEN).find_map(parse_iso_window)
}

fn parse_iso_window(window: &[u8]) -> Option<Ymd> {
    let (year, rest) = window.split_at(YEAR_DIGITS);
    let (month, rest) = strip_separator(rest)?.split_at(MONTH_DIGITS);
    let day = strip_separator(rest)?;

    Some(Ymd::new(digits(year)?, digits(month)? - 1, digits(day)?))
}

fn strip_separator(bytes: &[u8]) -> Option<&[u8]> {
    match bytes.split_first() {
        Some((&sep, rest)) if char::from(sep) == DATE_SEPARATOR => Some(rest),
        _ => None,
    }
}

fn digits(bytes: &[u8]) -> Option<i32> {
    bytes.iter().try_fold(0_i32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + i32::from(b - b'0'))
    })
}

impl DateTimeValue for PlainDate {
    fn get_time(&self) -> Option<i64> {
        self.ymd.and_then(calendar::midnight_millis)
    }

    fn get_full_year(&self) -> Option<i32> {
        self.year()
    }

    fn get_utc_full_year(&self) -> Option<i32> {
        self.get_full_year()
    }

    fn get_month(&self) -> Option<i32> {
        self.month()
    }

    fn get_utc_month(&self) -> Option<i32> {
        self.get_month()
    }

    fn get_date(&self) -> Option<i32> {
        self.day()
    }

    fn get_utc_date(&self) -> Option<i32> {
        self.get_date()
    }

    fn get_day(&self) -> Option<i32> {
        self.ymd.and_then(calendar::weekday)
    }

    fn get_utc_day(&self) -> Option<i32> {
        self.get_day()
    }

    fn get_hours(&self) -> Option<u32> {
        self.time_of_day()
    }

    fn get_utc_hours(&self) -> Option<u32> {
        self.time_of_day()
    }

    fn get_minutes(&self) -> Option<u32> {
        self.time_of_day()
    }

    fn get_utc_minutes(&self) -> Option<u32> {
        self.time_of_day()
    }

    fn get_seconds(&self) -> Option<u32> {
        self.time_of_day()
    }

    fn get_utc_seconds(&self) -> Option<u32> {
        self.time_of_day()
    }

    fn get_milliseconds(&self) -> Option<u32> {
        self.time_of_day()
    }

    fn get_utc_milliseconds(&self) -> Option<u32> {
        self.time_of_day()
    }

    fn get_timezone_offset(&self) -> i32 {
        TIMEZONE_OFFSET_MINUTES
    }

    fn set_time(&mut self, millis: Option<i64>) -> Option<i64> {
        *self = Self::from_time(millis);
        self.get_time()
    }

    fn set_milliseconds(&mut self, _ms: u32) -> Option<u32> {
        self.time_of_day()
    }

    fn set_utc_milliseconds(&mut self, _ms: u32) -> Option<u32> {
        self.time_of_day()
    }

    fn set_seconds(&mut self, _seconds: u32) -> Option<u32> {
        self.time_of_day()
    }

    fn set_utc_seconds(&mut self, _seconds: u32) -> Option<u32> {
        self.time_of_day()
    }

    fn set_minutes(&mut self, _minutes: u32) -> Option<u32> {
        self.time_of_day()
    }

    fn set_utc_minutes(&mut self, _minutes: u32) -> Option<u32> {
        self.time_of_day()
    }

    fn set_hours(&mut self, _hours: u32) -> Option<u32> {
        self.time_of_day()
    }

    fn set_utc_hours(&mut self, _hours: u32) -> Option<u32> {
        self.time_of_day()
    }

    fn set_date(&mut self, day: i32) -> Option<i64> {
        self.roll(|ymd| Ymd { day, ..ymd })
    }

    fn set_utc_date(&mut self, day: i32) -> Option<i64> {
        self.set_date(day)
    }

    fn set_month(&mut self, month: i32, day: Option<i32>) -> Option<i64> {
        self.roll(|ymd| Ymd {
            month,
            day: day.unwrap_or(ymd.day),
            ..ymd
        })
    }

    fn set_utc_month(&mut self, month: i32, day: Option<i32>) -> Option<i64> {
        self.set_month(month, day)
    }

    fn set_full_year(&mut self, year: i32, month: Option<i32>, day: Option<i32>) -> Option<i64> {
        self.roll(|ymd| Ymd {
            year,
            month: month.unwrap_or(ymd.month),
            day: day.unwrap_or(ymd.day),
        })
    }

    fn set_utc_full_year(&mut self, year: i32, month: Option<i32>, day: Option<i32>) -> Option<i64> {
        self.set_full_year(year, month, day)
    }

    fn to_date_string(&self) -> String {
        self.to_string()
    }

    fn to_time_string(&self) -> String {
        String::new()
    }

    fn to_locale_date_string(&self) -> String {
        self.format_locale(&NumericLocale)
    }

    fn to_locale_time_string(&self) -> String {
        String::new()
    }

    fn to_utc_string(&self) -> String {
        self.to_string()
    }

    fn to_iso_string(&self) -> String {
        self.to_string()
    }

    fn to_json(&self) -> String {
        self.to_string()
    }
}

impl Default for PlainDate {
    /// The current local calendar day.
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for PlainDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ymd {
            Some(Ymd { year, month, day }) => write!(
                f,
                "{year:04}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{day:02}",
                i64::from(month) + 1
            ),
            None => f.write_str(INVALID_DATE),
        }
    }
}

impl FromStr for PlainDate {
    type Err = Infallible;

    /// Same as [`PlainDate::from_string`]: malformed text gives the invalid
    /// value rather than an error.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_string(s))
    }
}

impl PartialEq for PlainDate {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.get_time(), other.get_time()), (Some(a), Some(b)) if a == b)
    }
}

impl PartialOrd for PlainDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.get_time(), other.get_time()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => None,
        }
    }
}

impl From<DateInput> for PlainDate {
    fn from(input: DateInput) -> Self {
        Self::from_input(input)
    }
}

impl From<NaiveDate> for PlainDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            ymd: Some(calendar::ymd_of(date)),
        }
    }
}

impl From<NaiveDateTime> for PlainDate {
    fn from(date_time: NaiveDateTime) -> Self {
        Self::from(date_time.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for PlainDate {
    fn from(date_time: DateTime<Tz>) -> Self {
        Self::from_date_time(&date_time)
    }
}

impl From<(i32, i32)> for PlainDate {
    fn from((year, month): (i32, i32)) -> Self {
        Self::year_month(year, month)
    }
}

impl From<(i32, i32, i32)> for PlainDate {
    fn from((year, month, day): (i32, i32, i32)) -> Self {
        Self::new(year, month, day)
    }
}

impl serde::Serialize for PlainDate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.is_valid() {
            serializer.serialize_str(&self.to_json())
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> serde::Deserialize<'de> for PlainDate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map_or_else(Self::invalid, |s| Self::from_string(&s)))
    }
}
