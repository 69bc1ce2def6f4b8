use crate::consts::{NUMBER_HINT, STRING_HINT};
use chrono::{DateTime, Local, TimeZone};
use derive_more::{Display, From};
use std::str::FromStr;

/// Stored calendar fields. `month` is zero-based and neither field is
/// range-checked here; only the calendar engine normalizes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Ymd {
    pub(crate) year: i32,
    pub(crate) month: i32,
    pub(crate) day: i32,
}

impl Ymd {
    pub(crate) const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }
}

/// Error type for the operations that signal instead of degrading to the
/// invalid value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Primitive coercion was asked for something other than `"string"` or `"number"`.
    #[error("Invalid hint: {0}")]
    InvalidHint(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The primitive form requested from [`crate::DateTimeValue::to_primitive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Hint {
    #[display(fmt = "string")]
    String,
    #[display(fmt = "number")]
    Number,
}

impl FromStr for Hint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            STRING_HINT => Ok(Self::String),
            NUMBER_HINT => Ok(Self::Number),
            other => {
                tracing::debug!(hint = other, "rejected primitive hint");
                Err(Error::InvalidHint(other.to_owned()))
            },
        }
    }
}

/// A date coerced to a primitive value.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum Primitive {
    /// The canonical `YYYY-MM-DD` text
    Text(String),
    /// Milliseconds since the Unix epoch at local midnight, `None` when invalid
    Number(Option<i64>),
}

/// The argument shapes a [`crate::PlainDate`] can be built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// The current local day
    Now,
    /// Milliseconds since the Unix epoch; `None` yields the invalid value
    Time(Option<i64>),
    /// Text containing a `YYYY-MM-DD` date
    Text(String),
    /// A full date-time whose local calendar day is kept
    DateTime(DateTime<Local>),
    /// Direct field assignment, month zero-based, day defaulting to 1
    Fields {
        year:  i32,
        month: i32,
        day:   Option<i32>,
    },
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        Self::Time(Some(millis))
    }
}

impl From<Option<i64>> for DateInput {
    fn from(millis: Option<i64>) -> Self {
        Self::Time(millis)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(date_time: DateTime<Tz>) -> Self {
        Self::DateTime(date_time.with_timezone(&Local))
    }
}

impl From<(i32, i32)> for DateInput {
    fn from((year, month): (i32, i32)) -> Self {
        Self::Fields { year, month, day: None }
    }
}

impl From<(i32, i32, i32)> for DateInput {
    fn from((year, month, day): (i32, i32, i32)) -> Self {
        Self::Fields {
            year,
            month,
            day: Some(day),
        }
    }
}
