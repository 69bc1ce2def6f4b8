//! The operation set of a conventional date-time value.
//!
//! Numeric results use `None` as the "not a valid number" sentinel. Months are
//! zero-based, weekdays count from Sunday = 0, times are milliseconds since the
//! Unix epoch.

use crate::types::{Hint, Primitive, Result};

pub trait DateTimeValue {
    /// Milliseconds since the Unix epoch.
    fn get_time(&self) -> Option<i64>;

    /// Numeric coercion, the same count as [`DateTimeValue::get_time`].
    fn value_of(&self) -> Option<i64> {
        self.get_time()
    }

    /// Coerces to the primitive form named by `hint`, `"string"` or `"number"`.
    ///
    /// # Errors
    /// Returns `Error::InvalidHint` for any other hint.
    fn to_primitive(&self, hint: &str) -> Result<Primitive> {
        match hint.parse::<Hint>()? {
            Hint::String => Ok(Primitive::Text(self.to_date_string())),
            Hint::Number => Ok(Primitive::Number(self.get_time())),
        }
    }

    fn get_full_year(&self) -> Option<i32>;
    fn get_utc_full_year(&self) -> Option<i32>;
    fn get_month(&self) -> Option<i32>;
    fn get_utc_month(&self) -> Option<i32>;
    fn get_date(&self) -> Option<i32>;
    fn get_utc_date(&self) -> Option<i32>;
    /// Day of the week, Sunday = 0.
    fn get_day(&self) -> Option<i32>;
    fn get_utc_day(&self) -> Option<i32>;
    fn get_hours(&self) -> Option<u32>;
    fn get_utc_hours(&self) -> Option<u32>;
    fn get_minutes(&self) -> Option<u32>;
    fn get_utc_minutes(&self) -> Option<u32>;
    fn get_seconds(&self) -> Option<u32>;
    fn get_utc_seconds(&self) -> Option<u32>;
    fn get_milliseconds(&self) -> Option<u32>;
    fn get_utc_milliseconds(&self) -> Option<u32>;
    /// Minutes between UTC and local time.
    fn get_timezone_offset(&self) -> i32;

    /// Moves to the instant `millis`. Returns the new [`DateTimeValue::get_time`].
    fn set_time(&mut self, millis: Option<i64>) -> Option<i64>;
    fn set_milliseconds(&mut self, ms: u32) -> Option<u32>;
    fn set_utc_milliseconds(&mut self, ms: u32) -> Option<u32>;
    fn set_seconds(&mut self, seconds: u32) -> Option<u32>;
    fn set_utc_seconds(&mut self, seconds: u32) -> Option<u32>;
    fn set_minutes(&mut self, minutes: u32) -> Option<u32>;
    fn set_utc_minutes(&mut self, minutes: u32) -> Option<u32>;
    fn set_hours(&mut self, hours: u32) -> Option<u32>;
    fn set_utc_hours(&mut self, hours: u32) -> Option<u32>;
    /// Sets the day of the month, rolling over out-of-range values.
    fn set_date(&mut self, day: i32) -> Option<i64>;
    fn set_utc_date(&mut self, day: i32) -> Option<i64>;
    /// Sets the month and optionally the day, rolling over out-of-range values.
    fn set_month(&mut self, month: i32, day: Option<i32>) -> Option<i64>;
    fn set_utc_month(&mut self, month: i32, day: Option<i32>) -> Option<i64>;
    /// Sets the year and optionally month and day, rolling over out-of-range values.
    fn set_full_year(&mut self, year: i32, month: Option<i32>, day: Option<i32>) -> Option<i64>;
    fn set_utc_full_year(&mut self, year: i32, month: Option<i32>, day: Option<i32>) -> Option<i64>;

    fn to_date_string(&self) -> String;
    fn to_time_string(&self) -> String;
    fn to_locale_date_string(&self) -> String;
    fn to_locale_time_string(&self) -> String;
    fn to_utc_string(&self) -> String;
    fn to_iso_string(&self) -> String;
    fn to_json(&self) -> String;
}
