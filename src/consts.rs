/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Number of digits in the year field of `YYYY-MM-DD`
pub const YEAR_DIGITS: usize = 4;
/// Number of digits in the month field of `YYYY-MM-DD`
pub const MONTH_DIGITS: usize = 2;
/// Number of digits in the day field of `YYYY-MM-DD`
pub const DAY_DIGITS: usize = 2;

/// Length of a canonical `YYYY-MM-DD` string
pub const ISO_DATE_LEN: usize = YEAR_DIGITS + 1 + MONTH_DIGITS + 1 + DAY_DIGITS;

/// Months per year, used to carry month overflow into the year
pub const MONTHS_PER_YEAR: i32 = 12;

/// Day of month used when a constructor omits it
pub const DEFAULT_DAY: i32 = 1;

/// Text form of the invalid value
pub const INVALID_DATE: &str = "Invalid Date";

/// A plain date has no zone, so its offset from UTC is always zero minutes
pub const TIMEZONE_OFFSET_MINUTES: i32 = 0;

/// Hint requesting the textual primitive form
pub const STRING_HINT: &str = "string";
/// Hint requesting the numeric primitive form
pub const NUMBER_HINT: &str = "number";
