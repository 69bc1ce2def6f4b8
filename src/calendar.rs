//! Calendar engine backed by `chrono`.
//!
//! Everything here reads and writes the local calendar. Days are normalized
//! with Gregorian rollover: month overflow carries into the year, then the day
//! is applied as an offset from the first of that month, so day 0 is the last
//! day of the previous month and day 32 of January is the 1st of February.

use crate::consts::MONTHS_PER_YEAR;
use crate::types::Ymd;
use chrono::{
    DateTime, Datelike, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeDelta, TimeZone,
};

/// The local calendar day of the current moment.
pub(crate) fn today() -> Ymd {
    ymd_of(Local::now().date_naive())
}

/// Reads the stored fields off an already valid calendar day.
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn ymd_of(date: NaiveDate) -> Ymd {
    // month0 is 0..=11 and day is 1..=31, both fit an i32
    Ymd::new(date.year(), date.month0() as i32, date.day() as i32)
}

/// The local calendar day of an instant given in milliseconds since the epoch.
pub(crate) fn ymd_at(millis: i64) -> Option<Ymd> {
    let instant = DateTime::from_timestamp_millis(millis)?;
    local_ymd(&instant)
}

/// The local calendar day of a full date-time, whatever zone it carries.
/// Returns `None` when the local offset pushes the day past chrono's range.
pub(crate) fn local_ymd<Tz: TimeZone>(date_time: &DateTime<Tz>) -> Option<Ymd> {
    let utc = date_time.naive_utc();
    let offset = Local.offset_from_utc_datetime(&utc).fix();
    day_at_offset(utc, offset).map(ymd_of)
}

fn day_at_offset(utc: NaiveDateTime, offset: FixedOffset) -> Option<NaiveDate> {
    utc.checked_add_offset(offset).map(|local| local.date())
}

/// Normalizes possibly out-of-range fields into a real calendar day.
/// Returns `None` when the result leaves chrono's supported range.
pub(crate) fn normalize(fields: Ymd) -> Option<NaiveDate> {
    let year = fields.year.checked_add(fields.month.div_euclid(MONTHS_PER_YEAR))?;
    let month = u32::try_from(fields.month.rem_euclid(MONTHS_PER_YEAR)).ok()? + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = TimeDelta::try_days(i64::from(fields.day) - 1)?;
    first.checked_add_signed(offset)
}

/// Normalizes and reads the result back as stored fields.
pub(crate) fn roll(fields: Ymd) -> Option<Ymd> {
    let rolled = normalize(fields).map(ymd_of);
    tracing::trace!(?fields, ?rolled, "normalized calendar fields");
    rolled
}

/// The instant at which `date` begins in the local zone.
pub(crate) fn local_midnight(date: NaiveDate) -> Option<DateTime<Local>> {
    let midnight = date.and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&midnight) {
        LocalResult::Single(instant) => Some(instant),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        // midnight was skipped by a daylight-saving gap
        LocalResult::None => first_instant_after_gap(midnight),
    }
}

fn first_instant_after_gap(midnight: NaiveDateTime) -> Option<DateTime<Local>> {
    let after = midnight.checked_add_signed(TimeDelta::try_hours(1)?)?;
    Local.from_local_datetime(&after).earliest()
}

/// Milliseconds since the epoch at local midnight of the normalized day.
pub(crate) fn midnight_millis(fields: Ymd) -> Option<i64> {
    normalize(fields)
        .and_then(local_midnight)
        .map(|instant| instant.timestamp_millis())
}

/// Day of the week of the normalized day, Sunday = 0.
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn weekday(fields: Ymd) -> Option<i32> {
    normalize(fields).map(|date| date.weekday().num_days_from_sunday() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_normalize_cases() {
        struct TestCase {
            fields:      Ymd,
            expected:    NaiveDate,
            description: &'static str,
        }

        let cases = [
            TestCase {
                fields:      Ymd::new(1992, 0, 22),
                expected:    date(1992, 1, 22),
                description: "in range",
            },
            TestCase {
                fields:      Ymd::new(1992, 0, 32),
                expected:    date(1992, 2, 1),
                description: "day 32 of January",
            },
            TestCase {
                fields:      Ymd::new(1992, 2, 0),
                expected:    date(1992, 2, 29),
                description: "day 0 of March in a leap year",
            },
            TestCase {
                fields:      Ymd::new(1993, 2, 0),
                expected:    date(1993, 2, 28),
                description: "day 0 of March in a common year",
            },
            TestCase {
                fields:      Ymd::new(1992, 12, 1),
                expected:    date(1993, 1, 1),
                description: "month 12 carries into the next year",
            },
            TestCase {
                fields:      Ymd::new(1992, -1, 15),
                expected:    date(1991, 12, 15),
                description: "month -1 borrows from the previous year",
            },
            TestCase {
                fields:      Ymd::new(1992, 0, -30),
                expected:    date(1991, 12, 1),
                description: "negative day walks back across the year",
            },
            TestCase {
                fields:      Ymd::new(1992, 0, 366),
                expected:    date(1992, 12, 31),
                description: "day offset spanning a leap year",
            },
            TestCase {
                fields:      Ymd::new(1900, 1, 29),
                expected:    date(1900, 3, 1),
                description: "century common year has no February 29",
            },
        ];

        for case in &cases {
            assert_eq!(
                normalize(case.fields),
                Some(case.expected),
                "{}: {:?}",
                case.description,
                case.fields
            );
        }
    }

    #[test]
    fn test_normalize_out_of_range() {
        assert_eq!(normalize(Ymd::new(i32::MAX, 0, 1)), None);
        assert_eq!(normalize(Ymd::new(2000, i32::MAX, 1)), None);
        assert_eq!(normalize(Ymd::new(i32::MIN, -1, 1)), None);
    }

    #[test]
    fn test_roll_reads_back_fields() {
        assert_eq!(roll(Ymd::new(1992, 0, 32)), Some(Ymd::new(1992, 1, 1)));
        assert_eq!(roll(Ymd::new(i32::MAX, 0, 1)), None);
    }

    #[test]
    fn test_midnight_millis_matches_local_midnight() {
        let expected = Local
            .from_local_datetime(&date(1992, 1, 22).and_time(NaiveTime::MIN))
            .earliest()
            .unwrap()
            .timestamp_millis();
        assert_eq!(midnight_millis(Ymd::new(1992, 0, 22)), Some(expected));
        assert_eq!(midnight_millis(Ymd::new(1991, 12, 22)), Some(expected));
    }

    #[test]
    fn test_ymd_at_round_trips_through_midnight() {
        let millis = midnight_millis(Ymd::new(1992, 0, 22)).unwrap();
        assert_eq!(ymd_at(millis), Some(Ymd::new(1992, 0, 22)));
        assert_eq!(ymd_at(millis + 23 * 60 * 60 * 1000), Some(Ymd::new(1992, 0, 22)));
    }

    #[test]
    fn test_ymd_at_out_of_range() {
        assert_eq!(ymd_at(i64::MAX), None);
        assert_eq!(ymd_at(i64::MIN), None);
    }

    #[test]
    fn test_weekday_sunday_zero() {
        assert_eq!(weekday(Ymd::new(1992, 0, 22)), Some(3));
        assert_eq!(weekday(Ymd::new(1992, 0, 26)), Some(0));
        assert_eq!(weekday(Ymd::new(1992, 0, 25)), Some(6));
        assert_eq!(weekday(Ymd::new(i32::MAX, 0, 1)), None);
    }

    #[test]
    fn test_local_ymd_uses_local_zone() {
        let instant = chrono::Utc.with_ymd_and_hms(1992, 1, 22, 12, 0, 0).unwrap();
        let expected = instant.with_timezone(&Local).date_naive();
        assert_eq!(local_ymd(&instant), Some(ymd_of(expected)));
    }

    #[test]
    fn test_day_at_offset_past_calendar_end() {
        let east = FixedOffset::east_opt(9 * 3600).unwrap();
        let west = FixedOffset::west_opt(9 * 3600).unwrap();
        assert_eq!(day_at_offset(NaiveDateTime::MAX, east), None);
        assert_eq!(day_at_offset(NaiveDateTime::MIN, west), None);
        assert_eq!(
            day_at_offset(NaiveDateTime::MAX, west),
            Some(NaiveDateTime::MAX.date())
        );
    }

    #[test]
    fn test_ymd_at_calendar_edge_does_not_panic() {
        let last = DateTime::<chrono::Utc>::MAX_UTC.timestamp_millis();
        let first = DateTime::<chrono::Utc>::MIN_UTC.timestamp_millis();
        for millis in [last, first] {
            let expected = DateTime::from_timestamp_millis(millis).and_then(|instant| {
                let utc = instant.naive_utc();
                day_at_offset(utc, Local.offset_from_utc_datetime(&utc).fix())
            });
            assert_eq!(ymd_at(millis), expected.map(ymd_of));
        }
    }
}
