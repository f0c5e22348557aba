//! Conversions between the NMEA time representations and [`time`] types.
//!
//! Sentences carry time of day as `hhmmss.ss` and dates as `ddmmyy`. Typed
//! values use seconds since midnight (`f64`) and days since 1970-01-01 (`u32`),
//! both with NA sentinels.

use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

use crate::{
    na::{DOUBLE_NA, NotAvailable, UINT32_NA},
    parse,
};

const SECONDS_PER_DAY: f64 = 86_400.0;
const CENTIS_PER_DAY: i64 = 8_640_000;

fn epoch_julian_day() -> i32 {
    OffsetDateTime::UNIX_EPOCH.date().to_julian_day()
}

/// Days elapsed between 1970-01-01 and `date`. Dates before the epoch give NA.
pub fn days_since_1970(date: Date) -> u32 {
    u32::try_from(date.to_julian_day() - epoch_julian_day()).unwrap_or(UINT32_NA)
}

/// Calendar date of a days-since-1970 count, or `None` for NA.
pub fn date_from_days(days: u32) -> Option<Date> {
    let days = i32::try_from(days.to_option()?).ok()?;
    Date::from_julian_day(epoch_julian_day().checked_add(days)?).ok()
}

/// Converts seconds since midnight to the numeric `hhmmss.ss` form written on the wire.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::datetime::nmea_time_from_seconds;
///
/// assert!((nmea_time_from_seconds(57612.71) - 160012.71).abs() < 1e-6);
/// ```
pub fn nmea_time_from_seconds(seconds: f64) -> f64 {
    if seconds.is_na() || !seconds.is_finite() {
        return DOUBLE_NA;
    }

    // Rounded to the written precision before splitting; 24:00:00.00 wraps to midnight.
    let centis = ((seconds * 100.0).round() as i64).rem_euclid(CENTIS_PER_DAY);
    let hours = centis / 360_000;
    let minutes = centis / 6_000 % 60;
    let rest = centis % 6_000;

    (hours * 10_000 + minutes * 100) as f64 + rest as f64 / 100.0
}

/// Converts seconds since midnight into a [`Time`]. NA and out-of-range values give `None`.
pub fn time_from_seconds(seconds: f64) -> Option<Time> {
    if seconds.is_na() || !(0.0..SECONDS_PER_DAY).contains(&seconds) {
        return None;
    }

    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9).round().min(999_999_999.0) as u32;
    let whole = whole as u32;

    Time::from_hms_nano(
        (whole / 3600) as u8,
        (whole / 60 % 60) as u8,
        (whole % 60) as u8,
        nanos,
    )
    .ok()
}

/// Seconds since midnight of a [`Time`].
pub fn seconds_from_time(time: Time) -> f64 {
    f64::from(time.hour()) * 3600.0
        + f64::from(time.minute()) * 60.0
        + f64::from(time.second())
        + f64::from(time.nanosecond()) / 1e9
}

/// Combines a `ddmmyy` date field and an `hhmmss.ss` time field.
///
/// A missing or malformed date falls back to `default_date`; a missing or
/// malformed time falls back to midnight.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::datetime::parse_date_time;
/// use time::{Date, Month};
///
/// let default_date = Date::from_calendar_date(2024, Month::January, 1).unwrap();
///
/// let dt = parse_date_time("060815", "092348.00", default_date);
/// assert_eq!(dt.date(), Date::from_calendar_date(2015, Month::August, 6).unwrap());
/// assert_eq!(dt.hour(), 9);
///
/// let dt = parse_date_time("", "092348.00", default_date);
/// assert_eq!(dt.date(), default_date);
/// ```
pub fn parse_date_time(date_field: &str, time_field: &str, default_date: Date) -> PrimitiveDateTime {
    let date = parse::date(date_field).unwrap_or(default_date);
    let time = time_from_seconds(parse::time_of_day(time_field)).unwrap_or(Time::MIDNIGHT);

    PrimitiveDateTime::new(date, time)
}

#[cfg(test)]
mod tests {
    use time::Month;

    use super::*;

    #[test]
    fn test_days_since_1970() {
        let cases = [
            ((1970, Month::January, 1), 0),
            ((2015, Month::August, 6), 16653),
            ((2004, Month::March, 11), 12488),
        ];

        for ((year, month, day), days) in cases {
            let date = Date::from_calendar_date(year, month, day).unwrap();
            assert_eq!(days_since_1970(date), days);
            assert_eq!(date_from_days(days), Some(date));
        }

        let before_epoch = Date::from_calendar_date(1969, Month::December, 31).unwrap();
        assert!(days_since_1970(before_epoch).is_na());
        assert_eq!(date_from_days(UINT32_NA), None);
    }

    #[test]
    fn test_nmea_time_from_seconds() {
        let cases = [
            (0.0, 0.0),
            (57597.0, 155957.0),
            (86399.5, 235959.5),
            (59.996, 100.0),
            (86399.994, 235959.99),
            (86399.999, 0.0),
        ];

        for (seconds, nmea) in cases {
            assert!((nmea_time_from_seconds(seconds) - nmea).abs() < 1e-6);
        }

        assert!(nmea_time_from_seconds(DOUBLE_NA).is_na());
    }

    #[test]
    fn test_time_from_seconds() {
        let time = time_from_seconds(33828.5).unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (9, 23, 48));
        assert_eq!(time.millisecond(), 500);
        assert!((seconds_from_time(time) - 33828.5).abs() < 1e-9);

        assert_eq!(time_from_seconds(DOUBLE_NA), None);
        assert_eq!(time_from_seconds(86400.0), None);
    }
}
