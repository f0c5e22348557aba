//! # Field parsing
//!
//! Tolerant conversions from a single sentence field to a typed value. Empty or
//! unparseable fields become the NA sentinel of the target type instead of an
//! error, so optional trailing fields and sloppy talkers never abort a decode.

use nom::{
    IResult, Parser,
    bytes::complete::take,
    character::complete::{space0, u8 as dec_u8},
    combinator::{all_consuming, map_parser},
    number::complete::double as nom_double,
};
use time::{Date, Month};

use crate::na::{DOUBLE_NA, NotAvailable, scale};

/// Trait for types that can be read from one NMEA 0183 sentence field.
///
/// Leading spaces are skipped and the longest numeric prefix is used, so
/// `" 12.5"` and `"12.5M"` both read as `12.5`. A field without a numeric
/// prefix yields [`NotAvailable::NA`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::{na::NotAvailable, parse::FromField};
///
/// assert_eq!(u8::from_field("42"), 42);
/// assert!(u8::from_field("").is_na());
/// assert!(f64::from_field("  ").is_na());
/// assert_eq!(f64::from_field(" -1.5"), -1.5);
/// ```
pub trait FromField: NotAvailable {
    /// Reads the field, returning the NA sentinel when it is empty or malformed.
    fn from_field(field: &str) -> Self;
}

fn leading<'a, O, P>(mut parser: P, field: &'a str) -> Option<O>
where
    P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    let (i, _) = space0::<_, nom::error::Error<&str>>.parse(field).ok()?;
    parser.parse(i).ok().map(|(_, value)| value)
}

macro_rules! impl_from_field_int {
    ($($t:tt),*) => ($(
        impl FromField for $t {
            fn from_field(field: &str) -> Self {
                leading(nom::character::complete::$t, field).unwrap_or(Self::NA)
            }
        }
    )*)
}

impl_from_field_int!(u8, i8, u16, i16, u32, i32);

impl FromField for f64 {
    fn from_field(field: &str) -> Self {
        leading(nom_double, field)
            .filter(|value: &f64| value.is_finite())
            .unwrap_or(DOUBLE_NA)
    }
}

/// Reads a double field.
pub fn double(field: &str) -> f64 {
    f64::from_field(field)
}

/// Reads a double field and multiplies it by `factor` unless it is NA.
pub fn scaled_double(field: &str, factor: f64) -> f64 {
    scale(double(field), factor)
}

/// Returns the first character of a field, if any.
pub fn first_char(field: &str) -> Option<char> {
    field.chars().next()
}

/// Negates `value` when `indicator` starts with `negative`. NA passes through.
///
/// Used for hemisphere letters (`S`, `W`), variation direction and the
/// steer-to direction of cross-track error.
pub fn signed(value: f64, indicator: &str, negative: char) -> f64 {
    if !value.is_na() && first_char(indicator) == Some(negative) {
        -value
    } else {
        value
    }
}

/// Reads a `ddmm.mmmm` / `dddmm.mmmm` coordinate and its hemisphere letter into
/// signed decimal degrees (negative for south and west).
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::parse::coordinate;
///
/// let lat = coordinate("5208.700", "N");
/// assert!((lat - 52.145).abs() < 1e-9);
/// assert!(coordinate("00438.600", "W") < 0.0);
/// ```
pub fn coordinate(value: &str, hemisphere: &str) -> f64 {
    let raw = double(value);
    if raw.is_na() {
        return DOUBLE_NA;
    }

    let degrees = (raw / 100.0).floor();
    let decimal = degrees + (raw - degrees * 100.0) / 60.0;

    match first_char(hemisphere) {
        Some('S') | Some('W') => -decimal,
        _ => decimal,
    }
}

fn two_digits(i: &str) -> IResult<&str, u8> {
    map_parser(take(2u8), all_consuming(dec_u8)).parse(i)
}

fn hhmmss(i: &str) -> IResult<&str, f64> {
    let (i, hours) = two_digits(i)?;
    let (i, minutes) = two_digits(i)?;
    let (i, seconds) = nom_double(i)?;

    Ok((
        i,
        f64::from(hours) * 3600.0 + f64::from(minutes) * 60.0 + seconds,
    ))
}

/// Reads an `hhmmss[.ss]` time field into seconds since midnight.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::{na::NotAvailable, parse::time_of_day};
///
/// assert!((time_of_day("160012.71") - 57612.71).abs() < 1e-6);
/// assert!(time_of_day("").is_na());
/// ```
pub fn time_of_day(field: &str) -> f64 {
    leading(hhmmss, field).unwrap_or(DOUBLE_NA)
}

fn ddmmyy(i: &str) -> IResult<&str, (u8, u8, u8)> {
    all_consuming((two_digits, two_digits, two_digits)).parse(i)
}

/// Reads a `ddmmyy` date field. Two-digit years are taken as 20yy.
pub fn date(field: &str) -> Option<Date> {
    let (_, (day, month, year)) = ddmmyy(field).ok()?;
    let month = Month::try_from(month).ok()?;

    Date::from_calendar_date(2000 + i32::from(year), month, day).ok()
}
