use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime, Time};

use super::{Decode, Encode, FaaMode, Status, add_directional, add_enum_field};
use crate::{
    DecodeError, NumberFormat, Sentence, SentenceError,
    datetime::{date_from_days, days_since_1970, time_from_seconds},
    na::NotAvailable,
    parse::{coordinate, date, scaled_double, signed, time_of_day},
    units::{DEG_TO_RAD, KNOTS_TO_MS, MS_TO_KNOTS, RAD_TO_DEG, wrap_two_pi},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///                                                            12
///         1         2 3       4 5        6  7   8   9    10 11|
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
///
/// The mode field (12) is absent before NMEA 2.3.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RMC {
    /// Fix time in UTC, seconds since midnight
    pub time: f64,
    /// Status
    pub status: Option<Status>,
    /// Latitude in degrees, negative south
    pub latitude: f64,
    /// Longitude in degrees, negative west
    pub longitude: f64,
    /// Speed over ground in m/s, negative when reversing
    pub speed_over_ground: f64,
    /// True course over ground in radians
    pub course_over_ground: f64,
    /// Fix date as days since 1970-01-01
    pub days_since_1970: u32,
    /// Magnetic variation in radians, negative west
    pub magnetic_variation: f64,
    /// FAA mode indicator
    pub mode: Option<FaaMode>,
}

impl RMC {
    /// Fix date and time. A missing date gives `default_date`, a missing time midnight.
    pub fn date_time(&self, default_date: Date) -> PrimitiveDateTime {
        let date = date_from_days(self.days_since_1970).unwrap_or(default_date);
        let time = time_from_seconds(self.time).unwrap_or(Time::MIDNIGHT);
        PrimitiveDateTime::new(date, time)
    }
}

/// Course and speed as written on the wire.
///
/// A negative speed is reported as the reciprocal course with positive speed,
/// and the course is wrapped into `[0, 2π)`.
pub(crate) fn reverse_gear(course: f64, speed: f64) -> (f64, f64) {
    let (course, speed) = if !speed.is_na() && speed < 0.0 {
        let course = if course.is_na() { course } else { course + PI };
        (course, -speed)
    } else {
        (course, speed)
    };

    let course = if course.is_na() { course } else { wrap_two_pi(course) };
    (course, speed)
}

impl Decode for RMC {
    const TYPE_CODE: &'static str = "RMC";
    const MIN_FIELDS: usize = 11;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        Ok(RMC {
            time: time_of_day(sentence.field(0)),
            status: Status::from_field(sentence.field(1)),
            latitude: coordinate(sentence.field(2), sentence.field(3)),
            longitude: coordinate(sentence.field(4), sentence.field(5)),
            speed_over_ground: scaled_double(sentence.field(6), KNOTS_TO_MS),
            course_over_ground: scaled_double(sentence.field(7), DEG_TO_RAD),
            days_since_1970: date(sentence.field(8)).map_or(u32::NA, days_since_1970),
            magnetic_variation: signed(
                scaled_double(sentence.field(9), DEG_TO_RAD),
                sentence.field(10),
                'W',
            ),
            mode: FaaMode::from_field(sentence.field(11)),
        })
    }
}

impl Encode for RMC {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let (course, speed) = reverse_gear(self.course_over_ground, self.speed_over_ground);

        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        sentence.add_time_field(self.time)?;
        add_enum_field(&mut sentence, self.status.map(Status::as_char))?;
        sentence.add_latitude_field(self.latitude)?;
        sentence.add_longitude_field(self.longitude)?;
        sentence.add_double_field(speed, MS_TO_KNOTS, NumberFormat::new(2), None)?;
        sentence.add_double_field(course, RAD_TO_DEG, NumberFormat::new(2), None)?;
        sentence.add_days_field(self.days_since_1970)?;
        add_directional(
            &mut sentence,
            self.magnetic_variation,
            RAD_TO_DEG,
            NumberFormat::DEFAULT,
            ('E', 'W'),
        )?;
        if let Some(mode) = self.mode {
            sentence.add_char_field(mode.as_char())?;
        }
        Ok(sentence)
    }
}

#[cfg(test)]
mod tests {
    use time::Month;

    use super::*;

    const FIXTURE: &str = "$GPRMC,092348.00,A,6035.04228,N,02115.15472,E,0.01,272.61,060815,7.2,E,D*34";

    #[test]
    fn test_rmc_fixture() {
        let rmc = RMC::decode(&Sentence::parse(FIXTURE).unwrap()).unwrap().unwrap();

        assert!((rmc.time - 33_828.0).abs() < 1e-6);
        assert_eq!(rmc.status, Some(Status::Valid));
        assert!((rmc.latitude - (60.0 + 35.04228 / 60.0)).abs() < 1e-9);
        assert!((rmc.longitude - (21.0 + 15.15472 / 60.0)).abs() < 1e-9);
        assert!((rmc.speed_over_ground - 0.01 * KNOTS_TO_MS).abs() < 1e-12);
        assert!((rmc.course_over_ground - 272.61 * DEG_TO_RAD).abs() < 1e-12);
        assert_eq!(rmc.days_since_1970, 16653);
        assert!((rmc.magnetic_variation - 7.2 * DEG_TO_RAD).abs() < 1e-12);
        assert_eq!(rmc.mode, Some(FaaMode::Differential));

        assert_eq!(
            rmc.encode("GP").unwrap().to_string(),
            "$GPRMC,092348.00,A,6035.042,N,02115.155,E,0.01,272.61,060815,7.2,E,D*3A"
        );
    }

    #[test]
    fn test_rmc_reverse_gear() {
        let rmc = RMC {
            time: 43_200.0,
            status: Some(Status::Valid),
            latitude: f64::NA,
            longitude: f64::NA,
            speed_over_ground: -1.0 * KNOTS_TO_MS,
            course_over_ground: 190.0 * DEG_TO_RAD,
            days_since_1970: u32::NA,
            magnetic_variation: -3.0 * DEG_TO_RAD,
            mode: None,
        };

        assert_eq!(
            rmc.encode("GP").unwrap().to_string(),
            "$GPRMC,120000.00,A,,,,,1.00,10.00,,3.0,W*41"
        );
    }

    #[test]
    fn test_reverse_gear_rules() {
        let cases = [
            ((PI, 1.0), (PI, 1.0)),
            ((0.5, -2.0), (0.5 + PI, 2.0)),
            ((-PI / 2.0, 1.0), (1.5 * PI, 1.0)),
            ((f64::NA, -2.0), (f64::NA, 2.0)),
        ];

        for ((course, speed), (expected_course, expected_speed)) in cases {
            let (c, s) = reverse_gear(course, speed);
            assert!((c - expected_course).abs() < 1e-12, "{course} {speed}");
            assert_eq!(s, expected_speed, "{course} {speed}");
        }
    }

    #[test]
    fn test_rmc_all_empty() {
        let sentence = Sentence::parse("$IIRMC,,,,,,,,,,,*70").unwrap();
        let rmc = RMC::decode(&sentence).unwrap().unwrap();

        assert!(rmc.time.is_na());
        assert!(rmc.days_since_1970.is_na());
        assert!(rmc.magnetic_variation.is_na());
        assert_eq!(rmc.encode("").unwrap(), sentence);
    }

    #[test]
    fn test_rmc_date_time_fallback() {
        let default_date = Date::from_calendar_date(2024, Month::January, 1).unwrap();
        let rmc = RMC::decode(&Sentence::parse(FIXTURE).unwrap()).unwrap().unwrap();

        let dt = rmc.date_time(default_date);
        assert_eq!(dt.date(), Date::from_calendar_date(2015, Month::August, 6).unwrap());
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (9, 23, 48));

        let undated = RMC {
            days_since_1970: u32::NA,
            ..rmc
        };
        assert_eq!(undated.date_time(default_date).date(), default_date);
    }
}
