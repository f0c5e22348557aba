#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use super::{Decode, Encode, add_padded};
use crate::{
    DecodeError, Sentence, SentenceError,
    datetime::{seconds_from_time, time_from_seconds},
    na::NotAvailable,
    parse::time_of_day,
};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
///
/// Integer fields hold their NA sentinel when empty.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZDA {
    /// UTC time of day in seconds since midnight
    pub time: f64,
    /// Day of month, 1 to 31
    pub day: u8,
    /// Month, 1 to 12
    pub month: u8,
    /// Four digit year
    pub year: u16,
    /// Local zone hours, -13 to 13
    pub local_zone_hours: i8,
    /// Local zone minutes, carries the sign of the hours
    pub local_zone_minutes: i8,
}

impl ZDA {
    /// Local zone description, offset from UTC.
    ///
    /// A negative hour field makes the whole offset negative, so `-1,30` is
    /// one and a half hours behind UTC.
    pub fn utc_offset(&self) -> Option<UtcOffset> {
        let hours = self.local_zone_hours.to_option()?;
        let minutes = self.local_zone_minutes.to_option().unwrap_or(0);
        let minutes = if hours < 0 { -minutes.abs() } else { minutes };

        UtcOffset::from_hms(hours, minutes, 0).ok()
    }

    /// UTC date of the fix.
    pub fn date(&self) -> Option<Date> {
        let month = Month::try_from(self.month.to_option()?).ok()?;
        Date::from_calendar_date(i32::from(self.year.to_option()?), month, self.day.to_option()?).ok()
    }

    /// The fix instant, expressed in the local zone when one is given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_codec::{Sentence, messages::{Decode, ZDA}};
    ///
    /// let sentence = Sentence::parse("$GPZDA,160012.71,11,03,2004,-1,00*7D").unwrap();
    /// let zda = ZDA::decode(&sentence).unwrap().unwrap();
    ///
    /// let local = zda.to_offset_date_time().unwrap();
    /// assert_eq!(local.hour(), 15);
    /// assert_eq!(local.offset().whole_hours(), -1);
    /// ```
    pub fn to_offset_date_time(&self) -> Option<OffsetDateTime> {
        let utc = PrimitiveDateTime::new(self.date()?, time_from_seconds(self.time)?).assume_utc();

        Some(match self.utc_offset() {
            Some(offset) => utc.to_offset(offset),
            None => utc,
        })
    }
}

impl From<OffsetDateTime> for ZDA {
    fn from(value: OffsetDateTime) -> Self {
        let offset = value.offset();
        let utc = value.to_offset(UtcOffset::UTC);

        ZDA {
            time: seconds_from_time(utc.time()),
            day: utc.day(),
            month: u8::from(utc.month()),
            year: u16::try_from(utc.year()).unwrap_or(u16::NA),
            local_zone_hours: offset.whole_hours(),
            local_zone_minutes: offset.minutes_past_hour(),
        }
    }
}

impl Decode for ZDA {
    const TYPE_CODE: &'static str = "ZDA";
    const MIN_FIELDS: usize = 6;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        Ok(ZDA {
            time: time_of_day(sentence.field(0)),
            day: sentence.get(1),
            month: sentence.get(2),
            year: sentence.get(3),
            local_zone_hours: sentence.get(4),
            local_zone_minutes: sentence.get(5),
        })
    }
}

impl Encode for ZDA {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        sentence.add_time_field(self.time)?;
        add_padded(&mut sentence, self.day, 2)?;
        add_padded(&mut sentence, self.month, 2)?;
        add_padded(&mut sentence, self.year, 4)?;
        add_padded(&mut sentence, self.local_zone_hours, 2)?;
        add_padded(&mut sentence, self.local_zone_minutes, 2)?;
        Ok(sentence)
    }
}
