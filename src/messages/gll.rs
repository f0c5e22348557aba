#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode, FaaMode, Status};
use crate::{
    DecodeError, Sentence, SentenceError,
    na::NotAvailable,
    parse::{coordinate, time_of_day},
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
///
/// The mode field (7) is absent before NMEA 2.3.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GLL {
    /// Latitude in degrees, negative south
    pub latitude: f64,
    /// Longitude in degrees, negative west
    pub longitude: f64,
    /// Fix time in UTC, seconds since midnight
    pub time: f64,
    /// Status, derived from the other fields on encode when `None`
    pub status: Option<Status>,
    /// FAA mode indicator
    pub mode: Option<FaaMode>,
}

impl GLL {
    /// `Valid` when position and time are all available.
    pub fn derived_status(&self) -> Status {
        if self.latitude.is_na() || self.longitude.is_na() || self.time.is_na() {
            Status::Invalid
        } else {
            Status::Valid
        }
    }
}

impl Decode for GLL {
    const TYPE_CODE: &'static str = "GLL";
    const MIN_FIELDS: usize = 6;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        Ok(GLL {
            latitude: coordinate(sentence.field(0), sentence.field(1)),
            longitude: coordinate(sentence.field(2), sentence.field(3)),
            time: time_of_day(sentence.field(4)),
            status: Status::from_field(sentence.field(5)),
            mode: FaaMode::from_field(sentence.field(6)),
        })
    }
}

impl Encode for GLL {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        sentence.add_latitude_field(self.latitude)?;
        sentence.add_longitude_field(self.longitude)?;
        sentence.add_time_field(self.time)?;
        sentence.add_char_field(self.status.unwrap_or_else(|| self.derived_status()).as_char())?;
        if let Some(mode) = self.mode {
            sentence.add_char_field(mode.as_char())?;
        }
        Ok(sentence)
    }
}
