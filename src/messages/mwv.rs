#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode, Status, WindReference};
use crate::{
    DecodeError, NumberFormat, Sentence, SentenceError,
    parse::scaled_double,
    units::{DEG_TO_RAD, KMH_TO_MS, KNOTS_TO_MS, RAD_TO_DEG},
};

/// MWV - Wind Speed and Angle
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_mwv_wind_speed_and_angle>
///
/// ```text
///         1   2 3   4 5
///         |   | |   | |
///  $--MWV,x.x,a,x.x,a,A*hh<CR><LF>
/// ```
///
/// Speed units are `K` (km/h), `N` (knots) and `M` (m/s). An empty unit is
/// taken as m/s. Any reference other than `T` is apparent wind.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MWV {
    /// Wind angle relative to the bow, 0 to 2π radians
    pub wind_angle: f64,
    /// Reference of the wind angle
    pub reference: WindReference,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Data status
    pub status: Option<Status>,
}

impl Decode for MWV {
    const TYPE_CODE: &'static str = "MWV";
    const MIN_FIELDS: usize = 4;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        let factor = match sentence.field_char(3) {
            Some('K') => KMH_TO_MS,
            Some('N') => KNOTS_TO_MS,
            Some('M') | None => 1.0,
            Some(unit) => return Err(DecodeError::UnknownUnit { field: 3, unit }),
        };

        let reference = match WindReference::from_field(sentence.field(1)) {
            Some(WindReference::True) => WindReference::True,
            _ => WindReference::Apparent,
        };

        Ok(MWV {
            wind_angle: scaled_double(sentence.field(0), DEG_TO_RAD),
            reference,
            wind_speed: scaled_double(sentence.field(2), factor),
            status: Status::from_field(sentence.field(4)),
        })
    }
}

impl Encode for MWV {
    /// Writes the speed in m/s with status `A`.
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        sentence.add_double_field(self.wind_angle, RAD_TO_DEG, NumberFormat::DEFAULT, None)?;
        sentence.add_char_field(self.reference.as_char())?;
        sentence.add_double_field(self.wind_speed, 1.0, NumberFormat::DEFAULT, Some("M"))?;
        sentence.add_char_field(Status::Valid.as_char())?;
        Ok(sentence)
    }
}
