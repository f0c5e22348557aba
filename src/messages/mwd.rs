#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode};
use crate::{
    DecodeError, NumberFormat, Sentence, SentenceError,
    na::NotAvailable,
    parse::scaled_double,
    units::{DEG_TO_RAD, KNOTS_TO_MS, MS_TO_KNOTS, RAD_TO_DEG},
};

/// MWD - Wind Direction & Speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_mwd_wind_direction_speed>
///
/// ```text
///         1   2 3   4 5   6 7   8
///         |   | |   | |   | |   |
///  $--MWD,x.x,T,x.x,M,x.x,N,x.x,M*hh<CR><LF>
/// ```
///
/// Direction is where the wind blows from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MWD {
    /// Wind direction relative to true north in radians
    pub direction_true: f64,
    /// Wind direction relative to magnetic north in radians
    pub direction_magnetic: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
}

impl Decode for MWD {
    const TYPE_CODE: &'static str = "MWD";
    const MIN_FIELDS: usize = 8;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        let ms = sentence.get::<f64>(6);

        Ok(MWD {
            direction_true: scaled_double(sentence.field(0), DEG_TO_RAD),
            direction_magnetic: scaled_double(sentence.field(2), DEG_TO_RAD),
            wind_speed: if ms.is_na() {
                scaled_double(sentence.field(4), KNOTS_TO_MS)
            } else {
                ms
            },
        })
    }
}

impl Encode for MWD {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let format = NumberFormat::DEFAULT;

        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        sentence.add_double_field(self.direction_true, RAD_TO_DEG, format, Some("T"))?;
        sentence.add_double_field(self.direction_magnetic, RAD_TO_DEG, format, Some("M"))?;
        sentence.add_double_field(self.wind_speed, MS_TO_KNOTS, format, Some("N"))?;
        sentence.add_double_field(self.wind_speed, 1.0, format, Some("M"))?;
        Ok(sentence)
    }
}
