#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode, Status};
use crate::{
    DecodeError, NumberFormat, Sentence, SentenceError,
    na::NotAvailable,
    parse::scaled_double,
    units::{DEG_TO_RAD, RAD_TO_DEG},
};

/// Degrees per minute to radians per second.
const DEG_PER_MIN_TO_RAD_PER_S: f64 = DEG_TO_RAD / 60.0;

/// ROT - Rate Of Turn
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rot_rate_of_turn>
///
/// ```text
///         1   2
///         |   |
///  $--ROT,x.x,A*hh<CR><LF>
/// ```
///
/// Negative rates turn the bow to port. On the wire the rate is in degrees per minute.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ROT {
    /// Rate of turn in rad/s
    pub rate_of_turn: f64,
    /// Status, `Valid` for a usable rate when `None` on encode
    pub status: Option<Status>,
}

impl Decode for ROT {
    const TYPE_CODE: &'static str = "ROT";
    const MIN_FIELDS: usize = 1;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        Ok(ROT {
            rate_of_turn: scaled_double(sentence.field(0), DEG_PER_MIN_TO_RAD_PER_S),
            status: Status::from_field(sentence.field(1)),
        })
    }
}

impl Encode for ROT {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let status = self.status.unwrap_or(if self.rate_of_turn.is_na() {
            Status::Invalid
        } else {
            Status::Valid
        });

        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        sentence.add_double_field(self.rate_of_turn, RAD_TO_DEG * 60.0, NumberFormat::DEFAULT, None)?;
        sentence.add_char_field(status.as_char())?;
        Ok(sentence)
    }
}
