#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode, Status};
use crate::{
    DecodeError, NumberFormat, Sentence, SentenceError,
    na::NotAvailable,
    parse::scaled_double,
    units::{DEG_TO_RAD, RAD_TO_DEG},
};

/// RSA - Rudder Sensor Angle
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rsa_rudder_sensor_angle>
///
/// ```text
///         1   2 3   4
///         |   | |   |
///  $--RSA,x.x,A,x.x,A*hh<CR><LF>
/// ```
///
/// Negative angles turn the bow to port. A rudder whose status is not `A`
/// decodes as NA.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RSA {
    /// Starboard, or single, rudder angle in radians
    pub starboard: f64,
    /// Port rudder angle in radians
    pub port: f64,
}

fn rudder(sentence: &Sentence, index: usize) -> f64 {
    match Status::from_field(sentence.field(index + 1)) {
        Some(Status::Valid) => scaled_double(sentence.field(index), DEG_TO_RAD),
        _ => f64::NA,
    }
}

fn add_rudder(sentence: &mut Sentence, angle: f64) -> Result<(), SentenceError> {
    let status = if angle.is_na() { Status::Invalid } else { Status::Valid };
    sentence.add_double_field(angle, RAD_TO_DEG, NumberFormat::DEFAULT, None)?;
    sentence.add_char_field(status.as_char())
}

impl Decode for RSA {
    const TYPE_CODE: &'static str = "RSA";
    const MIN_FIELDS: usize = 2;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        Ok(RSA {
            starboard: rudder(sentence, 0),
            port: rudder(sentence, 2),
        })
    }
}

impl Encode for RSA {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        add_rudder(&mut sentence, self.starboard)?;
        add_rudder(&mut sentence, self.port)?;
        Ok(sentence)
    }
}
