#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode, add_directional};
use crate::{
    DecodeError, NumberFormat, Sentence, SentenceError,
    parse::{scaled_double, signed},
    units::{DEG_TO_RAD, RAD_TO_DEG},
};

/// HDG - Heading - Deviation & Variation
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_hdg_heading_deviation_variation>
///
/// ```text
///         1   2   3 4   5
///         |   |   | |   |
///  $--HDG,x.x,x.x,a,x.x,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HDG {
    /// Magnetic sensor heading in radians
    pub heading: f64,
    /// Magnetic deviation in radians, negative west
    pub deviation: f64,
    /// Magnetic variation in radians, negative west
    pub variation: f64,
}

fn directional(sentence: &Sentence, index: usize) -> f64 {
    signed(
        scaled_double(sentence.field(index), DEG_TO_RAD),
        sentence.field(index + 1),
        'W',
    )
}

impl Decode for HDG {
    const TYPE_CODE: &'static str = "HDG";
    const MIN_FIELDS: usize = 5;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        Ok(HDG {
            heading: scaled_double(sentence.field(0), DEG_TO_RAD),
            deviation: directional(sentence, 1),
            variation: directional(sentence, 3),
        })
    }
}

impl Encode for HDG {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        sentence.add_double_field(self.heading, RAD_TO_DEG, NumberFormat::DEFAULT, None)?;
        add_directional(&mut sentence, self.deviation, RAD_TO_DEG, NumberFormat::DEFAULT, ('E', 'W'))?;
        add_directional(&mut sentence, self.variation, RAD_TO_DEG, NumberFormat::DEFAULT, ('E', 'W'))?;
        Ok(sentence)
    }
}
