#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode};
use crate::{
    DecodeError, NumberFormat, Sentence, SentenceError,
    na::NotAvailable,
    parse::scaled_double,
    units::{DEG_TO_RAD, KMH_TO_MS, KNOTS_TO_MS, MS_TO_KMH, MS_TO_KNOTS, RAD_TO_DEG},
};

/// VHW - Water speed and heading
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vhw_water_speed_and_heading>
///
/// ```text
///         1   2 3   4 5   6 7   8
///         |   | |   | |   | |   |
///  $--VHW,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VHW {
    /// Heading relative to true north in radians
    pub heading_true: f64,
    /// Heading relative to magnetic north in radians
    pub heading_magnetic: f64,
    /// Speed through water in m/s
    pub speed_through_water: f64,
}

impl Decode for VHW {
    const TYPE_CODE: &'static str = "VHW";
    const MIN_FIELDS: usize = 8;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        let kmh = scaled_double(sentence.field(6), KMH_TO_MS);

        Ok(VHW {
            heading_true: scaled_double(sentence.field(0), DEG_TO_RAD),
            heading_magnetic: scaled_double(sentence.field(2), DEG_TO_RAD),
            speed_through_water: if kmh.is_na() {
                scaled_double(sentence.field(4), KNOTS_TO_MS)
            } else {
                kmh
            },
        })
    }
}

impl Encode for VHW {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let format = NumberFormat::DEFAULT;

        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        sentence.add_double_field(self.heading_true, RAD_TO_DEG, format, Some("T"))?;
        sentence.add_double_field(self.heading_magnetic, RAD_TO_DEG, format, Some("M"))?;
        sentence.add_double_field(self.speed_through_water, MS_TO_KNOTS, format, Some("N"))?;
        sentence.add_double_field(self.speed_through_water, MS_TO_KMH, format, Some("K"))?;
        Ok(sentence)
    }
}
