#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode, add_padded};
use crate::{
    DecodeError, NumberFormat, Sentence, SentenceError,
    parse::scaled_double,
    units::{DEG_TO_RAD, RAD_TO_DEG},
};

/// Satellites reported by one GSV sentence.
pub const SATELLITES_PER_GSV: usize = 4;

/// One satellite of a GSV sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Satellite {
    /// Satellite PRN number
    pub prn: u16,
    /// Elevation in radians
    pub elevation: f64,
    /// Azimuth from true north in radians
    pub azimuth: f64,
    /// Signal to noise ratio in dB
    pub snr: f64,
}

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// Fields 4 to 7 repeat for up to four satellites. Merging the sentences of a
/// multi-sentence report is left to the caller.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSV {
    /// Total number of GSV sentences in this report
    pub total_messages: u8,
    /// Number of this sentence, starting at 1
    pub message_number: u8,
    /// Total number of satellites in view
    pub satellites_in_view: u16,
    /// Satellites carried by this sentence
    pub satellites: heapless::Vec<Satellite, SATELLITES_PER_GSV>,
}

impl Decode for GSV {
    const TYPE_CODE: &'static str = "GSV";
    const MIN_FIELDS: usize = 3;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        let mut satellites = heapless::Vec::new();
        for start in (3..sentence.field_count()).step_by(4) {
            let satellite = Satellite {
                prn: sentence.get(start),
                elevation: scaled_double(sentence.field(start + 1), DEG_TO_RAD),
                azimuth: scaled_double(sentence.field(start + 2), DEG_TO_RAD),
                snr: sentence.get(start + 3),
            };
            if satellites.push(satellite).is_err() {
                break;
            }
        }

        Ok(GSV {
            total_messages: sentence.get(0),
            message_number: sentence.get(1),
            satellites_in_view: sentence.get(2),
            satellites,
        })
    }
}

impl Encode for GSV {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        add_padded(&mut sentence, self.total_messages, 1)?;
        add_padded(&mut sentence, self.message_number, 1)?;
        add_padded(&mut sentence, self.satellites_in_view, 2)?;
        for satellite in &self.satellites {
            add_padded(&mut sentence, satellite.prn, 2)?;
            sentence.add_double_field(satellite.elevation, RAD_TO_DEG, NumberFormat::zero_padded(2, 0), None)?;
            sentence.add_double_field(satellite.azimuth, RAD_TO_DEG, NumberFormat::zero_padded(3, 0), None)?;
            sentence.add_double_field(satellite.snr, 1.0, NumberFormat::zero_padded(2, 0), None)?;
        }
        Ok(sentence)
    }
}
