#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode, add_enum_field};
use crate::{
    DecodeError, NumberFormat, Sentence, SentenceError,
    na::NotAvailable,
    parse::{double, first_char},
    units::{DEG_TO_RAD, RAD_TO_DEG},
};

/// Transducer quadruples one sentence can carry.
pub const MAX_TRANSDUCERS: usize = 5;

/// Longest transducer name kept; longer names are truncated.
pub const MAX_TRANSDUCER_NAME_LEN: usize = 16;

pub type TransducerName = heapless::String<MAX_TRANSDUCER_NAME_LEN>;

const ANGULAR: char = 'A';
const DEGREES: char = 'D';

/// One `type,value,unit,name` quadruple.
///
/// `value` is kept in the unit given on the wire.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Transducer {
    pub kind: Option<char>,
    pub value: f64,
    pub unit: Option<char>,
    pub name: TransducerName,
}

impl Transducer {
    fn angle(name: &str, radians: f64) -> Self {
        Transducer {
            kind: Some(ANGULAR),
            value: if radians.is_na() { radians } else { radians * RAD_TO_DEG },
            unit: Some(DEGREES),
            name: transducer_name(name),
        }
    }

    /// The value in radians if this is an angular transducer named `name`.
    fn angle_of(&self, name: &str) -> Option<f64> {
        let matches = self.kind == Some(ANGULAR)
            && matches!(self.unit, None | Some(DEGREES))
            && self.name.eq_ignore_ascii_case(name);

        matches.then(|| {
            if self.value.is_na() {
                self.value
            } else {
                self.value * DEG_TO_RAD
            }
        })
    }
}

fn transducer_name(field: &str) -> TransducerName {
    let mut name = TransducerName::new();
    for c in field.chars() {
        if name.push(c).is_err() {
            break;
        }
    }
    name
}

/// XDR - Transducer Measurement
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_xdr_transducer_measurement>
///
/// ```text
///         1 2   3 4            n
///         | |   | |            |
///  $--XDR,a,x.x,a,c--c, ..... *hh<CR><LF>
/// ```
///
/// Field 1 is the transducer type, 2 the measurement, 3 its unit and 4 the
/// transducer name; the quadruple repeats. A trailing partial quadruple is ignored.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XDR {
    pub transducers: heapless::Vec<Transducer, MAX_TRANSDUCERS>,
}

impl XDR {
    /// Picks the `PITCH`, `ROLL` and `YAW` angles out of the transducer list.
    ///
    /// Missing angles are NA. Other transducers are ignored.
    pub fn attitude(&self) -> Attitude {
        let find = |name: &str| {
            self.transducers
                .iter()
                .find_map(|transducer| transducer.angle_of(name))
                .unwrap_or(f64::NA)
        };

        Attitude {
            pitch: find("PITCH"),
            roll: find("ROLL"),
            yaw: find("YAW"),
        }
    }
}

impl Decode for XDR {
    const TYPE_CODE: &'static str = "XDR";
    const MIN_FIELDS: usize = 4;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        let mut transducers = heapless::Vec::new();
        for group in 0..sentence.field_count() / 4 {
            let base = group * 4;
            let transducer = Transducer {
                kind: first_char(sentence.field(base)),
                value: double(sentence.field(base + 1)),
                unit: first_char(sentence.field(base + 2)),
                name: transducer_name(sentence.field(base + 3)),
            };
            if transducers.push(transducer).is_err() {
                break;
            }
        }

        Ok(XDR { transducers })
    }
}

impl Encode for XDR {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        for transducer in &self.transducers {
            add_enum_field(&mut sentence, transducer.kind)?;
            sentence.add_double_field(transducer.value, 1.0, NumberFormat::DEFAULT, None)?;
            add_enum_field(&mut sentence, transducer.unit)?;
            sentence.add_str_field(&transducer.name)?;
        }
        Ok(sentence)
    }
}

/// Vessel attitude in radians, as carried by angular XDR transducers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attitude {
    /// Bow up positive
    pub pitch: f64,
    /// Starboard down positive
    pub roll: f64,
    pub yaw: f64,
}

impl From<Attitude> for XDR {
    /// Writes one `A,value,D,name` quadruple per available angle.
    fn from(attitude: Attitude) -> Self {
        let angles = [("PITCH", attitude.pitch), ("ROLL", attitude.roll), ("YAW", attitude.yaw)];

        let mut transducers = heapless::Vec::new();
        for (name, radians) in angles {
            if !radians.is_na() {
                // three angles always fit
                let _ = transducers.push(Transducer::angle(name, radians));
            }
        }
        XDR { transducers }
    }
}
