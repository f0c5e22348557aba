#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode, FixMode, SelectionMode, add_enum_field, add_padded};
use crate::{DecodeError, NumberFormat, Sentence, SentenceError, na::NotAvailable};

/// Satellite slots in a GSA sentence.
pub const GSA_SLOTS: usize = 12;

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                         14 15  16  17
///         | | |                         |  |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GSA {
    /// Selection mode
    pub selection_mode: Option<SelectionMode>,
    /// Fix mode
    pub fix_mode: Option<FixMode>,
    /// PRNs of the satellites used for the fix, NA for unused slots
    pub prns: [u8; GSA_SLOTS],
    /// Position dilution of precision
    pub pdop: f64,
    /// Horizontal dilution of precision
    pub hdop: f64,
    /// Vertical dilution of precision
    pub vdop: f64,
}

impl GSA {
    /// PRNs of the used slots.
    pub fn used_prns(&self) -> impl Iterator<Item = u8> + '_ {
        self.prns.iter().copied().filter(|prn| !prn.is_na())
    }
}

impl Decode for GSA {
    const TYPE_CODE: &'static str = "GSA";
    const MIN_FIELDS: usize = 17;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        Ok(GSA {
            selection_mode: SelectionMode::from_field(sentence.field(0)),
            fix_mode: FixMode::from_field(sentence.field(1)),
            prns: std::array::from_fn(|slot| sentence.get(2 + slot)),
            pdop: sentence.get(14),
            hdop: sentence.get(15),
            vdop: sentence.get(16),
        })
    }
}

impl Encode for GSA {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        add_enum_field(&mut sentence, self.selection_mode.map(SelectionMode::as_char))?;
        add_enum_field(&mut sentence, self.fix_mode.map(FixMode::as_char))?;
        for prn in self.prns {
            add_padded(&mut sentence, prn, 2)?;
        }
        for dop in [self.pdop, self.hdop, self.vdop] {
            sentence.add_double_field(dop, 1.0, NumberFormat::DEFAULT, None)?;
        }
        Ok(sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gsa_fixture() {
        let raw = "$GPGSA,A,3,23,31,22,16,03,07,,,,,,,1.8,1.1,1.4*3E";
        let gsa = GSA::decode(&Sentence::parse(raw).unwrap()).unwrap().unwrap();

        assert_eq!(gsa.selection_mode, Some(SelectionMode::Automatic));
        assert_eq!(gsa.fix_mode, Some(FixMode::Fix3D));
        assert_eq!(gsa.used_prns().collect::<Vec<_>>(), [23, 31, 22, 16, 3, 7]);
        assert!(gsa.prns[6].is_na());
        assert_eq!((gsa.pdop, gsa.hdop, gsa.vdop), (1.8, 1.1, 1.4));

        assert_eq!(gsa.encode("GP").unwrap().serialize().unwrap(), raw);
    }

    #[test]
    fn test_gsa_too_few_fields() {
        let mut raw = "$GPGSA,A,3,23,31,22,16,03,07,,,,,,,1.8,1.1".to_string();
        crate::checksum::append_checksum(&mut raw);

        assert_eq!(
            GSA::decode(&Sentence::parse(&raw).unwrap()),
            Err(DecodeError::TooFewFields {
                type_code: "GSA",
                expected: 17,
                found: 16
            })
        );
    }
}
