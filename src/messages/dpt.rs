#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode};
use crate::{DecodeError, NumberFormat, Sentence, SentenceError, na::NotAvailable};

/// DPT - Depth of Water
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dpt_depth_of_water>
///
/// ```text
///         1   2
///         |   |
///  $--DPT,x.x,x.x*hh<CR><LF>
/// ```
///
/// NMEA 3.0:
/// ```text
///        1   2   3
///        |   |   |
/// $--DPT,x.x,x.x,x.x*hh<CR><LF>
/// ```
///
/// The range field is written only when it is available, so both layouts
/// round-trip unchanged.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DPT {
    /// Water depth relative to transducer in meters
    pub depth_below_transducer: f64,
    /// Offset from transducer in meters,
    /// positive means distance from transducer to water line,
    /// negative means distance from transducer to keel
    pub offset: f64,
    /// Maximum range scale in use for the measurement in meters
    pub range: f64,
}

impl Decode for DPT {
    const TYPE_CODE: &'static str = "DPT";
    const MIN_FIELDS: usize = 2;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        Ok(DPT {
            depth_below_transducer: sentence.get(0),
            offset: sentence.get(1),
            range: sentence.get(2),
        })
    }
}

impl Encode for DPT {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        sentence.add_double_field(self.depth_below_transducer, 1.0, NumberFormat::DEFAULT, None)?;
        sentence.add_double_field(self.offset, 1.0, NumberFormat::DEFAULT, None)?;
        if !self.range.is_na() {
            sentence.add_double_field(self.range, 1.0, NumberFormat::new(0), None)?;
        }
        Ok(sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpt_fixtures() {
        let cases = [
            ("$IIDPT,10.5,0.9*7D", 10.5, 0.9, f64::NA),
            ("$IIDPT,10.5,0.9,100*60", 10.5, 0.9, 100.0),
        ];

        for (raw, depth, offset, range) in cases {
            let dpt = DPT::decode(&Sentence::parse(raw).unwrap()).unwrap().unwrap();
            assert_eq!(
                dpt,
                DPT {
                    depth_below_transducer: depth,
                    offset,
                    range
                },
                "{raw}"
            );

            assert_eq!(dpt.encode("II").unwrap().serialize().unwrap(), raw);
        }
    }

    #[test]
    fn test_dpt_large_negative_depth_survives() {
        let raw = "$IIDPT,-2000000000.0,0.9*56";
        let dpt = DPT::decode(&Sentence::parse(raw).unwrap()).unwrap().unwrap();
        assert_eq!(dpt.depth_below_transducer, -2e9);
        assert!(!dpt.depth_below_transducer.is_na());

        assert_eq!(dpt.encode("II").unwrap().to_string(), raw);
    }

    #[test]
    fn test_dpt_empty_fields() {
        let dpt = DPT::decode(&Sentence::parse("$SDDPT,,*57").unwrap()).unwrap().unwrap();
        assert!(dpt.depth_below_transducer.is_na());
        assert!(dpt.offset.is_na());
        assert!(dpt.range.is_na());

        assert_eq!(dpt.encode("SD").unwrap().to_string(), "$SDDPT,,*57");
    }

    #[test]
    fn test_dpt_too_few_fields() {
        assert_eq!(
            DPT::decode(&Sentence::parse("$IIDPT,10.5*76").unwrap()),
            Err(DecodeError::TooFewFields {
                type_code: "DPT",
                expected: 2,
                found: 1
            })
        );
    }
}
