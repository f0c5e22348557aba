#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode, expect_unit};
use crate::{
    DecodeError, NumberFormat, Sentence, SentenceError,
    parse::scaled_double,
    units::{DEG_TO_RAD, RAD_TO_DEG},
};

macro_rules! heading_sentence {
    ($(#[$meta:meta])* $name:ident, $code:literal, $reference:literal) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            /// Heading in radians
            pub heading: f64,
        }

        impl Decode for $name {
            const TYPE_CODE: &'static str = $code;
            const MIN_FIELDS: usize = 2;

            fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
                expect_unit(sentence, 1, $reference)?;

                Ok($name {
                    heading: scaled_double(sentence.field(0), DEG_TO_RAD),
                })
            }
        }

        impl Encode for $name {
            fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
                let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
                sentence.add_double_field(self.heading, RAD_TO_DEG, NumberFormat::DEFAULT, None)?;
                sentence.add_char_field($reference)?;
                Ok(sentence)
            }
        }
    };
}

heading_sentence!(
    /// HDT - Heading - True
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_hdt_heading_true>
    ///
    /// ```text
    ///         1   2
    ///         |   |
    ///  $--HDT,x.x,T*hh<CR><LF>
    /// ```
    HDT,
    "HDT",
    'T'
);

heading_sentence!(
    /// HDM - Heading - Magnetic
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_hdm_heading_magnetic>
    ///
    /// ```text
    ///         1   2
    ///         |   |
    ///  $--HDM,x.x,M*hh<CR><LF>
    /// ```
    HDM,
    "HDM",
    'M'
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_round_trip() {
        let hdt = HDT::decode(&Sentence::parse("$HCHDT,274.1,T*29").unwrap()).unwrap().unwrap();
        assert!((hdt.heading - 274.1 * DEG_TO_RAD).abs() < 1e-12);
        assert_eq!(hdt.encode("HC").unwrap().to_string(), "$HCHDT,274.1,T*29");

        let hdm = HDM::decode(&Sentence::parse("$HCHDM,270.5,M*29").unwrap()).unwrap().unwrap();
        assert!((hdm.heading - 270.5 * DEG_TO_RAD).abs() < 1e-12);
        assert_eq!(hdm.encode("HC").unwrap().to_string(), "$HCHDM,270.5,M*29");
    }

    #[test]
    fn test_heading_reference_mismatch() {
        let mut raw = "$HCHDT,274.1,M".to_string();
        crate::checksum::append_checksum(&mut raw);

        assert_eq!(
            HDT::decode(&Sentence::parse(&raw).unwrap()),
            Err(DecodeError::UnknownUnit { field: 1, unit: 'M' })
        );
    }
}
