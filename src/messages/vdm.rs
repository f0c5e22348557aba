//! AIS encapsulation sentences.
//!
//! The payload is carried in 6-bit ASCII armor; [`dearmor_payload`] and
//! [`armor_payload`] convert between the armored text and the raw bit string.
//! Decoding the AIS messages themselves is left to the caller.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode, add_enum_field, add_padded};
use crate::{DecodeError, Prefix, Sentence, SentenceError, na::NotAvailable};

/// Longest armored payload that fits into one sentence.
pub const MAX_PAYLOAD_LEN: usize = 64;

/// Armored payload text.
pub type Payload = heapless::String<MAX_PAYLOAD_LEN>;

const PAYLOAD_FIELD: usize = 4;
const AIS_SENDER: &str = "AI";

fn six_bit_value(c: char) -> Option<u8> {
    match c {
        '0'..='W' | '`'..='w' => {
            let value = c as u8 - 48;
            Some(if value > 40 { value - 8 } else { value })
        }
        _ => None,
    }
}

/// Converts an armored payload into its bit string, most significant bit first.
///
/// The last `fill_bits` bits are padding and are dropped.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::messages::dearmor_payload;
///
/// let bits = dearmor_payload("1P", 0).unwrap();
/// assert_eq!(bits.len(), 12);
/// assert_eq!(&bits[..6], &[false, false, false, false, false, true]);
/// assert!(dearmor_payload("1,", 0).is_err());
/// ```
pub fn dearmor_payload(payload: &str, fill_bits: u8) -> Result<Vec<bool>, DecodeError> {
    let mut bits = Vec::with_capacity(payload.len() * 6);
    for c in payload.chars() {
        let value = six_bit_value(c).ok_or(DecodeError::InvalidField { field: PAYLOAD_FIELD })?;
        bits.extend((0..6).rev().map(|shift| (value >> shift) & 1 == 1));
    }

    let fill_bits = if fill_bits.is_na() { 0 } else { usize::from(fill_bits) };
    bits.truncate(bits.len().saturating_sub(fill_bits));
    Ok(bits)
}

/// Armors a bit string, padding the last character with zero bits.
///
/// Returns the armored text and the number of fill bits.
pub fn armor_payload(bits: &[bool]) -> (String, u8) {
    let mut payload = String::with_capacity(bits.len().div_ceil(6));
    for chunk in bits.chunks(6) {
        let value = chunk
            .iter()
            .chain(std::iter::repeat(&false))
            .take(6)
            .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit));
        let value = if value > 39 { value + 8 } else { value };
        payload.push(char::from(value + 48));
    }

    let fill_bits = (6 - bits.len() % 6) % 6;
    (payload, fill_bits as u8)
}

macro_rules! ais_sentence {
    ($(#[$meta:meta])* $name:ident, $code:literal) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            /// Number of sentences carrying this AIS message
            pub total_fragments: u8,
            /// Number of this sentence, starting at 1
            pub fragment_number: u8,
            /// Sequential message ID linking the fragments, NA for single sentences
            pub sequential_id: u8,
            /// Radio channel, `A` or `B`
            pub channel: Option<char>,
            /// Armored payload
            pub payload: Payload,
            /// Padding bits at the end of the payload
            pub fill_bits: u8,
        }

        impl $name {
            /// The de-armored payload bits.
            pub fn payload_bits(&self) -> Result<Vec<bool>, DecodeError> {
                dearmor_payload(&self.payload, self.fill_bits)
            }
        }

        impl Decode for $name {
            const TYPE_CODE: &'static str = $code;
            const MIN_FIELDS: usize = 6;

            fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
                let mut payload = Payload::new();
                payload
                    .push_str(sentence.field(PAYLOAD_FIELD))
                    .map_err(|_| DecodeError::InvalidField { field: PAYLOAD_FIELD })?;

                Ok($name {
                    total_fragments: sentence.get(0),
                    fragment_number: sentence.get(1),
                    sequential_id: sentence.get(2),
                    channel: sentence.field_char(3).map(|channel| match channel {
                        '1' => 'A',
                        '2' => 'B',
                        other => other,
                    }),
                    payload,
                    fill_bits: sentence.get(5),
                })
            }
        }

        impl Encode for $name {
            /// Builds a `!` sentence. An empty sender means `AI`.
            fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
                let sender = if sender.is_empty() { AIS_SENDER } else { sender };

                let mut sentence = Sentence::with_prefix(Self::TYPE_CODE, sender, Prefix::Encapsulated)?;
                add_padded(&mut sentence, self.total_fragments, 1)?;
                add_padded(&mut sentence, self.fragment_number, 1)?;
                add_padded(&mut sentence, self.sequential_id, 1)?;
                add_enum_field(&mut sentence, self.channel)?;
                sentence.add_str_field(&self.payload)?;
                add_padded(&mut sentence, self.fill_bits, 1)?;
                Ok(sentence)
            }
        }
    };
}

ais_sentence!(
    /// VDM - AIS VHF Data-Link Message
    ///
    /// <https://gpsd.gitlab.io/gpsd/AIVDM.html>
    ///
    /// ```text
    ///         1 2 3 4 5    6
    ///         | | | | |    |
    ///  !--VDM,x,x,x,a,s--s,x*hh<CR><LF>
    /// ```
    VDM,
    "VDM"
);

ais_sentence!(
    /// VDO - AIS VHF Data-Link Own-Vessel Report
    ///
    /// <https://gpsd.gitlab.io/gpsd/AIVDM.html>
    ///
    /// ```text
    ///         1 2 3 4 5    6
    ///         | | | | |    |
    ///  !--VDO,x,x,x,a,s--s,x*hh<CR><LF>
    /// ```
    VDO,
    "VDO"
);

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C";

    fn bits_to_u32(bits: &[bool]) -> u32 {
        bits.iter().fold(0, |acc, &bit| (acc << 1) | u32::from(bit))
    }

    #[test]
    fn test_vdm_fixture() {
        let vdm = VDM::decode(&Sentence::parse(FIXTURE).unwrap()).unwrap().unwrap();

        assert_eq!(vdm.total_fragments, 1);
        assert_eq!(vdm.fragment_number, 1);
        assert!(vdm.sequential_id.is_na());
        assert_eq!(vdm.channel, Some('B'));
        assert_eq!(vdm.payload.as_str(), "177KQJ5000G?tO`K>RA1wUbN0TKH");
        assert_eq!(vdm.fill_bits, 0);

        let bits = vdm.payload_bits().unwrap();
        assert_eq!(bits.len(), 168);
        // message type, then MMSI after the 2-bit repeat indicator
        assert_eq!(bits_to_u32(&bits[0..6]), 1);
        assert_eq!(bits_to_u32(&bits[8..38]), 477_553_000);

        let sentence = vdm.encode("").unwrap();
        assert_eq!(sentence.prefix(), Prefix::Encapsulated);
        assert_eq!(sentence.serialize().unwrap(), FIXTURE);
    }

    #[test]
    fn test_channel_digits() {
        let vdm = VDM::decode(
            &Sentence::parse("!AIVDM,1,1,,2,177KQJ5000G?tO`K>RA1wUbN0TKH,0*2C").unwrap(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(vdm.channel, Some('B'));
    }

    #[test]
    fn test_vdo_and_fragments() {
        let vdo = VDO::decode(
            &Sentence::parse("!AIVDO,1,1,,A,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5D").unwrap(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(vdo.channel, Some('A'));

        let raw = "!AIVDM,2,1,3,B,55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp8,0*1D";
        let vdm = VDM::decode(&Sentence::parse(raw).unwrap()).unwrap().unwrap();
        assert_eq!((vdm.total_fragments, vdm.fragment_number, vdm.sequential_id), (2, 1, 3));
        assert_eq!(vdm.payload.len(), 60);
        assert_eq!(vdm.encode("AI").unwrap().serialize().unwrap(), raw);
    }

    #[test]
    fn test_armor_round_trip() {
        let cases = [("177KQJ5000G?tO`K>RA1wUbN0TKH", 0), ("w0", 0)];

        for (payload, fill_bits) in cases {
            let bits = dearmor_payload(payload, fill_bits).unwrap();
            assert_eq!(armor_payload(&bits), (payload.to_string(), fill_bits));
        }

        let bits = dearmor_payload("w0", 2).unwrap();
        assert_eq!(bits.len(), 10);
        assert_eq!(armor_payload(&bits), ("w0".to_string(), 2));
    }

    #[test]
    fn test_dearmor_rejects_invalid_characters() {
        for payload in ["X", "_", "x", " "] {
            assert_eq!(
                dearmor_payload(payload, 0),
                Err(DecodeError::InvalidField { field: PAYLOAD_FIELD }),
                "{payload}"
            );
        }
    }
}
