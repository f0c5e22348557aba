#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode, WaypointId, waypoint_id};
use crate::{
    DecodeError, NumberFormat, Sentence, SentenceError,
    parse::scaled_double,
    units::{DEG_TO_RAD, RAD_TO_DEG},
};

/// BOD - Bearing - Waypoint to Waypoint
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_bod_bearing_waypoint_to_waypoint>
///
/// ```text
///         1   2 3   4 5    6
///         |   | |   | |    |
///  $--BOD,x.x,T,x.x,M,c--c,c--c*hh<CR><LF>
/// ```
///
/// The origin field is empty when navigating directly to the destination.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct BOD {
    /// True bearing from origin to destination in radians
    pub bearing_true: f64,
    /// Magnetic bearing from origin to destination in radians
    pub bearing_magnetic: f64,
    /// Destination waypoint ID
    pub destination_id: WaypointId,
    /// Origin waypoint ID
    pub origin_id: WaypointId,
}

impl Decode for BOD {
    const TYPE_CODE: &'static str = "BOD";
    const MIN_FIELDS: usize = 5;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        Ok(BOD {
            bearing_true: scaled_double(sentence.field(0), DEG_TO_RAD),
            bearing_magnetic: scaled_double(sentence.field(2), DEG_TO_RAD),
            destination_id: waypoint_id(sentence.field(4)),
            origin_id: waypoint_id(sentence.field(5)),
        })
    }
}

impl Encode for BOD {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let format = NumberFormat::zero_padded(5, 1);

        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        sentence.add_double_field(self.bearing_true, RAD_TO_DEG, format, Some("T"))?;
        sentence.add_double_field(self.bearing_magnetic, RAD_TO_DEG, format, Some("M"))?;
        sentence.add_str_field(&self.destination_id)?;
        sentence.add_str_field(&self.origin_id)?;
        Ok(sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bod_round_trip() {
        let cases = [
            ("$GPBOD,001.1,T,003.4,M,WETERB,WOUBRG*49", "WOUBRG"),
            ("$GPBOD,001.1,T,003.4,M,WETERB,*53", ""),
        ];

        for (raw, origin) in cases {
            let bod = BOD::decode(&Sentence::parse(raw).unwrap()).unwrap().unwrap();
            assert!((bod.bearing_true - 1.1 * DEG_TO_RAD).abs() < 1e-12, "{raw}");
            assert!((bod.bearing_magnetic - 3.4 * DEG_TO_RAD).abs() < 1e-12, "{raw}");
            assert_eq!(bod.destination_id.as_str(), "WETERB", "{raw}");
            assert_eq!(bod.origin_id.as_str(), origin, "{raw}");

            assert_eq!(bod.encode("GP").unwrap().serialize().unwrap(), raw);
        }
    }
}
