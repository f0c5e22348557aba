#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode, WaypointId, waypoint_id};
use crate::{DecodeError, Sentence, SentenceError, parse::coordinate};

/// WPL - Waypoint Location
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_wpl_waypoint_location>
///
/// ```text
///         1       2 3        4 5
///         |       | |        | |
///  $--WPL,llll.ll,a,yyyyy.yy,a,c--c*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct WPL {
    /// Latitude in degrees, negative south
    pub latitude: f64,
    /// Longitude in degrees, negative west
    pub longitude: f64,
    /// Waypoint name
    pub name: WaypointId,
}

impl Decode for WPL {
    const TYPE_CODE: &'static str = "WPL";
    const MIN_FIELDS: usize = 5;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        Ok(WPL {
            latitude: coordinate(sentence.field(0), sentence.field(1)),
            longitude: coordinate(sentence.field(2), sentence.field(3)),
            name: waypoint_id(sentence.field(4)),
        })
    }
}

impl Encode for WPL {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        sentence.add_latitude_field(self.latitude)?;
        sentence.add_longitude_field(self.longitude)?;
        sentence.add_str_field(&self.name)?;
        Ok(sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wpl_round_trip() {
        let cases = [
            ("$GPWPL,5208.700,N,00438.600,E,MOLENB*4D", 52.145, 4.643333333, "MOLENB"),
            ("$GPWPL,3352.123,S,15112.456,W,SYD*0C", -33.868716667, -151.207600000, "SYD"),
        ];

        for (raw, latitude, longitude, name) in cases {
            let wpl = WPL::decode(&Sentence::parse(raw).unwrap()).unwrap().unwrap();
            assert!((wpl.latitude - latitude).abs() < 1e-6, "{raw}");
            assert!((wpl.longitude - longitude).abs() < 1e-6, "{raw}");
            assert_eq!(wpl.name.as_str(), name, "{raw}");

            assert_eq!(wpl.encode("GP").unwrap().serialize().unwrap(), raw);
        }
    }
}
