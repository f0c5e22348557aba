#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    Decode, Encode, RudderDirection, Status, WaypointId, add_enum_field, signed_cross_track,
    waypoint_id,
};
use crate::{
    DecodeError, NumberFormat, Sentence, SentenceError,
    parse::{coordinate, scaled_double},
    units::{DEG_TO_RAD, KNOTS_TO_MS, M_TO_NM, MS_TO_KNOTS, NM_TO_M, RAD_TO_DEG},
};

/// RMB - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmb_recommended_minimum_navigation_information>
///
/// ```text
///                                                             14
///         1 2   3 4    5    6       7 8        9 10  11  12  13|
///         | |   | |    |    |       | |        | |   |   |   | |
///  $--RMB,A,x.x,a,c--c,c--c,llll.ll,a,yyyyy.yy,a,x.x,x.x,x.x,A,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMB {
    /// Data status
    pub status: Option<Status>,
    /// Cross track error magnitude in meters
    pub cross_track_error: f64,
    /// Direction to steer
    pub steer: Option<RudderDirection>,
    /// Origin waypoint ID
    pub origin_id: WaypointId,
    /// Destination waypoint ID
    pub destination_id: WaypointId,
    /// Destination latitude in degrees, negative south
    pub latitude: f64,
    /// Destination longitude in degrees, negative west
    pub longitude: f64,
    /// Range to destination in meters
    pub range_to_destination: f64,
    /// True bearing to destination in radians
    pub bearing_to_destination: f64,
    /// Closing velocity towards destination in m/s
    pub closing_velocity: f64,
    /// Arrival status, `Valid` once the arrival circle is entered
    pub arrival: Option<Status>,
}

impl RMB {
    /// Cross track error in meters, negative when steering to starboard.
    pub fn signed_cross_track_error(&self) -> f64 {
        signed_cross_track(self.cross_track_error, self.steer)
    }
}

impl Decode for RMB {
    const TYPE_CODE: &'static str = "RMB";
    const MIN_FIELDS: usize = 13;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        Ok(RMB {
            status: Status::from_field(sentence.field(0)),
            cross_track_error: scaled_double(sentence.field(1), NM_TO_M),
            steer: RudderDirection::from_field(sentence.field(2)),
            origin_id: waypoint_id(sentence.field(3)),
            destination_id: waypoint_id(sentence.field(4)),
            latitude: coordinate(sentence.field(5), sentence.field(6)),
            longitude: coordinate(sentence.field(7), sentence.field(8)),
            range_to_destination: scaled_double(sentence.field(9), NM_TO_M),
            bearing_to_destination: scaled_double(sentence.field(10), DEG_TO_RAD),
            closing_velocity: scaled_double(sentence.field(11), KNOTS_TO_MS),
            arrival: Status::from_field(sentence.field(12)),
        })
    }
}

impl Encode for RMB {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        add_enum_field(&mut sentence, self.status.map(Status::as_char))?;
        sentence.add_double_field(self.cross_track_error, M_TO_NM, NumberFormat::new(2), None)?;
        add_enum_field(&mut sentence, self.steer.map(RudderDirection::as_char))?;
        sentence.add_str_field(&self.origin_id)?;
        sentence.add_str_field(&self.destination_id)?;
        sentence.add_latitude_field(self.latitude)?;
        sentence.add_longitude_field(self.longitude)?;
        sentence.add_double_field(self.range_to_destination, M_TO_NM, NumberFormat::zero_padded(5, 1), None)?;
        sentence.add_double_field(self.bearing_to_destination, RAD_TO_DEG, NumberFormat::zero_padded(5, 1), None)?;
        sentence.add_double_field(self.closing_velocity, MS_TO_KNOTS, NumberFormat::DEFAULT, None)?;
        add_enum_field(&mut sentence, self.arrival.map(Status::as_char))?;
        Ok(sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::na::NotAvailable;

    const FIXTURE: &str = "$GPRMB,A,0.15,R,WOUBRG,WETERB,5213.400,N,00438.400,E,009.4,180.2,,V*07";

    #[test]
    fn test_rmb_fixture() {
        let rmb = RMB::decode(&Sentence::parse(FIXTURE).unwrap()).unwrap().unwrap();

        assert_eq!(rmb.status, Some(Status::Valid));
        assert!((rmb.cross_track_error - 0.15 * NM_TO_M).abs() < 1e-9);
        assert_eq!(rmb.steer, Some(RudderDirection::Starboard));
        assert!(rmb.signed_cross_track_error() < 0.0);
        assert_eq!(rmb.origin_id.as_str(), "WOUBRG");
        assert_eq!(rmb.destination_id.as_str(), "WETERB");
        assert!((rmb.latitude - 52.223333333).abs() < 1e-6);
        assert!((rmb.longitude - 4.64).abs() < 1e-9);
        assert!((rmb.range_to_destination - 9.4 * NM_TO_M).abs() < 1e-9);
        assert!((rmb.bearing_to_destination - 180.2 * DEG_TO_RAD).abs() < 1e-12);
        assert!(rmb.closing_velocity.is_na());
        assert_eq!(rmb.arrival, Some(Status::Invalid));

        assert_eq!(rmb.encode("GP").unwrap().serialize().unwrap(), FIXTURE);
    }

    #[test]
    fn test_signed_cross_track_error() {
        let mut rmb = RMB::decode(&Sentence::parse(FIXTURE).unwrap()).unwrap().unwrap();

        let cases = [
            (Some(RudderDirection::Starboard), -rmb.cross_track_error),
            (Some(RudderDirection::Port), rmb.cross_track_error),
            (None, rmb.cross_track_error),
        ];

        for (steer, expected) in cases {
            rmb.steer = steer;
            assert_eq!(rmb.signed_cross_track_error(), expected, "{steer:?}");
        }
    }
}
