#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    BearingReference, Decode, Encode, FaaMode, RudderDirection, Status, WaypointId,
    add_enum_field, expect_unit, signed_cross_track, waypoint_id,
};
use crate::{
    DecodeError, NumberFormat, Sentence, SentenceError,
    parse::scaled_double,
    units::{DEG_TO_RAD, M_TO_NM, NM_TO_M, RAD_TO_DEG},
};

/// APB - Autopilot Sentence "B"
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_apb_autopilot_sentence_b>
///
/// ```text
///                                         13    15
///         1 2 3   4 5 6 7 8   9 10   11  12|   14|
///         | | |   | | | | |   | |    |   | |   | |
///  $--APB,A,A,x.x,a,N,A,A,x.x,a,c--c,x.x,a,x.x,a,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct APB {
    /// General warning flag
    pub status: Option<Status>,
    /// Cycle lock warning flag
    pub cycle_lock: Option<Status>,
    /// Cross track error magnitude in meters
    pub cross_track_error: f64,
    /// Direction to steer
    pub steer: Option<RudderDirection>,
    /// Arrival circle entered
    pub arrival_circle_entered: Option<Status>,
    /// Perpendicular passed at waypoint
    pub perpendicular_passed: Option<Status>,
    /// Bearing origin to destination in radians
    pub bearing_origin_to_destination: f64,
    pub bearing_origin_to_destination_reference: Option<BearingReference>,
    /// Destination waypoint ID
    pub destination_id: WaypointId,
    /// Bearing present position to destination in radians
    pub bearing_to_destination: f64,
    pub bearing_to_destination_reference: Option<BearingReference>,
    /// Heading to steer to destination in radians
    pub heading_to_steer: f64,
    pub heading_to_steer_reference: Option<BearingReference>,
    /// FAA mode indicator
    pub mode: Option<FaaMode>,
}

impl APB {
    /// Cross track error in meters, negative when steering to starboard.
    pub fn signed_cross_track_error(&self) -> f64 {
        signed_cross_track(self.cross_track_error, self.steer)
    }
}

impl Decode for APB {
    const TYPE_CODE: &'static str = "APB";
    const MIN_FIELDS: usize = 14;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        expect_unit(sentence, 4, 'N')?;

        Ok(APB {
            status: Status::from_field(sentence.field(0)),
            cycle_lock: Status::from_field(sentence.field(1)),
            cross_track_error: scaled_double(sentence.field(2), NM_TO_M),
            steer: RudderDirection::from_field(sentence.field(3)),
            arrival_circle_entered: Status::from_field(sentence.field(5)),
            perpendicular_passed: Status::from_field(sentence.field(6)),
            bearing_origin_to_destination: scaled_double(sentence.field(7), DEG_TO_RAD),
            bearing_origin_to_destination_reference: BearingReference::from_field(sentence.field(8)),
            destination_id: waypoint_id(sentence.field(9)),
            bearing_to_destination: scaled_double(sentence.field(10), DEG_TO_RAD),
            bearing_to_destination_reference: BearingReference::from_field(sentence.field(11)),
            heading_to_steer: scaled_double(sentence.field(12), DEG_TO_RAD),
            heading_to_steer_reference: BearingReference::from_field(sentence.field(13)),
            mode: FaaMode::from_field(sentence.field(14)),
        })
    }
}

impl Encode for APB {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let bearing = NumberFormat::zero_padded(5, 1);

        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        add_enum_field(&mut sentence, self.status.map(Status::as_char))?;
        add_enum_field(&mut sentence, self.cycle_lock.map(Status::as_char))?;
        sentence.add_double_field(self.cross_track_error, M_TO_NM, NumberFormat::new(2), None)?;
        add_enum_field(&mut sentence, self.steer.map(RudderDirection::as_char))?;
        sentence.add_char_field('N')?;
        add_enum_field(&mut sentence, self.arrival_circle_entered.map(Status::as_char))?;
        add_enum_field(&mut sentence, self.perpendicular_passed.map(Status::as_char))?;
        sentence.add_double_field(self.bearing_origin_to_destination, RAD_TO_DEG, bearing, None)?;
        add_enum_field(
            &mut sentence,
            self.bearing_origin_to_destination_reference.map(BearingReference::as_char),
        )?;
        sentence.add_str_field(&self.destination_id)?;
        sentence.add_double_field(self.bearing_to_destination, RAD_TO_DEG, bearing, None)?;
        add_enum_field(
            &mut sentence,
            self.bearing_to_destination_reference.map(BearingReference::as_char),
        )?;
        sentence.add_double_field(self.heading_to_steer, RAD_TO_DEG, bearing, None)?;
        add_enum_field(
            &mut sentence,
            self.heading_to_steer_reference.map(BearingReference::as_char),
        )?;
        if let Some(mode) = self.mode {
            sentence.add_char_field(mode.as_char())?;
        }
        Ok(sentence)
    }
}
