#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode, RouteType, WaypointId, add_enum_field, add_padded, waypoint_id};
use crate::{DecodeError, Sentence, SentenceError};

/// Waypoints one RTE sentence can carry.
pub const MAX_ROUTE_WAYPOINTS: usize = 16;

/// RTE - Routes
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rte_routes>
///
/// ```text
///         1   2   3 4    5           x    n
///         |   |   | |    |           |    |
///  $--RTE,x.x,x.x,a,c--c,c--c, ..... c--c*hh<CR><LF>
/// ```
///
/// Long routes span several sentences; joining them is left to the caller.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RTE {
    /// Total number of sentences for this route
    pub total_messages: u8,
    /// Number of this sentence, starting at 1
    pub message_number: u8,
    /// Complete or working route
    pub route_type: Option<RouteType>,
    /// Route identifier
    pub route_id: WaypointId,
    /// Waypoint names in route order
    pub waypoints: heapless::Vec<WaypointId, MAX_ROUTE_WAYPOINTS>,
}

impl Decode for RTE {
    const TYPE_CODE: &'static str = "RTE";
    const MIN_FIELDS: usize = 4;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        let mut waypoints = heapless::Vec::new();
        for name in sentence.fields().skip(4) {
            if waypoints.push(waypoint_id(name)).is_err() {
                break;
            }
        }

        Ok(RTE {
            total_messages: sentence.get(0),
            message_number: sentence.get(1),
            route_type: RouteType::from_field(sentence.field(2)),
            route_id: waypoint_id(sentence.field(3)),
            waypoints,
        })
    }
}

impl Encode for RTE {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        add_padded(&mut sentence, self.total_messages, 1)?;
        add_padded(&mut sentence, self.message_number, 1)?;
        add_enum_field(&mut sentence, self.route_type.map(RouteType::as_char))?;
        sentence.add_str_field(&self.route_id)?;
        for waypoint in &self.waypoints {
            sentence.add_str_field(waypoint)?;
        }
        Ok(sentence)
    }
}
