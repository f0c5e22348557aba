#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    Decode, Encode, FaaMode, RudderDirection, Status, add_enum_field, expect_unit,
    signed_cross_track,
};
use crate::{
    DecodeError, NumberFormat, Sentence, SentenceError,
    parse::scaled_double,
    units::{M_TO_NM, NM_TO_M},
};

/// XTE - Cross-Track Error, Measured
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_xte_cross_track_error_measured>
///
/// ```text
///         1 2 3   4 5 6
///         | | |   | | |
///  $--XTE,A,A,x.x,a,N,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XTE {
    /// General warning flag, `Invalid` for Loran-C blink or SNR warning
    pub status: Option<Status>,
    /// Loran-C cycle lock warning flag
    pub cycle_lock: Option<Status>,
    /// Cross track error magnitude in meters
    pub cross_track_error: f64,
    /// Direction to steer
    pub steer: Option<RudderDirection>,
    /// FAA mode indicator
    pub mode: Option<FaaMode>,
}

impl XTE {
    /// Cross track error in meters, negative when steering to starboard.
    pub fn signed_cross_track_error(&self) -> f64 {
        signed_cross_track(self.cross_track_error, self.steer)
    }
}

impl Decode for XTE {
    const TYPE_CODE: &'static str = "XTE";
    const MIN_FIELDS: usize = 5;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        expect_unit(sentence, 4, 'N')?;

        Ok(XTE {
            status: Status::from_field(sentence.field(0)),
            cycle_lock: Status::from_field(sentence.field(1)),
            cross_track_error: scaled_double(sentence.field(2), NM_TO_M),
            steer: RudderDirection::from_field(sentence.field(3)),
            mode: FaaMode::from_field(sentence.field(5)),
        })
    }
}

impl Encode for XTE {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        add_enum_field(&mut sentence, self.status.map(Status::as_char))?;
        add_enum_field(&mut sentence, self.cycle_lock.map(Status::as_char))?;
        sentence.add_double_field(self.cross_track_error, M_TO_NM, NumberFormat::new(2), None)?;
        add_enum_field(&mut sentence, self.steer.map(RudderDirection::as_char))?;
        sentence.add_char_field('N')?;
        if let Some(mode) = self.mode {
            sentence.add_char_field(mode.as_char())?;
        }
        Ok(sentence)
    }
}
