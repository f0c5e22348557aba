#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode, FaaMode, rmc::reverse_gear};
use crate::{
    DecodeError, NumberFormat, Sentence, SentenceError,
    na::NotAvailable,
    parse::scaled_double,
    units::{DEG_TO_RAD, KMH_TO_MS, KNOTS_TO_MS, MS_TO_KMH, MS_TO_KNOTS, RAD_TO_DEG},
};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
///
/// The mode field (9) is absent before NMEA 2.3.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VTG {
    /// Course over ground relative to true north in radians
    pub course_over_ground_true: f64,
    /// Course over ground relative to magnetic north in radians
    pub course_over_ground_magnetic: f64,
    /// Speed over ground in m/s, negative when reversing
    pub speed_over_ground: f64,
    /// FAA mode indicator
    pub mode: Option<FaaMode>,
}

impl Decode for VTG {
    const TYPE_CODE: &'static str = "VTG";
    const MIN_FIELDS: usize = 8;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        let kmh = scaled_double(sentence.field(6), KMH_TO_MS);
        let speed_over_ground = if kmh.is_na() {
            scaled_double(sentence.field(4), KNOTS_TO_MS)
        } else {
            kmh
        };

        Ok(VTG {
            course_over_ground_true: scaled_double(sentence.field(0), DEG_TO_RAD),
            course_over_ground_magnetic: scaled_double(sentence.field(2), DEG_TO_RAD),
            speed_over_ground,
            mode: FaaMode::from_field(sentence.field(8)),
        })
    }
}

impl Encode for VTG {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let (true_course, speed) = reverse_gear(self.course_over_ground_true, self.speed_over_ground);
        let (magnetic_course, _) = reverse_gear(self.course_over_ground_magnetic, self.speed_over_ground);
        let format = NumberFormat::new(2);

        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        sentence.add_double_field(true_course, RAD_TO_DEG, format, Some("T"))?;
        sentence.add_double_field(magnetic_course, RAD_TO_DEG, format, Some("M"))?;
        sentence.add_double_field(speed, MS_TO_KNOTS, format, Some("N"))?;
        sentence.add_double_field(speed, MS_TO_KMH, format, Some("K"))?;
        if let Some(mode) = self.mode {
            sentence.add_char_field(mode.as_char())?;
        }
        Ok(sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vtg_round_trip() {
        let raw = "$GPVTG,89.34,T,81.84,M,10.00,N,18.52,K*42";
        let vtg = VTG::decode(&Sentence::parse(raw).unwrap()).unwrap().unwrap();

        assert!((vtg.course_over_ground_true - 89.34 * DEG_TO_RAD).abs() < 1e-12);
        assert!((vtg.speed_over_ground - 18.52 * KMH_TO_MS).abs() < 1e-12);
        assert_eq!(vtg.mode, None);

        assert_eq!(vtg.encode("GP").unwrap().serialize().unwrap(), raw);
    }

    #[test]
    fn test_vtg_speed_preference() {
        let cases = [
            ("$GPVTG,89.34,T,81.84,M,0.00,N,0.01,K*4C", 0.01 * KMH_TO_MS),
            ("$GPVTG,360.0,T,348.7,M,000.0,N,000.0,K*43", 0.0),
        ];

        for (raw, speed) in cases {
            let vtg = VTG::decode(&Sentence::parse(raw).unwrap()).unwrap().unwrap();
            assert!((vtg.speed_over_ground - speed).abs() < 1e-12, "{raw}");
        }

        let mut knots_only = "$GPVTG,,T,,M,10.0,N,,K".to_string();
        crate::checksum::append_checksum(&mut knots_only);
        let vtg = VTG::decode(&Sentence::parse(&knots_only).unwrap()).unwrap().unwrap();
        assert!((vtg.speed_over_ground - 10.0 * KNOTS_TO_MS).abs() < 1e-12);
        assert!(vtg.course_over_ground_true.is_na());
    }

    #[test]
    fn test_vtg_encode_wraps_and_reverses() {
        let cases = [
            (
                VTG {
                    course_over_ground_true: 2.0 * std::f64::consts::PI,
                    course_over_ground_magnetic: 348.7 * DEG_TO_RAD,
                    speed_over_ground: 0.0,
                    mode: None,
                },
                "$GPVTG,0.00,T,348.70,M,0.00,N,0.00,K*46",
            ),
            (
                VTG {
                    course_over_ground_true: 89.34 * DEG_TO_RAD,
                    course_over_ground_magnetic: 81.84 * DEG_TO_RAD,
                    speed_over_ground: -10.0 * KNOTS_TO_MS,
                    mode: Some(FaaMode::Autonomous),
                },
                "$GPVTG,269.34,T,261.84,M,10.00,N,18.52,K,A*2F",
            ),
        ];

        for (vtg, expected) in cases {
            assert_eq!(vtg.encode("GP").unwrap().to_string(), expected);
        }
    }
}
