#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode};
use crate::{
    DecodeError, NumberFormat, Sentence, SentenceError,
    na::NotAvailable,
    parse::scaled_double,
    units::{FATHOMS_TO_M, FEET_TO_M, M_TO_FATHOMS, M_TO_FEET},
};

// All three depth sentences share one layout:
//
//         1   2 3   4 5   6
//  $--DBx,x.x,f,x.x,M,x.x,F*hh<CR><LF>
//
// Decoding prefers meters, then feet, then fathoms.
macro_rules! depth_sentence {
    ($(#[$meta:meta])* $name:ident, $code:literal) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            /// Depth in meters
            pub depth: f64,
        }

        impl Decode for $name {
            const TYPE_CODE: &'static str = $code;
            const MIN_FIELDS: usize = 6;

            fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
                Ok($name {
                    depth: depth_from_fields(sentence),
                })
            }
        }

        impl Encode for $name {
            fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
                depth_sentence(Self::TYPE_CODE, self.depth, sender)
            }
        }
    };
}

depth_sentence!(
    /// DBT - Depth Below Transducer
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dbt_depth_below_transducer>
    DBT,
    "DBT"
);

depth_sentence!(
    /// DBK - Depth Below Keel
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dbk_depth_below_keel>
    DBK,
    "DBK"
);

depth_sentence!(
    /// DBS - Depth Below Surface
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dbs_depth_below_surface>
    DBS,
    "DBS"
);

fn depth_from_fields(sentence: &Sentence) -> f64 {
    [(2, 1.0), (0, FEET_TO_M), (4, FATHOMS_TO_M)]
        .into_iter()
        .map(|(index, factor)| scaled_double(sentence.field(index), factor))
        .find(|depth| !depth.is_na())
        .unwrap_or(f64::NA)
}

fn depth_sentence(type_code: &str, depth: f64, sender: &str) -> Result<Sentence, SentenceError> {
    let mut sentence = Sentence::with_type(type_code, sender)?;
    sentence.add_double_field(depth, M_TO_FEET, NumberFormat::DEFAULT, Some("f"))?;
    sentence.add_double_field(depth, 1.0, NumberFormat::DEFAULT, Some("M"))?;
    sentence.add_double_field(depth, M_TO_FATHOMS, NumberFormat::DEFAULT, Some("F"))?;
    Ok(sentence)
}

/// Builds the depth sentence matching a transducer offset.
///
/// A positive offset is the distance from transducer to surface and gives DBS,
/// zero or negative is the distance to the keel and gives DBK; both report
/// `depth + offset`. An NA offset gives DBT with the raw depth.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::{messages::encode_depth_for_offset, na::DOUBLE_NA};
///
/// let dbs = encode_depth_for_offset(10.0, 1.0, "").unwrap();
/// assert_eq!(dbs.to_string(), "$IIDBS,36.1,f,11.0,M,6.0,F*14");
///
/// let dbt = encode_depth_for_offset(10.0, DOUBLE_NA, "").unwrap();
/// assert!(dbt.is_type("DBT"));
/// ```
pub fn encode_depth_for_offset(depth: f64, offset: f64, sender: &str) -> Result<Sentence, SentenceError> {
    if offset.is_na() {
        return DBT { depth }.encode(sender);
    }

    let depth = if depth.is_na() { depth } else { depth + offset };
    if offset > 0.0 {
        DBS { depth }.encode(sender)
    } else {
        DBK { depth }.encode(sender)
    }
}
