//! # Typed sentence codecs
//!
//! One module per sentence type. Each type implements [`Decode`] (fields to typed
//! values) and [`Encode`] (typed values to a [`Sentence`]). All numeric values are
//! SI with NA sentinels: angles in radians, speeds in m/s, distances in meters,
//! temperatures in kelvin.
//!
//! [`Message`] wraps every supported type and dispatches on the type code.

mod apb;
mod bod;
mod dbt;
mod dpt;
mod gga;
mod gll;
mod gsa;
mod gsv;
mod hdg;
mod hdt;
mod mtw;
mod mwd;
mod mwv;
mod rmb;
mod rmc;
mod rot;
mod rsa;
mod rte;
mod vdm;
mod vhw;
mod vtg;
mod wpl;
mod xdr;
mod xte;
mod zda;

pub use apb::APB;
pub use bod::BOD;
pub use dbt::{DBK, DBS, DBT, encode_depth_for_offset};
pub use dpt::DPT;
pub use gga::GGA;
pub use gll::GLL;
pub use gsa::GSA;
pub use gsv::{GSV, Satellite};
pub use hdg::HDG;
pub use hdt::{HDM, HDT};
pub use mtw::MTW;
pub use mwd::MWD;
pub use mwv::MWV;
pub use rmb::RMB;
pub use rmc::RMC;
pub use rot::ROT;
pub use rsa::RSA;
pub use rte::RTE;
pub use vdm::{VDM, VDO, armor_payload, dearmor_payload};
pub use vhw::VHW;
pub use vtg::VTG;
pub use wpl::WPL;
pub use xdr::{Attitude, Transducer, XDR};
pub use xte::XTE;
pub use zda::ZDA;

use std::fmt::Display;

use tracing::trace;

use crate::{DecodeError, NumberFormat, Sentence, SentenceError, na::NotAvailable};

/// Maximum length of a waypoint or route identifier.
pub const MAX_WAYPOINT_ID_LEN: usize = 20;

/// Waypoint or route identifier.
pub type WaypointId = heapless::String<MAX_WAYPOINT_ID_LEN>;

/// Reads a sentence into a typed value.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::{Sentence, messages::{DPT, Decode, ZDA}};
///
/// let sentence = Sentence::parse("$IIDPT,10.5,0.9*7D").unwrap();
///
/// let dpt = DPT::decode(&sentence).unwrap().unwrap();
/// assert_eq!(dpt.depth_below_transducer, 10.5);
///
/// // not a ZDA sentence
/// assert_eq!(ZDA::decode(&sentence), Ok(None));
/// ```
pub trait Decode: Sized {
    /// Type code handled by this codec.
    const TYPE_CODE: &'static str;

    /// Fields required for a sentence of this type to be decodable.
    const MIN_FIELDS: usize;

    /// Maps the fields of a sentence already known to be of this type.
    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError>;

    /// Decodes `sentence`.
    ///
    /// Returns `Ok(None)` for a sentence of another type. The type is checked
    /// before the field count, so a short sentence of another type is never an error.
    fn decode(sentence: &Sentence) -> Result<Option<Self>, DecodeError> {
        if !sentence.is_type(Self::TYPE_CODE) {
            return Ok(None);
        }

        let found = sentence.field_count();
        if found < Self::MIN_FIELDS {
            return Err(DecodeError::TooFewFields {
                type_code: Self::TYPE_CODE,
                expected: Self::MIN_FIELDS,
                found,
            });
        }

        Self::decode_fields(sentence).map(Some)
    }
}

/// Builds a sentence from a typed value.
pub trait Encode {
    /// Builds the sentence with the given sender. An empty sender means `II`.
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError>;
}

macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Reads the first character of a field.
            pub fn from_field(field: &str) -> Option<Self> {
                match crate::parse::first_char(field)? {
                    $($char => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The wire character.
            pub fn as_char(self) -> char {
                match self {
                    $(Self::$variant => $char,)*
                }
            }
        }
    };
}

field_enum! {
    /// Data valid indicator
    pub enum Status {
        /// A - Valid
        'A' => Valid,
        /// V - Invalid
        'V' => Invalid,
    }
}

field_enum! {
    /// Reference of a wind angle
    pub enum WindReference {
        /// T - True, relative to the water
        'T' => True,
        /// R - Relative, apparent wind
        'R' => Apparent,
    }
}

field_enum! {
    /// Direction to steer to get back on track
    pub enum RudderDirection {
        /// R - Steer to starboard
        'R' => Starboard,
        /// L - Steer to port
        'L' => Port,
    }
}

field_enum! {
    /// Reference of a bearing or heading
    pub enum BearingReference {
        /// T - True north
        'T' => True,
        /// M - Magnetic north
        'M' => Magnetic,
    }
}

field_enum! {
    /// Kind of a route sentence
    pub enum RouteType {
        /// c - Complete route, all waypoints
        'c' => Complete,
        /// w - Working route, first waypoint is the one being left
        'w' => Working,
    }
}

field_enum! {
    /// FAA Mode Indicator
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_sentence_mixes_and_nmea_variations>
    pub enum FaaMode {
        /// A - Autonomous mode
        'A' => Autonomous,
        /// D - Differential Mode
        'D' => Differential,
        /// E - Estimated (dead-reckoning) mode
        'E' => Estimated,
        /// F - RTK Float mode
        'F' => FloatRtk,
        /// M - Manual Input Mode
        'M' => Manual,
        /// N - Data Not Valid
        'N' => DataNotValid,
        /// P - Precise
        'P' => Precise,
        /// R - RTK Integer mode
        'R' => FixedRtk,
        /// S - Simulated Mode
        'S' => Simulator,
    }
}

field_enum! {
    /// Quality of the GPS fix
    pub enum GpsQuality {
        /// 0 - Fix not available
        '0' => NoFix,
        /// 1 - GPS fix
        '1' => GpsFix,
        /// 2 - Differential GPS fix
        '2' => DgpsFix,
        /// 3 - PPS fix
        '3' => PpsFix,
        /// 4 - Real Time Kinematic
        '4' => Rtk,
        /// 5 - Float RTK
        '5' => FloatRtk,
        /// 6 - Estimated (dead reckoning)
        '6' => Estimated,
        /// 7 - Manual input mode
        '7' => Manual,
        /// 8 - Simulation mode
        '8' => Simulation,
    }
}

field_enum! {
    /// Selection Mode
    pub enum SelectionMode {
        /// A - Automatic, 2D/3D
        'A' => Automatic,
        /// M - Manual, forced to operate in 2D or 3D
        'M' => Manual,
    }
}

field_enum! {
    /// Fix Mode
    pub enum FixMode {
        /// 1 - No fix
        '1' => NoFix,
        /// 2 - 2D Fix
        '2' => Fix2D,
        /// 3 - 3D Fix
        '3' => Fix3D,
    }
}

/// Copies a field into a [`WaypointId`], truncating to its capacity.
pub(crate) fn waypoint_id(field: &str) -> WaypointId {
    let mut id = WaypointId::new();
    for c in field.chars() {
        if id.push(c).is_err() {
            break;
        }
    }
    id
}

/// Fails with [`DecodeError::UnknownUnit`] unless field `index` is empty or starts with `unit`.
pub(crate) fn expect_unit(sentence: &Sentence, index: usize, unit: char) -> Result<(), DecodeError> {
    match sentence.field_char(index) {
        None => Ok(()),
        Some(c) if c == unit => Ok(()),
        Some(c) => Err(DecodeError::UnknownUnit { field: index, unit: c }),
    }
}

pub(crate) fn add_enum_field(sentence: &mut Sentence, c: Option<char>) -> Result<(), SentenceError> {
    match c {
        Some(c) => sentence.add_char_field(c),
        None => sentence.add_empty_field(),
    }
}

/// Cross-track error with the sign of the correction: steering to starboard is negative.
pub(crate) fn signed_cross_track(magnitude: f64, steer: Option<RudderDirection>) -> f64 {
    match steer {
        Some(RudderDirection::Starboard) if !magnitude.is_na() => -magnitude,
        _ => magnitude,
    }
}

/// Appends `|value| * multiplier` and the direction letter, or two empty fields for NA.
pub(crate) fn add_directional(
    sentence: &mut Sentence,
    value: f64,
    multiplier: f64,
    format: NumberFormat,
    (positive, negative): (char, char),
) -> Result<(), SentenceError> {
    if value.is_na() {
        sentence.add_empty_field()?;
        return sentence.add_empty_field();
    }

    sentence.add_double_field(value.abs(), multiplier, format, None)?;
    sentence.add_char_field(if value < 0.0 { negative } else { positive })
}

/// Appends an integer zero padded to `width`, or an empty field for NA.
pub(crate) fn add_padded<T>(sentence: &mut Sentence, value: T, width: usize) -> Result<(), SentenceError>
where
    T: NotAvailable + Display,
{
    if value.is_na() {
        sentence.add_empty_field()
    } else {
        sentence.add_str_field(&format!("{value:0width$}"))
    }
}

/// A unified enum over every supported sentence type.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::{Sentence, messages::Message};
///
/// let sentence = Sentence::parse("$GPZDA,160012.71,11,03,2004,-1,00*7D").unwrap();
/// match Message::decode(&sentence) {
///     Ok(Some(Message::ZDA(zda))) => assert_eq!(zda.year, 2004),
///     other => panic!("unexpected {other:?}"),
/// }
///
/// let unknown = Sentence::parse("$GPXYZ,1*51").unwrap();
/// assert_eq!(Message::decode(&unknown), Ok(None));
/// ```
///
/// | Variant | Sentence type                                     |
/// |---------|---------------------------------------------------|
/// | APB     | Autopilot Sentence "B"                            |
/// | BOD     | Bearing - Waypoint to Waypoint                    |
/// | DBK     | Depth Below Keel                                  |
/// | DBS     | Depth Below Surface                               |
/// | DBT     | Depth Below Transducer                            |
/// | DPT     | Depth of Water                                    |
/// | GGA     | Global Positioning System Fix Data                |
/// | GLL     | Geographic Position - Latitude/Longitude          |
/// | GSA     | GPS DOP and active satellites                     |
/// | GSV     | Satellites in View                                |
/// | HDG     | Heading - Deviation & Variation                   |
/// | HDM     | Heading - Magnetic                                |
/// | HDT     | Heading - True                                    |
/// | MTW     | Mean Temperature of Water                         |
/// | MWD     | Wind Direction & Speed                            |
/// | MWV     | Wind Speed and Angle                              |
/// | RMB     | Recommended Minimum Navigation Information        |
/// | RMC     | Recommended Minimum Specific GNSS Data            |
/// | ROT     | Rate Of Turn                                      |
/// | RSA     | Rudder Sensor Angle                               |
/// | RTE     | Routes                                            |
/// | VDM     | AIS VHF Data-Link Message                         |
/// | VDO     | AIS VHF Data-Link Own-Vessel Report               |
/// | VHW     | Water Speed and Heading                           |
/// | VTG     | Track made good and Ground speed                  |
/// | WPL     | Waypoint Location                                 |
/// | XDR     | Transducer Measurement                            |
/// | XTE     | Cross-Track Error, Measured                       |
/// | ZDA     | Time & Date - UTC, day, month, year and time zone |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    APB(APB),
    BOD(BOD),
    DBK(DBK),
    DBS(DBS),
    DBT(DBT),
    DPT(DPT),
    GGA(GGA),
    GLL(GLL),
    GSA(GSA),
    GSV(GSV),
    HDG(HDG),
    HDM(HDM),
    HDT(HDT),
    MTW(MTW),
    MWD(MWD),
    MWV(MWV),
    RMB(RMB),
    RMC(RMC),
    ROT(ROT),
    RSA(RSA),
    RTE(RTE),
    VDM(VDM),
    VDO(VDO),
    VHW(VHW),
    VTG(VTG),
    WPL(WPL),
    XDR(XDR),
    XTE(XTE),
    ZDA(ZDA),
}

macro_rules! dispatch {
    ($($variant:ident),* $(,)?) => {
        impl Message {
            /// Decodes any supported sentence. Unsupported type codes give `Ok(None)`.
            pub fn decode(sentence: &Sentence) -> Result<Option<Self>, DecodeError> {
                match sentence.type_code() {
                    $(
                        <$variant as Decode>::TYPE_CODE => {
                            Ok($variant::decode(sentence)?.map(Message::$variant))
                        }
                    )*
                    other => {
                        trace!(type_code = other, "no codec for sentence type");
                        Ok(None)
                    }
                }
            }

            /// Type code of the wrapped message.
            pub fn type_code(&self) -> &'static str {
                match self {
                    $(Message::$variant(_) => <$variant as Decode>::TYPE_CODE,)*
                }
            }
        }

        impl Encode for Message {
            fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
                match self {
                    $(Message::$variant(message) => message.encode(sender),)*
                }
            }
        }
    };
}

dispatch!(
    APB, BOD, DBK, DBS, DBT, DPT, GGA, GLL, GSA, GSV, HDG, HDM, HDT, MTW, MWD, MWV, RMB, RMC, ROT,
    RSA, RTE, VDM, VDO, VHW, VTG, WPL, XDR, XTE, ZDA,
);
