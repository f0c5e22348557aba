#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Decode, Encode, expect_unit};
use crate::{
    DecodeError, NumberFormat, Sentence, SentenceError,
    na::NotAvailable,
    units::CELSIUS_OFFSET,
};

/// MTW - Mean Temperature of Water
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_mtw_mean_temperature_of_water>
///
/// ```text
///         1   2
///         |   |
///  $--MTW,x.x,C*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MTW {
    /// Water temperature in kelvin
    pub temperature: f64,
}

impl Decode for MTW {
    const TYPE_CODE: &'static str = "MTW";
    const MIN_FIELDS: usize = 2;

    fn decode_fields(sentence: &Sentence) -> Result<Self, DecodeError> {
        expect_unit(sentence, 1, 'C')?;

        let celsius = sentence.get::<f64>(0);
        Ok(MTW {
            temperature: if celsius.is_na() { celsius } else { celsius + CELSIUS_OFFSET },
        })
    }
}

impl Encode for MTW {
    fn encode(&self, sender: &str) -> Result<Sentence, SentenceError> {
        let celsius = if self.temperature.is_na() {
            self.temperature
        } else {
            self.temperature - CELSIUS_OFFSET
        };

        let mut sentence = Sentence::with_type(Self::TYPE_CODE, sender)?;
        sentence.add_double_field(celsius, 1.0, NumberFormat::DEFAULT, Some("C"))?;
        Ok(sentence)
    }
}
