//! # Sentence model
//!
//! A [`Sentence`] is one wire-format unit:
//!
//! ```text
//! <$|!><sender><type code>,<field>,<field>,...*<HH>
//! ```
//!
//! It is either parsed from raw text (atomically: the result is fully valid or an
//! error) or built field by field with the `add_*` methods, which keep a running
//! checksum. Capacity is bounded so that every sentence serializes to at most
//! [`MAX_SENTENCE_LEN`] bytes with at most [`MAX_FIELDS`] fields.

use std::fmt;

use nom::{
    IResult, Parser,
    bytes::complete::{take, take_until},
    character::complete::{anychar, char},
    combinator::verify,
    sequence::terminated,
};

use crate::{
    SentenceError,
    checksum::{checksum, checksum_suffix, format_checksum},
    datetime::{date_from_days, nmea_time_from_seconds},
    na::NotAvailable,
    parse::FromField,
};

/// Maximum length of a sentence on the wire, line ending excluded.
pub const MAX_SENTENCE_LEN: usize = 81;
/// Maximum number of fields after the type code.
pub const MAX_FIELDS: usize = 20;
/// Maximum length of a type code.
pub const MAX_TYPE_CODE_LEN: usize = 7;
/// Sender used when none is given.
pub const DEFAULT_SENDER: &str = "II";

// Prefix and "*HH" take four bytes of the wire budget.
const MAX_CONTENT_LEN: usize = MAX_SENTENCE_LEN - 4;
const SENDER_LEN: usize = 2;

/// Sentence start character.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Prefix {
    /// `$` - talker sentence
    #[default]
    Talker,
    /// `!` - encapsulated sentence, e.g. AIS
    Encapsulated,
}

impl Prefix {
    /// Maps a start character to its prefix.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '$' => Some(Prefix::Talker),
            '!' => Some(Prefix::Encapsulated),
            _ => None,
        }
    }

    /// The start character.
    pub fn as_char(self) -> char {
        match self {
            Prefix::Talker => '$',
            Prefix::Encapsulated => '!',
        }
    }
}

/// Fixed-point formatting of a number, like printf's `%0W.Pf`.
///
/// A non-zero `width` pads with leading zeros, sign included in the width.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::NumberFormat;
///
/// assert_eq!(NumberFormat::DEFAULT.format(10.46), "10.5");
/// assert_eq!(NumberFormat::zero_padded(2, 0).format(-1.0), "-1");
/// assert_eq!(NumberFormat::zero_padded(2, 0).format(3.0), "03");
/// assert_eq!(NumberFormat::TIME.format(92348.0), "092348.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Minimum total width, zero padded. `0` disables padding.
    pub width: usize,
    /// Digits after the decimal point.
    pub precision: usize,
}

impl NumberFormat {
    /// `%.1f`
    pub const DEFAULT: NumberFormat = NumberFormat::new(1);
    /// `%09.2f`, used for `hhmmss.ss` times.
    pub const TIME: NumberFormat = NumberFormat::zero_padded(9, 2);
    /// `%06.0f`, used for `ddmmyy` dates.
    pub const DATE: NumberFormat = NumberFormat::zero_padded(6, 0);
    /// Decimals of minutes written for coordinates by default.
    pub const COORDINATE_DECIMALS: usize = 3;

    /// A format with `precision` decimals and no padding.
    pub const fn new(precision: usize) -> Self {
        NumberFormat {
            width: 0,
            precision,
        }
    }

    /// A zero padded format.
    pub const fn zero_padded(width: usize, precision: usize) -> Self {
        NumberFormat { width, precision }
    }

    /// Formats `value`.
    pub fn format(&self, value: f64) -> String {
        format!(
            "{value:0width$.precision$}",
            width = self.width,
            precision = self.precision
        )
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::DEFAULT
    }
}

/// One NMEA 0183 sentence with field-level random access.
///
/// The text between the prefix and `*` is stored verbatim; fields are located
/// through an index of `(offset, length)` pairs.
///
/// # Examples
///
/// Parsing:
///
/// ```rust
/// use nmea0183_codec::Sentence;
///
/// let sentence = Sentence::parse("$IIDPT,10.5,0.9*7D").unwrap();
/// assert!(sentence.is_type("DPT"));
/// assert_eq!(sentence.sender(), "II");
/// assert_eq!(sentence.field_count(), 2);
/// assert_eq!(sentence.field(0), "10.5");
/// assert_eq!(sentence.field(7), "");
/// ```
///
/// Building:
///
/// ```rust
/// use nmea0183_codec::{NumberFormat, Sentence};
///
/// let mut sentence = Sentence::with_type("DPT", "II").unwrap();
/// sentence.add_double_field(10.5, 1.0, NumberFormat::DEFAULT, None).unwrap();
/// sentence.add_double_field(0.9, 1.0, NumberFormat::DEFAULT, None).unwrap();
/// assert_eq!(sentence.serialize().unwrap(), "$IIDPT,10.5,0.9*7D");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    prefix: Prefix,
    content: heapless::String<MAX_CONTENT_LEN>,
    type_end: u8,
    fields: heapless::Vec<(u8, u8), MAX_FIELDS>,
    checksum: u8,
    source_id: u8,
    received_at: u64,
}

/// Everything between the prefix and `*`.
fn content_part(i: &str) -> IResult<&str, &str> {
    take_until("*").parse(i)
}

fn sender_part(i: &str) -> IResult<&str, &str> {
    verify(take(SENDER_LEN), |sender: &str| !sender.contains(',')).parse(i)
}

/// The type code and the comma that ends it.
fn type_code_part(i: &str) -> IResult<&str, &str> {
    terminated(take_until(","), char(',')).parse(i)
}

fn is_field_text(text: &str) -> bool {
    text.bytes()
        .all(|b| b.is_ascii() && !b.is_ascii_control() && !b"$!,*".contains(&b))
}

fn is_type_code(code: &str) -> bool {
    (1..=MAX_TYPE_CODE_LEN).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn is_sender(sender: &str) -> bool {
    sender.len() == SENDER_LEN && is_field_text(sender)
}

impl Sentence {
    /// Creates an empty sentence.
    pub fn new() -> Self {
        Sentence::default()
    }

    /// Creates a `$` sentence with the given type code and sender.
    pub fn with_type(type_code: &str, sender: &str) -> Result<Self, SentenceError> {
        Sentence::with_prefix(type_code, sender, Prefix::Talker)
    }

    /// Creates a sentence with the given type code, sender and prefix.
    pub fn with_prefix(type_code: &str, sender: &str, prefix: Prefix) -> Result<Self, SentenceError> {
        let mut sentence = Sentence::new();
        sentence.init(type_code, sender, prefix)?;
        Ok(sentence)
    }

    /// Parses a complete sentence, optionally terminated by CRLF.
    ///
    /// The sentence is accepted only if its structure is valid and the two hex
    /// digits after `*` match the XOR of every character between the prefix and `*`.
    ///
    /// # Errors
    ///
    /// Each structural failure has its own [`SentenceError`] variant.
    pub fn parse(raw: &str) -> Result<Self, SentenceError> {
        if !raw.is_ascii() {
            return Err(SentenceError::NonAscii);
        }

        let body = raw.strip_suffix("\r\n").unwrap_or(raw);
        if body.len() > MAX_SENTENCE_LEN {
            return Err(SentenceError::TooLong { len: body.len() });
        }

        let (rest, first) = anychar::<_, nom::error::Error<&str>>(raw).map_err(|_| SentenceError::Empty)?;
        let prefix = Prefix::from_char(first).ok_or(SentenceError::InvalidPrefix(first))?;

        let (suffix, content) = content_part(rest).map_err(|_| SentenceError::MissingChecksum)?;
        let (_, found) = checksum_suffix(suffix).map_err(|_| SentenceError::InvalidChecksum)?;

        let expected = checksum(content.as_bytes());
        if expected != found {
            return Err(SentenceError::ChecksumMismatch { expected, found });
        }

        let (after_sender, _) = sender_part(content).map_err(|_| SentenceError::MissingSender)?;
        let (_, code) = type_code_part(after_sender).map_err(|_| SentenceError::MissingTypeSeparator)?;
        if !is_type_code(code) {
            return Err(SentenceError::InvalidTypeCode);
        }
        let comma = SENDER_LEN + code.len();

        let mut fields = heapless::Vec::new();
        let mut offset = comma + 1;
        for field in content[offset..].split(',') {
            fields
                .push((offset as u8, field.len() as u8))
                .map_err(|_| SentenceError::TooManyFields)?;
            offset += field.len() + 1;
        }

        let mut stored = heapless::String::new();
        stored
            .push_str(content)
            .map_err(|_| SentenceError::TooLong { len: body.len() })?;

        Ok(Sentence {
            prefix,
            content: stored,
            type_end: comma as u8,
            fields,
            checksum: expected,
            source_id: 0,
            received_at: 0,
        })
    }

    /// Parses `raw` into `self`. On failure `self` is left cleared.
    ///
    /// The source id and receive time are kept.
    pub fn parse_into(&mut self, raw: &str) -> Result<(), SentenceError> {
        match Sentence::parse(raw) {
            Ok(sentence) => {
                let (source_id, received_at) = (self.source_id, self.received_at);
                *self = sentence;
                self.source_id = source_id;
                self.received_at = received_at;
                Ok(())
            }
            Err(e) => {
                self.clear();
                Err(e)
            }
        }
    }

    /// Resets the sentence to empty. Calling it repeatedly has no further effect.
    pub fn clear(&mut self) {
        self.prefix = Prefix::Talker;
        self.content.clear();
        self.type_end = 0;
        self.fields.clear();
        self.checksum = 0;
    }

    /// Returns `true` if the sentence has no type code.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    pub fn sender(&self) -> &str {
        self.content.get(..SENDER_LEN).unwrap_or_default()
    }

    pub fn type_code(&self) -> &str {
        self.content
            .get(SENDER_LEN..usize::from(self.type_end))
            .unwrap_or_default()
    }

    /// Case-sensitive comparison with the type code.
    pub fn is_type(&self, code: &str) -> bool {
        !self.is_empty() && self.type_code() == code
    }

    /// The running checksum.
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// Identifier of the framer that received this sentence, `0` for local sentences.
    pub fn source_id(&self) -> u8 {
        self.source_id
    }

    pub fn set_source_id(&mut self, source_id: u8) {
        self.source_id = source_id;
    }

    /// Time the sentence was received, in the units of the framer's clock.
    /// `0` for sentences that were not received by a clocked framer.
    pub fn received_at(&self) -> u64 {
        self.received_at
    }

    pub fn set_received_at(&mut self, received_at: u64) {
        self.received_at = received_at;
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Field `index`, or an empty string when out of range.
    pub fn field(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .and_then(|&(offset, len)| {
                let start = usize::from(offset);
                self.content.get(start..start + usize::from(len))
            })
            .unwrap_or_default()
    }

    pub fn field_len(&self, index: usize) -> usize {
        self.fields
            .get(index)
            .map_or(0, |&(_, len)| usize::from(len))
    }

    /// First character of field `index`.
    pub fn field_char(&self, index: usize) -> Option<char> {
        self.field(index).chars().next()
    }

    /// Reads field `index` as a typed value, NA when empty or malformed.
    pub fn get<T: FromField>(&self, index: usize) -> T {
        T::from_field(self.field(index))
    }

    /// Iterates over all fields in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        (0..self.field_count()).map(|index| self.field(index))
    }

    /// Clears the sentence and starts a new one.
    ///
    /// An empty `sender` becomes [`DEFAULT_SENDER`]. Nothing changes on error.
    pub fn init(&mut self, type_code: &str, sender: &str, prefix: Prefix) -> Result<(), SentenceError> {
        let sender = if sender.is_empty() { DEFAULT_SENDER } else { sender };
        if !is_sender(sender) {
            return Err(SentenceError::InvalidSender);
        }
        if !is_type_code(type_code) {
            return Err(SentenceError::InvalidTypeCode);
        }

        self.clear();
        self.prefix = prefix;
        self.content
            .push_str(sender)
            .and_then(|_| self.content.push_str(type_code))
            .map_err(|_| SentenceError::CapacityExceeded)?;
        self.type_end = self.content.len() as u8;
        self.checksum = checksum(self.content.as_bytes());

        Ok(())
    }

    fn push_field(&mut self, text: &str) -> Result<(), SentenceError> {
        if self.is_empty() {
            return Err(SentenceError::Empty);
        }
        if !is_field_text(text) {
            return Err(SentenceError::InvalidFieldData);
        }
        if self.fields.is_full() || self.content.len() + 1 + text.len() > MAX_CONTENT_LEN {
            return Err(SentenceError::CapacityExceeded);
        }

        let offset = self.content.len() + 1;
        self.content
            .push(',')
            .and_then(|_| self.content.push_str(text))
            .map_err(|_| SentenceError::CapacityExceeded)?;
        self.fields
            .push((offset as u8, text.len() as u8))
            .map_err(|_| SentenceError::CapacityExceeded)?;
        self.checksum ^= b',' ^ checksum(text.as_bytes());

        Ok(())
    }

    // Runs a multi-field append; on failure every field it added is removed again.
    fn atomically<F>(&mut self, append: F) -> Result<(), SentenceError>
    where
        F: FnOnce(&mut Self) -> Result<(), SentenceError>,
    {
        let (content_len, field_count, checksum) =
            (self.content.len(), self.fields.len(), self.checksum);

        append(self).inspect_err(|_| {
            self.content.truncate(content_len);
            self.fields.truncate(field_count);
            self.checksum = checksum;
        })
    }

    pub fn add_empty_field(&mut self) -> Result<(), SentenceError> {
        self.push_field("")
    }

    pub fn add_str_field(&mut self, text: &str) -> Result<(), SentenceError> {
        self.push_field(text)
    }

    /// Appends a single character field, e.g. a unit or status letter.
    pub fn add_char_field(&mut self, c: char) -> Result<(), SentenceError> {
        let mut buf = [0u8; 4];
        self.push_field(c.encode_utf8(&mut buf))
    }

    /// Appends an unsigned integer, or an empty field for NA.
    pub fn add_u32_field(&mut self, value: u32) -> Result<(), SentenceError> {
        if value.is_na() {
            self.add_empty_field()
        } else {
            self.push_field(&value.to_string())
        }
    }

    /// Appends a signed integer, or an empty field for NA.
    pub fn add_i32_field(&mut self, value: i32) -> Result<(), SentenceError> {
        if value.is_na() {
            self.add_empty_field()
        } else {
            self.push_field(&value.to_string())
        }
    }

    /// Appends `value * multiplier` formatted with `format`, followed by a `unit` field if given.
    ///
    /// NA and non-finite values give an empty field; the unit field is still written.
    pub fn add_double_field(
        &mut self,
        value: f64,
        multiplier: f64,
        format: NumberFormat,
        unit: Option<&str>,
    ) -> Result<(), SentenceError> {
        self.atomically(|sentence| {
            if value.is_na() || !value.is_finite() {
                sentence.add_empty_field()?;
            } else {
                sentence.push_field(&format.format(value * multiplier))?;
            }

            match unit {
                Some(unit) => sentence.push_field(unit),
                None => Ok(()),
            }
        })
    }

    /// Appends seconds since midnight as `hhmmss.ss`.
    pub fn add_time_field(&mut self, seconds: f64) -> Result<(), SentenceError> {
        self.add_double_field(
            nmea_time_from_seconds(seconds),
            1.0,
            NumberFormat::TIME,
            None,
        )
    }

    /// Appends days since 1970-01-01 as `ddmmyy`.
    pub fn add_days_field(&mut self, days: u32) -> Result<(), SentenceError> {
        match date_from_days(days) {
            Some(date) => self.push_field(&format!(
                "{:02}{:02}{:02}",
                date.day(),
                u8::from(date.month()),
                date.year().rem_euclid(100)
            )),
            None => self.add_empty_field(),
        }
    }

    /// Appends a latitude in signed degrees as `ddmm.mmm,N|S`.
    pub fn add_latitude_field(&mut self, degrees: f64) -> Result<(), SentenceError> {
        self.add_latitude_field_with(degrees, NumberFormat::COORDINATE_DECIMALS)
    }

    /// Appends a latitude with `decimals` digits of minutes.
    pub fn add_latitude_field_with(&mut self, degrees: f64, decimals: usize) -> Result<(), SentenceError> {
        self.add_coordinate(degrees, 2, decimals, ('N', 'S'))
    }

    /// Appends a longitude in signed degrees as `dddmm.mmm,E|W`.
    pub fn add_longitude_field(&mut self, degrees: f64) -> Result<(), SentenceError> {
        self.add_longitude_field_with(degrees, NumberFormat::COORDINATE_DECIMALS)
    }

    /// Appends a longitude with `decimals` digits of minutes.
    pub fn add_longitude_field_with(&mut self, degrees: f64, decimals: usize) -> Result<(), SentenceError> {
        self.add_coordinate(degrees, 3, decimals, ('E', 'W'))
    }

    fn add_coordinate(
        &mut self,
        degrees: f64,
        degree_digits: usize,
        decimals: usize,
        (positive, negative): (char, char),
    ) -> Result<(), SentenceError> {
        self.atomically(|sentence| {
            if degrees.is_na() || !degrees.is_finite() {
                sentence.add_empty_field()?;
                return sentence.add_empty_field();
            }

            // Round on total minutes so 59.9999' carries into the degrees.
            let scale = 10f64.powi(decimals as i32);
            let minutes = (degrees.abs() * 60.0 * scale).round() / scale;
            let whole_degrees = (minutes / 60.0).floor();
            let ddmm = whole_degrees * 100.0 + (minutes - whole_degrees * 60.0);

            let format = NumberFormat::zero_padded(degree_digits + 3 + decimals, decimals);
            sentence.push_field(&format.format(ddmm))?;
            sentence.add_char_field(if degrees < 0.0 { negative } else { positive })
        })
    }

    /// Serializes the sentence without line ending, using the running checksum.
    ///
    /// # Errors
    ///
    /// [`SentenceError::Empty`] if the sentence has not been initialized.
    pub fn serialize(&self) -> Result<String, SentenceError> {
        if self.is_empty() {
            return Err(SentenceError::Empty);
        }
        Ok(self.to_string())
    }

    /// Serializes the sentence followed by `\r\n`, ready for a transport.
    pub fn to_wire_bytes(&self) -> Result<Vec<u8>, SentenceError> {
        let mut wire = self.serialize()?;
        wire.push_str("\r\n");
        Ok(wire.into_bytes())
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}*{}",
            self.prefix.as_char(),
            self.content,
            format_checksum(self.checksum)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{checksum::append_checksum, na::DOUBLE_NA};

    #[test]
    fn test_parse_fixtures() {
        let valid = [
            ("$IIDPT,10.5,0.9*7D", "II", "DPT", 2),
            ("$IIDPT,10.5,0.9,100*60\r\n", "II", "DPT", 3),
            ("$GPZDA,160012.71,11,03,2004,-1,00*7D", "GP", "ZDA", 6),
            ("$GPWPL,5208.700,N,00438.600,E,MOLENB*4D", "GP", "WPL", 5),
            ("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C", "AI", "VDM", 6),
            ("$GPRMB,A,0.15,R,WOUBRG,WETERB,5213.400,N,00438.400,E,009.4,180.2,,V*07", "GP", "RMB", 13),
        ];

        for (raw, sender, type_code, count) in valid {
            let sentence = Sentence::parse(raw).unwrap();
            assert_eq!(sentence.sender(), sender, "{raw}");
            assert_eq!(sentence.type_code(), type_code, "{raw}");
            assert_eq!(sentence.field_count(), count, "{raw}");
            assert_eq!(sentence.serialize().unwrap(), raw.trim_end(), "{raw}");
        }
    }

    #[test]
    fn test_parse_errors() {
        let invalid = [
            ("", SentenceError::Empty),
            ("IIDPT,10.5,0.9*7D", SentenceError::InvalidPrefix('I')),
            ("$IIDPT,10.5,0.9", SentenceError::MissingChecksum),
            ("$IIDPT,10.5,0.9*7", SentenceError::InvalidChecksum),
            ("$IIDPT,10.5,0.9*7DX", SentenceError::InvalidChecksum),
            ("$IIDPT,1*2*", SentenceError::InvalidChecksum),
            ("$", SentenceError::MissingChecksum),
            ("!*00", SentenceError::MissingSender),
            (
                "$IIDPT,10.5,0.9*7C",
                SentenceError::ChecksumMismatch {
                    expected: 0x7D,
                    found: 0x7C,
                },
            ),
            (
                "$GPVTG,89.34,T,81.84,M,0.00,N,0.01,K*24",
                SentenceError::ChecksumMismatch {
                    expected: 0x4C,
                    found: 0x24,
                },
            ),
            ("$IIDPT°,1*00", SentenceError::NonAscii),
        ];

        for (raw, expected) in invalid {
            assert_eq!(Sentence::parse(raw), Err(expected), "{raw:?}");
        }

        let structural = [
            ("$I", SentenceError::MissingSender),
            ("$I,DPT,1", SentenceError::MissingSender),
            ("$IIDPT", SentenceError::MissingTypeSeparator),
            ("$II,1", SentenceError::InvalidTypeCode),
            ("$IIDPTDPTDPT,1", SentenceError::InvalidTypeCode),
        ];

        for (body, expected) in structural {
            let mut raw = String::from(body);
            append_checksum(&mut raw);
            assert_eq!(Sentence::parse(&raw), Err(expected), "{raw:?}");
        }
    }

    #[test]
    fn test_parse_into_clears_on_failure() {
        let mut sentence = Sentence::parse("$IIDPT,10.5,0.9*7D").unwrap();
        assert!(sentence.parse_into("$IIDPT,10.5,0.9*00").is_err());
        assert!(sentence.is_empty());
        assert_eq!(sentence.field_count(), 0);
        assert_eq!(sentence.checksum(), 0);
    }

    #[test]
    fn test_parse_into_keeps_receive_metadata() {
        let mut sentence = Sentence::new();
        sentence.set_source_id(2);
        sentence.set_received_at(1_500);

        sentence.parse_into("$IIDPT,10.5,0.9*7D").unwrap();
        assert_eq!(sentence.field(1), "0.9");
        assert_eq!((sentence.source_id(), sentence.received_at()), (2, 1_500));
        assert_eq!(sentence.serialize().unwrap(), "$IIDPT,10.5,0.9*7D");
    }

    #[test]
    fn test_field_access() {
        let sentence = Sentence::parse("$GPRMB,A,0.15,R,WOUBRG,WETERB,5213.400,N,00438.400,E,009.4,180.2,,V*07").unwrap();

        assert_eq!(sentence.field(3), "WOUBRG");
        assert_eq!(sentence.field_len(3), 6);
        assert_eq!(sentence.field(11), "");
        assert_eq!(sentence.field_len(11), 0);
        assert_eq!(sentence.field(12), "V");
        assert_eq!(sentence.field(13), "");
        assert_eq!(sentence.field(usize::MAX), "");
        assert_eq!(sentence.field_char(2), Some('R'));
        assert_eq!(sentence.get::<f64>(9), 9.4);
        assert!(sentence.get::<f64>(11).is_na());
        assert!(sentence.is_type("RMB"));
        assert!(!sentence.is_type("rmb"));
        assert_eq!(sentence.fields().count(), 13);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut once = Sentence::parse("$IIDPT,10.5,0.9*7D").unwrap();
        once.clear();
        let mut twice = once.clone();
        twice.clear();

        assert_eq!(once, twice);
        assert_eq!(once, Sentence::new());
        assert!(!once.is_type(""));
    }

    #[test]
    fn test_init_validation() {
        let mut sentence = Sentence::new();

        assert_eq!(sentence.init("DPT", "", Prefix::Talker), Ok(()));
        assert_eq!(sentence.sender(), DEFAULT_SENDER);

        let invalid = [
            ("DPT", "GPS", SentenceError::InvalidSender),
            ("DPT", "G", SentenceError::InvalidSender),
            ("DPT", "G,", SentenceError::InvalidSender),
            ("", "GP", SentenceError::InvalidTypeCode),
            ("ABCDEFGH", "GP", SentenceError::InvalidTypeCode),
            ("D,T", "GP", SentenceError::InvalidTypeCode),
        ];

        for (type_code, sender, expected) in invalid {
            assert_eq!(sentence.init(type_code, sender, Prefix::Talker), Err(expected));
            assert!(sentence.is_type("DPT"), "failed init must not change the sentence");
        }

        assert_eq!(Sentence::new().add_empty_field(), Err(SentenceError::Empty));
        assert_eq!(Sentence::new().serialize(), Err(SentenceError::Empty));
    }

    #[test]
    fn test_build_fields() {
        let mut sentence = Sentence::with_prefix("VDM", "AI", Prefix::Encapsulated).unwrap();
        sentence.add_u32_field(1).unwrap();
        sentence.add_u32_field(u32::NA).unwrap();
        sentence.add_i32_field(-1).unwrap();
        sentence.add_char_field('B').unwrap();
        sentence.add_double_field(DOUBLE_NA, 1.0, NumberFormat::DEFAULT, Some("M")).unwrap();
        sentence.add_double_field(f64::NAN, 1.0, NumberFormat::DEFAULT, None).unwrap();
        sentence.add_double_field(2.0, 0.5, NumberFormat::new(2), Some("N")).unwrap();

        let mut expected = String::from("!AIVDM,1,,-1,B,,M,,1.00,N");
        append_checksum(&mut expected);
        assert_eq!(sentence.serialize().unwrap(), expected);

        assert_eq!(
            sentence.add_str_field("a,b"),
            Err(SentenceError::InvalidFieldData)
        );
        assert_eq!(
            sentence.add_str_field("a*b"),
            Err(SentenceError::InvalidFieldData)
        );
    }

    #[test]
    fn test_time_days_and_coordinates() {
        let mut sentence = Sentence::with_type("GLL", "GP").unwrap();
        sentence.add_latitude_field(52.145).unwrap();
        sentence.add_longitude_field(-4.64).unwrap();
        sentence.add_latitude_field(DOUBLE_NA).unwrap();
        sentence.add_time_field(57597.0).unwrap();
        sentence.add_time_field(DOUBLE_NA).unwrap();
        sentence.add_days_field(16653).unwrap();
        sentence.add_days_field(u32::NA).unwrap();
        sentence.add_longitude_field(4.999_999_9).unwrap();

        let fields: Vec<&str> = sentence.fields().collect();
        assert_eq!(
            fields,
            [
                "5208.700", "N", "00438.400", "W", "", "", "155957.00", "", "060815", "",
                "00500.000", "E"
            ]
        );
    }

    #[test]
    fn test_time_field_carries_rounding() {
        let mut sentence = Sentence::with_type("ZDA", "GP").unwrap();
        sentence.add_time_field(59.996).unwrap();
        sentence.add_time_field(86399.994).unwrap();
        sentence.add_time_field(86399.999).unwrap();

        let fields: Vec<&str> = sentence.fields().collect();
        assert_eq!(fields, ["000100.00", "235959.99", "000000.00"]);
    }

    #[test]
    fn test_field_capacity() {
        let mut sentence = Sentence::with_type("XXX", "II").unwrap();
        for _ in 0..MAX_FIELDS {
            sentence.add_empty_field().unwrap();
        }
        let before = sentence.clone();

        assert_eq!(sentence.add_empty_field(), Err(SentenceError::CapacityExceeded));
        assert_eq!(sentence, before);

        let wire = sentence.serialize().unwrap();
        assert_eq!(Sentence::parse(&wire).unwrap().field_count(), MAX_FIELDS);

        let mut over = format!("$IIXXX{}", ",".repeat(MAX_FIELDS + 1));
        append_checksum(&mut over);
        assert_eq!(Sentence::parse(&over), Err(SentenceError::TooManyFields));
    }

    #[test]
    fn test_length_capacity() {
        // "$" + "IIXXX," + 71 + "*HH" is exactly 81 bytes
        let mut sentence = Sentence::with_type("XXX", "II").unwrap();
        sentence.add_str_field(&"A".repeat(71)).unwrap();
        let wire = sentence.serialize().unwrap();
        assert_eq!(wire.len(), MAX_SENTENCE_LEN);
        assert_eq!(Sentence::parse(&wire).unwrap(), sentence);

        // room for "1.0" but not for the unit after it
        let mut fits = Sentence::with_type("XXX", "II").unwrap();
        fits.add_str_field(&"A".repeat(66)).unwrap();
        let before = fits.clone();
        assert_eq!(
            fits.add_double_field(1.0, 1.0, NumberFormat::DEFAULT, Some("M")),
            Err(SentenceError::CapacityExceeded)
        );
        assert_eq!(fits, before, "multi-field append must roll back");

        let mut long = format!("$IIXXX,{}", "A".repeat(72));
        append_checksum(&mut long);
        assert_eq!(
            Sentence::parse(&long),
            Err(SentenceError::TooLong { len: 82 })
        );
    }
}
