//! # Checksum
//!
//! XOR checksum over the sentence content (everything between the `$`/`!` prefix
//! and the `*` delimiter) and its two-digit uppercase hex representation.

use nom::{
    IResult, Parser,
    bytes::complete::{tag, take},
    character::complete::{char, hex_digit1},
    combinator::{all_consuming, eof, opt},
    number::complete::hex_u32,
};

/// Calculates the NMEA 0183 checksum for the given message content.
///
/// The checksum is the XOR of all bytes in the content. The content excludes the
/// prefix character and the `*HH` suffix.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::checksum::checksum;
///
/// assert_eq!(checksum(b"GPGGA,123456,data"), 0x41);
/// ```
pub fn checksum(content: &[u8]) -> u8 {
    content
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum as two uppercase hexadecimal digits.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::checksum::format_checksum;
///
/// assert_eq!(format_checksum(0x0a), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Appends `*HH` to a sentence that starts with its prefix character.
///
/// The checksum covers every byte after the first one.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::checksum::append_checksum;
///
/// let mut sentence = String::from("$IIDPT,10.5,0.9");
/// append_checksum(&mut sentence);
/// assert_eq!(sentence, "$IIDPT,10.5,0.9*7D");
/// ```
pub fn append_checksum(sentence: &mut String) {
    let cc = checksum(sentence.as_bytes().get(1..).unwrap_or_default());
    sentence.push('*');
    sentence.push_str(&format_checksum(cc));
}

/// Parses the `*HH` suffix of a sentence, optionally followed by CRLF, and nothing else.
///
/// Hex digits are accepted in either case.
pub(crate) fn checksum_suffix(i: &str) -> IResult<&str, u8> {
    let (i, _) = char('*').parse(i)?;
    let (i, digits) = take(2u8).parse(i)?;
    let (_, digits) = all_consuming(hex_digit1).parse(digits)?;
    let (_, cc) = hex_u32.map(|cc| cc as u8).parse(digits)?;
    let (i, _) = opt(tag("\r\n")).parse(i)?;
    let (i, _) = eof.parse(i)?;

    Ok((i, cc))
}
