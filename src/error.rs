//! # Error Types
//!
//! This module defines the error types used throughout the codec.
//!
//! Errors are split by layer:
//! - [`SentenceError`]: framing, structure and capacity problems of a single sentence.
//! - [`DecodeError`]: a sentence of the right type whose fields cannot be mapped to typed values.
//! - [`SendError`]: outbound backpressure from the framer's send ring.
//!
//! A sentence of the wrong type is never an error: decoders return `Ok(None)`.

use thiserror::Error;

/// Represents all possible errors that can occur while parsing or building a [`Sentence`].
///
/// [`Sentence`]: crate::Sentence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SentenceError {
    /// The provided input contains non-ASCII characters.
    ///
    /// Sentences must be ASCII-only for proper parsing and checksum calculation.
    #[error("sentence contains non-ASCII bytes")]
    NonAscii,

    /// The sentence is longer than the protocol allows.
    #[error("sentence is {len} bytes long, exceeding the 81-byte limit")]
    TooLong {
        /// Length of the offending input, line ending excluded.
        len: usize,
    },

    /// The sentence does not start with `$` or `!`.
    #[error("invalid sentence prefix {0:?}")]
    InvalidPrefix(char),

    /// The sentence ends before a two character sender could be read.
    #[error("sentence is missing its sender")]
    MissingSender,

    /// The sender is not exactly two ASCII characters.
    #[error("sender must be two ASCII characters")]
    InvalidSender,

    /// No comma follows the type code.
    #[error("type code is not followed by a comma")]
    MissingTypeSeparator,

    /// The type code is empty, too long or not alphanumeric.
    #[error("type code is empty, too long or not alphanumeric")]
    InvalidTypeCode,

    /// The sentence has no `*` checksum delimiter.
    #[error("sentence has no checksum")]
    MissingChecksum,

    /// The characters after `*` are not two hexadecimal digits, optionally followed by CRLF.
    #[error("checksum is not two hexadecimal digits")]
    InvalidChecksum,

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the expected checksum (calculated from the message content)
    /// and the actual checksum found in the message.
    #[error("checksum mismatch: calculated {expected:02X}, found {found:02X}")]
    ChecksumMismatch {
        /// The checksum calculated from the message content
        expected: u8,
        /// The checksum found in the message
        found: u8,
    },

    /// The sentence has more than 20 fields.
    #[error("sentence has more than 20 fields")]
    TooManyFields,

    /// Appending a field would exceed the field or byte capacity.
    #[error("sentence capacity exceeded")]
    CapacityExceeded,

    /// A field to append contains a delimiter or a non-ASCII character.
    #[error("field data contains delimiters or non-ASCII characters")]
    InvalidFieldData,

    /// The sentence has not been initialized with a type code.
    #[error("sentence is empty")]
    Empty,
}

/// Errors raised while mapping a sentence's fields to a typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The sentence type matched but it carries fewer fields than required.
    #[error("{type_code} needs at least {expected} fields, found {found}")]
    TooFewFields {
        /// Type code of the sentence.
        type_code: &'static str,
        /// Minimum field count.
        expected: usize,
        /// Actual field count.
        found: usize,
    },

    /// A unit indicator the codec does not understand.
    #[error("unknown unit {unit:?} in field {field}")]
    UnknownUnit {
        /// Field index.
        field: usize,
        /// The unit character found.
        unit: char,
    },

    /// A field that must be present is empty or malformed.
    #[error("field {field} is missing or malformed")]
    InvalidField {
        /// Field index.
        field: usize,
    },
}

/// Errors returned when queueing outbound data on a [`Framer`].
///
/// [`Framer`]: crate::framer::Framer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// The send ring cannot hold the whole message. Nothing was written or queued.
    #[error("send buffer full: need {needed} bytes, {available} available")]
    BufferFull {
        /// Bytes the message needs.
        needed: usize,
        /// Free bytes in the ring.
        available: usize,
    },

    /// The sentence could not be serialized.
    #[error(transparent)]
    Sentence(#[from] SentenceError),
}
