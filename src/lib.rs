//! # NMEA 0183 Codec
//!
//! This library reads and writes NMEA 0183 sentences of the form:
//! `$TTSSS,D1,D2,...,Dn*CC\r\n` (or `!` for encapsulated AIS data)
//!
//! It is layered:
//! - [`framer`]: extracts checksum-validated sentences from a fragmented byte
//!   stream and queues outbound bytes for a non-blocking transport
//! - [`Sentence`]: a bounded, parsed or built sentence with field access
//! - [`messages`]: typed decode/encode per sentence type, in SI units
//!
//! Missing values are represented by NA sentinels, see [`na`].
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_codec::{Decode, Encode, Sentence, messages::DPT};
//!
//! let sentence = Sentence::parse("$IIDPT,10.5,0.9*7D\r\n").unwrap();
//! let dpt = DPT::decode(&sentence).unwrap().unwrap();
//! assert_eq!(dpt.depth_below_transducer, 10.5);
//!
//! let rebuilt = dpt.encode("II").unwrap();
//! assert_eq!(rebuilt.serialize().unwrap(), "$IIDPT,10.5,0.9*7D");
//! ```

pub mod checksum;
pub mod datetime;
pub mod error;
pub mod framer;
pub mod messages;
pub mod na;
pub mod parse;
pub mod sentence;
pub mod units;

pub use error::{DecodeError, SendError, SentenceError};
pub use framer::{Framer, FramerBuilder, MemoryTransport, SentenceHandler, Transport};
pub use messages::{Decode, Encode, Message};
pub use na::NotAvailable;
pub use sentence::{NumberFormat, Prefix, Sentence};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    mod framer_stream;
    mod round_trip;
}
