//! # Streaming framer
//!
//! [`Framer`] extracts checksum-validated [`Sentence`]s from a fragmented byte
//! stream and queues outbound sentences for a transport that may not accept
//! everything at once.
//!
//! It is driven by polling: each call to [`Framer::run_once`] drains the bytes
//! currently available, hands every valid sentence to a [`SentenceHandler`],
//! and writes as much queued output as the transport accepts. Nothing blocks.
//!
//! ```text
//!          $ or !              *             2 bytes
//!  Idle ----------> Receiving ---> ChecksumPending ---> Idle (parse)
//!   ^                  |                  |
//!   +---- overflow ----+---- overflow ----+
//! ```
//!
//! A `$` or `!` in any state restarts framing with a fresh buffer.

mod ring;
mod transport;

pub use ring::SendRing;
pub use transport::{MemoryTransport, Transport};

use tracing::{debug, trace, warn};

use crate::{
    SendError, Sentence, SentenceError,
    sentence::MAX_SENTENCE_LEN,
};

/// Default size of the outbound ring: room for three full sentences.
pub const DEFAULT_SEND_BUFFER_SIZE: usize = 3 * MAX_SENTENCE_LEN;

/// Source of receive timestamps, read once per completed sentence.
pub type Clock = fn() -> u64;

/// Receives every validated inbound sentence.
///
/// Implemented for any `FnMut(Sentence)`. Handlers must not block.
pub trait SentenceHandler {
    fn handle(&mut self, sentence: Sentence);
}

impl<F: FnMut(Sentence)> SentenceHandler for F {
    fn handle(&mut self, sentence: Sentence) {
        self(sentence)
    }
}

/// Receive state of a [`Framer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramerState {
    /// Waiting for `$` or `!`.
    Idle,
    /// Between the start character and `*`.
    Receiving,
    /// After `*`, waiting for the remaining checksum digits.
    ChecksumPending {
        /// Checksum digits still expected.
        remaining: u8,
    },
}

/// Builder for a [`Framer`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::framer::{FramerBuilder, MemoryTransport};
///
/// let framer = FramerBuilder::new()
///     .send_buffer_size(512)
///     .source_id(3)
///     .build(MemoryTransport::new());
/// assert_eq!(framer.send_capacity(), 511);
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct FramerBuilder {
    /// Size of the outbound ring in bytes.
    send_buffer_size: usize,

    /// Identifier stamped onto every received sentence.
    source_id: u8,

    clock: Option<Clock>,
}

impl FramerBuilder {
    /// Creates a builder with default settings.
    ///
    /// The default settings are:
    /// - Send buffer size: [`DEFAULT_SEND_BUFFER_SIZE`]
    /// - Source id: `0`
    /// - Clock: none, received sentences carry time `0`
    pub fn new() -> Self {
        FramerBuilder {
            send_buffer_size: DEFAULT_SEND_BUFFER_SIZE,
            source_id: 0,
            clock: None,
        }
    }

    /// Sets the outbound ring size. One byte of it is reserved.
    pub fn send_buffer_size(mut self, size: usize) -> Self {
        self.send_buffer_size = size;
        self
    }

    /// Sets the source id stamped onto received sentences.
    pub fn source_id(mut self, source_id: u8) -> Self {
        self.source_id = source_id;
        self
    }

    /// Sets the clock whose reading is stamped onto received sentences.
    ///
    /// The unit is up to the caller, milliseconds of a monotonic clock being typical.
    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Builds a framer that polls `transport`.
    pub fn build<T: Transport>(self, transport: T) -> Framer<T> {
        Framer {
            transport,
            state: FramerState::Idle,
            recv: heapless::Vec::new(),
            send: SendRing::new(self.send_buffer_size),
            source_id: self.source_id,
            clock: self.clock,
        }
    }
}

impl Default for FramerBuilder {
    fn default() -> Self {
        FramerBuilder::new()
    }
}

/// Streaming sentence framer over a [`Transport`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::{Sentence, framer::{Framer, MemoryTransport}};
///
/// let mut transport = MemoryTransport::new();
/// transport.push_incoming(b"noise$IIDPT,10.5,0.9*7D\r\n$IIDPT,1");
///
/// let mut framer = Framer::new(transport);
/// let mut received = Vec::new();
/// framer.run_once(&mut |sentence: Sentence| received.push(sentence));
///
/// assert_eq!(received.len(), 1);
/// assert_eq!(received[0].field(0), "10.5");
/// ```
#[derive(Debug)]
pub struct Framer<T> {
    transport: T,
    state: FramerState,
    recv: heapless::Vec<u8, MAX_SENTENCE_LEN>,
    send: SendRing,
    source_id: u8,
    clock: Option<Clock>,
}

impl<T: Transport> Framer<T> {
    /// Creates a framer with default settings.
    pub fn new(transport: T) -> Self {
        FramerBuilder::new().build(transport)
    }

    pub fn state(&self) -> FramerState {
        self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consumes the framer, returning the transport. Queued output is discarded.
    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Advances the receive state machine by one byte.
    ///
    /// Returns `None` while no sentence is complete, and the parse result once
    /// the second checksum digit arrives. A receive buffer overflow returns
    /// [`SentenceError::TooLong`] and resets to [`FramerState::Idle`].
    pub fn feed_byte(&mut self, byte: u8) -> Option<Result<Sentence, SentenceError>> {
        if byte == b'$' || byte == b'!' {
            if self.state != FramerState::Idle {
                trace!(discarded = self.recv.len(), "sentence restarted");
            }
            self.recv.clear();
            self.state = FramerState::Receiving;
            if self.recv.push(byte).is_err() {
                return Some(Err(self.overflow()));
            }
            return None;
        }

        match self.state {
            FramerState::Idle => None,
            FramerState::Receiving => {
                if self.recv.push(byte).is_err() {
                    return Some(Err(self.overflow()));
                }
                if byte == b'*' {
                    self.state = FramerState::ChecksumPending { remaining: 2 };
                }
                None
            }
            FramerState::ChecksumPending { remaining } => {
                if self.recv.push(byte).is_err() {
                    return Some(Err(self.overflow()));
                }
                if remaining > 1 {
                    self.state = FramerState::ChecksumPending {
                        remaining: remaining - 1,
                    };
                    return None;
                }

                self.state = FramerState::Idle;
                let result = std::str::from_utf8(&self.recv)
                    .map_err(|_| SentenceError::NonAscii)
                    .and_then(Sentence::parse)
                    .map(|mut sentence| {
                        sentence.set_source_id(self.source_id);
                        sentence.set_received_at(self.clock.map_or(0, |clock| clock()));
                        sentence
                    });
                self.recv.clear();
                Some(result)
            }
        }
    }

    fn overflow(&mut self) -> SentenceError {
        warn!(limit = MAX_SENTENCE_LEN, "receive buffer overflow, sentence discarded");
        self.recv.clear();
        self.state = FramerState::Idle;
        SentenceError::TooLong {
            len: MAX_SENTENCE_LEN + 1,
        }
    }

    /// Reads available bytes until one valid sentence is complete or the transport runs dry.
    ///
    /// Malformed sentences are logged and dropped.
    pub fn try_get_sentence(&mut self) -> Option<Sentence> {
        while self.transport.available() > 0 {
            let byte = self.transport.read_byte()?;

            match self.feed_byte(byte) {
                Some(Ok(sentence)) => return Some(sentence),
                Some(Err(error)) => debug!(%error, "dropping framed sentence"),
                None => {}
            }
        }

        None
    }

    /// Drains all available input into `handler`, then flushes queued output.
    ///
    /// Returns the number of sentences handed to `handler`.
    pub fn run_once<H>(&mut self, handler: &mut H) -> usize
    where
        H: SentenceHandler + ?Sized,
    {
        let mut handled = 0;
        while let Some(sentence) = self.try_get_sentence() {
            trace!(type_code = sentence.type_code(), "dispatching sentence");
            handler.handle(sentence);
            handled += 1;
        }

        self.flush();
        handled
    }

    /// Serializes `sentence` with CRLF and sends or queues it.
    ///
    /// # Errors
    ///
    /// See [`enqueue_bytes`](Framer::enqueue_bytes). An uninitialized sentence gives
    /// [`SendError::Sentence`].
    pub fn enqueue_send(&mut self, sentence: &Sentence) -> Result<(), SendError> {
        let wire = sentence.to_wire_bytes()?;
        self.enqueue_bytes(&wire)
    }

    /// Sends `bytes` as one unit.
    ///
    /// Queued output is flushed first. If the ring is then empty and the
    /// transport is ready, bytes are written directly and any remainder is
    /// queued; otherwise everything is queued behind the pending output.
    ///
    /// # Errors
    ///
    /// [`SendError::BufferFull`] when `bytes` is larger than the free ring space.
    /// In that case nothing is written or queued.
    pub fn enqueue_bytes(&mut self, bytes: &[u8]) -> Result<(), SendError> {
        self.flush();

        let available = self.send.free();
        if bytes.len() > available {
            warn!(needed = bytes.len(), available, "send buffer full");
            return Err(SendError::BufferFull {
                needed: bytes.len(),
                available,
            });
        }

        let mut rest = bytes;
        if self.send.is_empty() && self.transport.write_ready() {
            let written = self.transport.write(bytes).min(bytes.len());
            rest = &bytes[written..];
        }

        self.send
            .push_slice(rest)
            .map_err(|available| SendError::BufferFull {
                needed: rest.len(),
                available,
            })
    }

    /// Writes queued output while the transport accepts it. Returns the bytes written.
    pub fn flush(&mut self) -> usize {
        let mut total = 0;

        while !self.send.is_empty() && self.transport.write_ready() {
            let front = self.send.front();
            let written = self.transport.write(front).min(front.len());
            if written == 0 {
                break;
            }
            self.send.consume(written);
            total += written;
        }

        total
    }

    /// Bytes waiting in the send ring.
    pub fn pending_send(&self) -> usize {
        self.send.len()
    }

    /// Usable size of the send ring.
    pub fn send_capacity(&self) -> usize {
        self.send.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(framer: &mut Framer<MemoryTransport>, bytes: &[u8]) -> Vec<Result<Sentence, SentenceError>> {
        bytes.iter().filter_map(|&b| framer.feed_byte(b)).collect()
    }

    #[test]
    fn test_state_transitions() {
        let mut framer = Framer::new(MemoryTransport::new());
        let steps = [
            (b'x', FramerState::Idle),
            (b'$', FramerState::Receiving),
            (b'I', FramerState::Receiving),
            (b'*', FramerState::ChecksumPending { remaining: 2 }),
            (b'0', FramerState::ChecksumPending { remaining: 1 }),
            (b'0', FramerState::Idle),
        ];

        for (byte, state) in steps {
            framer.feed_byte(byte);
            assert_eq!(framer.state(), state, "after {:?}", byte as char);
        }
    }

    #[test]
    fn test_start_character_restarts() {
        let mut framer = Framer::new(MemoryTransport::new());
        let results = feed_all(&mut framer, b"$IIDPT,10.5,0.$IIDPT,10.5,0.9*7D");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].as_ref().map(Sentence::type_code), Ok("DPT"));
    }

    #[test]
    fn test_restart_during_checksum() {
        let mut framer = Framer::new(MemoryTransport::new());
        let results = feed_all(&mut framer, b"$IIDPT,1*$IIDPT,10.5,0.9*7D");

        assert_eq!(results.len(), 1);
        assert!(results[0].is_ok());
    }

    #[test]
    fn test_overflow_resets() {
        let mut framer = Framer::new(MemoryTransport::new());
        let mut stream = vec![b'$'];
        stream.extend(std::iter::repeat_n(b'A', MAX_SENTENCE_LEN));
        stream.extend_from_slice(b"*00$IIDPT,10.5,0.9*7D");

        let results = feed_all(&mut framer, &stream);
        assert_eq!(
            results[0],
            Err(SentenceError::TooLong {
                len: MAX_SENTENCE_LEN + 1
            })
        );
        assert_eq!(results.len(), 2);
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_source_id_is_stamped() {
        let mut framer = FramerBuilder::new()
            .source_id(7)
            .build(MemoryTransport::new());
        let results = feed_all(&mut framer, b"$IIDPT,10.5,0.9*7D");

        assert_eq!(results[0].as_ref().map(Sentence::source_id), Ok(7));
    }

    #[test]
    fn test_receive_time_is_stamped() {
        fn clock() -> u64 {
            42_000
        }

        let mut clocked = FramerBuilder::new().clock(clock).build(MemoryTransport::new());
        let results = feed_all(&mut clocked, b"$IIDPT,10.5,0.9*7D");
        assert_eq!(results[0].as_ref().map(Sentence::received_at), Ok(42_000));

        let mut unclocked = Framer::new(MemoryTransport::new());
        let results = feed_all(&mut unclocked, b"$IIDPT,10.5,0.9*7D");
        assert_eq!(results[0].as_ref().map(Sentence::received_at), Ok(0));
    }

    #[test]
    fn test_start_character_after_overflow() {
        let mut framer = Framer::new(MemoryTransport::new());
        let mut stream = vec![b'$'];
        stream.extend(std::iter::repeat_n(b'A', MAX_SENTENCE_LEN + 5));
        stream.extend_from_slice(b"$IIDPT,10.5,0.9*7D");

        let results = feed_all(&mut framer, &stream);
        assert_eq!(results.len(), 2);
        assert!(results[0].is_err());
        assert_eq!(results[1].as_ref().map(Sentence::field_count), Ok(2));
    }

    #[test]
    fn test_direct_write_when_idle() {
        let mut framer = Framer::new(MemoryTransport::new());
        let sentence = Sentence::parse("$IIDPT,10.5,0.9*7D").unwrap();

        framer.enqueue_send(&sentence).unwrap();
        assert_eq!(framer.pending_send(), 0);
        assert_eq!(framer.transport().written(), b"$IIDPT,10.5,0.9*7D\r\n");
    }

    #[test]
    fn test_partial_write_queues_remainder() {
        let mut transport = MemoryTransport::new();
        transport.set_write_chunk(Some(4));
        let mut framer = Framer::new(transport);

        framer.enqueue_bytes(b"0123456789").unwrap();
        assert_eq!(framer.transport().written(), b"0123");
        assert_eq!(framer.pending_send(), 6);

        framer.transport_mut().set_write_chunk(None);
        assert_eq!(framer.flush(), 6);
        assert_eq!(framer.transport().written(), b"0123456789");
    }

    #[test]
    fn test_queue_preserves_order_while_blocked() {
        let mut transport = MemoryTransport::new();
        transport.set_write_ready(false);
        let mut framer = Framer::new(transport);

        framer.enqueue_bytes(b"first,").unwrap();
        framer.enqueue_bytes(b"second").unwrap();
        assert!(framer.transport().written().is_empty());

        framer.transport_mut().set_write_ready(true);
        framer.flush();
        assert_eq!(framer.transport().written(), b"first,second");
    }

    #[test]
    fn test_buffer_full_is_atomic() {
        let mut transport = MemoryTransport::new();
        transport.set_write_ready(false);
        let mut framer = FramerBuilder::new()
            .send_buffer_size(11)
            .build(transport);

        framer.enqueue_bytes(b"12345678").unwrap();
        assert_eq!(
            framer.enqueue_bytes(b"abc"),
            Err(SendError::BufferFull {
                needed: 3,
                available: 2
            })
        );
        assert_eq!(framer.pending_send(), 8);

        framer.transport_mut().set_write_ready(true);
        framer.flush();
        assert_eq!(framer.transport().written(), b"12345678");
    }

    #[test]
    fn test_empty_sentence_is_rejected() {
        let mut framer = Framer::new(MemoryTransport::new());
        assert_eq!(
            framer.enqueue_send(&Sentence::new()),
            Err(SendError::Sentence(SentenceError::Empty))
        );
    }
}
