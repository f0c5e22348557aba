//! Byte-level transport polled by the [`Framer`](super::Framer).
//!
//! The framer never opens or closes a transport; it only asks what can be read
//! or written right now. Serial ports, sockets and files are adapted by the
//! caller. [`MemoryTransport`] is an in-memory implementation for loopback and
//! deterministic testing.

use std::collections::VecDeque;

/// Non-blocking byte source and sink.
pub trait Transport {
    /// Number of bytes that can be read without blocking.
    fn available(&self) -> usize;

    /// Reads one byte, or `None` when nothing is available.
    fn read_byte(&mut self) -> Option<u8>;

    /// Returns `true` if [`write`](Transport::write) can currently accept bytes.
    fn write_ready(&self) -> bool;

    /// Writes a prefix of `bytes` without blocking and returns how many bytes were taken.
    fn write(&mut self, bytes: &[u8]) -> usize;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn available(&self) -> usize {
        (**self).available()
    }

    fn read_byte(&mut self) -> Option<u8> {
        (**self).read_byte()
    }

    fn write_ready(&self) -> bool {
        (**self).write_ready()
    }

    fn write(&mut self, bytes: &[u8]) -> usize {
        (**self).write(bytes)
    }
}

/// In-memory transport with a receive queue and a captured output buffer.
///
/// Writes can be throttled to a number of bytes per call, or blocked entirely,
/// to reproduce a slow or busy link.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::framer::{MemoryTransport, Transport};
///
/// let mut transport = MemoryTransport::new();
/// transport.push_incoming(b"$");
/// assert_eq!(transport.available(), 1);
/// assert_eq!(transport.read_byte(), Some(b'$'));
///
/// transport.set_write_chunk(Some(2));
/// assert_eq!(transport.write(b"abc"), 2);
/// assert_eq!(transport.written(), b"ab");
/// ```
#[derive(Debug, Clone)]
pub struct MemoryTransport {
    incoming: VecDeque<u8>,
    outgoing: Vec<u8>,
    write_ready: bool,
    write_chunk: Option<usize>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        MemoryTransport {
            incoming: VecDeque::new(),
            outgoing: Vec::new(),
            write_ready: true,
            write_chunk: None,
        }
    }

    /// Queues bytes to be read.
    pub fn push_incoming(&mut self, bytes: &[u8]) {
        self.incoming.extend(bytes);
    }

    /// Everything written so far.
    pub fn written(&self) -> &[u8] {
        &self.outgoing
    }

    /// Takes everything written so far.
    pub fn take_written(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.outgoing)
    }

    pub fn set_write_ready(&mut self, ready: bool) {
        self.write_ready = ready;
    }

    /// Limits how many bytes a single write accepts. `None` removes the limit.
    pub fn set_write_chunk(&mut self, chunk: Option<usize>) {
        self.write_chunk = chunk;
    }
}

impl Default for MemoryTransport {
    fn default() -> Self {
        MemoryTransport::new()
    }
}

impl Transport for MemoryTransport {
    fn available(&self) -> usize {
        self.incoming.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.incoming.pop_front()
    }

    fn write_ready(&self) -> bool {
        self.write_ready
    }

    fn write(&mut self, bytes: &[u8]) -> usize {
        if !self.write_ready {
            return 0;
        }

        let count = self.write_chunk.map_or(bytes.len(), |chunk| chunk.min(bytes.len()));
        self.outgoing.extend_from_slice(&bytes[..count]);
        count
    }
}
