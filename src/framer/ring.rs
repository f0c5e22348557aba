/// Outbound FIFO byte ring.
///
/// Write at `head`, read at `tail`. One slot stays unused so that a full ring
/// and an empty ring have different cursor positions.
#[derive(Debug, Clone)]
pub struct SendRing {
    buf: Box<[u8]>,
    head: usize,
    tail: usize,
}

impl SendRing {
    /// Creates a ring of `size` bytes, of which `size - 1` are usable.
    pub fn new(size: usize) -> Self {
        SendRing {
            buf: vec![0; size.max(2)].into_boxed_slice(),
            head: 0,
            tail: 0,
        }
    }

    /// Usable capacity.
    pub fn capacity(&self) -> usize {
        self.buf.len() - 1
    }

    pub fn len(&self) -> usize {
        (self.head + self.buf.len() - self.tail) % self.buf.len()
    }

    pub fn free(&self) -> usize {
        self.capacity() - self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Queues all of `bytes`, or nothing if they do not fit. The error carries the free space.
    pub fn push_slice(&mut self, bytes: &[u8]) -> Result<(), usize> {
        let free = self.free();
        if bytes.len() > free {
            return Err(free);
        }

        let first = bytes.len().min(self.buf.len() - self.head);
        self.buf[self.head..self.head + first].copy_from_slice(&bytes[..first]);
        self.buf[..bytes.len() - first].copy_from_slice(&bytes[first..]);
        self.head = (self.head + bytes.len()) % self.buf.len();

        Ok(())
    }

    /// The oldest contiguous run of queued bytes.
    pub fn front(&self) -> &[u8] {
        if self.head >= self.tail {
            &self.buf[self.tail..self.head]
        } else {
            &self.buf[self.tail..]
        }
    }

    /// Drops the `count` oldest bytes.
    pub fn consume(&mut self, count: usize) {
        let count = count.min(self.len());
        self.tail = (self.tail + count) % self.buf.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(ring: &mut SendRing) -> Vec<u8> {
        let mut out = Vec::new();
        while !ring.is_empty() {
            let front = ring.front().to_vec();
            out.extend_from_slice(&front);
            ring.consume(front.len());
        }
        out
    }

    #[test]
    fn test_capacity_reserves_one_slot() {
        let mut ring = SendRing::new(8);
        assert_eq!(ring.capacity(), 7);
        assert_eq!(ring.push_slice(b"12345678"), Err(7));
        assert!(ring.is_empty());

        ring.push_slice(b"1234567").unwrap();
        assert_eq!(ring.free(), 0);
        assert_eq!(ring.push_slice(b"8"), Err(0));
        assert_eq!(drain(&mut ring), b"1234567");
    }

    #[test]
    fn test_wraps_in_fifo_order() {
        let mut ring = SendRing::new(8);
        ring.push_slice(b"abcde").unwrap();
        ring.consume(3);
        ring.push_slice(b"fghij").unwrap();

        assert_eq!(ring.len(), 7);
        assert_eq!(ring.front(), b"defgh");
        assert_eq!(drain(&mut ring), b"defghij");
    }

    #[test]
    fn test_consume_clamps() {
        let mut ring = SendRing::new(4);
        ring.push_slice(b"ab").unwrap();
        ring.consume(10);
        assert!(ring.is_empty());
        assert_eq!(ring.free(), 3);
    }
}
