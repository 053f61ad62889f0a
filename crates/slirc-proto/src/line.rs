//! CRLF line framing over a fixed-capacity receive buffer.
//!
//! [`LineBuffer`] owns the bytes read from the socket. [`LineBuffer::drain`]
//! hands out complete lines as slices borrowed from that buffer; the
//! terminating `\r\n` is not part of the slice. Consumed bytes are released
//! lazily: the next `feed` or `drain` moves the unconsumed tail to the front
//! of the buffer. Because both take `&mut self`, no line slice can survive
//! that move.
//!
//! ```
//! use slirc_proto::line::LineBuffer;
//!
//! let mut buf = LineBuffer::with_capacity(64);
//! buf.feed(b"PING :a\r\nPI").unwrap();
//! assert_eq!(buf.drain().collect::<Vec<_>>(), vec![&b"PING :a"[..]]);
//!
//! buf.feed(b"NG :b\r\n").unwrap();
//! assert_eq!(buf.drain().collect::<Vec<_>>(), vec![&b"PING :b"[..]]);
//! ```

use std::iter::FusedIterator;

use bytes::{Buf, BytesMut};

use crate::error::FrameError;

/// Default receive capacity in bytes.
pub const DEFAULT_RECV_CAPACITY: usize = 2048;

/// Line terminator.
pub const CRLF: &[u8] = b"\r\n";

/// Find the offset of the first `\r\n` in `buf`.
///
/// Returns the position of the `\r` byte.
pub fn find_crlf(buf: &[u8]) -> Option<usize> {
    buf.windows(2).position(|w| w == CRLF)
}

/// Fixed-capacity reassembly buffer for a CRLF-delimited byte stream.
///
/// The number of unconsumed bytes never exceeds `capacity`. A stream that
/// fills the buffer without ever producing a `\r\n` cannot make progress;
/// [`feed`](Self::feed) reports that as [`FrameError::BufferOverflow`].
#[derive(Debug)]
pub struct LineBuffer {
    buffer: BytesMut,
    capacity: usize,
    /// Bytes at the front of `buffer` already handed out as lines.
    consumed: usize,
}

impl LineBuffer {
    /// Create a buffer with [`DEFAULT_RECV_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_RECV_CAPACITY)
    }

    /// Create a buffer holding at most `capacity` unconsumed bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
            capacity,
            consumed: 0,
        }
    }

    /// Maximum number of unconsumed bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes held that have not been handed out as a line yet.
    #[inline]
    pub fn pending(&self) -> usize {
        self.buffer.len() - self.consumed
    }

    /// Bytes that can still be fed before the buffer is full.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.pending()
    }

    /// Whether there is no pending partial data.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending() == 0
    }

    /// The pending partial line.
    pub fn pending_bytes(&self) -> &[u8] {
        &self.buffer[self.consumed..]
    }

    /// Append newly read bytes.
    ///
    /// On overflow nothing is appended and the buffer is left as it was.
    pub fn feed(&mut self, bytes: &[u8]) -> Result<(), FrameError> {
        self.compact();

        if bytes.len() > self.remaining() {
            return Err(FrameError::BufferOverflow {
                pending: self.pending(),
                incoming: bytes.len(),
                capacity: self.capacity,
            });
        }

        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    /// Iterate over the complete lines currently buffered.
    ///
    /// Lines not pulled from the iterator stay buffered for the next call.
    pub fn drain(&mut self) -> Lines<'_> {
        self.compact();
        Lines {
            data: &self.buffer[..],
            pos: 0,
            consumed: &mut self.consumed,
        }
    }

    /// Drop all buffered data.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.consumed = 0;
    }

    /// Move the unconsumed tail to the front of the buffer.
    fn compact(&mut self) {
        if self.consumed > 0 {
            self.buffer.advance(self.consumed);
            self.consumed = 0;
        }
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lines yielded by [`LineBuffer::drain`].
///
/// Each item is one line without its `\r\n`. An empty line (`\r\n\r\n`)
/// is yielded as an empty slice.
#[derive(Debug)]
pub struct Lines<'a> {
    data: &'a [u8],
    pos: usize,
    consumed: &'a mut usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let data: &'a [u8] = self.data;
        let rest = &data[self.pos..];
        let end = find_crlf(rest)?;

        let line = &rest[..end];
        self.pos += end + CRLF.len();
        *self.consumed = self.pos;
        Some(line)
    }
}

impl FusedIterator for Lines<'_> {}
