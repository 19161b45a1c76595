use std::io;
use std::ops::Range;

use resp_wire::{ObjectKind, scan};

use crate::config::ReaderConfig;
use crate::error::ReadError;

/// Fixed-capacity read buffer with a sticky error slot.
///
/// Shared by the blocking and async readers; the only thing they add is
/// the call into their source. Layout:
///
/// ```text
///   0          r                w                 capacity
///   ├──────────┼────────────────┼─────────────────┤
///   │ consumed │ unread objects │ free tail       │
///   └──────────┴────────────────┴─────────────────┘
/// ```
///
/// Invariant: `0 <= r <= w <= capacity`. Consumed bytes are reclaimed
/// lazily by compacting `buf[r..w]` to the front before the next read.
pub(crate) struct ObjectBuffer {
    buf: Box<[u8]>,
    r: usize,
    w: usize,
    err: Option<ReadError>,
    max_depth: usize,
}

impl ObjectBuffer {
    pub(crate) fn new(config: &ReaderConfig) -> Self {
        Self {
            buf: vec![0u8; config.effective_capacity()].into_boxed_slice(),
            r: 0,
            w: 0,
            err: None,
            max_depth: config.max_depth,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of unread bytes.
    pub(crate) fn buffered(&self) -> usize {
        self.w - self.r
    }

    /// Scan for a complete object at the read cursor.
    ///
    /// Returns the absolute end offset of the object, or `None` when more
    /// bytes are needed or the bytes are malformed. A syntax error is
    /// parked in the sticky slot rather than returned.
    pub(crate) fn scan(&mut self) -> Option<usize> {
        match scan(&self.buf[self.r..self.w], 0, self.max_depth) {
            Ok(Some(len)) => Some(self.r + len),
            Ok(None) => None,
            Err(e) => {
                self.err = Some(ReadError::Syntax(e));
                None
            }
        }
    }

    /// Hand out `buf[r..end]` and advance the read cursor past it.
    pub(crate) fn take(&mut self, end: usize) -> &[u8] {
        let start = self.r;
        self.r = end;
        let object = &self.buf[start..end];
        tracing::debug!(
            len = object.len(),
            kind = ?ObjectKind::of(object),
            buffered = self.w - self.r,
            "read object"
        );
        object
    }

    /// Make room for one source read and return the free tail.
    ///
    /// Returns `None` without touching the source when an error is
    /// already pending, or when the unread bytes fill the buffer (which
    /// records [`ReadError::BufferFull`]).
    pub(crate) fn prepare_fill(&mut self) -> Option<&mut [u8]> {
        if self.err.is_some() {
            return None;
        }

        let capacity = self.capacity();
        if self.buffered() >= capacity - 1 {
            self.err = Some(ReadError::BufferFull { capacity });
            return None;
        }

        if self.r > 0 {
            tracing::trace!(shift = self.r, buffered = self.buffered(), "compacting buffer");
            self.buf.copy_within(self.r..self.w, 0);
            self.w -= self.r;
            self.r = 0;
        }

        Some(&mut self.buf[self.w..])
    }

    /// Record the outcome of the read issued into [`prepare_fill`]'s tail.
    ///
    /// `Ok(0)` is end of stream. Any error other than
    /// [`io::ErrorKind::Interrupted`] becomes the sticky error.
    ///
    /// An interrupted read counts as zero bytes with no error, so the next
    /// loop turn reads again. This is the only retry the reader makes: every
    /// other failure is reported once and never retried.
    ///
    /// # Panics
    ///
    /// Panics if the source claims more bytes than the tail could hold.
    ///
    /// [`prepare_fill`]: Self::prepare_fill
    pub(crate) fn commit(&mut self, result: io::Result<usize>) {
        match result {
            Ok(0) => {
                tracing::trace!(buffered = self.buffered(), "source reached end of stream");
                self.err = Some(ReadError::EndOfStream);
            }
            Ok(n) => {
                assert!(
                    n <= self.capacity() - self.w,
                    "source reported {n} bytes read into a smaller buffer"
                );
                self.w += n;
                tracing::trace!(read = n, buffered = self.buffered(), "filled buffer");
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => {
                tracing::trace!(error = %e, "source read failed");
                self.err = Some(ReadError::Io(e));
            }
        }
    }

    /// Return and clear the sticky error.
    pub(crate) fn consume_error(&mut self) -> Option<ReadError> {
        self.err.take()
    }

    /// Drop every unread byte, returning where they were.
    ///
    /// The bytes stay physically in the buffer until the next fill, so the
    /// returned range can still be viewed through [`bytes`](Self::bytes).
    pub(crate) fn reset(&mut self) -> Range<usize> {
        let leftover = self.r..self.w;
        self.r = 0;
        self.w = 0;
        leftover
    }

    pub(crate) fn bytes(&self, range: Range<usize>) -> &[u8] {
        &self.buf[range]
    }
}
