use std::io::Read;

use bytes::Bytes;

use crate::buffer::ObjectBuffer;
use crate::config::ReaderConfig;
use crate::error::ReadFailure;

/// Buffered RESP object reader over a blocking [`Read`] source.
///
/// Each call returns exactly one complete object, tag byte through final
/// CRLF, with no re-encoding. The reader pulls bytes into a fixed-size
/// buffer until the object at the read cursor is complete:
///
/// ```text
///   SCAN ──found──────────────────────────▶ DONE
///    │  ▲
///    │  └── FILL (one source read) ◀── need more
///    │
///    └──fatal (syntax / buffer full / source)──▶ ERROR (buffer reset)
/// ```
///
/// Errors are fatal. After one is returned the buffered bytes are gone
/// and the next read starts from whatever the source yields next, which
/// is almost never an object boundary.
///
/// # Example
///
/// ```rust
/// use resp_reader::RespReader;
///
/// let wire: &[u8] = b"*2\r\n$3\r\nGET\r\n$1\r\nk\r\n+OK\r\n";
/// let mut reader = RespReader::new(wire);
///
/// assert_eq!(reader.read_slice().unwrap(), b"*2\r\n$3\r\nGET\r\n$1\r\nk\r\n");
/// let ok = reader.read_bytes().unwrap();
/// assert_eq!(&ok[..], b"+OK\r\n");
/// assert!(reader.read_slice().unwrap_err().is_clean_eof());
/// ```
pub struct RespReader<R> {
    reader: R,
    buffer: ObjectBuffer,
    config: ReaderConfig,
    finished: bool,
}

impl<R: Read> RespReader<R> {
    /// Create a reader with the default configuration (8 KiB buffer).
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ReaderConfig::default())
    }

    /// Create a reader with a `capacity`-byte buffer. 0 selects the default.
    #[must_use]
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self::with_config(reader, ReaderConfig::default().with_capacity(capacity))
    }

    #[must_use]
    pub fn with_config(reader: R, config: ReaderConfig) -> Self {
        Self {
            reader,
            buffer: ObjectBuffer::new(&config),
            config,
            finished: false,
        }
    }

    /// Read the next object as a view into the internal buffer.
    ///
    /// The view borrows the reader, so it must be dropped before the next
    /// read. Use [`read_bytes`](Self::read_bytes) to keep an object longer.
    ///
    /// # Errors
    ///
    /// Returns a [`ReadFailure`] holding the error and a view of the bytes
    /// that were buffered when it occurred. Those bytes have already been
    /// discarded from the reader.
    pub fn read_slice(&mut self) -> Result<&[u8], ReadFailure<&[u8]>> {
        loop {
            if let Some(end) = self.buffer.scan() {
                return Ok(self.buffer.take(end));
            }

            if let Some(error) = self.buffer.consume_error() {
                let leftover = self.buffer.reset();
                tracing::warn!(
                    error = %error,
                    discarded = leftover.len(),
                    "read failed, discarding buffered bytes"
                );
                return Err(ReadFailure {
                    error,
                    leftover: self.buffer.bytes(leftover),
                });
            }

            self.fill();
        }
    }

    /// Read the next object as an owned copy.
    ///
    /// # Errors
    ///
    /// Same as [`read_slice`](Self::read_slice), with the leftover bytes
    /// copied out.
    pub fn read_bytes(&mut self) -> Result<Bytes, ReadFailure<Bytes>> {
        self.read_slice()
            .map(Bytes::copy_from_slice)
            .map_err(ReadFailure::into_owned)
    }

    /// Number of unread bytes currently buffered.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.buffer.buffered()
    }

    /// Buffer capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[must_use]
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Mutable access to the source. Reading from it directly skips
    /// bytes the reader has not seen and desynchronizes the stream.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Unwrap the source. Buffered bytes are lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn fill(&mut self) {
        if let Some(tail) = self.buffer.prepare_fill() {
            let result = self.reader.read(tail);
            self.buffer.commit(result);
        }
    }
}

/// Iterates owned objects until the stream ends.
///
/// A stream ending on an object boundary ends the iteration with `None`.
/// Any other failure, a truncated final object included, is yielded once
/// and then iteration stops.
impl<R: Read> Iterator for RespReader<R> {
    type Item = Result<Bytes, ReadFailure<Bytes>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_bytes() {
            Ok(object) => Some(Ok(object)),
            Err(failure) => {
                self.finished = true;
                if failure.is_clean_eof() {
                    None
                } else {
                    Some(Err(failure))
                }
            }
        }
    }
}
