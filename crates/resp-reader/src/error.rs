use bytes::Bytes;
use resp_wire::WireError;

/// Errors that end a read on a [`RespReader`](crate::RespReader).
///
/// Every variant is fatal for the object in flight. The reader discards
/// its buffered bytes before reporting one, so the stream cannot be
/// resumed mid-object.
///
/// ```text
///   ReadError
///   ├── Syntax(WireError)  ← malformed line, length, count or tag
///   ├── BufferFull         ← object larger than the configured buffer
///   ├── EndOfStream        ← source returned 0 bytes
///   └── Io(io::Error)      ← source read failed
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The buffered bytes can never form a valid object.
    #[error("syntax error: {0}")]
    Syntax(#[from] WireError),

    /// The buffer filled up before an object boundary was found.
    ///
    /// Usually a bulk string or deeply nested array larger than the
    /// reader's capacity. Retrying at the same capacity fails the same way.
    #[error("buffer full: object does not fit in {capacity} bytes")]
    BufferFull { capacity: usize },

    /// The source reported end of stream.
    #[error("end of stream")]
    EndOfStream,

    /// The source failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ReadError {
    #[must_use]
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Self::EndOfStream)
    }
}

/// A failed read: the error plus whatever bytes were buffered when it
/// occurred.
///
/// `leftover` is a view into the reader's buffer (`&[u8]`) for
/// [`read_slice`](crate::RespReader::read_slice) and an owned copy
/// ([`Bytes`]) for [`read_bytes`](crate::RespReader::read_bytes). The
/// bytes are for diagnostics only; the reader has already dropped them.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct ReadFailure<T> {
    pub error: ReadError,
    pub leftover: T,
}

impl<T: AsRef<[u8]>> ReadFailure<T> {
    /// True when the stream ended on an object boundary.
    #[must_use]
    pub fn is_clean_eof(&self) -> bool {
        self.error.is_end_of_stream() && self.leftover.as_ref().is_empty()
    }
}

impl ReadFailure<&[u8]> {
    /// Copy the leftover bytes out of the reader's buffer.
    #[must_use]
    pub fn into_owned(self) -> ReadFailure<Bytes> {
        ReadFailure {
            error: self.error,
            leftover: Bytes::copy_from_slice(self.leftover),
        }
    }
}

impl<T> From<ReadFailure<T>> for ReadError {
    fn from(failure: ReadFailure<T>) -> Self {
        failure.error
    }
}
