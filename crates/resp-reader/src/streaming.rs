use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::buffer::ObjectBuffer;
use crate::config::ReaderConfig;
use crate::error::ReadFailure;

/// Asynchronous counterpart of [`RespReader`](crate::RespReader).
///
/// Same buffer, scanner and error semantics, reading from any tokio
/// `AsyncRead` (TCP streams, Unix sockets, in-memory duplex pipes). The
/// only await point is the source read, so dropping a pending
/// [`read_slice`](Self::read_slice) future loses no bytes that were
/// already buffered.
///
/// # Example
///
/// ```rust,no_run
/// use resp_reader::AsyncRespReader;
/// use tokio::net::TcpStream;
///
/// async fn replies(stream: TcpStream) {
///     let mut reader = AsyncRespReader::new(stream);
///     while let Some(reply) = reader.next().await {
///         let reply = reply.expect("well-formed reply");
///         println!("{} bytes", reply.len());
///     }
/// }
/// ```
pub struct AsyncRespReader<R> {
    reader: R,
    buffer: ObjectBuffer,
    config: ReaderConfig,
    finished: bool,
}

impl<R: AsyncRead + Unpin> AsyncRespReader<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ReaderConfig::default())
    }

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
    /// # Errors
    ///
    /// See [`RespReader::read_slice`](crate::RespReader::read_slice).
    pub async fn read_slice(&mut self) -> Result<&[u8], ReadFailure<&[u8]>> {
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

            if let Some(tail) = self.buffer.prepare_fill() {
                let result = self.reader.read(tail).await;
                self.buffer.commit(result);
            }
        }
    }

    /// Read the next object as an owned copy.
    ///
    /// # Errors
    ///
    /// See [`RespReader::read_bytes`](crate::RespReader::read_bytes).
    pub async fn read_bytes(&mut self) -> Result<Bytes, ReadFailure<Bytes>> {
        self.read_slice()
            .await
            .map(Bytes::copy_from_slice)
            .map_err(ReadFailure::into_owned)
    }

    /// Next owned object, or `None` once the stream has ended.
    ///
    /// Ends quietly at a clean end of stream; any other failure is
    /// returned once, then the reader stays finished.
    pub async fn next(&mut self) -> Option<Result<Bytes, ReadFailure<Bytes>>> {
        if self.finished {
            return None;
        }
        match self.read_bytes().await {
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

    #[must_use]
    pub fn buffered(&self) -> usize {
        self.buffer.buffered()
    }

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

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}
