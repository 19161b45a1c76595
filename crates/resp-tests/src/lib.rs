//! Shared fixtures and test sources for the RESP integration suite.
//!
//! [`FIXTURES`] is the single source of truth for the golden payloads:
//! `generate_golden` writes them to `tests/golden/<name>/payload.resp`, and
//! the conformance tests check the committed files still match.

use std::io::{self, Read};
use std::path::PathBuf;

/// Golden fixtures as `(name, wire bytes)`.
///
/// | Name             | Contents                                           |
/// |------------------|----------------------------------------------------|
/// | pipeline         | SET/GET commands interleaved with their replies    |
/// | nested           | Arrays inside arrays, empty and null arrays        |
/// | binary_bulk      | Bulk payload containing CRLF, NUL and high bytes   |
/// | malformed_length | Valid reply, then `$abc`, then a valid integer     |
/// | truncated        | Array whose second element never arrives           |
pub const FIXTURES: &[(&str, &[u8])] = &[
    ("pipeline", PIPELINE),
    ("nested", NESTED),
    ("binary_bulk", BINARY_BULK),
    ("malformed_length", MALFORMED_LENGTH),
    ("truncated", TRUNCATED),
];

pub const PIPELINE: &[u8] = b"*3\r\n$3\r\nSET\r\n$3\r\nkey\r\n$5\r\nvalue\r\n\
+OK\r\n\
*2\r\n$3\r\nGET\r\n$3\r\nkey\r\n\
$5\r\nvalue\r\n\
*2\r\n$3\r\nGET\r\n$7\r\nmissing\r\n\
$-1\r\n\
:1000\r\n\
-ERR unknown command FOO\r\n";

pub const NESTED: &[u8] = b"*3\r\n:1\r\n*2\r\n+a1\r\n*1\r\n:-7\r\n*0\r\n\
*-1\r\n\
*2\r\n*0\r\n$0\r\n\r\n";

pub const BINARY_BULK: &[u8] = b"$8\r\n\x00\x01\r\n\xff\xfe*$\r\n:0\r\n";

pub const MALFORMED_LENGTH: &[u8] = b"+OK\r\n$abc\r\n:1\r\n";

pub const TRUNCATED: &[u8] = b"*2\r\n:1\r\n";

/// Look up a fixture by name.
///
/// # Panics
///
/// Panics if no fixture has that name.
#[must_use]
pub fn fixture(name: &str) -> &'static [u8] {
    FIXTURES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, bytes)| *bytes)
        .unwrap_or_else(|| panic!("no fixture named {name}"))
}

/// `tests/golden` inside this crate.
#[must_use]
pub fn golden_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden")
}

/// Blocking source that returns at most `chunk` bytes per read.
///
/// Simulates a socket delivering an object across many short reads.
pub struct ChunkedReader<'a> {
    data: &'a [u8],
    chunk: usize,
    reads: usize,
}

impl<'a> ChunkedReader<'a> {
    /// # Panics
    ///
    /// Panics if `chunk` is 0, which would look like end of stream.
    #[must_use]
    pub fn new(data: &'a [u8], chunk: usize) -> Self {
        assert!(chunk > 0, "chunk size must be positive");
        Self {
            data,
            chunk,
            reads: 0,
        }
    }

    /// Number of `read` calls served so far.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl Read for ChunkedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads += 1;
        let n = self.chunk.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}
