#![no_main]

use std::io::{self, Read};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use resp_reader::RespReader;

#[derive(Debug, Arbitrary)]
struct Input {
    chunk: u8,
    capacity: u16,
    data: Vec<u8>,
}

struct Chunked<'a> {
    data: &'a [u8],
    chunk: usize,
}

impl Read for Chunked<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.chunk.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

// Fuzz target: reader over a chunked source.
//
// Every byte of the input must come back exactly once, either inside a
// returned object or as leftover bytes of a failure, until the source is
// exhausted.
fuzz_target!(|input: Input| {
    let source = Chunked {
        data: &input.data,
        chunk: usize::from(input.chunk).max(1),
    };
    // A 1-byte buffer is full before any read and never makes progress
    let capacity = usize::from(input.capacity).max(2);
    let mut reader = RespReader::with_capacity(source, capacity);
    let mut seen = Vec::with_capacity(input.data.len());

    loop {
        match reader.read_slice() {
            Ok(object) => {
                assert!(!object.is_empty());
                seen.extend_from_slice(object);
            }
            Err(failure) => {
                let clean = failure.is_clean_eof();
                let end = failure.error.is_end_of_stream();
                seen.extend_from_slice(failure.leftover);
                if clean || end {
                    break;
                }
            }
        }
    }

    assert_eq!(seen, input.data);
});
