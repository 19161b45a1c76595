//! Round-trip integration tests: reading a stream object by object and
//! concatenating the results must reproduce the stream exactly.
//!
//! Each valid fixture is read through sources that deliver it in chunks of
//! every size from 1 byte up to the whole stream, through both the view
//! (`read_slice`) and copy (`read_bytes`) operations, and through the async
//! reader. Chunking must never change which objects come out.

use bytes::Bytes;
use resp_reader::{AsyncRespReader, RespReader};
use resp_tests::{ChunkedReader, fixture};

const VALID: [&str; 3] = ["pipeline", "nested", "binary_bulk"];

/// Read every object with `read_slice`, copying each into a `Vec`.
fn read_all_slices<R: std::io::Read>(mut reader: RespReader<R>) -> Vec<Vec<u8>> {
    let mut objects = Vec::new();
    loop {
        match reader.read_slice() {
            Ok(object) => objects.push(object.to_vec()),
            Err(failure) => {
                assert!(
                    failure.is_clean_eof(),
                    "unexpected failure: {} ({} leftover bytes)",
                    failure.error,
                    failure.leftover.len()
                );
                return objects;
            }
        }
    }
}

#[test]
fn concatenation_reproduces_stream() {
    for name in VALID {
        let wire = fixture(name);
        let objects = read_all_slices(RespReader::new(wire));
        assert_eq!(objects.concat(), wire, "fixture {name}");
    }
}

#[test]
fn chunking_does_not_change_objects() {
    for name in VALID {
        let wire = fixture(name);
        let expected = read_all_slices(RespReader::new(wire));

        for chunk in 1..=wire.len() {
            let objects = read_all_slices(RespReader::new(ChunkedReader::new(wire, chunk)));
            assert_eq!(objects, expected, "fixture {name}, chunk size {chunk}");
        }
    }
}

#[test]
fn byte_at_a_time_uses_one_read_per_byte() {
    let wire = fixture("pipeline");
    let mut reader = RespReader::new(ChunkedReader::new(wire, 1));
    let objects: Vec<Bytes> = reader.by_ref().map(Result::unwrap).collect();

    assert_eq!(objects.len(), 8);
    // One read per byte, plus the read that reports end of stream
    assert_eq!(reader.get_ref().reads(), wire.len() + 1);
}

#[test]
fn owned_objects_outlive_the_buffer() {
    // A 16-byte buffer forces compaction between every object
    let wire = b"+first\r\n+second\r\n:3\r\n";
    let mut reader = RespReader::with_capacity(ChunkedReader::new(wire, 5), 16);

    let first = reader.read_bytes().unwrap();
    let second = reader.read_bytes().unwrap();
    let third = reader.read_bytes().unwrap();

    assert_eq!(&first[..], b"+first\r\n");
    assert_eq!(&second[..], b"+second\r\n");
    assert_eq!(&third[..], b":3\r\n");
    assert_ne!(first.as_ptr(), second.as_ptr());
}

#[test]
fn iterator_matches_slices() {
    for name in VALID {
        let wire = fixture(name);
        let owned: Vec<Vec<u8>> = RespReader::new(wire)
            .map(|object| object.unwrap().to_vec())
            .collect();
        assert_eq!(owned, read_all_slices(RespReader::new(wire)), "fixture {name}");
    }
}

#[test]
fn largest_object_that_fits() {
    // Byte-at-a-time delivery can hold at most capacity - 1 bytes
    let capacity = 64;
    let payload = vec![b'x'; capacity - 1 - b"$56\r\n\r\n".len()];
    let mut wire = format!("${}\r\n", payload.len()).into_bytes();
    wire.extend_from_slice(&payload);
    wire.extend_from_slice(b"\r\n");
    assert_eq!(wire.len(), capacity - 1);

    let mut reader = RespReader::with_capacity(ChunkedReader::new(&wire, 1), capacity);
    assert_eq!(reader.read_slice().unwrap(), wire.as_slice());
}

#[tokio::test]
async fn async_reader_matches_blocking_reader() {
    for name in VALID {
        let wire = fixture(name);
        let mut reader = AsyncRespReader::new(wire);
        let mut objects = Vec::new();
        while let Some(object) = reader.next().await {
            objects.push(object.unwrap().to_vec());
        }
        assert_eq!(objects, read_all_slices(RespReader::new(wire)), "fixture {name}");
    }
}
