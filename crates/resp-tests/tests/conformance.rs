//! Conformance tests: golden fixture files read to insta snapshots.
//!
//! Each test reads a committed `.resp` fixture from `tests/golden/`, pulls
//! every object out of it with [`RespReader`], and renders one line per
//! object (index, kind, length, escaped bytes) followed by the terminating
//! failure. The listing is compared against an insta snapshot stored in
//! `tests/snapshots/`.
//!
//! A diff in a snapshot signals either a deliberate behaviour change
//! (accept via `cargo insta review`) or an accidental regression.

use std::fmt::Write as _;

use insta::assert_snapshot;
use resp_reader::{ObjectKind, RespReader};
use resp_tests::{FIXTURES, golden_dir};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Read `tests/golden/<fixture>/payload.resp`.
fn golden_payload(fixture: &str) -> Vec<u8> {
    let path = golden_dir().join(fixture).join("payload.resp");
    std::fs::read(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()))
}

/// One line per object, then one `!` line for the failure that ended
/// the stream.
fn listing(payload: &[u8]) -> String {
    let mut reader = RespReader::new(payload);
    let mut out = String::new();
    let mut index = 0;

    loop {
        match reader.read_slice() {
            Ok(object) => {
                let kind = ObjectKind::of(object).expect("reader returns tagged objects");
                writeln!(out, "{index} {kind} {} {}", object.len(), object.escape_ascii()).unwrap();
                index += 1;
            }
            Err(failure) => {
                write!(
                    out,
                    "! {} ({} bytes discarded)",
                    failure.error,
                    failure.leftover.len()
                )
                .unwrap();
                break;
            }
        }
    }
    out
}

// ── Fixture integrity ─────────────────────────────────────────────────────────

#[test]
fn golden_files_match_fixture_table() {
    for (name, bytes) in FIXTURES {
        assert_eq!(
            golden_payload(name),
            *bytes,
            "tests/golden/{name} is stale; rerun generate_golden"
        );
    }
}

// ── Listings ──────────────────────────────────────────────────────────────────

#[test]
fn pipeline() {
    assert_snapshot!("pipeline", listing(&golden_payload("pipeline")));
}

#[test]
fn nested() {
    assert_snapshot!("nested", listing(&golden_payload("nested")));
}

#[test]
fn binary_bulk() {
    assert_snapshot!("binary_bulk", listing(&golden_payload("binary_bulk")));
}

#[test]
fn malformed_length() {
    assert_snapshot!("malformed_length", listing(&golden_payload("malformed_length")));
}

#[test]
fn truncated() {
    assert_snapshot!("truncated", listing(&golden_payload("truncated")));
}
