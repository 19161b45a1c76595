//! Golden fixture generator for the RESP conformance test suite.
//!
//! Writes every entry of [`resp_tests::FIXTURES`] to
//! `tests/golden/<name>/payload.resp`. Run it after changing a fixture;
//! snapshot files (`.snap`) are updated separately via `cargo insta review`
//! after running the conformance tests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p resp-tests
//! ```

use std::path::Path;

use resp_tests::{FIXTURES, golden_dir};

fn main() {
    let golden_dir = golden_dir();

    for (name, bytes) in FIXTURES {
        write_file(&golden_dir.join(name).join("payload.resp"), bytes);
    }

    println!("All golden fixtures written to {}", golden_dir.display());
}

fn write_file(path: &Path, data: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create_dir_all");
    }
    std::fs::write(path, data).expect("write_file");
    println!("  wrote {}", path.display());
}
