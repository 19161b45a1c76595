#![no_main]

use libfuzzer_sys::fuzz_target;
use resp_wire::{DEFAULT_MAX_DEPTH, scan};

// Fuzz target: object boundary scanner.
//
// Scans arbitrary bytes from offset 0. Catches bugs in:
// - Length parsing (overflow, negative values, non-digits)
// - Bulk payload arithmetic near usize::MAX
// - Recursion through nested arrays
//
// A reported end must lie inside the region, and every prefix shorter
// than that end must scan as incomplete.
fuzz_target!(|data: &[u8]| {
    if let Ok(Some(end)) = scan(data, 0, DEFAULT_MAX_DEPTH) {
        assert!(end <= data.len());
        assert_eq!(scan(&data[..end], 0, DEFAULT_MAX_DEPTH), Ok(Some(end)));
        if end > 0 {
            assert_eq!(scan(&data[..end - 1], 0, DEFAULT_MAX_DEPTH), Ok(None));
        }
    }
});
