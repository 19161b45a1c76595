/// Implementation of `resp stats`.
///
/// Reads the whole stream and prints a per-kind breakdown.
///
/// # Example output
///
/// ```text
/// Objects: 5 total, 61 bytes
///
/// Kind              Count   Bytes
/// ──────────────────────────────────
/// simple-string         2      10
/// integer               1       4
/// bulk-string           1       9
/// array                 1      38
/// ──────────────────────────────────
/// Largest: object 4 (array, 38 bytes)
/// ```
///
/// Kinds with no objects are omitted from the table.
use anyhow::{Context, Result};
use resp_reader::{ObjectKind, ReaderConfig};

use crate::StatsArgs;

/// Per-kind tally, indexed like [`ObjectKind::ALL`].
#[derive(Default)]
struct Tally {
    counts: [usize; ObjectKind::ALL.len()],
    bytes: [usize; ObjectKind::ALL.len()],
    total_objects: usize,
    total_bytes: usize,
    /// `(index, kind, len)` of the largest object seen.
    largest: Option<(usize, ObjectKind, usize)>,
}

impl Tally {
    fn record(&mut self, index: usize, object: &[u8]) {
        // The reader only returns objects with a known tag
        let Some(kind) = ObjectKind::of(object) else {
            return;
        };
        let slot = ObjectKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default();

        self.counts[slot] += 1;
        self.bytes[slot] += object.len();
        self.total_objects += 1;
        self.total_bytes += object.len();

        if self.largest.is_none_or(|(_, _, len)| object.len() > len) {
            self.largest = Some((index, kind, object.len()));
        }
    }
}

/// Run the `resp stats` command.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or any object fails to
/// read.
pub fn run(args: &StatsArgs, config: ReaderConfig) -> Result<()> {
    let reader = crate::open_reader(&args.input, config)?;
    let mut tally = Tally::default();

    for (index, object) in reader.enumerate() {
        let object = object.with_context(|| format!("failed to read object {index}"))?;
        tally.record(index, &object);
    }

    print!("{}", render(&tally));
    Ok(())
}

fn render(tally: &Tally) -> String {
    use std::fmt::Write as _;

    let rule = "─".repeat(34);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Objects: {} total, {} bytes",
        tally.total_objects, tally.total_bytes
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<16} {:>6} {:>7}", "Kind", "Count", "Bytes");
    let _ = writeln!(out, "{rule}");
    for (slot, kind) in ObjectKind::ALL.iter().enumerate() {
        if tally.counts[slot] == 0 {
            continue;
        }
        let _ = writeln!(
            out,
            "{:<16} {:>6} {:>7}",
            kind.label(),
            tally.counts[slot],
            tally.bytes[slot]
        );
    }
    let _ = writeln!(out, "{rule}");

    if let Some((index, kind, len)) = tally.largest {
        let _ = writeln!(out, "Largest: object {index} ({kind}, {len} bytes)");
    }
    out
}
