/// Implementation of `resp inspect`.
///
/// Streams the input through a [`RespReader`] and prints one line per
/// object. Objects are never re-encoded: the preview is the raw wire bytes
/// with control characters escaped.
///
/// # Output format
///
/// ```text
/// Object 0: array (33 bytes)  *3\r\n$3\r\nSET\r\n$3\r\nkey\r\n$5\r\nvalue\r\n
/// Object 1: simple-string (5 bytes)  +OK\r\n
/// Object 2: bulk-string (5 bytes)  $-1\r\n
/// ---
/// 3 objects, 43 bytes
/// ```
///
/// With `--json` each object becomes a single line:
///
/// ```text
/// {"index":0,"kind":"array","len":33,"preview":"*3\\r\\n$3\\r\\nSET..."}
/// ```
use anyhow::{Context, Result};
use resp_reader::{ObjectKind, ReaderConfig};
use serde::Serialize;

use crate::InspectArgs;

/// Previews longer than this many escaped characters are truncated.
const PREVIEW_CHARS: usize = 72;

#[derive(Serialize)]
struct ObjectRecord<'a> {
    index: usize,
    kind: &'a str,
    len: usize,
    preview: String,
}

/// Run the `resp inspect` command.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or the stream contains a
/// malformed, oversized or truncated object. Objects before the failure
/// have already been printed.
pub fn run(args: &InspectArgs, config: ReaderConfig) -> Result<()> {
    let reader = crate::open_reader(&args.input, config)?;
    let limit = args.limit.unwrap_or(usize::MAX);

    let mut count = 0;
    let mut total = 0;

    for (index, object) in reader.take(limit).enumerate() {
        let object = object.with_context(|| format!("failed to read object {index}"))?;
        let kind = ObjectKind::of(&object).map_or("unknown", ObjectKind::label);

        if args.json {
            let record = ObjectRecord {
                index,
                kind,
                len: object.len(),
                preview: preview(&object),
            };
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!(
                "Object {index}: {kind} ({} bytes)  {}",
                object.len(),
                preview(&object)
            );
            if args.show_hex {
                for line in hex_dump(&object) {
                    println!("           {line}");
                }
            }
        }

        count += 1;
        total += object.len();
    }

    if !args.json {
        println!("---");
        println!(
            "{count} object{}, {total} bytes",
            if count == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

// ── Formatting helpers ────────────────────────────────────────────────────────

/// Escape `object` for single-line display, truncating with `…`.
fn preview(object: &[u8]) -> String {
    let escaped: String = object
        .iter()
        .flat_map(|&b| std::ascii::escape_default(b))
        .map(char::from)
        .collect();
    if escaped.chars().count() > PREVIEW_CHARS {
        let truncated: String = escaped.chars().take(PREVIEW_CHARS).collect();
        format!("{truncated}…")
    } else {
        escaped
    }
}

/// Format `raw` as `offset  hex  ascii` lines of 16 bytes each.
fn hex_dump(raw: &[u8]) -> Vec<String> {
    raw.chunks(16)
        .enumerate()
        .map(|(i, chunk)| {
            let offset = i * 16;
            let hex: String = chunk
                .iter()
                .fold(String::with_capacity(chunk.len() * 3), |mut s, b| {
                    use std::fmt::Write as _;
                    if !s.is_empty() {
                        s.push(' ');
                    }
                    let _ = write!(s, "{b:02x}");
                    s
                });
            let ascii: String = chunk
                .iter()
                .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
                .collect();
            format!("{offset:04x}  {hex:<47}  {ascii}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_escapes_terminators() {
        assert_eq!(preview(b"+OK\r\n"), "+OK\\r\\n");
        assert_eq!(preview(b"$2\r\n\x00\xff\r\n"), "$2\\r\\n\\x00\\xff\\r\\n");
    }

    #[test]
    fn preview_truncates() {
        let object = [b'a'; 100];
        let shown = preview(&object);
        assert!(shown.ends_with('…'));
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 1);
    }

    #[test]
    fn hex_dump_lines() {
        let lines = hex_dump(b"*1\r\n$5\r\nhello\r\n+OK\r\n");
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0000  2a 31 0d 0a"));
        assert!(lines[1].starts_with("0010  4f 4b 0d 0a"));
        assert!(lines[0].ends_with("*1..$5..hello..+"));
    }
}
