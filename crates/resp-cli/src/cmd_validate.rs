/// Implementation of `resp validate`.
///
/// Reads the whole stream and reports either a series of success
/// checkmarks (`✓`) or a diagnostic failure line (`✗`). A stream is valid
/// when it is a sequence of complete objects that ends exactly on an
/// object boundary.
///
/// # Success output
///
/// ```text
/// ✓ Objects: 12 objects read successfully
/// ✓ Boundary: stream ends after the last object
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: object 3: syntax error: invalid length "abc" at offset 0 (6 bytes discarded)
/// ```
use anyhow::{Result, anyhow};
use resp_reader::{ReadError, ReadFailure, ReaderConfig};

use crate::ValidateArgs;

/// Run the `resp validate` command.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or any object fails to
/// read; the `✗` diagnostic is printed to stdout first.
pub fn run(args: &ValidateArgs, config: ReaderConfig) -> Result<()> {
    let mut reader = crate::open_reader(&args.input, config)?;
    let mut count = 0usize;

    loop {
        match reader.read_slice() {
            Ok(_) => count += 1,
            Err(failure) if failure.is_clean_eof() => break,
            Err(failure) => {
                println!("✗ Error: object {count}: {}", diagnostic(&failure));
                return Err(anyhow!("validation failed"));
            }
        }
    }

    println!(
        "✓ Objects: {count} object{} read successfully",
        if count == 1 { "" } else { "s" }
    );
    println!("✓ Boundary: stream ends after the last object");
    Ok(())
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Converts a failed read into a one-line diagnostic.
///
/// ```text
/// ┌──────────────────────┬──────────────────────────────────────────────┐
/// │ ReadError variant    │ Diagnostic                                   │
/// ├──────────────────────┼──────────────────────────────────────────────┤
/// │ EndOfStream          │ "truncated object at end of stream"          │
/// │ BufferFull           │ "<error>; try a larger --buffer-size"        │
/// │ Syntax / Io          │ "<error Display>"                            │
/// └──────────────────────┴──────────────────────────────────────────────┘
/// ```
fn diagnostic(failure: &ReadFailure<&[u8]>) -> String {
    let message = match &failure.error {
        ReadError::EndOfStream => "truncated object at end of stream".to_string(),
        e @ ReadError::BufferFull { .. } => format!("{e}; try a larger --buffer-size"),
        other => other.to_string(),
    };
    match failure.leftover.len() {
        0 => message,
        n => format!("{message} ({n} bytes discarded)"),
    }
}
