/// The two-byte line terminator ending every RESP header line.
pub const CRLF: &[u8; 2] = b"\r\n";

/// Find the end of the line beginning at `start`.
///
/// # Returns
///
/// The offset one past the LF of the first CRLF at or after `start`, or
/// `None` if `region[start..]` holds no complete terminator yet. A lone
/// CR or LF is ordinary line content.
#[must_use]
pub fn find_line_end(region: &[u8], start: usize) -> Option<usize> {
    region
        .get(start..)?
        .windows(CRLF.len())
        .position(|pair| pair == CRLF)
        .map(|i| start + i + CRLF.len())
}

/// Parse a signed decimal integer as it appears on a `$` or `*` header line.
///
/// Accepts an optional leading `-` followed by one or more ASCII digits.
/// Returns `None` for an empty body, a bare `-`, any other byte (including
/// `+` and whitespace) or a value that does not fit in an `i64`.
///
/// | Input        | Result           |
/// |--------------|------------------|
/// | `b"0"`       | `Some(0)`        |
/// | `b"-1"`      | `Some(-1)`       |
/// | `b"0042"`    | `Some(42)`       |
/// | `b""`, `b"-"`| `None`           |
/// | `b"1a"`      | `None`           |
#[must_use]
pub fn parse_decimal(body: &[u8]) -> Option<i64> {
    let (negative, digits) = match body.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, body),
    };
    if digits.is_empty() {
        return None;
    }

    let mut value: i64 = 0;
    for &byte in digits {
        if !byte.is_ascii_digit() {
            return None;
        }
        let digit = i64::from(byte - b'0');
        value = value.checked_mul(10)?;
        // Accumulate negatives downwards so i64::MIN parses
        value = if negative {
            value.checked_sub(digit)?
        } else {
            value.checked_add(digit)?
        };
    }
    Some(value)
}
