use crate::error::WireError;
use crate::kind::tag;
use crate::line::{CRLF, find_line_end, parse_decimal};

/// Smallest valid object: a tag, a one-byte body and CRLF (`:0\r\n`).
pub const MIN_OBJECT_LEN: usize = 4;

/// Default bound on nested non-empty arrays.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Locate the end of the object beginning at `start` within `region`.
///
/// `region` is the unread part of a read buffer: it may hold several
/// objects, exactly one, or only a prefix of one. The scanner never
/// copies or allocates; it only walks header lines and skips payloads.
///
/// ```text
///   region:  * 2 \r \n : 1 \r \n : 2 \r \n + O K \r
///            ^start                       ^end      (partial next object)
/// ```
///
/// `max_depth` bounds how many levels of non-empty arrays may enclose
/// each other. With a limit of 1, `*1\r\n:1\r\n` scans but
/// `*1\r\n*1\r\n:1\r\n` does not.
///
/// # Returns
///
/// - `Ok(Some(end))` where `end` is one past the object's final byte.
/// - `Ok(None)` if `region` does not yet hold the whole object.
///
/// # Errors
///
/// Returns a [`WireError`] when the bytes at `start` can never form a
/// valid object, no matter how many more bytes arrive.
pub fn scan(region: &[u8], start: usize, max_depth: usize) -> Result<Option<usize>, WireError> {
    scan_at(region, start, 0, max_depth)
}

fn scan_at(
    region: &[u8],
    start: usize,
    depth: usize,
    max_depth: usize,
) -> Result<Option<usize>, WireError> {
    if region.len() < MIN_OBJECT_LEN {
        return Ok(None);
    }

    let Some(line_end) = find_line_end(region, start) else {
        return Ok(None);
    };

    // More bytes cannot lengthen a line that is already terminated
    let line_len = line_end - start;
    if line_len < MIN_OBJECT_LEN {
        return Err(WireError::LineTooShort {
            offset: start,
            len: line_len,
        });
    }

    let body = &region[start + 1..line_end - CRLF.len()];

    match region[start] {
        tag::SIMPLE_STRING | tag::ERROR | tag::INTEGER => Ok(Some(line_end)),

        tag::BULK_STRING => {
            let len = parse_length(body, start)?;
            if len == -1 {
                return Ok(Some(line_end));
            }
            let payload = usize::try_from(len)
                .map_err(|_| WireError::LengthOutOfRange { offset: start, value: len })?;

            // An overflowing end can never fit in the buffer either
            let Some(end) = line_end
                .checked_add(payload)
                .and_then(|n| n.checked_add(CRLF.len()))
            else {
                return Ok(None);
            };
            // The two bytes after the payload are skipped, not checked
            if end > region.len() {
                return Ok(None);
            }
            Ok(Some(end))
        }

        tag::ARRAY => {
            let count = parse_length(body, start)?;
            if count <= 0 {
                return Ok(Some(line_end));
            }
            if depth >= max_depth {
                return Err(WireError::NestingTooDeep {
                    offset: start,
                    limit: max_depth,
                });
            }

            let mut end = line_end;
            for _ in 0..count {
                match scan_at(region, end, depth + 1, max_depth)? {
                    Some(child_end) => end = child_end,
                    None => return Ok(None),
                }
            }
            Ok(Some(end))
        }

        other => Err(WireError::UnknownTag {
            offset: start,
            tag: other,
        }),
    }
}

/// Parse the length/count of a `$` or `*` header line. Values below -1
/// are rejected.
fn parse_length(body: &[u8], offset: usize) -> Result<i64, WireError> {
    let value = parse_decimal(body).ok_or_else(|| WireError::InvalidLength {
        offset,
        found: String::from_utf8_lossy(body).into_owned(),
    })?;
    if value < -1 {
        return Err(WireError::LengthOutOfRange { offset, value });
    }
    Ok(value)
}
