/// Syntax errors raised while locating the boundary of a RESP object.
///
/// Every variant is fatal for the object being scanned: adding more bytes
/// to the buffer can never turn a malformed prefix into a valid object.
/// Offsets are relative to the start of the region handed to the scanner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// A CRLF-terminated line was shorter than the smallest valid object.
    #[error("line at offset {offset} is {len} bytes, minimum is 4")]
    LineTooShort { offset: usize, len: usize },

    /// The length or count on a `$`/`*` header line is not a decimal integer.
    #[error("invalid length {found:?} at offset {offset}")]
    InvalidLength { offset: usize, found: String },

    /// The length or count parsed but is below -1.
    #[error("length {value} at offset {offset} is out of range")]
    LengthOutOfRange { offset: usize, value: i64 },

    /// The first byte of an object is not one of `+ - : $ *`.
    #[error("unknown type tag {tag:#04X} at offset {offset}")]
    UnknownTag { offset: usize, tag: u8 },

    /// Arrays were nested deeper than the configured limit.
    #[error("array nesting exceeds limit of {limit} at offset {offset}")]
    NestingTooDeep { offset: usize, limit: usize },
}
