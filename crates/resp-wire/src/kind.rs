use std::fmt;

/// Known type tag bytes.
///
/// The first byte of every RESP object selects how the rest of the
/// object is framed.
pub mod tag {
    pub const SIMPLE_STRING: u8 = b'+';
    pub const ERROR: u8 = b'-';
    pub const INTEGER: u8 = b':';
    pub const BULK_STRING: u8 = b'$';
    pub const ARRAY: u8 = b'*';
}

/// The kind of a RESP object, selected by its leading tag byte.
///
/// ```text
/// ┌─────┬──────────────┬─────────────────────────────────────────────┐
/// │ Tag │ Variant      │ Body                                        │
/// ├─────┼──────────────┼─────────────────────────────────────────────┤
/// │ +   │ SimpleString │ raw bytes to line end                       │
/// │ -   │ Error        │ raw bytes to line end                       │
/// │ :   │ Integer      │ signed decimal to line end                  │
/// │ $   │ BulkString   │ length L, then L bytes + CRLF (L=-1: null)  │
/// │ *   │ Array        │ count N, then N objects (N<=0: empty/null)  │
/// └─────┴──────────────┴─────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    SimpleString,
    Error,
    Integer,
    BulkString,
    Array,
}

impl ObjectKind {
    /// Every kind, in tag-table order.
    pub const ALL: [Self; 5] = [
        Self::SimpleString,
        Self::Error,
        Self::Integer,
        Self::BulkString,
        Self::Array,
    ];

    /// Parse a tag byte. Returns `None` for anything outside the table.
    #[must_use]
    pub fn from_tag(byte: u8) -> Option<Self> {
        match byte {
            tag::SIMPLE_STRING => Some(Self::SimpleString),
            tag::ERROR => Some(Self::Error),
            tag::INTEGER => Some(Self::Integer),
            tag::BULK_STRING => Some(Self::BulkString),
            tag::ARRAY => Some(Self::Array),
            _ => None,
        }
    }

    /// Classify a complete object by its first byte.
    #[must_use]
    pub fn of(object: &[u8]) -> Option<Self> {
        object.first().copied().and_then(Self::from_tag)
    }

    /// The wire tag byte for this kind.
    #[must_use]
    pub fn tag(self) -> u8 {
        match self {
            Self::SimpleString => tag::SIMPLE_STRING,
            Self::Error => tag::ERROR,
            Self::Integer => tag::INTEGER,
            Self::BulkString => tag::BULK_STRING,
            Self::Array => tag::ARRAY,
        }
    }

    /// Short lowercase label used in diagnostics and CLI output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SimpleString => "simple-string",
            Self::Error => "error",
            Self::Integer => "integer",
            Self::BulkString => "bulk-string",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_map_both_ways() {
        for kind in ObjectKind::ALL {
            assert_eq!(ObjectKind::from_tag(kind.tag()), Some(kind), "{kind:?}");
        }
    }

    #[test]
    fn unknown_tags_rejected() {
        for byte in [b'!', b'#', b'%', b'~', b'0', b'\r', 0x00, 0xFF] {
            assert_eq!(ObjectKind::from_tag(byte), None, "{byte:#04X}");
        }
    }

    #[test]
    fn classifies_objects() {
        assert_eq!(ObjectKind::of(b"*0\r\n"), Some(ObjectKind::Array));
        assert_eq!(ObjectKind::of(b"$-1\r\n"), Some(ObjectKind::BulkString));
        assert_eq!(ObjectKind::of(b""), None);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(ObjectKind::BulkString.to_string(), "bulk-string");
        assert_eq!(ObjectKind::Error.to_string(), "error");
    }
}
