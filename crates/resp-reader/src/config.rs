use resp_wire::DEFAULT_MAX_DEPTH;

/// Default read buffer capacity in bytes.
///
/// A large `INFO ALL` reply runs past 4 KiB, so the default leaves
/// headroom at 8 KiB.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Configuration for [`RespReader`](crate::RespReader) and
/// [`AsyncRespReader`](crate::AsyncRespReader).
///
/// ```text
/// ┌───────────┬──────────┬────────────────────────────────────────────┐
/// │ Field     │ Default  │ Purpose                                    │
/// ├───────────┼──────────┼────────────────────────────────────────────┤
/// │ capacity  │ 8192     │ Fixed buffer size; bounds the largest      │
/// │           │          │ object the reader can return               │
/// │ max_depth │ 512      │ Bound on nested non-empty arrays           │
/// └───────────┴──────────┴────────────────────────────────────────────┘
/// ```
///
/// A `capacity` of 0 means "use the default". The buffer never grows: an
/// object that does not fit fails with
/// [`ReadError::BufferFull`](crate::ReadError::BufferFull).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Buffer capacity in bytes.
    pub capacity: usize,

    /// Maximum nesting of non-empty arrays.
    pub max_depth: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_BUFFER_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ReaderConfig {
    /// Set the buffer capacity. 0 selects [`DEFAULT_BUFFER_SIZE`].
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The capacity the reader actually allocates.
    #[must_use]
    pub fn effective_capacity(&self) -> usize {
        if self.capacity < 1 {
            DEFAULT_BUFFER_SIZE
        } else {
            self.capacity
        }
    }
}
