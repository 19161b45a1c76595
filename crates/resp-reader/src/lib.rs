#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod reader;
pub mod streaming;

mod buffer;

pub use config::{DEFAULT_BUFFER_SIZE, ReaderConfig};
pub use error::{ReadError, ReadFailure};
pub use reader::RespReader;
pub use resp_wire::{MIN_OBJECT_LEN, ObjectKind, WireError};
pub use streaming::AsyncRespReader;
