#![warn(clippy::pedantic)]

pub mod error;
pub mod kind;
pub mod line;
pub mod scanner;

pub use error::WireError;
pub use kind::ObjectKind;
pub use scanner::{DEFAULT_MAX_DEPTH, MIN_OBJECT_LEN, scan};
