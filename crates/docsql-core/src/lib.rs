pub mod driver;

mod error;
pub use error::{Error, ErrorKind};

pub mod stmt;

/// A Result type alias that uses docsql's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
