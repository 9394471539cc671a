mod error;
pub use error::{Error, IntoError};

pub mod mapping;
pub use mapping::{Mapping, Token};

pub mod parse;

pub mod schema;
pub use schema::Db;

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
