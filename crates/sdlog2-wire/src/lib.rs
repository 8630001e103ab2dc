#![warn(clippy::pedantic)]

pub mod cstr;
pub mod error;
pub mod format;
pub mod header;

pub use error::WireError;
