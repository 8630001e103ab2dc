#![warn(clippy::pedantic)]

pub mod config;
pub mod driver;
pub mod error;
pub mod record;
pub mod registry;
pub mod window;

pub use config::DecoderConfig;
pub use driver::{CHUNK_SIZE, LogDecoder, decode_reader, decode_slice};
pub use error::DecodeError;
pub use registry::SchemaRegistry;
