#![warn(clippy::pedantic)]

pub mod descriptor;
pub mod error;
pub mod filter;
pub mod log;
pub mod value;

pub use descriptor::MessageDescriptor;
pub use error::TypeError;
pub use filter::{FieldSelection, MessageFilter};
pub use log::FlightLog;
pub use value::Value;
