pub mod cli;
pub mod commands;
pub mod converters;
pub mod error;
pub mod loader;
pub mod models;
pub mod telemetry;

pub use converters::{ConvertOptions, convert_file};
pub use error::{ConvertError, Result};
