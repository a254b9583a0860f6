pub mod collection;
pub mod variables;

pub use collection::{load_collection, parse_collection};
pub use variables::{load_data_source, load_sources, load_variable_file};

use crate::error::{ConvertError, Result};
use std::fs;
use std::path::Path;

/// Read a referenced file, reporting unreadable paths as missing
pub(crate) fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        ConvertError::MissingFileError(format!("Failed to read file {}: {}", path.display(), e))
    })
}
