//! Converters for generating load-test scripts from recorded collections
//!
//! This module provides the converter trait, the conversion options and the
//! k6 implementation together with its building blocks.

pub mod body;
pub mod data;
pub mod interpolate;
pub mod k6;
pub mod scope;

pub use k6::K6Converter;

use crate::error::{ConvertError, Result};
use crate::loader;
use crate::models::{Collection, VariableSources};
use std::path::{Path, PathBuf};
use tracing::info;

/// Variable and data files supplied for a conversion
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Global variables file
    pub globals: Option<PathBuf>,
    /// Environment variables file
    pub environment: Option<PathBuf>,
    /// JSON data file (mutually exclusive with csv)
    pub json: Option<PathBuf>,
    /// CSV data file (mutually exclusive with json)
    pub csv: Option<PathBuf>,
}

impl ConvertOptions {
    /// Validate the options before any file is read
    pub fn validate(&self) -> Result<()> {
        if self.json.is_some() && self.csv.is_some() {
            return Err(ConvertError::ValidationError(
                "Only one data file may be supplied: json and csv are mutually exclusive"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

/// Trait for converting recorded collections to test scripts
pub trait Converter {
    /// The output type of the conversion (usually String for script content)
    type Output;

    /// Convert a loaded collection with its variable sources
    fn convert_collection(
        &self,
        collection: &Collection,
        sources: &VariableSources,
    ) -> Result<Self::Output>;
}

/// Load a collection and its variable files, then convert it to a k6 script
pub fn convert_file<P: AsRef<Path>>(collection_path: P, options: &ConvertOptions) -> Result<String> {
    options.validate()?;

    let collection = loader::load_collection(collection_path.as_ref())?;
    let sources = loader::load_sources(&collection, options)?;

    let script = K6Converter::new().convert_collection(&collection, &sources)?;
    info!(
        transactions = collection.transactions.len(),
        bytes = script.len(),
        "Generated k6 script"
    );

    Ok(script)
}
