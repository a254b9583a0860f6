//! Convert command implementation
//!
//! Converts a recorded collection to a k6 script.

use crate::converters::{ConvertOptions, convert_file};
use crate::error::Result;
use colored::Colorize;
use std::fs;
use std::path::Path;

/// Arguments of the convert command
#[derive(Debug, Clone, Copy)]
pub struct ConvertCommandArgs<'a> {
    pub collection_path: &'a Path,
    pub globals: Option<&'a Path>,
    pub environment: Option<&'a Path>,
    pub json: Option<&'a Path>,
    pub csv: Option<&'a Path>,
    pub output_path: Option<&'a Path>,
}

impl ConvertCommandArgs<'_> {
    fn options(&self) -> ConvertOptions {
        ConvertOptions {
            globals: self.globals.map(Path::to_path_buf),
            environment: self.environment.map(Path::to_path_buf),
            json: self.json.map(Path::to_path_buf),
            csv: self.csv.map(Path::to_path_buf),
        }
    }
}

/// Execute the convert command
pub fn execute_convert(args: ConvertCommandArgs<'_>) -> Result<()> {
    let script = convert_file(args.collection_path, &args.options())?;

    // Output result
    if let Some(path) = args.output_path {
        fs::write(path, &script)?;
        eprintln!(
            "{} Generated k6 script: {}",
            "✓".green(),
            path.display()
        );
    } else {
        print!("{}", script);
    }

    Ok(())
}
