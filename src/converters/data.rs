//! Data file prologue
//!
//! A JSON or CSV data file is loaded once at script init into the `file`
//! constant; each iteration then advances the shim to the next row.

use super::interpolate::quote;
use crate::models::DataSource;

/// Name of the constant holding the loaded rows
pub const DATA_BINDING: &str = "file";

/// Statement advancing data variables at the start of each iteration
pub const ITERATION_STATEMENT: &str = "postman[Iteration](); // Advance data variables";

/// Import of the CSV parsing shim
pub const CSV_IMPORT: &str = "import papaparse from \"./papaparse.js\";";

/// Output of compiling a present data source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataCompilation {
    /// Block binding the parsed rows to [`DATA_BINDING`]
    pub prologue: String,
    /// First statement of the exported entry function
    pub iteration: &'static str,
    /// Whether the papaparse import must be declared
    pub needs_csv_import: bool,
}

/// Compile the data source, or `None` when no data file was supplied
pub fn compile_data_source(source: &DataSource) -> Option<DataCompilation> {
    let (path, parse, needs_csv_import) = match source {
        DataSource::None => return None,
        DataSource::Json(path) => (path, "JSON.parse(text)", false),
        DataSource::Csv(path) => (
            path,
            "papaparse.parse(text, { header: true }).data",
            true,
        ),
    };

    let prologue = [
        format!("const {} = (() => {{", DATA_BINDING),
        "  // Load data file".to_string(),
        format!("  const text = open({});", quote(&path.to_string_lossy())),
        format!("  const rows = {};", parse),
        "  return rows;".to_string(),
        "})();".to_string(),
    ]
    .join("\n");

    Some(DataCompilation {
        prologue,
        iteration: ITERATION_STATEMENT,
        needs_csv_import,
    })
}
