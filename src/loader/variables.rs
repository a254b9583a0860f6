use super::read_file;
use crate::converters::ConvertOptions;
use crate::error::{ConvertError, Result};
use crate::models::{Collection, DataSource, VariableMap, VariableSources};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Accepted variable file layouts
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VariableFile {
    /// Postman globals / environment export
    Export { values: Vec<ExportedValue> },
    /// Plain name to value object
    Flat(VariableMap),
}

#[derive(Debug, Deserialize)]
struct ExportedValue {
    key: String,
    #[serde(default)]
    value: serde_json::Value,
    #[serde(default = "enabled_by_default")]
    enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

/// Load a global or environment variable file
pub fn load_variable_file<P: AsRef<Path>>(path: P) -> Result<VariableMap> {
    let path = path.as_ref();
    let content = read_file(path)?;

    let file: VariableFile = serde_json::from_str(&content).map_err(|e| {
        ConvertError::InputParseError(format!(
            "Failed to parse variable file {}: {}",
            path.display(),
            e
        ))
    })?;

    let variables: VariableMap = match file {
        VariableFile::Export { values } => values
            .into_iter()
            .filter(|v| v.enabled)
            .map(|v| (v.key, v.value))
            .collect(),
        VariableFile::Flat(map) => map,
    };

    info!(path = %path.display(), count = variables.len(), "Loaded variable file");
    Ok(variables)
}

/// Check the configured data file and classify it
pub fn load_data_source(options: &ConvertOptions) -> Result<DataSource> {
    options.validate()?;

    if let Some(ref path) = options.json {
        let content = read_file(path)?;
        let rows: Vec<serde_json::Map<String, serde_json::Value>> =
            serde_json::from_str(&content).map_err(|e| {
                ConvertError::InputParseError(format!(
                    "Data file {} must be an array of row objects: {}",
                    path.display(),
                    e
                ))
            })?;
        info!(path = %path.display(), rows = rows.len(), "Loaded JSON data file");
        return Ok(DataSource::Json(path.clone()));
    }

    if let Some(ref path) = options.csv {
        let content = read_file(path)?;
        let header = content.lines().next().unwrap_or_default();
        if header.trim().is_empty() {
            return Err(ConvertError::InputParseError(format!(
                "Data file {} has no header row",
                path.display()
            )));
        }
        info!(path = %path.display(), "Loaded CSV data file");
        return Ok(DataSource::Csv(path.clone()));
    }

    Ok(DataSource::None)
}

/// Gather every variable source for a conversion
pub fn load_sources(collection: &Collection, options: &ConvertOptions) -> Result<VariableSources> {
    let globals = options
        .globals
        .as_ref()
        .map(load_variable_file)
        .transpose()?;
    let environment = options
        .environment
        .as_ref()
        .map(load_variable_file)
        .transpose()?;
    let data = load_data_source(options)?;

    Ok(VariableSources {
        globals,
        environment,
        collection: Some(collection.variables.clone()),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_flat_variable_file_keeps_order() {
        let file = temp_file(r#"{ "second": "two", "first": "one", "count": 3 }"#);

        let variables = load_variable_file(file.path()).unwrap();
        let keys: Vec<&String> = variables.keys().collect();
        assert_eq!(keys, ["second", "first", "count"]);
        assert_eq!(variables["count"], serde_json::json!(3));
    }

    #[test]
    fn test_exported_variable_file() {
        let file = temp_file(
            r#"{
  "name": "staging",
  "values": [
    { "key": "host", "value": "staging.test", "enabled": true },
    { "key": "token", "value": "secret", "enabled": false },
    { "key": "port", "value": "8080" }
  ]
}"#,
        );

        let variables = load_variable_file(file.path()).unwrap();
        let keys: Vec<&String> = variables.keys().collect();
        assert_eq!(keys, ["host", "port"]);
    }

    #[test]
    fn test_missing_variable_file() {
        assert!(matches!(
            load_variable_file("/nonexistent/globals.json"),
            Err(ConvertError::MissingFileError(_))
        ));
    }

    #[test]
    fn test_malformed_variable_file() {
        let file = temp_file("[1, 2");
        assert!(matches!(
            load_variable_file(file.path()),
            Err(ConvertError::InputParseError(_))
        ));
    }

    #[test]
    fn test_json_data_source() {
        let file = temp_file(r#"[{ "first": "a" }, { "first": "b" }]"#);
        let options = ConvertOptions {
            json: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        assert_eq!(
            load_data_source(&options).unwrap(),
            DataSource::Json(file.path().to_path_buf())
        );
    }

    #[test]
    fn test_json_data_source_must_be_rows() {
        let file = temp_file(r#"{ "first": "a" }"#);
        let options = ConvertOptions {
            json: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        assert!(matches!(
            load_data_source(&options),
            Err(ConvertError::InputParseError(_))
        ));
    }

    #[test]
    fn test_csv_data_source() {
        let file = temp_file("first,third\none,three\n");
        let options = ConvertOptions {
            csv: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        assert_eq!(
            load_data_source(&options).unwrap(),
            DataSource::Csv(file.path().to_path_buf())
        );

        let empty = temp_file("");
        let options = ConvertOptions {
            csv: Some(empty.path().to_path_buf()),
            ..Default::default()
        };
        assert!(load_data_source(&options).is_err());
    }

    #[test]
    fn test_missing_data_file() {
        let options = ConvertOptions {
            csv: Some(PathBuf::from("/nonexistent/rows.csv")),
            ..Default::default()
        };

        assert!(matches!(
            load_data_source(&options),
            Err(ConvertError::MissingFileError(_))
        ));
    }

    #[test]
    fn test_no_sources() {
        let sources = load_sources(&Collection::default(), &ConvertOptions::default()).unwrap();
        assert!(sources.globals.is_none());
        assert!(sources.environment.is_none());
        assert_eq!(sources.data, DataSource::None);
    }
}
