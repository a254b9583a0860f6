use indexmap::IndexMap;
use std::path::PathBuf;

/// Variable name to recorded value, in source order
pub type VariableMap = IndexMap<String, serde_json::Value>;

/// Where a set of variables comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableOrigin {
    Global,
    Environment,
    Collection,
    Data,
}

impl VariableOrigin {
    /// Declaration order in the scope initializer
    pub const ORDER: [VariableOrigin; 4] = [
        VariableOrigin::Global,
        VariableOrigin::Environment,
        VariableOrigin::Collection,
        VariableOrigin::Data,
    ];

    /// Key used for the origin in the scope initializer object
    pub fn key(self) -> &'static str {
        match self {
            VariableOrigin::Global => "global",
            VariableOrigin::Environment => "environment",
            VariableOrigin::Collection => "collection",
            VariableOrigin::Data => "data",
        }
    }
}

/// External per-iteration data file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataSource {
    #[default]
    None,
    Json(PathBuf),
    Csv(PathBuf),
}

impl DataSource {
    pub fn is_present(&self) -> bool {
        !matches!(self, DataSource::None)
    }
}

/// All variable sources supplied for one conversion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableSources {
    pub globals: Option<VariableMap>,
    pub environment: Option<VariableMap>,
    pub collection: Option<VariableMap>,
    pub data: DataSource,
}
