//! Scope initializer
//!
//! Collects the variable origins supplied for a run into the declaration passed
//! to `postman[Scope]`. Precedence between origins is resolved by the shim at
//! run time; here only presence and order matter.

use super::data::DATA_BINDING;
use super::interpolate::{object_key, quote};
use crate::models::{VariableMap, VariableOrigin, VariableSources};

/// Content declared for one origin
#[derive(Debug, Clone, PartialEq)]
pub enum ScopeContent {
    /// Literal key/value pairs
    Values(VariableMap),
    /// Rows bound to the data-file constant
    DataRows,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScopeEntry {
    pub origin: VariableOrigin,
    pub content: ScopeContent,
}

/// The present origins, always in Global, Environment, Collection, Data order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScopeInitializer {
    entries: Vec<ScopeEntry>,
}

impl ScopeInitializer {
    /// Build the initializer from the supplied sources
    pub fn resolve(sources: &VariableSources) -> Self {
        let entries = VariableOrigin::ORDER
            .iter()
            .filter_map(|&origin| {
                let content = match origin {
                    VariableOrigin::Global => Self::values(sources.globals.as_ref()),
                    VariableOrigin::Environment => Self::values(sources.environment.as_ref()),
                    VariableOrigin::Collection => Self::values(sources.collection.as_ref()),
                    VariableOrigin::Data => sources
                        .data
                        .is_present()
                        .then_some(ScopeContent::DataRows),
                }?;
                Some(ScopeEntry { origin, content })
            })
            .collect();

        Self { entries }
    }

    fn values(map: Option<&VariableMap>) -> Option<ScopeContent> {
        map.filter(|m| !m.is_empty())
            .map(|m| ScopeContent::Values(m.clone()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    fn entries(&self) -> &[ScopeEntry] {
        &self.entries
    }

    /// Render the `postman[Scope](...)` statement
    pub fn render(&self) -> String {
        if self.is_empty() {
            return "postman[Scope]();".to_string();
        }

        let origins: Vec<String> = self
            .entries
            .iter()
            .map(|entry| match &entry.content {
                ScopeContent::DataRows => format!("  {}: {}", entry.origin.key(), DATA_BINDING),
                ScopeContent::Values(map) => {
                    let items: Vec<String> = map
                        .iter()
                        .map(|(k, v)| format!("    {}: {}", object_key(k), value_to_js(v)))
                        .collect();
                    format!("  {}: {{\n{}\n  }}", entry.origin.key(), items.join(",\n"))
                }
            })
            .collect();

        format!("postman[Scope]({{\n{}\n}});", origins.join(",\n"))
    }
}

/// Render a recorded variable value as a JavaScript literal
fn value_to_js(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => quote(s),
        // Structured values are valid JavaScript once serialized as JSON
        other => other.to_string(),
    }
}
