//! k6 script emitter
//!
//! Assembles the import block, options, data prologue, scope setup and the
//! exported entry function into the final script text.

use super::Converter;
use super::body::serialize_request;
use super::data::{CSV_IMPORT, compile_data_source};
use super::scope::ScopeInitializer;
use crate::error::Result;
use crate::models::{Collection, VariableSources};
use tracing::debug;

/// Output for a collection without any recorded request
pub const EMPTY_SCRIPT: &str = "// No HTTP/HTTPS transactions have been recorded";

const HEADER: &str = "// Auto-generated by the Load Impact converter";
const SHIM_IMPORT: &str = "import \"./postman-shim.js\";";
const HTTP_IMPORT: &str = "import http from \"k6/http\";";
const OPTIONS: &str = "export let options = { maxRedirects: 4 };";

/// Converter for generating k6 scripts from recorded collections
#[derive(Debug, Clone, Default)]
pub struct K6Converter;

impl K6Converter {
    /// Create a new K6Converter
    pub fn new() -> Self {
        Self
    }

    /// Generate the `res = ...;` statement for every transaction
    fn generate_requests(collection: &Collection) -> Result<Vec<String>> {
        collection
            .transactions
            .iter()
            .map(|transaction| -> Result<String> {
                debug!(
                    name = %transaction.name,
                    method = %transaction.method,
                    body = transaction.body.kind(),
                    "Compiling transaction"
                );
                let call = serialize_request(transaction)?;
                Ok(format!("  res = {};", call.render()))
            })
            .collect()
    }

    /// Generate the symbol declarations for the shim hooks
    fn generate_symbols(with_iteration: bool) -> String {
        let mut lines = vec![
            "const Scope = Symbol.for(\"scope\");",
            "const Var = Symbol.for(\"variable\");",
        ];
        if with_iteration {
            lines.push("const Iteration = Symbol.for(\"iteration\");");
        }
        lines.join("\n")
    }
}

impl Converter for K6Converter {
    type Output = String;

    fn convert_collection(
        &self,
        collection: &Collection,
        sources: &VariableSources,
    ) -> Result<Self::Output> {
        if collection.transactions.is_empty() {
            return Ok(EMPTY_SCRIPT.to_string());
        }

        // Compile every request first so a failure yields no output
        let requests = Self::generate_requests(collection)?;
        let data = compile_data_source(&sources.data);
        let scope = ScopeInitializer::resolve(sources);

        let mut lines = Vec::new();

        lines.push(HEADER.to_string());
        lines.push(String::new());

        // Imports
        lines.push(SHIM_IMPORT.to_string());
        if data.as_ref().is_some_and(|d| d.needs_csv_import) {
            lines.push(CSV_IMPORT.to_string());
        }
        lines.push(HTTP_IMPORT.to_string());
        lines.push(String::new());

        lines.push(OPTIONS.to_string());
        lines.push(String::new());

        if let Some(ref data) = data {
            lines.push(data.prologue.clone());
            lines.push(String::new());
        }

        lines.push(Self::generate_symbols(data.is_some()));
        lines.push(scope.render());
        lines.push(String::new());

        // Entry function
        lines.push("export default function() {".to_string());
        lines.push("  let res;".to_string());
        if let Some(ref data) = data {
            lines.push(String::new());
            lines.push(format!("  {}", data.iteration));
        }
        for request in requests {
            lines.push(String::new());
            lines.push(request);
        }
        lines.push("}".to_string());
        lines.push(String::new());

        Ok(lines.join("\n"))
    }
}
