//! Request call serialization
//!
//! Maps a transaction's method and body onto a k6 `http.*` call. Statements
//! are placed one indentation level deep inside the exported function, so
//! multi-line arguments are laid out relative to that level.

use super::interpolate::{StringExpr, object_key, quote};
use crate::error::Result;
use crate::models::{Body, Transaction};

const URLENCODED_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The `http` module function used for a call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpFunction {
    /// `http.get`, `http.post`, ...
    Shorthand(&'static str),
    /// `http.request("METHOD", ...)`
    Request(String),
}

/// Body argument of a request call
#[derive(Debug, Clone, PartialEq)]
pub enum BodyArg {
    Text(StringExpr),
    Fields(Vec<(String, StringExpr)>),
}

/// A fully compiled request call expression
#[derive(Debug, Clone, PartialEq)]
pub struct RequestCall {
    pub function: HttpFunction,
    pub url: StringExpr,
    pub body: Option<BodyArg>,
    /// Appends the explicit urlencoded Content-Type params argument
    pub urlencoded: bool,
}

/// Compile one transaction into its request call
pub fn serialize_request(transaction: &Transaction) -> Result<RequestCall> {
    transaction.validate()?;

    let (body, urlencoded) = match &transaction.body {
        Body::None => (None, false),
        Body::Raw(text) => (Some(BodyArg::Text(StringExpr::parse(text))), false),
        Body::Form(fields) => (Some(BodyArg::Fields(compile_fields(fields))), false),
        Body::UrlEncoded(fields) => (Some(BodyArg::Fields(compile_fields(fields))), true),
    };

    Ok(RequestCall {
        function: http_function(&transaction.method, body.is_some()),
        url: StringExpr::parse(&transaction.url),
        body,
        urlencoded,
    })
}

fn compile_fields(fields: &indexmap::IndexMap<String, String>) -> Vec<(String, StringExpr)> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), StringExpr::parse(value)))
        .collect()
}

/// Pick the `http` function for a method. `get` and `head` take no body, so a
/// recorded body on those methods goes through `http.request`.
fn http_function(method: &str, has_body: bool) -> HttpFunction {
    let method = method.trim().to_ascii_uppercase();
    match (method.as_str(), has_body) {
        ("GET", false) => HttpFunction::Shorthand("get"),
        ("HEAD", false) => HttpFunction::Shorthand("head"),
        ("POST", _) => HttpFunction::Shorthand("post"),
        ("PUT", _) => HttpFunction::Shorthand("put"),
        ("PATCH", _) => HttpFunction::Shorthand("patch"),
        ("DELETE", _) => HttpFunction::Shorthand("del"),
        ("OPTIONS", _) => HttpFunction::Shorthand("options"),
        _ => HttpFunction::Request(method),
    }
}

impl RequestCall {
    /// Render the call expression
    pub fn render(&self) -> String {
        let name = match &self.function {
            HttpFunction::Shorthand(name) => *name,
            HttpFunction::Request(_) => "request",
        };

        let mut leading = Vec::new();
        if let HttpFunction::Request(method) = &self.function {
            leading.push(quote(method));
        }
        leading.push(self.url.render());

        if self.urlencoded {
            self.render_expanded(name, leading)
        } else {
            let mut args = leading;
            if let Some(body) = &self.body {
                args.push(render_body(body, false));
            }
            format!("http.{}({})", name, args.join(", "))
        }
    }

    /// One argument per line, closing the params block explicitly
    fn render_expanded(&self, name: &str, mut args: Vec<String>) -> String {
        if let Some(body) = &self.body {
            args.push(render_body(body, true));
        }
        args.push(
            [
                "{".to_string(),
                "      headers: {".to_string(),
                format!("        \"Content-Type\": {}", quote(URLENCODED_CONTENT_TYPE)),
                "      }".to_string(),
                "    }".to_string(),
            ]
            .join("\n"),
        );

        let lines: Vec<String> = args.iter().map(|arg| format!("    {}", arg)).collect();
        format!("http.{}(\n{}\n  )", name, lines.join(",\n"))
    }
}

/// Render a body argument. Field objects are inline when `inline` is set,
/// otherwise one field per line.
fn render_body(body: &BodyArg, inline: bool) -> String {
    match body {
        BodyArg::Text(text) => text.render(),
        BodyArg::Fields(fields) if fields.is_empty() => "{}".to_string(),
        BodyArg::Fields(fields) => {
            let items = fields
                .iter()
                .map(|(key, value)| format!("{}: {}", object_key(key), value.render()));
            if inline {
                format!("{{ {} }}", items.collect::<Vec<_>>().join(", "))
            } else {
                let lines: Vec<String> = items.map(|item| format!("    {}", item)).collect();
                format!("{{\n{}\n  }}", lines.join(",\n"))
            }
        }
    }
}
