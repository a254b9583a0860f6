//! Variable reference rewriting
//!
//! Recorded strings may embed `{{name}}` references. A string without any
//! reference is emitted as a double-quoted literal; a string with at least one
//! reference becomes a template literal that resolves each name through the
//! shim's `Var` hook at run time.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `{{name}}`. Unterminated or brace-containing markers never match
/// and therefore stay literal text.
static REFERENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{[^{}]+\}\}").expect("Failed to compile reference regex"));

/// One piece of an interpolated string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Reference(String),
}

/// A compiled string expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringExpr {
    /// No references; rendered as `"text"`
    Plain(String),
    /// Alternating literal text and variable lookups; rendered as a template
    Interpolated(Vec<Segment>),
}

impl StringExpr {
    /// Scan `text` left to right for variable references
    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut cursor = 0;

        for found in REFERENCE_REGEX.find_iter(text) {
            if found.start() > cursor {
                segments.push(Segment::Literal(text[cursor..found.start()].to_string()));
            }
            let marker = found.as_str();
            let name = &marker[2..marker.len() - 2];
            segments.push(Segment::Reference(name.to_string()));
            cursor = found.end();
        }

        if segments.is_empty() {
            return StringExpr::Plain(text.to_string());
        }

        if cursor < text.len() {
            segments.push(Segment::Literal(text[cursor..].to_string()));
        }

        StringExpr::Interpolated(segments)
    }

    #[cfg(test)]
    fn is_interpolated(&self) -> bool {
        matches!(self, StringExpr::Interpolated(_))
    }

    /// Render as JavaScript source
    pub fn render(&self) -> String {
        match self {
            StringExpr::Plain(text) => quote(text),
            StringExpr::Interpolated(segments) => {
                let mut out = String::from("`");
                for segment in segments {
                    match segment {
                        Segment::Literal(text) => out.push_str(&escape_template(text)),
                        Segment::Reference(name) => {
                            out.push_str(&format!("${{pm[Var]({})}}", quote(name)));
                        }
                    }
                }
                out.push('`');
                out
            }
        }
    }
}

/// Quote `text` as a double-quoted JavaScript string literal.
///
/// Only characters that would break the literal are escaped; line breaks
/// become `\n` / `\r` so the literal stays on one source line.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

fn escape_template(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            _ => out.push(c),
        }
    }
    out
}

/// Render an object key, quoting it only when it is not a valid identifier
pub fn object_key(key: &str) -> String {
    let mut chars = key.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };

    if valid { key.to_string() } else { quote(key) }
}
