//! Cypher map and value literals.
//!
//! Two flavours of map literal are produced, and they differ only in spacing:
//!
//! - [`to_cypher_literal`] renders resolved JSON values in the spaced form used
//!   by the argument fragment: `{limit: 5, title: "Up"}`.
//! - [`value_to_filter_literal`] renders a request literal in the compact form
//!   used by inline filters: `{name:"x"}`. Variables become parameter
//!   references (`$name`) instead of being inlined.
//!
//! Keys are written bare when they are plain identifiers and backtick-quoted
//! otherwise. Strings use JSON escaping, which Cypher accepts.

use std::borrow::Cow;

use serde_json::Value as JsonValue;

use crate::graphql_parser::ast::Value;

/// Render a resolved value as a Cypher literal.
pub fn to_cypher_literal(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "null".to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::String(s) => quote(s),
        JsonValue::Array(items) => {
            let items: Vec<String> = items.iter().map(to_cypher_literal).collect();
            format!("[{}]", items.join(", "))
        }
        JsonValue::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", map_key(k), to_cypher_literal(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

/// Render a request literal in compact filter form.
pub fn value_to_filter_literal(value: &Value) -> String {
    match value {
        Value::Variable(name) => format!("${}", name),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => float_literal(*f),
        Value::String(s) | Value::Enum(s) => quote(s),
        Value::Boolean(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::List(items) => {
            let items: Vec<String> = items.iter().map(value_to_filter_literal).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(fields) => filter_map_literal(
            fields
                .iter()
                .map(|(name, value)| (name.as_str(), value)),
        ),
    }
}

/// `{k1:v1,k2:v2}` from `(key, value)` pairs, in iteration order.
pub fn filter_map_literal<'a>(entries: impl Iterator<Item = (&'a str, &'a Value)>) -> String {
    let entries: Vec<String> = entries
        .map(|(name, value)| format!("{}:{}", map_key(name), value_to_filter_literal(value)))
        .collect();
    format!("{{{}}}", entries.join(","))
}

/// Map key as written in a Cypher map literal.
///
/// Anything other than `[A-Za-z_][A-Za-z0-9_]*` is wrapped in backticks, with
/// embedded backticks doubled.
pub fn map_key(key: &str) -> Cow<'_, str> {
    let mut chars = key.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if is_identifier {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(format!("`{}`", key.replace('`', "``")))
    }
}

fn quote(s: &str) -> String {
    // Serializing a str cannot fail
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

fn float_literal(f: f64) -> String {
    match serde_json::Number::from_f64(f) {
        Some(n) => n.to_string(),
        None => "null".to_string(),
    }
}
