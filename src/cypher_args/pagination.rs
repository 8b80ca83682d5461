//! Slice expressions from pagination arguments.
//!
//! `first` and `offset` become a Cypher list slice applied to the collected
//! results:
//!
//! | first | offset | slice |
//! |-------|--------|-------|
//! | -     | -      | (empty) |
//! | -     | 10     | `[10..]` |
//! | 5     | -      | `[..5]` |
//! | 5     | 10     | `[10..15]` |

use serde_json::Value as JsonValue;

use super::argument_parser::Variables;
use super::errors::TranslateError;
use crate::config::TranslatorConfig;
use crate::graphql_parser::ast::{Field, Value};

/// Slice for the default `first` / `offset` argument names.
pub fn compute_skip_limit(selection: &Field, variables: &Variables) -> Result<String, TranslateError> {
    compute_skip_limit_with(selection, variables, &TranslatorConfig::default())
}

pub fn compute_skip_limit_with(
    selection: &Field,
    variables: &Variables,
    config: &TranslatorConfig,
) -> Result<String, TranslateError> {
    let first = bound(selection, &config.first_argument, variables)?;
    let offset = bound(selection, &config.offset_argument, variables)?;

    let slice = match (first, offset) {
        (None, None) => String::new(),
        (Some(first), None) => format!("[..{}]", first),
        (None, Some(offset)) => format!("[{}..]", offset),
        (Some(first), Some(offset)) => format!("[{}..{}]", offset, offset.saturating_add(first)),
    };
    Ok(slice)
}

/// Integer value of a pagination argument, `None` when absent or null.
fn bound(selection: &Field, name: &str, variables: &Variables) -> Result<Option<i64>, TranslateError> {
    let Some(arg) = selection.argument(name) else {
        return Ok(None);
    };

    let value = match &arg.value {
        // Bound under the pagination argument's name, not the variable's
        Value::Variable(_) => variables.get(name).cloned().unwrap_or(JsonValue::Null),
        literal => literal.to_json(variables).unwrap_or(JsonValue::Null),
    };

    let invalid = || TranslateError::InvalidPaginationArgument {
        argument: name.to_string(),
        value: value.to_string(),
    };

    match &value {
        JsonValue::Null => Ok(None),
        JsonValue::Number(n) => n.as_i64().map(Some).ok_or_else(invalid),
        JsonValue::String(s) => s.trim().parse::<i64>().map(Some).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}
