use super::argument_parser::{parse_args, ParamMap, Variables};
use super::literal::{map_key, to_cypher_literal};
use crate::graphql_parser::ast::Field;
use crate::schema_index::FieldMeta;

/// Merge declared defaults with request arguments; request values win.
///
/// An overridden default keeps its original position in the map.
pub fn merged_arguments(
    head_selection: &Field,
    field_meta: Option<&FieldMeta>,
    variables: &Variables,
) -> ParamMap {
    let mut args = field_meta
        .map(FieldMeta::default_arguments)
        .unwrap_or_default();
    for (name, value) in parse_args(&head_selection.arguments, variables) {
        args.insert(name, value);
    }
    args
}

/// Build the argument map handed to a `@cypher` statement.
///
/// The pattern variable is bound to `this`, followed by the merged arguments:
/// `{this: movie, first: 3, minScore: 0.5}`.
pub fn cypher_directive_args(
    variable: &str,
    head_selection: &Field,
    field_meta: Option<&FieldMeta>,
    variables: &Variables,
) -> String {
    let args = merged_arguments(head_selection, field_meta, variables);

    let mut fragment = format!("{{this: {}", variable);
    for (name, value) in &args {
        fragment.push_str(&format!(", {}: {}", map_key(name), to_cypher_literal(value)));
    }
    fragment.push('}');
    fragment
}
