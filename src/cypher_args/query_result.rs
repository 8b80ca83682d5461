use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::graphql_parser::ast::TypeRef;
use crate::schema_index::{is_array_type, type_identifiers};

/// One row returned by the Cypher executor, keyed by returned variable.
pub type Record = JsonMap<String, JsonValue>;

/// Shape executor rows into the field's response value.
///
/// Each row carries the result under the field's pattern variable. A list
/// return type collects every row; anything else takes the first row, or
/// `null` when there are none.
pub fn extract_query_result(records: &[Record], return_type: &TypeRef) -> JsonValue {
    let variable_name = type_identifiers(return_type).variable_name;
    let value_of = |record: &Record| record.get(&variable_name).cloned().unwrap_or(JsonValue::Null);

    if is_array_type(return_type) {
        JsonValue::Array(records.iter().map(value_of).collect())
    } else {
        records.first().map(value_of).unwrap_or(JsonValue::Null)
    }
}
