//! Unit tests for document parsing edge cases and error handling
//!
//! Malformed documents must come back as errors, never panics.

use graphql_cypher::graphql_parser::ast::{ExecutableDefinition, Selection, Value};
use graphql_cypher::graphql_parser::{parse_query, parse_schema, parse_value};

#[test]
fn test_malformed_queries_return_errors() {
    let malformed_queries = vec![
        "",                          // Empty document
        "{",                         // Unclosed selection set
        "{ Movie( }",                // Unclosed arguments
        "{ Movie(first: ) }",        // Missing value
        "query Q",                   // Missing selection set
        "query ($first Int) { a }",  // Missing colon in variable definition
        "{ ...on }",                 // Fragment named `on`
        "fragment F { a }",          // Missing type condition
        "{ a } garbage",             // Trailing input
        "{ Movie(title: \"x) }",     // Unterminated string
    ];

    for query in malformed_queries {
        assert!(parse_query(query).is_err(), "expected error for {:?}", query);
    }
}

#[test]
fn test_malformed_schemas_return_errors() {
    let malformed_schemas = vec![
        "",
        "type",
        "type Movie {",
        "type Movie { title }",
        "type Movie { title: String @cypher(statement: ) }",
        "schema { query }",
        "enum Genre { ACTION",
    ];

    for sdl in malformed_schemas {
        assert!(parse_schema(sdl).is_err(), "expected error for {:?}", sdl);
    }
}

#[test]
fn test_insignificant_tokens() {
    let doc = parse_query(
        "\u{feff}# leading comment\n{ Movie(first: 5,,, offset: 1) , { title,, year } } # trailing",
    )
    .unwrap();
    let op = doc.operation(None).unwrap();
    let Selection::Field(movie) = &op.selection_set[0] else {
        panic!("expected a field");
    };
    assert_eq!(movie.arguments.len(), 2);
    assert_eq!(movie.selection_set.len(), 2);
}

#[test]
fn test_multiple_operations_need_a_name() {
    let doc = parse_query("query A { a } query B { b } fragment F on T { c }").unwrap();
    assert_eq!(doc.definitions.len(), 3);
    assert!(matches!(doc.definitions[2], ExecutableDefinition::Fragment(_)));
    assert!(doc.operation(None).is_none());
    assert_eq!(doc.operation(Some("B")).unwrap().name.as_deref(), Some("B"));
    assert!(doc.operation(Some("C")).is_none());
}

#[test]
fn test_value_edge_cases() {
    assert_eq!(parse_value("-0").unwrap(), Value::Int(0));
    assert_eq!(parse_value("1e3").unwrap(), Value::Float(1000.0));
    assert_eq!(parse_value("[]").unwrap(), Value::List(vec![]));
    assert_eq!(parse_value("{}").unwrap(), Value::Object(vec![]));
    assert_eq!(parse_value("\"\\u0041\"").unwrap(), Value::String("A".to_string()));
    assert!(parse_value("99999999999999999999").is_err());
    assert!(parse_value("$").is_err());
}

#[test]
fn test_block_string_with_non_breaking_space_indent() {
    let doc = parse_query("{ Movie(title: \"\"\"\n a\n\u{a0}b\n\"\"\") { title } }").unwrap();
    let op = doc.operation(None).unwrap();
    let Selection::Field(movie) = &op.selection_set[0] else {
        panic!("expected a field");
    };
    // NBSP is not indentation, so no common indent is stripped
    assert_eq!(
        movie.argument("title").map(|a| &a.value),
        Some(&Value::String(" a\n\u{a0}b".to_string()))
    );
}

#[test]
fn test_unicode_escape_rejects_sign_prefix() {
    assert!(parse_value("\"\\u+041\"").is_err());
    assert!(parse_value("\"\\u-041\"").is_err());
}

#[test]
fn test_deep_nesting_is_an_error_not_a_crash() {
    let depth = 100_000;

    let list = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    assert!(parse_value(&list).is_err());

    let object = format!("{}1{}", "{a:".repeat(depth), "}".repeat(depth));
    assert!(parse_value(&object).is_err());

    let selections = format!("{}{}", "{ a ".repeat(depth), "}".repeat(depth));
    assert!(parse_query(&selections).is_err());

    let list_type = format!("type T {{ f: {}Int{} }}", "[".repeat(depth), "]".repeat(depth));
    assert!(parse_schema(&list_type).is_err());

    let variable_type = format!(
        "query ($v: {}Int{}) {{ a }}",
        "[".repeat(depth),
        "]".repeat(depth)
    );
    assert!(parse_query(&variable_type).is_err());
}

#[test]
fn test_moderate_nesting_still_parses() {
    let depth = 10;

    let list = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
    assert!(parse_value(&list).is_ok());

    let selections = format!("{}{}", "{ a ".repeat(depth), "}".repeat(depth));
    assert!(parse_query(&selections).is_ok());

    let list_type = format!("type T {{ f: {}Int{} }}", "[".repeat(depth), "]".repeat(depth));
    assert!(parse_schema(&list_type).is_ok());
}
