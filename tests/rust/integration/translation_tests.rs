//! Query documents translated field by field against the movie schema

use std::io::Write;

use graphql_cypher::cypher_args::{
    extract_query_result, extract_selections, Record, TranslateError, Variables,
};
use graphql_cypher::graphql_parser::ast::{ExecutableDocument, OperationType, Selection};
use graphql_cypher::graphql_parser::parse_query;
use graphql_cypher::{translate_field, FieldTranslation, ResolveInfo, SchemaIndex, TranslatorConfig};
use serde_json::json;
use tempfile::NamedTempFile;

use super::movie_schema::{movie_index, MOVIE_SDL};

fn translate(
    index: &SchemaIndex,
    document: &ExecutableDocument,
    field_name: &str,
    variables: &Variables,
) -> Result<FieldTranslation, TranslateError> {
    let operation = document.operation(None).unwrap();
    let fragments = document.fragments();
    let info = ResolveInfo::new(index, operation.operation, field_name, variables, &fragments);
    translate_field(&info, &operation.selection_set)
}

fn variables(value: serde_json::Value) -> Variables {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("variables must be an object"),
    }
}

#[test]
fn test_query_with_filters_and_pagination() {
    let index = movie_index();
    let document = parse_query(
        r#"{ Movie(title: "River Runs Through It", first: 5, offset: 10) { title year } }"#,
    )
    .unwrap();

    let translation = translate(&index, &document, "Movie", &Variables::new()).unwrap();
    assert_eq!(translation.variable_name, "movie");
    assert_eq!(translation.type_name, "Movie");
    assert!(translation.is_list);
    assert_eq!(translation.skip_limit, "[10..15]");
    assert_eq!(translation.filter, r#"{title:"River Runs Through It"}"#);
    assert_eq!(
        translation.argument_fragment,
        r#"{this: movie, first: 5, title: "River Runs Through It", offset: 10}"#
    );
}

#[test]
fn test_query_with_variables() {
    let index = movie_index();
    let document = parse_query(
        "query Movies($title: String, $first: Int) { Movie(title: $title, first: $first) { title } }",
    )
    .unwrap();
    let vars = variables(json!({"title": "Heat", "first": 2}));

    let translation = translate(&index, &document, "Movie", &vars).unwrap();
    assert_eq!(translation.skip_limit, "[..2]");
    // filters reference the parameter instead of inlining it
    assert_eq!(translation.filter, "{title:$title}");
    assert_eq!(translation.params["title"], json!("Heat"));
    assert_eq!(translation.params["first"], json!(2));
}

#[test]
fn test_unbound_variable_keeps_default() {
    let index = movie_index();
    let document =
        parse_query("query ($first: Int) { Movie(first: $first) { title } }").unwrap();

    let translation = translate(&index, &document, "Movie", &Variables::new()).unwrap();
    assert_eq!(translation.params["first"], json!(25));
    assert_eq!(translation.argument_fragment, "{this: movie, first: 25}");
    // the slice only reflects what the request asked for
    assert_eq!(translation.skip_limit, "");
}

#[test]
fn test_cypher_field_arguments() {
    let index = movie_index();
    let document = parse_query("{ topRated(limit: 3) { title } }").unwrap();

    let translation = translate(&index, &document, "topRated", &Variables::new()).unwrap();
    assert_eq!(translation.argument_fragment, "{this: movie, limit: 3}");
    assert!(translation
        .cypher_statement
        .as_deref()
        .is_some_and(|statement| statement.contains("LIMIT $limit")));
}

#[test]
fn test_fragments_are_expanded_before_translation() {
    let index = movie_index();
    let document = parse_query(
        r#"
        query { ...MovieQuery }
        fragment MovieQuery on Query { Movie(year: 1999, first: 1) { title } }
        "#,
    )
    .unwrap();

    let translation = translate(&index, &document, "Movie", &Variables::new()).unwrap();
    assert_eq!(translation.filter, "{year:1999}");
    assert_eq!(translation.skip_limit, "[..1]");
}

#[test]
fn test_fragment_spreads_flatten_in_order() {
    let document = parse_query(
        r#"
        { Movie { movieId ...Details year } }
        fragment Details on Movie { title ...Nested }
        fragment Nested on Movie { actors { name } }
        "#,
    )
    .unwrap();
    let operation = document.operation(None).unwrap();
    let Selection::Field(movie) = &operation.selection_set[0] else {
        panic!("expected Movie field");
    };

    let flattened = extract_selections(&movie.selection_set, &document.fragments()).unwrap();
    let names: Vec<String> = flattened
        .iter()
        .map(|s| match s {
            Selection::Field(f) => f.name.clone(),
            Selection::FragmentSpread(spread) => format!("...{}", spread.name),
            Selection::InlineFragment(_) => "... on".to_string(),
        })
        .collect();
    assert_eq!(names, vec!["movieId", "title", "...Nested", "year"]);
}

#[test]
fn test_missing_fragment_is_reported() {
    let index = movie_index();
    let document = parse_query("{ ...Nowhere }").unwrap();

    let err = translate(&index, &document, "Movie", &Variables::new()).unwrap_err();
    assert_eq!(err, TranslateError::FragmentNotFound("Nowhere".to_string()));
}

#[test]
fn test_invalid_pagination_is_reported() {
    let index = movie_index();
    let document = parse_query("query ($first: Int) { Movie(first: $first) { title } }").unwrap();
    let vars = variables(json!({"first": "lots"}));

    let err = translate(&index, &document, "Movie", &vars).unwrap_err();
    assert!(matches!(err, TranslateError::InvalidPaginationArgument { .. }));
}

#[test]
fn test_custom_pagination_names() {
    let index = SchemaIndex::from_sdl(
        "type Movie { title: String } type Query { Movie(title: String, limit: Int, skip: Int): [Movie] }",
    )
    .unwrap();
    let document = parse_query(r#"{ Movie(title: "Up", limit: 2, skip: 4) { title } }"#).unwrap();
    let operation = document.operation(None).unwrap();
    let fragments = document.fragments();
    let vars = Variables::new();
    let config = TranslatorConfig {
        first_argument: "limit".to_string(),
        offset_argument: "skip".to_string(),
        ..Default::default()
    };
    let info = ResolveInfo::new(&index, OperationType::Query, "Movie", &vars, &fragments)
        .with_config(config);

    let translation = translate_field(&info, &operation.selection_set).unwrap();
    assert_eq!(translation.skip_limit, "[4..6]");
    assert_eq!(translation.filter, r#"{title:"Up"}"#);
}

#[test]
fn test_schema_from_file_and_result_extraction() -> anyhow::Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(MOVIE_SDL.as_bytes())?;
    let index = SchemaIndex::from_sdl_file(file.path())?;

    let list_field = index.field("Query", "Movie").unwrap();
    let single_field = index.field("Query", "MovieById").unwrap();

    let mut record = Record::new();
    record.insert("movie".to_string(), json!({"title": "Up"}));
    let records = vec![record.clone(), record];

    assert_eq!(
        extract_query_result(&records, &list_field.return_type),
        json!([{"title": "Up"}, {"title": "Up"}])
    );
    assert_eq!(
        extract_query_result(&records, &single_field.return_type),
        json!({"title": "Up"})
    );
    assert_eq!(
        extract_query_result(&[], &single_field.return_type),
        serde_json::Value::Null
    );
    Ok(())
}

#[test]
fn test_unknown_schema_file() {
    assert!(SchemaIndex::from_sdl_file("/nonexistent/schema.graphql").is_err());
}
