//! Add-relationship mutations end to end: detection, re-keying and strict mode

use graphql_cypher::cypher_args::{is_add_relationship_mutation, TranslateError, Variables};
use graphql_cypher::graphql_parser::ast::OperationType;
use graphql_cypher::graphql_parser::parse_query;
use graphql_cypher::{translate_field, ResolveInfo, TranslatorConfig};
use serde_json::json;

use super::movie_schema::movie_index;

#[test]
fn test_detection() {
    let index = movie_index();
    assert!(is_add_relationship_mutation(&index, OperationType::Mutation, "AddMovieActor"));
    assert!(!is_add_relationship_mutation(&index, OperationType::Mutation, "CreateMovie"));
    assert!(!is_add_relationship_mutation(&index, OperationType::Query, "AddMovieActor"));
}

#[test]
fn test_mutation_params_are_rekeyed() {
    let index = movie_index();
    let document = parse_query(
        r#"mutation { AddMovieActor(moviemovieId: "m1", actorname: "Keanu Reeves") }"#,
    )
    .unwrap();
    let operation = document.operation(None).unwrap();
    let fragments = document.fragments();
    let vars = Variables::new();
    let info = ResolveInfo::new(&index, operation.operation, "AddMovieActor", &vars, &fragments);
    assert!(info.is_add_relationship_mutation());

    let translation = translate_field(&info, &operation.selection_set).unwrap();
    assert_eq!(translation.params.len(), 2);
    assert_eq!(translation.params["movieId"], json!("m1"));
    assert_eq!(translation.params["name"], json!("Keanu Reeves"));
    assert!(!translation.params.contains_key("moviemovieId"));
    assert!(!translation.params.contains_key("actorname"));
}

#[test]
fn test_plain_mutation_params_untouched() {
    let index = movie_index();
    let document = parse_query(r#"mutation { CreateMovie(movieId: "m2", title: "Up") { title } }"#)
        .unwrap();
    let operation = document.operation(None).unwrap();
    let fragments = document.fragments();
    let vars = Variables::new();
    let info = ResolveInfo::new(&index, operation.operation, "CreateMovie", &vars, &fragments);

    let translation = translate_field(&info, &operation.selection_set).unwrap();
    assert_eq!(translation.params["movieId"], json!("m2"));
    assert_eq!(translation.params["title"], json!("Up"));
}

#[test]
fn test_shared_suffix_collision() {
    let index = movie_index();
    let document = parse_query(
        "mutation ($frommovieId: ID!, $tomovieId: ID!) { AddMovieSequel(frommovieId: $frommovieId, tomovieId: $tomovieId) }",
    )
    .unwrap();
    let operation = document.operation(None).unwrap();
    let fragments = document.fragments();
    let vars = match json!({"frommovieId": "m1", "tomovieId": "m2"}) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    };

    // lenient: both sides reduce to `movieId`, the from value is kept
    let info = ResolveInfo::new(&index, OperationType::Mutation, "AddMovieSequel", &vars, &fragments);
    let translation = translate_field(&info, &operation.selection_set).unwrap();
    assert_eq!(translation.params.len(), 1);
    assert_eq!(translation.params["movieId"], json!("m1"));

    // strict: the collision is an error
    let strict = TranslatorConfig {
        strict_relationship_params: true,
        ..Default::default()
    };
    let info = ResolveInfo::new(&index, OperationType::Mutation, "AddMovieSequel", &vars, &fragments)
        .with_config(strict);
    assert_eq!(
        translate_field(&info, &operation.selection_set).unwrap_err(),
        TranslateError::AmbiguousRelationshipParams {
            field: "AddMovieSequel".to_string(),
            key: "movieId".to_string(),
        }
    );
}

#[test]
fn test_explicit_role_keys_avoid_collision() {
    let index = movie_index();
    let document = parse_query(
        r#"mutation { AddMovieSequelExplicit(frommovieId: "m1", tomovieId: "m2") }"#,
    )
    .unwrap();
    let operation = document.operation(None).unwrap();
    let fragments = document.fragments();
    let vars = Variables::new();
    let strict = TranslatorConfig {
        strict_relationship_params: true,
        ..Default::default()
    };
    let info = ResolveInfo::new(
        &index,
        OperationType::Mutation,
        "AddMovieSequelExplicit",
        &vars,
        &fragments,
    )
    .with_config(strict);

    let translation = translate_field(&info, &operation.selection_set).unwrap();
    assert_eq!(translation.params["fromId"], json!("m1"));
    assert_eq!(translation.params["toId"], json!("m2"));
    assert_eq!(translation.params.len(), 2);
}
