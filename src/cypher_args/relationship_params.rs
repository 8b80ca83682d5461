//! Parameter re-keying for relationship-creating mutations.
//!
//! A mutation such as
//!
//! ```graphql
//! AddMovieActor(moviemovieId: ID!, actorname: String!): String
//!   @MutationMeta(relationship: "ACTED_IN", from: "Movie", to: "Actor")
//! ```
//!
//! receives its two endpoint keys under argument names that embed the role's
//! pattern variable (`movie` + `movieId`, `actor` + `name`). The generated
//! statement expects the bare property names, so the values are moved to
//! `movieId` and `name` before execution.
//!
//! The first declared argument belongs to the `from` side and the second to
//! the `to` side. A directive can name the keys directly with
//! `fromParam`/`toParam`, which bypasses the prefix convention.

use super::argument_parser::ParamMap;
use super::errors::TranslateError;
use crate::config::TranslatorConfig;
use crate::graphql_parser::ast::OperationType;
use crate::schema_index::{low_first_letter, FieldMeta, MutationMeta, SchemaIndex};

pub fn is_mutation(operation: OperationType) -> bool {
    operation == OperationType::Mutation
}

/// A mutation field named `add...`/`Add...` that carries `@MutationMeta`.
pub fn is_add_relationship_mutation(
    schema: &SchemaIndex,
    operation: OperationType,
    field_name: &str,
) -> bool {
    is_mutation(operation)
        && (field_name.starts_with("Add") || field_name.starts_with("add"))
        && schema
            .mutation_field(field_name)
            .is_some_and(|field| field.mutation_meta.is_some())
}

pub fn fix_params_for_add_relationship_mutation(
    mut params: ParamMap,
    field_meta: &FieldMeta,
    config: &TranslatorConfig,
) -> Result<ParamMap, TranslateError> {
    let meta = field_meta
        .mutation_meta
        .as_ref()
        .ok_or_else(|| TranslateError::MissingMutationMetadata {
            field: field_meta.name.clone(),
        })?;

    let (from_arg, to_arg) = match field_meta.arguments.as_slice() {
        [from, to, ..] => (from.name.as_str(), to.name.as_str()),
        args => {
            return Err(TranslateError::MissingRelationshipArguments {
                field: field_meta.name.clone(),
                found: args.len(),
            })
        }
    };

    let (from_key, to_key) = role_keys(meta, &field_meta.name, from_arg, to_arg)?;

    if from_key == to_key {
        if config.strict_relationship_params {
            return Err(TranslateError::AmbiguousRelationshipParams {
                field: field_meta.name.clone(),
                key: from_key,
            });
        }
        log::warn!(
            "Add relationship mutation `{}` maps `{}` and `{}` onto the same key `{}`; keeping the from value",
            field_meta.name,
            from_arg,
            to_arg,
            from_key
        );
    }

    let from_value = params.remove(from_arg);
    let to_value = params.remove(to_arg);

    // Written after `to` so the from side wins on a shared key
    if let Some(value) = to_value {
        params.insert(to_key, value);
    }
    if let Some(value) = from_value {
        params.insert(from_key, value);
    }

    log::debug!(
        "Re-keyed relationship params for `{}`: {:?}",
        field_meta.name,
        params.keys().collect::<Vec<_>>()
    );

    Ok(params)
}

/// Target keys for the from and to values.
fn role_keys(
    meta: &MutationMeta,
    field: &str,
    from_arg: &str,
    to_arg: &str,
) -> Result<(String, String), TranslateError> {
    let from_key = match &meta.from_param {
        Some(key) => key.clone(),
        None => strip_role_prefix(field, from_arg, &meta.from)?,
    };
    let to_key = match &meta.to_param {
        Some(key) => key.clone(),
        None => strip_role_prefix(field, to_arg, &meta.to)?,
    };
    Ok((from_key, to_key))
}

fn strip_role_prefix(field: &str, argument: &str, role_type: &str) -> Result<String, TranslateError> {
    let prefix = low_first_letter(role_type);
    argument
        .strip_prefix(prefix.as_str())
        .map(str::to_string)
        .ok_or_else(|| TranslateError::RelationshipParamPrefix {
            field: field.to_string(),
            argument: argument.to_string(),
            prefix,
        })
}
