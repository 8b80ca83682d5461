//! Per-field translation entry point.
//!
//! [`ResolveInfo`] carries what an execution engine knows while resolving one
//! root field: the operation kind, the field name, the schema index, request
//! variables and fragments. [`translate_field`] turns that plus the
//! operation's selection set into every Cypher piece the statement builder
//! needs.

use std::slice;

use super::argument_builder::{cypher_directive_args, merged_arguments};
use super::argument_parser::{ParamMap, Variables};
use super::errors::TranslateError;
use super::filter::inner_filter_params_with;
use super::fragments::extract_selections;
use super::pagination::compute_skip_limit_with;
use super::relationship_params::{fix_params_for_add_relationship_mutation, is_add_relationship_mutation};
use crate::config::TranslatorConfig;
use crate::graphql_parser::ast::{FragmentTable, OperationType, Selection};
use crate::schema_index::{is_array_type, type_identifiers, FieldMeta, SchemaIndex};

#[derive(Debug, Clone)]
pub struct ResolveInfo<'a> {
    pub operation: OperationType,
    pub field_name: &'a str,
    pub schema: &'a SchemaIndex,
    pub variables: &'a Variables,
    pub fragments: &'a FragmentTable,
    pub config: TranslatorConfig,
}

impl<'a> ResolveInfo<'a> {
    pub fn new(
        schema: &'a SchemaIndex,
        operation: OperationType,
        field_name: &'a str,
        variables: &'a Variables,
        fragments: &'a FragmentTable,
    ) -> Self {
        ResolveInfo {
            operation,
            field_name,
            schema,
            variables,
            fragments,
            config: TranslatorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TranslatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Schema metadata of the field being resolved.
    pub fn field_meta(&self) -> Result<&'a FieldMeta, TranslateError> {
        self.schema
            .root_field(self.operation, self.field_name)
            .ok_or_else(|| TranslateError::UnknownField {
                operation: self.operation.to_string(),
                field: self.field_name.to_string(),
            })
    }

    pub fn is_add_relationship_mutation(&self) -> bool {
        is_add_relationship_mutation(self.schema, self.operation, self.field_name)
    }
}

/// Everything derived from one root field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldTranslation {
    /// Pattern variable, e.g. `movie`
    pub variable_name: String,
    /// Node label, e.g. `Movie`
    pub type_name: String,
    pub is_list: bool,
    /// Defaults merged with request arguments, re-keyed for relationship mutations
    pub params: ParamMap,
    /// `{this: movie, ...}` map for a `@cypher` statement
    pub argument_fragment: String,
    pub skip_limit: String,
    pub filter: String,
    pub cypher_statement: Option<String>,
}

pub fn translate_field(
    info: &ResolveInfo<'_>,
    selections: &[Selection],
) -> Result<FieldTranslation, TranslateError> {
    let field_meta = info.field_meta()?;
    let flattened = extract_selections(selections, info.fragments)?;

    let head_selection = flattened
        .iter()
        .find(|s| s.as_field().is_some_and(|f| f.name == info.field_name))
        .ok_or_else(|| TranslateError::MissingHeadSelection(info.field_name.to_string()))?;
    let Selection::Field(head) = head_selection else {
        return Err(TranslateError::MissingHeadSelection(info.field_name.to_string()));
    };

    let identifiers = type_identifiers(&field_meta.return_type);

    let mut params = merged_arguments(head, Some(field_meta), info.variables);
    if info.is_add_relationship_mutation() {
        params = fix_params_for_add_relationship_mutation(params, field_meta, &info.config)?;
    }

    let translation = FieldTranslation {
        argument_fragment: cypher_directive_args(
            &identifiers.variable_name,
            head,
            Some(field_meta),
            info.variables,
        ),
        skip_limit: compute_skip_limit_with(head, info.variables, &info.config)?,
        filter: inner_filter_params_with(slice::from_ref(head_selection), &info.config),
        cypher_statement: field_meta.cypher.as_ref().map(|c| c.statement.clone()),
        is_list: is_array_type(&field_meta.return_type),
        variable_name: identifiers.variable_name,
        type_name: identifiers.type_name,
        params,
    };

    log::debug!(
        "Translated {} field `{}` -> ({}:{}) skip/limit `{}` filter `{}`",
        info.operation,
        info.field_name,
        translation.variable_name,
        translation.type_name,
        translation.skip_limit,
        translation.filter
    );

    Ok(translation)
}
