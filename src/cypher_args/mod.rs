//! Argument and directive resolution for Cypher generation.
//!
//! Given a field selection, the field's schema metadata and the request
//! variables, this module produces the pieces a Cypher statement is assembled
//! from:
//!
//! - a parameter map ([`parse_args`], [`merged_arguments`])
//! - the `{this: var, ...}` argument map for `@cypher` statements
//!   ([`cypher_directive_args`])
//! - a list slice for `first`/`offset` ([`compute_skip_limit`])
//! - an inline property filter ([`inner_filter_params`])
//!
//! Fragment spreads are expanded first ([`extract_selections`]) and
//! relationship-creating mutations get their endpoint parameters re-keyed
//! ([`fix_params_for_add_relationship_mutation`]). [`translate_field`] runs the
//! whole pipeline for one root field.

pub mod argument_builder;
pub mod argument_parser;
pub mod errors;
pub mod filter;
pub mod fragments;
pub mod literal;
pub mod pagination;
pub mod query_result;
pub mod relationship_params;
pub mod resolve;

pub use argument_builder::{cypher_directive_args, merged_arguments};
pub use argument_parser::{parse_args, ParamMap, Variables};
pub use errors::TranslateError;
pub use filter::{inner_filter_params, inner_filter_params_with};
pub use fragments::extract_selections;
pub use literal::{to_cypher_literal, value_to_filter_literal};
pub use pagination::{compute_skip_limit, compute_skip_limit_with};
pub use query_result::{extract_query_result, Record};
pub use relationship_params::{
    fix_params_for_add_relationship_mutation, is_add_relationship_mutation, is_mutation,
};
pub use resolve::{translate_field, FieldTranslation, ResolveInfo};
