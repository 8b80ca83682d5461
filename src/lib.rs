//! GraphQL to Cypher argument translation
//!
//! This crate resolves GraphQL field arguments and schema directives into the
//! fragments a Cypher statement is built from:
//! - GraphQL document parsing (executable and type-system documents)
//! - A schema index of field arguments, defaults and typed directives
//! - Argument maps, pagination slices and inline filters
//! - Parameter re-keying for relationship-creating mutations

pub mod config;
pub mod cypher_args;
pub mod graphql_parser;
pub mod schema_index;

pub use config::{ConfigError, TranslatorConfig};
pub use cypher_args::{translate_field, FieldTranslation, ResolveInfo, TranslateError};
pub use schema_index::{SchemaError, SchemaIndex};
