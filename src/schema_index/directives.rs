//! Directive lookup on schema fields.
//!
//! Two flavours are offered:
//!
//! - [`directive_args`]: generic extraction of a subset of a directive's argument
//!   values, for any directive name.
//! - A closed registry of directives the translator understands
//!   ([`CypherDirective`], [`RelationDirective`], [`MutationMeta`]), parsed into
//!   typed structs once when the schema index is built.

use serde::{Deserialize, Serialize};
use serde_json::Map as JsonMap;

use super::errors::SchemaError;
use crate::cypher_args::ParamMap;
use crate::graphql_parser::ast::{Directive, Value};

/// First directive with the given name.
pub fn find_directive<'a>(directives: &'a [Directive], name: &str) -> Option<&'a Directive> {
    directives.iter().find(|d| d.name == name)
}

/// Extract the `wanted` arguments of the first `directive_name` directive.
///
/// Names missing from the directive are left out of the result, and a missing
/// directive yields an empty map; the two cases are indistinguishable.
pub fn directive_args(directives: &[Directive], directive_name: &str, wanted: &[&str]) -> ParamMap {
    let mut args = ParamMap::new();
    let Some(directive) = find_directive(directives, directive_name) else {
        return args;
    };

    let no_variables = JsonMap::new();
    for name in wanted {
        if let Some(value) = directive
            .argument(name)
            .and_then(|value| value.to_json(&no_variables))
        {
            args.insert((*name).to_string(), value);
        }
    }
    args
}

/// A directive from the supported set, parsed from its raw usage.
pub trait TypedDirective: Sized {
    const NAME: &'static str;

    fn from_directive(directive: &Directive) -> Result<Self, SchemaError>;

    /// Parse the first matching directive in `directives`, if any.
    fn find(directives: &[Directive]) -> Result<Option<Self>, SchemaError> {
        find_directive(directives, Self::NAME)
            .map(Self::from_directive)
            .transpose()
    }
}

fn invalid(directive: &str, reason: impl Into<String>) -> SchemaError {
    SchemaError::InvalidDirective {
        directive: directive.to_string(),
        type_name: String::new(),
        field_name: String::new(),
        reason: reason.into(),
    }
}

fn optional_str(directive: &Directive, name: &str) -> Result<Option<String>, SchemaError> {
    match directive.argument(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| invalid(&directive.name, format!("argument `{}` must be a string", name))),
    }
}

fn required_str(directive: &Directive, name: &str) -> Result<String, SchemaError> {
    optional_str(directive, name)?
        .ok_or_else(|| invalid(&directive.name, format!("missing required argument `{}`", name)))
}

/// `@cypher(statement: "...")`: the field is computed by a Cypher statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CypherDirective {
    pub statement: String,
}

impl TypedDirective for CypherDirective {
    const NAME: &'static str = "cypher";

    fn from_directive(directive: &Directive) -> Result<Self, SchemaError> {
        Ok(CypherDirective {
            statement: required_str(directive, "statement")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationDirection {
    In,
    Out,
}

/// `@relation(name: "ACTED_IN", direction: "OUT")`: the field follows a relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationDirective {
    pub name: String,
    pub direction: RelationDirection,
}

impl TypedDirective for RelationDirective {
    const NAME: &'static str = "relation";

    fn from_directive(directive: &Directive) -> Result<Self, SchemaError> {
        let name = required_str(directive, "name")?;
        let direction = match optional_str(directive, "direction")? {
            None => RelationDirection::Out,
            Some(d) if d.eq_ignore_ascii_case("out") => RelationDirection::Out,
            Some(d) if d.eq_ignore_ascii_case("in") => RelationDirection::In,
            Some(d) => {
                return Err(invalid(
                    &directive.name,
                    format!("direction must be IN or OUT, got `{}`", d),
                ))
            }
        };
        Ok(RelationDirective { name, direction })
    }
}

/// `@MutationMeta(relationship: "ACTED_IN", from: "Actor", to: "Movie")`
///
/// Declares that a mutation creates a relationship between two node types.
/// `fromParam`/`toParam` name the exact parameter keys for each role; without
/// them the keys are derived from the mutation's declared argument names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationMeta {
    pub relationship: Option<String>,
    pub from: String,
    pub to: String,
    pub from_param: Option<String>,
    pub to_param: Option<String>,
}

impl TypedDirective for MutationMeta {
    const NAME: &'static str = "MutationMeta";

    fn from_directive(directive: &Directive) -> Result<Self, SchemaError> {
        Ok(MutationMeta {
            relationship: optional_str(directive, "relationship")?,
            from: required_str(directive, "from")?,
            to: required_str(directive, "to")?,
            from_param: optional_str(directive, "fromParam")?,
            to_param: optional_str(directive, "toParam")?,
        })
    }
}
