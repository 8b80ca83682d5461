//! GraphQL document parsing.
//!
//! Parses the two document flavours the resolution engine consumes:
//!
//! - **Executable documents** (operations, selection sets, fragments) supplying
//!   the selection tree a field is resolved from.
//! - **Type system documents** (SDL) supplying field arguments, default values and
//!   the directives that carry Cypher mapping hints.
//!
//! Commas, whitespace and `#` comments are insignificant everywhere.

use ast::{ExecutableDocument, SchemaDocument};
use common::{ignored, PResult};
use nom::{multi::many1, sequence::preceded, Parser};

pub mod ast;
mod common;
pub(crate) mod errors;
mod executable;
mod type_system;
mod value;

pub use errors::GraphQLParsingError;

/// Parse an executable document (queries, mutations and fragments).
pub fn parse_query(input: &'_ str) -> Result<ExecutableDocument, GraphQLParsingError<'_>> {
    let (rest, definitions) = finish(
        preceded(ignored, many1(preceded(ignored, executable::parse_executable_definition)))
            .parse(input),
    )?;
    expect_end(rest)?;
    Ok(ExecutableDocument { definitions })
}

/// Parse a type system document (SDL).
pub fn parse_schema(input: &'_ str) -> Result<SchemaDocument, GraphQLParsingError<'_>> {
    let (rest, definitions) = finish(
        many1(preceded(ignored, type_system::parse_type_system_definition)).parse(input),
    )?;
    expect_end(rest)?;
    Ok(SchemaDocument { definitions })
}

/// Parse a single input value such as `{limit: 10}` or `[1, 2]`.
pub fn parse_value(input: &'_ str) -> Result<ast::Value, GraphQLParsingError<'_>> {
    let (rest, value) = finish(preceded(ignored, value::parse_value).parse(input))?;
    expect_end(rest)?;
    Ok(value)
}

fn finish<'a, T>(result: PResult<'a, T>) -> Result<(&'a str, T), GraphQLParsingError<'a>> {
    match result {
        Ok(parsed) => Ok(parsed),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(e),
        Err(nom::Err::Incomplete(_)) => Err(GraphQLParsingError::new("", "Incomplete input")),
    }
}

fn expect_end(rest: &str) -> Result<(), GraphQLParsingError<'_>> {
    let (rest, _) = finish(ignored(rest))?;
    if rest.is_empty() {
        Ok(())
    } else {
        Err(GraphQLParsingError::new(rest, "Unexpected trailing input"))
    }
}
