use nom::error::{ContextError, ParseError};
use std::fmt;

/// Parse failure collected while walking a GraphQL document.
///
/// Each entry pairs the remaining input at the failure point with a short
/// description of what the parser expected there.
#[derive(Debug, PartialEq)]
pub struct GraphQLParsingError<'a> {
    pub errors: Vec<(&'a str, &'static str)>,
}

impl<'a> GraphQLParsingError<'a> {
    pub fn new(input: &'a str, message: &'static str) -> Self {
        GraphQLParsingError {
            errors: vec![(input, message)],
        }
    }

    /// Failure that stops `alt` from trying other branches.
    pub fn failure(input: &'a str, message: &'static str) -> nom::Err<Self> {
        nom::Err::Failure(Self::new(input, message))
    }
}

impl<'a> ParseError<&'a str> for GraphQLParsingError<'a> {
    fn from_error_kind(input: &'a str, _kind: nom::error::ErrorKind) -> Self {
        GraphQLParsingError {
            errors: vec![(input, "unexpected token")],
        }
    }

    fn append(input: &'a str, _kind: nom::error::ErrorKind, mut other: Self) -> Self {
        other.errors.push((input, "unexpected token (appended)"));
        other
    }
}

impl<'a> ContextError<&'a str> for GraphQLParsingError<'a> {
    fn add_context(input: &'a str, ctx: &'static str, mut other: Self) -> Self {
        other.errors.push((input, ctx));
        other
    }
}

impl fmt::Display for GraphQLParsingError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (input, ctx) in &self.errors {
            // Only the head of the remaining input is useful in a message
            let snippet: String = input.chars().take(40).collect();
            writeln!(f, "{}: {:?}", ctx, snippet)?;
        }
        Ok(())
    }
}

impl std::error::Error for GraphQLParsingError<'_> {}
