use nom::{
    branch::alt,
    character::complete::{char, digit1, one_of},
    combinator::{opt, recognize},
    error::context,
    multi::many0,
    sequence::{delimited, preceded, separated_pair},
    Parser,
};

use super::{
    ast::{Argument, Directive, Value},
    common::{
        check_depth, ignored, parse_name, parse_owned_name, parse_string_literal, ws, PResult,
    },
    errors::GraphQLParsingError,
};

/// Parses any input value, variables included.
pub fn parse_value(input: &str) -> PResult<'_, Value> {
    parse_value_at(input, 0)
}

fn parse_value_at<'a>(input: &'a str, depth: usize) -> PResult<'a, Value> {
    check_depth(input, depth)?;
    alt((
        parse_variable,
        parse_number,
        parse_string_literal.map(Value::String),
        move |i: &'a str| parse_list(i, depth + 1),
        move |i: &'a str| parse_object(i, depth + 1),
        parse_name_value,
    ))
    .parse(input)
}

fn parse_variable(input: &str) -> PResult<'_, Value> {
    preceded(char('$'), parse_owned_name)
        .map(Value::Variable)
        .parse(input)
}

/// Int or Float; a fraction or exponent part makes it a Float.
fn parse_number(input: &str) -> PResult<'_, Value> {
    let (rest, raw) = number_token(input)?;

    if raw.contains(['.', 'e', 'E']) {
        match raw.parse::<f64>() {
            Ok(f) => Ok((rest, Value::Float(f))),
            Err(_) => Err(GraphQLParsingError::failure(input, "Invalid float literal")),
        }
    } else {
        match raw.parse::<i64>() {
            Ok(i) => Ok((rest, Value::Int(i))),
            Err(_) => Err(GraphQLParsingError::failure(input, "Integer literal out of range")),
        }
    }
}

fn number_token(input: &str) -> PResult<'_, &str> {
    recognize((
        opt(char('-')),
        digit1,
        opt((char('.'), digit1)),
        opt((one_of("eE"), opt(one_of("+-")), digit1)),
    ))
    .parse(input)
}

fn parse_name_value(input: &str) -> PResult<'_, Value> {
    let (rest, name) = parse_name(input)?;
    let value = match name {
        "true" => Value::Boolean(true),
        "false" => Value::Boolean(false),
        "null" => Value::Null,
        other => Value::Enum(other.to_string()),
    };
    Ok((rest, value))
}

fn parse_list<'a>(input: &'a str, depth: usize) -> PResult<'a, Value> {
    delimited(
        char('['),
        preceded(ignored, many0(ws(move |i: &'a str| parse_value_at(i, depth)))),
        context("Expected ']' to close list", char(']')),
    )
    .map(Value::List)
    .parse(input)
}

fn parse_object<'a>(input: &'a str, depth: usize) -> PResult<'a, Value> {
    delimited(
        char('{'),
        preceded(ignored, many0(ws(move |i: &'a str| parse_object_field(i, depth)))),
        context("Expected '}' to close input object", char('}')),
    )
    .map(Value::Object)
    .parse(input)
}

fn parse_object_field<'a>(input: &'a str, depth: usize) -> PResult<'a, (String, Value)> {
    separated_pair(
        parse_owned_name,
        ws(char(':')),
        move |i: &'a str| parse_value_at(i, depth),
    )
    .parse(input)
}

fn parse_argument(input: &str) -> PResult<'_, Argument> {
    separated_pair(parse_owned_name, ws(char(':')), parse_value)
        .map(|(name, value)| Argument { name, value })
        .parse(input)
}

/// `(name: value, ...)`
pub fn parse_arguments(input: &str) -> PResult<'_, Vec<Argument>> {
    delimited(
        ws(char('(')),
        many0(ws(parse_argument)),
        context("Expected ')' to close arguments", char(')')),
    )
    .parse(input)
}

/// `@name(args)`
pub fn parse_directive(input: &str) -> PResult<'_, Directive> {
    preceded(char('@'), (parse_owned_name, opt(parse_arguments)))
        .map(|(name, arguments)| Directive {
            name,
            arguments: arguments.unwrap_or_default(),
        })
        .parse(input)
}

pub fn parse_directives(input: &str) -> PResult<'_, Vec<Directive>> {
    many0(ws(parse_directive)).parse(input)
}
