use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{cut, opt, verify},
    error::context,
    multi::many0,
    sequence::{delimited, preceded},
    Parser,
};

use super::{
    ast::{
        ExecutableDefinition, Field, FragmentDefinition, FragmentSpread, InlineFragment,
        OperationDefinition, OperationType, Selection, TypeRef, VariableDefinition,
    },
    common::{check_depth, ignored, keyword, parse_name, parse_owned_name, ws, PResult},
    value::{parse_arguments, parse_directives, parse_value},
};

/// `Name`, `[Type]` or either followed by `!`.
pub fn parse_type(input: &str) -> PResult<'_, TypeRef> {
    parse_type_at(input, 0)
}

fn parse_type_at<'a>(input: &'a str, depth: usize) -> PResult<'a, TypeRef> {
    check_depth(input, depth)?;
    let (input, base) = alt((
        delimited(
            ws(char('[')),
            move |i: &'a str| parse_type_at(i, depth + 1),
            ws(char(']')),
        )
        .map(|inner| TypeRef::List(Box::new(inner))),
        parse_owned_name.map(TypeRef::Named),
    ))
    .parse(input)?;

    let (input, non_null) = opt(ws(char('!'))).parse(input)?;
    let type_ref = match non_null {
        Some(_) => TypeRef::NonNull(Box::new(base)),
        None => base,
    };
    Ok((input, type_ref))
}

pub fn parse_selection_set(input: &str) -> PResult<'_, Vec<Selection>> {
    parse_selection_set_at(input, 0)
}

fn parse_selection_set_at<'a>(input: &'a str, depth: usize) -> PResult<'a, Vec<Selection>> {
    check_depth(input, depth)?;
    delimited(
        ws(char('{')),
        many0(ws(move |i: &'a str| parse_selection(i, depth + 1))),
        context("Expected '}' to close selection set", char('}')),
    )
    .parse(input)
}

fn parse_selection<'a>(input: &'a str, depth: usize) -> PResult<'a, Selection> {
    alt((
        move |i: &'a str| parse_fragment_selection(i, depth),
        (move |i: &'a str| parse_field(i, depth)).map(Selection::Field),
    ))
    .parse(input)
}

fn parse_field<'a>(input: &'a str, depth: usize) -> PResult<'a, Field> {
    let (input, first) = parse_owned_name(input)?;
    let (input, aliased) = opt(preceded(ws(char(':')), parse_owned_name)).parse(input)?;
    let (alias, name) = match aliased {
        Some(name) => (Some(first), name),
        None => (None, first),
    };

    let (input, arguments) = opt(parse_arguments).parse(input)?;
    let (input, directives) = parse_directives(input)?;
    let (input, selection_set) =
        opt(move |i: &'a str| parse_selection_set_at(i, depth)).parse(input)?;

    Ok((
        input,
        Field {
            alias,
            name,
            arguments: arguments.unwrap_or_default(),
            directives,
            selection_set: selection_set.unwrap_or_default(),
        },
    ))
}

/// `...Name`, `... on Type { }` or `... @dir { }`
fn parse_fragment_selection<'a>(input: &'a str, depth: usize) -> PResult<'a, Selection> {
    let (input, _) = preceded(tag("..."), ignored).parse(input)?;

    if let Ok((rest, name)) = fragment_name(input) {
        let (rest, directives) = parse_directives(rest)?;
        return Ok((
            rest,
            Selection::FragmentSpread(FragmentSpread {
                name: name.to_string(),
                directives,
            }),
        ));
    }

    let (input, type_condition) = opt(preceded(ws(keyword("on")), parse_owned_name)).parse(input)?;
    let (input, directives) = parse_directives(input)?;
    let (input, selection_set) = context(
        "Expected selection set for inline fragment",
        cut(move |i: &'a str| parse_selection_set_at(i, depth)),
    )
    .parse(input)?;

    Ok((
        input,
        Selection::InlineFragment(InlineFragment {
            type_condition,
            directives,
            selection_set,
        }),
    ))
}

/// Any name except the `on` keyword.
fn fragment_name(input: &str) -> PResult<'_, &str> {
    verify(parse_name, |name: &str| name != "on").parse(input)
}

pub(super) fn parse_operation_type(input: &str) -> PResult<'_, OperationType> {
    alt((
        keyword("query").map(|_| OperationType::Query),
        keyword("mutation").map(|_| OperationType::Mutation),
        keyword("subscription").map(|_| OperationType::Subscription),
    ))
    .parse(input)
}

fn parse_variable_definition(input: &str) -> PResult<'_, VariableDefinition> {
    let (input, name) = preceded(char('$'), parse_owned_name).parse(input)?;
    let (input, _) = ws(char(':')).parse(input)?;
    let (input, var_type) = parse_type(input)?;
    let (input, default_value) = opt(preceded(ws(char('=')), parse_value)).parse(input)?;
    let (input, directives) = parse_directives(input)?;
    Ok((
        input,
        VariableDefinition {
            name,
            var_type,
            default_value,
            directives,
        },
    ))
}

fn parse_variable_definitions(input: &str) -> PResult<'_, Vec<VariableDefinition>> {
    delimited(
        ws(char('(')),
        many0(ws(parse_variable_definition)),
        context("Expected ')' to close variable definitions", char(')')),
    )
    .parse(input)
}

fn parse_operation_definition(input: &str) -> PResult<'_, OperationDefinition> {
    // Shorthand `{ ... }` is an anonymous query
    match parse_selection_set(input) {
        Ok((rest, selection_set)) => {
            return Ok((
                rest,
                OperationDefinition {
                    operation: OperationType::Query,
                    name: None,
                    variable_definitions: Vec::new(),
                    directives: Vec::new(),
                    selection_set,
                },
            ));
        }
        Err(nom::Err::Failure(e)) => return Err(nom::Err::Failure(e)),
        Err(_) => {}
    }

    let (input, operation) = ws(parse_operation_type).parse(input)?;
    let (input, name) = opt(ws(parse_owned_name)).parse(input)?;
    let (input, variable_definitions) = opt(parse_variable_definitions).parse(input)?;
    let (input, directives) = parse_directives(input)?;
    let (input, selection_set) = context(
        "Expected selection set for operation",
        cut(parse_selection_set),
    )
    .parse(input)?;

    Ok((
        input,
        OperationDefinition {
            operation,
            name,
            variable_definitions: variable_definitions.unwrap_or_default(),
            directives,
            selection_set,
        },
    ))
}

fn parse_fragment_definition(input: &str) -> PResult<'_, FragmentDefinition> {
    let (input, _) = ws(keyword("fragment")).parse(input)?;
    let (input, name) = context("Expected fragment name", cut(ws(fragment_name))).parse(input)?;
    let (input, _) = context("Expected 'on' type condition", cut(ws(keyword("on")))).parse(input)?;
    let (input, type_condition) = cut(ws(parse_owned_name)).parse(input)?;
    let (input, directives) = parse_directives(input)?;
    let (input, selection_set) = cut(parse_selection_set).parse(input)?;

    Ok((
        input,
        FragmentDefinition {
            name: name.to_string(),
            type_condition,
            directives,
            selection_set,
        },
    ))
}

pub fn parse_executable_definition(input: &str) -> PResult<'_, ExecutableDefinition> {
    alt((
        parse_fragment_definition.map(ExecutableDefinition::Fragment),
        parse_operation_definition.map(ExecutableDefinition::Operation),
    ))
    .parse(input)
}
