use nom::{
    branch::alt,
    character::complete::char,
    combinator::{cut, opt},
    error::context,
    multi::{many0, separated_list1},
    sequence::{delimited, preceded},
    Parser,
};

use super::{
    ast::{
        DirectiveDefinition, FieldDefinition, InputValueDefinition, OperationType,
        SchemaDefinition, TypeDefinition, TypeKind, TypeSystemDefinition,
    },
    common::{keyword, parse_owned_name, skip_description, ws, PResult},
    executable::{parse_operation_type, parse_type},
    value::{parse_directives, parse_value},
};

/// `name: Type = default @directives`
fn parse_input_value_definition(input: &str) -> PResult<'_, InputValueDefinition> {
    let (input, _) = skip_description(input)?;
    let (input, name) = parse_owned_name(input)?;
    let (input, _) = ws(char(':')).parse(input)?;
    let (input, value_type) = context("Expected argument type", cut(parse_type)).parse(input)?;
    let (input, default_value) = opt(preceded(ws(char('=')), parse_value)).parse(input)?;
    let (input, directives) = parse_directives(input)?;
    Ok((
        input,
        InputValueDefinition {
            name,
            value_type,
            default_value,
            directives,
        },
    ))
}

fn parse_arguments_definition(input: &str) -> PResult<'_, Vec<InputValueDefinition>> {
    delimited(
        ws(char('(')),
        many0(ws(parse_input_value_definition)),
        context("Expected ')' to close argument definitions", char(')')),
    )
    .parse(input)
}

fn parse_field_definition(input: &str) -> PResult<'_, FieldDefinition> {
    let (input, _) = skip_description(input)?;
    let (input, name) = parse_owned_name(input)?;
    let (input, arguments) = opt(parse_arguments_definition).parse(input)?;
    let (input, _) = context("Expected ':' after field name", cut(ws(char(':')))).parse(input)?;
    let (input, field_type) = context("Expected field type", cut(parse_type)).parse(input)?;
    let (input, directives) = parse_directives(input)?;
    Ok((
        input,
        FieldDefinition {
            name,
            arguments: arguments.unwrap_or_default(),
            field_type,
            directives,
        },
    ))
}

fn parse_fields_definition(input: &str) -> PResult<'_, Vec<FieldDefinition>> {
    delimited(
        ws(char('{')),
        many0(ws(parse_field_definition)),
        context("Expected '}' to close type fields", char('}')),
    )
    .parse(input)
}

fn parse_input_fields_definition(input: &str) -> PResult<'_, Vec<InputValueDefinition>> {
    delimited(
        ws(char('{')),
        many0(ws(parse_input_value_definition)),
        context("Expected '}' to close input fields", char('}')),
    )
    .parse(input)
}

fn parse_enum_values(input: &str) -> PResult<'_, Vec<String>> {
    let enum_value = (skip_description, parse_owned_name, parse_directives).map(|(_, name, _)| name);
    delimited(
        ws(char('{')),
        many0(ws(enum_value)),
        context("Expected '}' to close enum values", char('}')),
    )
    .parse(input)
}

/// `implements A & B`; the leading `&` is optional.
fn parse_implements(input: &str) -> PResult<'_, Vec<String>> {
    preceded(
        (ws(keyword("implements")), opt(ws(char('&')))),
        separated_list1(ws(char('&')), ws(parse_owned_name)),
    )
    .parse(input)
}

fn parse_type_kind(input: &str) -> PResult<'_, TypeKind> {
    alt((
        keyword("type").map(|_| TypeKind::Object),
        keyword("interface").map(|_| TypeKind::Interface),
        keyword("input").map(|_| TypeKind::InputObject),
        keyword("enum").map(|_| TypeKind::Enum),
        keyword("scalar").map(|_| TypeKind::Scalar),
        keyword("union").map(|_| TypeKind::Union),
    ))
    .parse(input)
}

fn parse_type_definition(input: &str) -> PResult<'_, TypeDefinition> {
    let (input, _) = skip_description(input)?;
    let (input, extension) = opt(ws(keyword("extend"))).parse(input)?;
    let (input, kind) = ws(parse_type_kind).parse(input)?;
    let (input, name) = context("Expected type name", cut(ws(parse_owned_name))).parse(input)?;

    let mut definition = TypeDefinition::new(kind, name);
    definition.extension = extension.is_some();

    let input = match kind {
        TypeKind::Object | TypeKind::Interface => {
            let (input, implements) = opt(parse_implements).parse(input)?;
            let (input, directives) = parse_directives(input)?;
            let (input, fields) = opt(parse_fields_definition).parse(input)?;
            definition.implements = implements.unwrap_or_default();
            definition.directives = directives;
            definition.fields = fields.unwrap_or_default();
            input
        }
        TypeKind::InputObject => {
            let (input, directives) = parse_directives(input)?;
            let (input, fields) = opt(parse_input_fields_definition).parse(input)?;
            definition.directives = directives;
            definition.input_fields = fields.unwrap_or_default();
            input
        }
        TypeKind::Enum => {
            let (input, directives) = parse_directives(input)?;
            let (input, values) = opt(parse_enum_values).parse(input)?;
            definition.directives = directives;
            definition.enum_values = values.unwrap_or_default();
            input
        }
        TypeKind::Scalar => {
            let (input, directives) = parse_directives(input)?;
            definition.directives = directives;
            input
        }
        TypeKind::Union => {
            let (input, directives) = parse_directives(input)?;
            let (input, members) = opt(preceded(
                (ws(char('=')), opt(ws(char('|')))),
                separated_list1(ws(char('|')), ws(parse_owned_name)),
            ))
            .parse(input)?;
            definition.directives = directives;
            definition.union_members = members.unwrap_or_default();
            input
        }
    };

    Ok((input, definition))
}

fn parse_root_operation_type(input: &str) -> PResult<'_, (OperationType, String)> {
    (ws(parse_operation_type), ws(char(':')), ws(parse_owned_name))
        .map(|(operation, _, name)| (operation, name))
        .parse(input)
}

fn parse_schema_definition(input: &str) -> PResult<'_, SchemaDefinition> {
    let (input, _) = skip_description(input)?;
    let (input, _) = opt(ws(keyword("extend"))).parse(input)?;
    let (input, _) = ws(keyword("schema")).parse(input)?;
    let (input, directives) = parse_directives(input)?;
    let (input, roots) = delimited(
        ws(char('{')),
        many0(parse_root_operation_type),
        context("Expected '}' to close schema definition", cut(char('}'))),
    )
    .parse(input)?;

    let mut schema = SchemaDefinition {
        directives,
        ..Default::default()
    };
    for (operation, name) in roots {
        match operation {
            OperationType::Query => schema.query = Some(name),
            OperationType::Mutation => schema.mutation = Some(name),
            OperationType::Subscription => schema.subscription = Some(name),
        }
    }
    Ok((input, schema))
}

/// `directive @name(args) repeatable on FIELD_DEFINITION | OBJECT`
fn parse_directive_definition(input: &str) -> PResult<'_, DirectiveDefinition> {
    let (input, _) = skip_description(input)?;
    let (input, _) = ws(keyword("directive")).parse(input)?;
    let (input, name) =
        context("Expected directive name", cut(preceded(char('@'), parse_owned_name))).parse(input)?;
    let (input, arguments) = opt(parse_arguments_definition).parse(input)?;
    let (input, repeatable) = opt(ws(keyword("repeatable"))).parse(input)?;
    let (input, _) = context("Expected 'on' directive locations", cut(ws(keyword("on")))).parse(input)?;
    let (input, _) = opt(ws(char('|'))).parse(input)?;
    let (input, locations) =
        separated_list1(ws(char('|')), ws(parse_owned_name)).parse(input)?;

    Ok((
        input,
        DirectiveDefinition {
            name,
            arguments: arguments.unwrap_or_default(),
            repeatable: repeatable.is_some(),
            locations,
        },
    ))
}

pub fn parse_type_system_definition(input: &str) -> PResult<'_, TypeSystemDefinition> {
    alt((
        parse_schema_definition.map(TypeSystemDefinition::Schema),
        parse_directive_definition.map(TypeSystemDefinition::Directive),
        parse_type_definition.map(TypeSystemDefinition::Type),
    ))
    .parse(input)
}
