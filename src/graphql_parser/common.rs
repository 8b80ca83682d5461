use nom::{
    bytes::complete::{take_while, take_while1},
    combinator::{recognize, verify},
    sequence::{delimited, pair},
    IResult, Parser,
};

use super::errors::GraphQLParsingError;

pub type PResult<'a, T> = IResult<&'a str, T, GraphQLParsingError<'a>>;

/// Maximum nesting of lists, input objects, list types and selection sets.
/// Deeper documents are rejected instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Fail once a recursive parser goes past [`MAX_NESTING_DEPTH`].
pub fn check_depth(input: &str, depth: usize) -> Result<(), nom::Err<GraphQLParsingError<'_>>> {
    if depth > MAX_NESTING_DEPTH {
        return Err(GraphQLParsingError::failure(input, "Nesting too deep"));
    }
    Ok(())
}

/// Skips insignificant tokens: whitespace, commas, byte order marks and `#` comments.
pub fn ignored(input: &str) -> PResult<'_, ()> {
    let mut rest = input;
    loop {
        let trimmed =
            rest.trim_start_matches(|c: char| c.is_whitespace() || c == ',' || c == '\u{feff}');
        match trimmed.strip_prefix('#') {
            Some(comment) => {
                rest = match comment.find(['\n', '\r']) {
                    Some(end) => &comment[end..],
                    None => "",
                };
            }
            None => return Ok((trimmed, ())),
        }
    }
}

pub fn ws<'a, O, F>(inner: F) -> impl Parser<&'a str, Output = O, Error = GraphQLParsingError<'a>>
where
    F: Parser<&'a str, Output = O, Error = GraphQLParsingError<'a>>,
{
    delimited(ignored, inner, ignored)
}

// /[_A-Za-z][_0-9A-Za-z]*/
pub fn parse_name(input: &str) -> PResult<'_, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))
    .parse(input)
}

pub fn parse_owned_name(input: &str) -> PResult<'_, String> {
    parse_name.map(|name: &str| name.to_string()).parse(input)
}

/// A name that is exactly `word`, so `type` does not match a prefix of `typeName`.
pub fn keyword<'a>(
    word: &'static str,
) -> impl Parser<&'a str, Output = &'a str, Error = GraphQLParsingError<'a>> {
    verify(parse_name, move |name: &str| name == word)
}

/// Parses a `"..."` or `"""..."""` string literal into its value.
pub fn parse_string_literal(input: &str) -> PResult<'_, String> {
    if let Some(rest) = input.strip_prefix("\"\"\"") {
        return match rest.find("\"\"\"") {
            Some(end) => Ok((&rest[end + 3..], block_string_value(&rest[..end]))),
            None => Err(GraphQLParsingError::failure(input, "Unterminated block string")),
        };
    }

    let rest = match input.strip_prefix('"') {
        Some(rest) => rest,
        None => return Err(nom::Err::Error(GraphQLParsingError::new(input, "Expected string"))),
    };

    let mut value = String::new();
    let mut chars = rest.char_indices();
    while let Some((idx, c)) = chars.next() {
        match c {
            '"' => return Ok((&rest[idx + 1..], value)),
            '\n' | '\r' => {
                return Err(GraphQLParsingError::failure(input, "Unterminated string"));
            }
            '\\' => {
                let escaped = match chars.next() {
                    Some((_, 'n')) => '\n',
                    Some((_, 'r')) => '\r',
                    Some((_, 't')) => '\t',
                    Some((_, 'b')) => '\u{0008}',
                    Some((_, 'f')) => '\u{000c}',
                    Some((_, '"')) => '"',
                    Some((_, '\\')) => '\\',
                    Some((_, '/')) => '/',
                    Some((start, 'u')) => {
                        let hex = rest
                            .get(start + 1..start + 5)
                            .filter(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()))
                            .ok_or_else(|| {
                                GraphQLParsingError::failure(input, "Invalid unicode escape")
                            })?;
                        let decoded = u32::from_str_radix(hex, 16)
                            .ok()
                            .and_then(char::from_u32)
                            .ok_or_else(|| {
                                GraphQLParsingError::failure(input, "Invalid unicode escape")
                            })?;
                        for _ in 0..4 {
                            chars.next();
                        }
                        decoded
                    }
                    _ => return Err(GraphQLParsingError::failure(input, "Invalid escape sequence")),
                };
                value.push(escaped);
            }
            other => value.push(other),
        }
    }

    Err(GraphQLParsingError::failure(input, "Unterminated string"))
}

/// Block strings drop their common indentation and surrounding blank lines.
///
/// Only spaces and tabs count as indentation.
fn block_string_value(raw: &str) -> String {
    let raw = raw.replace("\\\"\"\"", "\"\"\"");
    let lines: Vec<&str> = raw.lines().collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !is_blank(line))
        .map(|line| indent_width(line))
        .min()
        .unwrap_or(0);

    let mut out: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                strip_indent(line, usize::MAX)
            } else {
                strip_indent(line, common_indent)
            }
        })
        .collect();

    while out.first().is_some_and(|line| is_blank(line)) {
        out.remove(0);
    }
    while out.last().is_some_and(|line| is_blank(line)) {
        out.pop();
    }
    out.join("\n")
}

fn is_indent(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_blank(line: &str) -> bool {
    line.chars().all(is_indent)
}

fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| is_indent(*c)).count()
}

/// Remove up to `width` leading spaces and tabs.
fn strip_indent(line: &str, width: usize) -> &str {
    let cut = line
        .char_indices()
        .take(width)
        .take_while(|(_, c)| is_indent(*c))
        .last()
        .map_or(0, |(idx, c)| idx + c.len_utf8());
    &line[cut..]
}

/// Optional description string in front of a type system definition.
pub fn skip_description(input: &str) -> PResult<'_, ()> {
    let (input, _) = ignored(input)?;
    if input.starts_with('"') {
        let (input, _) = parse_string_literal(input)?;
        ignored(input)
    } else {
        Ok((input, ()))
    }
}
