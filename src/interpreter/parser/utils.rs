use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by call arguments, list literals and dict
/// literals. It repeatedly calls `parse_item` to parse one element,
/// expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening delimiter.
/// - `parse_item`: Function used to parse each element.
/// - `closing`: The token that terminates the list (`)`, `]` or `}`).
/// - `context`: Name of the construct, used in trailing-comma errors.
/// - `line`: Position of the enclosing top-level call.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - a comma is directly followed by the closing token,
/// - an unexpected token is encountered between items,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>, usize) -> ParseResult<T>,
    closing: &Token,
    context: &'static str,
    line: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = Vec::new();
    if tokens.peek() == Some(&closing) {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens, line)?);
        match tokens.next() {
            Some(Token::Comma) => {
                if tokens.peek() == Some(&closing) {
                    return Err(ParseError::TrailingComma { context, line });
                }
            },
            Some(tok) if tok == closing => break,
            found => return Err(missing_closing(closing, found, line)),
        }
    }
    Ok(items)
}

/// Builds the error for a list that was not closed by `closing`.
fn missing_closing(closing: &Token, found: Option<&Token>, line: usize) -> ParseError {
    match (closing, found) {
        (Token::RParen, found) => {
            ParseError::ExpectedClosingParen { found: found.map(ToString::to_string),
                                               line }
        },
        (Token::RBracket, None) => ParseError::UnexpectedEndOfInput { expected: "']'",
                                                                      line },
        (_, None) => ParseError::UnexpectedEndOfInput { expected: "'}'",
                                                        line },
        (_, Some(tok)) => ParseError::UnexpectedToken { token: tok.to_string(),
                                                        line },
    }
}
