use std::iter::Peekable;

use crate::{
    ast::{Expr, FunctionCall},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_statement},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a top-level call of the form `name(arg, ...)`.
///
/// The name must be a bare word and must be followed directly by `(`.
///
/// # Errors
/// - `UnexpectedToken` if the statement does not start with a word.
/// - `ExpectedOpeningParen` if the name is not followed by `(`.
/// - Any error raised while parsing the arguments.
pub fn parse_call<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<FunctionCall>
    where I: Iterator<Item = &'a Token>
{
    let name = match tokens.next() {
        Some(Token::Word(name)) => name.clone(),
        Some(tok) => {
            return Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                     line });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { expected: "a function name",
                                                          line });
        },
    };

    match tokens.next() {
        Some(Token::LParen) => {},
        found => {
            return Err(ParseError::ExpectedOpeningParen { name,
                                                          found: found.map(ToString::to_string),
                                                          line });
        },
    }

    let arguments = parse_arguments(tokens, line)?;

    Ok(FunctionCall { name,
                      arguments,
                      line })
}

/// Parses call arguments up to and including the closing `)`.
///
/// The opening `(` must already have been consumed.
pub fn parse_arguments<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a Token>
{
    parse_comma_separated(tokens, parse_statement, &Token::RParen, "function call", line)
}
