use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_statement},
            utils::parse_comma_separated,
        },
    },
};

/// Classifies a bare word that is not a call name or literal keyword.
///
/// An integer parse is attempted first, then a floating-point parse for
/// words containing a `.`. Anything else is a variable reference.
///
/// # Errors
/// Returns `LiteralTooLarge` for an all-digit word outside the `i64` range.
///
/// # Example
/// ```
/// use eucalyptus::{ast::{Expr, LiteralValue}, interpreter::parser::literal::parse_word};
///
/// assert_eq!(parse_word("42", 1).unwrap(),
///            Expr::Literal { value: LiteralValue::Integer(42),
///                            line:  1, });
/// assert_eq!(parse_word("total", 1).unwrap(),
///            Expr::Variable { name: "total".into(),
///                             line: 1, });
/// ```
pub fn parse_word(word: &str, line: usize) -> ParseResult<Expr> {
    if let Ok(value) = word.parse::<i64>() {
        return Ok(Expr::Literal { value: LiteralValue::Integer(value),
                                  line });
    }
    if word.contains('.')
       && let Ok(value) = word.parse::<f64>()
    {
        return Ok(Expr::Literal { value: LiteralValue::Real(value),
                                  line });
    }
    if is_integer_text(word) {
        return Err(ParseError::LiteralTooLarge { token: word.to_string(),
                                                 line });
    }

    Ok(Expr::Variable { name: word.to_string(),
                        line })
}

/// Returns `true` for an optionally signed run of ASCII digits.
fn is_integer_text(word: &str) -> bool {
    let digits = word.strip_prefix(['+', '-']).unwrap_or(word);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a list literal of the form `[ statement, ... ]`.
///
/// The opening `[` must already have been consumed.
///
/// # Errors
/// Propagates element errors; a comma directly before `]` is a trailing-comma
/// error.
pub fn parse_list_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let elements = parse_comma_separated(tokens, parse_statement, &Token::RBracket, "List", line)?;

    Ok(Expr::Literal { value: LiteralValue::List(elements),
                       line })
}

/// Parses a dict literal of the form `{ "key": statement, ... }`.
///
/// The opening `{` must already have been consumed.
///
/// # Errors
/// - `KeyType` if a key is not a string literal.
/// - `ExpectedColon` if a key is not followed by `:`.
/// - Trailing comma and end-of-input errors as for lists.
pub fn parse_dict_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let entries = parse_comma_separated(tokens, parse_dict_entry, &Token::RBrace, "Dict", line)?;

    Ok(Expr::Literal { value: LiteralValue::Dict(entries),
                       line })
}

/// Parses one `"key": statement` pair of a dict literal.
fn parse_dict_entry<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<(String, Expr)>
    where I: Iterator<Item = &'a Token>
{
    let key = match parse_statement(tokens, line)? {
        Expr::Literal { value: LiteralValue::Str(key),
                        .. } => key,
        _ => return Err(ParseError::KeyType { line }),
    };

    match tokens.next() {
        Some(Token::Colon) => {},
        found => {
            return Err(ParseError::ExpectedColon { found: found.map(ToString::to_string),
                                                   line });
        },
    }

    let value = parse_statement(tokens, line)?;
    Ok((key, value))
}
